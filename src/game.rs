//! Game logic and game board.

use core::fmt;
use thiserror::Error;

/// Side length of the board.
const SIZE: usize = 3;

/// The eight winning lines, scanned in order: rows, main diagonal,
/// anti-diagonal, columns.
const LINES: [[(usize, usize); SIZE]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
];

/// Error for a move that violates the rules of the game.
#[derive(Error, Debug, PartialOrd, PartialEq, Clone, Copy, Eq)]
pub enum IllegalMove {
    /// Coordinates outside the board.
    #[error("coordinates ({row}, {col}) are outside the board")]
    OutOfBounds { row: usize, col: usize },
    /// Cell is already taken.
    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },
}

/// A move: the coordinates of a currently empty cell.
#[derive(Debug, PartialOrd, PartialEq, Clone, Copy, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Game with all its state.
#[derive(Debug, PartialOrd, PartialEq, Clone, Copy, Eq)]
pub struct Game {
    board: Board,
    round: usize,
}

impl Game {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            board: Board::new(),
            round: 0,
        }
    }

    /// Plays the given move for the side to move.
    pub fn play(&mut self, mv: Move) -> Result<(), IllegalMove> {
        self.board = self.board.apply(mv)?;
        self.round += 1;
        Ok(())
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Gameboard.
///
/// A plain value type: [`Board::apply`] returns a new board and never touches
/// the old one, so search branches cannot interfere with each other.
#[derive(Debug, PartialOrd, PartialEq, Clone, Copy, Eq, Hash)]
pub struct Board(
    /*
     * Board: rows --> col --> field
     * (row=0,col=0) <==> top left of game board
     */
    [[Option<Player>; SIZE]; SIZE],
);

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[[Option<Player>; SIZE]; SIZE]> for Board {
    fn from(grid: [[Option<Player>; SIZE]; SIZE]) -> Self {
        Self(grid)
    }
}

impl Board {
    #[must_use]
    pub const fn new() -> Self {
        Self([[None; SIZE]; SIZE])
    }

    #[must_use]
    pub const fn grid(&self) -> &[[Option<Player>; SIZE]; SIZE] {
        &self.0
    }

    /// Returns the number of cells occupied by the given player.
    fn count(&self, player: Player) -> usize {
        self.0
            .iter()
            .flatten()
            .filter(|&&cell| cell == Some(player))
            .count()
    }

    /// Returns the side to move.
    ///
    /// Player1 opens and the players alternate strictly, so Player1 moves
    /// whenever both sides hold the same number of cells. Well-defined on
    /// every board, including terminal ones.
    #[must_use]
    pub fn turn(&self) -> Player {
        if self.count(Player::Player1) > self.count(Player::Player2) {
            Player::Player2
        } else {
            Player::Player1
        }
    }

    /// Emits the coordinates of all empty cells, in row-major order.
    ///
    /// The fixed order makes move selection deterministic: among equally good
    /// moves the search keeps the first one emitted here.
    pub fn legal_moves_iter(&self) -> impl Iterator<Item = Move> {
        (0..SIZE)
            .flat_map(|row| (0..SIZE).map(move |col| Move::new(row, col)))
            .filter(|mv| self.0[mv.row][mv.col].is_none())
    }

    /// Returns a new board with the move applied for the side to move.
    ///
    /// The input board is left untouched.
    pub fn apply(&self, mv: Move) -> Result<Self, IllegalMove> {
        if mv.row >= SIZE || mv.col >= SIZE {
            return Err(IllegalMove::OutOfBounds {
                row: mv.row,
                col: mv.col,
            });
        }
        if self.0[mv.row][mv.col].is_some() {
            return Err(IllegalMove::Occupied {
                row: mv.row,
                col: mv.col,
            });
        }

        let mut next = *self;
        next.0[mv.row][mv.col] = Some(self.turn());
        Ok(next)
    }

    /// Check if there is a winner.
    ///
    /// Scans rows, then the two diagonals, then columns; the first line of
    /// three identical marks decides.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        for line in LINES {
            let [(r0, c0), (r1, c1), (r2, c2)] = line;
            if let Some(player) = self.0[r0][c0]
                && self.0[r1][c1] == Some(player)
                && self.0[r2][c2] == Some(player)
            {
                return Some(player);
            }
        }
        None
    }

    /// Returns whether every cell is occupied.
    #[must_use]
    pub fn full(&self) -> bool {
        self.0.iter().flatten().all(Option::is_some)
    }

    /// Returns whether the game is over, i.e., someone won or the board is
    /// full.
    #[must_use]
    pub fn gameover(&self) -> bool {
        self.winner().is_some() || self.full()
    }

    /// Score of the board: +1 if Player1 won, -1 if Player2 won, 0 otherwise.
    ///
    /// Only meaningful when [`Board::gameover`] is true. On a non-terminal
    /// board this returns 0 (no winner yet); callers are expected to check
    /// `gameover` first.
    #[must_use]
    pub fn score(&self) -> i32 {
        match self.winner() {
            Some(Player::Player1) => 1,
            Some(Player::Player2) => -1,
            None => 0,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f, "---------")?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, "|")?;
                }
                let symbol = match cell {
                    None => ' ',
                    Some(Player::Player1) => 'X',
                    Some(Player::Player2) => 'O',
                };
                write!(f, " {symbol} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Copy, Clone, PartialOrd, PartialEq, Eq, Debug, Hash)]
pub enum Player {
    /// X, the opening player.
    Player1,
    /// O.
    Player2,
}

impl Player {
    #[must_use]
    pub fn opponent(self) -> Self {
        if self == Self::Player1 {
            Self::Player2
        } else {
            Self::Player1
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player1 => write!(f, "X"),
            Self::Player2 => write!(f, "O"),
        }
    }
}
