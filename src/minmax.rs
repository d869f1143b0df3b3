//! Full-depth minmax search with pruning.
//!
//! The game tree is at most 9 plies deep, so the search always runs to
//! terminal boards and never needs a heuristic evaluation. Scores are
//! absolute: +1 means Player1 (X) wins, -1 means Player2 (O) wins, 0 is a
//! draw.

use crate::{Board, Move, Player};
use rayon::prelude::*;

/// Maximizing half of the search, playing on behalf of Player1.
///
/// `bound` is the running best of the minimizing ancestor: as soon as the
/// local best strictly exceeds it, the ancestor can never pick this branch
/// and the remaining moves are skipped. The value returned after such a
/// cutoff is only a lower bound on the true value of the branch.
fn maximize(board: &Board, bound: i32) -> i32 {
    if board.gameover() {
        return board.score();
    }

    let mut best = i32::MIN;
    for mv in board.legal_moves_iter() {
        let next = board.apply(mv).expect("move drawn from legal_moves_iter");
        best = best.max(minimize(&next, best));
        if best > bound {
            return best;
        }
    }
    best
}

/// Minimizing half of the search, playing on behalf of Player2.
///
/// Mirror image of [`maximize`].
fn minimize(board: &Board, bound: i32) -> i32 {
    if board.gameover() {
        return board.score();
    }

    let mut best = i32::MAX;
    for mv in board.legal_moves_iter() {
        let next = board.apply(mv).expect("move drawn from legal_moves_iter");
        best = best.min(maximize(&next, best));
        if best < bound {
            return best;
        }
    }
    best
}

/// Returns the optimal move for the side to move, together with its score.
///
/// On a terminal board there is no move to make and `(None, score)` is
/// returned. Among equally good moves the first one in the enumeration
/// order of [`Board::legal_moves_iter`] wins; the running best doubles as
/// the pruning bound for later siblings, so later branches are searched
/// less the better the moves found so far.
#[must_use]
pub fn minmax_search(board: &Board) -> (Option<Move>, i32) {
    if board.gameover() {
        return (None, board.score());
    }

    let mut best_move = None;
    match board.turn() {
        Player::Player1 => {
            let mut best_score = i32::MIN;
            for mv in board.legal_moves_iter() {
                let next = board.apply(mv).expect("move drawn from legal_moves_iter");
                let score = minimize(&next, best_score);
                if score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
            }
            tracing::debug!(player = %Player::Player1, best = ?best_move, best_score, "minmax search finished");
            (best_move, best_score)
        }
        Player::Player2 => {
            let mut best_score = i32::MAX;
            for mv in board.legal_moves_iter() {
                let next = board.apply(mv).expect("move drawn from legal_moves_iter");
                let score = maximize(&next, best_score);
                if score < best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
            }
            tracing::debug!(player = %Player::Player2, best = ?best_move, best_score, "minmax search finished");
            (best_move, best_score)
        }
    }
}

/// Like [`minmax_search`], but evaluates the top-level moves in parallel.
///
/// The subtrees below sibling moves are independent, so they can be searched
/// concurrently. No pruning bound is shared across siblings here, which makes
/// every top-level score exact; the winning move and score are the same as
/// with the sequential search.
#[must_use]
pub fn minmax_search_parallel(board: &Board) -> (Option<Move>, i32) {
    if board.gameover() {
        return (None, board.score());
    }

    let maximizing = board.turn() == Player::Player1;
    let moves: Vec<Move> = board.legal_moves_iter().collect();
    let scores: Vec<i32> = moves
        .par_iter()
        .map(|&mv| {
            let next = board.apply(mv).expect("move drawn from legal_moves_iter");
            if maximizing {
                // Bound that can never trigger a cutoff: the child value is exact.
                minimize(&next, i32::MIN)
            } else {
                maximize(&next, i32::MAX)
            }
        })
        .collect();

    // Sequential fold so the tie-break matches the sequential search: the
    // first move with the best score wins.
    let mut best_move = None;
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
    for (&mv, &score) in moves.iter().zip(&scores) {
        let better = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if better {
            best_score = score;
            best_move = Some(mv);
        }
    }

    (best_move, best_score)
}

#[cfg(test)]
mod tests {
    use super::{minmax_search, minmax_search_parallel};
    use crate::{Board, Move, Player};

    const X: Option<Player> = Some(Player::Player1);
    const O: Option<Player> = Some(Player::Player2);
    const E: Option<Player> = None;

    #[test]
    fn takes_immediate_win_as_first_player() {
        // X completes the top row; everything else loses to O's (1, 2).
        let board = Board::from([[X, X, E], [O, O, E], [E, E, E]]);
        assert_eq!(board.turn(), Player::Player1);

        let (best, score) = minmax_search(&board);
        assert_eq!(best, Some(Move::new(0, 2)));
        assert_eq!(score, 1);
    }

    #[test]
    fn takes_immediate_win_as_second_player() {
        // O to move holds (0, 1) and (1, 1): completing the centre column
        // wins on the spot and dominates blocking X's column threat.
        let board = Board::from([[X, O, X], [X, O, E], [E, E, E]]);
        assert_eq!(board.turn(), Player::Player2);

        let (best, score) = minmax_search(&board);
        assert_eq!(best, Some(Move::new(2, 1)));
        assert_eq!(score, -1);
    }

    #[test]
    fn search_on_terminal_board_yields_no_move() {
        let won = Board::from([[X, X, X], [O, O, E], [E, E, E]]);
        assert_eq!(minmax_search(&won), (None, 1));

        let draw = Board::from([[X, O, X], [X, O, O], [O, X, X]]);
        assert_eq!(minmax_search(&draw), (None, 0));
    }

    #[test]
    fn empty_board_is_a_draw() {
        let (best, score) = minmax_search(&Board::new());
        assert_eq!(score, 0);
        // Every opening draws, so the tie-break keeps the first enumerated move.
        assert_eq!(best, Some(Move::new(0, 0)));
    }

    #[test]
    fn search_result_is_a_legal_move() {
        let board = Board::from([[X, O, E], [E, X, E], [E, E, O]]);
        let (best, _) = minmax_search(&board);
        let best = best.unwrap();
        assert!(board.legal_moves_iter().any(|mv| mv == best));
    }

    #[test]
    fn parallel_search_matches_sequential() {
        let boards = [
            Board::new(),
            Board::from([[X, X, E], [O, O, E], [E, E, E]]),
            Board::from([[X, O, X], [X, O, E], [E, E, E]]),
            Board::from([[X, O, E], [E, X, E], [E, E, O]]),
            Board::from([[E, E, E], [E, X, E], [E, E, E]]),
        ];

        for board in boards {
            assert_eq!(minmax_search_parallel(&board), minmax_search(&board));
        }
    }
}
