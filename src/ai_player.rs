use crate::{Game, Move};

/// Returns the move the computer player wants to play, or `None` if the
/// game is already over.
#[must_use]
pub fn search_best_move(game: &Game) -> Option<Move> {
    // Optimization: open with the centre, no need to search for that.
    if game.round() == 0 {
        return Some(Move::new(1, 1));
    }

    super::minmax::minmax_search(game.board()).0
}
