//! Tic-tac-toe game engine with a perfect computer player.
//!
//! The board model ([`Board`]) is a plain value type: applying a move yields
//! a new board, the side to move is derived from the mark counts, and
//! win/draw detection scans the eight lines of the grid. The computer player
//! ([`minmax`]) searches the full game tree with pruning, so it never loses.

pub mod minmax;

mod ai_player;
mod game;

pub use ai_player::search_best_move;
pub use game::{Board, Game, IllegalMove, Move, Player};
