// Chain-reaction engine: cascade simulator + alpha-beta move selection
pub mod board;
pub mod error;
pub mod io;
pub mod perft;
pub mod search;
pub mod selfplay;

pub use board::{apply_move, legal_moves, Board, GameState, Move, Player};
pub use error::{Error, Result};
pub use search::minimax_search;
