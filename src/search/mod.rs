pub mod alphabeta;
pub mod eval;

pub use alphabeta::{minimax_search, SearchParams, SearchResult, Searcher, DEFAULT_DEPTH};
pub use eval::{evaluate, signals, Signals};
