//! Search and evaluation for the draughts engine.

pub mod eval;
pub mod search;

pub use eval::evaluate;
pub use search::minimax::{INF, WIN_SCORE};
pub use search::{MAXIMIZER, SearchResult, Searcher};
