//! Square letter boards and word tracing
//!
//! - `board`: The [`Grid`] type, parsing and rendering
//! - `search`: Backtracking search for a literal word
//! - `dice`: Classic dice sets and random boards

pub mod board;
pub mod dice;
pub mod search;

pub use board::{Grid, Position, QU_TILE, side_for_len};
pub use dice::generate;
pub use search::{SearchState, can_trace};
