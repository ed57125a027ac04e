//! # wordgrid - Dictionary and board engine for word-grid games
//!
//! wordgrid answers the two questions a word-grid puzzle keeps asking:
//! which letters can extend a sequence in the dictionary, and can a word be
//! traced on the board.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`dawg`] - Memory-mapped DAWG dictionary and prefix queries
//! - [`grid`] - 4x4 / 5x5 boards, word tracing and board generation
//! - [`solver`] - Every dictionary word on a board, submission checks
//! - [`output`] - Result formatting (terminal and JSON)
//! - [`utils`] - Configuration and encoding helpers
//!
//! ## Quick Start
//!
//! ```no_run
//! use wordgrid::dawg::DawgReader;
//! use wordgrid::grid::Grid;
//! use wordgrid::solver::solve;
//! use std::path::Path;
//!
//! let reader = DawgReader::open(Path::new("sowpods.dawg")).unwrap();
//! assert!(reader.has_child("qu", 'i'));
//!
//! let grid = Grid::parse("catsxxxxdogxxxxx").unwrap();
//! assert!(grid.can_trace("cats"));
//!
//! for word in solve(&reader, &grid, grid.min_word_length()) {
//!     println!("{}", word);
//! }
//! ```
//!
//! ## Dictionary Format
//!
//! The dictionary is a flat array of packed 32-bit records produced by an
//! external generator: a continuation flag, a 7-bit letter and a 24-bit link
//! to the child list. Lookups scan one short sibling list per letter
//! straight out of the mapped file, with no tree built in memory.

pub mod dawg;
pub mod grid;
pub mod output;
pub mod solver;
pub mod utils;
