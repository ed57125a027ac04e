//! Shared test fixtures: a tiny dictionary artifact written to a temp dir.

#![allow(dead_code, unused_imports)]

use std::path::PathBuf;
use tempfile::TempDir;
use wordgrid::dawg::DawgWriter;

pub use wordgrid::dawg::fixture::encode_words;

/// Words in the fixture dictionary
pub const WORDS: &[&str] = &[
    "act", "cat", "cats", "do", "dog", "dogs", "god", "gods", "quilt", "quit", "tax",
];

/// A 4x4 board with a handful of the fixture words on it
///
/// ```text
/// c a t s
/// x x x x
/// d o g s
/// q i l t
/// ```
pub const BOARD: &str = "catsxxxxdogsqilt";

/// Write the fixture dictionary and return its directory guard and path
pub fn write_dictionary() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("words.dawg");
    DawgWriter::write(&path, &encode_words(WORDS)).expect("Failed to write dictionary");
    (temp_dir, path)
}
