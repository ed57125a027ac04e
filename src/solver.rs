//! Board solving and word checking
//!
//! Combines the dictionary and the grid: the solver walks the board and the
//! DAWG in lockstep, so a branch dies as soon as its letters stop being a
//! dictionary prefix.

use crate::dawg::{DawgReader, ROOT, RecordIndex, TERMINATOR};
use crate::grid::search::{neighbor_offsets, step};
use crate::grid::{Grid, QU_TILE, SearchState};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::time::Instant;

/// Points for a word of a given length
pub fn score(word: &str) -> u32 {
    match word.len() {
        0..=2 => 0,
        3 | 4 => 1,
        5 => 2,
        6 => 3,
        7 => 5,
        _ => 11,
    }
}

/// A found word with its points
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredWord {
    pub word: String,
    pub score: u32,
}

/// All words of a board, see [`solve`]
#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    pub words: Vec<ScoredWord>,
    pub total_score: u32,
}

impl Solution {
    pub fn new(words: Vec<String>) -> Self {
        let words: Vec<ScoredWord> = words
            .into_iter()
            .map(|word| ScoredWord {
                score: score(&word),
                word,
            })
            .collect();
        let total_score = words.iter().map(|w| w.score).sum();
        Self { words, total_score }
    }
}

/// Every dictionary word that traces on `grid` with at least `min_length`
/// letters
///
/// Words are unique and ordered longest first, then alphabetically. A `'q'`
/// tile contributes "qu". Start cells are searched in parallel, each with its
/// own visited flags.
pub fn solve(reader: &DawgReader, grid: &Grid, min_length: usize) -> Vec<String> {
    let start = Instant::now();
    let walker = Walker { reader, grid };

    let found = (0..grid.len())
        .into_par_iter()
        .map(|cell| {
            let mut state = SearchState::new(grid.len());
            let mut prefix = String::new();
            let mut found = BTreeSet::new();
            let pos = grid.position(cell);
            walker.descend(&mut state, &mut prefix, &mut found, ROOT, pos.x, pos.y);
            found
        })
        .reduce(BTreeSet::new, |mut acc, part| {
            acc.extend(part);
            acc
        });

    let mut words: Vec<String> = found
        .into_iter()
        .filter(|word| word.len() >= min_length)
        .collect();
    words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    tracing::debug!(
        side = grid.side(),
        words = words.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Solved board"
    );
    words
}

struct Walker<'a> {
    reader: &'a DawgReader,
    grid: &'a Grid,
}

impl Walker<'_> {
    /// Extend `prefix` with the tile at `(x, y)`, where `list` is the sibling
    /// list of letters that may follow `prefix`
    fn descend(
        &self,
        state: &mut SearchState,
        prefix: &mut String,
        found: &mut BTreeSet<String>,
        list: RecordIndex,
        x: usize,
        y: usize,
    ) {
        let Some(tile) = self.grid.tile(x, y) else {
            return;
        };
        let cell = y * self.grid.side() + x;
        if state.is_visited(cell) {
            return;
        }

        let Some(index) = self.reader.find_record(list, tile) else {
            return;
        };
        let Some(mut next) = self.reader.child_list(index) else {
            return;
        };

        let pushed = if tile == QU_TILE {
            let Some(u) = self.reader.find_record(next, b'u') else {
                return;
            };
            let Some(after) = self.reader.child_list(u) else {
                return;
            };
            next = after;
            prefix.push_str("qu");
            2
        } else {
            prefix.push(tile as char);
            1
        };

        if self.reader.find_record(next, TERMINATOR).is_some() {
            found.insert(prefix.clone());
        }

        state.mark(cell);
        for (dx, dy) in neighbor_offsets() {
            if let Some((nx, ny)) = step(self.grid, x, y, dx, dy) {
                self.descend(state, prefix, found, next, nx, ny);
            }
        }
        state.unmark(cell);

        prefix.truncate(prefix.len() - pushed);
    }
}

/// Why a submitted word scores nothing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    TooShort { min: usize },
    NotInDictionary,
    NotOnBoard,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::TooShort { min } => write!(f, "words must be at least {} letters long", min),
            Rejection::NotInDictionary => write!(f, "not in the dictionary"),
            Rejection::NotOnBoard => write!(f, "cannot be formed on this board"),
        }
    }
}

impl std::error::Error for Rejection {}

/// Validate a player's word against the board and return its points
pub fn check_word(reader: &DawgReader, grid: &Grid, word: &str) -> Result<u32, Rejection> {
    let min = grid.min_word_length();
    if word.len() < min {
        return Err(Rejection::TooShort { min });
    }
    if !reader.is_word(word) {
        return Err(Rejection::NotInDictionary);
    }
    if !grid.can_trace(word) {
        return Err(Rejection::NotOnBoard);
    }
    Ok(score(word))
}
