//! Backtracking word tracing over a grid
//!
//! A word traces when consecutive letters sit on 8-way adjacent cells and no
//! cell is used twice along the path. A `'q'` tile always stands for "qu".

use super::board::{Grid, Position, QU_TILE};
use std::ops::ControlFlow;

const OFFSETS: [isize; 3] = [-1, 0, 1];

/// Visited flags for one top-level search
///
/// Flags are set before descending into a cell and cleared on the way back,
/// so a cell is never reused within a path but stays available to sibling
/// branches.
pub struct SearchState {
    visited: Vec<bool>,
}

impl SearchState {
    pub fn new(cells: usize) -> Self {
        Self {
            visited: vec![false; cells],
        }
    }

    #[inline]
    pub fn is_visited(&self, cell: usize) -> bool {
        self.visited[cell]
    }

    #[inline]
    pub fn mark(&mut self, cell: usize) {
        self.visited[cell] = true;
    }

    #[inline]
    pub fn unmark(&mut self, cell: usize) {
        self.visited[cell] = false;
    }
}

/// Whether `word` can be traced on the tile string `grid`
///
/// Grids that are not 16 or 25 tiles long never trace anything.
pub fn can_trace(grid: &str, word: &str) -> bool {
    match Grid::parse(grid) {
        Ok(grid) => grid.can_trace(word),
        Err(_) => false,
    }
}

/// Cell reached from `(x, y)` by one step, `None` off the board
#[inline]
pub(crate) fn step(grid: &Grid, x: usize, y: usize, dx: isize, dy: isize) -> Option<(usize, usize)> {
    let nx = x.checked_add_signed(dx)?;
    let ny = y.checked_add_signed(dy)?;
    (nx < grid.side() && ny < grid.side()).then_some((nx, ny))
}

/// All nine offsets around a cell, the cell itself included
pub(crate) fn neighbor_offsets() -> impl Iterator<Item = (isize, isize)> {
    OFFSETS
        .into_iter()
        .flat_map(|dy| OFFSETS.into_iter().map(move |dx| (dx, dy)))
}

impl Grid {
    /// Whether `word` can be traced on this grid
    pub fn can_trace(&self, word: &str) -> bool {
        let mut found = false;
        self.trace(word.as_bytes(), |_| {
            found = true;
            ControlFlow::Break(())
        });
        found
    }

    /// Every distinct cell path that spells `word`
    pub fn find_paths(&self, word: &str) -> Vec<Vec<Position>> {
        let mut paths = Vec::new();
        self.trace(word.as_bytes(), |path| {
            paths.push(path.iter().map(|&cell| self.position(cell)).collect());
            ControlFlow::Continue(())
        });
        paths
    }

    /// Run the search from every start cell, reporting each complete path
    fn trace<F>(&self, word: &[u8], mut on_match: F)
    where
        F: FnMut(&[usize]) -> ControlFlow<()>,
    {
        if word.is_empty() {
            return;
        }

        let mut state = SearchState::new(self.len());
        let mut path = Vec::with_capacity(word.len());

        for y in 0..self.side() {
            for x in 0..self.side() {
                let flow = self.match_cell(&mut state, &mut path, word, 0, x, y, &mut on_match);
                if flow.is_break() {
                    return;
                }
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn match_cell<F>(
        &self,
        state: &mut SearchState,
        path: &mut Vec<usize>,
        word: &[u8],
        mut index: usize,
        x: usize,
        y: usize,
        on_match: &mut F,
    ) -> ControlFlow<()>
    where
        F: FnMut(&[usize]) -> ControlFlow<()>,
    {
        let Some(tile) = self.tile(x, y) else {
            return ControlFlow::Continue(());
        };
        let cell = y * self.side() + x;
        if state.is_visited(cell) || tile != word[index] {
            return ControlFlow::Continue(());
        }

        let last = word.len() - 1;
        if tile == QU_TILE {
            // A lone q cannot end a word, and must be followed by u
            if index == last || word[index + 1] != b'u' {
                return ControlFlow::Continue(());
            }
            index += 1;
        }

        path.push(cell);
        let flow = if index == last {
            on_match(path.as_slice())
        } else {
            state.mark(cell);
            let flow = self.match_neighbors(state, path, word, index + 1, x, y, on_match);
            state.unmark(cell);
            flow
        };
        path.pop();
        flow
    }

    #[allow(clippy::too_many_arguments)]
    fn match_neighbors<F>(
        &self,
        state: &mut SearchState,
        path: &mut Vec<usize>,
        word: &[u8],
        index: usize,
        x: usize,
        y: usize,
        on_match: &mut F,
    ) -> ControlFlow<()>
    where
        F: FnMut(&[usize]) -> ControlFlow<()>,
    {
        for (dx, dy) in neighbor_offsets() {
            if let Some((nx, ny)) = step(self, x, y, dx, dy) {
                self.match_cell(state, path, word, index, nx, ny, on_match)?;
            }
        }
        ControlFlow::Continue(())
    }
}
