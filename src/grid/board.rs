use anyhow::Result;
use serde::Serialize;
use std::fmt;

/// Tile that stands for the two letters "qu"
pub const QU_TILE: u8 = b'q';

/// Accepted board sides
pub const SUPPORTED_SIDES: [usize; 2] = [4, 5];

/// A cell coordinate, `x` is the column and `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

/// Square letter board stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Vec<u8>,
    side: usize,
}

impl Grid {
    /// Parse a flat row-major tile string of 16 or 25 letters
    pub fn parse(tiles: &str) -> Result<Self> {
        if !tiles.is_ascii() {
            anyhow::bail!("grid tiles must be ASCII letters");
        }
        let Some(side) = side_for_len(tiles.len()) else {
            anyhow::bail!("grid must have 16 or 25 tiles, got {}", tiles.len());
        };
        Ok(Self {
            tiles: tiles.as_bytes().to_vec(),
            side,
        })
    }

    /// Build a grid from one string per row
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let flat: String = rows.iter().map(AsRef::as_ref).collect();
        let grid = Self::parse(&flat)?;
        if rows.iter().any(|row| row.as_ref().len() != grid.side) {
            anyhow::bail!("every row must have {} tiles", grid.side);
        }
        Ok(grid)
    }

    /// Number of tiles per row
    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at a position, `None` when out of bounds
    #[inline]
    pub fn tile(&self, x: usize, y: usize) -> Option<u8> {
        if x < self.side && y < self.side {
            Some(self.tiles[y * self.side + x])
        } else {
            None
        }
    }

    /// Row-major tiles
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// Position of a flat tile index
    pub fn position(&self, cell: usize) -> Position {
        Position {
            x: cell % self.side,
            y: cell / self.side,
        }
    }

    /// Tiles as one string per row
    pub fn rows(&self) -> Vec<String> {
        self.tiles
            .chunks(self.side)
            .map(|row| String::from_utf8_lossy(row).into_owned())
            .collect()
    }

    /// Shortest word that scores on this board
    pub fn min_word_length(&self) -> usize {
        self.side - 1
    }
}

/// Board side for a tile count, `None` for unsupported sizes
pub fn side_for_len(len: usize) -> Option<usize> {
    SUPPORTED_SIDES.into_iter().find(|side| side * side == len)
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.side) {
            let cells: Vec<String> = row.iter().map(|&tile| tile_label(tile)).collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

/// Printable face of a tile, two columns wide
pub fn tile_label(tile: u8) -> String {
    if tile == QU_TILE {
        "Qu".to_string()
    } else {
        format!("{:<2}", (tile as char).to_ascii_uppercase())
    }
}
