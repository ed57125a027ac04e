//! Types for the packed DAWG record format
//!
//! Every record is one native-endian `u32`:
//!
//! ```text
//!  31  30      24 23                      0
//! +---+----------+-------------------------+
//! | M |  letter  |          link           |
//! +---+----------+-------------------------+
//! ```
//!
//! `M` is set on every record of a sibling list except the last one.
//! [`DawgRecord::decode`] and [`DawgRecord::encode`] are the only code that
//! knows this layout.

use serde::Serialize;

/// Index of a record in the table
pub type RecordIndex = u32;

/// Size of one packed record in bytes
pub const RECORD_SIZE: usize = 4;

/// Index where the root sibling list (first letters of all words) begins
pub const ROOT: RecordIndex = 0;

/// Largest table a 24-bit link can address
pub const MAX_RECORDS: usize = 1 << 24;

/// Letter the artifact generator appends below the last letter of every word
pub const TERMINATOR: u8 = b'$';

const MORE_MASK: u32 = 0x8000_0000;
const LETTER_SHIFT: u32 = 24;
const LETTER_MASK: u32 = 0x7f;
const LINK_MASK: u32 = 0x00ff_ffff;

/// One decoded dictionary record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DawgRecord {
    /// Another record of the same sibling list follows this one
    pub more: bool,
    /// 7-bit ASCII letter
    pub letter: u8,
    /// Start of this letter's child sibling list (0 when it has none)
    pub link: RecordIndex,
}

impl DawgRecord {
    pub fn new(letter: u8, link: RecordIndex, more: bool) -> Self {
        Self { more, letter, link }
    }

    /// Extract the three fields from a packed record
    #[inline]
    pub fn decode(raw: u32) -> Self {
        Self {
            more: raw & MORE_MASK != 0,
            letter: ((raw >> LETTER_SHIFT) & LETTER_MASK) as u8,
            link: raw & LINK_MASK,
        }
    }

    /// Pack the record back into its on-disk form.
    ///
    /// Bits that do not fit the field widths are dropped.
    pub fn encode(&self) -> u32 {
        let more = if self.more { MORE_MASK } else { 0 };
        more | ((self.letter as u32 & LETTER_MASK) << LETTER_SHIFT) | (self.link & LINK_MASK)
    }

    /// Whether this record carries the word terminator
    pub fn is_terminator(&self) -> bool {
        self.letter == TERMINATOR
    }

    pub fn letter_char(&self) -> char {
        self.letter as char
    }
}

/// Convert a query letter to the 7-bit code stored in records.
///
/// Returns `None` for anything outside ASCII, which can never match.
#[inline]
pub fn letter_code(letter: char) -> Option<u8> {
    if letter.is_ascii() { Some(letter as u8) } else { None }
}

/// Summary of a loaded dictionary
#[derive(Debug, Clone, Serialize)]
pub struct DawgStats {
    /// Number of records in the table
    pub record_count: usize,
    /// Size of the artifact in bytes
    pub byte_size: usize,
    /// Letters of the root sibling list in storage order
    pub root_letters: Vec<char>,
}
