//! DAWG reader
//!
//! Provides memory-mapped access to a precompiled dictionary and answers
//! prefix, membership and child-letter queries with a linear scan per letter.

use super::types::*;
use crate::utils::u32_at;
use anyhow::{Context, Result};
use memmap2::Mmap;
use std::fs::File;
use std::ops::Deref;
use std::path::Path;

/// Backing bytes of a loaded table
enum Storage {
    Mapped(Mmap),
    Memory(Vec<u8>),
}

impl Deref for Storage {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Storage::Mapped(mmap) => mmap,
            Storage::Memory(bytes) => bytes,
        }
    }
}

/// Read-only handle to a loaded dictionary
///
/// The table is immutable after loading, so a reader can be shared by
/// reference across threads. Dropping it (or calling [`DawgReader::unload`])
/// releases the backing buffer.
pub struct DawgReader {
    storage: Storage,
    record_count: usize,
}

impl DawgReader {
    /// Open a dictionary artifact
    ///
    /// The whole file is mapped and interpreted as native-endian records in
    /// file order. Link targets are not validated.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open dictionary {}", path.display()))?;
        let len = file
            .metadata()
            .with_context(|| format!("Failed to stat dictionary {}", path.display()))?
            .len();
        Self::check_len(len as usize)
            .with_context(|| format!("Invalid dictionary {}", path.display()))?;

        let mmap = unsafe { Mmap::map(&file)? };
        let reader = Self::with_storage(Storage::Mapped(mmap));

        tracing::debug!(
            path = %path.display(),
            records = reader.record_count,
            "Loaded dictionary"
        );

        Ok(reader)
    }

    /// Build a reader over bytes already in memory
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Self::check_len(bytes.len())?;
        Ok(Self::with_storage(Storage::Memory(bytes)))
    }

    /// Build a reader over decoded records
    pub fn from_records(records: &[DawgRecord]) -> Result<Self> {
        let mut bytes = Vec::with_capacity(records.len() * RECORD_SIZE);
        for record in records {
            bytes.extend_from_slice(&record.encode().to_ne_bytes());
        }
        Self::from_bytes(bytes)
    }

    fn check_len(len: usize) -> Result<()> {
        if len == 0 {
            anyhow::bail!("dictionary contains no records");
        }
        if len % RECORD_SIZE != 0 {
            anyhow::bail!(
                "dictionary length {} is not a multiple of {} bytes",
                len,
                RECORD_SIZE
            );
        }
        if len / RECORD_SIZE > MAX_RECORDS {
            anyhow::bail!(
                "dictionary has {} records, links address at most {}",
                len / RECORD_SIZE,
                MAX_RECORDS
            );
        }
        Ok(())
    }

    fn with_storage(storage: Storage) -> Self {
        let record_count = storage.len() / RECORD_SIZE;
        Self {
            storage,
            record_count,
        }
    }

    /// Release the backing buffer
    pub fn unload(self) {
        tracing::debug!(records = self.record_count, "Unloading dictionary");
        drop(self);
    }

    /// Number of records in the table
    pub fn len(&self) -> usize {
        self.record_count
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }

    /// Decode the record at `index`
    ///
    /// Returns `None` when the index lies outside the table.
    #[inline]
    pub fn record(&self, index: RecordIndex) -> Option<DawgRecord> {
        u32_at(&self.storage, index as usize).map(DawgRecord::decode)
    }

    /// Iterate the sibling list starting at `start`
    ///
    /// Yields records up to and including the first one whose `more` flag is
    /// clear. Stops early if the run leaves the table.
    pub fn siblings(&self, start: RecordIndex) -> Siblings<'_> {
        Siblings {
            reader: self,
            next: Some(start),
        }
    }

    /// Start of the child list below the record at `index`
    ///
    /// A link of 0 would point back at the root list, which is never a valid
    /// target, so it means the record has no children.
    pub fn child_list(&self, index: RecordIndex) -> Option<RecordIndex> {
        match self.record(index)?.link {
            ROOT => None,
            link => Some(link),
        }
    }

    /// Find `letter` in the sibling list beginning at `start`
    pub fn find_record(&self, start: RecordIndex, letter: u8) -> Option<RecordIndex> {
        self.siblings(start)
            .find(|(_, record)| record.letter == letter)
            .map(|(index, _)| index)
    }

    /// Follow `letters` from the root list
    ///
    /// Returns the start of the sibling list reached after the last letter
    /// (the place to enumerate continuations from), or `None` as soon as a
    /// letter is missing. An empty sequence resolves to the root list.
    pub fn resolve_prefix(&self, letters: &str) -> Option<RecordIndex> {
        letters.chars().try_fold(ROOT, |start, ch| {
            let index = self.find_record(start, letter_code(ch)?)?;
            Some(self.record(index)?.link)
        })
    }

    /// Whether a decoded path exists for exactly this letter sequence
    ///
    /// This does not look for the word terminator; use [`DawgReader::is_word`]
    /// for dictionary membership.
    pub fn is_path_present(&self, letters: &str) -> bool {
        self.resolve_prefix(letters).is_some()
    }

    /// Letters that can follow `prefix`, in storage order
    ///
    /// The terminator appears among them when `prefix` is itself a word.
    pub fn children(&self, prefix: &str) -> Vec<char> {
        match self.child_start(prefix) {
            Some(start) => self
                .siblings(start)
                .map(|(_, record)| record.letter_char())
                .collect(),
            None => Vec::new(),
        }
    }

    /// Whether `letter` can follow `prefix`
    pub fn has_child(&self, prefix: &str, letter: char) -> bool {
        let Some(code) = letter_code(letter) else {
            return false;
        };
        self.child_start(prefix)
            .is_some_and(|start| self.find_record(start, code).is_some())
    }

    /// Whether `word` is a complete dictionary word
    pub fn is_word(&self, word: &str) -> bool {
        !word.is_empty() && self.has_child(word, TERMINATOR as char)
    }

    /// Summary of the loaded table
    pub fn stats(&self) -> DawgStats {
        DawgStats {
            record_count: self.record_count,
            byte_size: self.storage.len(),
            root_letters: self.children(""),
        }
    }

    fn child_start(&self, prefix: &str) -> Option<RecordIndex> {
        match self.resolve_prefix(prefix)? {
            ROOT if !prefix.is_empty() => None,
            start => Some(start),
        }
    }
}

/// Iterator over one sibling list, see [`DawgReader::siblings`]
pub struct Siblings<'a> {
    reader: &'a DawgReader,
    next: Option<RecordIndex>,
}

impl Iterator for Siblings<'_> {
    type Item = (RecordIndex, DawgRecord);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next?;
        let record = match self.reader.record(index) {
            Some(record) => record,
            None => {
                self.next = None;
                return None;
            }
        };
        self.next = if record.more { index.checked_add(1) } else { None };
        Some((index, record))
    }
}
