//! Read-only DAWG dictionary
//!
//! A precompiled directed acyclic word graph stored as a flat array of packed
//! 32-bit records. Each node's outgoing letters form a contiguous sibling
//! list, so a lookup costs one short linear scan per letter and needs no
//! in-memory tree.
//!
//! ## Architecture
//!
//! - `types`: Record layout, decoding and constants
//! - `reader`: Memory-mapped loading and prefix queries
//! - `writer`: Serializing record tables
//!
//! ## File Format
//!
//! The artifact is nothing but records in native byte order: no header, no
//! magic number, no checksum. Index 0 starts the root list. Word ends are
//! marked by a `'$'` record below the last letter.

pub mod reader;
pub mod types;
pub mod writer;

#[doc(hidden)]
pub mod fixture;

pub use reader::{DawgReader, Siblings};
pub use types::*;
pub use writer::DawgWriter;
