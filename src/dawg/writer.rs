//! DAWG record writer
//!
//! Persists already-laid-out records in the same native-endian form
//! [`DawgReader`](super::DawgReader) maps. Laying out a dictionary is the job
//! of an external generator; this only serializes its output.

use super::types::*;
use crate::utils::write_u32_ne;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes record tables to disk
pub struct DawgWriter;

impl DawgWriter {
    /// Write `records` to `path`, replacing any existing file
    pub fn write(path: &Path, records: &[DawgRecord]) -> Result<()> {
        if records.len() > MAX_RECORDS {
            anyhow::bail!(
                "cannot write {} records, links address at most {}",
                records.len(),
                MAX_RECORDS
            );
        }

        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut file = BufWriter::with_capacity(65536, file);
        Self::write_to(&mut file, records)?;
        file.flush()?;

        tracing::debug!(path = %path.display(), records = records.len(), "Wrote dictionary");
        Ok(())
    }

    /// Serialize `records` into any writer
    pub fn write_to<W: Write>(writer: &mut W, records: &[DawgRecord]) -> Result<()> {
        for record in records {
            write_u32_ne(writer, record.encode())?;
        }
        Ok(())
    }
}
