use std::io::{self, Write};

/// Decode the `index`-th native-endian u32 from a byte slice
/// Returns None when the slice is too short
#[inline]
pub fn u32_at(buf: &[u8], index: usize) -> Option<u32> {
    let start = index.checked_mul(4)?;
    let bytes = buf.get(start..start.checked_add(4)?)?;
    Some(u32::from_ne_bytes(bytes.try_into().ok()?))
}

/// Write a u32 in native byte order
pub fn write_u32_ne<W: Write>(writer: &mut W, value: u32) -> io::Result<()> {
    writer.write_all(&value.to_ne_bytes())
}

/// Read a u32 in native byte order
#[cfg(test)]
pub(crate) fn read_u32_ne<R: io::Read>(reader: &mut R) -> io::Result<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_ne_bytes(buf))
}
