// readerctl-rs/readerctl/src/protocol/parser.rs

use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::MalformedResponse {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Return a fixed-size array starting at `idx`, with bounds checking.
pub fn array_at<const N: usize>(data: &[u8], idx: usize) -> Result<[u8; N]> {
    ensure_len(data, idx + N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(&data[idx..idx + N]);
    Ok(out)
}

/// Read a little-endian u32 at given index, with bounds checking.
/// PACE result codes use this byte order.
pub fn le_u32_at(data: &[u8], idx: usize) -> Result<u32> {
    array_at::<4>(data, idx).map(u32::from_le_bytes)
}

/// Read a big-endian u32 at given index, with bounds checking.
/// Feature-list control codes use this byte order.
pub fn be_u32_at(data: &[u8], idx: usize) -> Result<u32> {
    array_at::<4>(data, idx).map(u32::from_be_bytes)
}
