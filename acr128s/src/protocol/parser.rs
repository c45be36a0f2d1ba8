// acr128s/src/protocol/parser.rs

use crate::error::FramingError;

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<(), FramingError> {
    if data.len() < min {
        return Err(FramingError::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8, FramingError> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Read a little-endian u32 at `idx` (CCID `dwLength`).
pub fn le_u32_at(data: &[u8], idx: usize) -> Result<u32, FramingError> {
    ensure_len(data, idx + 4)?;
    Ok(u32::from_le_bytes([
        data[idx],
        data[idx + 1],
        data[idx + 2],
        data[idx + 3],
    ]))
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8], FramingError> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Split off a trailing ISO 7816 status word, returning (body, sw1 sw2).
pub fn split_trailer(data: &[u8]) -> Option<(&[u8], [u8; 2])> {
    if data.len() < 2 {
        return None;
    }
    let (body, sw) = data.split_at(data.len() - 2);
    Some((body, [sw[0], sw[1]]))
}
