// acr128s/src/classic/commands.rs
//! Payload builders for the classic-chip dialect.
//!
//! Wire message: ASCII command token immediately followed by the binary
//! payload. No framing, length field or checksum.

use crate::constants::CLASSIC_BLOCKS_PER_SECTOR;
use crate::types::KeyType;

/// Concatenate a command token and its payload.
pub fn encode(token: &str, payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(token.len() + payload.len());
    out.extend_from_slice(token.as_bytes());
    out.extend_from_slice(payload);
    out
}

/// Sector holding `block`.
pub fn sector_of(block: u8) -> u8 {
    block / CLASSIC_BLOCKS_PER_SECTOR
}

/// `[sector, key flag, key...]`
pub fn login_payload(block: u8, key_type: KeyType, key: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 + key.len());
    out.push(sector_of(block));
    out.push(key_type.flag());
    out.extend_from_slice(key);
    out
}

pub fn read_block_payload(block: u8) -> Vec<u8> {
    vec![block]
}

pub fn write_block_payload(block: u8, data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(1 + data.len());
    out.push(block);
    out.extend_from_slice(data);
    out
}
