// acr128s/src/protocol/codec.rs

use crate::Result;
use crate::types::{MessageKind, ResponseKind, Slot};

use super::frame::{CommandHeader, ResponseFrame, build_frame};

/// Encode a command of the given kind into a full wire frame.
pub fn encode_command(
    kind: MessageKind,
    sequence: u8,
    slot: Slot,
    payload: &[u8],
) -> Result<Vec<u8>> {
    let header = CommandHeader::new(kind, sequence, slot, payload.len());
    build_frame(&header, payload)
}

/// Decode a full wire frame and return the payload laid out for `kind`.
pub fn extract_payload(kind: ResponseKind, frame: &[u8]) -> Result<Vec<u8>> {
    Ok(ResponseFrame::parse(kind, frame)?.into_payload())
}
