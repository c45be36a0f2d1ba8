// acr128s/src/protocol/frame.rs

use crate::constants::{CCID_HEADER_LEN, ETX, MAX_PAYLOAD_LEN, MIN_FRAME_LEN, STX};
use crate::error::FramingError;
use crate::protocol::checksum::bcc;
use crate::protocol::parser::{byte_at, le_u32_at, slice_at};
use crate::types::{MessageKind, ResponseKind, Slot};
use crate::{Error, Result};

/// Serial CCID command frame helper.
/// Format: [STX(1)] [Header(10)] [Payload(n)] [BCC(1)] [ETX(1)]
/// Header: bMessageType(1) dwLength(4, LE) bSlot(1) bSeq(1) params(3)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandHeader {
    pub kind: MessageKind,
    pub sequence: u8,
    pub slot: Slot,
    pub length: usize,
}

impl CommandHeader {
    pub fn new(kind: MessageKind, sequence: u8, slot: Slot, length: usize) -> Self {
        Self {
            kind,
            sequence,
            slot,
            length,
        }
    }

    /// Encode the 10 header bytes. The three parameter bytes (bBWI and
    /// wLevelParameter, bPowerSelect, or RFU) are zero for every command sent
    /// here; zero bPowerSelect lets the reader pick the ICC voltage.
    pub fn encode(&self) -> [u8; CCID_HEADER_LEN] {
        let len = (self.length as u32).to_le_bytes();
        [
            self.kind.message_type(),
            len[0],
            len[1],
            len[2],
            len[3],
            self.slot.as_u8(),
            self.sequence,
            0x00,
            0x00,
            0x00,
        ]
    }
}

/// Shorthand for `CommandHeader::new(..).encode()`.
pub fn build_header(
    kind: MessageKind,
    sequence: u8,
    slot: Slot,
    length: usize,
) -> [u8; CCID_HEADER_LEN] {
    CommandHeader::new(kind, sequence, slot, length).encode()
}

/// Wrap a header and payload into a full wire frame.
pub fn build_frame(header: &CommandHeader, payload: &[u8]) -> Result<Vec<u8>> {
    if payload.len() > MAX_PAYLOAD_LEN {
        return Err(Error::Encoding {
            max: MAX_PAYLOAD_LEN,
            actual: payload.len(),
        });
    }
    debug_assert_eq!(header.length, payload.len());

    let mut out = Vec::with_capacity(MIN_FRAME_LEN + payload.len());
    out.push(STX);
    out.extend_from_slice(&header.encode());
    out.extend_from_slice(payload);
    out.push(bcc(&out[1..]));
    out.push(ETX);
    Ok(out)
}

/// Decoded reader -> host frame.
/// Header: bMessageType(1) dwLength(4, LE) bSlot(1) bSeq(1) bStatus(1)
///         bError(1) bSpecific(1)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseFrame {
    pub kind: ResponseKind,
    pub slot: u8,
    pub sequence: u8,
    pub status: u8,
    pub error: u8,
    /// bChainParameter / bClockStatus / RFU depending on the kind
    pub specific: u8,
    pub data: Vec<u8>,
}

impl ResponseFrame {
    /// Validate envelope, length, checksum and message type for the
    /// expected response kind.
    pub fn parse(kind: ResponseKind, frame: &[u8]) -> std::result::Result<Self, FramingError> {
        if frame.len() < MIN_FRAME_LEN {
            return Err(FramingError::InvalidLength {
                expected: MIN_FRAME_LEN,
                actual: frame.len(),
            });
        }
        if frame[0] != STX {
            return Err(FramingError::Format("invalid STX"));
        }
        if frame[frame.len() - 1] != ETX {
            return Err(FramingError::Format("invalid ETX"));
        }

        let data_len = le_u32_at(frame, 2)? as usize;
        let required_len = MIN_FRAME_LEN.saturating_add(data_len);
        if frame.len() != required_len {
            return Err(FramingError::InvalidLength {
                expected: required_len,
                actual: frame.len(),
            });
        }

        let bcc_idx = frame.len() - 2;
        let expected = bcc(&frame[1..bcc_idx]);
        let actual = frame[bcc_idx];
        if expected != actual {
            return Err(FramingError::ChecksumMismatch { expected, actual });
        }

        let message_type = byte_at(frame, 1)?;
        if message_type != kind.message_type() {
            return Err(FramingError::UnexpectedMessage {
                expected: kind.message_type(),
                actual: message_type,
            });
        }

        Ok(Self {
            kind,
            slot: frame[6],
            sequence: frame[7],
            status: frame[8],
            error: frame[9],
            specific: frame[10],
            data: slice_at(frame, 1 + CCID_HEADER_LEN, data_len)?.to_vec(),
        })
    }

    /// True when bStatus reports the command as failed.
    pub fn command_failed(&self) -> bool {
        (self.status >> crate::constants::CCID_COMMAND_STATUS_SHIFT) & 0x03
            == crate::constants::CCID_COMMAND_FAILED
    }

    /// Payload as defined for the frame's kind: data for DataBlock and
    /// Escape, the three status bytes for SlotStatus.
    pub fn into_payload(self) -> Vec<u8> {
        match self.kind {
            ResponseKind::DataBlock | ResponseKind::Escape => self.data,
            ResponseKind::SlotStatus => vec![self.status, self.error, self.specific],
        }
    }
}
