// acr128s/src/protocol/status.rs

use crate::constants::{
    ETX, STATUS_ACK, STATUS_CHECKSUM_ERROR, STATUS_ETX_ERROR, STATUS_FRAME_MAX_LEN,
    STATUS_LENGTH_ERROR, STATUS_TIMEOUT_ERROR, STX,
};
use crate::error::FramingError;

/// Short reply carrying only a status code.
/// Format: [STX(1)] [Status(1)] [Checksum(1) = Status] [ETX(1)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusFrame {
    code: u8,
}

impl StatusFrame {
    /// True for replies the codec has to treat as status-only.
    pub fn is_status_only(response: &[u8]) -> bool {
        response.len() <= STATUS_FRAME_MAX_LEN
    }

    pub fn decode(frame: &[u8]) -> Result<Self, FramingError> {
        if frame.is_empty() {
            return Err(FramingError::Empty);
        }
        if frame.len() != STATUS_FRAME_MAX_LEN {
            return Err(FramingError::InvalidLength {
                expected: STATUS_FRAME_MAX_LEN,
                actual: frame.len(),
            });
        }
        if frame[0] != STX {
            return Err(FramingError::Format("invalid STX"));
        }
        if frame[3] != ETX {
            return Err(FramingError::Format("invalid ETX"));
        }
        if frame[1] != frame[2] {
            return Err(FramingError::ChecksumMismatch {
                expected: frame[1],
                actual: frame[2],
            });
        }
        Ok(Self { code: frame[1] })
    }

    pub fn code(&self) -> u8 {
        self.code
    }

    /// The reader accepted the command but holds the response back until
    /// asked for it with a NACK frame.
    pub fn is_deferred(&self) -> bool {
        self.code == STATUS_ACK
    }

    pub fn description(&self) -> &'static str {
        match self.code {
            STATUS_ACK => "response deferred",
            STATUS_CHECKSUM_ERROR => "checksum error",
            STATUS_LENGTH_ERROR => "length error",
            STATUS_ETX_ERROR => "ETX error",
            STATUS_TIMEOUT_ERROR => "timeout error",
            _ => "unknown status",
        }
    }
}
