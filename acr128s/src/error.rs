// acr128s/src/error.rs

use thiserror::Error;

use crate::utils::bytes_to_hex_spaced;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("device not found")]
    DeviceNotFound,

    #[error("communication error: {0}")]
    Comm(#[from] CommError),

    #[error("payload too long: at most {max} bytes, got {actual}")]
    Encoding { max: usize, actual: usize },

    #[error("framing error: {0}")]
    Framing(#[from] FramingError),

    #[error("reader status error: {0}")]
    Status(#[from] StatusError),

    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Not a failure of the reader: the field was queried and was empty.
    #[error("no card present")]
    NoCard,
}

/// Transport-level failures. Always fatal to the current call.
#[derive(Error, Debug)]
pub enum CommError {
    #[error("operation timed out")]
    Timeout,

    #[error("transport disconnected")]
    Disconnected,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serial")]
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),

    #[error("{step} failed: {source}")]
    Handshake {
        step: &'static str,
        source: Box<Error>,
    },
}

/// Malformed or undersized frames.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FramingError {
    #[error("invalid frame length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("frame format error: {0}")]
    Format(&'static str),

    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    #[error("unexpected message type: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedMessage { expected: u8, actual: u8 },

    #[error("sequence mismatch: sent {expected}, reader answered {actual}")]
    SequenceMismatch { expected: u8, actual: u8 },

    #[error("empty response")]
    Empty,

    #[error("unknown status character {code:#04x}")]
    UnknownStatus { code: u8 },
}

/// Failures reported by the reader itself.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StatusError {
    #[error("reader rejected the frame with status {code:#04x}")]
    Rejected { code: u8 },

    #[error("reader answered the retry request with status {code:#04x}")]
    RetryFailed { code: u8 },

    #[error("slot command failed: status={status:#04x}, error={error:#04x}")]
    Slot { status: u8, error: u8 },
}

/// Semantic violations found while establishing a card session.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("bad ISO 7816 trailer in response [{}]", bytes_to_hex_spaced(.response))]
    BadTrailer { response: Vec<u8> },

    #[error("bad ATR: [{}]", bytes_to_hex_spaced(.response))]
    BadAtr { response: Vec<u8> },
}

impl Error {
    /// Report a failed handshake step as a communication error. Errors that
    /// already are communication errors pass through unchanged.
    pub(crate) fn handshake(step: &'static str, err: Error) -> Error {
        match err {
            Error::Comm(_) => err,
            other => Error::Comm(CommError::Handshake {
                step,
                source: Box::new(other),
            }),
        }
    }

    /// True for transport failures and timeouts.
    pub fn is_comm(&self) -> bool {
        matches!(self, Error::Comm(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
