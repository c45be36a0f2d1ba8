// acr128s/src/protocol/mod.rs
//! Serial CCID framing used by the ACR128S dialect.

pub mod checksum;
pub mod codec;
pub mod frame;
pub mod parser;
pub mod sequence;
pub mod status;

pub use checksum::bcc;
pub use codec::{encode_command, extract_payload};
pub use frame::{CommandHeader, ResponseFrame, build_frame, build_header};
pub use sequence::SequenceTracker;
pub use status::StatusFrame;
