// acr128s/src/reader/mod.rs
//! CCID-style command engine and the capability trait shared by both
//! reader dialects.

pub mod builder;
pub mod config;
mod connect;
pub mod handle;

pub use builder::ReaderBuilder;
pub use config::ReaderConfig;
pub use handle::Reader;

pub(crate) use connect::strip_success_trailer;

use crate::card::Card;
use crate::Result;

/// What callers need from a reader regardless of its wire dialect.
pub trait CardReader {
    /// Human-readable reader name used in logs.
    fn name(&self) -> &str;

    /// Exchange one command with the chip and return its raw reply.
    fn transmit(&mut self, command: &[u8]) -> Result<Vec<u8>>;

    /// Establish a card session using the dialect's default handshake.
    fn connect_card(&mut self) -> Result<Card<'_, Self>>;
}
