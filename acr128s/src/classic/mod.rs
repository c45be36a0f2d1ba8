// acr128s/src/classic/mod.rs
//! Multi-ISO classic-chip dialect: ASCII command tokens, raw replies.

pub mod card;
pub mod commands;
pub mod status;

pub use card::ClassicCard;
pub use status::ClassicStatus;

use log::{debug, trace};

use crate::card::{Card, CardInfo};
use crate::constants::{CLASSIC_CMD_SELECT, CLASSIC_NO_TAG, DEFAULT_TIMEOUT_MS};
use crate::error::FramingError;
use crate::reader::CardReader;
use crate::reader::config::DEFAULT_CLASSIC_READER_NAME;
use crate::transport::Transport;
use crate::types::Uid;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Reader speaking the classic-chip dialect. Shares nothing with the CCID
/// engine except the transport abstraction.
pub struct ClassicReader {
    transport: Box<dyn Transport>,
    name: String,
    timeout_ms: u64,
}

impl ClassicReader {
    pub fn new(transport: Box<dyn Transport>, name: impl Into<String>) -> Self {
        Self {
            transport,
            name: name.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_transport(transport: Box<dyn Transport>) -> Self {
        Self::new(transport, DEFAULT_CLASSIC_READER_NAME)
    }

    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Send `token` followed by `payload` and return the raw reply.
    pub fn send_command(&mut self, token: &str, payload: &[u8]) -> Result<Vec<u8>> {
        self.exchange(&commands::encode(token, payload))
    }

    /// Select the tag in the field and return its UID.
    pub fn select(&mut self) -> Result<Uid> {
        let response = self.send_command(CLASSIC_CMD_SELECT, &[])?;
        if response.first() == Some(&CLASSIC_NO_TAG) {
            debug!("{}: no tag in field", self.name);
            return Err(Error::NoCard);
        }
        Ok(Uid::from_bytes(&response))
    }

    /// Select a tag and open a classic-chip session on it.
    pub fn connect_classic(&mut self) -> Result<ClassicCard<'_>> {
        Ok(ClassicCard::new(self.connect_card()?))
    }

    fn exchange(&mut self, message: &[u8]) -> Result<Vec<u8>> {
        trace!("{} -> {}", self.name, bytes_to_hex_spaced(message));
        let response = self.transport.send_recv(message, self.timeout_ms)?;
        trace!("{} <- {}", self.name, bytes_to_hex_spaced(&response));
        if response.is_empty() {
            return Err(FramingError::Empty.into());
        }
        Ok(response)
    }
}

impl std::fmt::Debug for ClassicReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassicReader")
            .field("name", &self.name)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

impl CardReader for ClassicReader {
    fn name(&self) -> &str {
        &self.name
    }

    /// `command` is a complete wire message (token and payload).
    fn transmit(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        self.exchange(command)
    }

    fn connect_card(&mut self) -> Result<Card<'_, Self>> {
        let uid = self.select()?;
        debug!("{}: tag selected, UID {}", self.name, uid.to_hex());
        Ok(Card::new(self, CardInfo::Contactless { uid }))
    }
}
