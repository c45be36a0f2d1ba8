// acr128s/src/classic/card.rs

use log::debug;

use crate::card::Card;
use crate::classic::{ClassicReader, ClassicStatus, commands};
use crate::constants::{CLASSIC_CMD_LOGIN, CLASSIC_CMD_READ_BLOCK, CLASSIC_CMD_WRITE_BLOCK};
use crate::types::{KeyType, Uid};
use crate::Result;

/// Session with a Mifare-Classic-type chip. Holds no block cache: every
/// call goes to the reader.
#[derive(Debug)]
pub struct ClassicCard<'r> {
    card: Card<'r, ClassicReader>,
}

impl<'r> ClassicCard<'r> {
    pub fn new(card: Card<'r, ClassicReader>) -> Self {
        Self { card }
    }

    pub fn uid(&self) -> Option<&Uid> {
        self.card.uid()
    }

    /// Log in to the sector holding `block`. Returns the raw reply.
    pub fn authenticate(&mut self, block: u8, key_type: KeyType, key: &[u8]) -> Result<Vec<u8>> {
        let payload = commands::login_payload(block, key_type, key);
        debug!(
            "classic login: block {} sector {} with {}",
            block,
            commands::sector_of(block),
            key_type
        );
        self.card.reader().send_command(CLASSIC_CMD_LOGIN, &payload)
    }

    /// [`authenticate`](Self::authenticate) with the reply classified.
    pub fn login(&mut self, block: u8, key_type: KeyType, key: &[u8]) -> Result<ClassicStatus> {
        let response = self.authenticate(block, key_type, key)?;
        Ok(ClassicStatus::from_response(&response)?)
    }

    /// Raw reply to a read of one block.
    pub fn read_block(&mut self, block: u8) -> Result<Vec<u8>> {
        self.card
            .reader()
            .send_command(CLASSIC_CMD_READ_BLOCK, &commands::read_block_payload(block))
    }

    /// Raw reply to a write of one block.
    pub fn write_block(&mut self, block: u8, data: &[u8]) -> Result<Vec<u8>> {
        self.card.reader().send_command(
            CLASSIC_CMD_WRITE_BLOCK,
            &commands::write_block_payload(block, data),
        )
    }

    pub fn into_inner(self) -> Card<'r, ClassicReader> {
        self.card
    }
}
