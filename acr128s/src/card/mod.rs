// acr128s/src/card/mod.rs

use log::debug;

use crate::constants::APDU_GET_ATS;
use crate::reader::{CardReader, Reader, strip_success_trailer};
use crate::types::{Atr, Uid};
use crate::Result;

mod info;
pub use info::CardInfo;

/// An established card session.
///
/// The handle borrows the reader that produced it for as long as it lives,
/// so no other command can interleave with the session. Every operation
/// dispatches back into that reader.
pub struct Card<'r, R: CardReader + ?Sized> {
    reader: &'r mut R,
    info: CardInfo,
}

impl<'r, R: CardReader + ?Sized> Card<'r, R> {
    pub(crate) fn new(reader: &'r mut R, info: CardInfo) -> Self {
        Self { reader, info }
    }

    pub fn info(&self) -> &CardInfo {
        &self.info
    }

    /// UID of a contactless card; `None` for contact cards.
    pub fn uid(&self) -> Option<&Uid> {
        self.info.uid()
    }

    /// ATR of a contact card; `None` for contactless cards.
    pub fn atr(&self) -> Option<&Atr> {
        self.info.atr()
    }

    /// Send a command to the card and return the raw reply.
    pub fn apdu(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        self.reader.transmit(command)
    }

    pub fn reader(&mut self) -> &mut R {
        &mut *self.reader
    }

    pub fn disconnect(self) -> Result<()> {
        debug!("{}: card {} released", self.reader.name(), self.info.to_hex());
        Ok(())
    }
}

impl Card<'_, Reader> {
    /// Answer To Select of an ISO 14443-4 chip, without the status word.
    pub fn ats(&mut self) -> Result<Vec<u8>> {
        let response = self.reader.transmit(&APDU_GET_ATS)?;
        Ok(strip_success_trailer(&response)?.to_vec())
    }

    /// Power the slot down, ending the session.
    pub fn power_off(self) -> Result<Vec<u8>> {
        self.reader.power_off()
    }
}

impl<R: CardReader + ?Sized> std::fmt::Debug for Card<'_, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Card")
            .field("reader", &self.reader.name())
            .field("info", &self.info)
            .finish()
    }
}
