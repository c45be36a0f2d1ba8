// acr128s/src/reader/connect.rs

use log::debug;

use crate::card::{Card, CardInfo};
use crate::constants::{
    APDU_GET_UID, ESCAPE_PICC_FIELD_QUERY, ESCAPE_SAM_SET_GUARD_TIME, ISO7816_SUCCESS,
};
use crate::error::ProtocolError;
use crate::protocol::parser::split_trailer;
use crate::reader::Reader;
use crate::types::{Atr, Uid};
use crate::{Error, Result};

impl Reader {
    /// Connect to a contactless chip in the antenna field.
    ///
    /// Queries the field with an escape command first; GET UID is only sent
    /// when the reader reports a chip present.
    pub fn connect_picc(&mut self) -> Result<Card<'_, Self>> {
        debug!("{}: querying PICC field", self.config().name);
        let field = self
            .escape(&ESCAPE_PICC_FIELD_QUERY)
            .map_err(|e| Error::handshake("PICC field query", e))?;

        match field.last() {
            Some(&present) if present != 0 => {}
            _ => {
                debug!("{}: no PICC in field", self.config().name);
                return Err(Error::NoCard);
            }
        }

        let response = match self.transmit(&APDU_GET_UID) {
            Ok(r) => r,
            Err(e) => {
                debug!("{}: GET UID failed, treating as no card: {}", self.config().name, e);
                return Err(Error::NoCard);
            }
        };

        let uid = Uid::from_bytes(strip_success_trailer(&response)?);
        debug!("{}: PICC connected, UID {}", self.config().name, uid.to_hex());
        Ok(Card::new(self, CardInfo::Contactless { uid }))
    }

    /// Connect to the chip in the SAM socket: set the guard time, power the
    /// slot up and validate the ATR.
    pub fn connect_sam(&mut self) -> Result<Card<'_, Self>> {
        debug!("{}: setting SAM guard time", self.config().name);
        self.escape(&ESCAPE_SAM_SET_GUARD_TIME)
            .map_err(|e| Error::handshake("SAM guard time", e))?;

        let response = self
            .power_on()
            .map_err(|e| Error::handshake("SAM power on", e))?;

        let atr = Atr::try_from(response.as_slice())?;
        debug!("{}: SAM connected, ATR {}", self.config().name, atr.to_hex());
        Ok(Card::new(self, CardInfo::Contact { atr }))
    }
}

/// Split off a `90 00` trailer and return the data before it.
pub(crate) fn strip_success_trailer(response: &[u8]) -> Result<&[u8]> {
    match split_trailer(response) {
        Some((data, trailer)) if trailer == ISO7816_SUCCESS => Ok(data),
        _ => Err(ProtocolError::BadTrailer {
            response: response.to_vec(),
        }
        .into()),
    }
}
