// acr128s/src/types.rs

use derive_more::Display;

use crate::constants;
use crate::error::ProtocolError;
use crate::Error;

/// Chip interface a command frame is addressed to.
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Slot {
    /// Contactless antenna
    #[default]
    #[display(fmt = "PICC")]
    Picc = 0x00,
    /// Contact card slot
    #[display(fmt = "ICC")]
    Icc = 0x01,
    /// Secure access module socket
    #[display(fmt = "SAM")]
    Sam = 0x02,
}

impl Slot {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Host -> reader message kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    XfrBlock,
    Escape,
    IccPowerOn,
    IccPowerOff,
}

impl MessageKind {
    pub fn message_type(self) -> u8 {
        match self {
            Self::XfrBlock => constants::PC_TO_RDR_XFR_BLOCK,
            Self::Escape => constants::PC_TO_RDR_ESCAPE,
            Self::IccPowerOn => constants::PC_TO_RDR_ICC_POWER_ON,
            Self::IccPowerOff => constants::PC_TO_RDR_ICC_POWER_OFF,
        }
    }

    /// Response kind the reader answers this message with.
    pub fn response_kind(self) -> ResponseKind {
        match self {
            Self::XfrBlock | Self::IccPowerOn => ResponseKind::DataBlock,
            Self::Escape => ResponseKind::Escape,
            Self::IccPowerOff => ResponseKind::SlotStatus,
        }
    }
}

/// Reader -> host message kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    DataBlock,
    SlotStatus,
    Escape,
}

impl ResponseKind {
    pub fn message_type(self) -> u8 {
        match self {
            Self::DataBlock => constants::RDR_TO_PC_DATA_BLOCK,
            Self::SlotStatus => constants::RDR_TO_PC_SLOT_STATUS,
            Self::Escape => constants::RDR_TO_PC_ESCAPE,
        }
    }
}

/// UID of a contactless chip (4, 7 or 10 bytes in practice).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid(Vec<u8>);

impl Uid {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.0)
    }
}

/// Answer To Reset of a contact chip. Always starts with 0x3B.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Atr(Vec<u8>);

impl Atr {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.0)
    }
}

impl TryFrom<&[u8]> for Atr {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        match bytes.first() {
            Some(&constants::ATR_INITIAL_BYTE) => Ok(Self(bytes.to_vec())),
            _ => Err(ProtocolError::BadAtr {
                response: bytes.to_vec(),
            }
            .into()),
        }
    }
}

/// Mifare Classic key selector
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum KeyType {
    #[display(fmt = "key A")]
    A,
    #[display(fmt = "key B")]
    B,
}

impl KeyType {
    /// Flag byte sent in a classic login payload.
    pub fn flag(self) -> u8 {
        match self {
            Self::A => constants::CLASSIC_KEY_A,
            Self::B => constants::CLASSIC_KEY_B,
        }
    }
}

/// 0 selects key A, anything else key B.
impl From<u8> for KeyType {
    fn from(raw: u8) -> Self {
        if raw == 0 { Self::A } else { Self::B }
    }
}
