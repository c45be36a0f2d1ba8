use crate::types::{Atr, Uid};

/// Identity snapshot taken when a card session was established.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardInfo {
    /// Contactless chip identified by its UID
    Contactless { uid: Uid },
    /// Contact chip identified by its ATR
    Contact { atr: Atr },
}

impl CardInfo {
    pub fn uid(&self) -> Option<&Uid> {
        match self {
            Self::Contactless { uid } => Some(uid),
            Self::Contact { .. } => None,
        }
    }

    pub fn atr(&self) -> Option<&Atr> {
        match self {
            Self::Contact { atr } => Some(atr),
            Self::Contactless { .. } => None,
        }
    }

    /// Hex rendering of the identifying bytes, for logs.
    pub fn to_hex(&self) -> String {
        match self {
            Self::Contactless { uid } => uid.to_hex(),
            Self::Contact { atr } => atr.to_hex(),
        }
    }
}
