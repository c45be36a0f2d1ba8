// acr128s/src/reader/config.rs

use crate::constants::DEFAULT_TIMEOUT_MS;
use crate::types::Slot;

/// Default reader name for the CCID dialect.
pub const DEFAULT_READER_NAME: &str = "ACR128S";

/// Default reader name for the classic dialect.
pub const DEFAULT_CLASSIC_READER_NAME: &str = "Multi-ISO";

/// Per-reader settings fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReaderConfig {
    pub name: String,
    /// Slot used by transmit and power commands. Escape always goes to the
    /// PICC slot.
    pub slot: Slot,
    /// Per-exchange timeout; the NACK retry reuses it.
    pub timeout_ms: u64,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_READER_NAME.to_string(),
            slot: Slot::Picc,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}
