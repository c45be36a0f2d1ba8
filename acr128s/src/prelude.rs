// acr128s/src/prelude.rs

pub use crate::card::{Card, CardInfo};
pub use crate::classic::{ClassicCard, ClassicReader, ClassicStatus};
pub use crate::reader::{CardReader, Reader, ReaderBuilder, ReaderConfig};
pub use crate::transport::Transport;
pub use crate::{Atr, Error, KeyType, Result, Slot, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced};
