// acr128s/src/lib.rs

//! acr128s
//!
//! Pure Rust protocol engine for ACS ACR128S multi-ISO readers (serial
//! CCID framing) and for Multi-ISO readers speaking the ASCII classic-chip
//! dialect.
#![warn(missing_docs)]

pub mod card;
pub mod classic;
pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod reader;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
