// acr128s/src/reader/builder.rs

use crate::classic::ClassicReader;
use crate::reader::config::{DEFAULT_CLASSIC_READER_NAME, DEFAULT_READER_NAME};
use crate::reader::{Reader, ReaderConfig};
use crate::transport::Transport;
use crate::types::Slot;
use crate::{Error, Result};

/// Helper to construct either reader dialect over a transport.
#[derive(Default)]
pub struct ReaderBuilder {
    transport: Option<Box<dyn Transport>>,
    name: Option<String>,
    slot: Slot,
    timeout_ms: Option<u64>,
}

impl ReaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn slot(mut self, slot: Slot) -> Self {
        self.slot = slot;
        self
    }

    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Build a CCID-dialect reader. Requires a transport; otherwise returns
    /// DeviceNotFound.
    pub fn build(self) -> Result<Reader> {
        let transport = self.transport.ok_or(Error::DeviceNotFound)?;
        let defaults = ReaderConfig::default();
        let config = ReaderConfig {
            name: self.name.unwrap_or_else(|| DEFAULT_READER_NAME.to_string()),
            slot: self.slot,
            timeout_ms: self.timeout_ms.unwrap_or(defaults.timeout_ms),
        };
        Ok(Reader::new(transport, config))
    }

    /// Build a classic-dialect reader. The slot setting does not apply.
    pub fn build_classic(self) -> Result<ClassicReader> {
        let transport = self.transport.ok_or(Error::DeviceNotFound)?;
        let name = self
            .name
            .unwrap_or_else(|| DEFAULT_CLASSIC_READER_NAME.to_string());
        let reader = ClassicReader::new(transport, name);
        Ok(match self.timeout_ms {
            Some(ms) => reader.with_timeout(ms),
            None => reader,
        })
    }
}
