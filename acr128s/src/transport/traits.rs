// acr128s/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts byte I/O away from the protocol engines.
///
/// Implementations must not interpret frames: `receive` returns whatever
/// arrived within the timeout, or an error when nothing usable did.
pub trait Transport {
    /// Send raw bytes to the reader
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Receive raw bytes from the reader with a timeout in milliseconds
    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>>;

    /// One request/response exchange. The default implementation sends and
    /// then receives; transports with a native exchange primitive may
    /// override it.
    fn send_recv(&mut self, data: &[u8], timeout_ms: u64) -> Result<Vec<u8>> {
        self.send(data)?;
        self.receive(timeout_ms)
    }
}
