// acr128s/src/transport/mock.rs

use crate::error::CommError;
use crate::transport::traits::Transport;
use crate::Result;

/// Mock transport for unit tests. It records sent frames and returns queued
/// responses in order; an empty queue behaves like a timeout.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub responses: Vec<Vec<u8>>,
    /// Testing hook: number of receive calls that should fail with Timeout
    pub failures: usize,
    /// Timeouts the engine asked for, one per receive call
    pub timeouts: Vec<u64>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mock pre-seeded with responses.
    pub fn with_responses(responses: Vec<Vec<u8>>) -> Self {
        Self {
            responses,
            ..Self::default()
        }
    }

    /// Set how many subsequent receive calls should fail (for tests).
    pub fn set_failures(&mut self, n: usize) {
        self.failures = n;
    }

    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(resp);
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }
}

impl Transport for MockTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>> {
        self.timeouts.push(timeout_ms);
        if self.failures > 0 {
            self.failures -= 1;
            return Err(CommError::Timeout.into());
        }
        if self.responses.is_empty() {
            Err(CommError::Timeout.into())
        } else {
            Ok(self.responses.remove(0))
        }
    }
}
