// acr128s/src/transport/serial.rs

#![cfg(feature = "serial")]

use std::io::{ErrorKind, Read, Write};
use std::time::Duration;

use log::trace;
use serialport::SerialPort;

use crate::constants::{ETX, MIN_FRAME_LEN, STATUS_FRAME_MAX_LEN, STX};
use crate::error::CommError;
use crate::transport::traits::Transport;
use crate::Result;

/// Default line speed of ACR128S readers.
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Transport over an RS-232 / USB-serial port.
///
/// `receive` returns as soon as a complete CCID or status frame is buffered;
/// any other reply (e.g. the classic dialect) is returned once the line has
/// been quiet for the timeout.
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
}

impl SerialTransport {
    pub fn open(path: &str, baud_rate: u32) -> Result<Self> {
        let port = serialport::new(path, baud_rate)
            .timeout(Duration::from_millis(crate::constants::DEFAULT_TIMEOUT_MS))
            .open()
            .map_err(CommError::from)?;
        Ok(Self { port })
    }

    /// Wrap an already opened port.
    pub fn from_port(port: Box<dyn SerialPort>) -> Self {
        Self { port }
    }
}

impl std::fmt::Debug for SerialTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerialTransport")
            .field("port", &self.port.name())
            .finish()
    }
}

fn frame_complete(buf: &[u8]) -> bool {
    if buf.first() != Some(&STX) || buf.last() != Some(&ETX) {
        return false;
    }
    if buf.len() == STATUS_FRAME_MAX_LEN {
        return buf[1] == buf[2];
    }
    if buf.len() < MIN_FRAME_LEN {
        return false;
    }
    let declared = u32::from_le_bytes([buf[2], buf[3], buf[4], buf[5]]) as usize;
    buf.len() == MIN_FRAME_LEN + declared
}

impl Transport for SerialTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.port
            .clear(serialport::ClearBuffer::Input)
            .map_err(CommError::from)?;
        self.port.write_all(data).map_err(CommError::from)?;
        self.port.flush().map_err(CommError::from)?;
        Ok(())
    }

    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>> {
        self.port
            .set_timeout(Duration::from_millis(timeout_ms))
            .map_err(CommError::from)?;

        let mut out = Vec::new();
        let mut buf = [0u8; 64];
        loop {
            match self.port.read(&mut buf) {
                Ok(0) => return Err(CommError::Disconnected.into()),
                Ok(n) => {
                    out.extend_from_slice(&buf[..n]);
                    if frame_complete(&out) {
                        break;
                    }
                }
                Err(e) if e.kind() == ErrorKind::TimedOut => {
                    if out.is_empty() {
                        return Err(CommError::Timeout.into());
                    }
                    break;
                }
                Err(e) => return Err(CommError::from(e).into()),
            }
        }
        trace!("serial <- {}", crate::utils::bytes_to_hex_spaced(&out));
        Ok(out)
    }
}
