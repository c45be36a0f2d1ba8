// acr128s/src/reader/handle.rs

use log::{debug, trace, warn};

use crate::card::Card;
use crate::constants::FRAME_NACK;
use crate::error::{FramingError, StatusError};
use crate::protocol::{ResponseFrame, SequenceTracker, StatusFrame, codec};
use crate::reader::{CardReader, ReaderConfig};
use crate::transport::Transport;
use crate::types::{MessageKind, Slot};
use crate::utils::bytes_to_hex_spaced;
use crate::Result;

/// Command engine for the CCID-style dialect.
///
/// Every operation takes `&mut self`: the reader keeps one sequence counter
/// and assumes a single request in flight.
pub struct Reader {
    transport: Box<dyn Transport>,
    config: ReaderConfig,
    sequence: SequenceTracker,
}

impl Reader {
    pub fn new(transport: Box<dyn Transport>, config: ReaderConfig) -> Self {
        Self {
            transport,
            config,
            sequence: SequenceTracker::new(),
        }
    }

    /// Reader with default configuration (PICC slot, 100 ms timeout).
    pub fn with_transport(transport: Box<dyn Transport>) -> Self {
        Self::new(transport, ReaderConfig::default())
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn slot(&self) -> Slot {
        self.config.slot
    }

    /// Sequence number the next frame will carry.
    pub fn next_sequence(&self) -> u8 {
        self.sequence.current()
    }

    /// Send an APDU to the configured slot (PC_to_RDR_XfrBlock).
    pub fn transmit(&mut self, apdu: &[u8]) -> Result<Vec<u8>> {
        self.exchange(MessageKind::XfrBlock, self.config.slot, apdu)
    }

    /// Send a vendor escape command. Always addressed to the PICC slot.
    pub fn escape(&mut self, payload: &[u8]) -> Result<Vec<u8>> {
        self.exchange(MessageKind::Escape, Slot::Picc, payload)
    }

    /// Power the configured slot up and return the ATR.
    pub fn power_on(&mut self) -> Result<Vec<u8>> {
        self.exchange(MessageKind::IccPowerOn, self.config.slot, &[])
    }

    /// Power the configured slot down; returns bStatus, bError, bClockStatus.
    pub fn power_off(&mut self) -> Result<Vec<u8>> {
        self.exchange(MessageKind::IccPowerOff, self.config.slot, &[])
    }

    fn exchange(&mut self, kind: MessageKind, slot: Slot, payload: &[u8]) -> Result<Vec<u8>> {
        // Nothing is sent when the frame cannot be built, so the sequence
        // number is only consumed afterwards.
        let frame = codec::encode_command(kind, self.sequence.current(), slot, payload)?;
        let seq = self.sequence.next();

        let mut response = self.send_recv(&frame)?;

        if StatusFrame::is_status_only(&response) {
            let status = StatusFrame::decode(&response)?;
            if !status.is_deferred() {
                warn!(
                    "{}: {:?} seq={} rejected: {} ({:#04x})",
                    self.config.name,
                    kind,
                    seq,
                    status.description(),
                    status.code()
                );
                return Err(StatusError::Rejected {
                    code: status.code(),
                }
                .into());
            }

            debug!(
                "{}: {:?} seq={} deferred, requesting response",
                self.config.name, kind, seq
            );
            response = self.send_recv(&FRAME_NACK)?;

            if StatusFrame::is_status_only(&response) {
                let status = StatusFrame::decode(&response)?;
                warn!(
                    "{}: {:?} seq={} retry answered with {} ({:#04x})",
                    self.config.name,
                    kind,
                    seq,
                    status.description(),
                    status.code()
                );
                return Err(StatusError::RetryFailed {
                    code: status.code(),
                }
                .into());
            }
        }

        let parsed = ResponseFrame::parse(kind.response_kind(), &response)?;
        if parsed.sequence != seq {
            return Err(FramingError::SequenceMismatch {
                expected: seq,
                actual: parsed.sequence,
            }
            .into());
        }
        if parsed.command_failed() {
            warn!(
                "{}: {:?} seq={} failed in slot: status={:#04x} error={:#04x}",
                self.config.name, kind, seq, parsed.status, parsed.error
            );
            return Err(StatusError::Slot {
                status: parsed.status,
                error: parsed.error,
            }
            .into());
        }

        Ok(parsed.into_payload())
    }

    fn send_recv(&mut self, frame: &[u8]) -> Result<Vec<u8>> {
        trace!("{} -> {}", self.config.name, bytes_to_hex_spaced(frame));
        let response = self.transport.send_recv(frame, self.config.timeout_ms)?;
        trace!("{} <- {}", self.config.name, bytes_to_hex_spaced(&response));
        Ok(response)
    }
}

impl std::fmt::Debug for Reader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reader")
            .field("config", &self.config)
            .field("sequence", &self.sequence.current())
            .finish()
    }
}

impl CardReader for Reader {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn transmit(&mut self, command: &[u8]) -> Result<Vec<u8>> {
        Reader::transmit(self, command)
    }

    /// Connects the chip in the contactless field.
    fn connect_card(&mut self) -> Result<Card<'_, Self>> {
        self.connect_picc()
    }
}
