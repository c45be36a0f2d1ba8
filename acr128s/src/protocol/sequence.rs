// acr128s/src/protocol/sequence.rs

/// Per-reader `bSeq` counter. Wraps at 256 like the wire field.
///
/// The tracker does no locking: the owning reader serialises access through
/// `&mut self`, so only one request is ever in flight.
#[derive(Debug, Default, Clone)]
pub struct SequenceTracker {
    value: u8,
}

impl SequenceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value the next frame will be stamped with.
    pub fn current(&self) -> u8 {
        self.value
    }

    /// Return the current value and advance.
    pub fn next(&mut self) -> u8 {
        let v = self.value;
        self.value = self.value.wrapping_add(1);
        v
    }
}
