//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize reader-side frame fixtures and a mock transport
//! handle that stays inspectable after it was boxed into a reader.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::constants::{ETX, STX};
use crate::protocol::bcc;
use crate::transport::mock::MockTransport;
use crate::transport::traits::Transport;
use crate::types::ResponseKind;
use crate::Result;

/// Build a well-formed reader -> host frame with zero status bytes.
#[doc(hidden)]
pub fn response_frame(kind: ResponseKind, sequence: u8, data: &[u8]) -> Vec<u8> {
    response_frame_with_status(kind, sequence, 0x00, 0x00, data)
}

/// Like [`response_frame`] with explicit bStatus and bError.
#[doc(hidden)]
pub fn response_frame_with_status(
    kind: ResponseKind,
    sequence: u8,
    status: u8,
    error: u8,
    data: &[u8],
) -> Vec<u8> {
    let len = (data.len() as u32).to_le_bytes();
    let mut out = vec![
        STX,
        kind.message_type(),
        len[0],
        len[1],
        len[2],
        len[3],
        0x00,
        sequence,
        status,
        error,
        0x00,
    ];
    out.extend_from_slice(data);
    out.push(bcc(&out[1..]));
    out.push(ETX);
    out
}

/// Four-byte status-only reply.
#[doc(hidden)]
pub fn status_frame(code: u8) -> Vec<u8> {
    vec![STX, code, code, ETX]
}

/// Replies for a successful PICC connect starting at `sequence`: a field
/// query reporting a card, then GET UID answering `uid` + `90 00`.
#[doc(hidden)]
pub fn picc_connect_frames(sequence: u8, uid: &[u8]) -> Vec<Vec<u8>> {
    let mut get_uid = uid.to_vec();
    get_uid.extend_from_slice(&[0x90, 0x00]);
    vec![
        response_frame(ResponseKind::Escape, sequence, &[0x01]),
        response_frame(ResponseKind::DataBlock, sequence.wrapping_add(1), &get_uid),
    ]
}

/// Cloneable handle over a [`MockTransport`]. One clone goes into the
/// reader, the other stays with the test to inspect sent frames.
#[doc(hidden)]
#[derive(Debug, Clone, Default)]
pub struct SharedTransport {
    inner: Rc<RefCell<MockTransport>>,
}

impl SharedTransport {
    pub fn new(mock: MockTransport) -> Self {
        Self {
            inner: Rc::new(RefCell::new(mock)),
        }
    }

    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.inner.borrow().sent.clone()
    }

    pub fn timeouts(&self) -> Vec<u64> {
        self.inner.borrow().timeouts.clone()
    }

    pub fn push_response(&self, resp: Vec<u8>) {
        self.inner.borrow_mut().push_response(resp);
    }

    pub fn pending(&self) -> usize {
        self.inner.borrow().responses.len()
    }
}

impl Transport for SharedTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.inner.borrow_mut().send(data)
    }

    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>> {
        self.inner.borrow_mut().receive(timeout_ms)
    }
}
