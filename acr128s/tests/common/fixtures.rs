// fixtures.rs: commonly used test frames and reader setups

use acr128s::test_support::{SharedTransport, response_frame};
use acr128s::transport::mock::MockTransport;
use acr128s::types::ResponseKind;
use acr128s::{ClassicReader, Reader, ReaderBuilder, Slot};

pub const SAMPLE_UID: [u8; 4] = [0x04, 0x12, 0x34, 0x56];

/// ATR of a contact SAM (ISO 7816-3, T=1)
pub const SAMPLE_ATR: [u8; 11] = [
    0x3B, 0xBE, 0x11, 0x00, 0x00, 0x41, 0x01, 0x38, 0x00, 0x00, 0x00,
];

pub const SAMPLE_KEY: [u8; 6] = [0xFF; 6];

/// GET UID command at sequence 0, PICC slot
pub const GET_UID_FRAME_SEQ0: &str = "026F050000000000000000FFCA0000005F03";

/// PICC field query escape at sequence 0
pub const FIELD_QUERY_FRAME_SEQ0: &str = "026B050000000000000000E000002500AB03";

/// Escape reply at sequence 0 reporting a card in the field
pub const FIELD_PRESENT_REPLY_SEQ0: &str = "0283010000000000000000018303";

/// DataBlock reply at sequence 1 carrying SAMPLE_UID + 90 00
pub const GET_UID_REPLY_SEQ1: &str = "02800600000000010000000412345690006303";

pub fn from_hex(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap()
}

pub fn field_reply(seq: u8, present: bool) -> Vec<u8> {
    response_frame(ResponseKind::Escape, seq, &[present as u8])
}

pub fn get_uid_reply(seq: u8, uid: &[u8]) -> Vec<u8> {
    let mut data = uid.to_vec();
    data.extend_from_slice(&[0x90, 0x00]);
    response_frame(ResponseKind::DataBlock, seq, &data)
}

pub fn ccid_reader(responses: Vec<Vec<u8>>) -> (Reader, SharedTransport) {
    ccid_reader_on(Slot::Picc, responses)
}

pub fn ccid_reader_on(slot: Slot, responses: Vec<Vec<u8>>) -> (Reader, SharedTransport) {
    let shared = SharedTransport::new(MockTransport::with_responses(responses));
    let reader = ReaderBuilder::new()
        .with_transport(Box::new(shared.clone()))
        .slot(slot)
        .build()
        .unwrap();
    (reader, shared)
}

pub fn classic_reader(responses: Vec<Vec<u8>>) -> (ClassicReader, SharedTransport) {
    let shared = SharedTransport::new(MockTransport::with_responses(responses));
    let reader = ReaderBuilder::new()
        .with_transport(Box::new(shared.clone()))
        .build_classic()
        .unwrap();
    (reader, shared)
}
