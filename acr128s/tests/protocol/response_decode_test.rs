#[path = "../common/mod.rs"]
mod common;

use acr128s::FramingError;
use acr128s::protocol::ResponseFrame;
use acr128s::types::ResponseKind;

#[test]
fn get_uid_reply_fields() {
    let raw = common::fixtures::from_hex(common::fixtures::GET_UID_REPLY_SEQ1);
    let parsed = ResponseFrame::parse(ResponseKind::DataBlock, &raw).unwrap();
    assert_eq!(parsed.sequence, 1);
    assert_eq!(parsed.slot, 0);
    assert!(!parsed.command_failed());
    assert_eq!(parsed.data, vec![0x04, 0x12, 0x34, 0x56, 0x90, 0x00]);
}

#[test]
fn parsing_is_idempotent() {
    let raw = common::fixtures::get_uid_reply(7, &common::fixtures::SAMPLE_UID);
    let first = ResponseFrame::parse(ResponseKind::DataBlock, &raw);
    let second = ResponseFrame::parse(ResponseKind::DataBlock, &raw);
    assert_eq!(first, second);

    let bad = &raw[..raw.len() - 1];
    assert_eq!(
        ResponseFrame::parse(ResponseKind::DataBlock, bad),
        ResponseFrame::parse(ResponseKind::DataBlock, bad)
    );
}

#[test]
fn reply_of_other_kind_rejected() {
    let raw = common::fixtures::field_reply(0, true);
    assert!(matches!(
        ResponseFrame::parse(ResponseKind::DataBlock, &raw),
        Err(FramingError::UnexpectedMessage { .. })
    ));
}
