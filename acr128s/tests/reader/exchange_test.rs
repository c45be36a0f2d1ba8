#[path = "../common/mod.rs"]
mod common;

use acr128s::constants::FRAME_NACK;
use acr128s::test_support::{response_frame, response_frame_with_status, status_frame};
use acr128s::types::ResponseKind;
use acr128s::{Error, Slot, StatusError};

#[test]
fn transmit_uses_configured_slot_and_timeout() {
    let (mut reader, shared) = common::fixtures::ccid_reader_on(
        Slot::Icc,
        vec![response_frame(ResponseKind::DataBlock, 0, &[0x90, 0x00])],
    );
    reader.transmit(&[0x00, 0x84, 0x00, 0x00, 0x08]).unwrap();

    let sent = shared.sent();
    assert_eq!(sent[0][1], 0x6F);
    assert_eq!(sent[0][6], Slot::Icc.as_u8());
    assert_eq!(shared.timeouts(), vec![100]);
}

#[test]
fn deferred_reply_retried_once_with_same_timeout() {
    let (mut reader, shared) = common::fixtures::ccid_reader(vec![
        status_frame(0x00),
        response_frame(ResponseKind::Escape, 0, &[0x01, 0x02]),
    ]);
    assert_eq!(reader.escape(&[0xE0, 0x00, 0x00, 0x18, 0x00]).unwrap(), vec![0x01, 0x02]);

    let sent = shared.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1], FRAME_NACK.to_vec());
    assert_eq!(shared.timeouts(), vec![100, 100]);
}

#[test]
fn each_hard_status_code_fails_immediately() {
    for code in [0xFF, 0xFE, 0xFD, 0x99, 0x42] {
        let (mut reader, shared) = common::fixtures::ccid_reader(vec![status_frame(code)]);
        match reader.power_on() {
            Err(Error::Status(StatusError::Rejected { code: c })) => assert_eq!(c, code),
            other => panic!("expected rejection for {:#04x}, got: {:?}", code, other),
        }
        assert_eq!(shared.sent().len(), 1);
    }
}

#[test]
fn failed_command_bits_reported() {
    let (mut reader, _shared) = common::fixtures::ccid_reader(vec![response_frame_with_status(
        ResponseKind::DataBlock,
        0,
        0x42,
        0xFE,
        &[],
    )]);
    assert!(matches!(
        reader.transmit(&[0x00]),
        Err(Error::Status(StatusError::Slot {
            status: 0x42,
            error: 0xFE,
        }))
    ));
}

#[test]
fn time_extension_bits_are_not_failures() {
    // bStatus bits 6-7 = 2 (time extension requested) is not a failure
    let (mut reader, _shared) = common::fixtures::ccid_reader(vec![response_frame_with_status(
        ResponseKind::DataBlock,
        0,
        0x80,
        0x01,
        &[0x90, 0x00],
    )]);
    assert_eq!(reader.transmit(&[0x00]).unwrap(), vec![0x90, 0x00]);
}
