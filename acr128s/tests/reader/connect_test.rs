#[path = "../common/mod.rs"]
mod common;

use acr128s::constants::APDU_GET_UID;
use acr128s::test_support::response_frame;
use acr128s::types::ResponseKind;
use acr128s::{CardInfo, CardReader, Error, ProtocolError, Slot};

#[test]
fn picc_no_card_never_sends_get_uid() {
    let (mut reader, shared) =
        common::fixtures::ccid_reader(vec![common::fixtures::field_reply(0, false)]);
    assert!(matches!(reader.connect_picc(), Err(Error::NoCard)));

    let sent = shared.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent.iter().all(|f| f.get(11..16) != Some(&APDU_GET_UID[..])));
}

#[test]
fn picc_connect_from_captured_frames() {
    let (mut reader, shared) = common::fixtures::ccid_reader(vec![
        common::fixtures::from_hex(common::fixtures::FIELD_PRESENT_REPLY_SEQ0),
        common::fixtures::from_hex(common::fixtures::GET_UID_REPLY_SEQ1),
    ]);

    let card = reader.connect_card().unwrap();
    assert_eq!(
        card.info(),
        &CardInfo::Contactless {
            uid: acr128s::Uid::from_bytes(&common::fixtures::SAMPLE_UID),
        }
    );
    drop(card);

    assert_eq!(
        shared.sent()[0],
        common::fixtures::from_hex(common::fixtures::FIELD_QUERY_FRAME_SEQ0)
    );
}

#[test]
fn sam_atr_must_start_with_3b() {
    let mut bad = common::fixtures::SAMPLE_ATR;
    bad[0] = 0x3A;
    let (mut reader, _shared) = common::fixtures::ccid_reader_on(
        Slot::Sam,
        vec![
            response_frame(ResponseKind::Escape, 0, &[]),
            response_frame(ResponseKind::DataBlock, 1, &bad),
        ],
    );
    match reader.connect_sam() {
        Err(Error::Protocol(ProtocolError::BadAtr { response })) => {
            assert_eq!(response, bad.to_vec())
        }
        other => panic!("expected BadAtr, got: {:?}", other),
    }

    let (mut reader, _shared) = common::fixtures::ccid_reader_on(
        Slot::Sam,
        vec![
            response_frame(ResponseKind::Escape, 0, &[]),
            response_frame(ResponseKind::DataBlock, 1, &common::fixtures::SAMPLE_ATR),
        ],
    );
    let card = reader.connect_sam().unwrap();
    assert_eq!(card.atr().unwrap().as_bytes(), &common::fixtures::SAMPLE_ATR);
}

#[test]
fn sam_empty_power_on_reply_is_bad_atr() {
    let (mut reader, _shared) = common::fixtures::ccid_reader_on(
        Slot::Sam,
        vec![
            response_frame(ResponseKind::Escape, 0, &[]),
            response_frame(ResponseKind::DataBlock, 1, &[]),
        ],
    );
    assert!(matches!(
        reader.connect_sam(),
        Err(Error::Protocol(ProtocolError::BadAtr { .. }))
    ));
}

#[test]
fn session_apdus_follow_connect() {
    let (mut reader, shared) = common::fixtures::ccid_reader(vec![
        common::fixtures::field_reply(0, true),
        common::fixtures::get_uid_reply(1, &common::fixtures::SAMPLE_UID),
        response_frame(ResponseKind::DataBlock, 2, &[0x01, 0x02, 0x90, 0x00]),
    ]);
    {
        let mut card = reader.connect_picc().unwrap();
        assert_eq!(
            card.apdu(&[0xFF, 0xB0, 0x00, 0x01, 0x02]).unwrap(),
            vec![0x01, 0x02, 0x90, 0x00]
        );
        card.disconnect().unwrap();
    }
    assert_eq!(shared.sent().len(), 3);
    assert_eq!(reader.next_sequence(), 3);
}
