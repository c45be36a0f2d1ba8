use acr128s::Error;
use acr128s::constants::{MAX_PAYLOAD_LEN, MIN_FRAME_LEN};
use acr128s::protocol::encode_command;
use acr128s::types::{MessageKind, Slot};

#[test]
fn power_commands_have_empty_payload() {
    let on = encode_command(MessageKind::IccPowerOn, 2, Slot::Sam, &[]).unwrap();
    assert_eq!(
        on,
        vec![0x02, 0x62, 0x00, 0x00, 0x00, 0x00, 0x02, 0x02, 0x00, 0x00, 0x00, 0x62, 0x03]
    );

    let off = encode_command(MessageKind::IccPowerOff, 0, Slot::Picc, &[]).unwrap();
    assert_eq!(off.len(), MIN_FRAME_LEN);
    assert_eq!(off[1], 0x63);
    assert_eq!(off[11], 0x63);
}

#[test]
fn payload_limit_is_inclusive() {
    let max = vec![0xA5; MAX_PAYLOAD_LEN];
    let frame = encode_command(MessageKind::XfrBlock, 0, Slot::Icc, &max).unwrap();
    assert_eq!(frame.len(), MIN_FRAME_LEN + MAX_PAYLOAD_LEN);
    // 261 = 0x0105, little endian
    assert_eq!(&frame[2..6], &[0x05, 0x01, 0x00, 0x00]);

    let over = vec![0xA5; MAX_PAYLOAD_LEN + 1];
    assert!(matches!(
        encode_command(MessageKind::XfrBlock, 0, Slot::Icc, &over),
        Err(Error::Encoding { .. })
    ));
}
