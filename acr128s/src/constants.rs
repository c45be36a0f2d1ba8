// acr128s/src/constants.rs
//! Wire-level constants shared by both reader dialects.

/// Start-of-frame marker for serial CCID frames.
pub const STX: u8 = 0x02;

/// End-of-frame marker for serial CCID frames.
pub const ETX: u8 = 0x03;

/// Length of the CCID message header (type, length, slot, seq, 3 params).
pub const CCID_HEADER_LEN: usize = 10;

/// Minimal framed response: STX + header + BCC + ETX.
pub const MIN_FRAME_LEN: usize = 1 + CCID_HEADER_LEN + 1 + 1;

/// Largest payload the reader accepts in one command frame.
pub const MAX_PAYLOAD_LEN: usize = 261;

/// Responses of at most this many bytes carry only a status code.
pub const STATUS_FRAME_MAX_LEN: usize = 4;

/// Host -> reader message types
pub const PC_TO_RDR_ICC_POWER_ON: u8 = 0x62;
pub const PC_TO_RDR_ICC_POWER_OFF: u8 = 0x63;
pub const PC_TO_RDR_ESCAPE: u8 = 0x6B;
pub const PC_TO_RDR_XFR_BLOCK: u8 = 0x6F;

/// Reader -> host message types
pub const RDR_TO_PC_DATA_BLOCK: u8 = 0x80;
pub const RDR_TO_PC_SLOT_STATUS: u8 = 0x81;
pub const RDR_TO_PC_ESCAPE: u8 = 0x83;

/// Status-only frame codes. `STATUS_ACK` means the command was accepted and
/// the real response has to be fetched with [`FRAME_NACK`].
pub const STATUS_ACK: u8 = 0x00;
pub const STATUS_CHECKSUM_ERROR: u8 = 0xFF;
pub const STATUS_LENGTH_ERROR: u8 = 0xFE;
pub const STATUS_ETX_ERROR: u8 = 0xFD;
pub const STATUS_TIMEOUT_ERROR: u8 = 0x99;

/// Request for a response the reader deferred: an all-zero header frame.
pub const FRAME_NACK: [u8; 13] = [
    STX, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, ETX,
];

/// bStatus bits 6-7 of a CCID response: 0 = processed, 1 = failed, 2 = time extension
pub const CCID_COMMAND_STATUS_SHIFT: u8 = 6;
pub const CCID_COMMAND_FAILED: u8 = 0x01;

/// Default per-exchange timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 100;

/// Escape command reporting whether a PICC is in the field (last byte != 0).
pub const ESCAPE_PICC_FIELD_QUERY: [u8; 5] = [0xE0, 0x00, 0x00, 0x25, 0x00];

/// Escape command setting the SAM extra guard time.
pub const ESCAPE_SAM_SET_GUARD_TIME: [u8; 7] = [0xE0, 0x00, 0x00, 0x2E, 0x02, 0x00, 0x0A];

/// Pseudo-APDU GET DATA (UID)
pub const APDU_GET_UID: [u8; 5] = [0xFF, 0xCA, 0x00, 0x00, 0x00];

/// Pseudo-APDU GET DATA (ATS)
pub const APDU_GET_ATS: [u8; 5] = [0xFF, 0xCA, 0x01, 0x00, 0x00];

/// ISO 7816 success trailer (SW1 SW2)
pub const ISO7816_SUCCESS: [u8; 2] = [0x90, 0x00];

/// ISO 7816-3 TS byte of a direct-convention ATR.
pub const ATR_INITIAL_BYTE: u8 = 0x3B;

/// Classic-chip (Multi-ISO) command tokens
pub const CLASSIC_CMD_SELECT: &str = "s";
pub const CLASSIC_CMD_LOGIN: &str = "l";
pub const CLASSIC_CMD_READ_BLOCK: &str = "rb";
pub const CLASSIC_CMD_WRITE_BLOCK: &str = "wb";

/// Key type flags sent with a classic login
pub const CLASSIC_KEY_A: u8 = 0xAA;
pub const CLASSIC_KEY_B: u8 = 0xBB;

/// Blocks per Mifare Classic sector (first 32 sectors)
pub const CLASSIC_BLOCKS_PER_SECTOR: u8 = 4;

/// Classic-chip status characters (first byte of a reply)
pub const CLASSIC_LOGIN_SUCCESS: u8 = b'L';
pub const CLASSIC_AUTH_FAILED: u8 = b'X';
pub const CLASSIC_GENERAL_FAILURE: u8 = b'F';
pub const CLASSIC_NO_TAG: u8 = b'N';
pub const CLASSIC_OPERATION_MODE_FAILURE: u8 = b'O';
pub const CLASSIC_OUT_OF_RANGE: u8 = b'R';
