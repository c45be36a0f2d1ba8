// acr128s/src/protocol/checksum.rs

/// Block check character of a serial CCID frame: XOR of every byte between
/// STX and the checksum itself (header + payload).
pub fn bcc(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, &b| acc ^ b)
}
