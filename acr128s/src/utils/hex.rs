//! Hexadecimal formatting for frames, UIDs and ATRs in logs and errors.
//!
//! Output is uppercase to match how reader documentation prints frames.

use std::fmt::Write;

/// Format bytes as uppercase hex without separators.
///
/// Example: `&[0x3b, 0x8f]` -> `"3B8F"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // writing into a String cannot fail
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}

/// Format bytes as uppercase hex with one space between bytes.
///
/// Example: `&[0x90, 0x00]` -> `"90 00"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}
