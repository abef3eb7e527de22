//! Hexadecimal helpers used for log output and display purposes.

/// Convert a byte slice to an uppercase hex string without separators.
///
/// Example: `&[0x7f, 0x4c]` -> `"7F4C"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        use std::fmt::Write;
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}

/// Same as [`bytes_to_hex`] with a single space between bytes.
///
/// Example: `&[0x90, 0x00]` -> `"90 00"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
