//! The roster and timetable files are written in ISO-8859-1.

/// Decode latin-1 bytes. Every byte is the code point of the same value,
/// so decoding cannot fail.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}
