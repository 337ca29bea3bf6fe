use std::num::ParseIntError;

/// Parse an attribute handle from the decoder's hexadecimal string form.
///
/// Decoders present handles either bare (`"0010"`) or with a `0x`/`0X`
/// prefix (`"0x0010"`); both parse to the same value.
pub fn parse_hex_u16(text: &str) -> Result<u16, ParseIntError> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    u16::from_str_radix(digits, 16)
}
