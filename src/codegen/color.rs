/// Literal used for missing or malformed colors (opaque black).
pub const FALLBACK_COLOR: &str = "0xFF000000";

/// Convert `#RRGGBB` into a Flutter `Color` argument such as `0xFF2196f3`.
///
/// Only `#` followed by exactly six hex digits is accepted; everything else
/// (named colors, shorthand `#fff`, alpha forms) maps to `FALLBACK_COLOR`.
pub fn hex_to_argb(hex: &str) -> String {
    match parse_rgb(hex) {
        Some((r, g, b)) => format!("0xFF{:02x}{:02x}{:02x}", r, g, b),
        None => FALLBACK_COLOR.to_string(),
    }
}

fn parse_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((byte(0)?, byte(2)?, byte(4)?))
}
