//! Hex colors decoded into RGB channels.

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::StyleError;
use crate::codes::{color_sequence, ColorKind};

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9a-f]{6}$").unwrap());

/// A 24-bit color, or nothing.
///
/// All three channels are assigned together by [`Color::set`], so a color is
/// either fully set or fully unset.
///
/// # Example
///
/// ```rust
/// use clistyles::Color;
///
/// let mut color = Color::new();
/// assert!(!color.is_set());
///
/// color.set("#FF8000").unwrap();
/// assert_eq!(color.red().unwrap(), 255);
/// assert_eq!(color.green().unwrap(), 128);
/// assert_eq!(color.blue().unwrap(), 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    rgb: Option<(u8, u8, u8)>,
}

impl Color {
    /// Creates an unset color.
    pub fn new() -> Self {
        Self { rgb: None }
    }

    /// Creates a color from a hex string such as `#ff00ff` or `FF00FF`.
    pub fn from_hex(raw: &str) -> Result<Self, StyleError> {
        let mut color = Self::new();
        color.set(raw)?;
        Ok(color)
    }

    /// Validates `raw` and overwrites all three channels.
    ///
    /// The length check runs on the raw input before the optional `#` is
    /// stripped, so `#12345` passes it and is then rejected as invalid.
    pub fn set(&mut self, raw: &str) -> Result<&mut Self, StyleError> {
        self.rgb = Some(parse_hex(raw)?);
        Ok(self)
    }

    /// Returns `true` once a color has been set.
    pub fn is_set(&self) -> bool {
        self.rgb.is_some()
    }

    pub fn red(&self) -> Result<u8, StyleError> {
        self.rgb().map(|(r, _, _)| r)
    }

    pub fn green(&self) -> Result<u8, StyleError> {
        self.rgb().map(|(_, g, _)| g)
    }

    pub fn blue(&self) -> Result<u8, StyleError> {
        self.rgb().map(|(_, _, b)| b)
    }

    /// Returns all three channels, or [`StyleError::ColorNotSet`].
    pub fn rgb(&self) -> Result<(u8, u8, u8), StyleError> {
        self.rgb.ok_or(StyleError::ColorNotSet)
    }

    /// Returns the truecolor sequence for this color, or an empty string if unset.
    pub fn sequence(&self, kind: ColorKind) -> Result<String, StyleError> {
        if !self.is_set() {
            return Ok(String::new());
        }
        let (r, g, b) = self.rgb()?;
        Ok(color_sequence(kind, r, g, b))
    }
}

/// Validates a hex color string and decodes it into `(red, green, blue)`.
pub fn parse_hex(raw: &str) -> Result<(u8, u8, u8), StyleError> {
    if raw.len() < 6 {
        return Err(StyleError::ColorTooShort {
            value: raw.to_string(),
        });
    }

    let digits = raw.strip_prefix('#').unwrap_or(raw).to_lowercase();
    if !HEX_COLOR.is_match(&digits) {
        return Err(StyleError::InvalidColor {
            value: raw.to_string(),
        });
    }

    let values: Vec<u8> = digits
        .chars()
        .filter_map(|c| c.to_digit(16))
        .map(|d| d as u8)
        .collect();
    let pair = |i: usize| values[i] * 16 + values[i + 1];

    Ok((pair(0), pair(2), pair(4)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ErrorKind;

    #[test]
    fn test_new_is_unset() {
        let color = Color::new();
        assert!(!color.is_set());
        assert_eq!(color.red(), Err(StyleError::ColorNotSet));
        assert_eq!(color.green(), Err(StyleError::ColorNotSet));
        assert_eq!(color.blue(), Err(StyleError::ColorNotSet));
        assert_eq!(color.red().unwrap_err().kind(), ErrorKind::State);
    }

    #[test]
    fn test_set_with_hash() {
        let color = Color::from_hex("#555555").unwrap();
        assert_eq!(color.rgb().unwrap(), (0x55, 0x55, 0x55));
    }

    #[test]
    fn test_set_without_hash_uppercase() {
        let color = Color::from_hex("FF00fF").unwrap();
        assert_eq!(color.rgb().unwrap(), (255, 0, 255));
    }

    #[test]
    fn test_set_overwrites() {
        let mut color = Color::from_hex("#000000").unwrap();
        color.set("#0a0b0c").unwrap();
        assert_eq!(color.rgb().unwrap(), (10, 11, 12));
    }

    #[test]
    fn test_too_short_checked_before_content() {
        assert!(matches!(
            parse_hex("zzzzz"),
            Err(StyleError::ColorTooShort { .. })
        ));
        assert!(matches!(parse_hex(""), Err(StyleError::ColorTooShort { .. })));
    }

    #[test]
    fn test_hash_with_five_digits_is_invalid() {
        assert!(matches!(
            parse_hex("#12345"),
            Err(StyleError::InvalidColor { .. })
        ));
    }

    #[test]
    fn test_seven_digits_without_hash_is_invalid() {
        assert!(matches!(
            parse_hex("1234567"),
            Err(StyleError::InvalidColor { .. })
        ));
    }

    #[test]
    fn test_non_hex_is_invalid() {
        assert!(matches!(
            parse_hex("#gg0000"),
            Err(StyleError::InvalidColor { .. })
        ));
    }

    #[test]
    fn test_failed_set_keeps_previous_value() {
        let mut color = Color::from_hex("#010203").unwrap();
        assert!(color.set("nope!!").is_err());
        assert_eq!(color.rgb().unwrap(), (1, 2, 3));
    }

    #[test]
    fn test_sequence() {
        let color = Color::from_hex("#ff0000").unwrap();
        assert_eq!(
            color.sequence(ColorKind::Background).unwrap(),
            "\x1b[48;2;255;0;0m"
        );
        assert_eq!(Color::new().sequence(ColorKind::Text).unwrap(), "");
    }
}
