//! Font attribute flags.

use crate::codes::FontAttribute;

/// Six independent on/off font attributes.
///
/// Any combination is valid. Codes are emitted in [`FontAttribute::ALL`]
/// order regardless of the order the flags were set in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FontAttributes {
    bold: bool,
    italic: bool,
    underline: bool,
    strike_through: bool,
    overline: bool,
    blink: bool,
}

impl FontAttributes {
    /// Creates a bundle with every flag off.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_bold(&mut self, on: bool) -> &mut Self {
        self.bold = on;
        self
    }

    pub fn set_italic(&mut self, on: bool) -> &mut Self {
        self.italic = on;
        self
    }

    pub fn set_underline(&mut self, on: bool) -> &mut Self {
        self.underline = on;
        self
    }

    pub fn set_strike_through(&mut self, on: bool) -> &mut Self {
        self.strike_through = on;
        self
    }

    pub fn set_overline(&mut self, on: bool) -> &mut Self {
        self.overline = on;
        self
    }

    pub fn set_blink(&mut self, on: bool) -> &mut Self {
        self.blink = on;
        self
    }

    /// Sets one attribute by value.
    pub fn set(&mut self, attribute: FontAttribute, on: bool) -> &mut Self {
        match attribute {
            FontAttribute::Bold => self.set_bold(on),
            FontAttribute::Italic => self.set_italic(on),
            FontAttribute::Blink => self.set_blink(on),
            FontAttribute::Underline => self.set_underline(on),
            FontAttribute::StrikeThrough => self.set_strike_through(on),
            FontAttribute::Overline => self.set_overline(on),
        }
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }

    pub fn is_italic(&self) -> bool {
        self.italic
    }

    pub fn is_underline(&self) -> bool {
        self.underline
    }

    pub fn is_strike_through(&self) -> bool {
        self.strike_through
    }

    pub fn is_overline(&self) -> bool {
        self.overline
    }

    pub fn is_blink(&self) -> bool {
        self.blink
    }

    /// Returns whether `attribute` is on.
    pub fn is_enabled(&self, attribute: FontAttribute) -> bool {
        match attribute {
            FontAttribute::Bold => self.bold,
            FontAttribute::Italic => self.italic,
            FontAttribute::Blink => self.blink,
            FontAttribute::Underline => self.underline,
            FontAttribute::StrikeThrough => self.strike_through,
            FontAttribute::Overline => self.overline,
        }
    }

    /// Iterates over the enabled attributes in emit order.
    pub fn enabled(&self) -> impl Iterator<Item = FontAttribute> + '_ {
        FontAttribute::ALL
            .into_iter()
            .filter(move |attribute| self.is_enabled(*attribute))
    }

    /// Concatenates the codes of every enabled attribute.
    pub fn sequence(&self) -> String {
        self.enabled().map(FontAttribute::code).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_all_off() {
        let font = FontAttributes::new();
        assert_eq!(font.enabled().count(), 0);
        assert_eq!(font.sequence(), "");
    }

    #[test]
    fn test_flags_are_independent() {
        let mut font = FontAttributes::new();
        font.set_underline(true).set_overline(true);
        assert!(font.is_underline());
        assert!(font.is_overline());
        assert!(!font.is_bold());
        assert!(!font.is_italic());
        assert!(!font.is_strike_through());
        assert!(!font.is_blink());

        font.set_underline(false);
        assert!(!font.is_underline());
        assert!(font.is_overline());
    }

    #[test]
    fn test_sequence_uses_fixed_order() {
        let mut font = FontAttributes::new();
        font.set_overline(true)
            .set_strike_through(true)
            .set_blink(true)
            .set_bold(true);
        assert_eq!(font.sequence(), "\x1b[1m\x1b[5m\x1b[9m\x1b[53m");
    }

    #[test]
    fn test_set_by_attribute() {
        let mut font = FontAttributes::new();
        for attribute in FontAttribute::ALL {
            font.set(attribute, true);
            assert!(font.is_enabled(attribute));
        }
        assert_eq!(font.enabled().count(), 6);
    }
}
