//! Escape-code tables.
//!
//! Every sequence this crate emits comes from here. Lookups are plain
//! `match` tables over small enums, so there is no global mutable state.

/// Resets every graphic rendition attribute.
pub const RESET: &str = "\x1b[0m";

/// A single font attribute with a fixed SGR code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontAttribute {
    Bold,
    Italic,
    Blink,
    Underline,
    StrikeThrough,
    Overline,
}

impl FontAttribute {
    /// All attributes, in the order their codes are emitted.
    pub const ALL: [FontAttribute; 6] = [
        FontAttribute::Bold,
        FontAttribute::Italic,
        FontAttribute::Blink,
        FontAttribute::Underline,
        FontAttribute::StrikeThrough,
        FontAttribute::Overline,
    ];

    /// Returns the escape sequence that turns this attribute on.
    pub fn code(self) -> &'static str {
        match self {
            FontAttribute::Bold => "\x1b[1m",
            FontAttribute::Italic => "\x1b[3m",
            FontAttribute::Blink => "\x1b[5m",
            FontAttribute::Underline => "\x1b[4m",
            FontAttribute::StrikeThrough => "\x1b[9m",
            FontAttribute::Overline => "\x1b[53m",
        }
    }

    /// Returns the kebab-case name of this attribute.
    ///
    /// Stylesheets use the same names as attribute keys.
    pub fn as_str(self) -> &'static str {
        match self {
            FontAttribute::Bold => "bold",
            FontAttribute::Italic => "italic",
            FontAttribute::Blink => "blink",
            FontAttribute::Underline => "underline",
            FontAttribute::StrikeThrough => "strike-through",
            FontAttribute::Overline => "overline",
        }
    }
}

impl std::fmt::Display for FontAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which layer a truecolor sequence paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorKind {
    /// Foreground (text) color.
    Text,
    /// Background color.
    Background,
}

impl ColorKind {
    /// Returns the sequence prefix, without the channel values or terminator.
    pub fn prefix(self) -> &'static str {
        match self {
            ColorKind::Text => "\x1b[38;2",
            ColorKind::Background => "\x1b[48;2",
        }
    }
}

/// Renders a complete 24-bit color sequence, e.g. `ESC[38;2;255;0;0m`.
pub fn color_sequence(kind: ColorKind, red: u8, green: u8, blue: u8) -> String {
    format!("{};{};{};{}m", kind.prefix(), red, green, blue)
}
