//! Named style definitions.

use once_cell::sync::Lazy;
use regex::Regex;

use super::color::Color;
use super::error::StyleError;
use super::font::FontAttributes;

/// Reserved name of the catalog-wide fallback style.
///
/// Closing any tag switches to the style registered under this name.
pub const DEFAULT_STYLE_NAME: &str = "default";

static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z0-9_-]+$").unwrap());

/// Checks that `name` is non-empty and matches `[a-z0-9_-]+`.
pub fn validate_name(name: &str) -> Result<(), StyleError> {
    if name.trim_matches(' ').is_empty() {
        return Err(StyleError::EmptyName);
    }
    if !NAME_PATTERN.is_match(name) {
        return Err(StyleError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// A named bundle of text color, background color, and font attributes.
///
/// A definition always carries a valid name: [`StyleDefinition::new`] is the
/// only way to create one, so attributes can never be configured on an
/// anonymous style.
///
/// # Example
///
/// ```rust
/// use clistyles::StyleDefinition;
///
/// let warning = StyleDefinition::new("warning")?
///     .with_color("#ffaa00")?
///     .with_background("#000000")?
///     .bold()
///     .underline();
///
/// assert_eq!(warning.name(), "warning");
/// assert!(warning.font().is_bold());
/// # Ok::<(), clistyles::StyleError>(())
/// ```
///
/// Fields are private, so a definition cannot be built without going
/// through the name check:
///
/// ```compile_fail
/// use clistyles::{Color, FontAttributes, StyleDefinition};
///
/// let style = StyleDefinition {
///     name: String::new(),
///     color: Color::new(),
///     background: Color::new(),
///     font: FontAttributes::new(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDefinition {
    name: String,
    color: Color,
    background: Color,
    font: FontAttributes,
}

impl StyleDefinition {
    /// Creates a style with no colors and no font attributes.
    pub fn new(name: &str) -> Result<Self, StyleError> {
        validate_name(name)?;
        Ok(Self {
            name: name.to_string(),
            color: Color::new(),
            background: Color::new(),
            font: FontAttributes::new(),
        })
    }

    /// Creates an empty style named [`DEFAULT_STYLE_NAME`].
    ///
    /// Its code is a bare reset, which is what a catalog uses until a
    /// `default` style is registered.
    pub fn reset() -> Self {
        Self {
            name: DEFAULT_STYLE_NAME.to_string(),
            color: Color::new(),
            background: Color::new(),
            font: FontAttributes::new(),
        }
    }

    /// Renames the style. The old name is kept if `name` is invalid.
    pub fn set_name(&mut self, name: &str) -> Result<&mut Self, StyleError> {
        validate_name(name)?;
        self.name = name.to_string();
        Ok(self)
    }

    pub fn set_color(&mut self, hex: &str) -> Result<&mut Self, StyleError> {
        self.color.set(hex)?;
        Ok(self)
    }

    pub fn set_background(&mut self, hex: &str) -> Result<&mut Self, StyleError> {
        self.background.set(hex)?;
        Ok(self)
    }

    pub fn set_bold(&mut self, on: bool) -> &mut Self {
        self.font.set_bold(on);
        self
    }

    pub fn set_italic(&mut self, on: bool) -> &mut Self {
        self.font.set_italic(on);
        self
    }

    pub fn set_underline(&mut self, on: bool) -> &mut Self {
        self.font.set_underline(on);
        self
    }

    pub fn set_strike_through(&mut self, on: bool) -> &mut Self {
        self.font.set_strike_through(on);
        self
    }

    pub fn set_overline(&mut self, on: bool) -> &mut Self {
        self.font.set_overline(on);
        self
    }

    pub fn set_blink(&mut self, on: bool) -> &mut Self {
        self.font.set_blink(on);
        self
    }

    /// Sets the text color, returning the style for chaining.
    pub fn with_color(mut self, hex: &str) -> Result<Self, StyleError> {
        self.set_color(hex)?;
        Ok(self)
    }

    /// Sets the background color, returning the style for chaining.
    pub fn with_background(mut self, hex: &str) -> Result<Self, StyleError> {
        self.set_background(hex)?;
        Ok(self)
    }

    pub fn bold(mut self) -> Self {
        self.font.set_bold(true);
        self
    }

    pub fn italic(mut self) -> Self {
        self.font.set_italic(true);
        self
    }

    pub fn underline(mut self) -> Self {
        self.font.set_underline(true);
        self
    }

    pub fn strike_through(mut self) -> Self {
        self.font.set_strike_through(true);
        self
    }

    pub fn overline(mut self) -> Self {
        self.font.set_overline(true);
        self
    }

    pub fn blink(mut self) -> Self {
        self.font.set_blink(true);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the text color.
    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn background(&self) -> &Color {
        &self.background
    }

    pub fn font(&self) -> &FontAttributes {
        &self.font
    }

    /// Mutable access to the font attributes.
    pub fn font_mut(&mut self) -> &mut FontAttributes {
        &mut self.font
    }

    /// Returns `true` if this style is named [`DEFAULT_STYLE_NAME`].
    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_STYLE_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ErrorKind;

    #[test]
    fn test_valid_names() {
        for name in ["temp", "error", "a", "x-1_y", "0", "default", "--"] {
            assert!(StyleDefinition::new(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(StyleDefinition::new(""), Err(StyleError::EmptyName));
        assert_eq!(StyleDefinition::new("   "), Err(StyleError::EmptyName));
    }

    #[test]
    fn test_invalid_names() {
        for name in ["Temp", "with space", " temp", "tag>", "a.b", "é"] {
            let err = StyleDefinition::new(name).unwrap_err();
            assert!(
                matches!(err, StyleError::InvalidName { .. }),
                "{name} should be rejected"
            );
            assert_eq!(err.kind(), ErrorKind::Validation);
        }
    }

    #[test]
    fn test_set_name_keeps_old_on_error() {
        let mut style = StyleDefinition::new("ok").unwrap();
        assert!(style.set_name("NOT OK").is_err());
        assert_eq!(style.name(), "ok");
        style.set_name("renamed").unwrap();
        assert_eq!(style.name(), "renamed");
    }

    #[test]
    fn test_builder_chain() {
        let style = StyleDefinition::new("temp")
            .unwrap()
            .with_color("#555555")
            .unwrap()
            .with_background("#ffffff")
            .unwrap()
            .italic()
            .bold()
            .strike_through();

        assert_eq!(style.color().rgb().unwrap(), (0x55, 0x55, 0x55));
        assert_eq!(style.background().rgb().unwrap(), (255, 255, 255));
        assert!(style.font().is_italic());
        assert!(style.font().is_bold());
        assert!(style.font().is_strike_through());
        assert!(!style.font().is_underline());
    }

    #[test]
    fn test_mutators() {
        let mut style = StyleDefinition::new("x").unwrap();
        style
            .set_color("#010101")
            .unwrap()
            .set_blink(true)
            .set_overline(true);
        style.set_overline(false);

        assert!(style.color().is_set());
        assert!(!style.background().is_set());
        assert!(style.font().is_blink());
        assert!(!style.font().is_overline());
    }

    #[test]
    fn test_font_mut() {
        let mut style = StyleDefinition::new("x").unwrap();
        style.font_mut().set_underline(true).set_italic(true);
        assert!(style.font().is_underline());
        assert!(style.font().is_italic());
        assert!(!style.font().is_bold());
    }

    #[test]
    fn test_bad_color_propagates() {
        let err = StyleDefinition::new("x")
            .unwrap()
            .with_color("#12")
            .unwrap_err();
        assert!(matches!(err, StyleError::ColorTooShort { .. }));
    }

    #[test]
    fn test_reset_is_default() {
        let style = StyleDefinition::reset();
        assert!(style.is_default());
        assert!(!style.color().is_set());
        assert!(StyleDefinition::new("default").unwrap().is_default());
        assert!(!StyleDefinition::new("other").unwrap().is_default());
    }
}
