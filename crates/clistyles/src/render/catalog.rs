//! Style catalog and tag resolution.

use tracing::{debug, trace};

use crate::codes::{ColorKind, RESET};
use crate::output::OutputMode;
use crate::style::{StyleDefinition, StyleError};

/// A literal `<` in markup is written as `\<`.
///
/// Text is split on this sequence before substitution and the pieces are
/// joined back with `<`, so no tag can start at an escaped bracket.
const ESCAPED_OPEN: &str = "\\<";

/// Builds the escape codes that switch a terminal to `style`.
///
/// The default style is prefixed with a full reset so closing a tag clears
/// whatever the open tag turned on. Unset colors contribute nothing.
///
/// # Example
///
/// ```rust
/// use clistyles::{code_for, StyleDefinition};
///
/// let style = StyleDefinition::new("alert")?.with_color("#ff0000")?.bold();
/// assert_eq!(code_for(&style)?, "\x1b[38;2;255;0;0m\x1b[1m");
/// # Ok::<(), clistyles::StyleError>(())
/// ```
pub fn code_for(style: &StyleDefinition) -> Result<String, StyleError> {
    let mut code = String::new();
    if style.is_default() {
        code.push_str(RESET);
    }
    code.push_str(&style.color().sequence(ColorKind::Text)?);
    code.push_str(&style.background().sequence(ColorKind::Background)?);
    code.push_str(&style.font().sequence());
    Ok(code)
}

/// Registered styles plus the markup text to resolve against them.
///
/// Tags are substituted literally: `<name>` becomes the style's code and
/// `</name>` becomes the default style's code. There is no style stack, so
/// closing an inner tag inside an outer one switches to the default, not
/// back to the outer style.
///
/// # Example
///
/// ```rust
/// use clistyles::{StyleCatalog, StyleDefinition};
///
/// let error = StyleDefinition::new("error")?
///     .with_color("#ffffff")?
///     .with_background("#ff0000")?;
///
/// let catalog = StyleCatalog::new()
///     .with_style(error)
///     .with_text("<error>failed</error> \\<error> stays literal");
///
/// let output = catalog.resolve(true)?;
/// assert!(output.starts_with("\x1b[38;2;255;255;255m\x1b[48;2;255;0;0mfailed\x1b[0m"));
/// assert!(output.contains(" <error> stays literal"));
/// assert!(output.ends_with("\x1b[0m"));
/// # Ok::<(), clistyles::StyleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct StyleCatalog {
    styles: Vec<StyleDefinition>,
    default: StyleDefinition,
    text: String,
}

impl StyleCatalog {
    /// Creates an empty catalog whose default style is a bare reset.
    pub fn new() -> Self {
        Self {
            styles: Vec::new(),
            default: StyleDefinition::reset(),
            text: String::new(),
        }
    }

    /// Registers a style.
    ///
    /// A style named `default` replaces the current default. Any other style
    /// is appended, even if one with the same name is already registered.
    pub fn add_style(&mut self, style: StyleDefinition) -> &mut Self {
        if style.is_default() {
            debug!("replacing default style");
            self.default = style;
        } else {
            self.styles.push(style);
        }
        self
    }

    /// Registers a style, returning the catalog for chaining.
    pub fn with_style(mut self, style: StyleDefinition) -> Self {
        self.add_style(style);
        self
    }

    /// Stores the markup text to resolve.
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = text.into();
        self
    }

    /// Stores the markup text, returning the catalog for chaining.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the non-default styles in registration order.
    pub fn styles(&self) -> &[StyleDefinition] {
        &self.styles
    }

    pub fn default_style(&self) -> &StyleDefinition {
        &self.default
    }

    /// Resolves the stored text into an escape-coded string.
    ///
    /// With `reset_after`, a full reset is appended so styling never leaks
    /// past the returned string.
    pub fn resolve(&self, reset_after: bool) -> Result<String, StyleError> {
        self.resolve_with(OutputMode::Term, reset_after)
    }

    /// Resolves the stored text for the given output mode.
    ///
    /// In [`OutputMode::Text`] registered tags are removed and no reset is
    /// appended, whatever `reset_after` says.
    pub fn resolve_with(&self, mode: OutputMode, reset_after: bool) -> Result<String, StyleError> {
        let use_color = mode.should_use_color();
        let default_code = if use_color {
            code_for(&self.default)?
        } else {
            String::new()
        };

        let mut segments: Vec<String> = self
            .text
            .split(ESCAPED_OPEN)
            .map(str::to_string)
            .collect();

        for style in &self.styles {
            let code = if use_color {
                code_for(style)?
            } else {
                String::new()
            };
            trace!(style = style.name(), "substituting tags");

            let open = format!("<{}>", style.name());
            let close = format!("</{}>", style.name());
            for segment in segments.iter_mut() {
                *segment = segment.replace(&open, &code).replace(&close, &default_code);
            }
        }

        let mut text = segments.join("<");
        if reset_after && use_color {
            text.push_str(RESET);
        }

        Ok(text)
    }
}

impl Default for StyleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for StyleCatalog {
    /// Writes the result of `resolve(true)`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let resolved = self.resolve(true).map_err(|_| std::fmt::Error)?;
        f.write_str(&resolved)
    }
}
