//! Output mode selection.

/// Controls whether resolved text carries escape codes.
///
/// The caller picks the mode; no terminal detection is performed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Replace tags with truecolor and SGR escape codes.
    #[default]
    Term,
    /// Remove registered tags and emit no escape codes at all.
    Text,
}

impl OutputMode {
    /// Returns `true` if this mode emits escape codes.
    pub fn should_use_color(&self) -> bool {
        matches!(self, OutputMode::Term)
    }
}
