//! Style errors.

/// Broad category of a [`StyleError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed a malformed value (color hash or style name).
    Validation,
    /// The value was well formed but the object was not in a usable state.
    State,
}

/// Error returned by color, style, and catalog operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// The color string has fewer than six characters.
    ColorTooShort { value: String },
    /// The color string is not six hex digits once `#` is stripped.
    InvalidColor { value: String },
    /// The style name is empty or only spaces.
    EmptyName,
    /// The style name contains characters outside `[a-z0-9_-]`.
    InvalidName { name: String },
    /// A color channel was read before the color was set.
    ColorNotSet,
}

impl StyleError {
    /// Returns whether this is a validation or a state error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            StyleError::ColorTooShort { .. }
            | StyleError::InvalidColor { .. }
            | StyleError::EmptyName
            | StyleError::InvalidName { .. } => ErrorKind::Validation,
            StyleError::ColorNotSet => ErrorKind::State,
        }
    }
}

impl std::fmt::Display for StyleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleError::ColorTooShort { value } => {
                write!(f, "color hash too short: '{}'", value)
            }
            StyleError::InvalidColor { value } => {
                write!(f, "invalid color hash '{}': expected six hex digits", value)
            }
            StyleError::EmptyName => write!(f, "style name must not be empty"),
            StyleError::InvalidName { name } => {
                write!(f, "invalid style name '{}': must match [a-z0-9_-]+", name)
            }
            StyleError::ColorNotSet => write!(f, "color not set"),
        }
    }
}

impl std::error::Error for StyleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_short_display() {
        let err = StyleError::ColorTooShort {
            value: "#fff".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("too short"));
        assert!(msg.contains("#fff"));
    }

    #[test]
    fn test_invalid_name_display() {
        let err = StyleError::InvalidName {
            name: "Bad Name".to_string(),
        };
        assert!(err.to_string().contains("Bad Name"));
    }

    #[test]
    fn test_kinds() {
        assert_eq!(StyleError::EmptyName.kind(), ErrorKind::Validation);
        assert_eq!(
            StyleError::InvalidColor {
                value: "zzzzzz".into()
            }
            .kind(),
            ErrorKind::Validation
        );
        assert_eq!(StyleError::ColorNotSet.kind(), ErrorKind::State);
    }
}
