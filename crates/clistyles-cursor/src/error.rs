//! Cursor and terminal size errors.

/// Error returned by [`Cursor`](crate::Cursor) operations.
#[derive(Debug, thiserror::Error)]
pub enum CursorError {
    /// Counts and positions are 1-based.
    #[error("{what} must be more than 0")]
    NotPositive { what: &'static str },

    #[error("failed to write cursor sequence: {0}")]
    Io(#[from] std::io::Error),
}

/// Error returned by [`TerminalSize`](crate::TerminalSize) queries.
#[derive(Debug, thiserror::Error)]
pub enum SizeError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}")]
    Failed { command: String, status: String },

    #[error("`{command}` printed no size")]
    Empty { command: String },

    #[error("`{command}` printed non-numeric size '{output}'")]
    NotNumeric { command: String, output: String },

    #[error("terminal size unavailable: not attached to a terminal")]
    Unavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_positive_display() {
        let err = CursorError::NotPositive { what: "column" };
        assert_eq!(err.to_string(), "column must be more than 0");
    }

    #[test]
    fn test_not_numeric_display() {
        let err = SizeError::NotNumeric {
            command: "tput cols".into(),
            output: "abc".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("tput cols"));
        assert!(msg.contains("abc"));
    }
}
