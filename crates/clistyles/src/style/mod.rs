//! Style primitives.
//!
//! - [`Color`]: a hex color decoded into RGB channels
//! - [`FontAttributes`]: six independent font flags
//! - [`StyleDefinition`]: a named color/background/font bundle
//! - [`StyleError`]: validation and state errors, categorised by [`ErrorKind`]

mod color;
mod definition;
mod error;
mod font;

pub use color::{parse_hex, Color};
pub use definition::{validate_name, StyleDefinition, DEFAULT_STYLE_NAME};
pub use error::{ErrorKind, StyleError};
pub use font::FontAttributes;
