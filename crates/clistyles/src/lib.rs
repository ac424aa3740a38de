//! # clistyles - Tag Markup to Truecolor Terminal Output
//!
//! Define named styles, write text with `<name>...</name>` tags, and get back
//! a string carrying 24-bit color and SGR font codes.
//!
//! ## Core Concepts
//!
//! - [`Color`]: a hex color (`#ff00ff`, `FF00FF`) decoded into RGB channels
//! - [`FontAttributes`]: bold, italic, underline, blink, strike-through, overline
//! - [`StyleDefinition`]: a named bundle of text color, background, and font
//! - [`StyleCatalog`]: registered styles plus markup text, resolved on demand
//! - [`Stylesheet`]: styles loaded from YAML
//!
//! ## Quick Start
//!
//! ```rust
//! use clistyles::{StyleCatalog, StyleDefinition};
//!
//! let temp = StyleDefinition::new("temp")?
//!     .with_color("#555555")?
//!     .with_background("#ffffff")?
//!     .italic()
//!     .bold()
//!     .strike_through();
//! let default = StyleDefinition::new("default")?.with_color("#ff00ff")?;
//!
//! let catalog = StyleCatalog::new()
//!     .with_style(temp)
//!     .with_style(default)
//!     .with_text("<temp>Some text</temp>");
//!
//! println!("{}", catalog.resolve(true)?);
//! # Ok::<(), clistyles::StyleError>(())
//! ```
//!
//! ## Markup
//!
//! - `<name>` switches to the style registered as `name`
//! - `</name>` switches to the `default` style (there is no style stack)
//! - `\<` is a literal `<` that never starts a tag
//! - tags naming unregistered styles are left as they are

pub mod codes;
mod output;
pub mod render;
pub mod style;
mod stylesheet;

pub use codes::{ColorKind, FontAttribute, RESET};
pub use output::OutputMode;
pub use render::{code_for, StyleCatalog};
pub use style::{
    parse_hex, validate_name, Color, ErrorKind, FontAttributes, StyleDefinition, StyleError,
    DEFAULT_STYLE_NAME,
};
pub use stylesheet::{Stylesheet, StylesheetError};
