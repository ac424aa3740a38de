//! YAML stylesheets.
//!
//! A stylesheet maps style names to their attributes. Entries keep document
//! order, which is also the order tags are substituted in.
//!
//! ```yaml
//! default:
//!   color: "#ff00ff"
//! temp:
//!   color: "#555555"
//!   background: "#ffffff"
//!   bold: true
//!   italic: true
//!   strike-through: true
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_yaml::Value;

use crate::render::StyleCatalog;
use crate::style::{StyleDefinition, StyleError};

/// Error returned when a stylesheet cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum StylesheetError {
    #[error("failed to read stylesheet {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid stylesheet YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("stylesheet must be a mapping of style names to attributes")]
    NotAMapping,

    #[error("style names must be strings, found {key}")]
    NonStringKey { key: String },

    #[error("invalid attributes for style '{name}': {source}")]
    Entry {
        name: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid style '{name}': {source}")]
    Style {
        name: String,
        #[source]
        source: StyleError,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct StyleEntry {
    color: Option<String>,
    background: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underline: bool,
    #[serde(default)]
    strike_through: bool,
    #[serde(default)]
    overline: bool,
    #[serde(default)]
    blink: bool,
}

impl StyleEntry {
    fn into_style(self, name: &str) -> Result<StyleDefinition, StyleError> {
        let mut style = StyleDefinition::new(name)?;
        if let Some(color) = &self.color {
            style.set_color(color)?;
        }
        if let Some(background) = &self.background {
            style.set_background(background)?;
        }
        style
            .set_bold(self.bold)
            .set_italic(self.italic)
            .set_underline(self.underline)
            .set_strike_through(self.strike_through)
            .set_overline(self.overline)
            .set_blink(self.blink);
        Ok(style)
    }
}

/// Style definitions loaded from YAML, in document order.
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    styles: Vec<StyleDefinition>,
}

impl Stylesheet {
    /// Parses a stylesheet. The first invalid entry fails the whole load.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clistyles::Stylesheet;
    ///
    /// let sheet = Stylesheet::from_yaml(r##"
    /// error:
    ///   color: "#ffffff"
    ///   background: "#ff0000"
    /// note:
    ///   italic: true
    /// "##).unwrap();
    ///
    /// let names: Vec<_> = sheet.styles().iter().map(|s| s.name()).collect();
    /// assert_eq!(names, ["error", "note"]);
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self, StylesheetError> {
        let root: Value = serde_yaml::from_str(source)?;
        let mapping = match root {
            Value::Mapping(mapping) => mapping,
            Value::Null => return Ok(Self::default()),
            _ => return Err(StylesheetError::NotAMapping),
        };

        let mut styles = Vec::with_capacity(mapping.len());
        for (key, value) in mapping {
            let name = match key {
                Value::String(name) => name,
                other => {
                    return Err(StylesheetError::NonStringKey {
                        key: format!("{:?}", other),
                    })
                }
            };

            let entry = if value.is_null() {
                StyleEntry::default()
            } else {
                serde_yaml::from_value::<StyleEntry>(value).map_err(|source| {
                    StylesheetError::Entry {
                        name: name.clone(),
                        source,
                    }
                })?
            };

            let style = entry
                .into_style(&name)
                .map_err(|source| StylesheetError::Style {
                    name: name.clone(),
                    source,
                })?;
            styles.push(style);
        }

        Ok(Self { styles })
    }

    /// Reads and parses a stylesheet file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StylesheetError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| StylesheetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&source)
    }

    pub fn styles(&self) -> &[StyleDefinition] {
        &self.styles
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Registers every style, in order, into a new catalog.
    pub fn into_catalog(self) -> StyleCatalog {
        let mut catalog = StyleCatalog::new();
        for style in self.styles {
            catalog.add_style(style);
        }
        catalog
    }
}
