//! Markup resolution.
//!
//! [`StyleCatalog`] holds registered styles and the text to resolve;
//! [`code_for`] builds the escape codes for a single style.

mod catalog;

pub use catalog::{code_for, StyleCatalog};
