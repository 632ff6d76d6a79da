//! themekit - runtime theme resolution and styling
//!
//! This library resolves colors, fonts and text styles from a selectable
//! theme and applies them to abstract UI widgets. Themes are either compiled
//! in (`dark`, `default`) or driven by TOML/JSON theme files.

pub mod cli;
pub mod core;
pub mod demo;
pub mod error;

pub use error::{Result, ThemeError};
