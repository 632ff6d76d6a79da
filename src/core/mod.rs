//! Core functionality for themekit
//!
//! This module contains the theme engine:
//! - Style vocabulary, colors and fonts
//! - The theme contract and its three variants
//! - Theme resources, the catalog and the active-theme registry
//! - Application configuration

pub mod button;
pub mod catalog;
pub mod color;
pub mod config;
pub mod font;
pub mod registry;
pub mod source;
pub mod style;
pub mod theme;
pub mod themes;
pub mod widget;

pub use catalog::ThemeCatalog;
pub use color::Color;
pub use config::Config;
pub use font::{Font, FontBook, FontProvider};
pub use registry::{SharedTheme, ThemeRegistry};
pub use source::{ThemeResources, ThemeSource};
pub use style::{ButtonStyle, ColorSlot, FontStyle, FontWeight, TextAppearance, TextStyle, ThemeColors};
pub use theme::Theme;
pub use themes::{ConfigDrivenTheme, DarkTheme, DefaultTheme};
