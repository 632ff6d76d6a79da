//! Themed demo screen
//!
//! A small screen of buttons, labels, a switch and a stepper that is
//! restyled from the active theme, rendered as styled terminal text.

pub mod render;
pub mod screen;

pub use screen::DemoScreen;
