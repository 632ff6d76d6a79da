//! The light theme

use std::sync::Arc;

use crate::core::color::Color;
use crate::core::font::{Font, FontBook, FontProvider};
use crate::core::style::{FontStyle, TextAppearance, TextStyle, ThemeColors};
use crate::core::theme::{text_appearance, Theme};
use crate::core::themes::compiled_font;

pub const NAME: &str = "default";

/// Light theme with a compiled palette
pub struct DefaultTheme {
    colors: ThemeColors,
    fonts: Arc<dyn FontProvider>,
}

impl DefaultTheme {
    pub fn new(fonts: Arc<dyn FontProvider>) -> Self {
        let teal = Color::rgb8(0, 149, 179);
        Self {
            colors: ThemeColors {
                primary: teal,
                secondary: Color::BLUE,

                text_dark: Color::white(0.4, 1.0),
                text_light: Color::LIGHT_TEXT,
                text_default: Color::white(0.5, 1.0),

                background_primary: Color::white(0.99, 1.0),
                background_secondary: Color::DARK_GRAY,

                call_to_action: teal,
            },
            fonts,
        }
    }
}

impl Default for DefaultTheme {
    fn default() -> Self {
        Self::new(Arc::new(FontBook::builtin()))
    }
}

impl Theme for DefaultTheme {
    fn name(&self) -> &str {
        NAME
    }

    fn colors(&self) -> &ThemeColors {
        &self.colors
    }

    fn font(&self, style: FontStyle, size: f32) -> Font {
        compiled_font(self.fonts.as_ref(), style, size)
    }

    fn style_for_text_style(&self, style: TextStyle) -> TextAppearance {
        text_appearance(self, style, self.colors.primary)
    }
}
