//! The dark theme

use std::sync::Arc;

use crate::core::color::Color;
use crate::core::font::{Font, FontBook, FontProvider};
use crate::core::style::{FontStyle, TextAppearance, TextStyle, ThemeColors};
use crate::core::theme::{text_appearance, Theme};
use crate::core::themes::compiled_font;

pub const NAME: &str = "dark";

/// Dark theme with a compiled palette
///
/// Differs from [`super::DefaultTheme`] beyond the palette: titles use the
/// light text color instead of the primary color, and Cancel buttons use
/// the dark text color in their normal state.
pub struct DarkTheme {
    colors: ThemeColors,
    fonts: Arc<dyn FontProvider>,
}

impl DarkTheme {
    pub fn new(fonts: Arc<dyn FontProvider>) -> Self {
        Self {
            colors: ThemeColors {
                primary: Color::rgb8(20, 169, 199),
                secondary: Color::BLUE,

                text_dark: Color::white(0.6, 1.0),
                text_light: Color::white(0.9, 1.0),
                text_default: Color::white(0.8, 1.0),

                background_primary: Color::white(0.2, 1.0),
                background_secondary: Color::LIGHT_GRAY,

                call_to_action: Color::rgb8(0, 149, 179),
            },
            fonts,
        }
    }
}

impl Default for DarkTheme {
    fn default() -> Self {
        Self::new(Arc::new(FontBook::builtin()))
    }
}

impl Theme for DarkTheme {
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
        text_appearance(self, style, self.colors.text_light)
    }

    // Diverges from the other themes, which use text_default.
    fn cancel_title_color(&self) -> Color {
        self.colors.text_dark
    }
}
