//! Button styling shared by every theme
//!
//! | Style  | Normal title          | Highlighted title    | Font                 | Background               |
//! |--------|-----------------------|----------------------|----------------------|--------------------------|
//! | Submit | text light            | unchanged            | PrimarySemibold 18   | `blue-button-background` |
//! | Cancel | theme's cancel color  | text light           | SecondaryRegular 18  | `gray-button-background` |
//! | Link   | call to action        | call to action @ 60% | PrimaryRegular 18    | none                     |

use crate::core::color::Color;
use crate::core::font::Font;
use crate::core::style::{ButtonStyle, FontStyle};
use crate::core::theme::Theme;
use crate::core::widget::{ButtonWidget, ControlState};

pub const BUTTON_FONT_SIZE: f32 = 18.0;
pub const SUBMIT_BACKGROUND: &str = "blue-button-background";
pub const CANCEL_BACKGROUND: &str = "gray-button-background";
pub const LINK_HIGHLIGHT_ALPHA: f32 = 0.6;

/// Everything a theme assigns to a button of one style
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonAppearance {
    pub normal_title: Color,
    /// `None` leaves the highlighted title color untouched
    pub highlighted_title: Option<Color>,
    pub font: Font,
    /// Background asset for the normal state
    pub background: Option<&'static str>,
}

impl ButtonAppearance {
    pub fn resolve<T: Theme + ?Sized>(theme: &T, style: ButtonStyle) -> Self {
        let colors = theme.colors();
        match style {
            ButtonStyle::Submit => Self {
                normal_title: colors.text_light,
                highlighted_title: None,
                font: theme.font(FontStyle::PrimarySemibold, BUTTON_FONT_SIZE),
                background: Some(SUBMIT_BACKGROUND),
            },
            ButtonStyle::Cancel => Self {
                normal_title: theme.cancel_title_color(),
                highlighted_title: Some(colors.text_light),
                font: theme.font(FontStyle::SecondaryRegular, BUTTON_FONT_SIZE),
                background: Some(CANCEL_BACKGROUND),
            },
            ButtonStyle::Link => Self {
                normal_title: colors.call_to_action,
                highlighted_title: Some(colors.call_to_action.with_alpha(LINK_HIGHLIGHT_ALPHA)),
                font: theme.font(FontStyle::PrimaryRegular, BUTTON_FONT_SIZE),
                background: None,
            },
        }
    }

    pub fn apply(&self, button: &mut dyn ButtonWidget) {
        button.set_title_color(self.normal_title, ControlState::Normal);
        if let Some(color) = self.highlighted_title {
            button.set_title_color(color, ControlState::Highlighted);
        }
        button.set_title_font(self.font.clone());
        if let Some(asset) = self.background {
            button.set_background_image(asset, ControlState::Normal);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::font::{FontBook, FontProvider};
    use crate::core::source::{ThemeSource, LAGOON_TOML};
    use crate::core::themes::{ConfigDrivenTheme, DarkTheme, DefaultTheme};
    use crate::core::widget::RecordingButton;

    fn themes() -> Vec<Box<dyn Theme>> {
        let fonts: Arc<dyn FontProvider> = Arc::new(FontBook::builtin());
        let source = ThemeSource::from_toml_str(LAGOON_TOML).unwrap();
        vec![
            Box::new(DefaultTheme::new(Arc::clone(&fonts))),
            Box::new(DarkTheme::new(Arc::clone(&fonts))),
            Box::new(ConfigDrivenTheme::from_source("lagoon", &source, fonts).unwrap()),
        ]
    }

    #[test]
    fn test_button_table_for_every_theme() {
        // Stands in for whatever the host had set before theming.
        let untouched = Color::rgba(0.1, 0.2, 0.3, 1.0);

        for theme in themes() {
            let colors = theme.colors();
            let cancel_normal = if theme.name() == "dark" {
                colors.text_dark
            } else {
                colors.text_default
            };

            for style in ButtonStyle::ALL {
                let (normal, highlighted, font_style, background) = match style {
                    ButtonStyle::Submit => (
                        colors.text_light,
                        untouched,
                        FontStyle::PrimarySemibold,
                        Some(SUBMIT_BACKGROUND),
                    ),
                    ButtonStyle::Cancel => (
                        cancel_normal,
                        colors.text_light,
                        FontStyle::SecondaryRegular,
                        Some(CANCEL_BACKGROUND),
                    ),
                    ButtonStyle::Link => (
                        colors.call_to_action,
                        colors.call_to_action.with_alpha(0.6),
                        FontStyle::PrimaryRegular,
                        None,
                    ),
                };

                let mut button = RecordingButton::default();
                button.set_title_color(untouched, ControlState::Highlighted);
                theme.theme_button(&mut button, style);

                let case = format!("{} {:?}", theme.name(), style);
                assert_eq!(button.title_color(ControlState::Normal), Some(normal), "{}", case);
                assert_eq!(
                    button.title_color(ControlState::Highlighted),
                    Some(highlighted),
                    "{}",
                    case
                );
                assert_eq!(button.font, Some(theme.font(font_style, 18.0)), "{}", case);
                assert_eq!(button.background_image(ControlState::Normal), background, "{}", case);
            }
        }
    }

    #[test]
    fn test_lagoon_link_button_font() {
        let themes = themes();
        let lagoon = &themes[2];
        let mut link = RecordingButton::default();
        lagoon.theme_button(&mut link, ButtonStyle::Link);

        assert_eq!(link.font.as_ref().map(|f| f.family_name()), Some("Helvetica".into()));
        assert_eq!(link.title_color(ControlState::Normal), Some(Color::from_hex("#0095B3")));
    }
}
