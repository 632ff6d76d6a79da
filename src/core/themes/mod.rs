//! Concrete themes
//!
//! `DefaultTheme` and `DarkTheme` carry compiled palettes; a
//! `ConfigDrivenTheme` reads its palette and fonts from a theme resource.

pub mod config_driven;
pub mod dark;
pub mod default;

pub use config_driven::ConfigDrivenTheme;
pub use dark::DarkTheme;
pub use default::DefaultTheme;

use crate::core::font::{resolve_or_system, Font, FontProvider};
use crate::core::style::{FontStyle, FontWeight};

/// Font strategy of the compiled themes
///
/// The primary family is the system font; the secondary family is
/// Helvetica Neue, which may be missing from the provider.
pub(crate) fn compiled_font(provider: &dyn FontProvider, style: FontStyle, size: f32) -> Font {
    if style.is_primary() {
        return Font::system(size, style.weight());
    }
    let family = match style.weight() {
        FontWeight::Light => "HelveticaNeue-Light",
        FontWeight::Regular => "HelveticaNeue",
        FontWeight::Semibold => "HelveticaNeue-Medium",
        FontWeight::Bold => "HelveticaNeue-Bold",
    };
    resolve_or_system(provider, family, size)
}


#[cfg(test)]
pub(crate) mod test_support {
    use crate::core::style::{TextStyle, ThemeColors};
    use crate::core::theme::Theme;

    /// Every text role resolves to a palette color
    pub fn assert_text_colors_in_palette(theme: &dyn Theme) {
        let colors: &ThemeColors = theme.colors();
        for style in TextStyle::ALL {
            let appearance = theme.style_for_text_style(style);
            assert!(
                colors.contains(appearance.color),
                "{} {:?} color is outside the palette",
                theme.name(),
                style
            );
            assert!(appearance.font.size > 0.0);
        }
    }
}
