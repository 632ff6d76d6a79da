//! Demo screen state and logic

use crate::core::catalog::ThemeCatalog;
use crate::core::color::Color;
use crate::core::registry::{SharedTheme, ThemeRegistry};
use crate::core::style::{ButtonStyle, TextStyle};
use crate::core::widget::{
    RecordingApplication, RecordingButton, RecordingLabel, RecordingStepper, RecordingSwitch,
};

/// The demo screen and the widgets it styles
pub struct DemoScreen {
    registry: ThemeRegistry,
    catalog: ThemeCatalog,

    /// Window tint and appearance proxies
    pub application: RecordingApplication,
    /// View background color
    pub background: Option<Color>,

    pub submit_button: RecordingButton,
    pub cancel_button: RecordingButton,
    pub link_button: RecordingButton,

    pub title_label: RecordingLabel,
    pub subtitle_label: RecordingLabel,
    pub body_label: RecordingLabel,
    pub switch_theme_label: RecordingLabel,

    pub demo_switch: RecordingSwitch,
    pub theme_stepper: RecordingStepper,
}

impl DemoScreen {
    /// Launch the screen with the registry's active theme
    ///
    /// The application is themed first, so the switch and stepper start
    /// out with the appearance proxies' tint instead of staying untinted
    /// until the first stepper touch.
    pub fn new(catalog: ThemeCatalog, registry: ThemeRegistry) -> Self {
        let mut application = RecordingApplication::default();
        registry.active().theme_application(&mut application);

        let demo_switch = RecordingSwitch {
            on: true,
            ..application.switch_appearance
        };
        let theme_stepper = RecordingStepper {
            value: 0,
            maximum_value: catalog.max_step(),
            ..application.stepper_appearance
        };

        let mut screen = Self {
            registry,
            catalog,
            application,
            background: None,
            submit_button: RecordingButton::default(),
            cancel_button: RecordingButton::default(),
            link_button: RecordingButton::default(),
            title_label: RecordingLabel::with_text("Theme demo"),
            subtitle_label: RecordingLabel::with_text("Colors, fonts and buttons"),
            body_label: RecordingLabel::with_text(
                "Every widget on this screen is styled by the active theme.",
            ),
            switch_theme_label: RecordingLabel::with_text("Switch theme"),
            demo_switch,
            theme_stepper,
        };
        screen.theme_views();
        screen
    }

    pub fn active_theme(&self) -> SharedTheme {
        self.registry.active()
    }

    pub fn catalog(&self) -> &ThemeCatalog {
        &self.catalog
    }

    /// Restyle the view background, buttons and labels
    pub fn theme_views(&mut self) {
        let theme = self.registry.active();

        self.background = Some(theme.colors().background_primary);

        theme.theme_button(&mut self.submit_button, ButtonStyle::Submit);
        theme.theme_button(&mut self.cancel_button, ButtonStyle::Cancel);
        theme.theme_button(&mut self.link_button, ButtonStyle::Link);

        theme.theme_label(&mut self.title_label, TextStyle::Title);
        theme.theme_label(&mut self.subtitle_label, TextStyle::Subtitle);
        theme.theme_label(&mut self.body_label, TextStyle::Body);
        theme.theme_label(&mut self.switch_theme_label, TextStyle::Body);
    }

    /// Activate `theme` and restyle everything on screen
    pub fn activate(&mut self, theme: SharedTheme) {
        self.registry.set_active(theme);

        let theme = self.registry.active();
        theme.theme_application(&mut self.application);
        self.theme_views();
        theme.theme_switch(&mut self.demo_switch);
        theme.theme_stepper(&mut self.theme_stepper);
    }

    /// React to the theme stepper moving to `value`
    pub fn did_touch_stepper(&mut self, value: usize) {
        self.theme_stepper.value = value.min(self.theme_stepper.maximum_value);
        let theme = self.catalog.at_step(self.theme_stepper.value);
        self.activate(theme);
    }

    /// Press the stepper's increment button, wrapping past the last theme
    pub fn step_forward(&mut self) {
        let next = if self.theme_stepper.value >= self.theme_stepper.maximum_value {
            0
        } else {
            self.theme_stepper.value + 1
        };
        self.did_touch_stepper(next);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::font::{FontBook, FontProvider};
    use crate::core::widget::ControlState;

    fn screen() -> DemoScreen {
        let fonts: Arc<dyn FontProvider> = Arc::new(FontBook::builtin());
        DemoScreen::new(ThemeCatalog::builtin(fonts).unwrap(), ThemeRegistry::new())
    }

    #[test]
    fn test_launch_uses_dark_theme() {
        let screen = screen();
        let theme = screen.active_theme();
        assert_eq!(theme.name(), "dark");
        assert_eq!(screen.background, Some(theme.colors().background_primary));
        assert_eq!(screen.demo_switch.on_tint_color, Some(theme.colors().primary));
        assert_eq!(screen.theme_stepper.maximum_value, 3);
        assert_eq!(
            screen.title_label.text_color,
            Some(theme.colors().text_light)
        );
    }

    #[test]
    fn test_launch_tints_switch_and_stepper() {
        let screen = screen();
        let primary = screen.active_theme().colors().primary;
        assert!(screen.demo_switch.on);
        assert_eq!(screen.application.window_tint_color, Some(primary));
        assert_eq!(screen.theme_stepper.tint_color, Some(primary));
        assert_eq!(screen.catalog().len(), 4);
    }

    #[test]
    fn test_stepper_switches_theme() {
        let mut screen = screen();
        screen.did_touch_stepper(1);

        let theme = screen.active_theme();
        assert_eq!(theme.name(), "default");
        assert_eq!(screen.title_label.text_color, Some(theme.colors().primary));
        assert_eq!(
            screen.cancel_button.title_color(ControlState::Normal),
            Some(theme.colors().text_default)
        );
        assert_eq!(screen.application.window_tint_color, Some(theme.colors().primary));
        assert_eq!(screen.theme_stepper.tint_color, Some(theme.colors().primary));
    }

    #[test]
    fn test_stepper_clamps_to_maximum() {
        let mut screen = screen();
        screen.did_touch_stepper(42);
        assert_eq!(screen.theme_stepper.value, 3);
        assert_eq!(screen.active_theme().name(), "sandstone");
    }

    #[test]
    fn test_step_forward_wraps() {
        let mut screen = screen();
        let mut seen = Vec::new();
        for _ in 0..5 {
            screen.step_forward();
            seen.push(screen.active_theme().name().to_string());
        }
        assert_eq!(seen, vec!["default", "lagoon", "sandstone", "dark", "default"]);
    }
}
