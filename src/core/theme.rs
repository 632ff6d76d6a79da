//! The theme contract
//!
//! Every theme resolves a palette, fonts and text styles. Widget styling
//! (labels, buttons, switches, steppers, the application tint) is provided
//! here once and shared by all variants.

use crate::core::button::ButtonAppearance;
use crate::core::color::Color;
use crate::core::font::Font;
use crate::core::style::{ButtonStyle, FontStyle, TextAppearance, TextStyle, ThemeColors};
use crate::core::widget::{
    ApplicationHost, ButtonWidget, LabelWidget, StepperWidget, SwitchWidget,
};

/// A palette plus font-resolution strategy plus widget-styling policy
pub trait Theme: Send + Sync {
    /// Catalog name of the theme
    fn name(&self) -> &str;

    /// The theme's palette
    fn colors(&self) -> &ThemeColors;

    /// Resolve a semantic font style at a point size
    ///
    /// Never fails: an unavailable family resolves to the regular system
    /// font at `size`.
    fn font(&self, style: FontStyle, size: f32) -> Font;

    /// Font and color for a text role
    fn style_for_text_style(&self, style: TextStyle) -> TextAppearance;

    /// Normal-state title color of Cancel buttons
    fn cancel_title_color(&self) -> Color {
        self.colors().text_default
    }

    fn theme_button(&self, button: &mut dyn ButtonWidget, style: ButtonStyle) {
        ButtonAppearance::resolve(self, style).apply(button);
    }

    fn theme_label(&self, label: &mut dyn LabelWidget, style: TextStyle) {
        let appearance = self.style_for_text_style(style);
        label.set_font(appearance.font);
        label.set_text_color(appearance.color);
    }

    /// Tint the key window and the switch/stepper appearance proxies
    fn theme_application(&self, host: &mut dyn ApplicationHost) {
        host.set_window_tint_color(self.colors().primary);
        self.theme_switch(host.switch_appearance());
        self.theme_stepper(host.stepper_appearance());
    }

    fn theme_switch(&self, switch: &mut dyn SwitchWidget) {
        switch.set_on_tint_color(self.colors().primary);
    }

    fn theme_stepper(&self, stepper: &mut dyn StepperWidget) {
        stepper.set_tint_color(self.colors().primary);
    }
}

/// Text mapping shared by the variants; only the Title color differs
pub(crate) fn text_appearance<T: Theme + ?Sized>(
    theme: &T,
    style: TextStyle,
    title_color: Color,
) -> TextAppearance {
    let (font_style, size) = style.font_spec();
    let color = match style {
        TextStyle::Title => title_color,
        TextStyle::Subtitle => theme.colors().text_dark,
        TextStyle::Body => theme.colors().text_default,
    };

    TextAppearance {
        font: theme.font(font_style, size),
        color,
    }
}
