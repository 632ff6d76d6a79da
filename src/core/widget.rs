//! Widget seams
//!
//! Themes never render. They push fonts, colors and background assets into
//! widgets owned by the host through these traits. The `Recording*` types
//! keep whatever was applied and back the terminal preview and the tests.

use std::collections::BTreeMap;

use crate::core::color::Color;
use crate::core::font::Font;

/// Interaction state a button property applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ControlState {
    Normal,
    Highlighted,
}

/// A button-like widget
pub trait ButtonWidget {
    fn set_title_color(&mut self, color: Color, state: ControlState);
    fn set_title_font(&mut self, font: Font);
    /// Set the named background asset for a state
    fn set_background_image(&mut self, asset: &str, state: ControlState);
}

/// A label-like widget
pub trait LabelWidget {
    fn set_font(&mut self, font: Font);
    fn set_text_color(&mut self, color: Color);
}

/// An on/off switch
pub trait SwitchWidget {
    fn set_on_tint_color(&mut self, color: Color);
}

/// An increment/decrement control
pub trait StepperWidget {
    fn set_tint_color(&mut self, color: Color);
}

/// Application-wide styling hooks
pub trait ApplicationHost {
    /// Tint of the key window, if there is one
    fn set_window_tint_color(&mut self, color: Color);
    /// Appearance proxy applied to every switch
    fn switch_appearance(&mut self) -> &mut dyn SwitchWidget;
    /// Appearance proxy applied to every stepper
    fn stepper_appearance(&mut self) -> &mut dyn StepperWidget;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingButton {
    pub title_colors: BTreeMap<ControlState, Color>,
    pub font: Option<Font>,
    pub background_images: BTreeMap<ControlState, String>,
}

impl RecordingButton {
    pub fn title_color(&self, state: ControlState) -> Option<Color> {
        self.title_colors.get(&state).copied()
    }

    pub fn background_image(&self, state: ControlState) -> Option<&str> {
        self.background_images.get(&state).map(String::as_str)
    }
}

impl ButtonWidget for RecordingButton {
    fn set_title_color(&mut self, color: Color, state: ControlState) {
        self.title_colors.insert(state, color);
    }

    fn set_title_font(&mut self, font: Font) {
        self.font = Some(font);
    }

    fn set_background_image(&mut self, asset: &str, state: ControlState) {
        self.background_images.insert(state, asset.to_string());
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingLabel {
    pub text: String,
    pub font: Option<Font>,
    pub text_color: Option<Color>,
}

impl RecordingLabel {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

impl LabelWidget for RecordingLabel {
    fn set_font(&mut self, font: Font) {
        self.font = Some(font);
    }

    fn set_text_color(&mut self, color: Color) {
        self.text_color = Some(color);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RecordingSwitch {
    pub on: bool,
    pub on_tint_color: Option<Color>,
}

impl SwitchWidget for RecordingSwitch {
    fn set_on_tint_color(&mut self, color: Color) {
        self.on_tint_color = Some(color);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RecordingStepper {
    pub value: usize,
    pub maximum_value: usize,
    pub tint_color: Option<Color>,
}

impl StepperWidget for RecordingStepper {
    fn set_tint_color(&mut self, color: Color) {
        self.tint_color = Some(color);
    }
}

/// Application host with a key window and appearance proxies
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingApplication {
    pub window_tint_color: Option<Color>,
    pub switch_appearance: RecordingSwitch,
    pub stepper_appearance: RecordingStepper,
}

impl ApplicationHost for RecordingApplication {
    fn set_window_tint_color(&mut self, color: Color) {
        self.window_tint_color = Some(color);
    }

    fn switch_appearance(&mut self) -> &mut dyn SwitchWidget {
        &mut self.switch_appearance
    }

    fn stepper_appearance(&mut self) -> &mut dyn StepperWidget {
        &mut self.stepper_appearance
    }
}
