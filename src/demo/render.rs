//! Terminal rendering of themes and the demo screen
//!
//! Colors are written as 24-bit ANSI sequences. Translucent colors are
//! blended over the screen background first. With `styled == false` the
//! output is plain text.

use std::fmt::Write as _;

use crossterm::style::{Color as TermColor, Stylize};

use crate::core::color::Color;
use crate::core::font::Font;
use crate::core::style::{ButtonStyle, TextStyle};
use crate::core::theme::Theme;
use crate::core::widget::{ControlState, RecordingButton, RecordingLabel};
use crate::demo::screen::DemoScreen;

const SWATCH: &str = "████";

/// Blend `color` over an opaque `background`
fn blend(color: Color, background: Color) -> Color {
    let mix = |fg: f32, bg: f32| fg * color.alpha + bg * (1.0 - color.alpha);
    Color::rgba(
        mix(color.red, background.red),
        mix(color.green, background.green),
        mix(color.blue, background.blue),
        1.0,
    )
}

fn term_color(color: Color, background: Color) -> TermColor {
    let (r, g, b) = blend(color, background).to_rgb8();
    TermColor::Rgb { r, g, b }
}

fn paint(text: &str, fg: Option<Color>, bg: Color, styled: bool) -> String {
    if !styled {
        return text.to_string();
    }
    let content = text.on(term_color(bg, bg));
    match fg {
        Some(fg) => content.with(term_color(fg, bg)).to_string(),
        None => content.to_string(),
    }
}

fn font_label(font: Option<&Font>) -> String {
    font.map(Font::to_string).unwrap_or_else(|| "unstyled".into())
}

/// Palette swatches and text styles of a theme
pub fn render_theme(theme: &dyn Theme, styled: bool) -> String {
    let colors = theme.colors();
    let mut out = String::new();

    let _ = writeln!(out, "Theme: {}", theme.name());
    let _ = writeln!(out);
    let _ = writeln!(out, "Colors");
    for (slot, color) in colors.iter() {
        let swatch = if styled {
            SWATCH.with(term_color(color, Color::white(0.0, 1.0))).to_string()
        } else {
            String::new()
        };
        let _ = writeln!(out, "  {:<20} {} {}", slot.key(), color.to_hex(), swatch);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Text styles");
    for style in TextStyle::ALL {
        let appearance = theme.style_for_text_style(style);
        let _ = writeln!(
            out,
            "  {:<20} {} {}",
            style.key(),
            appearance.color.to_hex(),
            appearance.font
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Buttons");
    for style in ButtonStyle::ALL {
        let mut button = RecordingButton::default();
        theme.theme_button(&mut button, style);
        let _ = writeln!(out, "  {:<20} {}", style.key(), describe_button(&button));
    }

    out
}

fn describe_button(button: &RecordingButton) -> String {
    let color = |state| {
        button
            .title_color(state)
            .map(|c: Color| {
                if c.alpha < 1.0 {
                    format!("{} @ {:.0}%", c.to_hex(), c.alpha * 100.0)
                } else {
                    c.to_hex()
                }
            })
            .unwrap_or_else(|| "-".into())
    };

    format!(
        "normal {} / highlighted {} / {} / background {}",
        color(ControlState::Normal),
        color(ControlState::Highlighted),
        font_label(button.font.as_ref()),
        button
            .background_image(ControlState::Normal)
            .unwrap_or("none")
    )
}

fn render_label(label: &RecordingLabel, bg: Color, styled: bool) -> String {
    let text = paint(&label.text, label.text_color, bg, styled);
    format!("  {}  ({})", text, font_label(label.font.as_ref()))
}

fn render_button(title: &str, button: &RecordingButton, bg: Color, styled: bool) -> String {
    let face = match button.background_image(ControlState::Normal) {
        Some(_) => format!("[ {} ]", title),
        None => title.to_string(),
    };
    paint(&face, button.title_color(ControlState::Normal), bg, styled)
}

/// The demo screen as it would be drawn with its current styling
pub fn render_screen(screen: &DemoScreen, styled: bool) -> String {
    let theme = screen.active_theme();
    let bg = screen
        .background
        .unwrap_or(theme.colors().background_primary);
    let mut out = String::new();

    let _ = writeln!(
        out,
        "── {} ({}/{}) ──",
        theme.name(),
        screen.theme_stepper.value,
        screen.theme_stepper.maximum_value
    );
    let _ = writeln!(out, "{}", render_label(&screen.title_label, bg, styled));
    let _ = writeln!(out, "{}", render_label(&screen.subtitle_label, bg, styled));
    let _ = writeln!(out, "{}", render_label(&screen.body_label, bg, styled));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  {}  {}  {}",
        render_button("Submit", &screen.submit_button, bg, styled),
        render_button("Cancel", &screen.cancel_button, bg, styled),
        render_button("Link", &screen.link_button, bg, styled),
    );
    let _ = writeln!(out);

    let switch_face = if screen.demo_switch.on { "(●)" } else { "( )" };
    let _ = writeln!(
        out,
        "{}  {}  {}",
        render_label(&screen.switch_theme_label, bg, styled),
        paint(switch_face, screen.demo_switch.on_tint_color, bg, styled),
        paint("[-|+]", screen.theme_stepper.tint_color, bg, styled),
    );

    out
}
