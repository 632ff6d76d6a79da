//! Color values and hex parsing
//!
//! Colors are stored as RGBA with every channel in `[0, 1]`.

use once_cell::sync::Lazy;
use regex::Regex;

/// Exactly six hex digits with an optional leading `#`
static STRICT_HEX_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#?[0-9A-Fa-f]{6}$").expect("Invalid regex pattern for hex colors")
});

/// An RGBA color with channels in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Color {
    pub const BLUE: Self = Self::rgba(0.0, 0.0, 1.0, 1.0);
    /// Light text on dark backgrounds: white at 60% opacity
    pub const LIGHT_TEXT: Self = Self::white(1.0, 0.6);
    pub const DARK_GRAY: Self = Self::white(1.0 / 3.0, 1.0);
    pub const LIGHT_GRAY: Self = Self::white(2.0 / 3.0, 1.0);

    pub const fn rgba(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Opaque color from 8-bit channels
    pub fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(
            f32::from(red) / 255.0,
            f32::from(green) / 255.0,
            f32::from(blue) / 255.0,
            1.0,
        )
    }

    /// Grayscale color
    pub const fn white(white: f32, alpha: f32) -> Self {
        Self::rgba(white, white, white, alpha)
    }

    /// Same color with a different opacity
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    /// Parse a `#RRGGBB` string
    ///
    /// Parsing is lenient: leading whitespace and an optional `0x` are
    /// skipped, then as many hex digits as are present are read. A string
    /// with no digits yields black. Only the low 24 bits are used and alpha
    /// is always 1.
    pub fn from_hex(hex: &str) -> Self {
        if !STRICT_HEX_PATTERN.is_match(hex) {
            tracing::warn!("Color '{}' is not a #RRGGBB value, parsing leniently", hex);
        }

        let value = scan_hex(hex.strip_prefix('#').unwrap_or(hex));

        Self::rgba(
            ((value & 0xFF0000) >> 16) as f32 / 255.0,
            ((value & 0x00FF00) >> 8) as f32 / 255.0,
            (value & 0x0000FF) as f32 / 255.0,
            1.0,
        )
    }

    /// Channels scaled to 8 bits, rounded
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (
            channel_to_u8(self.red),
            channel_to_u8(self.green),
            channel_to_u8(self.blue),
        )
    }

    /// Format as `#RRGGBB` (alpha is dropped)
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }
}

fn channel_to_u8(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Read a hex integer from the start of `input`, saturating on overflow
fn scan_hex(input: &str) -> u32 {
    let trimmed = input.trim_start();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let mut value: u32 = 0;
    for c in digits.chars() {
        let Some(digit) = c.to_digit(16) else {
            break;
        };
        value = match value.checked_mul(16).and_then(|v| v.checked_add(digit)) {
            Some(v) => v,
            None => return u32::MAX,
        };
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_scales_channels() {
        let color = Color::from_hex("#0095B3");
        assert_eq!(color.red, 0.0);
        assert_eq!(color.green, 149.0 / 255.0);
        assert_eq!(color.blue, 179.0 / 255.0);
        assert_eq!(color.alpha, 1.0);
    }

    #[test]
    fn test_from_hex_without_hash() {
        assert_eq!(Color::from_hex("14A9C7"), Color::rgb8(20, 169, 199));
    }

    #[test]
    fn test_from_hex_is_lenient() {
        assert_eq!(Color::from_hex("not a color"), Color::rgb8(0, 0, 0));
        assert_eq!(Color::from_hex("#FF"), Color::rgb8(0, 0, 255));
        assert_eq!(Color::from_hex("0xCCCCCC"), Color::rgb8(204, 204, 204));
        assert_eq!(Color::from_hex("#FFFFFFFFFF"), Color::rgb8(255, 255, 255));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::rgb8(0, 149, 179).to_hex(), "#0095B3");
        assert_eq!(Color::white(0.2, 1.0).to_hex(), "#333333");
    }

    #[test]
    fn test_with_alpha_keeps_channels() {
        let faded = Color::rgb8(0, 149, 179).with_alpha(0.6);
        assert_eq!(faded.alpha, 0.6);
        assert_eq!(faded.with_alpha(1.0), Color::rgb8(0, 149, 179));
    }
}
