//! Color tint for level geometry.
//!
//! The [`Tint`] component selects the color a
//! [`StaticCollider`](crate::components::collider::StaticCollider) box is
//! drawn with. Boxes without it are drawn light gray.

use bevy_ecs::prelude::Component;
use raylib::prelude::Color;

#[derive(Component, Clone, Debug, Copy)]
pub struct Tint {
    pub color: Color,
}

impl Tint {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            color: Color::new(r, g, b, a),
        }
    }

    /// Parse `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> Result<Self, String> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() || (digits.len() != 6 && digits.len() != 8) {
            return Err(format!("invalid color '{}'", hex));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| format!("invalid color '{}': {}", hex, e))
        };
        let a = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// Same color with alpha scaled by `opacity` in [0, 1].
    pub fn faded(color: Color, opacity: f32) -> Color {
        let a = (color.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
        Color::new(color.r, color.g, color.b, a)
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self {
            color: Color::LIGHTGRAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_rgb_and_rgba() {
        let t = Tint::from_hex("#ff8000").unwrap();
        assert_eq!((t.color.r, t.color.g, t.color.b, t.color.a), (255, 128, 0, 255));
        let t = Tint::from_hex("10203040").unwrap();
        assert_eq!((t.color.r, t.color.g, t.color.b, t.color.a), (16, 32, 48, 64));
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(Tint::from_hex("#fff").is_err());
        assert!(Tint::from_hex("#gg0000").is_err());
    }

    #[test]
    fn test_from_hex_rejects_multibyte_without_panicking() {
        // Eight bytes, but not eight hex digits.
        assert_eq!("aéééb".len(), 8);
        assert!(Tint::from_hex("#aéééb").is_err());
        assert!(Tint::from_hex("ff00é").is_err());
    }

    #[test]
    fn test_faded_scales_alpha() {
        let c = Tint::faded(Color::new(10, 20, 30, 200), 0.5);
        assert_eq!(c.a, 100);
        assert_eq!(c.r, 10);
        assert_eq!(Tint::faded(Color::WHITE, 2.0).a, 255);
    }
}
