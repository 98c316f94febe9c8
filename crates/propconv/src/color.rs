//! RGBA colors.
//!
//! Accepted inputs:
//! - `{"r", "g", "b", "a"}` mapping, components normalized to 0..1, missing
//!   components 0;
//! - `[r, g, b]` (opaque) or `[r, g, b, a]`, normalized to 0..1;
//! - `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` hex strings;
//! - CSS/X11 color names and `transparent`;
//! - an integer holding packed `0xAARRGGBB`.
//!
//! Components are clamped to 0..1. Null and anything unrecognized give
//! [`Color::TRANSPARENT`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{convert::Convert, error::ConvertError, number::number};

/// A color with normalized RGBA components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red, 0..1.
    pub r: f32,
    /// Green, 0..1.
    pub g: f32,
    /// Blue, 0..1.
    pub b: f32,
    /// Alpha, 0..1; 0 is fully transparent.
    pub a: f32,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    /// Build a color from normalized components.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from 8-bit components.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        let n = |c: u8| f32::from(c) / 255.0;
        Self::rgba(n(r), n(g), n(b), n(a))
    }

    /// Unpack `0xAARRGGBB`.
    pub fn from_argb(packed: u32) -> Self {
        let [a, r, g, b] = packed.to_be_bytes();
        Self::from_rgba8(r, g, b, a)
    }

    /// Components rounded to 8 bits.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Canonical `#rrggbbaa` string.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }

    /// Clamp every component into 0..1.
    fn clamped(self) -> Self {
        let c = |v: f32| v.clamp(0.0, 1.0);
        Self::rgba(c(self.r), c(self.g), c(self.b), c(self.a))
    }
}

/// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
fn parse_hex(s: &str) -> Option<Color> {
    let digits = s.strip_prefix('#')?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).ok();
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    match digits.len() {
        3 | 4 => {
            let mut c = [0xffu8; 4];
            for (i, slot) in c.iter_mut().enumerate().take(digits.len()) {
                *slot = nibble(i)? * 0x11;
            }
            Some(Color::from_rgba8(c[0], c[1], c[2], c[3]))
        }
        6 | 8 => {
            let mut c = [0xffu8; 4];
            for (i, slot) in c.iter_mut().enumerate().take(digits.len() / 2) {
                *slot = byte(i * 2)?;
            }
            Some(Color::from_rgba8(c[0], c[1], c[2], c[3]))
        }
        _ => None,
    }
}

/// Resolve a hex string or a color name.
fn parse_color_str(s: &str) -> Option<Color> {
    let s = s.trim();
    if s.starts_with('#') {
        return parse_hex(s);
    }
    let name = s.to_ascii_lowercase();
    if name == "transparent" {
        return Some(Color::TRANSPARENT);
    }
    colornames::Color::try_from(name.as_str()).ok().map(|c| {
        let (r, g, b) = c.rgb();
        Color::from_rgba8(r, g, b, 255)
    })
}

impl Convert for Color {
    const NAME: &'static str = "Color";

    fn fallback() -> Self {
        Self::TRANSPARENT
    }

    fn try_convert(json: &Value) -> Result<Self, ConvertError> {
        match json {
            Value::String(s) => parse_color_str(s).ok_or_else(|| ConvertError::parse(Self::NAME, s)),
            Value::Number(n) => n
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .map(Self::from_argb)
                .ok_or_else(|| ConvertError::out_of_range(Self::NAME, n)),
            Value::Array(items) => {
                let comps: Vec<f32> = items.iter().map(|v| number(v) as f32).collect();
                match comps[..] {
                    [r, g, b] => Ok(Self::rgba(r, g, b, 1.0).clamped()),
                    [r, g, b, a] => Ok(Self::rgba(r, g, b, a).clamped()),
                    _ => Err(ConvertError::LengthEither {
                        short: 3,
                        long: 4,
                        found: items.len(),
                    }),
                }
            }
            Value::Object(map) => {
                let field = |k: &str| map.get(k).map_or(0.0, number) as f32;
                Ok(Self::rgba(field("r"), field("g"), field("b"), field("a")).clamped())
            }
            other => Err(ConvertError::mismatch("color", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::{
        convert::convert,
        diagnostics::{RecordingLog, with_sink},
    };

    /// Opaque red.
    const RED: Color = Color::rgba(1.0, 0.0, 0.0, 1.0);

    #[test]
    fn red_from_every_form() {
        assert_eq!(convert::<Color>(&json!({"r": 1.0, "g": 0.0, "b": 0.0, "a": 1.0})), RED);
        assert_eq!(convert::<Color>(&json!("#FF0000")), RED);
        assert_eq!(convert::<Color>(&json!("#f00")), RED);
        assert_eq!(convert::<Color>(&json!("red")), RED);
        assert_eq!(convert::<Color>(&json!([1, 0, 0])), RED);
        assert_eq!(convert::<Color>(&json!([1, 0, 0, 1])), RED);
        assert_eq!(convert::<Color>(&json!(0xFFFF0000u32)), RED);
    }

    #[test]
    fn missing_mapping_components_are_zero() {
        assert_eq!(convert::<Color>(&json!({"r": 1})), Color::rgba(1.0, 0.0, 0.0, 0.0));
        assert_eq!(convert::<Color>(&json!({})), Color::TRANSPARENT);
        assert_eq!(convert::<Color>(&json!({"b": 1, "a": 0.5})), Color::rgba(0.0, 0.0, 1.0, 0.5));
    }

    #[test]
    fn wrong_length_sequence_names_both_counts() {
        let err = Color::try_convert(&json!([1, 2])).unwrap_err();
        assert_eq!(
            err,
            ConvertError::LengthEither {
                short: 3,
                long: 4,
                found: 2
            }
        );
        assert_eq!(err.to_string(), "expected 3 or 4 elements, found 2");
    }

    #[test]
    fn alpha_forms() {
        assert_eq!(convert::<Color>(&json!("#ff000080")).to_rgba8(), [255, 0, 0, 128]);
        assert_eq!(convert::<Color>(&json!("#0f08")).to_rgba8(), [0, 255, 0, 136]);
        assert_eq!(convert::<Color>(&json!(0x80_00_00_FFu32)).to_rgba8(), [0, 0, 255, 128]);
        assert_eq!(convert::<Color>(&json!("transparent")), Color::TRANSPARENT);
    }

    #[test]
    fn sequences_are_normalized_and_clamped() {
        let c = convert::<Color>(&json!([2.0, -1.0, 0.5, 0.25]));
        assert_eq!(c, Color::rgba(1.0, 0.0, 0.5, 0.25));
    }

    #[test]
    fn null_and_garbage_are_transparent() {
        let log = Arc::new(RecordingLog::new());
        with_sink(log.clone(), || {
            assert_eq!(convert::<Color>(&Value::Null), Color::TRANSPARENT);
            assert_eq!(convert::<Color>(&json!("not-a-color")), Color::TRANSPARENT);
            assert_eq!(convert::<Color>(&json!("#12345")), Color::TRANSPARENT);
            assert_eq!(convert::<Color>(&json!([1, 2])), Color::TRANSPARENT);
            assert_eq!(convert::<Color>(&json!(-1)), Color::TRANSPARENT);
            assert_eq!(convert::<Color>(&json!(true)), Color::TRANSPARENT);
        });
        assert_eq!(log.len(), 5);
        assert!(log.type_names().iter().all(|t| t == "Color"));
    }

    #[test]
    fn hex_round_trip_is_canonical() {
        assert_eq!(Color::from_rgba8(0x10, 0x20, 0x30, 0xff).to_hex(), "#102030ff");
    }
}
