//! CSS color values.
//!
//! Documents store colors as CSS strings (`#4A90E2`, `rgba(0, 0, 0, 0.5)`,
//! `white`). They are parsed once at the document boundary into `Color`
//! and emitted back in canonical hex form.

use crate::error::SceneError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use winnow::ascii::{float, space0};
use winnow::combinator::{alt, opt, preceded};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::take_while;

/// RGBA color. Stored as 4 × f32 [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Helper to parse a single hex digit.
fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Parse a hex color string: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    /// The string may optionally start with `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();

        match bytes.len() {
            3 | 4 => {
                let mut channels = [255u8; 4];
                for (slot, &digit) in channels.iter_mut().zip(bytes) {
                    *slot = hex_val(digit)? * 17;
                }
                Some(Self::from_rgba8(
                    channels[0],
                    channels[1],
                    channels[2],
                    channels[3],
                ))
            }
            6 | 8 => {
                let mut channels = [255u8; 4];
                for (slot, pair) in channels.iter_mut().zip(bytes.chunks(2)) {
                    *slot = hex_val(pair[0])? << 4 | hex_val(pair[1])?;
                }
                Some(Self::from_rgba8(
                    channels[0],
                    channels[1],
                    channels[2],
                    channels[3],
                ))
            }
            _ => None,
        }
    }

    /// Parse any supported CSS color syntax.
    pub fn parse(input: &str) -> Result<Self, SceneError> {
        css_color
            .parse(input.trim())
            .map_err(|_| SceneError::InvalidColor(input.to_string()))
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            channel_to_u8(self.a),
        ]
    }

    /// Emit as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_css(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

fn channel_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ─── Parsers ─────────────────────────────────────────────────────────────

fn css_color(input: &mut &str) -> ModalResult<Color> {
    alt((hex_color, functional_color, named_color)).parse_next(input)
}

fn hex_color(input: &mut &str) -> ModalResult<Color> {
    let digits: &str =
        preceded('#', take_while(1..=8, |c: char| c.is_ascii_hexdigit())).parse_next(input)?;
    Color::from_hex(digits).ok_or_else(|| ErrMode::Backtrack(ContextError::new()))
}

/// `rgb(r, g, b)` / `rgba(r, g, b, a)`. Channels accept `0..255` or percentages.
fn functional_color(input: &mut &str) -> ModalResult<Color> {
    let _ = alt(("rgba", "rgb")).parse_next(input)?;
    let _ = (space0, '(', space0).parse_next(input)?;
    let r = rgb_channel.parse_next(input)?;
    list_separator.parse_next(input)?;
    let g = rgb_channel.parse_next(input)?;
    list_separator.parse_next(input)?;
    let b = rgb_channel.parse_next(input)?;
    let a = match opt(list_separator).parse_next(input)? {
        Some(()) => alpha_channel.parse_next(input)?,
        None => 1.0,
    };
    let _ = (space0, ')').parse_next(input)?;
    Ok(Color::rgba(r, g, b, a))
}

fn list_separator(input: &mut &str) -> ModalResult<()> {
    (space0, ',', space0).void().parse_next(input)
}

fn rgb_channel(input: &mut &str) -> ModalResult<f32> {
    let value: f64 = float.parse_next(input)?;
    let percent = opt('%').parse_next(input)?.is_some();
    let unit = if percent { value / 100.0 } else { value / 255.0 };
    Ok(quantize(unit))
}

fn alpha_channel(input: &mut &str) -> ModalResult<f32> {
    let value: f64 = float.parse_next(input)?;
    let percent = opt('%').parse_next(input)?.is_some();
    let value = if percent { value / 100.0 } else { value };
    Ok(quantize(value))
}

/// Snap a unit channel to 8 bits so parsed colors match `from_rgba8` exactly.
fn quantize(unit: f64) -> f32 {
    (unit.clamp(0.0, 1.0) * 255.0).round() as u8 as f32 / 255.0
}

fn named_color(input: &mut &str) -> ModalResult<Color> {
    let name: &str = take_while(1.., |c: char| c.is_ascii_alphabetic()).parse_next(input)?;
    lookup_named(name).ok_or_else(|| ErrMode::Backtrack(ContextError::new()))
}

fn lookup_named(name: &str) -> Option<Color> {
    let [r, g, b, a] = match name.to_ascii_lowercase().as_str() {
        "transparent" => [0, 0, 0, 0],
        "black" => [0, 0, 0, 255],
        "white" => [255, 255, 255, 255],
        "red" => [255, 0, 0, 255],
        "green" => [0, 128, 0, 255],
        "lime" => [0, 255, 0, 255],
        "blue" => [0, 0, 255, 255],
        "navy" => [0, 0, 128, 255],
        "yellow" => [255, 255, 0, 255],
        "orange" => [255, 165, 0, 255],
        "purple" => [128, 0, 128, 255],
        "gray" | "grey" => [128, 128, 128, 255],
        "silver" => [192, 192, 192, 255],
        "teal" => [0, 128, 128, 255],
        "maroon" => [128, 0, 0, 255],
        "olive" => [128, 128, 0, 255],
        "aqua" | "cyan" => [0, 255, 255, 255],
        "fuchsia" | "magenta" => [255, 0, 255, 255],
        "pink" => [255, 192, 203, 255],
        "brown" => [165, 42, 42, 255],
        "gold" => [255, 215, 0, 255],
        _ => return None,
    };
    Some(Color::from_rgba8(r, g, b, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_forms() {
        assert_eq!(Color::parse("#F00").unwrap().to_css(), "#FF0000");
        assert_eq!(Color::parse("#4a90e2").unwrap().to_css(), "#4A90E2");
        assert_eq!(Color::parse("#00000080").unwrap().to_css(), "#00000080");
        assert_eq!(Color::parse("#0008").unwrap().to_rgba8(), [0, 0, 0, 136]);
    }

    #[test]
    fn parse_functional_forms() {
        assert_eq!(
            Color::parse("rgb(255, 128, 0)").unwrap().to_rgba8(),
            [255, 128, 0, 255]
        );
        assert_eq!(
            Color::parse("rgba(0,0,0,0.5)").unwrap().to_rgba8(),
            [0, 0, 0, 128]
        );
        assert_eq!(
            Color::parse("rgb(100%, 0%, 50%)").unwrap().to_rgba8(),
            [255, 0, 128, 255]
        );
    }

    #[test]
    fn parse_named_colors() {
        assert_eq!(Color::parse("white").unwrap(), Color::WHITE);
        assert_eq!(Color::parse(" Navy ").unwrap().to_css(), "#000080");
        assert_eq!(Color::parse("transparent").unwrap().a, 0.0);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            Color::parse("#12"),
            Err(SceneError::InvalidColor(_))
        ));
        assert!(Color::parse("blurple").is_err());
        assert!(Color::parse("rgb(1, 2)").is_err());
        assert!(Color::parse("#FFFFFF trailing").is_err());
    }

    #[test]
    fn css_roundtrip_is_stable() {
        for css in ["#333333", "#FFFFFF", "#2C3E5080"] {
            let color = Color::parse(css).unwrap();
            assert_eq!(Color::parse(&color.to_css()).unwrap(), color);
        }
    }
}
