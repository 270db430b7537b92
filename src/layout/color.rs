//! RGB colors.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An opaque RGB color, serialized as an `RRGGBB` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Pure black.
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Pure white.
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Create a color from channel values.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `RRGGBB` or `#RRGGBB`.
    pub fn from_hex(s: &str) -> Result<Self, Error> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(s.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| Error::InvalidColor(s.to_string()))
        };
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Uppercase `RRGGBB` form, as used in OOXML attributes.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("5B9BD5").unwrap(), Color::rgb(91, 155, 213));
        assert_eq!(Color::from_hex("#deeaf6").unwrap(), Color::rgb(222, 234, 246));
        assert!(Color::from_hex("12345").is_err());
        assert!(Color::from_hex("GGGGGG").is_err());
        assert!(Color::from_hex("ééé").is_err());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::rgb(102, 102, 102).to_hex(), "666666");
        assert_eq!(Color::rgb(91, 155, 213).to_string(), "#5B9BD5");
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Color::rgb(222, 234, 246)).unwrap();
        assert_eq!(json, "\"DEEAF6\"");

        let color: Color = serde_json::from_str("\"#000000\"").unwrap();
        assert_eq!(color, Color::BLACK);
        assert!(serde_json::from_str::<Color>("\"blue\"").is_err());
    }
}
