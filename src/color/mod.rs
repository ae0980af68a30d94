pub mod state;
pub mod text;

use std::fmt::Display;

use palette::Srgb;
use serde::{
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
};

/// An opaque 8-bit sRGB color.
///
/// There is no alpha channel. Anything read with an alpha value is treated as
/// fully opaque.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const RED: Self = Self::new(255, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::RED
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", text::format_hex(*self))
    }
}

impl From<[u8; 3]> for Color {
    fn from(value: [u8; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<Srgb<u8>> for Color {
    fn from(value: Srgb<u8>) -> Self {
        Self::new(value.red, value.green, value.blue)
    }
}

impl From<Color> for Srgb<u8> {
    fn from(value: Color) -> Self {
        Srgb::new(value.red, value.green, value.blue)
    }
}

impl From<egui::Color32> for Color {
    fn from(value: egui::Color32) -> Self {
        // egui colors are premultiplied, but we only ever hand out opaque ones
        Self::new(value.r(), value.g(), value.b())
    }
}

impl From<Color> for egui::Color32 {
    fn from(value: Color) -> Self {
        egui::Color32::from_rgb(value.red, value.green, value.blue)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&text::format_persisted(*self))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text::parse_persisted(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use palette::Srgb;

    use crate::color::Color;

    #[test]
    fn converts_to_and_from_palette() {
        let color = Color::new(12, 34, 56);
        let srgb: Srgb<u8> = color.into();
        assert_eq!(srgb.red, 12);
        assert_eq!(srgb.green, 34);
        assert_eq!(srgb.blue, 56);
        assert_eq!(Color::from(srgb), color);
    }

    #[test]
    fn converts_to_and_from_egui() {
        let color = Color::new(200, 100, 0);
        let color32: egui::Color32 = color.into();
        assert_eq!(color32.a(), 255);
        assert_eq!(Color::from(color32), color);
    }

    #[test]
    fn displays_as_hex() {
        assert_eq!(Color::new(0, 128, 255).to_string(), "#0080FF");
    }

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&Color::new(1, 2, 3)).unwrap();
        assert_eq!(json, r##""#010203""##);

        let color: Color = serde_json::from_str(r#""Navy""#).unwrap();
        assert_eq!(color, Color::new(0, 0, 128));

        assert!(serde_json::from_str::<Color>(r#""nope""#).is_err());
    }
}
