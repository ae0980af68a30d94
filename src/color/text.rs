//! Textual forms of [`Color`].
//!
//! - RGB text: `R,G,B` in decimal, e.g. `255,128,0`.
//! - Hex text: `#RRGGBB`, e.g. `#FF8000`. This is also the form palette files
//!   are written in.
//!
//! Palette files are parsed more leniently, see [`parse_persisted`].

use std::str::FromStr;

use palette::Srgb;

use crate::color::Color;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    #[error("Expected 3 comma-separated channels, but found {found}")]
    ChannelCount { found: usize },

    #[error("Invalid channel value: {value:?}")]
    InvalidChannel { value: String },

    #[error("Invalid hex color: {value:?}")]
    InvalidHex { value: String },

    #[error("Not a color: {value:?}")]
    Unrecognized { value: String },
}

pub fn format_rgb(color: Color) -> String {
    format!("{},{},{}", color.red, color.green, color.blue)
}

/// Parses `R,G,B`. Whitespace around the channels is ignored.
pub fn parse_rgb(text: &str) -> Result<Color, ParseColorError> {
    let fields = text.split(',').map(str::trim).collect::<Vec<_>>();

    let [red, green, blue] = fields[..]
    else {
        return Err(ParseColorError::ChannelCount {
            found: fields.len(),
        });
    };

    let channel = |value: &str| {
        value
            .parse::<u8>()
            .map_err(|_| ParseColorError::InvalidChannel {
                value: value.to_owned(),
            })
    };

    Ok(Color::new(channel(red)?, channel(green)?, channel(blue)?))
}

pub fn format_hex(color: Color) -> String {
    format!("#{:02X}{:02X}{:02X}", color.red, color.green, color.blue)
}

/// Parses `#RRGGBB` or the shorthand `#RGB`, in any case and with or without
/// the `#`. Surrounding whitespace is ignored.
pub fn parse_hex(text: &str) -> Result<Color, ParseColorError> {
    let text = text.trim();
    let digits = hex_digits(text).ok_or_else(|| invalid_hex(text))?;

    match digits.len() {
        3 | 6 => parse_rgb_hex_digits(digits).ok_or_else(|| invalid_hex(text)),
        _ => Err(invalid_hex(text)),
    }
}

pub fn format_persisted(color: Color) -> String {
    format_hex(color)
}

/// Parses a line from a palette file.
///
/// Hex colors must start with `#` and may be `#RGB`, `#RRGGBB` or `#AARRGGBB`
/// (alpha is dropped). Anything else is looked up as an SVG color name
/// (case-insensitive).
pub fn parse_persisted(text: &str) -> Result<Color, ParseColorError> {
    let text = text.trim();

    if !text.starts_with('#') {
        return palette::named::from_str(&text.to_ascii_lowercase())
            .map(Color::from)
            .ok_or_else(|| {
                ParseColorError::Unrecognized {
                    value: text.to_owned(),
                }
            });
    }

    let digits = hex_digits(text).ok_or_else(|| invalid_hex(text))?;

    match digits.len() {
        3 | 6 => parse_rgb_hex_digits(digits).ok_or_else(|| invalid_hex(text)),
        8 => parse_rgb_hex_digits(&digits[2..]).ok_or_else(|| invalid_hex(text)),
        _ => Err(invalid_hex(text)),
    }
}

/// Strips the optional `#` and checks that only hex digits are left.
fn hex_digits(text: &str) -> Option<&str> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit())).then_some(digits)
}

fn parse_rgb_hex_digits(digits: &str) -> Option<Color> {
    Srgb::<u8>::from_str(digits).ok().map(Color::from)
}

fn invalid_hex(text: &str) -> ParseColorError {
    ParseColorError::InvalidHex {
        value: text.to_owned(),
    }
}
