//! Terminal colours.
//!
//! A [`Color`] is what a terminal can actually display: one of the sixteen
//! named ANSI colours, an index into the 256-colour palette, a 24-bit RGB
//! value, or `Reset` (the terminal's own default).
//!
//! ## Supported Formats
//!
//! - **Named**: `red`, `dark-gray`, `light_blue`, `lightcyan` (separators optional)
//! - **Hex**: `#rgb`, `#rrggbb`
//! - **RGB**: `rgb(r, g, b)`
//! - **Indexed**: `indexed(N)` or a bare `N` in `0..=255`
//! - **Special**: `reset`

use std::fmt;
use std::str::FromStr;

use phf::phf_map;

/// A colour as understood by the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// The terminal's default colour.
    #[default]
    Reset,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
    DarkGray,
    LightRed,
    LightGreen,
    LightYellow,
    LightBlue,
    LightMagenta,
    LightCyan,
    White,
    Rgb(u8, u8, u8),
    /// Index into the 256-colour palette.
    Indexed(u8),
}

/// Named colours keyed by their lowercase name with separators removed.
static NAMED_COLORS: phf::Map<&'static str, Color> = phf_map! {
    "reset" => Color::Reset,
    "black" => Color::Black,
    "red" => Color::Red,
    "green" => Color::Green,
    "yellow" => Color::Yellow,
    "blue" => Color::Blue,
    "magenta" => Color::Magenta,
    "cyan" => Color::Cyan,
    "gray" => Color::Gray,
    "grey" => Color::Gray,
    "darkgray" => Color::DarkGray,
    "darkgrey" => Color::DarkGray,
    "lightred" => Color::LightRed,
    "lightgreen" => Color::LightGreen,
    "lightyellow" => Color::LightYellow,
    "lightblue" => Color::LightBlue,
    "lightmagenta" => Color::LightMagenta,
    "lightcyan" => Color::LightCyan,
    "white" => Color::White,
};

impl Color {
    /// Looks up a named colour. Case and `-`/`_` separators are ignored.
    pub fn from_name(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        NAMED_COLORS.get(key.as_str()).copied()
    }

    /// Parses `rgb` or `rrggbb` (without the leading `#`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            3 => {
                let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|d| d * 17);
                Some(Color::Rgb(digit(0)?, digit(1)?, digit(2)?))
            }
            6 => {
                let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
                Some(Color::Rgb(pair(0)?, pair(2)?, pair(4)?))
            }
            _ => None,
        }
    }
}

impl FromStr for Color {
    type Err = ();

    /// Parses any colour form accepted in a stylesheet.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::values::color_value(s).ok_or(())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Reset => "reset",
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::Gray => "gray",
            Color::DarkGray => "dark-gray",
            Color::LightRed => "light-red",
            Color::LightGreen => "light-green",
            Color::LightYellow => "light-yellow",
            Color::LightBlue => "light-blue",
            Color::LightMagenta => "light-magenta",
            Color::LightCyan => "light-cyan",
            Color::White => "white",
            Color::Rgb(r, g, b) => return write!(f, "#{r:02x}{g:02x}{b:02x}"),
            Color::Indexed(i) => return write!(f, "indexed({i})"),
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_ignore_case_and_separators() {
        assert_eq!(Color::from_name("dark-gray"), Some(Color::DarkGray));
        assert_eq!(Color::from_name("Light_Blue"), Some(Color::LightBlue));
        assert_eq!(Color::from_name("lightcyan"), Some(Color::LightCyan));
        assert_eq!(Color::from_name("grey"), Some(Color::Gray));
        assert_eq!(Color::from_name("chartreuse"), None);
    }

    #[test]
    fn hex_short_and_long() {
        assert_eq!(Color::from_hex("f00"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(Color::from_hex("1a2b3c"), Some(Color::Rgb(0x1a, 0x2b, 0x3c)));
        assert_eq!(Color::from_hex("12345"), None);
        assert_eq!(Color::from_hex("ggg"), None);
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for color in [
            Color::LightMagenta,
            Color::Rgb(1, 2, 3),
            Color::Indexed(42),
            Color::Reset,
        ] {
            assert_eq!(color.to_string().parse::<Color>(), Ok(color));
        }
    }
}
