//! Keyword and colour value parsers.
//!
//! - Colors: `red`, `dark-gray`, `#f00`, `#ff0000`, `rgb(255, 0, 0)`, `indexed(42)`, `42`, `reset`
//! - Borders: `rounded`, `double`, `thick`, ...
//! - Text alignment: `left`, `center`, `right`
//! - Layout: `horizontal`/`vertical`, flex modes
//! - Text style: `bold italic underlined`
//! - Strings: `"─" "─" "│" "│"`

use crate::parser::units::{function, parse_all, parse_u8};
use crate::types::border::BorderKind;
use crate::types::color::Color;
use crate::types::layout::{Direction, Flex};
use crate::types::text::{Modifier, TextAlign};
use nom::{
    IResult,
    branch::alt,
    bytes::complete::{escaped_transform, is_not, take_while1},
    character::complete::{anychar, char, hex_digit1, multispace0, multispace1},
    combinator::{map, map_opt, opt},
    multi::separated_list1,
    sequence::{delimited, preceded, tuple},
};

/// Parses a CSS identifier (alphanumeric characters, dashes, and underscores).
pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

fn comma(input: &str) -> IResult<&str, char> {
    delimited(multispace0, char(','), multispace0)(input)
}

/// Parse a color value.
/// Handles: hex (#rgb, #rrggbb), rgb(), indexed(), a bare palette index,
/// named colors and reset.
pub fn parse_color(input: &str) -> IResult<&str, Color> {
    alt((
        map_opt(preceded(char('#'), hex_digit1), Color::from_hex),
        map(
            function("rgb", tuple((parse_u8, comma, parse_u8, comma, parse_u8))),
            |(r, _, g, _, b)| Color::Rgb(r, g, b),
        ),
        map(function("indexed", parse_u8), Color::Indexed),
        map(parse_u8, Color::Indexed),
        map_opt(parse_ident, Color::from_name),
    ))(input)
}

pub fn parse_border_kind(input: &str) -> IResult<&str, BorderKind> {
    map_opt(parse_ident, BorderKind::from_keyword)(input)
}

pub fn parse_text_align(input: &str) -> IResult<&str, TextAlign> {
    map_opt(parse_ident, |s: &str| match s.to_ascii_lowercase().as_str() {
        "left" => Some(TextAlign::Left),
        "center" => Some(TextAlign::Center),
        "right" => Some(TextAlign::Right),
        _ => None,
    })(input)
}

pub fn parse_direction(input: &str) -> IResult<&str, Direction> {
    map_opt(parse_ident, |s: &str| match s.to_ascii_lowercase().as_str() {
        "horizontal" | "row" => Some(Direction::Horizontal),
        "vertical" | "column" => Some(Direction::Vertical),
        _ => None,
    })(input)
}

pub fn parse_flex(input: &str) -> IResult<&str, Flex> {
    map_opt(parse_ident, |s: &str| match s.to_ascii_lowercase().as_str() {
        "legacy" => Some(Flex::Legacy),
        "start" => Some(Flex::Start),
        "end" => Some(Flex::End),
        "center" => Some(Flex::Center),
        "space-between" => Some(Flex::SpaceBetween),
        "space-around" => Some(Flex::SpaceAround),
        "space-evenly" => Some(Flex::SpaceEvenly),
        _ => None,
    })(input)
}

/// Space-separated `text-style` keywords, combined into one flag set.
pub fn parse_modifiers(input: &str) -> IResult<&str, Modifier> {
    map(
        separated_list1(multispace1, map_opt(parse_ident, Modifier::from_keyword)),
        |flags| flags.into_iter().fold(Modifier::empty(), |acc, flag| acc | flag),
    )(input)
}

/// A single- or double-quoted string with `\` escapes.
pub fn parse_string(input: &str) -> IResult<&str, String> {
    alt((
        delimited(
            char('"'),
            map(opt(escaped_transform(is_not("\\\""), '\\', anychar)), Option::unwrap_or_default),
            char('"'),
        ),
        delimited(
            char('\''),
            map(opt(escaped_transform(is_not("\\'"), '\\', anychar)), Option::unwrap_or_default),
            char('\''),
        ),
    ))(input)
}

/// One or more quoted strings separated by whitespace.
pub fn parse_string_list(input: &str) -> IResult<&str, Vec<String>> {
    separated_list1(multispace1, parse_string)(input)
}

pub fn color_value(input: &str) -> Option<Color> {
    parse_all(parse_color, input)
}

pub fn border_kind_value(input: &str) -> Option<BorderKind> {
    parse_all(parse_border_kind, input)
}

pub fn text_align_value(input: &str) -> Option<TextAlign> {
    parse_all(parse_text_align, input)
}

pub fn direction_value(input: &str) -> Option<Direction> {
    parse_all(parse_direction, input)
}

pub fn flex_value(input: &str) -> Option<Flex> {
    parse_all(parse_flex, input)
}

pub fn modifiers_value(input: &str) -> Option<Modifier> {
    parse_all(parse_modifiers, input)
}

pub fn string_list_value(input: &str) -> Option<Vec<String>> {
    parse_all(parse_string_list, input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_forms() {
        assert_eq!(color_value("red"), Some(Color::Red));
        assert_eq!(color_value("dark-gray"), Some(Color::DarkGray));
        assert_eq!(color_value("#0f0"), Some(Color::Rgb(0, 255, 0)));
        assert_eq!(color_value("#102030"), Some(Color::Rgb(16, 32, 48)));
        assert_eq!(color_value("rgb(1, 2, 3)"), Some(Color::Rgb(1, 2, 3)));
        assert_eq!(color_value("RGB(1,2,3)"), Some(Color::Rgb(1, 2, 3)));
        assert_eq!(color_value("indexed(200)"), Some(Color::Indexed(200)));
        assert_eq!(color_value("17"), Some(Color::Indexed(17)));
        assert_eq!(color_value("reset"), Some(Color::Reset));
    }

    #[test]
    fn malformed_colors_have_no_value() {
        assert_eq!(color_value("redish"), None);
        assert_eq!(color_value("#12"), None);
        assert_eq!(color_value("rgb(1, 2)"), None);
        assert_eq!(color_value("256"), None);
        assert_eq!(color_value("$accent"), None);
    }

    #[test]
    fn border_keywords_and_aliases() {
        assert_eq!(border_kind_value("solid"), Some(BorderKind::Plain));
        assert_eq!(border_kind_value("round"), Some(BorderKind::Rounded));
        assert_eq!(border_kind_value("heavy"), Some(BorderKind::Thick));
        assert_eq!(border_kind_value("tall"), Some(BorderKind::Tall));
        assert_eq!(border_kind_value("wavy"), None);
    }

    #[test]
    fn layout_keywords() {
        assert_eq!(direction_value("row"), Some(Direction::Horizontal));
        assert_eq!(direction_value("vertical"), Some(Direction::Vertical));
        assert_eq!(flex_value("space-between"), Some(Flex::SpaceBetween));
        assert_eq!(flex_value("legacy"), Some(Flex::Legacy));
        assert_eq!(text_align_value("center"), Some(TextAlign::Center));
        assert_eq!(text_align_value("justify"), None);
    }

    #[test]
    fn modifiers_combine() {
        assert_eq!(
            modifiers_value("bold underline"),
            Some(Modifier::BOLD | Modifier::UNDERLINED)
        );
        assert_eq!(modifiers_value("none"), Some(Modifier::empty()));
        assert_eq!(modifiers_value("bold sparkly"), None);
    }

    #[test]
    fn string_lists() {
        assert_eq!(
            string_list_value(r#""─" '│' "a\"b" """#),
            Some(vec![
                "─".to_string(),
                "│".to_string(),
                "a\"b".to_string(),
                String::new()
            ])
        );
        assert_eq!(string_list_value("plain"), None);
    }
}
