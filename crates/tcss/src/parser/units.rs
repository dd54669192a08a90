//! Numeric value parsers: integers, spacing and size constraints.

use crate::types::geometry::{Constraint, Spacing};
use nom::{
    IResult,
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{char, digit1, multispace0, multispace1},
    combinator::{all_consuming, map, map_opt, map_res, opt, recognize, value},
    multi::separated_list1,
    sequence::{delimited, pair, separated_pair, terminated, tuple},
};

/// Runs `parser` over the whole input (surrounding whitespace allowed).
pub(crate) fn parse_all<'a, O>(
    parser: impl FnMut(&'a str) -> IResult<&'a str, O>,
    input: &'a str,
) -> Option<O> {
    all_consuming(delimited(multispace0, parser, multispace0))(input)
        .ok()
        .map(|(_, output)| output)
}

/// `name( inner )`, name matched case-insensitively.
pub(crate) fn function<'a, O>(
    name: &'static str,
    inner: impl FnMut(&'a str) -> IResult<&'a str, O>,
) -> impl FnMut(&'a str) -> IResult<&'a str, O> {
    delimited(
        tuple((tag_no_case(name), multispace0, char('('), multispace0)),
        inner,
        pair(multispace0, char(')')),
    )
}

pub(crate) fn parse_u8(input: &str) -> IResult<&str, u8> {
    map_res(digit1, str::parse)(input)
}

pub(crate) fn parse_u16(input: &str) -> IResult<&str, u16> {
    map_res(digit1, str::parse)(input)
}

fn parse_u32(input: &str) -> IResult<&str, u32> {
    map_res(digit1, str::parse)(input)
}

/// A signed integer (e.g., `3`, `-1`).
pub fn parse_integer(input: &str) -> IResult<&str, i32> {
    map_res(recognize(pair(opt(char('-')), digit1)), str::parse)(input)
}

/// Parse CSS-style spacing (margin/padding).
/// Supports 1 value (all), 2 values (vertical, horizontal), or 4 values
/// (top, right, bottom, left).
pub fn parse_spacing(input: &str) -> IResult<&str, Spacing> {
    map_opt(
        separated_list1(multispace1, parse_u16),
        |values: Vec<u16>| match values.as_slice() {
            [all] => Some(Spacing::all(*all)),
            [vertical, horizontal] => Some(Spacing::vertical_horizontal(*vertical, *horizontal)),
            [top, right, bottom, left] => Some(Spacing::new(*top, *right, *bottom, *left)),
            _ => None,
        },
    )(input)
}

/// `fill`, `fill(N)`, `N%`, `min(N)`, `max(N)`, `N/M`, `N` or `fit`.
pub fn parse_constraint(input: &str) -> IResult<&str, Constraint> {
    alt((
        map(function("fill", parse_u16), Constraint::Fill),
        value(Constraint::Fill(1), tag_no_case("fill")),
        map(function("min", parse_u16), Constraint::Min),
        map(function("max", parse_u16), Constraint::Max),
        value(Constraint::Fit, tag_no_case("fit")),
        map(terminated(parse_u16, char('%')), Constraint::Percentage),
        map_opt(
            separated_pair(parse_u32, delimited(multispace0, char('/'), multispace0), parse_u32),
            |(n, m)| (m != 0).then_some(Constraint::Ratio(n, m)),
        ),
        map(parse_u16, Constraint::Length),
    ))(input)
}

pub fn integer_value(input: &str) -> Option<i32> {
    parse_all(parse_integer, input)
}

pub fn spacing_value(input: &str) -> Option<Spacing> {
    parse_all(parse_spacing, input)
}

pub fn constraint_value(input: &str) -> Option<Constraint> {
    parse_all(parse_constraint, input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_accepts_one_two_or_four_values() {
        assert_eq!(spacing_value("1"), Some(Spacing::all(1)));
        assert_eq!(spacing_value("1 2"), Some(Spacing::new(1, 2, 1, 2)));
        assert_eq!(spacing_value("1 2 3 4"), Some(Spacing::new(1, 2, 3, 4)));
        assert_eq!(spacing_value("1 2 3"), None);
        assert_eq!(spacing_value("1 2 3 4 5"), None);
        assert_eq!(spacing_value("-1"), None);
    }

    #[test]
    fn constraint_forms() {
        assert_eq!(constraint_value("fill"), Some(Constraint::Fill(1)));
        assert_eq!(constraint_value("fill(3)"), Some(Constraint::Fill(3)));
        assert_eq!(constraint_value("50%"), Some(Constraint::Percentage(50)));
        assert_eq!(constraint_value("min(4)"), Some(Constraint::Min(4)));
        assert_eq!(constraint_value("max( 8 )"), Some(Constraint::Max(8)));
        assert_eq!(constraint_value("1/3"), Some(Constraint::Ratio(1, 3)));
        assert_eq!(constraint_value("12"), Some(Constraint::Length(12)));
        assert_eq!(constraint_value("fit"), Some(Constraint::Fit));
    }

    #[test]
    fn malformed_constraints_have_no_value() {
        assert_eq!(constraint_value("fillx"), None);
        assert_eq!(constraint_value("1/0"), None);
        assert_eq!(constraint_value("1.5"), None);
        assert_eq!(constraint_value(""), None);
    }

    #[test]
    fn integers_may_be_negative() {
        assert_eq!(integer_value("-2"), Some(-2));
        assert_eq!(integer_value("7"), Some(7));
        assert_eq!(integer_value("seven"), None);
    }
}
