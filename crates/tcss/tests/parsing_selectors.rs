//! Integration tests for TCSS selector parsing.
//!
//! - Type selectors: `Button`, `Header`
//! - Class selectors: `.primary`, `.success`
//! - ID selectors: `#sidebar`, `#main`
//! - Universal selector: `*`
//! - Pseudo-classes: `:hover`, `:focus`, `:nth-child(2n+1)`
//! - Attribute selectors: `[title]`, `[type="text"]`, `[name^=a]`
//! - Combinators: descendant (space), child (`>`)
//! - Selector lists: `Button, .primary`

use tcss::parser::{AttributeOperator, Selector, Specificity, parse_selector_list};

fn one(source: &str) -> Selector {
    let mut list = parse_selector_list(source).unwrap();
    assert_eq!(list.len(), 1, "{source}");
    list.remove(0)
}

// ============================================================================
// SIMPLE SELECTORS
// ============================================================================

#[test]
fn test_type_selector_simple() {
    assert_eq!(one("Button"), Selector::type_name("Button"));
}

#[test]
fn test_type_selector_with_hyphen_and_underscore() {
    assert_eq!(one("my-widget"), Selector::type_name("my-widget"));
    assert_eq!(one("my_widget"), Selector::type_name("my_widget"));
}

#[test]
fn test_class_selector() {
    assert_eq!(one(".primary"), Selector::class("primary"));
}

#[test]
fn test_id_selector() {
    assert_eq!(one("#sidebar"), Selector::id("sidebar"));
}

#[test]
fn test_universal_selector() {
    assert_eq!(one("*"), Selector::Universal);
}

#[test]
fn test_pseudo_class_without_argument() {
    assert_eq!(one(":hover"), Selector::pseudo("hover"));
}

#[test]
fn test_pseudo_class_argument_is_kept_raw() {
    assert_eq!(
        one(":nth-child(2n+1)"),
        Selector::Pseudo("nth-child".into(), Some("2n+1".into()))
    );
    assert_eq!(
        one(":nth-child( odd )"),
        Selector::Pseudo("nth-child".into(), Some("odd".into()))
    );
}

// ============================================================================
// ATTRIBUTE SELECTORS
// ============================================================================

#[test]
fn test_attribute_existence() {
    assert_eq!(one("[title]"), Selector::Attribute("title".into(), None));
}

#[test]
fn test_attribute_operators() {
    let cases = [
        ("[type=\"text\"]", AttributeOperator::Equals, "text"),
        ("[name^=user]", AttributeOperator::StartsWith, "user"),
        ("[name$='_id']", AttributeOperator::EndsWith, "_id"),
        ("[name*=mid]", AttributeOperator::Contains, "mid"),
        ("[rows=3]", AttributeOperator::Equals, "3"),
    ];
    for (source, op, value) in cases {
        assert_eq!(
            one(source),
            Selector::Attribute(
                source[1..source.find(|c| "=^$*".contains(c)).unwrap()].to_string(),
                Some((op, value.to_string()))
            ),
            "{source}"
        );
    }
}

#[test]
fn test_dollar_equals_is_not_a_variable() {
    assert_eq!(
        one("[name$=x]"),
        Selector::Attribute("name".into(), Some((AttributeOperator::EndsWith, "x".into())))
    );
}

#[test]
fn test_attribute_errors() {
    assert!(parse_selector_list("[=x]").is_err());
    assert!(parse_selector_list("[a~=x]").is_err());
    assert!(parse_selector_list("[a=]").is_err());
    assert!(parse_selector_list("[a=x").is_err());
}

// ============================================================================
// COMPOUND SELECTORS
// ============================================================================

#[test]
fn test_compound_selector() {
    assert_eq!(
        one("Button.primary#submit:focus"),
        Selector::Compound(vec![
            Selector::type_name("Button"),
            Selector::class("primary"),
            Selector::id("submit"),
            Selector::pseudo("focus"),
        ])
    );
}

#[test]
fn test_type_must_come_first_in_compound() {
    assert!(parse_selector_list(".primary*").is_err());
    assert!(parse_selector_list("#a#b").is_ok());
}

// ============================================================================
// COMBINATORS
// ============================================================================

#[test]
fn test_descendant_combinator() {
    assert_eq!(
        one("Panel Button"),
        Selector::descendant(Selector::type_name("Panel"), Selector::type_name("Button"))
    );
}

#[test]
fn test_whitespace_separates_compounds() {
    assert_eq!(
        one("Panel .title"),
        Selector::descendant(Selector::type_name("Panel"), Selector::class("title"))
    );
    assert_eq!(
        one("Panel.title"),
        Selector::Compound(vec![Selector::type_name("Panel"), Selector::class("title")])
    );
}

#[test]
fn test_child_combinator_with_and_without_spaces() {
    let expected = Selector::child(Selector::type_name("Panel"), Selector::type_name("Label"));
    assert_eq!(one("Panel > Label"), expected);
    assert_eq!(one("Panel>Label"), expected);
}

#[test]
fn test_combinators_are_left_associative() {
    assert_eq!(
        one("Screen Panel > Label"),
        Selector::child(
            Selector::descendant(Selector::type_name("Screen"), Selector::type_name("Panel")),
            Selector::type_name("Label"),
        )
    );
}

#[test]
fn test_dangling_combinator_is_an_error() {
    assert!(parse_selector_list("Panel >").is_err());
}

// ============================================================================
// SELECTOR LISTS
// ============================================================================

#[test]
fn test_selector_list() {
    let list = parse_selector_list("Button, .primary , #main").unwrap();
    assert_eq!(
        list,
        vec![
            Selector::type_name("Button"),
            Selector::class("primary"),
            Selector::id("main"),
        ]
    );
}

#[test]
fn test_ampersand_outside_a_block_is_an_error() {
    let err = parse_selector_list("&.active").unwrap_err();
    let err = err.as_parse_error().unwrap();
    assert_eq!((err.line, err.column), (1, 1));
}

// ============================================================================
// SPECIFICITY
// ============================================================================

#[test]
fn test_specificity_counts() {
    let cases = [
        ("*", Specificity::new(0, 0, 0)),
        ("Button", Specificity::new(0, 0, 1)),
        (".a", Specificity::new(0, 1, 0)),
        ("[title]", Specificity::new(0, 1, 0)),
        (":focus", Specificity::new(0, 1, 0)),
        ("#x", Specificity::new(1, 0, 0)),
        ("Panel Button.primary:hover", Specificity::new(0, 2, 2)),
        ("#main > * .a", Specificity::new(1, 1, 0)),
    ];
    for (source, expected) in cases {
        assert_eq!(one(source).specificity(), expected, "{source}");
    }
}

#[test]
fn test_specificity_tiers() {
    let one_id = one("#x").specificity();
    let many_classes = one(".a.b.c.d.e.f.g.h.i.j.k").specificity();
    let one_class = one(".a").specificity();
    let many_types = one("A B C D E F G H I J K").specificity();
    assert!(one_id > many_classes);
    assert!(one_class > many_types);
}

#[test]
fn test_display_renders_css() {
    for source in [
        "Button",
        "Panel > Label",
        "Screen Panel.status:focus",
        "Input[type=\"text\"]",
        ":nth-child(2n+1)",
    ] {
        assert_eq!(one(source).to_string(), source);
    }
}
