//! Stylesheet loading and switching.

#[path = "support/node.rs"]
mod node;

use std::path::PathBuf;

use node::Node;
use tcss::types::{BorderKind, Color, Spacing, TextAlign};
use tcss::{EngineConfig, PseudoClassState, StyleEngine, TcssError};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn themed_engine() -> StyleEngine {
    let config = EngineConfig {
        theme_variables: [("accent", "magenta")].into_iter().collect(),
        ..EngineConfig::default()
    };
    let mut engine = StyleEngine::with_config(config);
    engine.load_stylesheet("dark", fixture("dark.tcss")).unwrap();
    engine.load_stylesheet("light", fixture("light.tcss")).unwrap();
    engine
}

#[test]
fn test_load_fixture() {
    let mut engine = StyleEngine::new();
    engine.load_stylesheet("dark", fixture("dark.tcss")).unwrap();

    let sheet = engine.active_stylesheet().unwrap();
    let selectors: Vec<String> = sheet.rules.iter().map(|r| r.selector.to_string()).collect();
    assert_eq!(
        selectors,
        vec![
            "Screen",
            "Panel",
            "Panel.status",
            "Panel:focus",
            "Panel > Label",
            "Row:nth-child(even)",
        ]
    );
    assert_eq!(sheet.variables.get("accent"), Some("cyan"));
}

#[test]
fn test_resolve_against_fixture() {
    let engine = themed_engine();
    let screen = Node::new("Screen");
    let panel = Node::new("Panel").class("status").under(&screen);
    let label = Node::new("Label").under(&panel);

    let none = PseudoClassState::default();
    assert_eq!(engine.resolve(&screen, none).background(), Some(Color::Black));

    let resolved = engine.resolve(&panel, PseudoClassState::new().focused(true));
    assert_eq!(resolved.border_kind(), Some(BorderKind::Rounded));
    assert_eq!(resolved.border_color(), Some(Color::Cyan));
    assert_eq!(resolved.border_title_align(), Some(TextAlign::Center));
    assert_eq!(resolved.padding(), Some(Spacing::vertical_horizontal(0, 1)));

    let style = engine.resolve(&label, none).to_style();
    assert_eq!(style.fg, Some(Color::White));
    assert!(style.add_modifier.contains(tcss::types::Modifier::BOLD));
}

#[test]
fn test_switching_stylesheets() {
    let mut engine = themed_engine();
    let panel = Node::new("Panel");
    let none = PseudoClassState::default();

    assert_eq!(engine.active_name(), Some("dark"));
    assert_eq!(engine.resolve(&panel, none).border_kind(), Some(BorderKind::Rounded));

    engine.set_active("light").unwrap();
    let resolved = engine.resolve(&panel, none);
    assert_eq!(resolved.border_kind(), Some(BorderKind::Plain));
    // `$accent` is not defined in light.tcss, so the theme supplies it.
    assert_eq!(resolved.border_color(), Some(Color::Magenta));

    engine.set_active("dark").unwrap();
    assert_eq!(engine.resolve(&panel, none).border_color(), Some(Color::Gray));
}

#[test]
fn test_stylesheet_variables_shadow_theme_variables() {
    let engine = themed_engine();
    let panel = Node::new("Panel");
    let focused = engine.resolve(&panel, PseudoClassState::new().focused(true));
    assert_eq!(focused.border_color(), Some(Color::Cyan));
}

#[test]
fn test_broken_file_is_rejected_whole() {
    let mut engine = themed_engine();
    let err = engine
        .load_stylesheet("dark", fixture("broken.tcss"))
        .unwrap_err();
    let parse = err.as_parse_error().expect("a parse error");
    assert!(parse.message.contains("end of input"), "{}", parse.message);

    // The previous "dark" stylesheet is untouched and still active.
    assert_eq!(engine.active_name(), Some("dark"));
    let screen = Node::new("Screen");
    assert_eq!(
        engine.resolve(&screen, PseudoClassState::default()).background(),
        Some(Color::Black)
    );
}

#[test]
fn test_missing_file() {
    let mut engine = StyleEngine::new();
    let err = engine
        .load_stylesheet("main", fixture("missing.tcss"))
        .unwrap_err();
    assert!(matches!(err, TcssError::Io { .. }), "{err}");
    assert!(err.to_string().contains("missing.tcss"), "{err}");
    assert_eq!(engine.stylesheet_names().count(), 0);
}

#[test]
fn test_set_active_unknown_name() {
    let mut engine = themed_engine();
    let err = engine.set_active("solarized").unwrap_err();
    assert_eq!(err.to_string(), "Unknown stylesheet: solarized");
    assert_eq!(engine.active_name(), Some("dark"));
}

#[test]
fn test_empty_engine_resolves_to_nothing() {
    let engine = StyleEngine::new();
    let resolved = engine.resolve(&Node::new("Panel"), PseudoClassState::default());
    assert!(resolved.is_empty());
    assert_eq!(resolved.to_style(), tcss::Style::default());
}

#[test]
fn test_stylesheet_from_file_matches_stylesheet_from_source() {
    let source = std::fs::read_to_string(fixture("dark.tcss")).unwrap();
    let mut engine = StyleEngine::new();
    engine.load_stylesheet("file", fixture("dark.tcss")).unwrap();
    engine.add_stylesheet("text", &source).unwrap();
    assert_eq!(engine.stylesheet("file"), engine.stylesheet("text"));
}
