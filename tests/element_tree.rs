//! Resolving a whole element tree.

use tcss_toolkit::tcss::types::{Color, Constraint, Direction};
use tcss_toolkit::{Element, PseudoClassState, StyleEngine, Styleable};

const APP: &str = r#"
    $accent: cyan;

    Screen { direction: vertical; }
    Panel { border-color: gray; }
    Panel.status { background: black; }
    Panel.status:focus { border-color: $accent; }
    Screen > Panel > Label { color: white; }
    Row:first-child { height: 3; }
    Row:last-child { height: fill; }
    Row:nth-child(2) { color: yellow; }
    Input[placeholder] { width: 50%; }
"#;

fn tree(focused: bool) -> Element {
    Element::new("Screen")
        .with_child(
            Element::new("Panel")
                .with_id("main")
                .with_class("status")
                .with_state(PseudoClassState::new().focused(focused))
                .with_child(Element::new("Label"))
                .with_child(Element::new("Input").with_attribute("placeholder", "Name")),
        )
        .with_child(
            Element::new("List")
                .with_child(Element::new("Row"))
                .with_child(Element::new("Row"))
                .with_child(Element::new("Row")),
        )
}

#[test]
fn test_paths_follow_walk_order() {
    let engine = StyleEngine::from_source("app", APP).unwrap();
    let root = tree(false);
    let paths: Vec<String> = root
        .resolve_all(&engine)
        .into_iter()
        .map(|(path, _)| path)
        .collect();
    assert_eq!(
        paths,
        vec![
            "Screen",
            "Screen > Panel#main.status",
            "Screen > Panel#main.status > Label",
            "Screen > Panel#main.status > Input",
            "Screen > List",
            "Screen > List > Row",
            "Screen > List > Row",
            "Screen > List > Row",
        ]
    );
}

#[test]
fn test_focus_state_flows_into_resolution() {
    let engine = StyleEngine::from_source("app", APP).unwrap();

    let focused = tree(true);
    let resolved = focused.resolve_all(&engine);
    assert_eq!(resolved[1].1.border_color(), Some(Color::Cyan));
    assert_eq!(resolved[1].1.background(), Some(Color::Black));

    let idle = tree(false);
    let resolved = idle.resolve_all(&engine);
    assert_eq!(resolved[1].1.border_color(), Some(Color::Gray));
    assert_eq!(resolved[1].1.background(), Some(Color::Black));
}

#[test]
fn test_ancestors_come_from_the_walk() {
    let engine = StyleEngine::from_source("app", APP).unwrap();
    let root = tree(false);
    let resolved = root.resolve_all(&engine);

    assert_eq!(resolved[0].1.direction(), Some(Direction::Vertical));
    assert_eq!(resolved[2].1.foreground(), Some(Color::White));
    assert_eq!(resolved[3].1.width(), Some(Constraint::Percentage(50)));
}

#[test]
fn test_sibling_positions() {
    let engine = StyleEngine::from_source("app", APP).unwrap();
    let root = tree(false);
    let rows: Vec<_> = root
        .resolve_all(&engine)
        .into_iter()
        .filter(|(path, _)| path.ends_with("Row"))
        .map(|(_, style)| (style.height(), style.foreground()))
        .collect();
    assert_eq!(
        rows,
        vec![
            (Some(Constraint::Length(3)), None),
            (None, Some(Color::Yellow)),
            (Some(Constraint::Fill(1)), None),
        ]
    );
}

#[test]
fn test_root_is_first_and_last_child() {
    let engine =
        StyleEngine::from_source("app", "Screen:first-child:last-child { width: 80; }").unwrap();
    let resolved = Element::new("Screen").resolve_all(&engine);
    assert_eq!(resolved[0].1.width(), Some(Constraint::Length(80)));
}

#[test]
fn test_ancestors_keep_their_sibling_position() {
    let engine = StyleEngine::from_source(
        "app",
        r#"
        Row:first-child > Label { color: red; }
        Row:nth-child(even) Label { background: blue; }
        Screen:first-child Row:last-child > Label { width: 10; }
        "#,
    )
    .unwrap();
    let root = Element::new("Screen")
        .with_child(Element::new("Row").with_child(Element::new("Label")))
        .with_child(Element::new("Row").with_child(Element::new("Label")));
    let labels: Vec<_> = root
        .resolve_all(&engine)
        .into_iter()
        .filter(|(path, _)| path.ends_with("Label"))
        .map(|(_, style)| (style.foreground(), style.background(), style.width()))
        .collect();
    assert_eq!(
        labels,
        vec![
            (Some(Color::Red), None, None),
            (None, Some(Color::Blue), Some(Constraint::Length(10))),
        ]
    );
}

#[test]
fn test_walk_hands_ancestors_their_walked_state() {
    let root = tree(true);
    let mut seen = Vec::new();
    root.walk(&mut |element, ancestors, _| {
        if let Some(parent) = ancestors.first() {
            let state = parent.pseudo_state();
            seen.push((element.label(), parent.style_type().to_string(), state.nth_child));
        }
    });
    assert_eq!(seen[0], ("Panel#main.status".to_string(), "Screen".to_string(), 1));
    assert_eq!(seen[1], ("Label".to_string(), "Panel".to_string(), 1));
    assert_eq!(seen[4], ("Row".to_string(), "List".to_string(), 2));
}

#[test]
fn test_walk_visits_every_element_once() {
    let root = tree(false);
    let mut seen = Vec::new();
    root.walk(&mut |element, ancestors, state| {
        seen.push((element.label(), ancestors.len(), state.nth_child));
    });
    assert_eq!(seen.len(), 8);
    assert_eq!(seen[0], ("Screen".to_string(), 0, 1));
    assert_eq!(seen[3], ("Input".to_string(), 2, 2));
    assert_eq!(seen[7], ("Row".to_string(), 2, 3));
}

#[test]
fn test_stylesheet_loaded_from_disk() {
    let path = std::env::temp_dir().join(format!("tcss-toolkit-{}.tcss", std::process::id()));
    std::fs::write(&path, "Label { color: green; }").unwrap();

    let mut engine = StyleEngine::new();
    let loaded = engine.load_stylesheet("disk", &path);
    std::fs::remove_file(&path).ok();
    loaded.unwrap();

    let resolved = Element::new("Label").resolve_all(&engine);
    assert_eq!(resolved[0].1.foreground(), Some(Color::Green));
}
