//! Resolves a small element tree and prints every element's style.
//!
//! ```text
//! cargo run --example resolve [-- path/to/stylesheet.tcss]
//! ```
//!
//! Engine diagnostics (including one CASCADE trace per element) are written
//! to `resolve.log`.

use log::LevelFilter;
use tcss_toolkit::{Element, PseudoClassState, StyleEngine, TcssError, init_logger};

const DEFAULT_CSS: &str = r#"
$accent: cyan;
$muted: dark-gray;

Screen {
    background: black;
    direction: vertical;
}

Panel {
    border-type: rounded;
    border-color: $muted;
    padding: 0 1;

    &.status { background: indexed(236); }
    &.status:focus { border-color: $accent; }
    & > Label { text-style: bold; }
}

Label:nth-child(even) { color: gray; }
Button[variant=primary] { color: white; background: blue !important; }
#quit { background: red; }
"#;

fn tree() -> Element {
    Element::new("Screen").with_child(
        Element::new("Panel")
            .with_class("status")
            .with_state(PseudoClassState::new().focused(true))
            .with_child(Element::new("Label"))
            .with_child(Element::new("Label"))
            .with_child(
                Element::new("Button")
                    .with_id("quit")
                    .with_attribute("variant", "primary"),
            ),
    )
}

fn main() -> Result<(), TcssError> {
    if let Err(err) = init_logger("resolve.log", LevelFilter::Trace) {
        eprintln!("logging disabled: {err}");
    }

    let mut engine = StyleEngine::new();
    match std::env::args().nth(1) {
        Some(path) => engine.load_stylesheet("user", path)?,
        None => engine.add_stylesheet("default", DEFAULT_CSS)?,
    }

    for (path, style) in tree().resolve_all(&engine) {
        println!("{path}");
        for name in style.property_names() {
            let raw = style.raw_value(name).unwrap_or_default();
            let important = if style.is_important(name) { " !important" } else { "" };
            match style.value(name) {
                Some(value) => println!("    {name}: {raw}{important} => {value:?}"),
                None => println!("    {name}: {raw}{important} (unconverted)"),
            }
        }
        println!("    => {:?}", style.to_style());
    }
    Ok(())
}
