//! Terminal CSS toolkit.
//!
//! Re-exports the [`tcss`] styling engine and adds what a host application
//! needs around it: an owned [`Element`] tree that implements
//! [`Styleable`](tcss::Styleable), and a file logger for engine diagnostics.
//!
//! ```rust
//! use tcss_toolkit::{Element, PseudoClassState, StyleEngine};
//! use tcss_toolkit::tcss::types::Color;
//!
//! let engine = StyleEngine::from_source(
//!     "app",
//!     "Panel { border-color: gray; } Panel.status:focus { border-color: cyan; }",
//! )
//! .unwrap();
//!
//! let tree = Element::new("Screen").with_child(
//!     Element::new("Panel")
//!         .with_class("status")
//!         .with_state(PseudoClassState::new().focused(true)),
//! );
//!
//! let resolved = tree.resolve_all(&engine);
//! assert_eq!(resolved[1].0, "Screen > Panel.status");
//! assert_eq!(resolved[1].1.border_color(), Some(Color::Cyan));
//! ```

pub mod element;
pub mod log_init;

pub use element::Element;
pub use log_init::init_logger;
pub use tcss;
pub use tcss::{
    EngineConfig, ParseError, PseudoClassState, Style, StyleEngine, StyleResolver, Styleable,
    TcssError,
};
