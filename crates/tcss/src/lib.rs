//! # TCSS - terminal CSS styling engine
//!
//! A CSS dialect for terminal user interfaces: stylesheets are parsed into
//! flat rules, matched against a tree of styleable elements, and merged by
//! the cascade into typed, terminal-ready values.
//!
//! - **Parsing**: Convert TCSS source text into a structured [`StyleSheet`](parser::StyleSheet)
//! - **Cascade**: Apply specificity, source order and `!important` to pick winning declarations
//! - **Conversion**: Turn raw declaration text into colours, spacing, constraints and keywords
//!
//! ## Quick Start
//!
//! ```rust
//! use tcss::parser::parse_stylesheet;
//!
//! let source = r#"
//!     $accent: cyan;
//!
//!     Button {
//!         color: $accent;
//!         width: 50%;
//!         padding: 0 1;
//!
//!         &:focus { text-style: bold; }
//!     }
//! "#;
//!
//! let stylesheet = parse_stylesheet(source).expect("valid TCSS");
//! assert_eq!(stylesheet.rules.len(), 2);
//! assert_eq!(stylesheet.rules[1].selector.to_string(), "Button:focus");
//! ```
//!
//! ## Supported Features
//!
//! ### Selectors
//! - Type selectors: `Button`, `Label`, `Panel`
//! - Class selectors: `.primary`, `.active`
//! - ID selectors: `#submit`, `#header`
//! - Universal selector: `*`
//! - Attribute selectors: `[title]`, `[type="text"]`, `[name^=a]`, `[name$=z]`, `[name*=m]`
//! - Compound selectors: `Button.primary#submit`
//! - Descendant combinator: `Panel Button`
//! - Child combinator: `Panel > Button`
//! - Nesting with `&`: `&:hover`, `&.active`, `& > Label`
//!
//! ### Pseudo-classes
//! - `:focus`, `:hover`, `:active`, `:disabled`, `:enabled`, `:selected`
//! - `:first-child`, `:last-child`, `:nth-child(odd | even | N | An+B)`
//!
//! ### Properties
//! - Colors: `color`, `background`, `border-color`, `border-title-color`
//! - Box model: `padding`, `margin`
//! - Borders: `border-type`, `border-chars`, `border-title-align`
//! - Sizing: `width`, `height`
//! - Layout: `direction`, `flex`, `spacing`, `z-index`
//! - Text: `text-align`, `text-style`
//!
//! ## Modules
//!
//! - [`parser`]: Lexing, parsing, selectors, variables and the cascade
//! - [`properties`]: Property conversion registry
//! - [`engine`]: Named stylesheets and resolution
//! - [`resolver`]: Typed accessors over a resolved style
//! - [`types`]: Colors, spacing, constraints, borders and modifiers
//! - [`error`]: Error types

pub mod engine;
pub mod error;
pub mod parser;
pub mod properties;
pub mod resolver;
pub mod types;

pub use engine::{EngineConfig, StyleEngine};
pub use error::{ParseError, TcssError};
pub use parser::cascade::{PseudoClass, PseudoClassState, Styleable};
pub use parser::{StyleSheet, parse_stylesheet};
pub use properties::{PropertyRegistry, Value};
pub use resolver::StyleResolver;
pub use types::Style;
