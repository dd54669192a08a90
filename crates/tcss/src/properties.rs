//! Property conversion registry.
//!
//! Declarations are stored as raw text. A [`PropertyRegistry`] knows, for
//! each property name, how to turn that text into a typed [`Value`]:
//!
//! ```rust
//! use tcss::properties::{PropertyRegistry, Value};
//! use tcss::parser::StylesheetVariables;
//! use tcss::types::Color;
//!
//! let registry = PropertyRegistry::standard();
//! let mut vars = StylesheetVariables::new();
//! vars.define("accent", "cyan");
//!
//! assert_eq!(
//!     registry.convert("color", "$accent", &vars),
//!     Some(Value::Color(Color::Cyan))
//! );
//! assert_eq!(registry.convert("color", "not-a-color", &vars), None);
//! ```
//!
//! Conversion never fails loudly: malformed input and unknown properties
//! both yield `None`.

use std::collections::HashMap;

use crate::parser::units::{constraint_value, integer_value, spacing_value};
use crate::parser::values::{
    border_kind_value, color_value, direction_value, flex_value, modifiers_value,
    string_list_value, text_align_value,
};
use crate::parser::variables::{VariableSource, resolve_variables};
use crate::types::{
    BorderKind, Color, Constraint, Direction, Flex, Modifier, Spacing, TextAlign,
};

/// A converted declaration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Color(Color),
    Spacing(Spacing),
    Align(TextAlign),
    Border(BorderKind),
    Strings(Vec<String>),
    Constraint(Constraint),
    Direction(Direction),
    Flex(Flex),
    Integer(i32),
    Modifiers(Modifier),
}

impl Value {
    pub fn as_color(&self) -> Option<Color> {
        match self {
            Value::Color(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_constraint(&self) -> Option<Constraint> {
        match self {
            Value::Constraint(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i32> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

/// Turns a variable-free raw value into a typed value.
pub type Converter = fn(&str) -> Option<Value>;

fn color(raw: &str) -> Option<Value> {
    color_value(raw).map(Value::Color)
}

fn spacing(raw: &str) -> Option<Value> {
    spacing_value(raw).map(Value::Spacing)
}

fn align(raw: &str) -> Option<Value> {
    text_align_value(raw).map(Value::Align)
}

fn border(raw: &str) -> Option<Value> {
    border_kind_value(raw).map(Value::Border)
}

fn strings(raw: &str) -> Option<Value> {
    string_list_value(raw).map(Value::Strings)
}

fn constraint(raw: &str) -> Option<Value> {
    constraint_value(raw).map(Value::Constraint)
}

fn direction(raw: &str) -> Option<Value> {
    direction_value(raw).map(Value::Direction)
}

fn flex(raw: &str) -> Option<Value> {
    flex_value(raw).map(Value::Flex)
}

fn integer(raw: &str) -> Option<Value> {
    integer_value(raw).map(Value::Integer)
}

fn modifiers(raw: &str) -> Option<Value> {
    modifiers_value(raw).map(Value::Modifiers)
}

/// Maps property names to converters.
#[derive(Debug, Clone, Default)]
pub struct PropertyRegistry {
    converters: HashMap<String, Converter>,
}

impl PropertyRegistry {
    /// An empty registry: every property is unknown.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in properties.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for name in ["color", "background", "border-color", "border-title-color"] {
            registry.register(name, color);
        }
        registry.register("padding", spacing);
        registry.register("margin", spacing);
        registry.register("text-align", align);
        registry.register("border-title-align", align);
        registry.register("border-type", border);
        registry.register("border-chars", strings);
        registry.register("width", constraint);
        registry.register("height", constraint);
        registry.register("direction", direction);
        registry.register("flex", flex);
        registry.register("spacing", integer);
        registry.register("z-index", integer);
        registry.register("text-style", modifiers);
        registry
    }

    /// Adds or replaces the converter for `name`.
    pub fn register(&mut self, name: impl Into<String>, converter: Converter) {
        self.converters.insert(name.into(), converter);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.converters.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.converters.keys().map(String::as_str)
    }

    /// Substitutes variables in `raw` and converts it for property `name`.
    pub fn convert(&self, name: &str, raw: &str, variables: &dyn VariableSource) -> Option<Value> {
        let converter = self.converters.get(name)?;
        let resolved = resolve_variables(raw, variables);
        let value = converter(&resolved);
        if value.is_none() {
            log::debug!("could not convert {name}: {resolved:?}");
        }
        value
    }
}
