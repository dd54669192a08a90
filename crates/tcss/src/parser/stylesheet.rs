use std::fmt;

use crate::parser::variables::StylesheetVariables;

/// CSS specificity for determining rule precedence.
///
/// Compared lexicographically: any id outranks any number of classes, and
/// any class outranks any number of types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Specificity {
    pub ids: u32,
    pub classes: u32,
    pub types: u32,
}

impl Specificity {
    pub fn new(ids: u32, classes: u32, types: u32) -> Self {
        Self {
            ids,
            classes,
            types,
        }
    }
}

impl std::ops::Add for Specificity {
    type Output = Specificity;

    fn add(self, rhs: Self) -> Self::Output {
        Specificity {
            ids: self.ids + rhs.ids,
            classes: self.classes + rhs.classes,
            types: self.types + rhs.types,
        }
    }
}

/// Comparison applied by an attribute selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttributeOperator {
    /// `[attr=value]`
    Equals,
    /// `[attr^=value]`
    StartsWith,
    /// `[attr$=value]`
    EndsWith,
    /// `[attr*=value]`
    Contains,
}

impl AttributeOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeOperator::Equals => "=",
            AttributeOperator::StartsWith => "^=",
            AttributeOperator::EndsWith => "$=",
            AttributeOperator::Contains => "*=",
        }
    }

    pub fn test(&self, actual: &str, expected: &str) -> bool {
        match self {
            AttributeOperator::Equals => actual == expected,
            AttributeOperator::StartsWith => actual.starts_with(expected),
            AttributeOperator::EndsWith => actual.ends_with(expected),
            AttributeOperator::Contains => actual.contains(expected),
        }
    }
}

/// Relationship between two compound selectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// Whitespace: any ancestor.
    Descendant,
    /// `>`: the immediate parent.
    Child,
}

/// A parsed selector.
///
/// Simple selectors are leaves; `Compound` groups simple selectors that must
/// all match one element; `Descendant` and `Child` relate an element to its
/// ancestors. Combinators are left-associative, so `A B > C` is
/// `Child(Descendant(A, B), C)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Selector {
    Type(String),
    Id(String),
    Class(String),
    Universal,
    /// `:name` or `:name(argument)`
    Pseudo(String, Option<String>),
    /// `[name]` or `[name op value]`
    Attribute(String, Option<(AttributeOperator, String)>),
    Compound(Vec<Selector>),
    Descendant(Box<Selector>, Box<Selector>),
    Child(Box<Selector>, Box<Selector>),
}

impl Selector {
    pub fn type_name(name: impl Into<String>) -> Self {
        Selector::Type(name.into())
    }

    pub fn class(name: impl Into<String>) -> Self {
        Selector::Class(name.into())
    }

    pub fn id(name: impl Into<String>) -> Self {
        Selector::Id(name.into())
    }

    pub fn pseudo(name: impl Into<String>) -> Self {
        Selector::Pseudo(name.into(), None)
    }

    /// `ancestor descendant`, kept left-associative.
    pub fn descendant(ancestor: Selector, descendant: Selector) -> Self {
        Self::join(Combinator::Descendant, ancestor, descendant)
    }

    /// `parent > child`, kept left-associative.
    pub fn child(parent: Selector, child: Selector) -> Self {
        Self::join(Combinator::Child, parent, child)
    }

    /// Joins two selectors with a combinator.
    ///
    /// A combinator on the right is rotated to the left, so that the right
    /// operand of every combinator describes a single element:
    /// `A (B > C)` becomes `(A B) > C`.
    pub fn join(combinator: Combinator, left: Selector, right: Selector) -> Self {
        match right {
            Selector::Descendant(inner_left, inner_right) => Selector::Descendant(
                Box::new(Self::join(combinator, left, *inner_left)),
                inner_right,
            ),
            Selector::Child(inner_left, inner_right) => Selector::Child(
                Box::new(Self::join(combinator, left, *inner_left)),
                inner_right,
            ),
            right => match combinator {
                Combinator::Descendant => Selector::Descendant(Box::new(left), Box::new(right)),
                Combinator::Child => Selector::Child(Box::new(left), Box::new(right)),
            },
        }
    }

    pub fn specificity(&self) -> Specificity {
        match self {
            Selector::Id(_) => Specificity::new(1, 0, 0),
            // Attributes have the same specificity as classes and pseudo-classes
            Selector::Class(_) | Selector::Pseudo(..) | Selector::Attribute(..) => {
                Specificity::new(0, 1, 0)
            }
            Selector::Type(_) => Specificity::new(0, 0, 1),
            Selector::Universal => Specificity::default(),
            Selector::Compound(parts) => parts
                .iter()
                .fold(Specificity::default(), |acc, s| acc + s.specificity()),
            Selector::Descendant(left, right) | Selector::Child(left, right) => {
                left.specificity() + right.specificity()
            }
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Type(name) => write!(f, "{name}"),
            Selector::Id(name) => write!(f, "#{name}"),
            Selector::Class(name) => write!(f, ".{name}"),
            Selector::Universal => write!(f, "*"),
            Selector::Pseudo(name, None) => write!(f, ":{name}"),
            Selector::Pseudo(name, Some(arg)) => write!(f, ":{name}({arg})"),
            Selector::Attribute(name, None) => write!(f, "[{name}]"),
            Selector::Attribute(name, Some((op, value))) => {
                let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
                write!(f, "[{name}{}\"{escaped}\"]", op.as_str())
            }
            Selector::Compound(parts) => {
                for part in parts {
                    write!(f, "{part}")?;
                }
                Ok(())
            }
            Selector::Descendant(left, right) => write!(f, "{left} {right}"),
            Selector::Child(left, right) => write!(f, "{left} > {right}"),
        }
    }
}

/// A raw declaration value.
///
/// Variables are not substituted here; that happens when the value is
/// converted for a specific property.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyValue {
    pub raw: String,
    pub important: bool,
}

impl PropertyValue {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            important: false,
        }
    }

    pub fn important(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            important: true,
        }
    }
}

/// `property: value` as written in a rule block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: PropertyValue,
}

/// A flattened rule: one selector and its declarations.
///
/// Rules produced from one selector list (`A, B { ... }`) share their
/// declarations and their `source_order`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub selector: Selector,
    pub declarations: Vec<Declaration>,
    pub source_order: usize,
}

impl Rule {
    pub fn new(selector: Selector, declarations: Vec<Declaration>, source_order: usize) -> Self {
        Self {
            selector,
            declarations,
            source_order,
        }
    }

    /// Looks up a declaration by property name.
    pub fn get(&self, property: &str) -> Option<&PropertyValue> {
        self.declarations
            .iter()
            .find(|d| d.property == property)
            .map(|d| &d.value)
    }

    pub fn specificity(&self) -> Specificity {
        self.selector.specificity()
    }
}

/// A parsed stylesheet: variables plus flattened rules in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleSheet {
    pub variables: StylesheetVariables,
    pub rules: Vec<Rule>,
}

impl StyleSheet {
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.variables.is_empty()
    }
}

impl fmt::Display for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.variables.iter() {
            writeln!(f, "${name}: {value};")?;
        }
        for rule in &self.rules {
            write!(f, "{} {{", rule.selector)?;
            for decl in &rule.declarations {
                write!(f, " {}: {}", decl.property, decl.value.raw)?;
                if decl.value.important {
                    write!(f, " !important")?;
                }
                write!(f, ";")?;
            }
            writeln!(f, " }}")?;
        }
        Ok(())
    }
}
