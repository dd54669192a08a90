//! Stylesheet variables and `$name` substitution.
//!
//! Variables are declared at the top level of a stylesheet:
//!
//! ```css
//! $accent: cyan;
//! $gap: 1 2;
//!
//! Button {
//!     color: $accent;
//!     padding: $gap;
//! }
//! ```
//!
//! The parser stores declaration values unresolved. Substitution runs when a
//! value is converted for a property, driven by the `$name` occurrences in
//! the value text, so the result never depends on how the variables are
//! stored.

/// Something that can look up a variable by name (without the `$`).
pub trait VariableSource {
    fn variable(&self, name: &str) -> Option<&str>;
}

/// Variables declared in a stylesheet, in declaration order.
///
/// Redefining a name replaces its value but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylesheetVariables {
    entries: Vec<(String, String)>,
}

impl StylesheetVariables {
    /// Creates an empty variable storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines a variable with the given name and value.
    pub fn define(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Resolves a variable name to its raw value, if defined.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for StylesheetVariables {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut vars = Self::new();
        for (name, value) in iter {
            vars.define(name, value);
        }
        vars
    }
}

impl VariableSource for StylesheetVariables {
    fn variable(&self, name: &str) -> Option<&str> {
        self.get(name)
    }
}

/// Stylesheet variables layered over a fallback scope (e.g. theme variables).
#[derive(Debug, Clone, Copy)]
pub struct ScopedVariables<'a> {
    local: &'a StylesheetVariables,
    fallback: Option<&'a StylesheetVariables>,
}

impl<'a> ScopedVariables<'a> {
    pub fn new(local: &'a StylesheetVariables, fallback: Option<&'a StylesheetVariables>) -> Self {
        Self { local, fallback }
    }
}

impl VariableSource for ScopedVariables<'_> {
    fn variable(&self, name: &str) -> Option<&str> {
        self.local
            .get(name)
            .or_else(|| self.fallback.and_then(|f| f.get(name)))
    }
}

/// Variable values may reference other variables; expansion stops here.
const MAX_DEPTH: usize = 16;

/// Replaces every `$name` in `value` with its bound value.
///
/// Unbound names are left as written. Bound values are expanded in turn, and
/// a name is never expanded inside its own expansion.
pub fn resolve_variables(value: &str, vars: &dyn VariableSource) -> String {
    let mut stack = Vec::new();
    expand(value, vars, &mut stack)
}

fn expand(value: &str, vars: &dyn VariableSource, stack: &mut Vec<String>) -> String {
    if !value.contains('$') {
        return value.to_string();
    }

    let mut output = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '$' {
            output.push(c);
            continue;
        }

        let mut name = String::new();
        if chars
            .peek()
            .is_some_and(|&n| n.is_alphabetic() || n == '_' || n == '-')
        {
            while let Some(&next) = chars.peek() {
                if next.is_alphanumeric() || next == '-' || next == '_' {
                    name.push(next);
                    chars.next();
                } else {
                    break;
                }
            }
        }

        let bound = if name.is_empty() || stack.len() >= MAX_DEPTH || stack.contains(&name) {
            None
        } else {
            vars.variable(&name)
        };

        match bound {
            Some(val) => {
                stack.push(name);
                output.push_str(&expand(val, vars, stack));
                stack.pop();
            }
            None => {
                output.push('$');
                output.push_str(&name);
            }
        }
    }
    output
}
