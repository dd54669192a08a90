//! Selector matching and the cascade.
//!
//! - [`Styleable`]: what the engine needs to know about an element
//! - [`PseudoClassState`]: the element's interaction state at resolve time
//! - [`matches`]: does a selector apply to an element?
//! - [`cascade`]: the winning declaration for every property
//!
//! ## Cascade Algorithm
//!
//! 1. Find all rules whose selectors match the element
//! 2. Sort by specificity (IDs > classes > types), then source order
//! 3. Apply normal declarations in order (later declarations override earlier)
//! 4. Apply `!important` declarations the same way, on top of everything else

use bitflags::bitflags;

use crate::parser::{PropertyValue, Rule, Selector, StyleSheet};

bitflags! {
    /// Pseudo-class flags.
    ///
    /// # Example
    ///
    /// ```
    /// use tcss::parser::cascade::PseudoClass;
    ///
    /// let states = PseudoClass::FOCUSED | PseudoClass::HOVERED;
    /// assert!(states.contains(PseudoClass::FOCUSED));
    /// assert!(!states.contains(PseudoClass::DISABLED));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PseudoClass: u16 {
        /// Element has keyboard focus
        const FOCUSED     = 1 << 0;
        /// Mouse is over the element
        const HOVERED     = 1 << 1;
        /// Element is being pressed
        const ACTIVE      = 1 << 2;
        /// Element is not interactive
        const DISABLED    = 1 << 3;
        const SELECTED    = 1 << 4;
        const FIRST_CHILD = 1 << 5;
        const LAST_CHILD  = 1 << 6;
    }
}

/// Interaction and position state of an element at resolve time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PseudoClassState {
    pub flags: PseudoClass,
    /// 1-based position among siblings; 0 when unknown.
    pub nth_child: usize,
}

impl PseudoClassState {
    pub fn new() -> Self {
        Self::default()
    }

    fn with(mut self, flag: PseudoClass, on: bool) -> Self {
        self.flags.set(flag, on);
        self
    }

    pub fn focused(self, on: bool) -> Self {
        self.with(PseudoClass::FOCUSED, on)
    }

    pub fn hovered(self, on: bool) -> Self {
        self.with(PseudoClass::HOVERED, on)
    }

    pub fn active(self, on: bool) -> Self {
        self.with(PseudoClass::ACTIVE, on)
    }

    pub fn disabled(self, on: bool) -> Self {
        self.with(PseudoClass::DISABLED, on)
    }

    pub fn selected(self, on: bool) -> Self {
        self.with(PseudoClass::SELECTED, on)
    }

    pub fn first_child(self, on: bool) -> Self {
        self.with(PseudoClass::FIRST_CHILD, on)
    }

    pub fn last_child(self, on: bool) -> Self {
        self.with(PseudoClass::LAST_CHILD, on)
    }

    pub fn nth_child(mut self, position: usize) -> Self {
        self.nth_child = position;
        self
    }

    /// Sets first/last/nth-child from a 0-based sibling index.
    pub fn at_position(self, index: usize, sibling_count: usize) -> Self {
        self.first_child(index == 0)
            .last_child(index + 1 == sibling_count)
            .nth_child(index + 1)
    }

    pub fn contains(&self, flag: PseudoClass) -> bool {
        self.flags.contains(flag)
    }
}

/// An element that stylesheets can be matched against.
///
/// Implemented by the host's element tree. All methods are read-only.
pub trait Styleable {
    /// Type name used by type selectors (e.g. `"Button"`).
    fn style_type(&self) -> &str;

    /// Does a type selector for `name` apply? Override to expose supertypes.
    fn matches_type(&self, name: &str) -> bool {
        self.style_type() == name
    }

    fn css_id(&self) -> Option<&str>;

    fn css_classes(&self) -> &[String];

    fn css_parent(&self) -> Option<&dyn Styleable>;

    fn style_attribute(&self, name: &str) -> Option<&str>;

    /// State used when this element is matched as an ancestor.
    fn pseudo_state(&self) -> PseudoClassState {
        PseudoClassState::default()
    }
}

/// Walks `css_parent` upwards, immediate parent first.
pub fn collect_ancestors(element: &dyn Styleable) -> Vec<&dyn Styleable> {
    let mut ancestors = Vec::new();
    let mut current = element.css_parent();
    while let Some(parent) = current {
        ancestors.push(parent);
        current = parent.css_parent();
    }
    ancestors
}

/// Checks `selector` against `element`.
///
/// `ancestors` is ordered from immediate parent to root. Ancestors are
/// matched with their own [`Styleable::pseudo_state`].
pub fn matches(
    selector: &Selector,
    element: &dyn Styleable,
    ancestors: &[&dyn Styleable],
    state: PseudoClassState,
) -> bool {
    match selector {
        Selector::Compound(parts) => parts
            .iter()
            .all(|part| matches(part, element, ancestors, state)),
        Selector::Descendant(left, right) => {
            matches(right, element, ancestors, state)
                && (0..ancestors.len()).any(|i| {
                    let ancestor = ancestors[i];
                    matches(left, ancestor, &ancestors[i + 1..], ancestor.pseudo_state())
                })
        }
        Selector::Child(left, right) => {
            matches(right, element, ancestors, state)
                && ancestors.split_first().is_some_and(|(parent, rest)| {
                    matches(left, *parent, rest, parent.pseudo_state())
                })
        }
        simple => matches_simple(simple, element, state),
    }
}

fn matches_simple(selector: &Selector, element: &dyn Styleable, state: PseudoClassState) -> bool {
    match selector {
        Selector::Type(name) => element.matches_type(name),
        Selector::Id(id) => element.css_id() == Some(id.as_str()),
        Selector::Class(class) => element.css_classes().iter().any(|c| c == class),
        Selector::Universal => true,
        Selector::Pseudo(name, arg) => matches_pseudo(name, arg.as_deref(), state),
        Selector::Attribute(name, None) => element.style_attribute(name).is_some(),
        Selector::Attribute(name, Some((op, expected))) => element
            .style_attribute(name)
            .is_some_and(|actual| op.test(actual, expected)),
        Selector::Compound(_) | Selector::Descendant(..) | Selector::Child(..) => false,
    }
}

fn matches_pseudo(name: &str, arg: Option<&str>, state: PseudoClassState) -> bool {
    match (name, arg) {
        ("focus", None) => state.contains(PseudoClass::FOCUSED),
        ("hover", None) => state.contains(PseudoClass::HOVERED),
        ("active", None) => state.contains(PseudoClass::ACTIVE),
        ("disabled", None) => state.contains(PseudoClass::DISABLED),
        ("enabled", None) => !state.contains(PseudoClass::DISABLED),
        ("selected", None) => state.contains(PseudoClass::SELECTED),
        ("first-child", None) => state.contains(PseudoClass::FIRST_CHILD),
        ("last-child", None) => state.contains(PseudoClass::LAST_CHILD),
        ("nth-child", Some(arg)) => {
            NthChild::parse(arg).is_some_and(|nth| nth.matches(state.nth_child))
        }
        _ => false,
    }
}

/// An `An+B` pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NthChild {
    pub a: i64,
    pub b: i64,
}

impl NthChild {
    /// Parses `odd`, `even`, `N` or `An+B` (whitespace ignored).
    pub fn parse(arg: &str) -> Option<Self> {
        let text: String = arg
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match text.as_str() {
            "odd" => return Some(Self { a: 2, b: 1 }),
            "even" => return Some(Self { a: 2, b: 0 }),
            _ => {}
        }

        let Some((a, b)) = text.split_once('n') else {
            return text.parse().ok().map(|b| Self { a: 0, b });
        };
        let a = match a {
            "" | "+" => 1,
            "-" => -1,
            a => a.parse().ok()?,
        };
        let b = match b {
            "" => 0,
            b if b.starts_with(['+', '-']) => b.parse().ok()?,
            _ => return None,
        };
        Some(Self { a, b })
    }

    /// Does the 1-based `position` match? Position 0 never does.
    pub fn matches(&self, position: usize) -> bool {
        let Ok(position) = i64::try_from(position) else {
            return false;
        };
        if position == 0 {
            return false;
        }
        let Some(offset) = position.checked_sub(self.b) else {
            return false;
        };
        if self.a == 0 {
            offset == 0
        } else {
            offset.checked_rem(self.a) == Some(0)
                && offset.checked_div(self.a).is_some_and(|n| n >= 0)
        }
    }
}

/// Computes the declarations for every property set on `element`.
///
/// Each property carries all of its matching values, highest precedence
/// first, so a consumer can fall back when the winner does not convert.
/// Properties are listed in the order they were first set during the merge.
pub fn cascade<'s>(
    stylesheet: &'s StyleSheet,
    element: &dyn Styleable,
    ancestors: &[&dyn Styleable],
    state: PseudoClassState,
) -> Vec<(&'s str, Vec<&'s PropertyValue>)> {
    let mut matched: Vec<&Rule> = stylesheet
        .rules
        .iter()
        .filter(|rule| matches(&rule.selector, element, ancestors, state))
        .collect();
    matched.sort_by_key(|rule| (rule.specificity(), rule.source_order));

    log::trace!(
        "CASCADE {}: {} of {} rules matched",
        element.style_type(),
        matched.len(),
        stylesheet.rules.len()
    );

    let mut merged: Vec<(&'s str, Vec<&'s PropertyValue>)> = Vec::new();
    for important in [false, true] {
        for rule in matched.iter().copied() {
            for decl in rule.declarations.iter().filter(|d| d.value.important == important) {
                match merged.iter_mut().find(|(name, _)| *name == decl.property) {
                    Some((_, values)) => values.push(&decl.value),
                    None => merged.push((decl.property.as_str(), vec![&decl.value])),
                }
            }
        }
    }
    for (_, values) in &mut merged {
        values.reverse();
    }
    merged
}
