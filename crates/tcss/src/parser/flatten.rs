//! Nested rule flattening.
//!
//! Rule blocks may contain other rule blocks:
//!
//! ```css
//! Button {
//!     color: white;
//!     &:hover { background: blue; }
//!     & > Label { color: gray; }
//!     Icon { color: red; }
//! }
//! ```
//!
//! which flattens to:
//!
//! ```css
//! Button { color: white; }
//! Button:hover { background: blue; }
//! Button > Label { color: gray; }
//! Button Icon { color: red; }
//! ```
//!
//! - `&` followed by simple selectors extends the parent's last compound
//! - `&` followed by a combinator keeps that combinator
//! - a nested selector without `&` is a descendant of the parent
//! - nested selector lists combine with every parent selector

use crate::parser::selectors::SelectorChain;
use crate::parser::stylesheet::Combinator;

/// Combines one parent selector with one nested selector.
pub(crate) fn nest(parent: &SelectorChain, child: &SelectorChain) -> SelectorChain {
    let mut combined = parent.clone();
    let mut child_parts = child.parts.iter();

    if child.parent_ref {
        if let (Some(last), Some(first)) = (combined.parts.last_mut(), child_parts.next()) {
            last.compound.extend(first.compound.iter().cloned());
            last.combinator = first.combinator;
        }
    } else if let Some(last) = combined.parts.last_mut() {
        last.combinator = Some(Combinator::Descendant);
    }

    combined.parts.extend(child_parts.cloned());
    combined
}

/// Cartesian product of parent and nested selector lists, parent-major.
pub(crate) fn nest_all(
    parents: &[SelectorChain],
    children: &[SelectorChain],
) -> Vec<SelectorChain> {
    parents
        .iter()
        .flat_map(|parent| children.iter().map(move |child| nest(parent, child)))
        .collect()
}
