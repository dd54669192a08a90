//! Value types produced by property conversion.

pub mod border;
pub mod color;
pub mod geometry;
pub mod layout;
pub mod text;

pub use border::BorderKind;
pub use color::Color;
pub use geometry::{Constraint, Spacing};
pub use layout::{Direction, Flex};
pub use text::{Modifier, TextAlign};

/// The concrete style record handed to the renderer.
///
/// `None` colours mean "inherit whatever is already there".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub add_modifier: Modifier,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            add_modifier: Modifier::empty(),
        }
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn add_modifier(mut self, modifier: Modifier) -> Self {
        self.add_modifier |= modifier;
        self
    }

    /// Lays `other` over `self`: set colours replace, modifiers accumulate.
    pub fn patch(mut self, other: Style) -> Self {
        self.fg = other.fg.or(self.fg);
        self.bg = other.bg.or(self.bg);
        self.add_modifier |= other.add_modifier;
        self
    }
}
