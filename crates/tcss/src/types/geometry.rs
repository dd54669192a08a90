//! Box spacing and size constraints.

use std::fmt;

/// Padding or margin in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Spacing {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Spacing {
    pub const ZERO: Self = Self::all(0);

    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn all(value: u16) -> Self {
        Self::new(value, value, value, value)
    }

    pub const fn vertical_horizontal(vertical: u16, horizontal: u16) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Total horizontal space (left + right).
    pub fn width(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    /// Total vertical space (top + bottom).
    pub fn height(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }
}

/// How much room an element asks for along one axis.
///
/// Handed to the layout solver as-is; this crate does not solve layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// `fill` or `fill(N)`: share remaining space with weight `N` (default 1).
    Fill(u16),
    /// `N%` of the parent.
    Percentage(u16),
    /// `min(N)`: at least `N` cells.
    Min(u16),
    /// `max(N)`: at most `N` cells.
    Max(u16),
    /// `N/M` of the parent.
    Ratio(u32, u32),
    /// Exactly `N` cells.
    Length(u16),
    /// Size to content.
    Fit,
}

impl Default for Constraint {
    fn default() -> Self {
        Constraint::Fill(1)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Fill(1) => write!(f, "fill"),
            Constraint::Fill(weight) => write!(f, "fill({weight})"),
            Constraint::Percentage(p) => write!(f, "{p}%"),
            Constraint::Min(n) => write!(f, "min({n})"),
            Constraint::Max(n) => write!(f, "max({n})"),
            Constraint::Ratio(n, m) => write!(f, "{n}/{m}"),
            Constraint::Length(n) => write!(f, "{n}"),
            Constraint::Fit => write!(f, "fit"),
        }
    }
}
