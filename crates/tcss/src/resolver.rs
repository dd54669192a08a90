//! Typed access to a resolved style.

use crate::parser::PropertyValue;
use crate::parser::variables::ScopedVariables;
use crate::properties::{PropertyRegistry, Value};
use crate::types::{
    BorderKind, Color, Constraint, Direction, Flex, Modifier, Spacing, Style, TextAlign,
};

/// The matching declarations for one element.
///
/// Values are converted on access. When the winning value does not convert,
/// the next-lower-precedence one is tried; a property with no convertible
/// value reads as `None`.
#[derive(Debug, Clone)]
pub struct StyleResolver<'e> {
    declarations: Vec<(&'e str, Vec<&'e PropertyValue>)>,
    registry: &'e PropertyRegistry,
    variables: ScopedVariables<'e>,
}

impl<'e> StyleResolver<'e> {
    pub(crate) fn new(
        declarations: Vec<(&'e str, Vec<&'e PropertyValue>)>,
        registry: &'e PropertyRegistry,
        variables: ScopedVariables<'e>,
    ) -> Self {
        Self {
            declarations,
            registry,
            variables,
        }
    }

    /// Every value declared for `name`, highest precedence first.
    pub fn candidates(&self, name: &str) -> &[&'e PropertyValue] {
        self.declarations
            .iter()
            .find(|(property, _)| *property == name)
            .map_or(&[], |(_, values)| values.as_slice())
    }

    fn declaration(&self, name: &str) -> Option<&'e PropertyValue> {
        self.candidates(name).first().copied()
    }

    /// The converted value of any registered property.
    pub fn value(&self, name: &str) -> Option<Value> {
        self.candidates(name).iter().find_map(|declaration| {
            self.registry
                .convert(name, &declaration.raw, &self.variables)
        })
    }

    pub fn color(&self, name: &str) -> Option<Color> {
        self.value(name)?.as_color()
    }

    pub fn constraint(&self, name: &str) -> Option<Constraint> {
        self.value(name)?.as_constraint()
    }

    pub fn integer(&self, name: &str) -> Option<i32> {
        self.value(name)?.as_integer()
    }

    /// The value as written, before variable substitution.
    pub fn raw_value(&self, name: &str) -> Option<&'e str> {
        self.declaration(name).map(|value| value.raw.as_str())
    }

    pub fn is_important(&self, name: &str) -> bool {
        self.declaration(name).is_some_and(|value| value.important)
    }

    /// Every property with a winning declaration, registered or not.
    pub fn property_names(&self) -> impl Iterator<Item = &'e str> + '_ {
        self.declarations.iter().map(|(name, _)| *name)
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn foreground(&self) -> Option<Color> {
        self.color("color")
    }

    pub fn background(&self) -> Option<Color> {
        self.color("background")
    }

    pub fn border_color(&self) -> Option<Color> {
        self.color("border-color")
    }

    pub fn border_title_color(&self) -> Option<Color> {
        self.color("border-title-color")
    }

    pub fn border_kind(&self) -> Option<BorderKind> {
        match self.value("border-type")? {
            Value::Border(kind) => Some(kind),
            _ => None,
        }
    }

    /// Custom border glyphs from `border-chars`.
    pub fn border_chars(&self) -> Option<Vec<String>> {
        match self.value("border-chars")? {
            Value::Strings(chars) => Some(chars),
            _ => None,
        }
    }

    fn spacing_of(&self, name: &str) -> Option<Spacing> {
        match self.value(name)? {
            Value::Spacing(spacing) => Some(spacing),
            _ => None,
        }
    }

    pub fn padding(&self) -> Option<Spacing> {
        self.spacing_of("padding")
    }

    pub fn margin(&self) -> Option<Spacing> {
        self.spacing_of("margin")
    }

    fn align_of(&self, name: &str) -> Option<TextAlign> {
        match self.value(name)? {
            Value::Align(align) => Some(align),
            _ => None,
        }
    }

    pub fn text_align(&self) -> Option<TextAlign> {
        self.align_of("text-align")
    }

    pub fn border_title_align(&self) -> Option<TextAlign> {
        self.align_of("border-title-align")
    }

    pub fn width(&self) -> Option<Constraint> {
        self.constraint("width")
    }

    pub fn height(&self) -> Option<Constraint> {
        self.constraint("height")
    }

    pub fn direction(&self) -> Option<Direction> {
        match self.value("direction")? {
            Value::Direction(direction) => Some(direction),
            _ => None,
        }
    }

    pub fn flex(&self) -> Option<Flex> {
        match self.value("flex")? {
            Value::Flex(flex) => Some(flex),
            _ => None,
        }
    }

    /// Gap between children, in cells.
    pub fn spacing(&self) -> Option<i32> {
        self.integer("spacing")
    }

    pub fn z_index(&self) -> Option<i32> {
        self.integer("z-index")
    }

    pub fn modifiers(&self) -> Option<Modifier> {
        match self.value("text-style")? {
            Value::Modifiers(modifiers) => Some(modifiers),
            _ => None,
        }
    }

    pub fn foreground_or(&self, default: Color) -> Color {
        self.foreground().unwrap_or(default)
    }

    pub fn background_or(&self, default: Color) -> Color {
        self.background().unwrap_or(default)
    }

    pub fn border_kind_or(&self, default: BorderKind) -> BorderKind {
        self.border_kind().unwrap_or(default)
    }

    pub fn padding_or(&self, default: Spacing) -> Spacing {
        self.padding().unwrap_or(default)
    }

    pub fn margin_or(&self, default: Spacing) -> Spacing {
        self.margin().unwrap_or(default)
    }

    pub fn width_or(&self, default: Constraint) -> Constraint {
        self.width().unwrap_or(default)
    }

    pub fn height_or(&self, default: Constraint) -> Constraint {
        self.height().unwrap_or(default)
    }

    /// Foreground, background and text modifiers as a [`Style`].
    pub fn to_style(&self) -> Style {
        self.to_style_over(Style::default())
    }

    /// Like [`to_style`](Self::to_style), filling unset parts from `base`.
    pub fn to_style_over(&self, base: Style) -> Style {
        base.patch(Style {
            fg: self.foreground(),
            bg: self.background(),
            add_modifier: self.modifiers().unwrap_or_default(),
        })
    }
}
