//! Named stylesheets and style resolution.
//!
//! A [`StyleEngine`] holds any number of named stylesheets, one of which is
//! active. Resolution always runs against the active stylesheet.
//!
//! ```rust
//! use tcss::{PseudoClassState, StyleEngine, Styleable};
//! use tcss::types::Color;
//!
//! struct Label;
//!
//! impl Styleable for Label {
//!     fn style_type(&self) -> &str { "Label" }
//!     fn css_id(&self) -> Option<&str> { None }
//!     fn css_classes(&self) -> &[String] { &[] }
//!     fn css_parent(&self) -> Option<&dyn Styleable> { None }
//!     fn style_attribute(&self, _: &str) -> Option<&str> { None }
//! }
//!
//! let mut engine = StyleEngine::new();
//! engine.add_stylesheet("dark", "Label { color: white; }").unwrap();
//! engine.add_stylesheet("light", "Label { color: black; }").unwrap();
//!
//! assert_eq!(engine.resolve(&Label, PseudoClassState::default()).foreground(), Some(Color::White));
//!
//! engine.set_active("light").unwrap();
//! assert_eq!(engine.resolve(&Label, PseudoClassState::default()).foreground(), Some(Color::Black));
//! ```
//!
//! Mutation takes `&mut self` while a [`StyleResolver`] borrows the engine,
//! so a stylesheet cannot be switched or replaced while a resolution result
//! is still alive. Share an engine across threads behind a lock.

use std::path::Path;

use crate::TcssError;
use crate::parser::cascade::{PseudoClassState, Styleable, cascade, collect_ancestors};
use crate::parser::variables::ScopedVariables;
use crate::parser::{StyleSheet, StylesheetVariables, parse_stylesheet};
use crate::properties::PropertyRegistry;
use crate::resolver::StyleResolver;

/// Engine-wide settings.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Converters used by [`StyleResolver`] accessors.
    pub registry: PropertyRegistry,
    /// Fallback for `$name` references a stylesheet does not define.
    pub theme_variables: StylesheetVariables,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            registry: PropertyRegistry::standard(),
            theme_variables: StylesheetVariables::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StyleEngine {
    config: EngineConfig,
    stylesheets: Vec<(String, StyleSheet)>,
    active: Option<usize>,
}

impl StyleEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// An engine with a single, active stylesheet.
    pub fn from_source(name: impl Into<String>, source: &str) -> Result<Self, TcssError> {
        let mut engine = Self::new();
        engine.add_stylesheet(name, source)?;
        Ok(engine)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Parses `source` and stores it under `name`.
    ///
    /// On a parse error nothing changes, including an existing stylesheet
    /// with the same name.
    pub fn add_stylesheet(
        &mut self,
        name: impl Into<String>,
        source: &str,
    ) -> Result<(), TcssError> {
        let name = name.into();
        let sheet = parse_stylesheet(source).inspect_err(|err| {
            log::debug!("stylesheet {name:?} rejected: {err}");
        })?;
        self.insert_stylesheet(name, sheet);
        Ok(())
    }

    /// Stores an already parsed stylesheet under `name`.
    ///
    /// The first stylesheet becomes active. Replacing a stylesheet keeps the
    /// active name.
    pub fn insert_stylesheet(&mut self, name: impl Into<String>, sheet: StyleSheet) {
        let name = name.into();
        log::debug!("loaded stylesheet {name:?} ({} rules)", sheet.rules.len());
        match self.index_of(&name) {
            Some(index) => self.stylesheets[index].1 = sheet,
            None => {
                self.stylesheets.push((name, sheet));
                if self.active.is_none() {
                    self.active = Some(self.stylesheets.len() - 1);
                }
            }
        }
    }

    /// Reads and parses a stylesheet file.
    pub fn load_stylesheet(
        &mut self,
        name: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<(), TcssError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| TcssError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.add_stylesheet(name, &source)
    }

    /// Makes `name` the active stylesheet.
    pub fn set_active(&mut self, name: &str) -> Result<(), TcssError> {
        let index = self
            .index_of(name)
            .ok_or_else(|| TcssError::UnknownStylesheet(name.to_string()))?;
        self.active = Some(index);
        log::debug!("active stylesheet is now {name:?}");
        Ok(())
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.stylesheets.iter().position(|(n, _)| n == name)
    }

    pub fn active_name(&self) -> Option<&str> {
        self.active.map(|i| self.stylesheets[i].0.as_str())
    }

    pub fn active_stylesheet(&self) -> Option<&StyleSheet> {
        self.active.map(|i| &self.stylesheets[i].1)
    }

    pub fn stylesheet(&self, name: &str) -> Option<&StyleSheet> {
        self.index_of(name).map(|i| &self.stylesheets[i].1)
    }

    /// Stylesheet names in the order they were first added.
    pub fn stylesheet_names(&self) -> impl Iterator<Item = &str> {
        self.stylesheets.iter().map(|(n, _)| n.as_str())
    }

    /// Resolves `element`, taking its ancestors from [`Styleable::css_parent`].
    pub fn resolve(&self, element: &dyn Styleable, state: PseudoClassState) -> StyleResolver<'_> {
        let ancestors = collect_ancestors(element);
        self.resolve_with_ancestors(element, state, &ancestors)
    }

    /// Resolves `element` against an explicit ancestor chain (immediate parent first).
    pub fn resolve_with_ancestors(
        &self,
        element: &dyn Styleable,
        state: PseudoClassState,
        ancestors: &[&dyn Styleable],
    ) -> StyleResolver<'_> {
        let registry = &self.config.registry;
        let theme = &self.config.theme_variables;
        match self.active_stylesheet() {
            Some(sheet) => StyleResolver::new(
                cascade(sheet, element, ancestors, state),
                registry,
                ScopedVariables::new(&sheet.variables, Some(theme)),
            ),
            None => StyleResolver::new(Vec::new(), registry, ScopedVariables::new(theme, None)),
        }
    }
}
