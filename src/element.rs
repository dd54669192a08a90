//! A small owned element tree for hosts without one of their own.

use tcss::{PseudoClassState, StyleEngine, StyleResolver, Styleable};

/// A styleable node with owned children.
///
/// Elements do not know their parent. Resolution walks the tree from the
/// root and hands each element its ancestor chain explicitly.
#[derive(Debug, Clone, Default)]
pub struct Element {
    kind: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    state: PseudoClassState,
    children: Vec<Element>,
}

impl Element {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(attr) => attr.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    /// Interaction state (focus, hover, ...). Sibling position is filled in
    /// during [`walk`](Self::walk).
    pub fn with_state(mut self, state: PseudoClassState) -> Self {
        self.state = state;
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// `Type#id.class1.class2`
    pub fn label(&self) -> String {
        let mut label = self.kind.clone();
        if let Some(id) = &self.id {
            label.push('#');
            label.push_str(id);
        }
        for class in &self.classes {
            label.push('.');
            label.push_str(class);
        }
        label
    }

    /// Visits every element depth-first, parents before children.
    ///
    /// `visit` receives the element, its ancestors (immediate parent first)
    /// and its state with first/last/nth-child set from its sibling position.
    /// Ancestors report their own positioned state when matched.
    pub fn walk<'a>(
        &'a self,
        visit: &mut dyn FnMut(&'a Element, &[&dyn Styleable], PseudoClassState),
    ) {
        self.walk_inner(&[], self.state.at_position(0, 1), visit);
    }

    fn walk_inner<'a>(
        &'a self,
        ancestors: &[Positioned<'a>],
        state: PseudoClassState,
        visit: &mut dyn FnMut(&'a Element, &[&dyn Styleable], PseudoClassState),
    ) {
        let chain: Vec<&dyn Styleable> = ancestors.iter().map(|a| a as &dyn Styleable).collect();
        visit(self, &chain, state);

        let mut lineage = Vec::with_capacity(ancestors.len() + 1);
        lineage.push(Positioned {
            element: self,
            state,
        });
        lineage.extend_from_slice(ancestors);

        let count = self.children.len();
        for (index, child) in self.children.iter().enumerate() {
            child.walk_inner(&lineage, child.state.at_position(index, count), visit);
        }
    }

    /// Resolves every element in the tree, in [`walk`](Self::walk) order.
    ///
    /// Each entry is the element's ancestor path (e.g. `Screen > Panel.status`)
    /// and its resolved style.
    pub fn resolve_all<'e>(&self, engine: &'e StyleEngine) -> Vec<(String, StyleResolver<'e>)> {
        let mut resolved = Vec::new();
        // paths[d] is the path of the most recent element at depth d
        let mut paths: Vec<String> = Vec::new();
        self.walk(&mut |element, ancestors, state| {
            paths.truncate(ancestors.len());
            let path = match paths.last() {
                Some(parent) => format!("{parent} > {}", element.label()),
                None => element.label(),
            };
            paths.push(path.clone());
            resolved.push((path, engine.resolve_with_ancestors(element, state, ancestors)));
        });
        resolved
    }
}

impl Styleable for Element {
    fn style_type(&self) -> &str {
        &self.kind
    }

    fn css_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn css_classes(&self) -> &[String] {
        &self.classes
    }

    fn css_parent(&self) -> Option<&dyn Styleable> {
        None
    }

    fn style_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn pseudo_state(&self) -> PseudoClassState {
        self.state
    }
}

/// An ancestor seen from below: the element plus the state it was walked with.
#[derive(Debug, Clone, Copy)]
struct Positioned<'a> {
    element: &'a Element,
    state: PseudoClassState,
}

impl Styleable for Positioned<'_> {
    fn style_type(&self) -> &str {
        self.element.style_type()
    }

    fn css_id(&self) -> Option<&str> {
        self.element.css_id()
    }

    fn css_classes(&self) -> &[String] {
        self.element.css_classes()
    }

    fn css_parent(&self) -> Option<&dyn Styleable> {
        None
    }

    fn style_attribute(&self, name: &str) -> Option<&str> {
        self.element.style_attribute(name)
    }

    fn pseudo_state(&self) -> PseudoClassState {
        self.state
    }
}
