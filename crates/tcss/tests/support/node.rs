//! A parent-linked element for integration tests.

#![allow(dead_code)]

use tcss::{PseudoClassState, Styleable};

pub struct Node<'p> {
    kind: &'static str,
    id: Option<&'static str>,
    classes: Vec<String>,
    attrs: Vec<(&'static str, &'static str)>,
    parent: Option<&'p Node<'p>>,
    state: PseudoClassState,
}

impl<'p> Node<'p> {
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            id: None,
            classes: Vec::new(),
            attrs: Vec::new(),
            parent: None,
            state: PseudoClassState::default(),
        }
    }

    pub fn id(mut self, id: &'static str) -> Self {
        self.id = Some(id);
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn attr(mut self, name: &'static str, value: &'static str) -> Self {
        self.attrs.push((name, value));
        self
    }

    pub fn under(mut self, parent: &'p Node<'p>) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn state(mut self, state: PseudoClassState) -> Self {
        self.state = state;
        self
    }
}

impl Styleable for Node<'_> {
    fn style_type(&self) -> &str {
        self.kind
    }

    fn css_id(&self) -> Option<&str> {
        self.id
    }

    fn css_classes(&self) -> &[String] {
        &self.classes
    }

    fn css_parent(&self) -> Option<&dyn Styleable> {
        self.parent.map(|p| p as &dyn Styleable)
    }

    fn style_attribute(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
    }

    fn pseudo_state(&self) -> PseudoClassState {
        self.state
    }
}
