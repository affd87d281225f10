//! HTML attribute bags.

use ironhtml::typed::Element;
use ironhtml_elements::HtmlElement;

/// Insertion-ordered HTML attributes.
///
/// Setting a key that is already present replaces its value in place, so the
/// rendered order stays stable no matter how many layers touch the bag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    attrs: Vec<(String, String)>,
}

impl Attributes {
    /// Creates an empty attribute bag.
    pub fn new() -> Self {
        Self { attrs: Vec::new() }
    }

    /// Sets an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.attrs.push((key, value)),
        }
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns whether the attribute is present.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes an attribute, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.attrs.iter().position(|(k, _)| k == key)?;
        Some(self.attrs.remove(index).1)
    }

    /// Returns whether the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copies every attribute of `other` into this bag; `other` wins.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in other.iter() {
            self.set(key, value);
        }
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Builder method that layers `overrides` on top of this bag.
    #[must_use]
    pub fn merged(mut self, overrides: &Self) -> Self {
        self.merge(overrides);
        self
    }

    /// Renders the attributes as ` key="value"` pairs, escaping values.
    ///
    /// Returns an empty string for an empty bag so it can be spliced straight
    /// into an opening tag.
    pub fn to_html(&self) -> String {
        self.attrs
            .iter()
            .map(|(k, v)| format!(r#" {}="{}""#, html_escape(k), html_escape(v)))
            .collect()
    }

    /// Copies the attributes onto a typed element, in insertion order.
    pub fn apply<E: HtmlElement>(&self, element: Element<E>) -> Element<E> {
        self.attrs
            .iter()
            .fold(element, |element, (k, v)| element.attr(k.clone(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (key, value) in iter {
            attrs.set(key, value);
        }
        attrs
    }
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
