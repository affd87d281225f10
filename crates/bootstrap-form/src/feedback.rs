//! Validation error lookup and display.

use std::collections::BTreeMap;

use ironhtml::html;
use ironhtml::typed::Element;
use ironhtml_elements::{Li, Ul};

use crate::attributes::html_escape;

/// Per-request validation errors, keyed by dotted field path (`items.0.name`).
pub trait ErrorSource: Send + Sync {
    /// Returns every message for a field, in order.
    fn get(&self, field: &str) -> Vec<String>;

    /// Returns the first message for a field.
    fn first(&self, field: &str) -> Option<String> {
        self.get(field).into_iter().next()
    }

    /// Returns whether any field has errors.
    fn any(&self) -> bool;

    /// Returns all `(field, message)` pairs.
    fn messages(&self) -> Vec<(String, String)>;

    /// Name of the bag, reported in the error list markup.
    fn bag_name(&self) -> &str {
        "default"
    }
}

/// Collection of validation errors by field.
#[derive(Debug, Clone, Default)]
pub struct ErrorBag {
    errors: BTreeMap<String, Vec<String>>,
}

impl ErrorBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an error for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Builder variant of [`ErrorBag::add`].
    #[must_use]
    pub fn with(mut self, field: &str, message: impl Into<String>) -> Self {
        self.add(field, message);
        self
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

impl ErrorSource for ErrorBag {
    fn get(&self, field: &str) -> Vec<String> {
        self.errors.get(field).cloned().unwrap_or_default()
    }

    fn any(&self) -> bool {
        !self.errors.is_empty()
    }

    fn messages(&self) -> Vec<(String, String)> {
        self.errors
            .iter()
            .flat_map(|(field, messages)| {
                messages
                    .iter()
                    .map(move |message| (field.clone(), message.clone()))
            })
            .collect()
    }
}

impl std::fmt::Display for ErrorBag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (field, messages) in &self.errors {
            for message in messages {
                writeln!(f, "{field}: {message}")?;
            }
        }
        Ok(())
    }
}

/// Converts a field name in bracket notation to its error key:
/// `items[0][name]` becomes `items.0.name` and `tags[]` becomes `tags`.
pub fn error_key(field: &str) -> String {
    if !field.contains('[') {
        return field.to_string();
    }

    field
        .split('[')
        .map(|chunk| chunk.trim_end_matches(']'))
        .filter(|chunk| !chunk.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

/// Decides whether field errors are rendered inside their form group.
///
/// An explicit session choice wins, then the configured value. With neither
/// set, errors show inline until the global error list has been rendered.
pub fn display_errors_inline(
    session: Option<bool>,
    configured: Option<bool>,
    error_bag_rendered: bool,
) -> bool {
    match (session, configured) {
        (Some(show), _) | (None, Some(show)) => show,
        (None, None) => !error_bag_rendered,
    }
}

/// Formats one inline error message.
pub fn format_field_error(message: &str) -> String {
    format!(r#"<span class="help-block">{}</span>"#, html_escape(message))
}

/// Renders the global error list; empty when there are no errors.
pub fn render_error_list(source: &dyn ErrorSource) -> String {
    if !source.any() {
        return String::new();
    }

    let bag = source.bag_name().to_string();
    let messages = source.messages();

    html! { div.class("alert alert-danger") }
        .child::<Ul, _>(|ul| {
            ul.children(messages.iter(), |(field, message), li: Element<Li>| {
                li.data("bag", &bag).data("name", field).text(message)
            })
        })
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_key() {
        assert_eq!(error_key("email"), "email");
        assert_eq!(error_key("items[0]"), "items.0");
        assert_eq!(error_key("items[0][name]"), "items.0.name");
        assert_eq!(error_key("tags[]"), "tags");
    }

    #[test]
    fn test_explicit_session_choice_wins() {
        assert!(display_errors_inline(Some(true), Some(false), true));
        assert!(!display_errors_inline(Some(false), Some(true), false));
    }

    #[test]
    fn test_configured_choice() {
        assert!(display_errors_inline(None, Some(true), true));
        assert!(!display_errors_inline(None, Some(false), false));
    }

    #[test]
    fn test_auto_mode_follows_error_bag() {
        assert!(display_errors_inline(None, None, false));
        assert!(!display_errors_inline(None, None, true));
    }

    #[test]
    fn test_error_bag() {
        let bag = ErrorBag::new()
            .with("email", "The email is required.")
            .with("email", "The email must be valid.")
            .with("name", "The name is required.");
        assert_eq!(bag.len(), 2);
        assert!(bag.any());
        assert_eq!(bag.first("email").as_deref(), Some("The email is required."));
        assert_eq!(bag.get("email").len(), 2);
        assert!(bag.get("password").is_empty());
        assert_eq!(bag.messages().len(), 3);
    }

    #[test]
    fn test_error_bag_display() {
        let bag = ErrorBag::new()
            .with("name", "The name is required.")
            .with("email", "The email is required.")
            .with("email", "The email must be valid.");
        assert_eq!(
            bag.to_string(),
            "email: The email is required.\nemail: The email must be valid.\nname: The name is required.\n"
        );
        assert_eq!(ErrorBag::new().to_string(), "");
    }

    #[test]
    fn test_format_field_error_escapes() {
        assert_eq!(
            format_field_error("a < b"),
            r#"<span class="help-block">a &lt; b</span>"#
        );
    }

    #[test]
    fn test_error_list() {
        let bag = ErrorBag::new().with("email", "The email is required.");
        let html = render_error_list(&bag);
        assert!(html.contains("alert alert-danger"));
        assert!(html.contains("The email is required."));
        assert!(html.contains("email"));
    }

    #[test]
    fn test_error_list_empty() {
        assert_eq!(render_error_list(&ErrorBag::new()), "");
    }
}
