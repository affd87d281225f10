//! Primitive tag builders.
//!
//! The renderer composes Bootstrap markup out of plain form tags produced by
//! a [`PrimitiveFormBuilder`]. [`HtmlFormBuilder`] is the default one; host
//! applications can plug their own to change how routes, CSRF tokens or
//! individual tags are produced.

mod html;

pub use html::HtmlFormBuilder;

use crate::attributes::Attributes;
use crate::error::Result;
use crate::routing::{FormMethod, FormTarget, ResolvedRoute};

/// Renders raw form tags.
pub trait PrimitiveFormBuilder: Send + Sync {
    /// Renders the opening `<form>` tag and any hidden fields it needs.
    fn open_form(&self, target: &FormTarget, method: FormMethod, attrs: &Attributes)
        -> Result<String>;

    /// Opens a form for a model whose route has been resolved.
    fn open_model_form(&self, route: &ResolvedRoute, attrs: &Attributes) -> Result<String> {
        self.open_form(&route.target, route.method, attrs)
    }

    /// Renders the closing `</form>` tag.
    fn close_form(&self) -> String {
        "</form>".to_string()
    }

    /// Renders an `<input>` of the given type.
    fn input(&self, kind: &str, name: &str, value: Option<&str>, attrs: &Attributes) -> String;

    /// Renders a `<textarea>`.
    fn textarea(&self, name: &str, value: Option<&str>, attrs: &Attributes) -> String;

    /// Renders a `<select>`; options whose value is in `selected` are selected.
    fn select(
        &self,
        name: &str,
        choices: &[(&str, &str)],
        selected: &[&str],
        attrs: &Attributes,
    ) -> String;

    /// Renders a checkbox input.
    fn checkbox(&self, name: &str, value: &str, checked: bool, attrs: &Attributes) -> String;

    /// Renders a radio input.
    fn radio(&self, name: &str, value: &str, checked: bool, attrs: &Attributes) -> String;

    /// Renders a hidden input.
    fn hidden(&self, name: &str, value: Option<&str>, attrs: &Attributes) -> String {
        self.input("hidden", name, value, attrs)
    }

    /// Renders a submit button.
    fn submit(&self, value: &str, attrs: &Attributes) -> String;

    /// Renders a `<label>` for the element with id `for_id`.
    fn label(&self, for_id: &str, text: &str, attrs: &Attributes) -> String;
}
