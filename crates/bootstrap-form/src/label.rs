//! Label text resolution.

use std::collections::HashMap;

use crate::error::{FormError, Result};
use crate::options::FieldOptions;

/// Label of a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Label {
    /// Translated or derived from the field name.
    #[default]
    Auto,
    /// Explicit text. An empty string falls back to the derived label.
    Text(String),
    /// No label at all.
    Hidden,
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Label {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Option<&str>> for Label {
    fn from(text: Option<&str>) -> Self {
        text.map_or(Self::Auto, Self::from)
    }
}

/// `false` hides the label, `true` keeps the automatic one.
impl From<bool> for Label {
    fn from(show: bool) -> Self {
        if show {
            Self::Auto
        } else {
            Self::Hidden
        }
    }
}

/// The label argument of field methods, which may carry the field options
/// instead so the label can be skipped at the call site:
///
/// ```
/// use bootstrap_form::{FieldOptions, FormRenderer};
///
/// let mut form = FormRenderer::default();
/// let html = form
///     .text("city", FieldOptions::new().class("wide"), None, FieldOptions::new())
///     .unwrap();
/// assert!(html.contains(r#"class="form-control wide""#));
/// assert!(html.contains("City:"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelOrOptions {
    Label(Label),
    Options(FieldOptions),
}

impl LabelOrOptions {
    /// Splits into the label and the options that apply.
    ///
    /// Options given in the label position make the label automatic. They
    /// cannot be combined with non-empty `options`.
    pub fn resolve(self, options: FieldOptions) -> Result<(Label, FieldOptions)> {
        match self {
            Self::Options(label_options) if options.is_empty() => Ok((Label::Auto, label_options)),
            Self::Options(_) => Err(FormError::ConflictingOptions),
            Self::Label(label) => Ok((label, options)),
        }
    }
}

impl From<Label> for LabelOrOptions {
    fn from(label: Label) -> Self {
        Self::Label(label)
    }
}

impl From<&str> for LabelOrOptions {
    fn from(text: &str) -> Self {
        Self::Label(text.into())
    }
}

impl From<String> for LabelOrOptions {
    fn from(text: String) -> Self {
        Self::Label(text.into())
    }
}

impl From<Option<&str>> for LabelOrOptions {
    fn from(text: Option<&str>) -> Self {
        Self::Label(text.into())
    }
}

impl From<bool> for LabelOrOptions {
    fn from(show: bool) -> Self {
        Self::Label(show.into())
    }
}

impl From<FieldOptions> for LabelOrOptions {
    fn from(options: FieldOptions) -> Self {
        Self::Options(options)
    }
}

/// Source of translated labels, keyed by `forms.<field name>`.
pub trait Translator: Send + Sync {
    /// Returns the translation for `key`, if any.
    fn translate(&self, key: &str) -> Option<String>;
}

/// Translator without any translations.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTranslations;

impl Translator for NoTranslations {
    fn translate(&self, _key: &str) -> Option<String> {
        None
    }
}

impl Translator for HashMap<String, String> {
    fn translate(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Resolves the label text of `name`; `None` means no label.
///
/// `postfix` is appended to derived labels only.
pub fn resolve_label(
    label: &Label,
    name: &str,
    postfix: Option<&str>,
    translator: &dyn Translator,
) -> Option<String> {
    match label {
        Label::Hidden => None,
        Label::Auto => Some(
            translator
                .translate(&format!("forms.{name}"))
                .unwrap_or_else(|| humanize(name, postfix)),
        ),
        Label::Text(text) if !text.is_empty() => Some(text.clone()),
        Label::Text(_) => Some(humanize(name, postfix)),
    }
}

/// Turns a field name into label text: `user_id` becomes `User:`.
///
/// ```
/// use bootstrap_form::humanize;
///
/// assert_eq!(humanize("first_name", Some(":")), "First Name:");
/// assert_eq!(humanize("tags[]", None), "Tags");
/// ```
pub fn humanize(name: &str, postfix: Option<&str>) -> String {
    let name = name.strip_suffix("[]").unwrap_or(name);
    let name = name.strip_suffix("_id").unwrap_or(name);
    let mut label = name.replace('_', " ");

    if let Some(postfix) = postfix {
        if !label.contains(postfix) {
            label.push_str(postfix);
        }
    }

    title_case(&label)
}

fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut word_start = true;

    for c in s.chars() {
        if c.is_alphanumeric() {
            if word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(c);
            word_start = true;
        }
    }

    out
}
