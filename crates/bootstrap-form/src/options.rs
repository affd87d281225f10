//! Per-call options for forms and fields.

use crate::attributes::{html_escape, Attributes};
use crate::routing::{BoundModel, FormMethod, FormTarget, ModelRoutes};

/// Input element types rendered through the shared field wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Password,
    Textarea,
    Number,
    Url,
    Tel,
    Search,
    Date,
}

impl InputKind {
    /// Returns the HTML `type` attribute value.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Textarea => "textarea",
            Self::Number => "number",
            Self::Url => "url",
            Self::Tel => "tel",
            Self::Search => "search",
            Self::Date => "date",
        }
    }
}

/// An input-group addon shown before or after a text input.
///
/// `fa-calendar` becomes a Font Awesome calendar icon, any token containing
/// `glyphicon-` becomes a glyphicon span, and anything else is used as raw
/// markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Addon(String);

impl Addon {
    /// Creates an addon from an icon token or markup.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Renders the addon wrapped in its `input-group-addon` div.
    pub fn to_html(&self) -> String {
        let inner = if self.0 == "fa-calendar" {
            r#"<span class="fa fa-calendar"></span>"#.to_string()
        } else if self.0.contains("glyphicon-") {
            format!(r#"<span class="glyphicon {}"></span>"#, html_escape(&self.0))
        } else {
            self.0.clone()
        };
        format!(r#"<div class="input-group-addon">{inner}</div>"#)
    }
}

/// Options for a single field.
///
/// Named fields are consumed by the renderer; `attrs` is passed through to
/// the rendered element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldOptions {
    /// Explicit element id; defaults to `form-<name>`.
    pub id: Option<String>,
    /// Extra classes for the element.
    pub class: Option<String>,
    /// Label width for this field only (horizontal forms).
    pub label_cols: Option<u8>,
    pub prepend_addon: Option<Addon>,
    pub append_addon: Option<Addon>,
    /// Multi-value select.
    pub multiple: bool,
    /// Date format override for date and month inputs.
    pub format: Option<String>,
    /// Pass-through HTML attributes.
    pub attrs: Attributes,
}

impl FieldOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether no option is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Sets the element id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets extra element classes.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Overrides the label width for this field.
    #[must_use]
    pub fn label_cols(mut self, columns: u8) -> Self {
        self.label_cols = Some(columns);
        self
    }

    #[must_use]
    pub fn prepend_addon(mut self, addon: impl Into<String>) -> Self {
        self.prepend_addon = Some(Addon::new(addon));
        self
    }

    #[must_use]
    pub fn append_addon(mut self, addon: impl Into<String>) -> Self {
        self.append_addon = Some(Addon::new(addon));
        self
    }

    /// Makes a select accept several values.
    #[must_use]
    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    /// Sets the date format.
    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Sets an HTML attribute. `id` and `class` go to their typed fields.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        match key.as_str() {
            "id" => self.id = Some(value.into()),
            "class" => self.class = Some(value.into()),
            _ => self.attrs.set(key, value),
        }
        self
    }
}

/// Options for opening a form.
#[derive(Debug, Clone, Default)]
pub struct FormOptions {
    /// Replaces the form-type class.
    pub class: Option<String>,
    /// Adds the `ajax` class.
    pub ajax: bool,
    pub left_column_class: Option<String>,
    pub left_column_offset_class: Option<String>,
    pub right_column_class: Option<String>,
    pub show_errors_in_form_group: Option<bool>,
    /// Model the form edits; selects the route and method.
    pub model: Option<BoundModel>,
    pub routes: ModelRoutes,
    /// Target for forms without a model.
    pub target: FormTarget,
    pub method: Option<FormMethod>,
    /// Multipart encoding for file uploads.
    pub files: bool,
    /// Pass-through HTML attributes.
    pub attrs: Attributes,
}

impl FormOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    #[must_use]
    pub fn ajax(mut self) -> Self {
        self.ajax = true;
        self
    }

    #[must_use]
    pub fn left_column_class(mut self, class: impl Into<String>) -> Self {
        self.left_column_class = Some(class.into());
        self
    }

    #[must_use]
    pub fn left_column_offset_class(mut self, class: impl Into<String>) -> Self {
        self.left_column_offset_class = Some(class.into());
        self
    }

    #[must_use]
    pub fn right_column_class(mut self, class: impl Into<String>) -> Self {
        self.right_column_class = Some(class.into());
        self
    }

    /// Forces inline field errors on or off for the session.
    #[must_use]
    pub fn show_errors_in_form_group(mut self, show: bool) -> Self {
        self.show_errors_in_form_group = Some(show);
        self
    }

    /// Binds the form to a model.
    #[must_use]
    pub fn model(mut self, model: BoundModel) -> Self {
        self.model = Some(model);
        self
    }

    #[must_use]
    pub fn store(mut self, route: impl Into<String>) -> Self {
        self.routes.store = Some(route.into());
        self
    }

    #[must_use]
    pub fn update(mut self, route: impl Into<String>) -> Self {
        self.routes.update = Some(route.into());
        self
    }

    #[must_use]
    pub fn destroy(mut self, route: impl Into<String>) -> Self {
        self.routes.destroy = Some(route.into());
        self
    }

    /// Submits to a literal URL.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.target = FormTarget::Url(url.into());
        self
    }

    /// Submits to a named route or action.
    #[must_use]
    pub fn route(mut self, name: &str, parameters: &[&str]) -> Self {
        self.target = FormTarget::named(
            name,
            parameters.iter().map(|p| (*p).to_string()).collect(),
        );
        self
    }

    #[must_use]
    pub fn method(mut self, method: FormMethod) -> Self {
        self.method = Some(method);
        self
    }

    /// Enables multipart encoding.
    #[must_use]
    pub fn files(mut self) -> Self {
        self.files = true;
        self
    }

    /// Sets an HTML attribute on the form tag.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }
}
