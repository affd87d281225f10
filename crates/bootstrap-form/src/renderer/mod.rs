//! The Bootstrap form renderer.

mod dates;
mod fields;

pub use dates::{formatted_date_value, DateValue};

use ironhtml::html;
use tracing::{debug, trace, warn};

use crate::attributes::Attributes;
use crate::builder::{HtmlFormBuilder, PrimitiveFormBuilder};
use crate::columns::{apply_column_override, ColumnOverride};
use crate::config::{FormConfig, FormType};
use crate::error::Result;
use crate::feedback::{
    display_errors_inline, error_key, format_field_error, render_error_list, ErrorBag,
    ErrorSource,
};
use crate::label::{resolve_label, Label, NoTranslations, Translator};
use crate::options::{FieldOptions, FormOptions};
use crate::routing::resolve_model_route;
use crate::session::{default_field_id, FieldContext, FormSession};

/// Renders Bootstrap forms for one request.
///
/// The renderer keeps the layout of the open form in a [`FormSession`] and
/// the id and column override of the field being rendered in a
/// [`FieldContext`]. Every field method releases the field context before it
/// returns, including when it fails.
///
/// # Example
///
/// ```
/// use bootstrap_form::{ErrorBag, FieldOptions, FormOptions, FormRenderer, Label};
///
/// let errors = ErrorBag::new().with("email", "The email is required.");
/// let mut form = FormRenderer::default().with_errors(errors);
///
/// let open = form.horizontal(FormOptions::new().url("/signup")).unwrap();
/// assert!(open.contains(r#"class="form-horizontal""#));
///
/// let email = form.email("email", Label::Auto, None, FieldOptions::new()).unwrap();
/// assert!(email.contains(r#"<div class="form-group has-error">"#));
/// assert!(email.contains(r#"<span class="help-block">The email is required.</span>"#));
///
/// assert_eq!(form.close(), "</form>");
/// ```
pub struct FormRenderer {
    config: FormConfig,
    builder: Box<dyn PrimitiveFormBuilder>,
    errors: Box<dyn ErrorSource>,
    translator: Box<dyn Translator>,
    session: FormSession,
    field: FieldContext,
}

impl std::fmt::Debug for FormRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormRenderer")
            .field("config", &self.config)
            .field("session", &self.session)
            .field("field", &self.field)
            .finish_non_exhaustive()
    }
}

impl Default for FormRenderer {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}

impl FormRenderer {
    /// Creates a renderer with the default HTML builder, no errors and no
    /// translations.
    pub fn new(config: FormConfig) -> Self {
        Self {
            config,
            builder: Box::new(HtmlFormBuilder::new()),
            errors: Box::new(ErrorBag::new()),
            translator: Box::new(NoTranslations),
            session: FormSession::default(),
            field: FieldContext::default(),
        }
    }

    /// Replaces the primitive tag builder.
    #[must_use]
    pub fn with_builder(mut self, builder: impl PrimitiveFormBuilder + 'static) -> Self {
        self.builder = Box::new(builder);
        self
    }

    /// Sets the validation errors of the request.
    #[must_use]
    pub fn with_errors(mut self, errors: impl ErrorSource + 'static) -> Self {
        self.errors = Box::new(errors);
        self
    }

    /// Sets the label translator.
    #[must_use]
    pub fn with_translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Box::new(translator);
        self
    }

    /// Configuration the renderer was built with.
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn session(&self) -> &FormSession {
        &self.session
    }

    /// State of the field being rendered; released between field calls.
    pub fn field_context(&self) -> &FieldContext {
        &self.field
    }

    // ---- form lifecycle ----

    /// Opens a form.
    ///
    /// A bound model selects the route and method (see
    /// [`crate::resolve_model_route`]); otherwise the form submits to
    /// `options.target`.
    pub fn open(&mut self, options: FormOptions) -> Result<String> {
        let FormOptions {
            class,
            ajax,
            left_column_class,
            left_column_offset_class,
            right_column_class,
            show_errors_in_form_group,
            model,
            routes,
            target,
            method,
            files,
            attrs,
        } = options;

        if let Some(class) = left_column_class {
            self.set_left_column_class(class);
        }
        if let Some(class) = left_column_offset_class {
            self.set_left_column_offset_class(class);
        }
        if let Some(class) = right_column_class {
            self.set_right_column_class(class);
        }
        if let Some(show) = show_errors_in_form_group {
            self.set_display_errors_in_form_group(show);
        }

        let mut class = class.unwrap_or_else(|| self.form_type().class().to_string());
        if ajax {
            class.push_str(" ajax");
        }

        let mut form_attrs = Attributes::new().with("role", "form");
        let class = class.trim();
        if !class.is_empty() {
            form_attrs.set("class", class);
        }
        if files {
            form_attrs.set("enctype", "multipart/form-data");
        }
        form_attrs.merge(&attrs);

        if let Some(model) = model {
            let route = resolve_model_route(&model, &routes)?;
            debug!(
                form_type = ?self.form_type(),
                method = %route.method,
                target = ?route.target,
                "opening model form"
            );
            self.session.model = Some(model);
            return self.builder.open_model_form(&route, &form_attrs);
        }

        debug!(form_type = ?self.form_type(), target = ?target, "opening form");
        self.builder
            .open_form(&target, method.unwrap_or_default(), &form_attrs)
    }

    /// Opens a vertical (stacked) form.
    pub fn vertical(&mut self, options: FormOptions) -> Result<String> {
        self.set_type(FormType::Vertical);
        self.open(options)
    }

    /// Opens an inline form.
    pub fn inline(&mut self, options: FormOptions) -> Result<String> {
        self.set_type(FormType::Inline);
        self.open(options)
    }

    /// Opens a horizontal form.
    pub fn horizontal(&mut self, options: FormOptions) -> Result<String> {
        self.set_type(FormType::Horizontal);
        self.open(options)
    }

    /// Resets the form layout and closes the form.
    pub fn close(&mut self) -> String {
        debug!(form_type = ?self.form_type(), "closing form");
        self.session.reset_layout();
        self.builder.close_form()
    }

    // ---- layout ----

    /// Layout of the open form.
    pub fn form_type(&self) -> FormType {
        self.session.form_type.unwrap_or(self.config.form_type)
    }

    pub fn set_type(&mut self, form_type: FormType) {
        self.session.form_type = Some(form_type);
    }

    pub fn is_horizontal(&self) -> bool {
        self.form_type() == FormType::Horizontal
    }

    /// Grid classes of the label column.
    pub fn left_column_class(&self) -> String {
        let base = non_empty(&self.session.left_column_class)
            .unwrap_or(&self.config.left_column_class);
        self.overridden(base, ColumnOverride::left)
    }

    /// Offset classes for controls rendered without a label.
    pub fn left_column_offset_class(&self) -> String {
        let base = non_empty(&self.session.left_column_offset_class)
            .unwrap_or(&self.config.left_column_offset_class);
        self.overridden(base, ColumnOverride::left)
    }

    /// Grid classes of the input column.
    pub fn right_column_class(&self) -> String {
        let base = non_empty(&self.session.right_column_class)
            .unwrap_or(&self.config.right_column_class);
        self.overridden(base, ColumnOverride::right)
    }

    pub fn set_left_column_class(&mut self, class: impl Into<String>) {
        self.session.left_column_class = Some(class.into());
    }

    pub fn set_left_column_offset_class(&mut self, class: impl Into<String>) {
        self.session.left_column_offset_class = Some(class.into());
    }

    pub fn set_right_column_class(&mut self, class: impl Into<String>) {
        self.session.right_column_class = Some(class.into());
    }

    /// Overrides the label width until the current field is closed.
    /// Zero removes the override.
    pub fn set_label_columns(&mut self, columns: u8) -> Result<()> {
        self.field.columns = ColumnOverride::new(columns)?;
        Ok(())
    }

    /// Releases the field id and column override of the current field.
    pub fn close_field(&mut self) {
        trace!(field_id = ?self.field.field_id, "releasing field");
        self.field.release();
    }

    fn overridden(&self, base: &str, columns: fn(ColumnOverride) -> u8) -> String {
        // A full-width label leaves no input columns; the input keeps its base width.
        match self.field.columns.map(columns) {
            Some(width) if width > 0 => apply_column_override(base, width),
            _ => base.to_string(),
        }
    }

    // ---- errors ----

    /// Forces inline field errors on or off for this session.
    pub fn set_display_errors_in_form_group(&mut self, show: bool) -> &mut Self {
        self.session.show_errors_in_form_group = Some(show);
        self
    }

    /// Whether field errors are rendered inside their form group right now.
    pub fn should_display_errors_in_form_group(&self) -> bool {
        display_errors_inline(
            self.session.show_errors_in_form_group,
            self.config.show_errors_in_form_group,
            self.session.error_bag_rendered,
        )
    }

    /// Inline error markup of a field, if any should be shown.
    pub fn field_error(&self, field: &str) -> Option<String> {
        if !self.should_display_errors_in_form_group() {
            return None;
        }

        let key = error_key(field);
        if self.config.show_all_errors {
            let messages = self.errors.get(&key);
            if messages.is_empty() {
                return None;
            }
            return Some(messages.iter().map(|m| format_field_error(m)).collect());
        }

        self.errors.first(&key).map(|m| format_field_error(&m))
    }

    /// The error class when the field has errors.
    pub fn field_error_class(&self, field: &str) -> Option<&str> {
        self.errors
            .first(&error_key(field))
            .map(|_| self.config.error_class.as_str())
    }

    /// Renders every error of the request inside `<div id="container_id">`.
    ///
    /// With automatic error display, fields rendered afterwards no longer
    /// show their errors inline.
    pub fn errors(&mut self, container_id: &str) -> String {
        if self.session.error_bag_rendered {
            warn!(container_id, "error list rendered more than once");
        }
        self.session.error_bag_rendered = true;

        html! { div.id(#container_id) }
            .raw(render_error_list(&*self.errors))
            .render()
    }

    // ---- labels ----

    /// Renders a label for `name`. The `for` attribute comes from `attrs`,
    /// then the current field, then the default id.
    pub fn label(&self, name: &str, label: impl Into<Label>, attrs: Attributes) -> String {
        let text = self.label_title(&label.into(), name, true);
        self.label_markup(name, text.as_deref(), attrs)
    }

    fn label_title(&self, label: &Label, name: &str, postfix: bool) -> Option<String> {
        let postfix = postfix.then_some(self.config.label_postfix.as_str());
        resolve_label(label, name, postfix, &*self.translator)
    }

    fn label_markup(&self, name: &str, text: Option<&str>, attrs: Attributes) -> String {
        let Some(text) = text else {
            return String::new();
        };

        let mut attrs = self.label_options(&attrs);
        let for_id = attrs
            .remove("for")
            .or_else(|| self.field.field_id.clone())
            .unwrap_or_else(|| default_field_id(name));

        self.builder.label(&for_id, text, &attrs)
    }

    fn label_options(&self, attrs: &Attributes) -> Attributes {
        let mut class = "control-label".to_string();
        if self.is_horizontal() {
            class.push(' ');
            class.push_str(&self.left_column_class());
        }
        Attributes::new().with("class", class.trim()).merged(attrs)
    }

    // ---- field scaffolding ----

    /// Runs `render` with the field context of `name` acquired and releases
    /// it afterwards, whether `render` succeeds or not.
    fn with_field<T>(
        &mut self,
        name: &str,
        options: &FieldOptions,
        render: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        let columns = match options.label_cols {
            Some(columns) => ColumnOverride::new(columns)?,
            None => None,
        };
        let field_id = options
            .id
            .clone()
            .unwrap_or_else(|| default_field_id(name));

        trace!(field_id = %field_id, ?columns, "acquiring field");
        self.field = FieldContext {
            field_id: Some(field_id),
            columns,
        };

        let result = render(self);
        self.close_field();
        result
    }

    fn current_field_id(&self, name: &str) -> String {
        self.field
            .field_id
            .clone()
            .unwrap_or_else(|| default_field_id(name))
    }

    /// Element attributes with `form-control` and the field id injected.
    fn field_attrs(&self, name: &str, options: &FieldOptions) -> Attributes {
        let id = options
            .id
            .clone()
            .unwrap_or_else(|| self.current_field_id(name));
        let class = format!("form-control {}", options.class.as_deref().unwrap_or_default());

        Attributes::new()
            .with("id", id)
            .with("class", class.trim())
            .merged(&options.attrs)
    }

    fn form_group_class(&self, name: Option<&str>) -> String {
        match name.and_then(|name| self.field_error_class(name)) {
            Some(error_class) => format!("form-group {error_class}"),
            None => "form-group".to_string(),
        }
    }

    /// Form group with the field's label, flagged when the field has errors.
    fn form_group_with_label(&self, name: &str, title: Option<&str>, element: &str) -> String {
        let class = self.form_group_class(Some(name));
        html! { div.class(#class) }
            .raw(self.label_markup(name, title, Attributes::new()))
            .raw(element)
            .render()
    }

    /// Form group without label or error flag.
    fn form_group(&self, element: &str) -> String {
        let class = self.form_group_class(None);
        html! { div.class(#class) }.raw(element).render()
    }

    /// Wraps `inner` in the input column of horizontal forms. `offset` also
    /// shifts it past the label column, for controls without a label.
    fn column_wrapper(&self, inner: &str, offset: bool, extra_class: Option<&str>) -> String {
        let mut classes = Vec::new();
        if self.is_horizontal() {
            if offset {
                classes.push(self.left_column_offset_class());
            }
            classes.push(self.right_column_class());
        }
        if let Some(extra) = extra_class {
            classes.push(extra.to_string());
        }

        let class = classes.join(" ");
        let class = class.trim();
        html! { div }
            .when(!class.is_empty(), |div| div.class(class))
            .raw(inner)
            .render()
    }
}

fn non_empty(value: &Option<String>) -> Option<&String> {
    value.as_ref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormError;

    #[test]
    fn test_column_classes_default_to_config() {
        let form = FormRenderer::default();
        assert_eq!(form.left_column_class(), "col-sm-2 col-md-2");
        assert_eq!(form.right_column_class(), "col-sm-10 col-md-10");
        assert_eq!(form.left_column_offset_class(), "col-sm-offset-2 col-md-offset-2");
    }

    #[test]
    fn test_label_columns_override_and_restore() {
        let mut form = FormRenderer::default();
        form.set_label_columns(4).unwrap();
        assert_eq!(form.left_column_class(), "col-sm-4 col-md-4");
        assert_eq!(form.right_column_class(), "col-sm-8 col-md-8");
        assert_eq!(form.left_column_offset_class(), "col-sm-offset-4 col-md-offset-4");

        form.close_field();
        assert_eq!(form.left_column_class(), "col-sm-2 col-md-2");
        assert_eq!(form.right_column_class(), "col-sm-10 col-md-10");
    }

    #[test]
    fn test_full_width_label_keeps_input_column() {
        let mut form = FormRenderer::default();
        form.set_label_columns(12).unwrap();
        assert_eq!(form.left_column_class(), "col-sm-12 col-md-12");
        assert_eq!(form.right_column_class(), "col-sm-10 col-md-10");
    }

    #[test]
    fn test_config_accessor() {
        let config = FormConfig {
            label_postfix: " *".to_string(),
            ..FormConfig::default()
        };
        let form = FormRenderer::new(config);
        assert_eq!(form.config().label_postfix, " *");
        assert_eq!(form.config().form_type, FormType::Horizontal);
        assert_eq!(form.label("name", Label::Auto, Attributes::new()).matches(" *<").count(), 1);
    }

    #[test]
    fn test_invalid_label_columns() {
        let mut form = FormRenderer::default();
        assert!(matches!(
            form.set_label_columns(20),
            Err(FormError::InvalidLabelColumns(20))
        ));
        assert!(form.field_context().is_released());
    }

    #[test]
    fn test_empty_session_class_falls_back() {
        let mut form = FormRenderer::default();
        form.set_left_column_class("");
        assert_eq!(form.left_column_class(), "col-sm-2 col-md-2");
    }

    #[test]
    fn test_with_field_releases_on_error() {
        let mut form = FormRenderer::default();
        let result: Result<()> = form.with_field("name", &FieldOptions::new().label_cols(3), |f| {
            assert_eq!(f.field_context().field_id.as_deref(), Some("form-name"));
            assert_eq!(f.left_column_class(), "col-sm-3 col-md-3");
            Err(FormError::UnknownRoute("x".to_string()))
        });
        assert!(result.is_err());
        assert!(form.field_context().is_released());
    }

    #[test]
    fn test_label_for_resolution() {
        let form = FormRenderer::default();
        assert_eq!(
            form.label("user_id", Label::Auto, Attributes::new()),
            r#"<label for="form-user_id" class="control-label col-sm-2 col-md-2">User:</label>"#
        );
        assert_eq!(
            form.label("name", "Name", Attributes::new().with("for", "other")),
            r#"<label for="other" class="control-label col-sm-2 col-md-2">Name</label>"#
        );
        assert_eq!(form.label("name", false, Attributes::new()), "");
    }

    #[test]
    fn test_column_wrapper_without_classes() {
        let mut form = FormRenderer::default();
        form.set_type(FormType::Vertical);
        assert_eq!(form.column_wrapper("x", true, None), "<div>x</div>");
        assert_eq!(
            form.column_wrapper("x", false, Some("checkbox")),
            r#"<div class="checkbox">x</div>"#
        );
    }

    #[test]
    fn test_label_caller_class_wins() {
        let mut form = FormRenderer::default();
        form.set_type(FormType::Vertical);
        assert_eq!(
            form.label("name", "Name", Attributes::new().with("class", "sr-only")),
            r#"<label for="form-name" class="sr-only">Name</label>"#
        );
    }
}
