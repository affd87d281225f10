//! Mutable state of the open form and of the field being rendered.

use crate::columns::ColumnOverride;
use crate::config::FormType;
use crate::routing::BoundModel;

/// State of the currently open form. Unset values fall back to the
/// [`crate::FormConfig`] defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSession {
    pub form_type: Option<FormType>,
    pub left_column_class: Option<String>,
    pub left_column_offset_class: Option<String>,
    pub right_column_class: Option<String>,
    /// Model of the last model-bound form.
    pub model: Option<BoundModel>,
    /// Explicit inline-error choice; `None` defers to the configuration.
    pub show_errors_in_form_group: Option<bool>,
    /// Whether the global error list was rendered. Never reset, so the
    /// automatic error display stays consistent for the whole request.
    pub error_bag_rendered: bool,
}

impl FormSession {
    /// Clears the layout chosen for the form being closed.
    pub fn reset_layout(&mut self) {
        self.form_type = None;
        self.left_column_class = None;
        self.left_column_offset_class = None;
        self.right_column_class = None;
    }
}

/// State scoped to the field being rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldContext {
    /// Id of the field's element, used as the label's `for`.
    pub field_id: Option<String>,
    /// Label/input split for this field only.
    pub columns: Option<ColumnOverride>,
}

impl FieldContext {
    /// Returns whether nothing is held for a field.
    pub fn is_released(&self) -> bool {
        self.field_id.is_none() && self.columns.is_none()
    }

    /// Drops the field id and the column override.
    pub fn release(&mut self) {
        self.field_id = None;
        self.columns = None;
    }
}

/// Default element id of a field.
pub fn default_field_id(name: &str) -> String {
    format!("form-{name}")
}
