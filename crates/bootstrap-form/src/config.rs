//! Renderer configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Bootstrap form layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormType {
    /// Stacked labels and inputs.
    Vertical,
    /// Labels and inputs side by side on the grid.
    #[default]
    Horizontal,
    /// All controls on one line.
    Inline,
}

impl FormType {
    /// Returns the CSS class put on the `<form>` tag.
    pub const fn class(self) -> &'static str {
        match self {
            Self::Vertical => "",
            Self::Horizontal => "form-horizontal",
            Self::Inline => "form-inline",
        }
    }
}

/// Default styling and behavior options.
///
/// Every key is optional when deserializing; missing keys take the values of
/// [`FormConfig::default`].
///
/// # Example
///
/// ```
/// use bootstrap_form::{FormConfig, FormType};
///
/// let config = FormConfig::from_json(
///     r#"{"type": "vertical", "show_errors_in_form_group": false}"#,
/// )
/// .unwrap();
/// assert_eq!(config.form_type, FormType::Vertical);
/// assert_eq!(config.show_errors_in_form_group, Some(false));
/// assert_eq!(config.label_postfix, ":");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Layout used when a form is opened without choosing one.
    #[serde(rename = "type")]
    pub form_type: FormType,
    /// Grid classes of the label column in horizontal forms.
    pub left_column_class: String,
    /// Grid classes of the input column in horizontal forms.
    pub right_column_class: String,
    /// Offset classes for controls without a label (checkbox, submit).
    pub left_column_offset_class: String,
    /// Render every message of a field instead of only the first.
    pub show_all_errors: bool,
    /// `None` lets the renderer decide (see [`crate::display_errors_inline`]).
    pub show_errors_in_form_group: Option<bool>,
    /// Appended to generated labels.
    pub label_postfix: String,
    /// chrono format for date inputs.
    pub date_format: String,
    /// chrono format for month inputs.
    pub month_format: String,
    pub date_picker_class: String,
    pub month_picker_class: String,
    /// Class added to form groups whose field has errors.
    pub error_class: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_type: FormType::Horizontal,
            left_column_class: "col-sm-2 col-md-2".to_string(),
            right_column_class: "col-sm-10 col-md-10".to_string(),
            left_column_offset_class: "col-sm-offset-2 col-md-offset-2".to_string(),
            show_all_errors: false,
            show_errors_in_form_group: None,
            label_postfix: ":".to_string(),
            date_format: "%d/%m/%Y".to_string(),
            month_format: "%Y-%m".to_string(),
            date_picker_class: "date-picker".to_string(),
            month_picker_class: "month-picker".to_string(),
            error_class: "has-error".to_string(),
        }
    }
}

impl FormConfig {
    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds a configuration from an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}
