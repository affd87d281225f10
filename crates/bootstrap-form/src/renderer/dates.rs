//! Date and month inputs.

use std::fmt::Write;

use chrono::{NaiveDate, NaiveDateTime};

use super::FormRenderer;
use crate::attributes::Attributes;
use crate::error::{FormError, Result};
use crate::label::LabelOrOptions;
use crate::options::{FieldOptions, InputKind};

/// Value of a date or month input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateValue {
    /// Already formatted; rendered as is.
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl DateValue {
    /// Formats the value with a chrono format string. Text values are
    /// returned unchanged.
    pub fn format(&self, format: &str) -> Result<String> {
        let mut out = String::new();
        let written = match self {
            Self::Text(text) => return Ok(text.clone()),
            Self::Date(date) => write!(out, "{}", date.format(format)),
            Self::DateTime(datetime) => write!(out, "{}", datetime.format(format)),
        };
        written.map_err(|_| FormError::InvalidDateFormat(format.to_string()))?;
        Ok(out)
    }
}

impl From<&str> for DateValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for DateValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<NaiveDate> for DateValue {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<NaiveDateTime> for DateValue {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::DateTime(datetime)
    }
}

/// Formats an optional date value.
///
/// ```
/// use bootstrap_form::{formatted_date_value, DateValue};
/// use chrono::NaiveDate;
///
/// let date = DateValue::from(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
/// let value = formatted_date_value(Some(&date), "%d/%m/%Y").unwrap();
/// assert_eq!(value.as_deref(), Some("09/03/2024"));
/// ```
pub fn formatted_date_value(value: Option<&DateValue>, format: &str) -> Result<Option<String>> {
    value.map(|value| value.format(format)).transpose()
}

impl FormRenderer {
    /// Renders a date input with the date picker class.
    ///
    /// The value is formatted with the `format` option or the configured
    /// date format, and a hidden `<name>_format` input carries the format so
    /// the submitted value can be parsed back.
    pub fn date(
        &mut self,
        name: &str,
        label: impl Into<LabelOrOptions>,
        value: Option<DateValue>,
        options: FieldOptions,
    ) -> Result<String> {
        let picker = self.config.date_picker_class.clone();
        let format = self.config.date_format.clone();
        self.picker_input(name, label.into(), value, options, picker, format)
    }

    /// Renders a month input with the month picker class. See
    /// [`FormRenderer::date`].
    pub fn month(
        &mut self,
        name: &str,
        label: impl Into<LabelOrOptions>,
        value: Option<DateValue>,
        options: FieldOptions,
    ) -> Result<String> {
        let picker = self.config.month_picker_class.clone();
        let format = self.config.month_format.clone();
        self.picker_input(name, label.into(), value, options, picker, format)
    }

    fn picker_input(
        &mut self,
        name: &str,
        label: LabelOrOptions,
        value: Option<DateValue>,
        options: FieldOptions,
        picker_class: String,
        default_format: String,
    ) -> Result<String> {
        let (label, mut options) = label.resolve(options)?;
        let format = options.format.take().unwrap_or(default_format);
        options.class = Some(picker_class);

        let value = formatted_date_value(value.as_ref(), &format)?;
        let format_field = self.hidden(
            &format!("{name}_format"),
            Some(format.as_str()),
            Attributes::new(),
        );
        let field = self.input(InputKind::Date, name, label, value.as_deref(), options)?;

        Ok(format!("{format_field}{field}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FormConfig, FormType};
    use crate::label::Label;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_value_formats() {
        assert_eq!(DateValue::from(date(2024, 1, 31)).format("%Y-%m").unwrap(), "2024-01");
        assert_eq!(DateValue::from("tomorrow").format("%Y").unwrap(), "tomorrow");

        let datetime = date(2024, 1, 31).and_hms_opt(8, 5, 0).unwrap();
        assert_eq!(
            DateValue::from(datetime).format("%d/%m/%Y %H:%M").unwrap(),
            "31/01/2024 08:05"
        );
    }

    #[test]
    fn test_invalid_format() {
        assert!(matches!(
            DateValue::from(date(2024, 1, 31)).format("%Q"),
            Err(FormError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn test_formatted_date_value_none() {
        assert_eq!(formatted_date_value(None, "%Y").unwrap(), None);
    }

    #[test]
    fn test_date_input() {
        let mut form = FormRenderer::default();
        form.set_type(FormType::Vertical);
        let html = form
            .date("born", Label::Auto, Some(date(1990, 7, 4).into()), FieldOptions::new())
            .unwrap();

        assert!(html.starts_with(
            r#"<input type="hidden" name="born_format" value="%d/%m/%Y" id="form-born_format">"#
        ));
        assert!(html.contains(
            r#"<input type="date" name="born" value="04/07/1990" id="form-born" class="form-control date-picker">"#
        ));
        assert!(form.field_context().is_released());
    }

    #[test]
    fn test_month_input_with_format_option() {
        let config = FormConfig {
            form_type: FormType::Vertical,
            month_picker_class: "mp".to_string(),
            ..FormConfig::default()
        };
        let mut form = FormRenderer::new(config);
        let html = form
            .month(
                "period",
                FieldOptions::new().format("%m.%Y").class("ignored"),
                Some(date(2023, 11, 1).into()),
                FieldOptions::new(),
            )
            .unwrap();

        assert!(html.contains(r#"name="period_format" value="%m.%Y""#));
        assert!(html.contains(r#"value="11.2023""#));
        assert!(html.contains(r#"class="form-control mp""#));
        assert!(html.contains(">Period:</label>"));
    }
}
