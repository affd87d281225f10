//! Field methods of [`FormRenderer`].

use ironhtml::html;

use super::FormRenderer;
use crate::attributes::Attributes;
use crate::error::Result;
use crate::label::{Label, LabelOrOptions};
use crate::options::{FieldOptions, InputKind};
use crate::session::default_field_id;

/// Checkable input flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Checkable {
    Checkbox,
    Radio,
}

impl Checkable {
    const fn block_class(self) -> &'static str {
        match self {
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
        }
    }

    const fn inline_class(self) -> &'static str {
        match self {
            Self::Checkbox => "checkbox-inline",
            Self::Radio => "radio-inline",
        }
    }
}

/// One checkbox or radio of a field.
struct Choice<'a> {
    name: &'a str,
    value: &'a str,
    text: Option<&'a str>,
    checked: bool,
}

impl FormRenderer {
    /// Renders a text input.
    pub fn text(
        &mut self,
        name: &str,
        label: impl Into<LabelOrOptions>,
        value: Option<&str>,
        options: FieldOptions,
    ) -> Result<String> {
        let (label, options) = LabelOrOptions::resolve(label.into(), options)?;
        self.input(InputKind::Text, name, label, value, options)
    }

    /// Renders an email input.
    pub fn email(
        &mut self,
        name: &str,
        label: impl Into<LabelOrOptions>,
        value: Option<&str>,
        options: FieldOptions,
    ) -> Result<String> {
        let (label, options) = LabelOrOptions::resolve(label.into(), options)?;
        self.input(InputKind::Email, name, label, value, options)
    }

    /// Renders a textarea.
    pub fn textarea(
        &mut self,
        name: &str,
        label: impl Into<LabelOrOptions>,
        value: Option<&str>,
        options: FieldOptions,
    ) -> Result<String> {
        let (label, options) = LabelOrOptions::resolve(label.into(), options)?;
        self.input(InputKind::Textarea, name, label, value, options)
    }

    /// Renders a password input. Passwords are never echoed back.
    pub fn password(
        &mut self,
        name: &str,
        label: impl Into<LabelOrOptions>,
        options: FieldOptions,
    ) -> Result<String> {
        let (label, options) = LabelOrOptions::resolve(label.into(), options)?;
        self.input(InputKind::Password, name, label, None, options)
    }

    /// Renders a labelled form group around an input of any [`InputKind`].
    ///
    /// The input gets `form-control` and the field id, is wrapped with its
    /// addons, followed by the inline error and placed in the input column.
    pub fn input(
        &mut self,
        kind: InputKind,
        name: &str,
        label: impl Into<Label>,
        value: Option<&str>,
        options: FieldOptions,
    ) -> Result<String> {
        let label = label.into();

        self.with_field(name, &options, |form| {
            let title = form.label_title(&label, name, true);
            let attrs = form.field_attrs(name, &options);

            let element = match kind {
                InputKind::Textarea => form.builder.textarea(name, value, &attrs),
                InputKind::Password => form.builder.input(kind.as_str(), name, None, &attrs),
                _ => form.builder.input(kind.as_str(), name, value, &attrs),
            };

            let inner = format!(
                "{}{}",
                wrap_addons(&element, &options),
                form.field_error(name).unwrap_or_default()
            );
            let wrapper = form.column_wrapper(&inner, false, None);

            Ok(form.form_group_with_label(name, title.as_deref(), &wrapper))
        })
    }

    /// Renders read-only text in place of an input.
    pub fn static_field(
        &mut self,
        name: &str,
        label: impl Into<LabelOrOptions>,
        value: &str,
        options: FieldOptions,
    ) -> Result<String> {
        let (label, options) = LabelOrOptions::resolve(label.into(), options)?;

        self.with_field(name, &options, |form| {
            let title = form.label_title(&label, name, true);

            let mut attrs = Attributes::new().with(
                "class",
                options.class.as_deref().unwrap_or("form-control-static"),
            );
            if let Some(id) = &options.id {
                attrs.set("id", id.as_str());
            }
            attrs.merge(&options.attrs);

            let inner = attrs.apply(html! { p }).text(value).render()
                + &form.field_error(name).unwrap_or_default();
            let wrapper = form.column_wrapper(&inner, false, None);

            Ok(form.form_group_with_label(name, title.as_deref(), &wrapper))
        })
    }

    /// Renders a `1`/`0` checkbox. A hidden `0` precedes the box so an
    /// unchecked box still submits a value.
    pub fn checkbox_bool(
        &mut self,
        name: &str,
        label: impl Into<LabelOrOptions>,
        checked: bool,
        options: FieldOptions,
    ) -> Result<String> {
        let hidden = self.builder.hidden(name, Some("0"), &Attributes::new());
        let checkbox = self.checkbox(name, label, "1", checked, options)?;
        Ok(format!("{hidden}{checkbox}"))
    }

    /// Renders a single checkbox aligned with the inputs of the form.
    pub fn checkbox(
        &mut self,
        name: &str,
        label: impl Into<LabelOrOptions>,
        value: &str,
        checked: bool,
        options: FieldOptions,
    ) -> Result<String> {
        let (label, options) = LabelOrOptions::resolve(label.into(), options)?;

        self.with_field(name, &options, |form| {
            let title = form.label_title(&label, name, false);
            let choice = Choice {
                name,
                value,
                text: title.as_deref(),
                checked,
            };
            let element = form.checkable_element(Checkable::Checkbox, &choice, false, &options);
            Ok(form.single_checkable(name, &element))
        })
    }

    /// Renders one checkbox with its label, without a form group.
    pub fn checkbox_element(
        &self,
        name: &str,
        label: impl Into<Label>,
        value: &str,
        checked: bool,
        inline: bool,
        options: &FieldOptions,
    ) -> String {
        let title = self.label_title(&label.into(), name, false);
        let choice = Choice {
            name,
            value,
            text: title.as_deref(),
            checked,
        };
        self.checkable_element(Checkable::Checkbox, &choice, inline, options)
    }

    /// Renders a group of checkboxes, one per `(value, label)` choice.
    /// Choices whose value is in `checked` are checked.
    pub fn checkboxes(
        &mut self,
        name: &str,
        label: impl Into<LabelOrOptions>,
        choices: &[(&str, &str)],
        checked: &[&str],
        inline: bool,
        options: FieldOptions,
    ) -> Result<String> {
        let (label, options) = LabelOrOptions::resolve(label.into(), options)?;

        self.with_field(name, &options, |form| {
            let elements: String = choices
                .iter()
                .enumerate()
                .map(|(index, (value, text))| {
                    let choice = Choice {
                        name,
                        value,
                        text: Some(*text),
                        checked: checked.contains(value),
                    };
                    form.group_element(Checkable::Checkbox, &choice, index, inline, &options)
                })
                .collect();

            Ok(form.checkable_group(name, &label, &elements))
        })
    }

    /// Renders a single radio aligned with the inputs of the form. Without a
    /// value, the label text is submitted.
    pub fn radio(
        &mut self,
        name: &str,
        label: impl Into<LabelOrOptions>,
        value: Option<&str>,
        checked: bool,
        options: FieldOptions,
    ) -> Result<String> {
        let (label, options) = LabelOrOptions::resolve(label.into(), options)?;

        self.with_field(name, &options, |form| {
            let title = form.label_title(&label, name, false);
            let value = radio_value(value, title.as_deref());
            let choice = Choice {
                name,
                value: &value,
                text: title.as_deref(),
                checked,
            };
            let element = form.checkable_element(Checkable::Radio, &choice, false, &options);
            Ok(form.single_checkable(name, &element))
        })
    }

    /// Renders one radio with its label, without a form group.
    pub fn radio_element(
        &self,
        name: &str,
        label: impl Into<Label>,
        value: Option<&str>,
        checked: bool,
        inline: bool,
        options: &FieldOptions,
    ) -> String {
        let title = self.label_title(&label.into(), name, false);
        let value = radio_value(value, title.as_deref());
        let choice = Choice {
            name,
            value: &value,
            text: title.as_deref(),
            checked,
        };
        self.checkable_element(Checkable::Radio, &choice, inline, options)
    }

    /// Renders a group of radios; the choice equal to `checked` is checked.
    pub fn radios(
        &mut self,
        name: &str,
        label: impl Into<LabelOrOptions>,
        choices: &[(&str, &str)],
        checked: Option<&str>,
        inline: bool,
        options: FieldOptions,
    ) -> Result<String> {
        let (label, options) = LabelOrOptions::resolve(label.into(), options)?;

        self.with_field(name, &options, |form| {
            let elements: String = choices
                .iter()
                .enumerate()
                .map(|(index, (value, text))| {
                    let choice = Choice {
                        name,
                        value,
                        text: Some(*text),
                        checked: checked == Some(*value),
                    };
                    form.group_element(Checkable::Radio, &choice, index, inline, &options)
                })
                .collect();

            Ok(form.checkable_group(name, &label, &elements))
        })
    }

    /// Renders a submit button aligned with the inputs of the form.
    pub fn submit(&mut self, value: &str, options: FieldOptions) -> Result<String> {
        self.with_field(value, &options, |form| {
            let mut attrs = Attributes::new().with(
                "class",
                options.class.as_deref().unwrap_or("btn btn-primary"),
            );
            if let Some(id) = &options.id {
                attrs.set("id", id.as_str());
            }
            attrs.merge(&options.attrs);

            let button = form.builder.submit(value, &attrs);
            Ok(form.form_group(&form.column_wrapper(&button, true, None)))
        })
    }

    /// Renders a file input styled by bootstrap-filestyle.
    pub fn file(
        &mut self,
        name: &str,
        label: impl Into<LabelOrOptions>,
        options: FieldOptions,
    ) -> Result<String> {
        let (label, options) = LabelOrOptions::resolve(label.into(), options)?;

        self.with_field(name, &options, |form| {
            let title = form.label_title(&label, name, true);
            let attrs = Attributes::new()
                .with("id", form.current_field_id(name))
                .with("class", options.class.as_deref().unwrap_or("filestyle"))
                .with("data-buttonBefore", "true")
                .merged(&options.attrs);

            let inner = format!(
                "{}{}",
                form.builder.input("file", name, None, &attrs),
                form.field_error(name).unwrap_or_default()
            );
            let wrapper = form.column_wrapper(&inner, false, None);

            Ok(form.form_group_with_label(name, title.as_deref(), &wrapper))
        })
    }

    /// Renders a hidden input; the id defaults to `form-<name>`.
    pub fn hidden(&self, name: &str, value: Option<&str>, attrs: Attributes) -> String {
        let attrs = if attrs.contains("id") {
            attrs
        } else {
            Attributes::new()
                .with("id", default_field_id(name))
                .merged(&attrs)
        };
        self.builder.hidden(name, value, &attrs)
    }

    /// Renders a select. With [`FieldOptions::multiple`] the name gets a
    /// `[]` suffix and several values can be selected.
    pub fn select(
        &mut self,
        name: &str,
        label: impl Into<LabelOrOptions>,
        choices: &[(&str, &str)],
        selected: &[&str],
        options: FieldOptions,
    ) -> Result<String> {
        let (label, options) = LabelOrOptions::resolve(label.into(), options)?;

        self.with_field(name, &options, |form| {
            let title = form.label_title(&label, name, true);

            let field_name = if options.multiple && !name.ends_with("[]") {
                format!("{name}[]")
            } else {
                name.to_string()
            };

            let mut attrs = form.field_attrs(name, &options);
            if options.multiple {
                attrs.set("multiple", "multiple");
            }

            let inner = format!(
                "{}{}",
                form.builder.select(&field_name, choices, selected, &attrs),
                form.field_error(&field_name).unwrap_or_default()
            );
            let wrapper = form.column_wrapper(&inner, false, None);

            Ok(form.form_group_with_label(name, title.as_deref(), &wrapper))
        })
    }

    // ---- checkable helpers ----

    fn checkable_element(
        &self,
        kind: Checkable,
        choice: &Choice<'_>,
        inline: bool,
        options: &FieldOptions,
    ) -> String {
        let id = options
            .id
            .clone()
            .unwrap_or_else(|| self.current_field_id(choice.name));

        let mut attrs = Attributes::new().with("id", id);
        if let Some(class) = &options.class {
            attrs.set("class", class.as_str());
        }
        attrs.merge(&options.attrs);

        let input = match kind {
            Checkable::Checkbox => {
                self.builder
                    .checkbox(choice.name, choice.value, choice.checked, &attrs)
            }
            Checkable::Radio => self
                .builder
                .radio(choice.name, choice.value, choice.checked, &attrs),
        };

        let label = html! { label }
            .when(inline, |label| label.class(kind.inline_class()))
            .raw(input)
            .text(choice.text.unwrap_or_default())
            .render();

        if inline {
            label
        } else {
            let block_class = kind.block_class();
            html! { div.class(#block_class) }.raw(label).render()
        }
    }

    /// An element of a checkbox or radio group, with id `<field id>-<index>`.
    fn group_element(
        &self,
        kind: Checkable,
        choice: &Choice<'_>,
        index: usize,
        inline: bool,
        options: &FieldOptions,
    ) -> String {
        let element_options = options
            .clone()
            .id(format!("{}-{index}", self.current_field_id(choice.name)));
        self.checkable_element(kind, choice, inline, &element_options)
    }

    /// Form group of a lone checkbox or radio: no label, offset past the
    /// label column, flagged with the error class on the column itself.
    fn single_checkable(&self, name: &str, element: &str) -> String {
        let inner = format!("{element}{}", self.field_error(name).unwrap_or_default());
        self.form_group(&self.column_wrapper(&inner, true, self.field_error_class(name)))
    }

    fn checkable_group(&self, name: &str, label: &Label, elements: &str) -> String {
        let title = self.label_title(label, name, true);
        let inner = format!("{elements}{}", self.field_error(name).unwrap_or_default());
        let wrapper = self.column_wrapper(&inner, false, None);
        self.form_group_with_label(name, title.as_deref(), &wrapper)
    }
}

fn radio_value(value: Option<&str>, title: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .or(title)
        .unwrap_or_default()
        .to_string()
}

fn wrap_addons(element: &str, options: &FieldOptions) -> String {
    if options.prepend_addon.is_none() && options.append_addon.is_none() {
        return element.to_string();
    }

    let before = options
        .prepend_addon
        .as_ref()
        .map(|addon| addon.to_html())
        .unwrap_or_default();
    let after = options
        .append_addon
        .as_ref()
        .map(|addon| addon.to_html())
        .unwrap_or_default();

    html! { div.class("input-group") }
        .raw(before)
        .raw(element)
        .raw(after)
        .render()
}
