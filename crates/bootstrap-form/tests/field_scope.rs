mod common;

use std::collections::HashMap;

use bootstrap_form::{FieldOptions, FormError, FormType, Label};
use common::{open, renderer};

#[test]
fn test_field_context_released_after_every_field() {
    let mut form = open(FormType::Horizontal);
    let options = || FieldOptions::new().label_cols(3).id("custom");

    form.text("a", Label::Auto, None, options()).unwrap();
    assert!(form.field_context().is_released());
    form.checkbox("b", Label::Auto, "1", false, options()).unwrap();
    assert!(form.field_context().is_released());
    form.checkboxes("c", Label::Auto, &[("x", "X")], &[], false, options())
        .unwrap();
    assert!(form.field_context().is_released());
    form.radios("d", Label::Auto, &[("x", "X")], None, false, options())
        .unwrap();
    assert!(form.field_context().is_released());
    form.select("e", Label::Auto, &[("x", "X")], &[], options())
        .unwrap();
    assert!(form.field_context().is_released());
    form.file("f", Label::Auto, options()).unwrap();
    assert!(form.field_context().is_released());
    form.submit("Go", options()).unwrap();
    assert!(form.field_context().is_released());

    // The next field starts from the defaults.
    let html = form.text("g", Label::Auto, None, FieldOptions::new()).unwrap();
    assert!(html.contains(r#"<label for="form-g" class="control-label col-sm-2 col-md-2">"#));
}

#[test]
fn test_hidden_label_still_releases() {
    let mut form = open(FormType::Horizontal);
    let html = form
        .text("name", false, None, FieldOptions::new().label_cols(6))
        .unwrap();
    assert!(!html.contains("<label"));
    assert!(html.contains(r#"<div class="col-sm-6 col-md-6">"#));
    assert!(form.field_context().is_released());
}

#[test]
fn test_invalid_label_cols_is_rejected() {
    let mut form = open(FormType::Horizontal);
    let result = form.text("name", Label::Auto, None, FieldOptions::new().label_cols(13));
    assert!(matches!(result, Err(FormError::InvalidLabelColumns(13))));
    assert!(form.field_context().is_released());
}

#[test]
fn test_derived_labels() {
    let mut form = open(FormType::Vertical);

    let html = form.text("user_id", Label::Auto, None, FieldOptions::new()).unwrap();
    assert!(html.contains(">User:</label>"));

    let html = form
        .select("tags[]", Label::Auto, &[], &[], FieldOptions::new())
        .unwrap();
    assert!(html.contains(">Tags:</label>"));

    let html = form.text("nickname", "", None, FieldOptions::new()).unwrap();
    assert!(html.contains(">Nickname:</label>"));

    let html = form
        .text("nickname", "Call me", None, FieldOptions::new())
        .unwrap();
    assert!(html.contains(">Call me</label>"));
}

#[test]
fn test_translated_labels() {
    let translations: HashMap<String, String> =
        [("forms.email".to_string(), "Adresse e-mail".to_string())]
            .into_iter()
            .collect();
    let mut form = renderer().with_translator(translations);
    form.set_type(FormType::Vertical);

    let html = form.email("email", Label::Auto, None, FieldOptions::new()).unwrap();
    assert!(html.contains(">Adresse e-mail</label>"));
}

#[test]
fn test_checkbox_group_membership() {
    let mut form = open(FormType::Vertical);
    let html = form
        .checkboxes(
            "letters",
            Label::Auto,
            &[("a", "A"), ("b", "B")],
            &["b"],
            false,
            FieldOptions::new(),
        )
        .unwrap();

    assert!(html.contains(r#"value="a" id="form-letters-0">A</label>"#));
    assert!(html.contains(r#"value="b" checked="checked" id="form-letters-1">B</label>"#));
}

#[test]
fn test_options_in_label_position() {
    let mut form = open(FormType::Vertical);
    let html = form
        .text(
            "city",
            FieldOptions::new().attr("placeholder", "Paris"),
            None,
            FieldOptions::new(),
        )
        .unwrap();
    assert!(html.contains(">City:</label>"));
    assert!(html.contains(r#"class="form-control" placeholder="Paris""#));
}

#[test]
fn test_options_in_both_positions_rejected() {
    let mut form = open(FormType::Horizontal);
    let result = form.text(
        "name",
        FieldOptions::new().attr("placeholder", "Your name"),
        None,
        FieldOptions::new().id("custom").label_cols(4),
    );
    assert!(matches!(result, Err(FormError::ConflictingOptions)));
    assert!(form.field_context().is_released());

    let result = form.date(
        "born",
        FieldOptions::new().class("x"),
        None,
        FieldOptions::new().id("y"),
    );
    assert!(matches!(result, Err(FormError::ConflictingOptions)));
    assert_eq!(form.left_column_class(), "col-sm-2 col-md-2");
}

#[test]
fn test_label_outside_field_uses_default_id() {
    let form = open(FormType::Vertical);
    assert_eq!(
        form.label("email", Label::Auto, bootstrap_form::Attributes::new()),
        r#"<label for="form-email" class="control-label">Email:</label>"#
    );
}
