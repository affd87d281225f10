#![allow(dead_code)]

use bootstrap_form::{
    ErrorBag, FormConfig, FormOptions, FormRenderer, FormType, HtmlFormBuilder, RouteTable,
};

pub fn routes() -> RouteTable {
    RouteTable::new()
        .route("users.store", "/users")
        .route("users.update", "/users/{user}")
        .route("users.destroy", "/users/{user}")
        .route("UserController@update", "/admin/users/{user}")
}

pub fn renderer() -> FormRenderer {
    FormRenderer::default().with_builder(HtmlFormBuilder::new().routes(routes()).csrf_token("secret"))
}

pub fn renderer_with_errors(errors: ErrorBag) -> FormRenderer {
    renderer().with_errors(errors)
}

pub fn configured(config: FormConfig) -> FormRenderer {
    FormRenderer::new(config)
        .with_builder(HtmlFormBuilder::new().routes(routes()).csrf_token("secret"))
}

/// A renderer with an open form of the given layout.
pub fn open(form_type: FormType) -> FormRenderer {
    let mut form = renderer();
    form.set_type(form_type);
    form.open(FormOptions::new().url("/submit"))
        .unwrap_or_else(|e| panic!("Failed to open form: {e}"));
    form
}

pub fn signup_errors() -> ErrorBag {
    ErrorBag::new()
        .with("email", "The email is required.")
        .with("email", "The email must be valid.")
        .with("items.0.name", "The item name is required.")
}
