//! # bootstrap-form
//!
//! Bootstrap 3 form markup for server-rendered pages.
//!
//! This crate provides:
//! - Vertical, horizontal and inline form layouts
//! - Labelled form groups for inputs, selects, checkboxes and radios
//! - Per-field label/input column overrides in horizontal forms
//! - Inline field errors and a global error list that suppresses them
//! - Model-bound forms that pick their route and method
//!
//! ## Quick Start
//!
//! ```rust
//! use bootstrap_form::{FieldOptions, FormOptions, FormRenderer, Label};
//!
//! let mut form = FormRenderer::default();
//!
//! let mut html = form.horizontal(FormOptions::new().url("/profile")).unwrap();
//! html.push_str(&form.text("first_name", Label::Auto, Some("Ada"), FieldOptions::new()).unwrap());
//! html.push_str(&form.submit("Save", FieldOptions::new()).unwrap());
//! html.push_str(&form.close());
//!
//! assert!(html.contains(r#"<label for="form-first_name" class="control-label col-sm-2 col-md-2">First Name:</label>"#));
//! assert!(html.contains(r#"<div class="col-sm-offset-2 col-md-offset-2 col-sm-10 col-md-10">"#));
//! ```
//!
//! ## Model Binding
//!
//! ```rust
//! use bootstrap_form::{BoundModel, FormOptions, FormRenderer, HtmlFormBuilder, RouteTable};
//!
//! let builder = HtmlFormBuilder::new()
//!     .routes(RouteTable::new().route("posts.update", "/posts/{post}"));
//! let mut form = FormRenderer::default().with_builder(builder);
//!
//! let html = form
//!     .open(
//!         FormOptions::new()
//!             .model(BoundModel::existing("12"))
//!             .store("posts.store")
//!             .update("posts.update"),
//!     )
//!     .unwrap();
//!
//! assert!(html.contains(r#"action="/posts/12""#));
//! assert!(html.contains(r#"<input type="hidden" name="_method" value="PUT">"#));
//! ```
//!
//! ## Errors
//!
//! Field errors render inside their form group until [`FormRenderer::errors`]
//! renders the global list; from then on they only appear there, unless
//! `show_errors_in_form_group` is set in the [`FormConfig`] or for the form.

mod attributes;
mod builder;
mod columns;
mod config;
mod error;
mod feedback;
mod label;
mod options;
mod renderer;
mod routing;
mod session;

pub use attributes::{html_escape, Attributes};
pub use builder::{HtmlFormBuilder, PrimitiveFormBuilder};
pub use columns::{apply_column_override, ColumnOverride, GRID_COLUMNS};
pub use config::{FormConfig, FormType};
pub use error::{FormError, Result};
pub use feedback::{display_errors_inline, error_key, ErrorBag, ErrorSource};
pub use label::{humanize, resolve_label, Label, LabelOrOptions, NoTranslations, Translator};
pub use options::{Addon, FieldOptions, FormOptions, InputKind};
pub use renderer::{formatted_date_value, DateValue, FormRenderer};
pub use routing::{
    resolve_model_route, BoundModel, FormMethod, FormTarget, ModelRoutes, ResolvedRoute,
    RouteTable,
};
pub use session::{FieldContext, FormSession};
