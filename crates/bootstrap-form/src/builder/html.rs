//! Default HTML tag builder.

use super::PrimitiveFormBuilder;
use crate::attributes::{html_escape, Attributes};
use crate::error::Result;
use crate::routing::{FormMethod, FormTarget, RouteTable};

/// Builds plain HTML form tags.
///
/// Named routes and actions are turned into URLs through a [`RouteTable`].
/// PUT, PATCH and DELETE forms are sent as POST with a hidden `_method`
/// field, and every non-GET form carries the CSRF token when one is set.
#[derive(Debug, Clone, Default)]
pub struct HtmlFormBuilder {
    routes: RouteTable,
    csrf_token: Option<String>,
}

impl HtmlFormBuilder {
    /// Creates a builder without routes or CSRF token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the route table.
    #[must_use]
    pub fn routes(mut self, routes: RouteTable) -> Self {
        self.routes = routes;
        self
    }

    /// Sets the CSRF token.
    #[must_use]
    pub fn csrf_token(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }

    fn action(&self, target: &FormTarget) -> Result<Option<String>> {
        match target {
            FormTarget::Current => Ok(None),
            FormTarget::Url(url) => Ok(Some(url.clone())),
            FormTarget::Route { name, parameters } | FormTarget::Action { name, parameters } => {
                self.routes.url_for(name, parameters).map(Some)
            }
        }
    }

    fn checkable(
        &self,
        kind: &str,
        name: &str,
        value: &str,
        checked: bool,
        attrs: &Attributes,
    ) -> String {
        let mut tag = Attributes::new()
            .with("type", kind)
            .with("name", name)
            .with("value", value);
        if checked {
            tag.set("checked", "checked");
        }
        tag.merge(attrs);
        format!("<input{}>", tag.to_html())
    }
}

impl PrimitiveFormBuilder for HtmlFormBuilder {
    fn open_form(
        &self,
        target: &FormTarget,
        method: FormMethod,
        attrs: &Attributes,
    ) -> Result<String> {
        let form_method = if method == FormMethod::Get { "GET" } else { "POST" };

        let mut tag = Attributes::new().with("method", form_method);
        if let Some(action) = self.action(target)? {
            tag.set("action", action);
        }
        tag.set("accept-charset", "UTF-8");
        tag.merge(attrs);

        let mut html = format!("<form{}>", tag.to_html());

        if method.is_spoofed() {
            html.push_str(&self.hidden("_method", Some(method.as_str()), &Attributes::new()));
        }

        if method != FormMethod::Get {
            if let Some(token) = &self.csrf_token {
                html.push_str(&self.hidden("_token", Some(token.as_str()), &Attributes::new()));
            }
        }

        Ok(html)
    }

    fn input(&self, kind: &str, name: &str, value: Option<&str>, attrs: &Attributes) -> String {
        let mut tag = Attributes::new().with("type", kind);
        if !name.is_empty() {
            tag.set("name", name);
        }
        if let Some(value) = value {
            tag.set("value", value);
        }
        tag.merge(attrs);
        format!("<input{}>", tag.to_html())
    }

    fn textarea(&self, name: &str, value: Option<&str>, attrs: &Attributes) -> String {
        let mut tag = Attributes::new().with("name", name);
        tag.merge(attrs);
        if !tag.contains("cols") {
            tag.set("cols", "50");
        }
        if !tag.contains("rows") {
            tag.set("rows", "10");
        }

        let content = value.map(html_escape).unwrap_or_default();
        format!("<textarea{}>{content}</textarea>", tag.to_html())
    }

    fn select(
        &self,
        name: &str,
        choices: &[(&str, &str)],
        selected: &[&str],
        attrs: &Attributes,
    ) -> String {
        let mut tag = Attributes::new().with("name", name);
        tag.merge(attrs);

        let options: String = choices
            .iter()
            .map(|(value, label)| {
                let selected_attr = if selected.contains(value) {
                    r#" selected="selected""#
                } else {
                    ""
                };
                format!(
                    r#"<option value="{}"{selected_attr}>{}</option>"#,
                    html_escape(value),
                    html_escape(label)
                )
            })
            .collect();

        format!("<select{}>{options}</select>", tag.to_html())
    }

    fn checkbox(&self, name: &str, value: &str, checked: bool, attrs: &Attributes) -> String {
        self.checkable("checkbox", name, value, checked, attrs)
    }

    fn radio(&self, name: &str, value: &str, checked: bool, attrs: &Attributes) -> String {
        self.checkable("radio", name, value, checked, attrs)
    }

    fn submit(&self, value: &str, attrs: &Attributes) -> String {
        self.input("submit", "", Some(value), attrs)
    }

    fn label(&self, for_id: &str, text: &str, attrs: &Attributes) -> String {
        let tag = Attributes::new().with("for", for_id).merged(attrs);
        format!("<label{}>{}</label>", tag.to_html(), html_escape(text))
    }
}
