//! Form targets and model-bound route resolution.

use std::collections::HashMap;
use std::fmt;

use crate::error::{FormError, Result};

/// HTTP method a form submits with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMethod {
    Get,
    #[default]
    Post,
    Put,
    Patch,
    Delete,
}

impl FormMethod {
    /// Returns the method name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Methods browsers cannot send from a form; they are submitted as POST
    /// with a hidden `_method` field.
    pub const fn is_spoofed(self) -> bool {
        matches!(self, Self::Put | Self::Patch | Self::Delete)
    }
}

impl fmt::Display for FormMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a form submits to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormTarget {
    /// No `action` attribute; the browser submits to the current URL.
    #[default]
    Current,
    /// A literal URL.
    Url(String),
    /// A named route.
    Route { name: String, parameters: Vec<String> },
    /// A controller action reference such as `UserController@store`.
    Action { name: String, parameters: Vec<String> },
}

impl FormTarget {
    /// Parses an identifier: anything containing `@` is an action reference,
    /// everything else a route name.
    pub fn named(identifier: &str, parameters: Vec<String>) -> Self {
        let name = identifier.to_string();
        if identifier.contains('@') {
            Self::Action { name, parameters }
        } else {
            Self::Route { name, parameters }
        }
    }
}

/// The model a form edits, reduced to what routing needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundModel {
    /// Whether the model is already persisted.
    pub exists: bool,
    /// Key used as the route parameter of an existing model.
    pub route_key: String,
}

impl BoundModel {
    /// A model that has not been persisted yet.
    pub fn unsaved() -> Self {
        Self {
            exists: false,
            route_key: String::new(),
        }
    }

    /// A persisted model identified by `route_key`.
    pub fn existing(route_key: impl Into<String>) -> Self {
        Self {
            exists: true,
            route_key: route_key.into(),
        }
    }
}

/// Route or action identifiers for each model operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelRoutes {
    pub store: Option<String>,
    pub update: Option<String>,
    pub destroy: Option<String>,
}

/// Outcome of model-binding resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub target: FormTarget,
    pub method: FormMethod,
}

/// Picks the route and method for a form bound to `model`.
///
/// An existing model is deleted when a `destroy` route is given and updated
/// otherwise; a new model is stored.
pub fn resolve_model_route(model: &BoundModel, routes: &ModelRoutes) -> Result<ResolvedRoute> {
    if model.exists {
        let parameters = vec![model.route_key.clone()];

        if let Some(destroy) = &routes.destroy {
            return Ok(ResolvedRoute {
                target: FormTarget::named(destroy, parameters),
                method: FormMethod::Delete,
            });
        }

        let update = routes
            .update
            .as_deref()
            .ok_or(FormError::MissingRoute { action: "update" })?;

        return Ok(ResolvedRoute {
            target: FormTarget::named(update, parameters),
            method: FormMethod::Put,
        });
    }

    let store = routes
        .store
        .as_deref()
        .ok_or(FormError::MissingRoute { action: "store" })?;

    Ok(ResolvedRoute {
        target: FormTarget::named(store, Vec::new()),
        method: FormMethod::Post,
    })
}

/// Named path patterns used to turn routes and actions into URLs.
///
/// Patterns use `{param}` placeholders, filled positionally.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, String>,
}

impl RouteTable {
    /// Creates an empty route table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a route or action name.
    #[must_use]
    pub fn route(mut self, name: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.routes.insert(name.into(), pattern.into());
        self
    }

    /// Generates the URL for a named route. Parameters fill the `{name}`
    /// segments in order and are percent-encoded.
    ///
    /// ```
    /// use bootstrap_form::RouteTable;
    ///
    /// let routes = RouteTable::new().route("users.update", "/users/{user}");
    /// let url = routes.url_for("users.update", &["7".to_string()]).unwrap();
    /// assert_eq!(url, "/users/7");
    /// ```
    pub fn url_for(&self, name: &str, parameters: &[String]) -> Result<String> {
        let pattern = self
            .routes
            .get(name)
            .ok_or_else(|| FormError::UnknownRoute(name.to_string()))?;

        let mut parameters = parameters.iter();
        let mut path = String::new();

        for part in pattern.split('/').filter(|s| !s.is_empty()) {
            path.push('/');
            match part.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                Some(param) => {
                    let value =
                        parameters
                            .next()
                            .ok_or_else(|| FormError::MissingRouteParameter {
                                route: name.to_string(),
                                parameter: param.to_string(),
                            })?;
                    path.push_str(&encode_path_segment(value));
                }
                None => path.push_str(part),
            }
        }

        if path.is_empty() {
            path.push('/');
        }

        Ok(path)
    }
}

/// Percent-encodes everything but RFC 3986 unreserved characters.
fn encode_path_segment(segment: &str) -> String {
    segment
        .bytes()
        .map(|b| match b {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            _ => format!("%{b:02X}"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn routes() -> ModelRoutes {
        ModelRoutes {
            store: Some("users.store".to_string()),
            update: Some("users.update".to_string()),
            destroy: None,
        }
    }

    #[test]
    fn test_new_model_is_stored() {
        let resolved = resolve_model_route(&BoundModel::unsaved(), &routes()).unwrap();
        assert_eq!(resolved.method, FormMethod::Post);
        assert_eq!(
            resolved.target,
            FormTarget::Route {
                name: "users.store".to_string(),
                parameters: Vec::new(),
            }
        );
    }

    #[test]
    fn test_existing_model_is_updated() {
        let resolved = resolve_model_route(&BoundModel::existing("5"), &routes()).unwrap();
        assert_eq!(resolved.method, FormMethod::Put);
        assert_eq!(
            resolved.target,
            FormTarget::Route {
                name: "users.update".to_string(),
                parameters: vec!["5".to_string()],
            }
        );
    }

    #[test]
    fn test_destroy_wins_for_existing_model() {
        let routes = ModelRoutes {
            destroy: Some("UserController@destroy".to_string()),
            ..routes()
        };
        let resolved = resolve_model_route(&BoundModel::existing("5"), &routes).unwrap();
        assert_eq!(resolved.method, FormMethod::Delete);
        assert_eq!(
            resolved.target,
            FormTarget::Action {
                name: "UserController@destroy".to_string(),
                parameters: vec!["5".to_string()],
            }
        );
    }

    #[test]
    fn test_destroy_ignored_for_new_model() {
        let routes = ModelRoutes {
            destroy: Some("users.destroy".to_string()),
            ..routes()
        };
        let resolved = resolve_model_route(&BoundModel::unsaved(), &routes).unwrap();
        assert_eq!(resolved.method, FormMethod::Post);
    }

    #[test]
    fn test_missing_routes_are_errors() {
        let err = resolve_model_route(&BoundModel::unsaved(), &ModelRoutes::default());
        assert!(matches!(err, Err(FormError::MissingRoute { action: "store" })));

        let err = resolve_model_route(&BoundModel::existing("1"), &ModelRoutes::default());
        assert!(matches!(err, Err(FormError::MissingRoute { action: "update" })));
    }

    #[test]
    fn test_url_for() {
        let table = RouteTable::new()
            .route("home", "/")
            .route("posts.comments", "/posts/{post}/comments/{comment}");
        assert_eq!(table.url_for("home", &[]).unwrap(), "/");
        assert_eq!(
            table
                .url_for("posts.comments", &["3".to_string(), "9".to_string()])
                .unwrap(),
            "/posts/3/comments/9"
        );
    }

    #[test]
    fn test_url_for_encodes_parameters() {
        let table = RouteTable::new().route("users.update", "/users/{user}");
        assert_eq!(
            table.url_for("users.update", &["a/b?c".to_string()]).unwrap(),
            "/users/a%2Fb%3Fc"
        );
        assert_eq!(
            table.url_for("users.update", &["jean luc".to_string()]).unwrap(),
            "/users/jean%20luc"
        );
        assert_eq!(
            table.url_for("users.update", &["zoë".to_string()]).unwrap(),
            "/users/zo%C3%AB"
        );
    }

    #[test]
    fn test_url_for_errors() {
        let table = RouteTable::new().route("users.update", "/users/{user}");
        assert!(matches!(
            table.url_for("users.show", &[]),
            Err(FormError::UnknownRoute(_))
        ));
        assert!(matches!(
            table.url_for("users.update", &[]),
            Err(FormError::MissingRouteParameter { .. })
        ));
    }

    #[test]
    fn test_spoofed_methods() {
        assert!(!FormMethod::Get.is_spoofed());
        assert!(!FormMethod::Post.is_spoofed());
        assert!(FormMethod::Put.is_spoofed());
        assert!(FormMethod::Delete.is_spoofed());
        assert_eq!(FormMethod::Patch.to_string(), "PATCH");
    }
}
