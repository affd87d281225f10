//! Error types for form rendering.

use thiserror::Error;

/// Form rendering errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// A bound model needs a route identifier that was not supplied.
    #[error("model binding requires a `{action}` route or action")]
    MissingRoute { action: &'static str },

    /// `label_cols` does not fit the twelve-column grid.
    #[error("label columns must be between 0 and 12, got {0}")]
    InvalidLabelColumns(u8),

    /// Route or action name not registered.
    #[error("route not found: {0}")]
    UnknownRoute(String),

    /// Not enough parameters to build the route's URL.
    #[error("missing parameter `{parameter}` for route {route}")]
    MissingRouteParameter { route: String, parameter: String },

    /// Field options passed both in the label position and as options.
    #[error("field options given in the label position and as options")]
    ConflictingOptions,

    /// A date format string chrono cannot render.
    #[error("invalid date format: {0}")]
    InvalidDateFormat(String),

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
