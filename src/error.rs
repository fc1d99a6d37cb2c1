//! Error types for route registration and resolution.
//!
//! Every variant describes a configuration bug (a route that was never
//! registered, or registered without default-culture data). Callers surface
//! them rather than retry.

/// Errors raised by the route registry and URL resolver.
///
/// # Examples
///
/// ```
/// use localized_routes::RouteError;
///
/// let error = RouteError::UnknownController {
///     controller: "blog".to_string(),
/// };
/// assert!(error.to_string().contains("blog"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The controller key was never registered.
    #[error("unknown controller '{controller}'")]
    UnknownController {
        /// The (normalized) controller key.
        controller: String,
    },

    /// The controller exists but has no such action.
    #[error("unknown action '{action}' for controller '{controller}'")]
    UnknownAction {
        /// The (normalized) controller key.
        controller: String,
        /// The (normalized) action key.
        action: String,
    },

    /// The action has no route data for the default culture.
    #[error("action '{controller}/{action}' has no route for default culture '{culture}'")]
    MissingDefaultRoute {
        /// The (normalized) controller key.
        controller: String,
        /// The (normalized) action key.
        action: String,
        /// The configured default culture.
        culture: String,
    },
}
