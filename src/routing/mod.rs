//! Localized routing: per-culture URLs for controller/action routes.
//!
//! # Architecture
//!
//! - `registry`: concurrent table of localized controller names and action routes
//! - `resolver`: builds the URL and link text for a (controller, action, culture)
//! - `parameters`: appends trailing route values in their declared order
//! - `table`: JSON route tables used to populate a registry at startup
//!
//! Culture detection from an incoming path lives on [`crate::config::Config`].
//!
//! # Example
//!
//! ```rust
//! use localized_routes::config::Config;
//! use localized_routes::routing::{RouteRegistry, UrlResolver};
//!
//! let registry = RouteRegistry::new();
//! registry.add_controller_route("account", "en", "account");
//! registry.add_controller_route("account", "fi", "tili");
//! registry
//!     .add_action_route("account", "login", "en", "login", "Login", &[])
//!     .unwrap();
//! registry
//!     .add_action_route("account", "login", "fi", "kirjaudu", "Kirjaudu", &[])
//!     .unwrap();
//!
//! let config = Config::new("en").with_culture("fi", "Suomi");
//! let resolver = UrlResolver::new(&registry, &config);
//!
//! let resolved = resolver.resolve_url("account", "login", "fi").unwrap();
//! assert_eq!(resolved.url, "/fi/tili/kirjaudu");
//! assert_eq!(resolved.link_name, "Kirjaudu");
//! ```

mod parameters;
mod registry;
mod resolver;
mod table;

/// Lower-case a controller, action or culture key.
///
/// Used both when storing keys and when comparing against configured
/// defaults, so every key comparison follows the same Unicode case rules.
pub(crate) fn normalize_key(key: &str) -> String {
    key.to_lowercase()
}

pub use registry::{ActionRoute, RouteRegistry, UrlData};
pub use resolver::{LocalizedUrl, UrlResolver};
pub use table::{ActionRoutes, ControllerRoutes, RouteSummary, RouteTable, RouteText};
