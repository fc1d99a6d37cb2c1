//! URL resolution: turns a (controller, action, culture) triple into a path.
//!
//! The default culture gets clean, unprefixed URLs (`/account/login`), the
//! home route of the default culture is `/`. Every other culture carries an
//! explicit `/{culture}/` prefix, which [`Config::detect_culture`] reads back.

use std::collections::HashMap;
use tracing::debug;

use crate::config::Config;
use crate::error::RouteError;
use crate::routing::{normalize_key, RouteRegistry};

/// A resolved URL and the link text to show for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedUrl {
    pub url: String,

    /// Display text for the link. Empty for the default culture, where the
    /// caller keeps its own link text.
    pub link_name: String,
}

/// Read-only view over a populated registry and the routing settings.
#[derive(Debug, Clone, Copy)]
pub struct UrlResolver<'a> {
    registry: &'a RouteRegistry,
    config: &'a Config,
}

impl<'a> UrlResolver<'a> {
    pub fn new(registry: &'a RouteRegistry, config: &'a Config) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &'a RouteRegistry {
        self.registry
    }

    /// Resolve the localized URL of an action.
    ///
    /// Non-default cultures without their own route data fall back to the
    /// default culture's route text, still under the requested culture's
    /// prefix. A controller without a localized name for the culture uses the
    /// lower-cased controller key as its segment.
    ///
    /// # Errors
    /// - [`RouteError::UnknownController`] / [`RouteError::UnknownAction`] for
    ///   unregistered keys
    /// - [`RouteError::MissingDefaultRoute`] when the default-culture route
    ///   data is needed but was never registered
    pub fn resolve_url(
        &self,
        controller: &str,
        action: &str,
        culture: &str,
    ) -> Result<LocalizedUrl, RouteError> {
        let default_culture = self.config.default_culture.as_str();
        let controller_key = normalize_key(controller);
        let is_default_controller = controller_key == self.config.default_controller;
        let is_default_action = normalize_key(action) == self.config.default_action;
        let is_home = is_default_controller && is_default_action;

        let requested = self.registry.action_route(controller, action, culture)?;

        if self.config.is_default_culture(culture) {
            if is_home {
                return Ok(LocalizedUrl {
                    url: "/".to_string(),
                    link_name: String::new(),
                });
            }

            let link_data = requested
                .url_data
                .ok_or_else(|| missing_default(controller, action, default_culture))?;
            let controller_name = requested.controller_name.unwrap_or(controller_key);

            let url = if is_default_action {
                format!("/{}", controller_name)
            } else {
                format!("/{}/{}", controller_name, link_data.route)
            };

            return Ok(LocalizedUrl {
                url,
                link_name: String::new(),
            });
        }

        let link_data = match requested.url_data {
            Some(data) => data,
            None => {
                debug!(
                    controller,
                    action,
                    culture,
                    "No localized route, falling back to default culture"
                );
                self.registry
                    .action_route(controller, action, default_culture)?
                    .url_data
                    .ok_or_else(|| missing_default(controller, action, default_culture))?
            }
        };

        let culture = normalize_key(culture);

        if is_home {
            return Ok(LocalizedUrl {
                url: format!("/{}", culture),
                link_name: link_data.link_name,
            });
        }

        let controller_name = requested.controller_name.unwrap_or(controller_key);
        let separator = if is_default_action { "" } else { "/" };

        Ok(LocalizedUrl {
            url: format!(
                "/{}/{}{}{}",
                culture, controller_name, separator, link_data.route
            ),
            link_name: link_data.link_name,
        })
    }

    /// Resolve an action's URL and append its ordered route parameters.
    ///
    /// # Errors
    /// Same as [`UrlResolver::resolve_url`].
    pub fn url_for(
        &self,
        controller: &str,
        action: &str,
        culture: &str,
        route_values: &HashMap<String, String>,
    ) -> Result<LocalizedUrl, RouteError> {
        let mut resolved = self.resolve_url(controller, action, culture)?;
        let suffix = self.ordered_parameter_suffix(controller, action, route_values);

        if !suffix.is_empty() {
            if resolved.url == "/" {
                resolved.url.clear();
            }
            resolved.url.push_str(&suffix);
        }

        Ok(resolved)
    }
}

fn missing_default(controller: &str, action: &str, culture: &str) -> RouteError {
    RouteError::MissingDefaultRoute {
        controller: normalize_key(controller),
        action: normalize_key(action),
        culture: culture.to_string(),
    }
}
