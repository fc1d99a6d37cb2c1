//! JSON route tables: a declarative way to populate a [`RouteRegistry`].
//!
//! ```json
//! {
//!   "controllers": [
//!     {
//!       "key": "account",
//!       "names": { "en": "account", "fi": "tili" },
//!       "actions": [
//!         {
//!           "key": "login",
//!           "parameters": ["returnUrl"],
//!           "routes": {
//!             "en": { "route": "login", "link_name": "Login" },
//!             "fi": { "route": "kirjaudu", "link_name": "Kirjaudu" }
//!           }
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, warn};

use crate::error::RouteError;
use crate::routing::{normalize_key, RouteRegistry};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTable {
    #[serde(default)]
    pub controllers: Vec<ControllerRoutes>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerRoutes {
    pub key: String,

    /// Localized controller segment per culture
    #[serde(default)]
    pub names: BTreeMap<String, String>,

    #[serde(default)]
    pub actions: Vec<ActionRoutes>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRoutes {
    pub key: String,

    /// Declared order of trailing route parameters
    #[serde(default)]
    pub parameters: Vec<String>,

    #[serde(default)]
    pub routes: BTreeMap<String, RouteText>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteText {
    #[serde(default)]
    pub route: String,
    #[serde(default)]
    pub link_name: String,
}

/// Counts of what a route table registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteSummary {
    pub controllers: usize,
    pub actions: usize,
    pub routes: usize,
}

impl RouteTable {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse route table")
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read route table {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid route table {}", path.display()))
    }

    /// Register every controller and action of the table.
    ///
    /// Controllers are registered before their actions, so a well-formed table
    /// never fails. Actions without a route for `default_culture` are
    /// registered anyway and logged, since resolving them for the default
    /// culture will fail.
    ///
    /// # Errors
    /// Propagates [`RouteError`] from the registry.
    pub fn apply(
        &self,
        registry: &RouteRegistry,
        default_culture: &str,
    ) -> Result<RouteSummary, RouteError> {
        let mut summary = RouteSummary::default();
        let default_key = normalize_key(default_culture);

        for controller in &self.controllers {
            // An entry must exist even when no localized names are given
            if controller.names.is_empty() {
                registry.add_controller_route(&controller.key, default_culture, &controller.key);
            }
            for (culture, name) in &controller.names {
                registry.add_controller_route(&controller.key, culture, name);
            }
            summary.controllers += 1;

            for action in &controller.actions {
                if !action
                    .routes
                    .keys()
                    .any(|culture| normalize_key(culture) == default_key)
                {
                    warn!(
                        controller = %controller.key,
                        action = %action.key,
                        default_culture,
                        "Action has no route for the default culture"
                    );
                }

                for (culture, text) in &action.routes {
                    registry.add_action_route(
                        &controller.key,
                        &action.key,
                        culture,
                        &text.route,
                        &text.link_name,
                        &action.parameters,
                    )?;
                    summary.routes += 1;
                }
                summary.actions += 1;
            }
        }

        info!(
            controllers = summary.controllers,
            actions = summary.actions,
            routes = summary.routes,
            "Applied route table"
        );

        Ok(summary)
    }
}
