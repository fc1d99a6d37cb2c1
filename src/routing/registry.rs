//! Route registry: localized controller names and action routes per culture.
//!
//! The registry is populated once at startup and read concurrently afterwards.
//! Every level is a [`DashMap`] so that concurrent insertions of different
//! controllers or actions never corrupt the table; inserting into an existing
//! slot is last-write-wins.
//!
//! Guards into the maps are never handed out. Lookups clone the small pieces
//! of data the resolver needs.

use dashmap::DashMap;
use tracing::debug;

use crate::error::RouteError;
use crate::routing::normalize_key as normalize;

/// Localized path text and display text for one action in one culture.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UrlData {
    /// Action path segment(s), excluding the controller segment
    pub route: String,

    /// Display text for links pointing at this route
    pub link_name: String,
}

/// Per-culture routes of a single action.
#[derive(Debug, Default)]
struct ActionEntry {
    url_data: DashMap<String, UrlData>,

    /// Canonical order of trailing route parameters, fixed on first insert
    parameter_names: Vec<String>,
}

/// Per-culture names and actions of a single controller.
#[derive(Debug, Default)]
struct ControllerEntry {
    names: DashMap<String, String>,
    actions: DashMap<String, ActionEntry>,
}

/// Snapshot of the data needed to build URLs for one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRoute {
    /// Localized controller name for the requested culture, if registered
    pub controller_name: Option<String>,

    /// Route data for the requested culture, if registered
    pub url_data: Option<UrlData>,
}

/// Concurrent table of localized controller and action routes.
///
/// Controller, action and culture keys are lower-cased on the way in, so all
/// lookups are case-insensitive.
#[derive(Debug, Default)]
pub struct RouteRegistry {
    controllers: DashMap<String, ControllerEntry>,
}

impl RouteRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or overwrite) the localized name of a controller.
    ///
    /// The controller entry is created on first use. Never fails.
    pub fn add_controller_route(&self, controller: &str, culture: &str, localized_name: &str) {
        let controller = normalize(controller);
        let culture = normalize(culture);

        debug!(
            controller = %controller,
            culture = %culture,
            name = localized_name,
            "Registering controller route"
        );

        self.controllers
            .entry(controller)
            .or_default()
            .names
            .insert(culture, localized_name.to_string());
    }

    /// Register (or overwrite) the localized route of an action.
    ///
    /// `parameter_names` is stored only when the action is first created;
    /// later calls keep the original order.
    ///
    /// # Errors
    /// Returns [`RouteError::UnknownController`] if the controller has not been
    /// registered through [`RouteRegistry::add_controller_route`].
    pub fn add_action_route(
        &self,
        controller: &str,
        action: &str,
        culture: &str,
        route: &str,
        link_name: &str,
        parameter_names: &[String],
    ) -> Result<(), RouteError> {
        let controller = normalize(controller);
        let action = normalize(action);
        let culture = normalize(culture);

        let entry = self
            .controllers
            .get(&controller)
            .ok_or_else(|| RouteError::UnknownController {
                controller: controller.clone(),
            })?;

        debug!(
            controller = %controller,
            action = %action,
            culture = %culture,
            route,
            "Registering action route"
        );

        entry
            .actions
            .entry(action)
            .or_insert_with(|| ActionEntry {
                url_data: DashMap::new(),
                parameter_names: parameter_names.to_vec(),
            })
            .url_data
            .insert(
                culture,
                UrlData {
                    route: route.to_string(),
                    link_name: link_name.to_string(),
                },
            );

        Ok(())
    }

    /// Remove every registered controller.
    pub fn reset(&self) {
        debug!(controllers = self.controllers.len(), "Resetting route registry");
        self.controllers.clear();
    }

    /// Localized name and route data of an action for a culture.
    ///
    /// # Errors
    /// [`RouteError::UnknownController`] or [`RouteError::UnknownAction`] when
    /// either key is not registered.
    pub fn action_route(
        &self,
        controller: &str,
        action: &str,
        culture: &str,
    ) -> Result<ActionRoute, RouteError> {
        let controller = normalize(controller);
        let action = normalize(action);
        let culture = normalize(culture);

        let entry = self
            .controllers
            .get(&controller)
            .ok_or_else(|| RouteError::UnknownController {
                controller: controller.clone(),
            })?;
        let action_entry = entry
            .actions
            .get(&action)
            .ok_or_else(|| RouteError::UnknownAction {
                controller: controller.clone(),
                action: action.clone(),
            })?;

        Ok(ActionRoute {
            controller_name: entry.names.get(&culture).map(|name| name.value().clone()),
            url_data: action_entry
                .url_data
                .get(&culture)
                .map(|data| data.value().clone()),
        })
    }

    /// Declared parameter order of an action, if the action is known.
    pub fn parameter_names(&self, controller: &str, action: &str) -> Option<Vec<String>> {
        let controller = normalize(controller);
        let action = normalize(action);

        let entry = self.controllers.get(&controller)?;
        let names = entry
            .actions
            .get(&action)
            .map(|action_entry| action_entry.parameter_names.clone());
        names
    }

    pub fn contains_controller(&self, controller: &str) -> bool {
        self.controllers.contains_key(&normalize(controller))
    }

    pub fn controller_count(&self) -> usize {
        self.controllers.len()
    }

    /// Number of actions across all controllers.
    pub fn action_count(&self) -> usize {
        self.controllers
            .iter()
            .map(|entry| entry.actions.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}
