use anyhow::{bail, Context, Result};
use std::collections::BTreeMap;

use crate::routing::normalize_key;

/// Routing settings shared by the resolver and the culture detector.
///
/// Controller keys must not collide with supported culture codes: a path such
/// as `/fi/...` is always read as the `fi` culture prefix.
#[derive(Debug, Clone)]
pub struct Config {
    // Cultures
    pub default_culture: String,
    pub supported_cultures: BTreeMap<String, String>,

    // Home route
    pub default_controller: String,
    pub default_action: String,

    // Route table used by the binary
    pub routes_file: String,
}

impl Config {
    /// Settings with `default_culture` as the only supported culture and the
    /// conventional `home/index` home route.
    pub fn new(default_culture: &str) -> Self {
        let default_culture = normalize_key(default_culture);
        let mut supported_cultures = BTreeMap::new();
        supported_cultures.insert(default_culture.clone(), default_culture.clone());

        Self {
            default_culture,
            supported_cultures,
            default_controller: "home".to_string(),
            default_action: "index".to_string(),
            routes_file: "data/routes.json".to_string(),
        }
    }

    /// Add a supported culture with its display name.
    pub fn with_culture(mut self, code: &str, display_name: &str) -> Self {
        self.supported_cultures
            .insert(normalize_key(code), display_name.to_string());
        self
    }

    /// Override the home route (controller and action keys).
    pub fn with_default_route(mut self, controller: &str, action: &str) -> Self {
        self.default_controller = normalize_key(controller);
        self.default_action = normalize_key(action);
        self
    }

    pub fn from_env() -> Result<Self> {
        let default_culture = normalize_key(
            &std::env::var("DEFAULT_CULTURE").unwrap_or_else(|_| "en".to_string()),
        );

        let mut supported_cultures = parse_cultures(
            &std::env::var("SUPPORTED_CULTURES").unwrap_or_else(|_| "en:English".to_string()),
        )
        .context("SUPPORTED_CULTURES is malformed")?;
        supported_cultures
            .entry(default_culture.clone())
            .or_insert_with(|| default_culture.clone());

        Ok(Self {
            default_culture,
            supported_cultures,
            default_controller: normalize_key(
                &std::env::var("DEFAULT_CONTROLLER").unwrap_or_else(|_| "home".to_string()),
            ),
            default_action: normalize_key(
                &std::env::var("DEFAULT_ACTION").unwrap_or_else(|_| "index".to_string()),
            ),
            routes_file: std::env::var("ROUTES_FILE")
                .unwrap_or_else(|_| "data/routes.json".to_string()),
        })
    }

    /// Whether `culture` is one of the supported cultures.
    pub fn is_supported(&self, culture: &str) -> bool {
        self.supported_cultures
            .contains_key(&normalize_key(culture))
    }

    pub fn is_default_culture(&self, culture: &str) -> bool {
        normalize_key(culture) == self.default_culture
    }

    /// Culture whose `/{code}/` prefix starts `path`, or the default culture.
    ///
    /// Cultures are tried in code order. Because the prefix includes the
    /// closing slash, codes such as `zh` and `zh-tw` never shadow each other.
    pub fn detect_culture(&self, path: &str) -> &str {
        self.supported_cultures
            .keys()
            .find(|code| {
                path.strip_prefix('/')
                    .and_then(|rest| rest.strip_prefix(code.as_str()))
                    .is_some_and(|rest| rest.starts_with('/'))
            })
            .map(String::as_str)
            .unwrap_or(self.default_culture.as_str())
    }
}

/// Parse `code:Display Name` pairs separated by commas.
fn parse_cultures(raw: &str) -> Result<BTreeMap<String, String>> {
    let mut cultures = BTreeMap::new();

    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (code, name) = match entry.split_once(':') {
            Some((code, name)) => (code.trim(), name.trim()),
            None => (entry, entry),
        };
        if code.is_empty() || code.contains('/') {
            bail!("invalid culture code in '{}'", entry);
        }
        cultures.insert(normalize_key(code), name.to_string());
    }

    Ok(cultures)
}
