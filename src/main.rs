//! Resolve localized URLs from a JSON route table.
//!
//! Usage:
//!   localized-routes <controller> <action> <culture> [name=value ...]
//!   localized-routes detect <path>
//!
//! Environment variables (all optional):
//! - DEFAULT_CULTURE (defaults to en)
//! - SUPPORTED_CULTURES, e.g. "en:English,fi:Suomi"
//! - DEFAULT_CONTROLLER / DEFAULT_ACTION (default to home / index)
//! - ROUTES_FILE (defaults to data/routes.json)

use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use tracing::info;

use localized_routes::config::Config;
use localized_routes::routing::{RouteRegistry, RouteTable, UrlResolver};

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("localized_routes=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::from_env()?;

    if let [command, path] = args.as_slice() {
        if command == "detect" {
            println!("{}", config.detect_culture(path));
            return Ok(());
        }
    }

    let (controller, action, culture, values) = match args.as_slice() {
        [controller, action, culture, rest @ ..] => {
            (controller, action, culture, parse_route_values(rest)?)
        }
        _ => bail!(
            "usage: localized-routes <controller> <action> <culture> [name=value ...]\n       localized-routes detect <path>"
        ),
    };

    if !config.is_supported(culture) {
        bail!("Culture '{}' is not in SUPPORTED_CULTURES", culture);
    }

    info!("Loading route table from {}", config.routes_file);
    let table = RouteTable::from_file(&config.routes_file)?;

    let registry = RouteRegistry::new();
    table
        .apply(&registry, &config.default_culture)
        .context("Route table references unknown controllers")?;

    let resolver = UrlResolver::new(&registry, &config);
    let resolved = resolver.url_for(controller, action, culture, &values)?;

    println!("{}", resolved.url);
    if !resolved.link_name.is_empty() {
        println!("{}", resolved.link_name);
    }

    Ok(())
}

/// Parse trailing `name=value` arguments into route values.
fn parse_route_values(args: &[String]) -> Result<HashMap<String, String>> {
    args.iter()
        .map(|arg| {
            arg.split_once('=')
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .with_context(|| format!("Expected name=value, got '{}'", arg))
        })
        .collect()
}
