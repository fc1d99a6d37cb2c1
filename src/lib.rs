pub mod config;
pub mod error;
pub mod routing;

pub use config::Config;
pub use error::RouteError;
pub use routing::{LocalizedUrl, RouteRegistry, RouteTable, UrlResolver};
