//! Trailing route parameters in their declared order.

use std::collections::HashMap;

use crate::routing::UrlResolver;

impl UrlResolver<'_> {
    /// Build the `/value1/value2/...` suffix for an action's route values.
    ///
    /// Values are emitted in the action's declared parameter order. The walk
    /// stops at the first declared parameter without a value, so the suffix
    /// is always a prefix of the declared list. Unknown controllers/actions
    /// and actions without declared parameters yield an empty string.
    pub fn ordered_parameter_suffix(
        &self,
        controller: &str,
        action: &str,
        route_values: &HashMap<String, String>,
    ) -> String {
        self.registry()
            .parameter_names(controller, action)
            .map(|names| ordered_suffix(&names, route_values))
            .unwrap_or_default()
    }
}

fn ordered_suffix(parameter_names: &[String], route_values: &HashMap<String, String>) -> String {
    parameter_names
        .iter()
        .map_while(|name| route_values.get(name))
        .fold(String::new(), |mut suffix, value| {
            suffix.push('/');
            suffix.push_str(value);
            suffix
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::routing::RouteRegistry;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|n| n.to_string()).collect()
    }

    // ==================== ordered_suffix Tests ====================

    #[test]
    fn test_suffix_in_declared_order() {
        let suffix = ordered_suffix(
            &names(&["id", "slug"]),
            &values(&[("slug", "hello"), ("id", "5")]),
        );
        assert_eq!(suffix, "/5/hello");
    }

    #[test]
    fn test_suffix_stops_at_first_missing() {
        let suffix = ordered_suffix(&names(&["id", "slug"]), &values(&[("id", "5")]));
        assert_eq!(suffix, "/5");
    }

    #[test]
    fn test_suffix_does_not_skip_gaps() {
        let suffix = ordered_suffix(
            &names(&["year", "month", "day"]),
            &values(&[("year", "2024"), ("day", "15")]),
        );
        assert_eq!(suffix, "/2024");
    }

    #[test]
    fn test_suffix_ignores_undeclared_values() {
        let suffix = ordered_suffix(&names(&["id"]), &values(&[("id", "7"), ("page", "2")]));
        assert_eq!(suffix, "/7");
    }

    #[test]
    fn test_suffix_empty_when_first_missing() {
        let suffix = ordered_suffix(&names(&["id", "slug"]), &values(&[("slug", "x")]));
        assert_eq!(suffix, "");
    }

    // ==================== Resolver Integration Tests ====================

    #[test]
    fn test_ordered_parameter_suffix_for_registered_action() {
        let registry = RouteRegistry::new();
        registry.add_controller_route("blog", "en", "blog");
        registry
            .add_action_route("blog", "post", "en", "post", "Post", &names(&["id", "slug"]))
            .unwrap();
        let config = Config::new("en");
        let resolver = UrlResolver::new(&registry, &config);

        let suffix = resolver.ordered_parameter_suffix("Blog", "POST", &values(&[("id", "5")]));
        assert_eq!(suffix, "/5");
    }

    #[test]
    fn test_ordered_parameter_suffix_unknown_is_empty() {
        let registry = RouteRegistry::new();
        registry.add_controller_route("blog", "en", "blog");
        registry
            .add_action_route("blog", "index", "en", "", "Blog", &[])
            .unwrap();
        let config = Config::new("en");
        let resolver = UrlResolver::new(&registry, &config);
        let route_values = values(&[("id", "5")]);

        assert_eq!(resolver.ordered_parameter_suffix("shop", "item", &route_values), "");
        assert_eq!(resolver.ordered_parameter_suffix("blog", "post", &route_values), "");
        // Declared without parameters
        assert_eq!(resolver.ordered_parameter_suffix("blog", "index", &route_values), "");
    }
}
