//! Configuration Module
//!
//! Handles loading client configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default PokeAPI root
pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the catalog API, without a trailing slash
    pub api_base: String,
    /// Cache TTL in seconds; also the sweep period
    pub cache_ttl: u64,
    /// Number of locations per `map` page
    pub page_size: u32,
    /// HTTP request timeout in seconds
    pub http_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_API_BASE` - Catalog root (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_CACHE_TTL` - Cache TTL in seconds (default: 10)
    /// - `POKEDEX_PAGE_SIZE` - Locations per page (default: 20)
    /// - `POKEDEX_HTTP_TIMEOUT` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a Config from `lookup`, falling back to defaults for missing,
    /// unparsable or zero values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            api_base: lookup("POKEDEX_API_BASE")
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_base),
            cache_ttl: lookup("POKEDEX_CACHE_TTL")
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.cache_ttl),
            page_size: lookup("POKEDEX_PAGE_SIZE")
                .and_then(|v| v.parse::<u32>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.page_size),
            http_timeout: lookup("POKEDEX_HTTP_TIMEOUT")
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.http_timeout),
        }
    }

    /// Cache TTL as a `Duration`.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// Locator of the first `map` page, substituted for empty cursors.
    pub fn first_page_url(&self) -> String {
        format!(
            "{}/location-area/?offset=0&limit={}",
            self.api_base, self.page_size
        )
    }

    /// Locator of a single location area.
    pub fn location_area_url(&self, area: &str) -> String {
        format!("{}/location-area/{}", self.api_base, area)
    }

    /// Locator of a single Pokemon record.
    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.api_base, name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            cache_ttl: 10,
            page_size: 20,
            http_timeout: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_base, "https://pokeapi.co/api/v2");
        assert_eq!(config.cache_ttl, 10);
        assert_eq!(config.page_size, 20);
        assert_eq!(config.http_timeout, 10);
    }

    #[test]
    fn test_first_page_url_matches_catalog_default() {
        let config = Config::default();
        assert_eq!(
            config.first_page_url(),
            "https://pokeapi.co/api/v2/location-area/?offset=0&limit=20"
        );
    }

    #[test]
    fn test_resource_urls() {
        let config = Config {
            api_base: "http://127.0.0.1:9000".to_string(),
            ..Config::default()
        };
        assert_eq!(
            config.location_area_url("canalave-city-area"),
            "http://127.0.0.1:9000/location-area/canalave-city-area"
        );
        assert_eq!(config.pokemon_url("pikachu"), "http://127.0.0.1:9000/pokemon/pikachu");
        assert_eq!(config.ttl(), Duration::from_secs(10));
    }

    #[test]
    fn test_config_from_lookup_reads_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("POKEDEX_API_BASE", "http://127.0.0.1:9000/"),
            ("POKEDEX_CACHE_TTL", "30"),
            ("POKEDEX_PAGE_SIZE", "5"),
            ("POKEDEX_HTTP_TIMEOUT", "3"),
        ]));
        assert_eq!(config.api_base, "http://127.0.0.1:9000");
        assert_eq!(config.cache_ttl, 30);
        assert_eq!(config.page_size, 5);
        assert_eq!(config.http_timeout, 3);
    }

    #[test]
    fn test_config_zero_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("POKEDEX_CACHE_TTL", "0"),
            ("POKEDEX_PAGE_SIZE", "0"),
            ("POKEDEX_HTTP_TIMEOUT", "0"),
        ]));
        assert_eq!(config.cache_ttl, 10);
        assert_eq!(config.page_size, 20);
        assert_eq!(config.http_timeout, 10);
    }

    #[test]
    fn test_config_unparsable_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("POKEDEX_API_BASE", ""),
            ("POKEDEX_CACHE_TTL", "ten"),
            ("POKEDEX_PAGE_SIZE", "-1"),
            ("POKEDEX_HTTP_TIMEOUT", "1.5"),
        ]));
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.cache_ttl, 10);
        assert_eq!(config.page_size, 20);
        assert_eq!(config.http_timeout, 10);
    }

    #[test]
    fn test_config_from_env_ignores_zero_timeout() {
        // only this test touches POKEDEX_HTTP_TIMEOUT
        env::set_var("POKEDEX_HTTP_TIMEOUT", "0");
        let config = Config::from_env();
        env::remove_var("POKEDEX_HTTP_TIMEOUT");

        assert_eq!(config.http_timeout, 10);
    }
}
