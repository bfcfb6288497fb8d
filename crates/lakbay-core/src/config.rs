use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env
/// vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are
/// invalid. `GOOGLE_API_KEY` in particular is required up front: a missing
/// provider credential is a startup failure, not something to discover on
/// the first search.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are
/// invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup
/// function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<f64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let google_api_key = require("GOOGLE_API_KEY")?;

    let bind_addr = parse_addr("LAKBAY_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("LAKBAY_LOG_LEVEL", "info");
    let venues_path = PathBuf::from(or_default("LAKBAY_VENUES_PATH", "./config/venues.yaml"));
    let places_timeout_secs = parse_u64("LAKBAY_PLACES_TIMEOUT_SECS", "10")?;
    let places_cache_ttl_secs = parse_u64("LAKBAY_PLACES_CACHE_TTL_SECS", "3600")?;
    let places_language = or_default("LAKBAY_PLACES_LANGUAGE", "ko");

    let default_exchange_rate = parse_f64("LAKBAY_DEFAULT_EXCHANGE_RATE", "24.0")?;
    if !(default_exchange_rate.is_finite() && default_exchange_rate > 0.0) {
        return Err(ConfigError::InvalidEnvVar {
            var: "LAKBAY_DEFAULT_EXCHANGE_RATE".to_string(),
            reason: "exchange rate must be a positive finite number".to_string(),
        });
    }

    Ok(AppConfig {
        google_api_key,
        bind_addr,
        log_level,
        venues_path,
        places_timeout_secs,
        places_cache_ttl_secs,
        places_language,
        default_exchange_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'static str, &'static str>,
    ) -> impl Fn(&str) -> Result<String, std::env::VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(std::env::VarError::NotPresent)
        }
    }

    fn minimal_env() -> HashMap<&'static str, &'static str> {
        let mut map = HashMap::new();
        map.insert("GOOGLE_API_KEY", "test-key");
        map
    }

    #[test]
    fn missing_api_key_fails() {
        let map = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref var)) if var == "GOOGLE_API_KEY"),
            "expected MissingEnvVar(GOOGLE_API_KEY), got: {result:?}"
        );
    }

    #[test]
    fn defaults_apply_with_only_api_key() {
        let map = minimal_env();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.google_api_key, "test-key");
        assert_eq!(cfg.bind_addr.port(), 3000);
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.places_timeout_secs, 10);
        assert_eq!(cfg.places_cache_ttl_secs, 3600);
        assert_eq!(cfg.places_language, "ko");
        assert!((cfg.default_exchange_rate - 24.0).abs() < f64::EPSILON);
    }

    #[test]
    fn bind_addr_override() {
        let mut map = minimal_env();
        map.insert("LAKBAY_BIND_ADDR", "127.0.0.1:8080");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.bind_addr.port(), 8080);
    }

    #[test]
    fn bind_addr_invalid() {
        let mut map = minimal_env();
        map.insert("LAKBAY_BIND_ADDR", "not-an-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LAKBAY_BIND_ADDR"),
            "expected InvalidEnvVar(LAKBAY_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn timeout_override_and_invalid() {
        let mut map = minimal_env();
        map.insert("LAKBAY_PLACES_TIMEOUT_SECS", "30");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.places_timeout_secs, 30);

        map.insert("LAKBAY_PLACES_TIMEOUT_SECS", "soon");
        let result = build_app_config(lookup_from_map(&map));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
    }

    #[test]
    fn exchange_rate_must_be_positive() {
        let mut map = minimal_env();
        map.insert("LAKBAY_DEFAULT_EXCHANGE_RATE", "-3.0");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LAKBAY_DEFAULT_EXCHANGE_RATE"),
            "expected InvalidEnvVar(LAKBAY_DEFAULT_EXCHANGE_RATE), got: {result:?}"
        );
    }

    #[test]
    fn cache_ttl_override() {
        let mut map = minimal_env();
        map.insert("LAKBAY_PLACES_CACHE_TTL_SECS", "600");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.places_cache_ttl_secs, 600);
    }

    #[test]
    fn debug_redacts_api_key() {
        let map = minimal_env();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("test-key"));
        assert!(rendered.contains("[redacted]"));
    }
}
