use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

pub const DEFAULT_SERVICE_NAME: &str = "division-service";

#[derive(Debug, Clone)]
pub struct DivisionConfig {
    pub common: core_config::Config,
    pub service_name: String,
    pub log_level: String,
    /// OTLP/gRPC collector. Span export is disabled when unset.
    pub otlp_endpoint: Option<String>,
}

impl DivisionConfig {
    pub fn load() -> Result<Self, AppError> {
        // Handles .env, the optional configuration file and APP__ overrides.
        let common = core_config::Config::load()?;

        Ok(DivisionConfig {
            common,
            service_name: get_env("SERVICE_NAME", DEFAULT_SERVICE_NAME),
            log_level: get_env("LOG_LEVEL", "info"),
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|v| !v.is_empty()),
        })
    }
}

impl Default for DivisionConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            log_level: "info".to_string(),
            otlp_endpoint: None,
        }
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: [&str; 4] = ["SERVICE_NAME", "LOG_LEVEL", "OTLP_ENDPOINT", "APP__PORT"];

    fn clear_env() {
        for key in KEYS {
            env::remove_var(key);
        }
    }

    // Environment is process-wide, so every case runs inside one test.
    #[test]
    fn test_load_from_env() {
        clear_env();

        let config = DivisionConfig::load().expect("Failed to load defaults");
        assert_eq!(config.service_name, "division-service");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.otlp_endpoint, None);
        assert_eq!(config.common.port, 8080);

        env::set_var("SERVICE_NAME", "division-canary");
        env::set_var("LOG_LEVEL", "debug");
        env::set_var("OTLP_ENDPOINT", "http://collector:4317");
        env::set_var("APP__PORT", "9100");

        let config = DivisionConfig::load().expect("Failed to load overrides");
        assert_eq!(config.service_name, "division-canary");
        assert_eq!(config.log_level, "debug");
        assert_eq!(
            config.otlp_endpoint.as_deref(),
            Some("http://collector:4317")
        );
        assert_eq!(config.common.port, 9100);

        env::set_var("OTLP_ENDPOINT", "");
        let config = DivisionConfig::load().expect("Failed to load empty endpoint");
        assert_eq!(config.otlp_endpoint, None);

        clear_env();
    }
}
