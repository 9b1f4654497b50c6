use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Default bound on the optional enrichment call made during question analysis.
pub const DEFAULT_INSIGHT_TIMEOUT_MS: u64 = 1500;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            scoring: ScoringConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Data source and enrichment settings for the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringConfig {
    pub seed_path: Option<PathBuf>,
    pub insight_url: Option<String>,
    pub insight_timeout: Duration,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            seed_path: None,
            insight_url: None,
            insight_timeout: Duration::from_millis(DEFAULT_INSIGHT_TIMEOUT_MS),
        }
    }
}

impl ScoringConfig {
    /// Read the scoring settings on their own, for offline commands that never bind a server.
    pub fn from_env() -> Result<Self, ConfigError> {
        let seed_path = non_empty_var("SCORING_SEED_PATH").map(PathBuf::from);
        let insight_url = non_empty_var("INSIGHT_SERVICE_URL");

        let timeout_ms = match non_empty_var("INSIGHT_TIMEOUT_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|value| *value > 0)
                .ok_or(ConfigError::InvalidInsightTimeout { value: raw })?,
            None => DEFAULT_INSIGHT_TIMEOUT_MS,
        };

        Ok(Self {
            seed_path,
            insight_url,
            insight_timeout: Duration::from_millis(timeout_ms),
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidInsightTimeout { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidInsightTimeout { value } => write!(
                f,
                "INSIGHT_TIMEOUT_MS must be a positive number of milliseconds, got '{value}'"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidInsightTimeout { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("SCORING_SEED_PATH");
        env::remove_var("INSIGHT_SERVICE_URL");
        env::remove_var("INSIGHT_TIMEOUT_MS");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.scoring, ScoringConfig::default());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn reads_insight_settings() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("INSIGHT_SERVICE_URL", "http://127.0.0.1:9100/tools");
        env::set_var("INSIGHT_TIMEOUT_MS", "800");
        env::set_var("SCORING_SEED_PATH", "fixtures/positions.json");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(
            config.scoring.insight_url.as_deref(),
            Some("http://127.0.0.1:9100/tools")
        );
        assert_eq!(config.scoring.insight_timeout, Duration::from_millis(800));
        assert_eq!(
            config.scoring.seed_path,
            Some(PathBuf::from("fixtures/positions.json"))
        );
        reset_env();
    }

    #[test]
    fn rejects_zero_insight_timeout() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("INSIGHT_TIMEOUT_MS", "0");
        match AppConfig::load() {
            Err(ConfigError::InvalidInsightTimeout { value }) => assert_eq!(value, "0"),
            other => panic!("expected invalid timeout, got {other:?}"),
        }
        reset_env();
    }
}
