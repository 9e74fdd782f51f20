use crate::referral::HourPolicy;
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

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

/// Top-level configuration for the referral service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub referral: ReferralConfig,
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
            referral: ReferralConfig::from_env()?,
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

/// Knobs for the referral engine and its snapshot source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferralConfig {
    pub hour_policy: HourPolicy,
    /// Optional JSON keyword catalog replacing the built-in triage keywords.
    pub keywords_path: Option<PathBuf>,
    /// Fixed seed for simulated snapshots; unset draws a fresh seed per request.
    pub snapshot_seed: Option<u64>,
}

impl ReferralConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let hour_policy = match env::var("REFERRAL_HOUR_POLICY") {
            Ok(raw) => HourPolicy::parse(&raw).ok_or(ConfigError::InvalidHourPolicy(raw))?,
            Err(_) => HourPolicy::default(),
        };

        let keywords_path = env::var("REFERRAL_KEYWORDS_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let snapshot_seed = match env::var("REFERRAL_SNAPSHOT_SEED") {
            Ok(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed(raw))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            hour_policy,
            keywords_path,
            snapshot_seed,
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidHourPolicy(String),
    InvalidSeed(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidHourPolicy(value) => write!(
                f,
                "REFERRAL_HOUR_POLICY must be 'strict' or 'wrap' (got '{value}')"
            ),
            ConfigError::InvalidSeed(value) => {
                write!(f, "REFERRAL_SNAPSHOT_SEED must be a valid u64 (got '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidHourPolicy(_)
            | ConfigError::InvalidSeed(_) => None,
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
        env::remove_var("REFERRAL_HOUR_POLICY");
        env::remove_var("REFERRAL_KEYWORDS_PATH");
        env::remove_var("REFERRAL_SNAPSHOT_SEED");
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
        assert_eq!(config.referral, ReferralConfig::default());
        assert_eq!(config.referral.hour_policy, HourPolicy::Strict);
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
    fn reads_referral_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("REFERRAL_HOUR_POLICY", "Wrap");
        env::set_var("REFERRAL_SNAPSHOT_SEED", "42");
        env::set_var("REFERRAL_KEYWORDS_PATH", "/etc/referral/keywords.json");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.referral.hour_policy, HourPolicy::Wrap);
        assert_eq!(config.referral.snapshot_seed, Some(42));
        assert_eq!(
            config.referral.keywords_path,
            Some(PathBuf::from("/etc/referral/keywords.json"))
        );
        reset_env();
    }

    #[test]
    fn rejects_unknown_hour_policy() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("REFERRAL_HOUR_POLICY", "modulo");
        let err = AppConfig::load().expect_err("policy rejected");
        assert!(matches!(err, ConfigError::InvalidHourPolicy(ref value) if value == "modulo"));
        reset_env();
    }

    #[test]
    fn rejects_non_numeric_seed() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("REFERRAL_SNAPSHOT_SEED", "abc");
        let err = AppConfig::load().expect_err("seed rejected");
        assert!(err.to_string().contains("REFERRAL_SNAPSHOT_SEED"));
        reset_env();
    }
}
