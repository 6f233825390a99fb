use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::scoring::{SchemeError, SchemeKind, ScoringScheme};

/// Distinguishes runtime behavior for different stages of deployment.
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

/// Top-level configuration for the scoring front ends.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub scoring: ScoringConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let (scheme, scheme_explicit) = match non_empty_var("FIT_SCHEME") {
            Some(raw) => (
                raw.parse::<SchemeKind>()
                    .map_err(|_| ConfigError::InvalidScheme(raw.clone()))?,
                true,
            ),
            None => (SchemeKind::PointsSystem, false),
        };

        let pass_threshold = threshold_var("FIT_PASS_THRESHOLD")?;
        let borderline_threshold = threshold_var("FIT_BORDERLINE_THRESHOLD")?;
        let benchmarks_csv = non_empty_var("FIT_BENCHMARKS_CSV").map(PathBuf::from);

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            scoring: ScoringConfig {
                scheme,
                scheme_explicit,
                pass_threshold,
                borderline_threshold,
                benchmarks_csv,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Scheme selection and benchmark source.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub scheme: SchemeKind,
    /// False when the scheme fell back to the default preset.
    pub scheme_explicit: bool,
    pub pass_threshold: Option<u32>,
    pub borderline_threshold: Option<u32>,
    pub benchmarks_csv: Option<PathBuf>,
}

impl ScoringConfig {
    /// Builds the chosen preset with any threshold overrides applied.
    pub fn build_scheme(&self) -> Result<ScoringScheme, SchemeError> {
        self.build_scheme_for(self.scheme)
    }

    pub fn build_scheme_for(&self, kind: SchemeKind) -> Result<ScoringScheme, SchemeError> {
        let scheme = kind.build();
        if self.pass_threshold.is_none() && self.borderline_threshold.is_none() {
            return Ok(scheme);
        }
        scheme.with_thresholds(self.pass_threshold, self.borderline_threshold)
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidScheme(String),
    InvalidThreshold { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidScheme(value) => write!(
                f,
                "FIT_SCHEME must be one of points, weighted (found '{}')",
                value
            ),
            ConfigError::InvalidThreshold { key, value } => {
                write!(f, "{} must be a non-negative integer (found '{}')", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn threshold_var(key: &'static str) -> Result<Option<u32>, ConfigError> {
    non_empty_var(key)
        .map(|raw| {
            raw.parse::<u32>()
                .map_err(|_| ConfigError::InvalidThreshold { key, value: raw })
        })
        .transpose()
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
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("FIT_SCHEME");
        env::remove_var("FIT_PASS_THRESHOLD");
        env::remove_var("FIT_BORDERLINE_THRESHOLD");
        env::remove_var("FIT_BENCHMARKS_CSV");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.scoring.scheme, SchemeKind::PointsSystem);
        assert!(!config.scoring.scheme_explicit);
        assert!(config.scoring.benchmarks_csv.is_none());
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn load_reads_explicit_scheme_and_thresholds() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "ci");
        env::set_var("FIT_SCHEME", "weighted");
        env::set_var("FIT_PASS_THRESHOLD", "75");
        let config = AppConfig::load().expect("config loads");
        reset_env();

        assert_eq!(config.environment, AppEnvironment::Test);
        assert_eq!(config.scoring.scheme, SchemeKind::WeightedBlend);
        assert!(config.scoring.scheme_explicit);
        let scheme = config.scoring.build_scheme().expect("scheme builds");
        assert_eq!(scheme.policy().pass_threshold(), 75);
        assert_eq!(scheme.policy().borderline_threshold(), 50);
    }

    #[test]
    fn load_rejects_unknown_scheme() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("FIT_SCHEME", "lottery");
        let error = AppConfig::load().expect_err("invalid scheme");
        reset_env();
        assert!(matches!(error, ConfigError::InvalidScheme(value) if value == "lottery"));
    }

    #[test]
    fn load_rejects_non_numeric_threshold() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("FIT_BORDERLINE_THRESHOLD", "twenty");
        let error = AppConfig::load().expect_err("invalid threshold");
        reset_env();
        assert!(matches!(
            error,
            ConfigError::InvalidThreshold {
                key: "FIT_BORDERLINE_THRESHOLD",
                ..
            }
        ));
    }
}
