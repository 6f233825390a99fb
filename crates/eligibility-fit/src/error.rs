use crate::config::ConfigError;
use crate::scoring::{BenchmarkError, InputError, SchemeError};
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Benchmark(BenchmarkError),
    Scheme(SchemeError),
    Input(InputError),
    Json(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Benchmark(err) => write!(f, "benchmark error: {}", err),
            AppError::Scheme(err) => write!(f, "scoring scheme error: {}", err),
            AppError::Input(err) => write!(f, "invalid scoring input: {}", err),
            AppError::Json(err) => write!(f, "malformed input document: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Benchmark(err) => Some(err),
            AppError::Scheme(err) => Some(err),
            AppError::Input(err) => Some(err),
            AppError::Json(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<BenchmarkError> for AppError {
    fn from(value: BenchmarkError) -> Self {
        Self::Benchmark(value)
    }
}

impl From<SchemeError> for AppError {
    fn from(value: SchemeError) -> Self {
        Self::Scheme(value)
    }
}

impl From<InputError> for AppError {
    fn from(value: InputError) -> Self {
        Self::Input(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
