use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;

use eligibility_fit::config::ScoringConfig;
use eligibility_fit::error::AppError;
use eligibility_fit::scoring::{BenchmarkTables, SchemeError, ScoringScheme};
use eligibility_fit::{FitEngine, FitInput, SchemeKind};
use tracing::{info, warn};

pub(crate) fn parse_scheme(raw: &str) -> Result<SchemeKind, String> {
    raw.parse().map_err(|err: SchemeError| err.to_string())
}

/// Reads a `FitInput` document from a file, or from stdin when the path is `-`.
pub(crate) fn read_input(path: &Path) -> Result<FitInput, AppError> {
    let raw = if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(path)?
    };
    parse_input(&raw)
}

pub(crate) fn parse_input(raw: &str) -> Result<FitInput, AppError> {
    Ok(serde_json::from_str(raw)?)
}

/// A flag path wins over `FIT_BENCHMARKS_CSV`; neither means the built-in tables.
pub(crate) fn load_benchmarks(
    flag: Option<&Path>,
    config: &ScoringConfig,
) -> Result<Arc<BenchmarkTables>, AppError> {
    match flag.or(config.benchmarks_csv.as_deref()) {
        Some(path) => {
            let tables = BenchmarkTables::from_path(path)?;
            info!(path = %path.display(), "using imported benchmark tables");
            Ok(Arc::new(tables))
        }
        None => Ok(Arc::new(BenchmarkTables::builtin().clone())),
    }
}

pub(crate) fn engine_for(
    config: &ScoringConfig,
    flag: Option<SchemeKind>,
    tables: Arc<BenchmarkTables>,
) -> Result<FitEngine, AppError> {
    let kind = match flag {
        Some(kind) => kind,
        None => {
            if !config.scheme_explicit {
                warn!(
                    scheme = %config.scheme,
                    "no scoring scheme selected; using the default preset"
                );
            }
            config.scheme
        }
    };
    Ok(FitEngine::new(scheme_for(config, kind)?, tables))
}

/// One engine per preset.
pub(crate) fn side_by_side_engines(
    config: &ScoringConfig,
    tables: Arc<BenchmarkTables>,
) -> Result<Vec<FitEngine>, AppError> {
    SchemeKind::ALL
        .into_iter()
        .map(|kind| -> Result<FitEngine, AppError> {
            Ok(FitEngine::new(scheme_for(config, kind)?, Arc::clone(&tables)))
        })
        .collect()
}

/// Threshold overrides only touch the configured scheme; other presets keep their own.
fn scheme_for(config: &ScoringConfig, kind: SchemeKind) -> Result<ScoringScheme, SchemeError> {
    if kind == config.scheme {
        config.build_scheme_for(kind)
    } else {
        Ok(kind.build())
    }
}
