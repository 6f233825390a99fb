pub mod cache;
pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;

pub use scoring::{
    compare_schemes, score_fit, FitEngine, FitInput, ScoreReport, SchemeKind, Verdict,
};
