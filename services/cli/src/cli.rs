use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use eligibility_fit::config::AppConfig;
use eligibility_fit::error::AppError;
use eligibility_fit::{compare_schemes, telemetry, SchemeKind};
use tracing::info;

use crate::demo::{run_demo, DemoArgs};
use crate::infra::{engine_for, load_benchmarks, parse_scheme, read_input, side_by_side_engines};
use crate::render::{print_json, render_benchmarks, render_report};

#[derive(Parser, Debug)]
#[command(
    name = "eligibility-fit",
    about = "Score candidate profiles against job openings and show the reasoning",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score one input document with a single scheme
    Score(ScoreArgs),
    /// Score one input document with every preset side by side
    Compare(CompareArgs),
    /// Summarize the benchmark tables in use
    Benchmarks(BenchmarkArgs),
    /// Walk through built-in scenarios (default command)
    Demo(DemoArgs),
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a JSON input document, or `-` for stdin
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Scheme preset (points or weighted); overrides FIT_SCHEME
    #[arg(long, value_parser = parse_scheme)]
    pub(crate) scheme: Option<SchemeKind>,
    /// Benchmark CSV export; overrides FIT_BENCHMARKS_CSV
    #[arg(long)]
    pub(crate) benchmarks: Option<PathBuf>,
    /// Print the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CompareArgs {
    /// Path to a JSON input document, or `-` for stdin
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Benchmark CSV export; overrides FIT_BENCHMARKS_CSV
    #[arg(long)]
    pub(crate) benchmarks: Option<PathBuf>,
    /// Print the reports as a JSON array
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct BenchmarkArgs {
    /// Benchmark CSV export; overrides FIT_BENCHMARKS_CSV
    #[arg(long)]
    pub(crate) benchmarks: Option<PathBuf>,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, config.environment)?;
    info!(?config.environment, scheme = %config.scoring.scheme, "eligibility fit cli started");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Demo(DemoArgs::default()));

    match command {
        Command::Score(args) => {
            let input = read_input(&args.input)?;
            let tables = load_benchmarks(args.benchmarks.as_deref(), &config.scoring)?;
            let engine = engine_for(&config.scoring, args.scheme, tables)?;
            let report = engine.score(&input)?;
            if args.json {
                print_json(&report)
            } else {
                print!("{}", render_report(&report));
                Ok(())
            }
        }
        Command::Compare(args) => {
            let input = read_input(&args.input)?;
            let tables = load_benchmarks(args.benchmarks.as_deref(), &config.scoring)?;
            let engines = side_by_side_engines(&config.scoring, tables)?;
            let reports = compare_schemes(&engines, &input)?;
            if args.json {
                print_json(&reports)
            } else {
                for report in &reports {
                    print!("{}", render_report(report));
                    println!();
                }
                Ok(())
            }
        }
        Command::Benchmarks(args) => {
            let tables = load_benchmarks(args.benchmarks.as_deref(), &config.scoring)?;
            print!("{}", render_benchmarks(&tables));
            Ok(())
        }
        Command::Demo(args) => run_demo(args, &config.scoring),
    }
}
