use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use u_shift::models::Day;
use u_shift::report;
use u_shift::scheduler::{EligibilityPolicy, PlannerConfig, RosterKpi, ShiftPlanner};
use u_shift::scoring::{LinearScore, LinearWeights, PrecomputedScore, ScoringProvider};
use u_shift::source::RecordSource;

#[derive(Parser)]
#[command(
    name = "u-shift",
    about = "Score-driven shift rostering for a single store",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a weekly roster from a JSON file of personnel records
    Plan {
        /// Path to the records file
        #[arg(short, long)]
        input: PathBuf,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Working-time cap as a fraction of opening hours
        #[arg(long, default_value_t = 0.5)]
        working_ratio: f64,
        /// Skip the availability-inside-store-hours check
        #[arg(long)]
        allow_outside_hours: bool,
        /// Where scores come from
        #[arg(long, value_enum, default_value_t = Scorer::Precomputed)]
        scorer: Scorer,
        /// Linear weights: income,invoices,hours,expense,bias
        #[arg(long, value_delimiter = ',')]
        weights: Option<Vec<f64>>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum Scorer {
    Precomputed,
    Linear,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            input,
            format,
            working_ratio,
            allow_outside_hours,
            scorer,
            weights,
        } => {
            let config = PlannerConfig::new().with_eligibility(
                EligibilityPolicy::new()
                    .with_max_working_ratio(working_ratio)
                    .with_containment(!allow_outside_hours),
            );
            plan(&input, format, config, build_scorer(scorer, weights)?)
        }
    }
}

/// `RUST_LOG` when set and valid, `u_shift=info` otherwise.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("u_shift=info"))
}

fn build_scorer(
    scorer: Scorer,
    weights: Option<Vec<f64>>,
) -> anyhow::Result<Box<dyn ScoringProvider>> {
    let provider: Box<dyn ScoringProvider> = match scorer {
        Scorer::Precomputed if weights.is_some() => {
            anyhow::bail!("--weights only applies to --scorer linear")
        }
        Scorer::Precomputed => Box::new(PrecomputedScore),
        Scorer::Linear => {
            let weights = match weights {
                Some(values) => {
                    let values: [f64; 5] = values
                        .try_into()
                        .map_err(|_| anyhow::anyhow!("--weights takes exactly 5 values"))?;
                    LinearWeights::from_array(&values)
                }
                None => LinearWeights::default(),
            };
            Box::new(LinearScore::new(weights))
        }
    };
    Ok(provider)
}

fn plan(
    input: &Path,
    format: Format,
    config: PlannerConfig,
    scorer: Box<dyn ScoringProvider>,
) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let source = RecordSource::from_json(&json)?;
    let window = source.store_window()?;
    info!(records = source.len(), scorer = scorer.name(), "records loaded");

    let candidates = source.candidates(scorer.as_ref());
    let roster = ShiftPlanner::from_config(config).plan(candidates, &window)?;

    let kpi = RosterKpi::for_week(&roster, &window);
    info!(
        avg_coverage = kpi.avg_coverage,
        fully_covered = kpi.fully_covered_days.len(),
        uncovered_days = Day::ALL.len() - roster.days().len(),
        "coverage"
    );

    match format {
        Format::Text => print!("{}", report::render_text(&roster)),
        Format::Json => println!("{}", report::render_json(&roster)?),
    }
    Ok(())
}
