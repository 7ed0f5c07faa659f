//! mt CLI
//!
//! Evaluate an observation, browse flavor-text hints, validate and build
//! the reference dataset.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use mt_core::api::{evaluate, EvaluationRequest, SCHEMA_VERSION};
use mt_core::config::{EvaluatorConfig, ResolverStrategy};
use mt_core::data::{dataset_report, load_reference_entries, Datasets, SerifuIndex};
use mt_core::engine::Evaluator;
use mt_core::input::{ExchangeMode, RawExchange, RawObservation};
use mt_core::models::FlavorTextCategory;

#[derive(Parser)]
#[command(name = "mt")]
#[command(about = "Monkey Turn V expected-value checker", long_about = None)]
struct Cli {
    /// Default log level when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum ExchangeArg {
    Par,
    Alt,
    Custom,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Simple,
    Extended,
}

#[derive(Clone, Copy, ValueEnum)]
enum CategoryArg {
    #[value(alias = "通常時")]
    NormalTime,
    #[value(alias = "激走")]
    Surge,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one observation
    Evaluate {
        /// Reference dataset JSON
        #[arg(long, default_value = "data/expectation_data.json")]
        reference: PathBuf,

        /// Flavor-text dataset JSON
        #[arg(long, default_value = "data/serifu_list.json")]
        serifu: PathBuf,

        /// Observation JSON file (form fields)
        #[arg(long)]
        observation: PathBuf,

        #[arg(long, value_enum, default_value = "par")]
        exchange: ExchangeArg,

        /// Payout units for --exchange custom
        #[arg(long)]
        units: Option<f64>,

        /// Override the configured resolver strategy
        #[arg(long, value_enum)]
        strategy: Option<StrategyArg>,

        /// Print the JSON response instead of the result card
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// List flavor-text lines with their hints
    Hints {
        #[arg(long, default_value = "data/serifu_list.json")]
        serifu: PathBuf,

        #[arg(long, value_enum)]
        category: Option<CategoryArg>,
    },

    /// Report row counts and duplicate keys in a reference dataset
    Validate {
        #[arg(long, default_value = "data/expectation_data.json")]
        reference: PathBuf,
    },

    /// Build the reference JSON dataset from a CSV export
    Convert {
        #[arg(long)]
        csv: PathBuf,

        #[arg(long)]
        out: PathBuf,

        /// Output metadata JSON file
        #[arg(long)]
        metadata: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    mt_cli::logging::init_tracing(&cli.log_level);

    match cli.command {
        Commands::Evaluate {
            reference,
            serifu,
            observation,
            exchange,
            units,
            strategy,
            json,
        } => run_evaluate(&reference, &serifu, &observation, exchange, units, strategy, json),
        Commands::Hints { serifu, category } => run_hints(&serifu, category),
        Commands::Validate { reference } => run_validate(&reference),
        Commands::Convert { csv, out, metadata } => run_convert(&csv, &out, metadata.as_deref()),
    }
}

fn run_evaluate(
    reference: &Path,
    serifu: &Path,
    observation: &Path,
    exchange: ExchangeArg,
    units: Option<f64>,
    strategy: Option<StrategyArg>,
    json: bool,
) -> Result<()> {
    let mut config = EvaluatorConfig::from_env()?;
    if let Some(strategy) = strategy {
        config.resolver.strategy = match strategy {
            StrategyArg::Simple => ResolverStrategy::Simple,
            StrategyArg::Extended => ResolverStrategy::Extended,
        };
    }

    let raw = fs::read_to_string(observation)
        .with_context(|| format!("Failed to read observation: {}", observation.display()))?;
    let raw: RawObservation = serde_json::from_str(&raw).context("Failed to parse observation JSON")?;

    let mode = match exchange {
        ExchangeArg::Par => ExchangeMode::Par,
        ExchangeArg::Alt => ExchangeMode::Alt,
        ExchangeArg::Custom => ExchangeMode::Custom,
    };
    let request = EvaluationRequest {
        schema_version: SCHEMA_VERSION,
        observation: raw,
        exchange: RawExchange {
            mode,
            units: units.map(serde_json::Value::from).unwrap_or_default(),
        },
    };

    let datasets = Datasets::load_or_empty(reference, serifu);
    let response =
        evaluate(request, &datasets, &Evaluator::new(config)).map_err(anyhow::Error::msg)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", mt_cli::render_response(&response));
    }
    Ok(())
}

fn run_hints(serifu: &Path, category: Option<CategoryArg>) -> Result<()> {
    let entries = mt_core::data::load_serifu_entries(serifu)?;
    let index = SerifuIndex::new(&entries);

    let listing = match category {
        Some(CategoryArg::NormalTime) => {
            mt_cli::render_hints(index.for_category(FlavorTextCategory::NormalTime))
        }
        Some(CategoryArg::Surge) => mt_cli::render_hints(index.for_category(FlavorTextCategory::Surge)),
        None => mt_cli::render_hints(&entries),
    };
    println!("{listing}");
    Ok(())
}

fn run_validate(reference: &Path) -> Result<()> {
    let entries = load_reference_entries(reference)?;
    let report = dataset_report(&entries);

    println!("rows: {}", report.total_rows);
    for (situation, count) in &report.rows_per_situation {
        println!("  {situation}: {count}");
    }

    if report.is_clean() {
        println!("✅ no duplicate (situation, diff_range, start_g) keys");
        Ok(())
    } else {
        for dup in &report.duplicate_keys {
            println!(
                "  duplicate: {} / {} / {} ×{}",
                dup.situation, dup.diff_range, dup.start_g, dup.count
            );
        }
        anyhow::bail!(
            "❌ {} duplicate key(s); lookups on them depend on row order",
            report.duplicate_keys.len()
        )
    }
}

fn run_convert(csv: &Path, out: &Path, metadata: Option<&Path>) -> Result<()> {
    println!("🔨 Building reference dataset...");
    println!("   CSV Input: {}", csv.display());
    println!("   Output:    {}", out.display());

    let (meta, stats) = mt_cli::build_reference_dataset(csv, out)?;

    println!("\n✅ Dataset built");
    println!("   Rows:     {} parsed, {} skipped", stats.parsed, stats.failed);
    println!("   Checksum: {}", meta.checksum);
    println!("   Created:  {}", meta.created_at);

    if let Some(path) = metadata {
        fs::write(path, serde_json::to_string_pretty(&meta)?)
            .with_context(|| format!("Failed to write metadata: {}", path.display()))?;
        println!("\n📄 Metadata saved to: {}", path.display());
    }
    Ok(())
}
