//! `sortkit`, walks through and verifies the sorting strategies of the collection.
//!
//! Without arguments every strategy sorts its classic demonstration array.

use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use sort_test_tools::patterns;
use thiserror::Error;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use sort_collection::config::{DEFAULT_BUCKET_COUNT, DEMO_BUCKET_COUNT};
use sort_collection::{harness, registry, Element, RunResult, SortConfig, SortError};

#[derive(Parser)]
#[command(
    name = "sortkit",
    about = "Classic sorting algorithms, demonstrated and verified",
    version,
    after_help = "\
Examples:
  sortkit                                  Sort the demonstration array of every strategy
  sortkit list                             List strategies and their properties
  sortkit run all --len 10000              Run every strategy over 10000 random values
  sortkit run bucket --buckets 32 --json   Run bucket sort, report as JSON
"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Log more (-v info, -vv debug). RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Sort the demonstration array of every strategy (the default)
    Demo,

    /// List strategies and their properties
    List,

    /// Run strategies through the verification harness
    Run {
        /// Strategy name, or `all`
        #[arg(default_value = "all")]
        strategy: String,

        /// Number of elements to sort
        #[arg(long, default_value_t = 1_000)]
        len: usize,

        /// Shape of the generated input
        #[arg(long, value_enum, default_value_t = Pattern::Random)]
        pattern: Pattern,

        /// Bucket count for bucket sort
        #[arg(long, env = "SORTKIT_BUCKETS", default_value_t = DEFAULT_BUCKET_COUNT)]
        buckets: usize,

        /// Seed for the input generator, OVERRIDE_SEED is honored as well
        #[arg(long)]
        seed: Option<u64>,

        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Pattern {
    /// Uniformly random non-negative values
    Random,
    /// Uniformly random values, negatives included (radix sort rejects these)
    Signed,
    Ascending,
    Descending,
    /// Random values sorted in about log2(len) ascending runs
    Saw,
    AllEqual,
    /// Few distinct values, each repeated about eight times
    Duplicates,
    /// Zipf distributed values
    Zipf,
}

impl Pattern {
    fn generate(self, len: usize) -> Vec<Element> {
        match self {
            Pattern::Random => patterns::random_uniform(len, 0..Element::MAX),
            Pattern::Signed => patterns::random(len),
            Pattern::Ascending => patterns::ascending(len),
            Pattern::Descending => patterns::descending(len),
            Pattern::Saw => patterns::saw_ascending(len, ((len as f64).log2().round()) as usize),
            Pattern::AllEqual => patterns::all_equal(len),
            Pattern::Duplicates => patterns::random_duplicates(len),
            Pattern::Zipf => patterns::random_zipf(len, 1.0),
        }
    }
}

/// The `--json` output of `run`.
#[derive(Serialize)]
struct Report<'a> {
    seed: u64,
    config: &'a SortConfig,
    results: &'a [RunResult],
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Sort(#[from] SortError),
    #[error("failed to encode results: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => {
            demo();
            ExitCode::SUCCESS
        }
        Command::List => {
            list();
            ExitCode::SUCCESS
        }
        Command::Run {
            strategy,
            len,
            pattern,
            buckets,
            seed,
            json,
        } => match run(&strategy, len, pattern, buckets, seed, json) {
            Ok(true) => ExitCode::SUCCESS,
            Ok(false) => ExitCode::FAILURE,
            Err(err) => {
                error!("{err}");
                ExitCode::FAILURE
            }
        },
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_array(v: &[Element]) {
    for x in v {
        print!("{x} ");
    }
    println!("\n");
}

fn demo() {
    let config = SortConfig::with_bucket_count(DEMO_BUCKET_COUNT);

    for strategy in registry::strategies() {
        let mut v = strategy.demo.to_vec();

        println!("== {} ==", strategy.name);
        println!("before sort: ");
        print_array(&v);

        if let Err(err) = strategy.sort(&mut v, &config) {
            warn!(algorithm = strategy.name, "demonstration failed: {err}");
            continue;
        }

        println!("after sort: ");
        print_array(&v);
    }
}

fn list() {
    println!("{:<18} {:<8} {:<9} {:<9}", "name", "stable", "in-place", "quadratic");
    for strategy in registry::strategies() {
        println!(
            "{:<18} {:<8} {:<9} {:<9}",
            strategy.name, strategy.stable, strategy.in_place, strategy.quadratic
        );
    }
}

/// Returns whether every run passed verification.
fn run(
    name: &str,
    len: usize,
    pattern: Pattern,
    buckets: usize,
    seed: Option<u64>,
    json: bool,
) -> Result<bool, CliError> {
    if let Some(seed) = seed {
        if !patterns::set_seed(seed) {
            warn!(
                seed = patterns::random_init_seed(),
                "input seed already initialized, ignoring --seed"
            );
        }
    }

    let single = match name {
        "all" => None,
        name => Some(registry::find(name)?),
    };

    let config = SortConfig::with_bucket_count(buckets);
    let input = pattern.generate(len);
    let seed = patterns::random_init_seed();
    info!(seed, len, ?pattern, "generated input");

    let results: Vec<RunResult> = match single {
        Some(strategy) => vec![harness::run(strategy, &input, &config)?],
        // `all` keeps going past strategies that reject the input.
        None => harness::run_all(&input, &config)
            .into_iter()
            .filter_map(|(strategy, result)| {
                result
                    .map_err(|err| warn!(algorithm = strategy.name, "skipped: {err}"))
                    .ok()
            })
            .collect(),
    };

    if json {
        let report = Report {
            seed,
            config: &config,
            results: &results,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for result in &results {
            println!("{result}");
        }
    }

    Ok(results.iter().all(RunResult::passed))
}
