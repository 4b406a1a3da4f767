use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use countdown_solver::{
    CountdownSolver, SearchOutcome, SolverConfig, generate_numbers, generate_target,
};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Countdown solver - Find an arithmetic expression over the source numbers that hits the target
#[derive(Parser, Debug)]
#[command(name = "countdown-solver")]
#[command(about = "Solve the Countdown numbers game by exhaustive search")]
#[command(version)]
pub struct CliArgs {
    /// Target value; anything unparsable is replaced by a random target
    #[arg(allow_negative_numbers = true)]
    pub target: String,

    /// Source numbers; if any is unparsable, six random numbers are dealt instead
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    pub numbers: Vec<String>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Allow solutions that leave some numbers unused
    #[arg(short, long)]
    pub subsets: bool,

    /// Search permutations in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Seed for random target/number substitution
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub target: i64,
    pub numbers: Vec<i64>,
    pub solver: SolverConfig,
}

/// Resolve the raw arguments into a round, substituting random values for
/// anything that does not parse
pub fn build_config<R: Rng + ?Sized>(args: &CliArgs, rng: &mut R) -> CliConfig {
    CliConfig {
        target: resolve_target(&args.target, rng),
        numbers: resolve_numbers(&args.numbers, rng),
        solver: SolverConfig {
            use_subsets: args.subsets,
            parallel: args.parallel,
        },
    }
}

fn resolve_target<R: Rng + ?Sized>(raw: &str, rng: &mut R) -> i64 {
    match raw.parse::<i64>() {
        Ok(target) => target,
        Err(_) => {
            warn!("Unparsable target '{}'", raw);
            println!("Could not parse target ({}). Selecting random target instead", raw);
            generate_target(rng)
        }
    }
}

fn resolve_numbers<R: Rng + ?Sized>(raw: &[String], rng: &mut R) -> Vec<i64> {
    let parsed: Result<Vec<i64>, &str> = raw
        .iter()
        .map(|s| s.parse::<i64>().map_err(|_| s.as_str()))
        .collect();

    match parsed {
        Ok(numbers) => numbers,
        Err(bad) => {
            warn!("Unparsable number '{}'", bad);
            println!(
                "  Could not parse number ({}). Selecting six random numbers instead",
                bad
            );
            generate_numbers(rng)
        }
    }
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    init_logging(&args.log_level)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let config = build_config(&args, &mut rng);

    println!("Target: {}", config.target);
    let numbers: Vec<String> = config.numbers.iter().map(i64::to_string).collect();
    println!("The numbers are: {}", numbers.join(" "));

    let solver = CountdownSolver::new(config.solver);
    info!(
        "Solving for {} (subsets: {}, parallel: {})",
        config.target,
        solver.config().use_subsets,
        solver.config().parallel
    );

    let report = solver
        .search_with_progress(config.target, &config.numbers, |imp| {
            println!(
                ".. Found closest answer so far:\n    {} = {}",
                imp.expression, imp.value
            );
        })
        .context("Search failed")?;

    match report.outcome {
        SearchOutcome::ExactMatch(expr) => {
            println!("SUCCESS!!\n    {} = {}", expr, config.target);
        }
        SearchOutcome::Closest(closest) => {
            warn!("No exact match found");
            println!("No solutions found");
            println!(
                "Closest: {} = {} (off by {})",
                closest.expression, closest.value, closest.distance
            );
        }
    }
    Ok(())
}
