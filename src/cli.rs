use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use moj_broj::solver::constants::{MAX_DEPTH, PRUNE_THRESHOLD};
use moj_broj::{
    ExpressionSolver, Solution, SolverConfig, evaluate, parse_numbers, validate_numbers,
};

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

/// Moj broj - Combine numbers with + - × ÷ to reach a target
#[derive(Parser, Debug)]
#[command(name = "moj-broj")]
#[command(
    about = "Find an arithmetic expression over the given numbers that reaches the target, or the closest one"
)]
#[command(version)]
pub struct CliArgs {
    /// Numbers available for combination (blank or invalid entries are skipped)
    #[arg(required = true)]
    pub numbers: Vec<String>,

    /// Target value to reach; repeat to solve several targets
    #[arg(short, long, required = true, allow_negative_numbers = true)]
    pub target: Vec<i64>,

    /// Combination steps after which a state is no longer expanded
    #[arg(long, default_value_t = MAX_DEPTH)]
    pub max_depth: usize,

    /// Skip candidates farther from the target than this multiple of the best distance
    #[arg(long, default_value_t = PRUNE_THRESHOLD)]
    pub prune_threshold: u64,

    /// Re-evaluate each printed expression and fail on mismatch
    #[arg(long)]
    pub verify: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub numbers: Vec<u64>,
    pub targets: Vec<i64>,
    pub solver: SolverConfig,
    pub verify: bool,
    pub log_level: LogLevel,
}

/// Turn parsed arguments into a validated configuration
pub fn build_config(args: CliArgs) -> Result<CliConfig> {
    let numbers = parse_numbers(args.numbers.as_slice());
    validate_numbers(&numbers).context("Invalid numbers")?;

    Ok(CliConfig {
        numbers,
        targets: args.target,
        solver: SolverConfig {
            max_depth: args.max_depth,
            prune_threshold: args.prune_threshold,
        },
        verify: args.verify,
        log_level: args.log_level,
    })
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    build_config(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Check that `solution.expression` evaluates to `solution.value`
pub fn verify_solution(solution: &Solution) -> Result<()> {
    if solution.expression.is_empty() {
        return Ok(());
    }

    let value = evaluate(&solution.expression)
        .with_context(|| format!("Could not evaluate '{}'", solution.expression))?;
    if value != i128::from(solution.value) {
        bail!(
            "Expression '{}' evaluates to {}, expected {}",
            solution.expression,
            value,
            solution.value
        );
    }
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let solver = ExpressionSolver::new(config.solver);

    info!(
        "Solving {} target(s) using numbers {:?}",
        config.targets.len(),
        config.numbers
    );

    let solutions = solver
        .solve_many(&config.numbers, &config.targets)
        .context("Search failed")?;

    for (target, solution) in config.targets.iter().zip(&solutions) {
        if config.verify {
            verify_solution(solution)?;
        }

        if !solution.is_exact(*target) {
            warn!("No exact solution for {}, closest is {}", target, solution.value);
        }

        if config.targets.len() > 1 {
            println!("{}:", target);
        }
        println!("{}", solution.value);
        println!("{}", solution.expression);
    }

    Ok(())
}
