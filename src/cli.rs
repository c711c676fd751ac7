use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use countdown_numbers::utils::format_count;
use countdown_numbers::{ChosenNumbers, NumbersSolver, SearchReport, SolveMode, Solution, Target};
use log::{info, warn};

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

/// Countdown numbers - Solve the numbers round exhaustively
#[derive(Parser, Debug)]
#[command(name = "countdown-numbers")]
#[command(about = "Find arithmetic expressions over six chosen numbers that hit a target exactly")]
#[command(version)]
pub struct CliArgs {
    /// Target number (0-999)
    pub target: i64,

    /// The six chosen numbers: 1-10 (repeats allowed) or 25, 50, 75, 100 (once each)
    #[arg(required = true, num_args = 6)]
    pub numbers: Vec<i64>,

    /// Solution mode: first, all or intuitive (f/a/i)
    #[arg(short, long, default_value = "first")]
    pub mode: SolveMode,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub target: Target,
    pub numbers: ChosenNumbers,
    pub mode: SolveMode,
    pub log_level: LogLevel,
}

impl CliConfig {
    /// Validate parsed arguments against the rules of the round
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let target = Target::new(args.target).context("Invalid target number")?;
        let numbers = ChosenNumbers::new(args.numbers).context("Invalid chosen numbers")?;

        Ok(Self {
            target,
            numbers,
            mode: args.mode,
            log_level: args.log_level,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliConfig::from_args(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

fn echo_lines(config: &CliConfig) -> Vec<String> {
    let numbers: Vec<String> = config
        .numbers
        .as_slice()
        .iter()
        .map(|n| n.to_string())
        .collect();
    vec![
        format!("Target is {}.", config.target.value()),
        format!("Numbers are {}.", numbers.join(", ")),
    ]
}

/// Line printed when a solution is accepted during an exhaustive search
fn found_line(solution: &Solution, mode: SolveMode) -> String {
    match mode {
        SolveMode::MostIntuitive => format!(
            "Found solution: {} [intuition score: {}]",
            solution.expression, solution.intuition_score
        ),
        SolveMode::First | SolveMode::All => format!("Found solution: {}", solution.expression),
    }
}

fn no_solution_line(report: &SearchReport) -> String {
    format!("No solution after {} attempts", format_count(report.attempts))
}

/// Closing lines for a finished search
fn summary_lines(report: &SearchReport) -> Vec<String> {
    match report.mode {
        SolveMode::First => match report.first() {
            Some(solution) => vec![
                format!("Solved after {} attempts.", format_count(report.attempts)),
                solution.expression.to_string(),
            ],
            None => vec![no_solution_line(report)],
        },
        SolveMode::All => {
            let count = report.solution_count();
            if count == 0 {
                vec![no_solution_line(report)]
            } else {
                vec![format!(
                    "Found {} solution{} in {} attempts",
                    format_count(count as u64),
                    if count == 1 { "" } else { "s" },
                    format_count(report.attempts)
                )]
            }
        }
        SolveMode::MostIntuitive => match report.most_intuitive() {
            Some(best) => vec![format!("Most intuitive solution: {}", best.expression)],
            None => vec![no_solution_line(report)],
        },
    }
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    for line in echo_lines(&config) {
        println!("{}", line);
    }

    info!("Solving in {} mode", config.mode);

    let solver = NumbersSolver::new();
    let mode = config.mode;
    let report = solver
        .solve_with(config.target, &config.numbers, mode, |solution| {
            if mode.is_exhaustive() {
                println!("{}", found_line(solution, mode));
            }
        })
        .context("Search failed")?;

    if !report.is_solved() {
        warn!("No matching expression found");
    }

    for line in summary_lines(&report) {
        println!("{}", line);
    }
    Ok(())
}
