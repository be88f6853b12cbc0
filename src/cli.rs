use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use countdown_numbers::calculation::evaluate;
use countdown_numbers::solver::constants::DEFAULT_MAX_NUMBERS;
use countdown_numbers::{CountdownSolver, Solution, SolverConfig, parse_number, parse_numbers};
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

/// Countdown - Solve the Countdown numbers game
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(about = "Find the expressions over some of the numbers that come closest to the target")]
#[command(version)]
pub struct CliArgs {
    /// Target value to reach
    #[arg(allow_negative_numbers = true)]
    pub target: String,

    /// Numbers to calculate with, each used at most once
    #[arg(allow_negative_numbers = true)]
    pub numbers: Vec<String>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Build the table on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Largest count of numbers accepted
    #[arg(long, default_value_t = DEFAULT_MAX_NUMBERS)]
    pub max_numbers: usize,

    /// Print at most this many of the closest results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Re-evaluate every printed expression and fail on a mismatch
    #[arg(long)]
    pub verify: bool,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub target: i64,
    pub numbers: Vec<i64>,
    pub log_level: LogLevel,
    pub solver: SolverConfig,
    pub limit: Option<usize>,
    pub verify: bool,
}

/// Validate parsed arguments into a configuration
pub fn build_config(args: CliArgs) -> Result<CliConfig> {
    let target = parse_number(&args.target).context("Invalid target")?;
    let numbers = parse_numbers(&args.numbers).context("Invalid numbers")?;

    Ok(CliConfig {
        target,
        numbers,
        log_level: args.log_level,
        solver: SolverConfig {
            parallel: !args.sequential,
            max_numbers: args.max_numbers,
        },
        limit: args.limit,
        verify: args.verify,
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

/// Render a solution as a header line followed by one `value = expression` line per result
pub fn format_solution(solution: &Solution, limit: Option<usize>) -> Vec<String> {
    let shown = limit.unwrap_or(solution.calculations.len());
    let mut lines = vec![format!(
        "The closest results differ from {} by {}. They are:",
        solution.target, solution.difference
    )];
    lines.extend(
        solution
            .calculations
            .iter()
            .take(shown)
            .map(|calculation| format!("{:#}", calculation)),
    );
    if shown < solution.calculations.len() {
        lines.push(format!(
            "... and {} more",
            solution.calculations.len() - shown
        ));
    }
    lines
}

/// Check that every calculation's expression evaluates back to its value
pub fn verify_solution(solution: &Solution) -> Result<()> {
    for calculation in &solution.calculations {
        let value = evaluate(&calculation.text)
            .with_context(|| format!("Cannot evaluate '{}'", calculation.text))?;
        if value != calculation.value {
            bail!(
                "'{}' evaluates to {}, expected {}",
                calculation.text,
                value,
                calculation.value
            );
        }
    }
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let solver = CountdownSolver::new(config.solver);

    info!(
        "Searching for expressions using {:?} that come closest to {}",
        config.numbers, config.target
    );

    match solver
        .try_solve(config.target, &config.numbers)
        .context("Cannot solve")?
    {
        Some(solution) => {
            if config.verify {
                verify_solution(&solution)?;
                info!("Verified {} expressions", solution.calculations.len());
            }
            for line in format_solution(&solution, config.limit) {
                println!("{}", line);
            }
            Ok(())
        }
        None => {
            warn!("No numbers given");
            println!("No numbers to work with.");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use countdown_numbers::Calculation;

    fn args(target: &str, numbers: &[&str]) -> CliArgs {
        CliArgs {
            target: target.to_string(),
            numbers: numbers.iter().map(|n| n.to_string()).collect(),
            log_level: LogLevel::Warn,
            sequential: false,
            max_numbers: DEFAULT_MAX_NUMBERS,
            limit: None,
            verify: false,
        }
    }

    fn solution() -> Solution {
        Solution {
            target: 30,
            difference: 0,
            calculations: vec![
                Calculation {
                    value: 30,
                    text: "(7 × 3) + 9".to_string(),
                    is_singleton: false,
                },
                Calculation {
                    value: 30,
                    text: "(9 + 1) × 3".to_string(),
                    is_singleton: false,
                },
            ],
        }
    }

    #[test]
    fn test_cli_args_parsing() {
        let parsed = CliArgs::try_parse_from(["countdown", "-5", "25", "-3", "--sequential"]);
        assert!(parsed.is_ok());
        if let Ok(parsed) = parsed {
            assert_eq!(parsed.target, "-5");
            assert_eq!(parsed.numbers, vec!["25", "-3"]);
            assert!(parsed.sequential);
            assert_eq!(parsed.max_numbers, DEFAULT_MAX_NUMBERS);
            assert!(matches!(parsed.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_build_config() {
        let config = build_config(args("952", &["25", "50", "75", "100", "3", "6"]));
        assert!(config.is_ok());
        if let Ok(config) = config {
            assert_eq!(config.target, 952);
            assert_eq!(config.numbers, vec![25, 50, 75, 100, 3, 6]);
            assert!(config.solver.parallel);
        }
    }

    #[test]
    fn test_build_config_rejects_malformed_input() {
        assert!(build_config(args("nine", &["1"])).is_err());
        assert!(build_config(args("9", &["1", "2.5"])).is_err());
    }

    #[test]
    fn test_format_solution() {
        let lines = format_solution(&solution(), None);
        assert_eq!(
            lines,
            vec![
                "The closest results differ from 30 by 0. They are:",
                "30 = (7 × 3) + 9",
                "30 = (9 + 1) × 3",
            ]
        );
    }

    #[test]
    fn test_format_solution_with_limit() {
        let lines = format_solution(&solution(), Some(1));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines.get(2).map(String::as_str), Some("... and 1 more"));
    }

    #[test]
    fn test_verify_solution() {
        assert!(verify_solution(&solution()).is_ok());

        let mut wrong = solution();
        wrong.calculations.push(Calculation {
            value: 31,
            text: "30 + 2".to_string(),
            is_singleton: false,
        });
        assert!(verify_solution(&wrong).is_err());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
