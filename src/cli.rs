use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use minexpr::{Expression, Optimizer, OptimizerError, OverflowPolicy, SearchConfig};
use num_bigint::BigInt;

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

/// Minexpr - Find the cheapest expression built from `True` for every integer
#[derive(Parser, Debug)]
#[command(name = "minexpr")]
#[command(about = "Find the cheapest expression built from `True` for every reachable integer")]
#[command(version)]
pub struct CliArgs {
    /// Highest score to search up to
    #[arg(short, long, default_value_t = 8)]
    pub ceiling: usize,

    /// Smallest value to print
    #[arg(long, allow_hyphen_values = true)]
    pub min: Option<BigInt>,

    /// Largest value to print
    #[arg(long, allow_hyphen_values = true)]
    pub max: Option<BigInt>,

    /// Print expressions grouped by score instead of ordered by value
    #[arg(long)]
    pub by_score: bool,

    /// Drop oversized candidates instead of stopping the search
    #[arg(long)]
    pub skip_overflow: bool,

    /// Run every round on the current thread
    #[arg(long)]
    pub sequential: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub ceiling: usize,
    pub min: Option<BigInt>,
    pub max: Option<BigInt>,
    pub by_score: bool,
    pub search: SearchConfig,
    pub log_level: LogLevel,
}

impl CliConfig {
    fn in_range(&self, value: &BigInt) -> bool {
        self.min.as_ref().is_none_or(|min| value >= min)
            && self.max.as_ref().is_none_or(|max| value <= max)
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    config_from_args(CliArgs::parse())
}

fn config_from_args(args: CliArgs) -> Result<CliConfig> {
    if let (Some(min), Some(max)) = (&args.min, &args.max)
        && min > max
    {
        anyhow::bail!("--min {} is greater than --max {}", min, max);
    }

    let overflow_policy = if args.skip_overflow {
        OverflowPolicy::Skip
    } else {
        OverflowPolicy::Abort
    };

    Ok(CliConfig {
        ceiling: args.ceiling,
        min: args.min,
        max: args.max,
        by_score: args.by_score,
        search: SearchConfig::new()
            .with_overflow_policy(overflow_policy)
            .with_parallel(!args.sequential),
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

fn format_line(value: &BigInt, expr: &Expression) -> String {
    format!("{} = {}  (score {})", value, expr, expr.score())
}

/// Run rounds until the ceiling, stopping early at the first oversized value
fn search(config: &CliConfig) -> Result<Optimizer> {
    let mut optimizer = Optimizer::with_config(config.search);

    match optimizer.run_to(config.ceiling) {
        Ok(admitted) => info!(
            "Reached ceiling {} with {} values ({} found by search)",
            optimizer.current_ceiling(),
            optimizer.discovered(),
            admitted
        ),
        Err(OptimizerError::Arithmetic(e)) if e.is_overflow() => warn!(
            "Stopping at ceiling {}: {}",
            optimizer.current_ceiling(),
            e
        ),
        Err(e) => {
            return Err(e).with_context(|| {
                format!("Round {} failed", optimizer.current_ceiling() + 1)
            });
        }
    }

    Ok(optimizer)
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    info!("Searching for cheapest expressions up to score {}", config.ceiling);
    let optimizer = search(&config)?;

    if config.by_score {
        for (score, exprs) in optimizer.snapshot_by_score() {
            println!("# score {}", score);
            for expr in exprs {
                let value = expr.evaluate().context("Admitted expression failed to evaluate")?;
                if config.in_range(value) {
                    println!("{}", format_line(value, &expr));
                }
            }
        }
    } else {
        for (value, expr) in optimizer.snapshot_by_value() {
            if config.in_range(&value) {
                println!("{}", format_line(&value, &expr));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CliArgs {
        CliArgs {
            ceiling: 4,
            min: None,
            max: None,
            by_score: false,
            skip_overflow: false,
            sequential: false,
            log_level: LogLevel::Warn,
        }
    }

    #[test]
    fn test_cli_args_parsing() {
        let parsed = CliArgs::try_parse_from([
            "minexpr",
            "--ceiling",
            "5",
            "--min",
            "-3",
            "--skip-overflow",
        ]);
        assert!(parsed.is_ok());
        if let Ok(parsed) = parsed {
            assert_eq!(parsed.ceiling, 5);
            assert_eq!(parsed.min, Some(BigInt::from(-3)));
            assert!(parsed.skip_overflow);
            assert!(!parsed.sequential);
            assert!(matches!(parsed.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_config_from_args() {
        let mut raw = args();
        raw.skip_overflow = true;
        raw.sequential = true;
        let config = config_from_args(raw);
        assert!(config.is_ok());
        if let Ok(config) = config {
            assert_eq!(config.search.overflow_policy, OverflowPolicy::Skip);
            assert!(!config.search.parallel);
        }
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let mut raw = args();
        raw.min = Some(BigInt::from(5));
        raw.max = Some(BigInt::from(-5));
        assert!(config_from_args(raw).is_err());
    }

    #[test]
    fn test_range_filter() {
        let mut raw = args();
        raw.min = Some(BigInt::from(-1));
        raw.max = Some(BigInt::from(2));
        let config = config_from_args(raw);
        assert!(config.is_ok());
        if let Ok(config) = config {
            assert!(config.in_range(&BigInt::from(-1)));
            assert!(config.in_range(&BigInt::from(2)));
            assert!(!config.in_range(&BigInt::from(3)));
        }
    }

    #[test]
    fn test_search_runs_to_ceiling() {
        let config = config_from_args(args());
        assert!(config.is_ok());
        if let Ok(config) = config {
            let optimizer = search(&config);
            assert!(optimizer.is_ok());
            if let Ok(optimizer) = optimizer {
                assert_eq!(optimizer.current_ceiling(), 4);
                assert_eq!(optimizer.discovered(), 8);
            }
        }
    }

    #[test]
    fn test_search_stops_at_first_overflow_and_keeps_data() {
        let mut raw = args();
        raw.ceiling = 12;
        let config = config_from_args(raw);
        assert!(config.is_ok());
        if let Ok(config) = config {
            let optimizer = search(&config);
            assert!(optimizer.is_ok());
            if let Ok(optimizer) = optimizer {
                assert_eq!(optimizer.current_ceiling(), 10);
                assert!(optimizer.discovered() > 8);
            }
        }
    }

    #[test]
    fn test_format_line() {
        let t = Expression::base();
        assert_eq!(format_line(&BigInt::from(1), &t), "1 = True  (score 1)");
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
