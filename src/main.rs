//! Solve a polynomial equation of degree two or less from the command line.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use computor::{algebra::TermOrder, render, RenderOptions};
use env_logger::Env;

/// Reduce and solve a polynomial equation in X of degree two or less.
#[derive(Debug, Parser)]
#[command(
    name = "computor",
    version,
    after_help = r#"Examples:
  computor "5 * X^0 + 4 * X^1 - 9.3 * X^2 = 1 * X^0"
  computor -v "x2 - 6x + 34 = 0"
  computor --reverse "2x = 3x2"

Environment Variables:
  COMPUTOR_VERBOSE=1           Show each step of the derivation
  COMPUTOR_LOG_LEVEL=debug     Set log level (error, warn, info, debug, trace)
  COMPUTOR_DEBUG=1             Enable debug logging
"#
)]
struct Cli {
    /// The equation to solve, e.g. "x^2 - 4 = 0"
    #[arg(allow_hyphen_values = true)]
    expression: String,

    /// Show each step of the derivation
    #[arg(short, long, env = "COMPUTOR_VERBOSE")]
    verbose: bool,

    /// Only print the solution, even when --verbose is set
    #[arg(short, long)]
    silent: bool,

    /// Write the reduced form with the highest power first
    #[arg(short, long)]
    reverse: bool,

    /// Enable debug logging
    #[arg(short, long, env = "COMPUTOR_DEBUG")]
    debug: bool,

    /// Set log level, overriding RUST_LOG
    #[arg(long, value_enum, env = "COMPUTOR_LOG_LEVEL")]
    log_level: Option<LogLevel>,
}

impl Cli {
    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            verbose: self.verbose,
            silent: self.silent,
            order: if self.reverse {
                TermOrder::Descending
            } else {
                TermOrder::Ascending
            },
        }
    }
}

#[derive(Debug, Copy, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(Env::default().default_filter_or("warn"));

    if cli.debug {
        builder.filter_level(log::LevelFilter::Debug);
    } else if let Some(level) = cli.log_level {
        builder.filter_level(level.into());
    }

    builder.init();

    log::info!("computor v{} starting", env!("CARGO_PKG_VERSION"));

    let report = render(&cli.expression, &cli.render_options());

    for line in &report.lines {
        println!("{}", line);
    }

    match report.error {
        Some(e) => Err(e)
            .with_context(|| format!("Unable to solve \"{}\"", cli.expression)),
        None => Ok(()),
    }
}
