//! `foil-bridge`: reads one JSON analysis request and writes one JSON response.
//!
//! The request comes from stdin (or `--input`) and the response goes to
//! stdout. Logs go to stderr so stdout only ever carries the response object.
//! The exit code is 0 on success and 1 on any failure.

use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum, error::ErrorKind};
use tracing::{Level, error};
use tracing_subscriber::FmtSubscriber;

use foil_models::{
    bridge::{self, Response},
    models::aero::{AlphaSolverConfig, Strategy},
};

/// Airfoil polar bridge
#[derive(Parser)]
#[command(name = "foil-bridge")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Runs one airfoil polar request from JSON", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Read the request from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Pretty-print the response
    #[arg(long)]
    pretty: bool,

    /// Maximum model evaluations per lift target
    #[arg(long)]
    max_iters: Option<usize>,

    /// Convergence tolerance on the lift coefficient
    #[arg(long)]
    cl_tol: Option<f64>,

    /// Alpha update strategy
    #[arg(long, value_enum, default_value_t = StrategyArg::FixedGain)]
    strategy: StrategyArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    FixedGain,
    Secant,
    Bisection,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::FixedGain => Strategy::FixedGain,
            StrategyArg::Secant => Strategy::Secant,
            StrategyArg::Bisection => Strategy::Bisection,
        }
    }
}

impl Cli {
    fn solver_config(&self) -> AlphaSolverConfig {
        let defaults = AlphaSolverConfig::default();
        AlphaSolverConfig {
            max_iters: self.max_iters.unwrap_or(defaults.max_iters),
            cl_tol: self.cl_tol.unwrap_or(defaults.cl_tol),
            strategy: self.strategy.into(),
            ..defaults
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            return emit(&Response::failure_message(err.to_string().trim_end()), false);
        }
    };

    if let Err(err) = init_logging(&cli.log_level) {
        return emit(&Response::failure_message(format!("{err:#}")), cli.pretty);
    }

    let response = match read_input(cli.input.as_deref()) {
        Ok(input) => bridge::respond(&input, &cli.solver_config()),
        Err(err) => Response::failure(&*err),
    };
    if let Some(message) = &response.error {
        error!("{message}");
    }
    emit(&response, cli.pretty)
}

fn init_logging(log_level: &str) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read request from {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read request from stdin")?;
            Ok(input)
        }
    }
}

fn emit(response: &Response, pretty: bool) -> ExitCode {
    if let Err(err) = write_response(response, pretty) {
        eprintln!("foil-bridge: {err:#}");
        return ExitCode::FAILURE;
    }
    if response.polar.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn write_response(response: &Response, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(response)
    } else {
        serde_json::to_string(response)
    }
    .context("failed to serialize response")?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}").context("failed to write response")?;
    stdout.flush().context("failed to write response")?;
    Ok(())
}
