//! Saddle point CLI.
//!
//! Prints a payoff matrix followed by its pure-strategy analysis.
//!
//! ```text
//! saddle-point                         # built-in "classic" example
//! saddle-point --example dominant
//! saddle-point --file game.json        # JSON array of rows
//! saddle-point --file game.json --json # analysis as JSON
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use saddle_point::games::examples;
use saddle_point::{MatrixError, PayoffAnalyzer, PayoffMatrix};

/// Find pure strategy equilibria of a zero-sum matrix game
#[derive(Parser)]
#[command(name = "saddle-point")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Built-in example game (classic, dominant, crossing)
    #[arg(short, long, default_value = "classic", conflicts_with = "file")]
    example: String,

    /// JSON file holding the payoff matrix as an array of rows
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Print the analysis as JSON instead of a text report
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Resolve the matrix to analyze. Validation failures come back as
/// `MatrixError` so they can be reported as user errors.
fn load_matrix(cli: &Cli) -> anyhow::Result<Result<PayoffMatrix, MatrixError>> {
    match &cli.file {
        Some(path) => {
            info!(path = %path.display(), "loading payoff matrix");
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let rows: Vec<Vec<f64>> = serde_json::from_str(&text)
                .with_context(|| format!("parsing {} as a JSON array of rows", path.display()))?;
            Ok(PayoffMatrix::new(rows))
        }
        None => {
            debug!(example = %cli.example, "using built-in example");
            examples::by_name(&cli.example).map(Ok).ok_or_else(|| {
                anyhow!(
                    "unknown example '{}' (expected one of: {})",
                    cli.example,
                    examples::NAMES.join(", ")
                )
            })
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let matrix = match load_matrix(cli)? {
        Ok(matrix) => matrix,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    let game = PayoffAnalyzer::from_matrix(matrix);

    println!("{}", render(&game, cli.json)?);
    Ok(ExitCode::SUCCESS)
}

/// Stdout text: pretty JSON analysis, or the matrix followed by the report.
fn render(game: &PayoffAnalyzer, json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(&game.analysis())?);
    }
    Ok(format!(
        "Payoff Matrix:\n{}\n\n{}",
        game.matrix(),
        game.analyze_game()
    ))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
