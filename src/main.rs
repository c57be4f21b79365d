//! TOPSIS Rank command line.
//!
//! ```bash
//! topsis-rank data.csv "1,1,1,2" "+,+,-,+" result.csv
//! topsis-rank data.csv "1,1,1,2" "+,+,-,+" result.csv --ranking-method average --precision 6
//! ```
//!
//! Configuration is also read from `TOPSIS__*` environment variables;
//! flags take precedence.

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::debug;

use topsis_rank::adapters::LocalCsvTableStorage;
use topsis_rank::application::{RankAlternativesCommand, RankAlternativesHandler};
use topsis_rank::config::AppConfig;
use topsis_rank::domain::analysis::RankingMethod;

/// Rank alternatives by closeness to the ideal solution (TOPSIS).
#[derive(Parser, Debug)]
#[command(name = "topsis-rank", version)]
#[command(about = "Rank alternatives in a CSV decision matrix using TOPSIS")]
struct Args {
    /// CSV file: first column labels, remaining columns numeric criteria.
    input: PathBuf,

    /// Comma-separated weights, one per criterion (e.g. "1,1,2").
    #[arg(allow_hyphen_values = true)]
    weights: String,

    /// Comma-separated impacts, '+' or '-' per criterion (e.g. "+,+,-").
    #[arg(allow_hyphen_values = true)]
    impacts: String,

    /// Destination CSV with "Topsis Score" and "Rank" columns appended.
    output: PathBuf,

    /// Tie policy for ranks: competition or average.
    #[arg(long)]
    ranking_method: Option<RankingMethod>,

    /// Fixed number of decimals for the score column.
    #[arg(long)]
    precision: Option<usize>,

    /// Print the ranking as JSON instead of a confirmation line.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut config = AppConfig::load()?;
    if let Some(method) = args.ranking_method {
        config.scoring.ranking_method = method;
    }
    if let Some(precision) = args.precision {
        config.scoring.score_precision = Some(precision);
    }
    config.validate()?;
    config.logging.init()?;

    let handler = RankAlternativesHandler::new(
        Arc::new(LocalCsvTableStorage::new()),
        config.scoring.clone(),
    );
    let command = RankAlternativesCommand {
        input: args.input,
        output: args.output,
        weights: args.weights,
        impacts: args.impacts,
    };

    let result = handler.handle(command).await.map_err(|e| {
        debug!(code = %e.code(), "Ranking failed");
        e
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result.summary)?);
    } else {
        println!("Results saved to {}", result.output_path);
    }
    Ok(())
}
