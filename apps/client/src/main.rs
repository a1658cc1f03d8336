mod output;

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use analyzer_client::render::{drop_zone_label, result_view};
use analyzer_client::{AnalyzerState, DroppedFile, GatewayClient, Phase};

/// Classify a resume through the Resume Analyzer gateway.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base address of the gateway
    #[arg(long, env = "ANALYZER_GATEWAY_URL", default_value = "http://localhost:3001")]
    gateway_url: String,

    /// Resume text to analyze (read from stdin when neither --text nor --file is given)
    #[arg(long, conflicts_with = "file")]
    text: Option<String>,

    /// PDF or DOCX resume; only its name is sent, contents are not extracted
    #[arg(long)]
    file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api = GatewayClient::new(&cli.gateway_url)?;
    let mut state = AnalyzerState::new();

    if let Some(path) = &cli.file {
        let file = DroppedFile::from_path(path)
            .with_context(|| format!("Cannot open {}", path.display()))?;
        state.drop_files(vec![file])?;
        output::print_drop_zone(&drop_zone_label(&state));
    } else if let Some(text) = cli.text {
        state.set_text(text);
    } else {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read resume text from stdin")?;
        state.set_text(text);
    }

    let mut spinner = None;
    let phase = state
        .submit_observed(&api, |phase| match phase {
            Phase::Loading => spinner = Some(output::spinner("Analyzing...")),
            _ => {
                if let Some(spinner) = spinner.take() {
                    spinner.finish_and_clear();
                }
            }
        })
        .await;

    match phase {
        Phase::Succeeded(result) => {
            output::print_result(&result_view(result));
            Ok(ExitCode::SUCCESS)
        }
        Phase::Failed(message) => {
            output::print_error(message);
            Ok(ExitCode::FAILURE)
        }
        Phase::Idle | Phase::Loading => {
            tracing::warn!("Submission ended without an outcome");
            Ok(ExitCode::FAILURE)
        }
    }
}
