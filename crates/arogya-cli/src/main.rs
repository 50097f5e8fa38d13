//! Arogya CLI: entry point.
//!
//! # Commands
//!
//! - `arogya transcribe FILE [--json]`: Hinglish speech-to-text for a WAV recording
//! - `arogya analyze-wound FILE [--json]`: wound assessment for a photo
//! - `arogya status`: show configuration and credential status
//!
//! A `.env` file in the working directory is loaded before the environment
//! is read, so `SARVAM_API_KEY` can live there.

mod helpers;
mod status;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use arogya_core::config::load_config;
use arogya_providers::{SarvamManager, SpeechToText, WoundAnalyzer};

// ─────────────────────────────────────────────
// CLI definition
// ─────────────────────────────────────────────

/// Arogya: Hinglish transcription and wound assessment on Sarvam AI
#[derive(Parser)]
#[command(name = "arogya", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transcribe a mixed Hindi/English WAV recording
    Transcribe {
        /// Path to the WAV file
        file: PathBuf,

        /// Print `{"transcript": ..., "status": ...}` instead of plain text
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Enable debug logging
        #[arg(long, default_value_t = false)]
        logs: bool,
    },

    /// Assess a wound photo for redness, swelling, or infection
    AnalyzeWound {
        /// Path to the image (JPEG)
        file: PathBuf,

        /// Print `{"analysis": ..., "status": ...}` instead of plain text
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Enable debug logging
        #[arg(long, default_value_t = false)]
        logs: bool,
    },

    /// Show configuration and credential status
    Status,
}

// ─────────────────────────────────────────────
// Entrypoint
// ─────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Missing .env is not an error.
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    match cli.command {
        Commands::Transcribe { file, json, logs } => {
            init_logging(logs);
            log_dotenv(&dotenv);
            let manager = build_manager()?;
            run_transcribe(&manager, &file, json).await
        }
        Commands::AnalyzeWound { file, json, logs } => {
            init_logging(logs);
            log_dotenv(&dotenv);
            let manager = build_manager()?;
            run_analyze(&manager, &file, json).await
        }
        Commands::Status => {
            status::run();
            Ok(ExitCode::SUCCESS)
        }
    }
}

// ─────────────────────────────────────────────
// Commands
// ─────────────────────────────────────────────

/// Build a `SarvamManager` from the loaded configuration and `SARVAM_API_KEY`.
fn build_manager() -> Result<SarvamManager> {
    let config = load_config(None);
    SarvamManager::from_env(config.sarvam).context("failed to initialize Sarvam client")
}

async fn run_transcribe(stt: &dyn SpeechToText, file: &Path, json: bool) -> Result<ExitCode> {
    let audio = helpers::read_input(file)?;
    debug!(provider = stt.display_name(), bytes = audio.len(), "transcribing");
    let outcome = stt.transcribe(&audio).await;
    helpers::print_outcome("transcript", &outcome, json);
    Ok(ExitCode::from(helpers::exit_status(&outcome)))
}

async fn run_analyze(analyzer: &dyn WoundAnalyzer, file: &Path, json: bool) -> Result<ExitCode> {
    let image = helpers::read_input(file)?;
    debug!(provider = analyzer.display_name(), bytes = image.len(), "analyzing");
    let outcome = analyzer.analyze(&image).await;
    helpers::print_outcome("analysis", &outcome, json);
    Ok(ExitCode::from(helpers::exit_status(&outcome)))
}

/// Initialize tracing/logging.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(helpers::log_directives(verbose)))
        .with_target(false)
        .compact()
        .init();
}

fn log_dotenv(result: &Result<PathBuf, dotenvy::Error>) {
    match result {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "failed to load .env"),
    }
}
