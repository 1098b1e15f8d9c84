//! Kvitre CLI entry point.

use anyhow::Result;
use clap::Parser;
use kvitre::cli::{commands, Cli, Commands};
use kvitre::config::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("kvitre={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::load_from(Some(&std::path::PathBuf::from(path)))?,
        None => Settings::load()?,
    };

    // Execute command
    match &cli.command {
        Commands::Init => {
            commands::run_init(&settings)?;
        }

        Commands::Doctor => {
            commands::run_doctor(&settings)?;
        }

        Commands::Run { phrases } => {
            commands::run_diagnostic(phrases.clone(), settings).await?;
        }

        Commands::Chirp {
            out,
            sample_rate,
            duration,
            start_freq,
            end_freq,
        } => {
            commands::run_chirp(
                out.clone(),
                *sample_rate,
                *duration,
                *start_freq,
                *end_freq,
                &settings,
            )?;
        }

        Commands::Batch { audio_dir, json_dir } => {
            commands::run_batch(audio_dir.clone(), json_dir, &settings)?;
        }

        Commands::Config { action } => {
            commands::run_config(action, settings)?;
        }
    }

    Ok(())
}
