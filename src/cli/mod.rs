//! CLI module for Kvitre.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Kvitre - Speech Recognition Diagnostics
///
/// A CLI harness for comparing cloud speech-to-text backends against synthesized
/// test audio. The name "Kvitre" comes from the Norwegian word for "chirp."
#[derive(Parser, Debug)]
#[command(name = "kvitre")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize Kvitre and set up the working directory
    Init,

    /// Check credentials and configuration
    Doctor,

    /// Synthesize the phrase corpus and transcribe it against the Speech APIs
    Run {
        /// Phrase corpus file (overrides the configured path)
        #[arg(short, long)]
        phrases: Option<String>,
    },

    /// Generate a linear chirp WAV file
    Chirp {
        /// Output WAV file path (default: <audio_dir>/chirp.wav)
        #[arg(short, long)]
        out: Option<String>,

        /// Samples per second
        #[arg(long)]
        sample_rate: Option<u32>,

        /// Duration in seconds
        #[arg(long)]
        duration: Option<f64>,

        /// Start frequency (Hz)
        #[arg(long)]
        start_freq: Option<f64>,

        /// End frequency (Hz)
        #[arg(long)]
        end_freq: Option<f64>,
    },

    /// Prepare placeholder transcript records for a directory of audio clips
    Batch {
        /// Directory containing input audio files (default: configured audio_dir)
        #[arg(long)]
        audio_dir: Option<String>,

        /// Directory to write transcript JSON records
        #[arg(long, default_value = "json")]
        json_dir: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "recognition.language_code")
        key: String,
        /// Configuration value
        value: String,
    },

    /// Open configuration file in editor
    Edit,

    /// Show configuration file path
    Path,
}
