//! Kvitre - Speech Recognition Diagnostics
//!
//! A CLI harness for comparing cloud speech-to-text backends against synthesized
//! test audio.
//!
//! The name "Kvitre" comes from the Norwegian word for "chirp."
//!
//! # Overview
//!
//! Kvitre allows you to:
//! - Synthesize a phrase corpus into audio clips
//! - Transcribe each clip against Google Speech v2, falling back to v1
//! - Record raw API payloads and a CSV summary for side-by-side comparison
//! - Generate chirp sweep tones for audio pipeline testing
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `corpus` - Phrase corpus loading
//! - `synthesis` - Text-to-speech backends
//! - `transcription` - Speech-to-text backends and fallback
//! - `chirp` - Sweep tone generation
//! - `batch` - Placeholder records for pre-recorded clips
//! - `report` - Raw payload and CSV summary recording
//! - `orchestrator` - Diagnostic run coordination
//!
//! # Example
//!
//! ```rust,no_run
//! use kvitre::config::Settings;
//! use kvitre::orchestrator::DiagnosticRunner;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let runner = DiagnosticRunner::new(&settings)?;
//!
//!     let phrases = kvitre::corpus::read_phrases(&settings.phrases_file())?;
//!     let summary = runner.run(&phrases).await?;
//!     println!("{} phrases transcribed", summary.records.len());
//!
//!     Ok(())
//! }
//! ```

pub mod batch;
pub mod chirp;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod google;
pub mod orchestrator;
pub mod report;
pub mod synthesis;
pub mod transcription;

pub use error::{KvitreError, Result};
