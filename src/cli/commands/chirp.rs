//! Chirp command implementation.

use crate::chirp::{self, ChirpSpec};
use crate::cli::Output;
use crate::config::Settings;
use anyhow::Result;

/// Run the chirp command. Flags override the configured defaults.
pub fn run_chirp(
    out: Option<String>,
    sample_rate: Option<u32>,
    duration: Option<f64>,
    start_freq: Option<f64>,
    end_freq: Option<f64>,
    settings: &Settings,
) -> Result<()> {
    let out_path = match out {
        Some(path) => Settings::expand_path(&path),
        None => settings.audio_dir().join("chirp.wav"),
    };

    let spec = ChirpSpec::new(
        sample_rate.unwrap_or(settings.chirp.sample_rate),
        duration.unwrap_or(settings.chirp.duration),
        start_freq.unwrap_or(settings.chirp.start_freq),
        end_freq.unwrap_or(settings.chirp.end_freq),
    );

    chirp::generate_chirp_wav(&spec, &out_path)?;

    Output::success(&format!("Successfully generated '{}'", out_path.display()));
    Output::kv(
        "Sweep",
        &format!(
            "{} Hz to {} Hz over {} s",
            spec.start_freq, spec.end_freq, spec.duration
        ),
    );
    Output::kv(
        "Samples",
        &format!("{} at {} Hz", spec.sample_count(), spec.sample_rate),
    );

    Ok(())
}
