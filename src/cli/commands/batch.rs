//! Batch command implementation.

use crate::batch;
use crate::cli::Output;
use crate::config::Settings;
use anyhow::Result;

/// Run the batch command: discover clips and lay down placeholder records.
pub fn run_batch(audio_dir: Option<String>, json_dir: &str, settings: &Settings) -> Result<()> {
    let audio_dir = match &audio_dir {
        Some(dir) => Settings::expand_path(dir),
        None => settings.audio_dir(),
    };
    let json_dir = Settings::expand_path(json_dir);

    std::fs::create_dir_all(&audio_dir)?;

    let spinner = Output::spinner(&format!("Scanning {}...", audio_dir.display()));
    let files = batch::discover_audio_files(&audio_dir)?;
    spinner.finish_and_clear();

    if files.is_empty() {
        Output::warning(&format!(
            "No audio found in {}. Add WAV/MP3 and re-run.",
            audio_dir.display()
        ));
        return Ok(());
    }

    let written = batch::write_stub_records(&files, &json_dir)?;

    Output::success(&format!(
        "Prepared {} placeholder record(s) in {}",
        written,
        json_dir.display()
    ));
    Output::info("Batch transcription is not wired up yet; records are marked pending.");

    Ok(())
}
