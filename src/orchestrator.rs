//! Diagnostic run orchestration.
//!
//! Coordinates the whole loop for each phrase: synthesize a clip, feed it to
//! the recognition chain, record the raw payload, collect the summary row.
//! One bad phrase never aborts the run.

use crate::config::Settings;
use crate::error::Result;
use crate::google;
use crate::report::RunRecorder;
use crate::synthesis::{GoogleTranslateSynthesizer, SpeechSynthesizer};
use crate::transcription::{
    FallbackRecognizer, Recognizer, SpeechV1Recognizer, SpeechV2Recognizer, TranscriptionRecord,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// The main runner for the diagnostic loop.
pub struct DiagnosticRunner {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    recognizer: FallbackRecognizer,
    audio_dir: PathBuf,
    recorder: RunRecorder,
}

impl DiagnosticRunner {
    /// Create a runner from settings and the environment.
    ///
    /// The v2 backend joins the chain only when a recognizer resource is
    /// configured; v1 is always present as the floor.
    pub fn new(settings: &Settings) -> Result<Self> {
        let synthesizer: Arc<dyn SpeechSynthesizer> =
            Arc::new(GoogleTranslateSynthesizer::with_config(
                &settings.synthesis.language,
                &settings.synthesis.endpoint,
                settings.synthesis.timeout(),
            ));

        let primary: Option<Arc<dyn Recognizer>> = match google::recognizer_from_env() {
            Some(recognizer) => {
                info!("Primary backend: v2 recognizer {}", recognizer);
                Some(Arc::new(SpeechV2Recognizer::with_config(
                    &recognizer,
                    &settings.recognition.language_code,
                    &settings.recognition.endpoint,
                    settings.recognition.timeout(),
                )?))
            }
            None => {
                info!(
                    "{} is not set, recognizing with v1 only",
                    google::RECOGNIZER_ENV
                );
                None
            }
        };

        // The synthesizer writes MP3, so that is what v1 gets told to expect.
        let secondary: Arc<dyn Recognizer> = Arc::new(SpeechV1Recognizer::with_config(
            &settings.recognition.language_code,
            "MP3",
            &settings.recognition.endpoint,
            settings.recognition.timeout(),
        )?);

        Ok(Self {
            synthesizer,
            recognizer: FallbackRecognizer::new(primary, secondary),
            audio_dir: settings.audio_dir(),
            recorder: RunRecorder::new(settings.results_dir()),
        })
    }

    /// Create a runner with custom components.
    pub fn with_components(
        synthesizer: Arc<dyn SpeechSynthesizer>,
        recognizer: FallbackRecognizer,
        audio_dir: PathBuf,
        results_dir: PathBuf,
    ) -> Self {
        Self {
            synthesizer,
            recognizer,
            audio_dir,
            recorder: RunRecorder::new(results_dir),
        }
    }

    /// Whether a primary (v2) backend is in the chain.
    pub fn has_primary(&self) -> bool {
        self.recognizer.has_primary()
    }

    /// Run the diagnostic over a phrase corpus.
    ///
    /// Phrases are processed sequentially in corpus order. A phrase that
    /// fails anywhere (synthesis or both recognition backends) is counted
    /// and skipped; its index stays burned so clip numbers always line up
    /// with corpus positions. The CSV summary is written even when every
    /// phrase fails.
    ///
    /// Both output directories are created before the first phrase, so an
    /// unwritable one fails the run before any backend is called.
    #[instrument(skip(self, phrases), fields(phrases = phrases.len()))]
    pub async fn run(&self, phrases: &[String]) -> Result<RunSummary> {
        std::fs::create_dir_all(&self.audio_dir)?;
        std::fs::create_dir_all(self.recorder.results_dir())?;

        let mut records = Vec::new();
        let mut failures = 0;

        for (index, phrase) in phrases.iter().enumerate() {
            let clip_name = format!("{:02}.mp3", index);
            let clip_path = self.audio_dir.join(&clip_name);
            eprintln!("  [{}/{}] {}", index + 1, phrases.len(), phrase);

            match self.process_phrase(index, phrase, &clip_path, &clip_name).await {
                Ok(record) => records.push(record),
                Err(e) => {
                    failures += 1;
                    warn!("Skipping {} ({}): {}", clip_name, phrase, e);
                }
            }
        }

        let csv_path = self.recorder.write_summary(&records)?;
        info!("Wrote summary to {}", csv_path.display());

        Ok(RunSummary {
            records,
            failures,
            csv_path,
        })
    }

    /// Process one phrase end to end.
    async fn process_phrase(
        &self,
        index: usize,
        phrase: &str,
        clip_path: &Path,
        clip_name: &str,
    ) -> Result<TranscriptionRecord> {
        self.synthesizer.synthesize(phrase, clip_path).await?;
        let audio = tokio::fs::read(clip_path).await?;

        let (recognition, backend) = self.recognizer.recognize(&audio, clip_name).await?;
        self.recorder.write_payload(index, backend, &recognition.payload)?;

        Ok(TranscriptionRecord::new(
            Some(phrase.to_string()),
            recognition,
            backend,
        ))
    }
}

/// Result of a diagnostic run.
#[derive(Debug)]
pub struct RunSummary {
    /// Records for phrases that completed.
    pub records: Vec<TranscriptionRecord>,
    /// Number of phrases skipped after errors.
    pub failures: usize,
    /// Where the CSV summary was written.
    pub csv_path: PathBuf,
}
