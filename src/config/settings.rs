//! Configuration settings for Kvitre.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub paths: PathSettings,
    pub synthesis: SynthesisSettings,
    pub recognition: RecognitionSettings,
    pub chirp: ChirpSettings,
}

/// Working-directory layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSettings {
    /// Directory for synthesized audio clips.
    pub audio_dir: String,
    /// Directory for raw payloads and the CSV summary.
    pub results_dir: String,
    /// File listing the phrase corpus, one phrase per line.
    pub phrases_file: String,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            audio_dir: "audio".to_string(),
            results_dir: "results".to_string(),
            phrases_file: "phrases.txt".to_string(),
        }
    }
}

/// Text-to-speech settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisSettings {
    /// Language tag passed to the TTS endpoint.
    pub language: String,
    /// TTS endpoint URL.
    pub endpoint: String,
    /// Request timeout in seconds. None uses the client default.
    pub timeout_secs: Option<u64>,
}

impl Default for SynthesisSettings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            endpoint: crate::synthesis::gtts::DEFAULT_ENDPOINT.to_string(),
            timeout_secs: None,
        }
    }
}

impl SynthesisSettings {
    /// The configured request timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Speech recognition settings, shared by both API versions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognitionSettings {
    /// Language code sent to the Speech APIs.
    pub language_code: String,
    /// Speech API host, without a version suffix.
    pub endpoint: String,
    /// Request timeout in seconds. None uses the client default.
    pub timeout_secs: Option<u64>,
}

impl Default for RecognitionSettings {
    fn default() -> Self {
        Self {
            language_code: "en-US".to_string(),
            endpoint: crate::transcription::v2::DEFAULT_ENDPOINT.to_string(),
            timeout_secs: None,
        }
    }
}

impl RecognitionSettings {
    /// The configured request timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Default parameters for generated chirp waveforms.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChirpSettings {
    /// Samples per second.
    pub sample_rate: u32,
    /// Duration in seconds.
    pub duration: f64,
    /// Start frequency in Hz.
    pub start_freq: f64,
    /// End frequency in Hz.
    pub end_freq: f64,
}

impl Default for ChirpSettings {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            duration: 1.0,
            start_freq: 500.0,
            end_freq: 1500.0,
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to the default configuration file.
    pub fn save(&self) -> crate::error::Result<()> {
        self.save_to(&Self::default_config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::KvitreError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("kvitre")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// Get the expanded audio directory path.
    pub fn audio_dir(&self) -> PathBuf {
        Self::expand_path(&self.paths.audio_dir)
    }

    /// Get the expanded results directory path.
    pub fn results_dir(&self) -> PathBuf {
        Self::expand_path(&self.paths.results_dir)
    }

    /// Get the expanded phrases file path.
    pub fn phrases_file(&self) -> PathBuf {
        Self::expand_path(&self.paths.phrases_file)
    }
}
