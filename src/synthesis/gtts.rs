//! Text-to-speech via the Google Translate endpoint.
//!
//! The same unauthenticated endpoint the Translate web player uses. It
//! returns an MP3 clip for short phrases, which is exactly the input shape
//! the recognition backends are tested against.

use super::SpeechSynthesizer;
use crate::error::{KvitreError, Result};
use crate::google;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

/// Default Translate TTS endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://translate.google.com/translate_tts";

/// Synthesizer backed by the Google Translate TTS endpoint.
pub struct GoogleTranslateSynthesizer {
    client: Client,
    endpoint: String,
    language: String,
}

impl GoogleTranslateSynthesizer {
    /// Create a synthesizer for English with the default endpoint.
    pub fn new() -> Self {
        Self::with_config("en", DEFAULT_ENDPOINT, None)
    }

    /// Create a synthesizer with a custom language, endpoint, and timeout.
    pub fn with_config(language: &str, endpoint: &str, timeout: Option<Duration>) -> Self {
        let client = match timeout {
            Some(timeout) => google::create_client_with_timeout(timeout),
            None => google::create_client(),
        };

        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            language: language.to_string(),
        }
    }

    /// The language tag sent as the `tl` parameter.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Fetch the MP3 bytes for a phrase.
    async fn fetch(&self, phrase: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", self.language.as_str()),
                ("q", phrase),
            ])
            .send()
            .await
            .map_err(|e| KvitreError::Synthesis(format!("TTS request failed: {}", e)))?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(KvitreError::Synthesis(
                "TTS endpoint rate limit hit. Wait a bit and rerun, or use fewer phrases."
                    .to_string(),
            ));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(KvitreError::Synthesis(format!(
                "TTS error ({}): {}",
                status, body
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| KvitreError::Synthesis(format!("TTS response unreadable: {}", e)))?;

        if bytes.is_empty() {
            return Err(KvitreError::Synthesis(
                "TTS endpoint returned an empty clip".to_string(),
            ));
        }

        Ok(bytes.to_vec())
    }
}

impl Default for GoogleTranslateSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTranslateSynthesizer {
    #[instrument(skip(self), fields(lang = %self.language))]
    async fn synthesize(&self, phrase: &str, out_path: &Path) -> Result<()> {
        let bytes = self.fetch(phrase).await?;

        if let Some(parent) = out_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(out_path, &bytes).await?;

        debug!("Wrote {} bytes to {}", bytes.len(), out_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trailing_slash_is_trimmed() {
        let synth =
            GoogleTranslateSynthesizer::with_config("en", "https://example.com/tts/", None);
        assert_eq!(synth.endpoint, "https://example.com/tts");
    }

    #[test]
    fn test_default_language_is_english() {
        let synth = GoogleTranslateSynthesizer::new();
        assert_eq!(synth.language(), "en");
    }
}
