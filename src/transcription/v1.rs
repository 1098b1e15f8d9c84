//! Google Cloud Speech-to-Text v1 recognizer (secondary backend).
//!
//! The legacy API needs no provisioned resources, which is what makes it a
//! dependable fallback: an explicit encoding and a language code are the whole
//! configuration.

use super::{Backend, Recognition, Recognizer};
use crate::error::{KvitreError, Result};
use crate::google::{self, GoogleAuth};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument};

/// Default v1 API endpoint.
const DEFAULT_ENDPOINT: &str = "https://speech.googleapis.com";

/// Speech v1 REST recognizer.
pub struct SpeechV1Recognizer {
    client: reqwest::Client,
    auth: GoogleAuth,
    endpoint: String,
    language_code: String,
    encoding: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognizeRequest {
    config: RecognitionConfig,
    audio: RecognitionAudio,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognitionConfig {
    encoding: String,
    language_code: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognitionAudio {
    content: String,
}

impl SpeechV1Recognizer {
    /// Create a recognizer with credentials from the environment.
    ///
    /// Defaults to MP3 input, matching what the speech synthesizer writes.
    pub fn new() -> Result<Self> {
        Self::with_config("en-US", "MP3", DEFAULT_ENDPOINT, None)
    }

    /// Create a recognizer with custom configuration.
    pub fn with_config(
        language_code: &str,
        encoding: &str,
        endpoint: &str,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let client = match timeout {
            Some(timeout) => google::create_client_with_timeout(timeout),
            None => google::create_client(),
        };

        Ok(Self {
            client,
            auth: GoogleAuth::from_env()?,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            language_code: language_code.to_string(),
            encoding: encoding.to_string(),
        })
    }
}

#[async_trait]
impl Recognizer for SpeechV1Recognizer {
    fn backend(&self) -> Backend {
        Backend::V1
    }

    #[instrument(skip(self, audio), fields(bytes = audio.len()))]
    async fn recognize(&self, audio: &[u8]) -> Result<Recognition> {
        debug!("Sending audio to Speech v1");

        let request = RecognizeRequest {
            config: RecognitionConfig {
                encoding: self.encoding.clone(),
                language_code: self.language_code.clone(),
            },
            audio: RecognitionAudio {
                content: STANDARD.encode(audio),
            },
        };

        let url = format!("{}/v1/speech:recognize", self.endpoint);
        let response = self
            .auth
            .apply(self.client.post(&url).json(&request))
            .send()
            .await
            .map_err(|e| KvitreError::Recognition(format!("Speech v1 request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| KvitreError::Recognition(format!("Speech v1 response unreadable: {}", e)))?;

        if !status.is_success() {
            return Err(KvitreError::Recognition(format!(
                "Speech v1 API error ({}): {}",
                status,
                body.trim()
            )));
        }

        let payload: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            KvitreError::Recognition(format!("Speech v1 returned invalid JSON: {}", e))
        })?;

        Ok(Recognition::from_payload(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = RecognizeRequest {
            config: RecognitionConfig {
                encoding: "MP3".to_string(),
                language_code: "en-US".to_string(),
            },
            audio: RecognitionAudio {
                content: STANDARD.encode(b"abc"),
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "config": {
                    "encoding": "MP3",
                    "languageCode": "en-US"
                },
                "audio": {
                    "content": "YWJj"
                }
            })
        );
    }

    #[test]
    fn test_defaults() {
        std::env::set_var(crate::google::API_KEY_ENV, "test-key");
        let recognizer = SpeechV1Recognizer::new().unwrap();
        assert_eq!(recognizer.encoding, "MP3");
        assert_eq!(recognizer.language_code, "en-US");
        assert_eq!(recognizer.backend(), Backend::V1);
    }
}
