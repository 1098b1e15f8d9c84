//! Google Cloud Speech-to-Text v2 recognizer (primary backend).
//!
//! The v2 API addresses a pre-provisioned recognizer resource
//! (`projects/{p}/locations/{l}/recognizers/{r}`) and auto-detects the audio
//! encoding server-side.

use super::{Backend, Recognition, Recognizer};
use crate::error::{KvitreError, Result};
use crate::google::{self, GoogleAuth};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument};

/// Default Speech API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://speech.googleapis.com";

/// Speech v2 REST recognizer.
pub struct SpeechV2Recognizer {
    client: reqwest::Client,
    auth: GoogleAuth,
    endpoint: String,
    recognizer: String,
    language_code: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognizeRequest {
    config: RecognitionConfig,
    content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognitionConfig {
    auto_decoding_config: AutoDetectDecodingConfig,
    language_codes: Vec<String>,
}

/// Serializes to `{}`; tells the service to sniff the container format.
#[derive(Debug, Serialize)]
struct AutoDetectDecodingConfig {}

impl SpeechV2Recognizer {
    /// Create a recognizer with credentials from the environment.
    pub fn new(recognizer: &str) -> Result<Self> {
        Self::with_config(recognizer, "en-US", DEFAULT_ENDPOINT, None)
    }

    /// Create a recognizer with custom configuration.
    pub fn with_config(
        recognizer: &str,
        language_code: &str,
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
            recognizer: recognizer.to_string(),
            language_code: language_code.to_string(),
        })
    }

    /// The recognizer resource this client addresses.
    pub fn recognizer(&self) -> &str {
        &self.recognizer
    }
}

#[async_trait]
impl Recognizer for SpeechV2Recognizer {
    fn backend(&self) -> Backend {
        Backend::V2
    }

    #[instrument(skip(self, audio), fields(recognizer = %self.recognizer, bytes = audio.len()))]
    async fn recognize(&self, audio: &[u8]) -> Result<Recognition> {
        debug!("Sending audio to Speech v2");

        let request = RecognizeRequest {
            config: RecognitionConfig {
                auto_decoding_config: AutoDetectDecodingConfig {},
                language_codes: vec![self.language_code.clone()],
            },
            content: STANDARD.encode(audio),
        };

        let url = format!("{}/v2/{}:recognize", self.endpoint, self.recognizer);
        let response = self
            .auth
            .apply(self.client.post(&url).json(&request))
            .send()
            .await
            .map_err(|e| KvitreError::Recognition(format!("Speech v2 request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| KvitreError::Recognition(format!("Speech v2 response unreadable: {}", e)))?;

        if !status.is_success() {
            return Err(KvitreError::Recognition(format!(
                "Speech v2 API error ({}): {}",
                status,
                body.trim()
            )));
        }

        let payload: serde_json::Value = serde_json::from_str(&body).map_err(|e| {
            KvitreError::Recognition(format!("Speech v2 returned invalid JSON: {}", e))
        })?;

        Ok(Recognition::from_payload(payload))
    }
}
