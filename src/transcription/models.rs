//! Data models for transcription.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which cloud backend produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Speech-to-Text v2, the recognizer-based API. Primary.
    V2,
    /// Speech-to-Text v1, the legacy API. Secondary / fallback.
    V1,
}

impl Backend {
    /// Short identifier used in artifact file names and the CSV column.
    pub fn label(&self) -> &'static str {
        match self {
            Backend::V2 => "v2",
            Backend::V1 => "v1",
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single backend's answer for one audio clip.
#[derive(Debug, Clone)]
pub struct Recognition {
    /// Best transcript, empty when the backend returned no results.
    pub transcript: String,
    /// Backend-reported confidence in [0, 1], 0.0 when not reported.
    pub confidence: f64,
    /// The verbatim structured response, kept for the per-item artifact.
    pub payload: Value,
}

impl Recognition {
    /// Build a recognition from a raw response payload.
    pub fn from_payload(payload: Value) -> Self {
        let (transcript, confidence) = extract_first_alternative(&payload);
        Self {
            transcript,
            confidence,
            payload,
        }
    }
}

/// The recorded outcome for one processed phrase or clip.
#[derive(Debug, Clone)]
pub struct TranscriptionRecord {
    /// Input phrase; absent for clips that didn't come from the corpus.
    pub phrase: Option<String>,
    /// Transcript text from whichever backend served the item.
    pub transcript: String,
    /// Confidence score in [0, 1].
    pub confidence: f64,
    /// Backend that actually produced the result.
    pub backend: Backend,
    /// Verbatim structured response.
    pub payload: Value,
}

impl TranscriptionRecord {
    /// Tag a recognition with its originating phrase and backend.
    pub fn new(phrase: Option<String>, recognition: Recognition, backend: Backend) -> Self {
        Self {
            phrase,
            transcript: recognition.transcript,
            confidence: recognition.confidence,
            backend,
            payload: recognition.payload,
        }
    }
}

/// Pull transcript and confidence out of the first alternative of the first
/// result.
///
/// Both API versions shape their JSON the same way:
/// `{"results": [{"alternatives": [{"transcript": ..., "confidence": ...}]}]}`.
/// Anything missing along that path yields an empty transcript and zero
/// confidence; an empty response is a valid answer, not an error.
pub fn extract_first_alternative(payload: &Value) -> (String, f64) {
    let first_alternative = payload
        .get("results")
        .and_then(Value::as_array)
        .and_then(|results| results.first())
        .and_then(|result| result.get("alternatives"))
        .and_then(Value::as_array)
        .and_then(|alternatives| alternatives.first());

    match first_alternative {
        Some(alternative) => {
            let transcript = alternative
                .get("transcript")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let confidence = alternative
                .get("confidence")
                .and_then(Value::as_f64)
                .unwrap_or(0.0);
            (transcript, confidence)
        }
        None => (String::new(), 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_first_alternative() {
        let payload = json!({
            "results": [
                {
                    "alternatives": [
                        {"transcript": "hello world", "confidence": 0.92},
                        {"transcript": "hello word", "confidence": 0.41}
                    ]
                },
                {
                    "alternatives": [{"transcript": "ignored", "confidence": 0.99}]
                }
            ]
        });

        let (transcript, confidence) = extract_first_alternative(&payload);
        assert_eq!(transcript, "hello world");
        assert_eq!(confidence, 0.92);
    }

    #[test]
    fn test_missing_results_yield_empty_transcript() {
        for payload in [
            json!({}),
            json!({"results": []}),
            json!({"results": [{}]}),
            json!({"results": [{"alternatives": []}]}),
        ] {
            let (transcript, confidence) = extract_first_alternative(&payload);
            assert_eq!(transcript, "");
            assert_eq!(confidence, 0.0);
        }
    }

    #[test]
    fn test_missing_confidence_defaults_to_zero() {
        let payload = json!({
            "results": [{"alternatives": [{"transcript": "quiet"}]}]
        });
        let (transcript, confidence) = extract_first_alternative(&payload);
        assert_eq!(transcript, "quiet");
        assert_eq!(confidence, 0.0);
    }

    #[test]
    fn test_recognition_keeps_payload_verbatim() {
        let payload = json!({
            "results": [{"alternatives": [{"transcript": "hi", "confidence": 1}]}],
            "totalBilledDuration": "3s"
        });
        let recognition = Recognition::from_payload(payload.clone());
        assert_eq!(recognition.transcript, "hi");
        assert_eq!(recognition.confidence, 1.0);
        assert_eq!(recognition.payload, payload);
    }

    #[test]
    fn test_backend_labels() {
        assert_eq!(Backend::V2.label(), "v2");
        assert_eq!(Backend::V1.to_string(), "v1");
        assert_eq!(serde_json::to_string(&Backend::V1).unwrap(), "\"v1\"");
    }

    #[test]
    fn test_record_carries_exactly_one_backend() {
        let recognition = Recognition::from_payload(json!({}));
        let record = TranscriptionRecord::new(Some("a phrase".into()), recognition, Backend::V1);
        assert_eq!(record.phrase.as_deref(), Some("a phrase"));
        assert_eq!(record.backend, Backend::V1);
        assert_eq!(record.transcript, "");
    }
}
