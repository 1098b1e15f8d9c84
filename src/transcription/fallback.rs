//! Primary/secondary backend resolution.
//!
//! Every clip gets exactly one answer: from the primary backend when one is
//! configured and healthy, otherwise from the secondary. A primary failure is
//! an expected, recoverable event; a secondary failure is fatal for that clip
//! only.

use super::{Backend, Recognition, Recognizer};
use crate::error::Result;
use std::sync::Arc;
use tracing::{debug, warn};

/// Resolves each recognition through an optional primary with a mandatory
/// secondary fallback.
pub struct FallbackRecognizer {
    primary: Option<Arc<dyn Recognizer>>,
    secondary: Arc<dyn Recognizer>,
}

impl FallbackRecognizer {
    /// Create a fallback chain. `primary` is `None` when no recognizer
    /// resource is configured, which routes everything to the secondary.
    pub fn new(primary: Option<Arc<dyn Recognizer>>, secondary: Arc<dyn Recognizer>) -> Self {
        Self { primary, secondary }
    }

    /// Whether a primary backend is configured.
    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }

    /// Recognize one clip, returning the result and the backend that served
    /// it. `clip_name` only provides log context.
    ///
    /// A primary failure is logged once and recovered by retrying on the
    /// secondary; a secondary failure propagates to the caller.
    pub async fn recognize(&self, audio: &[u8], clip_name: &str) -> Result<(Recognition, Backend)> {
        if let Some(primary) = &self.primary {
            match primary.recognize(audio).await {
                Ok(recognition) => {
                    debug!("{} served {}", primary.backend(), clip_name);
                    return Ok((recognition, primary.backend()));
                }
                Err(e) => {
                    warn!(
                        "{} failed for {}: {}. Falling back to {}.",
                        primary.backend(),
                        clip_name,
                        e,
                        self.secondary.backend()
                    );
                }
            }
        }

        let recognition = self.secondary.recognize(audio).await?;
        debug!("{} served {}", self.secondary.backend(), clip_name);
        Ok((recognition, self.secondary.backend()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KvitreError;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Recognizer double with a scripted outcome and a call counter.
    struct ScriptedRecognizer {
        backend: Backend,
        fail: bool,
        calls: AtomicUsize,
    }

    impl ScriptedRecognizer {
        fn ok(backend: Backend) -> Arc<Self> {
            Arc::new(Self {
                backend,
                fail: false,
                calls: AtomicUsize::new(0),
            })
        }

        fn failing(backend: Backend) -> Arc<Self> {
            Arc::new(Self {
                backend,
                fail: true,
                calls: AtomicUsize::new(0),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Recognizer for ScriptedRecognizer {
        fn backend(&self) -> Backend {
            self.backend
        }

        async fn recognize(&self, _audio: &[u8]) -> Result<Recognition> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(KvitreError::Recognition(format!(
                    "{} scripted failure",
                    self.backend
                )));
            }
            Ok(Recognition::from_payload(json!({
                "results": [{"alternatives": [{
                    "transcript": format!("from {}", self.backend),
                    "confidence": 0.9
                }]}]
            })))
        }
    }

    #[tokio::test]
    async fn test_healthy_primary_serves_the_clip() {
        let primary = ScriptedRecognizer::ok(Backend::V2);
        let secondary = ScriptedRecognizer::ok(Backend::V1);
        let chain = FallbackRecognizer::new(
            Some(primary.clone() as Arc<dyn Recognizer>),
            secondary.clone() as Arc<dyn Recognizer>,
        );

        let (recognition, backend) = chain.recognize(b"audio", "00.mp3").await.unwrap();
        assert_eq!(backend, Backend::V2);
        assert_eq!(recognition.transcript, "from v2");
        assert_eq!(primary.call_count(), 1);
        assert_eq!(secondary.call_count(), 0);
    }

    #[tokio::test]
    async fn test_failing_primary_falls_back_once_per_clip() {
        let primary = ScriptedRecognizer::failing(Backend::V2);
        let secondary = ScriptedRecognizer::ok(Backend::V1);
        let chain = FallbackRecognizer::new(
            Some(primary.clone() as Arc<dyn Recognizer>),
            secondary.clone() as Arc<dyn Recognizer>,
        );

        for clip in ["00.mp3", "01.mp3", "02.mp3"] {
            let (recognition, backend) = chain.recognize(b"audio", clip).await.unwrap();
            assert_eq!(backend, Backend::V1);
            assert_eq!(recognition.transcript, "from v1");
        }

        // One primary attempt (and so one logged failure) per clip.
        assert_eq!(primary.call_count(), 3);
        assert_eq!(secondary.call_count(), 3);
    }

    #[tokio::test]
    async fn test_without_primary_only_secondary_runs() {
        let secondary = ScriptedRecognizer::ok(Backend::V1);
        let chain = FallbackRecognizer::new(None, secondary.clone() as Arc<dyn Recognizer>);

        assert!(!chain.has_primary());
        let (_, backend) = chain.recognize(b"audio", "00.mp3").await.unwrap();
        assert_eq!(backend, Backend::V1);
        assert_eq!(secondary.call_count(), 1);
    }

    #[tokio::test]
    async fn test_secondary_failure_propagates() {
        let primary = ScriptedRecognizer::failing(Backend::V2);
        let secondary = ScriptedRecognizer::failing(Backend::V1);
        let chain = FallbackRecognizer::new(
            Some(primary as Arc<dyn Recognizer>),
            secondary as Arc<dyn Recognizer>,
        );

        let err = chain.recognize(b"audio", "00.mp3").await.unwrap_err();
        assert!(matches!(err, KvitreError::Recognition(_)));
    }
}
