//! Transcription module for Kvitre.
//!
//! Two interchangeable Google Cloud Speech backends plus the fallback logic
//! that decides which of them serves each audio clip.
//!
//! # Backends
//!
//! - **v2** (primary): the recognizer-resource API. Only used when a
//!   recognizer is configured.
//! - **v1** (secondary): the legacy API. Always available as the fallback.

mod fallback;
mod models;
pub mod v1;
pub mod v2;

pub use fallback::FallbackRecognizer;
pub use models::{extract_first_alternative, Backend, Recognition, TranscriptionRecord};
pub use v1::SpeechV1Recognizer;
pub use v2::SpeechV2Recognizer;

use crate::error::Result;
use async_trait::async_trait;

/// Trait for speech recognition backends.
#[async_trait]
pub trait Recognizer: Send + Sync {
    /// The backend identifier results from this recognizer are tagged with.
    fn backend(&self) -> Backend;

    /// Transcribe an audio byte payload.
    async fn recognize(&self, audio: &[u8]) -> Result<Recognition>;
}
