//! Speech synthesis backends.
//!
//! One trait seam so the diagnostic run can swap the network synthesizer for
//! a local double in tests.

pub mod gtts;

pub use gtts::GoogleTranslateSynthesizer;

use crate::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Turns a phrase into an audio clip on disk.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize `phrase` and write the resulting clip to `out_path`.
    async fn synthesize(&self, phrase: &str, out_path: &Path) -> Result<()>;
}
