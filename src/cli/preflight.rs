//! Pre-flight checks before expensive operations.
//!
//! Validates that required configuration is available before starting
//! operations that would otherwise fail midway through the corpus.

use crate::error::{KvitreError, Result};
use crate::google;

/// Requirements for different operations.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// The diagnostic run calls Google APIs and needs credentials.
    Run,
    /// Chirp generation is purely local.
    Chirp,
    /// Batch preparation is purely local.
    Batch,
}

/// Run pre-flight checks for the given operation.
///
/// Returns Ok(()) if all checks pass, or an error describing what's missing.
pub fn check(operation: Operation) -> Result<()> {
    match operation {
        Operation::Run => {
            check_credentials()?;
        }
        Operation::Chirp | Operation::Batch => {
            // No external requirements
        }
    }
    Ok(())
}

/// Check that Google credentials are configured.
fn check_credentials() -> Result<()> {
    if google::is_auth_configured() {
        Ok(())
    } else {
        Err(KvitreError::Config(format!(
            "No Google credentials found. Set {} or {} (from: gcloud auth print-access-token).",
            google::API_KEY_ENV,
            google::ACCESS_TOKEN_ENV
        )))
    }
}
