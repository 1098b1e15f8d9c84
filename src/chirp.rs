//! Linear chirp synthesis.
//!
//! Generates a sine wave whose frequency sweeps linearly from a start
//! frequency to an end frequency, quantized to 16-bit PCM and written as
//! an uncompressed mono WAV file. Chirps make useful STT test signals
//! because they exercise the whole band without containing speech.

use crate::error::{KvitreError, Result};
use hound::{SampleFormat, WavSpec, WavWriter};
use std::f64::consts::PI;
use std::path::Path;
use tracing::debug;

/// Parameters for a linear frequency sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChirpSpec {
    /// Samples per second.
    pub sample_rate: u32,
    /// Signal length in seconds.
    pub duration: f64,
    /// Frequency at t = 0, in Hz.
    pub start_freq: f64,
    /// Frequency at t = duration, in Hz.
    pub end_freq: f64,
}

impl ChirpSpec {
    /// Create a new chirp spec.
    pub fn new(sample_rate: u32, duration: f64, start_freq: f64, end_freq: f64) -> Self {
        Self {
            sample_rate,
            duration,
            start_freq,
            end_freq,
        }
    }

    /// Check that the parameters describe a synthesizable signal.
    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(KvitreError::InvalidParameter(
                "sample rate must be positive".to_string(),
            ));
        }
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(KvitreError::InvalidParameter(format!(
                "duration must be a positive number of seconds, got {}",
                self.duration
            )));
        }
        if !self.start_freq.is_finite() || !self.end_freq.is_finite() {
            return Err(KvitreError::InvalidParameter(
                "start and end frequencies must be finite".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of samples the sweep produces: floor(sample_rate * duration).
    pub fn sample_count(&self) -> usize {
        (self.sample_rate as f64 * self.duration) as usize
    }
}

/// Synthesize the chirp as 16-bit signed PCM samples.
///
/// Sample times run from 0 inclusive to `duration` exclusive. The phase of a
/// linear sweep is the integral of the instantaneous frequency
/// `f(t) = start + k*t`, giving `phase(t) = 2π (start*t + 0.5*k*t²)` with
/// `k = (end - start) / duration`.
pub fn synthesize(spec: &ChirpSpec) -> Result<Vec<i16>> {
    spec.validate()?;

    let n = spec.sample_count();
    let rate = spec.sample_rate as f64;
    let k = (spec.end_freq - spec.start_freq) / spec.duration;

    let mut samples = Vec::with_capacity(n);
    for i in 0..n {
        let t = i as f64 / rate;
        let phase = 2.0 * PI * (spec.start_freq * t + 0.5 * k * t * t);
        let value = phase.sin().clamp(-1.0, 1.0);
        // Truncate toward zero, not round-to-nearest.
        samples.push((value * 32767.0) as i16);
    }

    debug!("Synthesized {} samples at {} Hz", samples.len(), spec.sample_rate);
    Ok(samples)
}

/// Write PCM samples as a 16-bit mono WAV file, creating parent directories.
pub fn write_wav(path: &Path, sample_rate: u32, samples: &[i16]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;

    debug!("Wrote {} samples to {}", samples.len(), path.display());
    Ok(())
}

/// Synthesize a chirp and write it to `path` in one step.
pub fn generate_chirp_wav(spec: &ChirpSpec, path: &Path) -> Result<()> {
    let samples = synthesize(spec)?;
    write_wav(path, spec.sample_rate, &samples)
}
