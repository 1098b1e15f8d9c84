//! Configuration module for Kvitre.
//!
//! Handles loading and managing application settings.

mod settings;

pub use settings::{
    ChirpSettings, PathSettings, RecognitionSettings, Settings, SynthesisSettings,
};
