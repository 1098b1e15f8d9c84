//! Config command implementation.

use crate::cli::{ConfigAction, Output};
use crate::config::Settings;
use anyhow::Result;

/// Run the config command.
pub fn run_config(action: &ConfigAction, settings: Settings) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let toml_str = toml::to_string_pretty(&settings)
                .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;
            println!("{}", toml_str);
        }

        ConfigAction::Set { key, value } => {
            let mut settings = settings;
            apply_setting(&mut settings, key, value)?;
            settings.save()?;
            Output::success(&format!("Set {} = {}", key, value));
            Output::info(&format!(
                "Saved to {}",
                Settings::default_config_path().display()
            ));
        }

        ConfigAction::Edit => {
            let config_path = Settings::default_config_path();

            // Create default config if it doesn't exist
            if !config_path.exists() {
                settings.save()?;
                Output::info(&format!("Created default config at {:?}", config_path));
            }

            // Try to open in editor
            let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vim".to_string());

            Output::info(&format!("Opening config in {}...", editor));

            let status = std::process::Command::new(&editor)
                .arg(&config_path)
                .status();

            match status {
                Ok(s) if s.success() => {
                    Output::success("Config saved.");
                }
                Ok(_) => {
                    Output::warning("Editor exited with non-zero status.");
                }
                Err(e) => {
                    Output::error(&format!("Failed to open editor: {}", e));
                    Output::info(&format!("Config file is at: {:?}", config_path));
                }
            }
        }

        ConfigAction::Path => {
            let config_path = Settings::default_config_path();
            println!("{}", config_path.display());
        }
    }

    Ok(())
}

/// Apply one `section.field = value` assignment to the settings.
fn apply_setting(settings: &mut Settings, key: &str, value: &str) -> Result<()> {
    match key {
        "paths.audio_dir" => settings.paths.audio_dir = value.to_string(),
        "paths.results_dir" => settings.paths.results_dir = value.to_string(),
        "paths.phrases_file" => settings.paths.phrases_file = value.to_string(),
        "synthesis.language" => settings.synthesis.language = value.to_string(),
        "synthesis.endpoint" => settings.synthesis.endpoint = value.to_string(),
        "synthesis.timeout_secs" => settings.synthesis.timeout_secs = Some(parse(key, value)?),
        "recognition.language_code" => settings.recognition.language_code = value.to_string(),
        "recognition.endpoint" => settings.recognition.endpoint = value.to_string(),
        "recognition.timeout_secs" => settings.recognition.timeout_secs = Some(parse(key, value)?),
        "chirp.sample_rate" => settings.chirp.sample_rate = parse(key, value)?,
        "chirp.duration" => settings.chirp.duration = parse(key, value)?,
        "chirp.start_freq" => settings.chirp.start_freq = parse(key, value)?,
        "chirp.end_freq" => settings.chirp.end_freq = parse(key, value)?,
        _ => {
            return Err(anyhow::anyhow!(
                "Unknown configuration key: {}. See 'kvitre config show' for available keys.",
                key
            ))
        }
    }
    Ok(())
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid value for {}: {}", key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_setting_updates_strings_and_numbers() {
        let mut settings = Settings::default();

        apply_setting(&mut settings, "recognition.language_code", "nb-NO").unwrap();
        apply_setting(&mut settings, "chirp.sample_rate", "8000").unwrap();
        apply_setting(&mut settings, "synthesis.timeout_secs", "15").unwrap();

        assert_eq!(settings.recognition.language_code, "nb-NO");
        assert_eq!(settings.chirp.sample_rate, 8000);
        assert_eq!(settings.synthesis.timeout_secs, Some(15));
    }

    #[test]
    fn test_apply_setting_rejects_unknown_keys_and_bad_values() {
        let mut settings = Settings::default();

        assert!(apply_setting(&mut settings, "paths.unknown", "x").is_err());
        assert!(apply_setting(&mut settings, "chirp.sample_rate", "fast").is_err());
    }
}
