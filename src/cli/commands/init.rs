//! Init command - first-run setup.
//!
//! Non-interactive on purpose, so it works in scripts and CI the same way
//! it does in a terminal.

use crate::cli::Output;
use crate::config::Settings;
use crate::google;
use console::style;

/// Starter corpus written when no phrase file exists yet.
const STARTER_PHRASES: &str = "hello world\n\
    testing one two three\n\
    the quick brown fox jumps over the lazy dog\n";

/// Run the init command for first-time setup.
pub fn run_init(settings: &Settings) -> anyhow::Result<()> {
    Output::header("Kvitre Setup");
    println!();
    println!("Setting up the working directory and configuration.\n");

    // Step 1: Credentials
    println!("{}", style("Step 1: Checking credentials").bold().cyan());
    println!();

    if google::is_auth_configured() {
        Output::success("Google credentials are configured!");
    } else {
        Output::warning("No Google credentials found.");
        println!();
        println!("  Kvitre needs credentials for the Speech APIs. Either:");
        println!("  {}", style(format!("export {}='AIza...'", google::API_KEY_ENV)).green());
        println!(
            "  {}",
            style(format!(
                "export {}=\"$(gcloud auth print-access-token)\"",
                google::ACCESS_TOKEN_ENV
            ))
            .green()
        );
    }

    println!();

    // Step 2: Directories
    println!("{}", style("Step 2: Setting up directories").bold().cyan());
    println!();

    for dir in [settings.audio_dir(), settings.results_dir()] {
        if dir.exists() {
            Output::info(&format!("Directory exists: {}", dir.display()));
        } else {
            std::fs::create_dir_all(&dir)?;
            Output::success(&format!("Created directory: {}", dir.display()));
        }
    }

    println!();

    // Step 3: Phrase corpus
    println!("{}", style("Step 3: Phrase corpus").bold().cyan());
    println!();

    let phrases_path = settings.phrases_file();
    if phrases_path.exists() {
        Output::info(&format!("Phrase file exists: {}", phrases_path.display()));
    } else {
        if let Some(parent) = phrases_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&phrases_path, STARTER_PHRASES)?;
        Output::success(&format!(
            "Created starter phrase file: {}",
            phrases_path.display()
        ));
        println!("  Edit it to add your own phrases, one per line.");
    }

    println!();

    // Step 4: Config file
    println!("{}", style("Step 4: Configuration file").bold().cyan());
    println!();

    let config_path = Settings::default_config_path();
    if config_path.exists() {
        Output::info(&format!("Config file exists: {}", config_path.display()));
    } else {
        settings.save_to(&config_path)?;
        Output::success(&format!("Created config file: {}", config_path.display()));
        println!("  Edit your config with: {}", style("kvitre config edit").green());
    }

    println!();

    // Summary
    println!("{}", style("Setup Complete!").bold().green());
    println!();
    println!("Next steps:");
    println!("  {} Check credentials and configuration", style("kvitre doctor").cyan());
    println!("  {} Run the corpus against the Speech APIs", style("kvitre run").cyan());
    println!("  {} Generate a test sweep tone", style("kvitre chirp").cyan());
    println!();
    println!("For more help: {}", style("kvitre --help").cyan());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_phrases_are_valid_corpus_lines() {
        let phrases: Vec<&str> = STARTER_PHRASES
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        assert_eq!(phrases.len(), 3);
        assert!(phrases.contains(&"hello world"));
    }
}
