//! Doctor command - verify credentials and configuration.

use crate::cli::Output;
use crate::config::Settings;
use crate::corpus;
use crate::google;
use console::style;

/// Check result for a single item.
#[derive(Debug)]
pub struct CheckResult {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum CheckStatus {
    Ok,
    Warning,
    Error,
}

impl CheckResult {
    fn ok(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Ok,
            message: message.to_string(),
            hint: None,
        }
    }

    fn warning(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Warning,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn error(name: &str, message: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Error,
            message: message.to_string(),
            hint: Some(hint.to_string()),
        }
    }

    fn print(&self) {
        let icon = match self.status {
            CheckStatus::Ok => style("✓").green(),
            CheckStatus::Warning => style("!").yellow(),
            CheckStatus::Error => style("✗").red(),
        };

        println!("  {} {} - {}", icon, style(&self.name).bold(), self.message);

        if let Some(hint) = &self.hint {
            println!("    {} {}", style("→").dim(), style(hint).dim());
        }
    }
}

/// Run all diagnostic checks.
pub fn run_doctor(settings: &Settings) -> anyhow::Result<()> {
    Output::header("Kvitre Doctor");
    println!();
    println!("Checking credentials and configuration...\n");

    let mut checks = Vec::new();

    println!("{}", style("Google Cloud").bold());
    let credential_check = check_credentials();
    credential_check.print();
    checks.push(credential_check);

    let recognizer_check = check_recognizer();
    recognizer_check.print();
    checks.push(recognizer_check);

    println!();

    println!("{}", style("Working Directory").bold());
    let dir_checks = check_directories(settings);
    for check in &dir_checks {
        check.print();
    }
    checks.extend(dir_checks);

    println!();

    println!("{}", style("Configuration").bold());
    let config_check = check_config_file();
    config_check.print();
    checks.push(config_check);

    println!();

    // Summary
    let errors = checks.iter().filter(|c| c.status == CheckStatus::Error).count();
    let warnings = checks.iter().filter(|c| c.status == CheckStatus::Warning).count();

    if errors > 0 {
        Output::error(&format!(
            "{} error(s) found. Please fix them before running a diagnostic.",
            errors
        ));
        std::process::exit(1);
    } else if warnings > 0 {
        Output::warning(&format!("All checks passed with {} warning(s).", warnings));
    } else {
        Output::success("All checks passed! Kvitre is ready to use.");
    }

    Ok(())
}

/// Check Google credentials, preferring the API key.
fn check_credentials() -> CheckResult {
    if let Ok(key) = std::env::var(google::API_KEY_ENV) {
        if !key.trim().is_empty() {
            return CheckResult::ok(
                google::API_KEY_ENV,
                &format!("configured ({})", mask(key.trim())),
            );
        }
    }

    if let Ok(token) = std::env::var(google::ACCESS_TOKEN_ENV) {
        if !token.trim().is_empty() {
            return CheckResult::ok(
                google::ACCESS_TOKEN_ENV,
                &format!("configured ({})", mask(token.trim())),
            );
        }
    }

    CheckResult::error(
        "Credentials",
        "not set",
        &format!(
            "Set {} or {} (from: gcloud auth print-access-token)",
            google::API_KEY_ENV,
            google::ACCESS_TOKEN_ENV
        ),
    )
}

/// Check the primary recognizer selection.
fn check_recognizer() -> CheckResult {
    match google::recognizer_from_env() {
        Some(recognizer) => CheckResult::ok(google::RECOGNIZER_ENV, &recognizer),
        None => CheckResult::warning(
            google::RECOGNIZER_ENV,
            "not set (runs will use v1 only)",
            "Set to projects/<project>/locations/<location>/recognizers/<name> to test v2",
        ),
    }
}

/// Check working directories and the phrase corpus.
fn check_directories(settings: &Settings) -> Vec<CheckResult> {
    let mut results = Vec::new();

    for (name, dir) in [
        ("Audio directory", settings.audio_dir()),
        ("Results directory", settings.results_dir()),
    ] {
        if dir.exists() {
            results.push(CheckResult::ok(name, &format!("{}", dir.display())));
        } else {
            results.push(CheckResult::warning(
                name,
                &format!("{} (will be created)", dir.display()),
                "Directory will be created on first run",
            ));
        }
    }

    let phrases_path = settings.phrases_file();
    match corpus::read_phrases(&phrases_path) {
        Ok(phrases) if !phrases.is_empty() => results.push(CheckResult::ok(
            "Phrase corpus",
            &format!("{} ({} phrases)", phrases_path.display(), phrases.len()),
        )),
        Ok(_) => results.push(CheckResult::warning(
            "Phrase corpus",
            &format!("{} is empty", phrases_path.display()),
            "Add one phrase per line",
        )),
        Err(_) => results.push(CheckResult::error(
            "Phrase corpus",
            &format!("{} not found", phrases_path.display()),
            "Create it with 'kvitre init', one phrase per line",
        )),
    }

    results
}

/// Check if config file exists.
fn check_config_file() -> CheckResult {
    let config_path = Settings::default_config_path();
    if config_path.exists() {
        CheckResult::ok("Config file", &format!("{}", config_path.display()))
    } else {
        CheckResult::warning(
            "Config file",
            "using defaults",
            "Create with: kvitre init (or kvitre config edit)",
        )
    }
}

/// Mask a credential for display, keeping the ends.
fn mask(value: &str) -> String {
    if value.chars().count() > 8 {
        let head: String = value.chars().take(4).collect();
        let tail: String = value.chars().rev().take(4).collect::<Vec<_>>().into_iter().rev().collect();
        format!("{}...{}", head, tail)
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_result_ok() {
        let result = CheckResult::ok("test", "passed");
        assert_eq!(result.status, CheckStatus::Ok);
        assert!(result.hint.is_none());
    }

    #[test]
    fn test_check_result_error() {
        let result = CheckResult::error("test", "failed", "fix it");
        assert_eq!(result.status, CheckStatus::Error);
        assert_eq!(result.hint, Some("fix it".to_string()));
    }

    #[test]
    fn test_mask_keeps_only_the_ends() {
        assert_eq!(mask("AIzaSyExample123Key"), "AIza...3Key");
        assert_eq!(mask("short"), "****");
    }
}
