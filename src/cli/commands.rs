//! CLI command implementations

use anyhow::{Context, Result};
use std::io::Read;

use crate::artifacts::{ArtifactKind, ArtifactRequest, Difficulty, Generator};
use crate::cli::args::{ConfigCommand, GenerateOpts};
use crate::config::Settings;
use crate::llm::build_client;
use crate::transcript::Transcript;
use crate::LectioError;

/// Generate the requested artifacts and print the result mapping as JSON.
pub async fn generate(settings: &Settings, opts: GenerateOpts) -> Result<()> {
    let raw = read_input(&opts.input)?;
    let transcript = Transcript::from_json(&raw)?;

    let request = build_request(&opts)?;
    if request.requested().is_empty() {
        anyhow::bail!("No artifacts requested. Pass --artifacts <names> or --all.");
    }

    let client = build_client(settings)?;
    let report = Generator::new(client)
        .generate(&transcript, &request)
        .await?;

    let rendered = serde_json::to_string_pretty(&report.artifacts)?;
    match &opts.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            eprintln!("Wrote artifacts to: {}", path.display());
        }
        None => println!("{rendered}"),
    }

    if !report.failures.is_empty() {
        for failure in &report.failures {
            tracing::error!(artifact = %failure.kind, "generation failed: {}", failure.error);
        }
        let failed: Vec<&str> = report.failures.iter().map(|f| f.kind.key()).collect();
        anyhow::bail!(
            "{} of {} artifact(s) failed: {}",
            report.failures.len(),
            request.requested().len(),
            failed.join(", ")
        );
    }

    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

// Helper functions

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read transcript from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read transcript file: {input}"))
    }
}

/// Build the artifact request from CLI flags, or take the options document
/// verbatim when one is given.
fn build_request(opts: &GenerateOpts) -> Result<ArtifactRequest> {
    if let Some(raw) = &opts.options {
        return Ok(ArtifactRequest::from_json(raw)?);
    }

    let mut request = ArtifactRequest::default();

    if opts.all {
        for kind in ArtifactKind::ALL {
            request.enable(kind);
        }
    } else {
        for name in &opts.artifacts {
            request.enable(ArtifactKind::parse(name)?);
        }
    }

    if !opts.focus.is_empty() {
        request.prefs.focus_topics = opts.focus.clone();
    }
    if let Some(tone) = &opts.tone {
        request.prefs.tone = tone.clone();
    }
    if let Some(difficulty) = &opts.difficulty {
        request.prefs.difficulty = Difficulty::parse(difficulty).ok_or_else(|| {
            LectioError::InvalidInput(format!(
                "unknown difficulty '{difficulty}' (expected beginner, intermediate, or advanced)"
            ))
        })?;
    }
    if let Some(minutes) = opts.length_minutes {
        request.prefs.length_minutes = minutes;
    }

    Ok(request)
}
