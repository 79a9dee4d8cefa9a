//! Artifact orchestration.
//!
//! Formats the transcript once, then runs one model round trip per
//! requested artifact on its own task. Failures are captured per artifact
//! so one bad generation does not discard the rest.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::llm::{prompts, ModelClient};
use crate::transcript::{format_transcript, Transcript};
use crate::{LectioError, Result};

use super::extract::extract_json;
use super::types::{
    ArtifactFailure, ArtifactKind, ArtifactRequest, FlashcardSet, GenerationReport, PreferenceSet,
    Quiz,
};

/// Drives prompt construction, model invocation, and response parsing for
/// one transcript.
pub struct Generator {
    client: Arc<dyn ModelClient>,
}

/// Parsed content of one finished artifact.
enum ArtifactContent {
    Text(String),
    Flashcards(FlashcardSet),
    Quiz(Quiz),
}

impl Generator {
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        Self { client }
    }

    /// Generate every requested artifact against one transcript.
    ///
    /// Only request-level problems fail the whole call; a failed artifact
    /// is recorded in the report while the others keep their results.
    pub async fn generate(
        &self,
        transcript: &Transcript,
        request: &ArtifactRequest,
    ) -> Result<GenerationReport> {
        if !(request.prefs.length_minutes > 0.0) {
            return Err(LectioError::InvalidInput(
                "lengthMinutes must be a positive number".to_string(),
            ));
        }

        let formatted = format_transcript(&transcript.segments);
        if formatted.is_empty() {
            return Err(LectioError::InvalidInput(
                "transcript contains no non-empty segments".to_string(),
            ));
        }

        let handles: Vec<(ArtifactKind, JoinHandle<Result<ArtifactContent>>)> = request
            .requested()
            .into_iter()
            .map(|kind| {
                let prompt = build_prompt(kind, &formatted, &request.prefs);
                let client = Arc::clone(&self.client);
                debug!(artifact = %kind, prompt_len = prompt.len(), "dispatching generation");
                (kind, tokio::spawn(generate_one(client, kind, prompt)))
            })
            .collect();

        let mut report = GenerationReport::default();
        for (kind, handle) in handles {
            let outcome = match handle.await {
                Ok(outcome) => outcome,
                Err(e) => Err(LectioError::Other(format!(
                    "{kind} generation task failed: {e}"
                ))),
            };

            match outcome {
                Ok(content) => store(&mut report, kind, content),
                Err(error) => report.failures.push(ArtifactFailure { kind, error }),
            }
        }

        Ok(report)
    }
}

async fn generate_one(
    client: Arc<dyn ModelClient>,
    kind: ArtifactKind,
    prompt: String,
) -> Result<ArtifactContent> {
    let raw = client.invoke(&prompt).await?;

    match kind {
        ArtifactKind::Flashcards => {
            let value = extract_json(&raw)?;
            let set: FlashcardSet =
                serde_json::from_value(value).map_err(|e| LectioError::InvalidArtifact {
                    artifact: "flashcards",
                    reason: e.to_string(),
                })?;
            set.validate()?;
            Ok(ArtifactContent::Flashcards(set))
        }
        ArtifactKind::Quiz => {
            let value = extract_json(&raw)?;
            let quiz: Quiz =
                serde_json::from_value(value).map_err(|e| LectioError::InvalidArtifact {
                    artifact: "quiz",
                    reason: e.to_string(),
                })?;
            quiz.validate()?;
            Ok(ArtifactContent::Quiz(quiz))
        }
        _ => Ok(ArtifactContent::Text(raw)),
    }
}

fn build_prompt(kind: ArtifactKind, transcript: &str, prefs: &PreferenceSet) -> String {
    match kind {
        ArtifactKind::NotesShort => prompts::short_notes_prompt(transcript, prefs),
        ArtifactKind::NotesDetailed => prompts::detailed_notes_prompt(transcript, prefs),
        ArtifactKind::Flashcards => prompts::flashcards_prompt(transcript),
        ArtifactKind::Quiz => prompts::quiz_prompt(transcript),
        ArtifactKind::PodcastScript => prompts::podcast_script_prompt(transcript, prefs),
    }
}

fn store(report: &mut GenerationReport, kind: ArtifactKind, content: ArtifactContent) {
    let artifacts = &mut report.artifacts;
    match (kind, content) {
        (ArtifactKind::NotesShort, ArtifactContent::Text(text)) => {
            artifacts.notes_short = Some(text)
        }
        (ArtifactKind::NotesDetailed, ArtifactContent::Text(text)) => {
            artifacts.notes_detailed = Some(text)
        }
        (ArtifactKind::Flashcards, ArtifactContent::Flashcards(set)) => {
            artifacts.flashcards = Some(set)
        }
        (ArtifactKind::Quiz, ArtifactContent::Quiz(quiz)) => artifacts.quiz = Some(quiz),
        (ArtifactKind::PodcastScript, ArtifactContent::Text(text)) => {
            artifacts.podcast_script = Some(text)
        }
        // generate_one always pairs a kind with its own content shape
        _ => unreachable!("artifact content does not match its kind"),
    }
}
