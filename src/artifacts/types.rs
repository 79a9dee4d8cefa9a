//! Data models for artifact requests and results

use serde::{Deserialize, Serialize};

use crate::{LectioError, Result};

/// Target difficulty for generated explanations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }
}

/// Caller-supplied tuning knobs applied to all artifacts of one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferenceSet {
    /// Topics to emphasize; empty means no focus directive is added
    pub focus_topics: Vec<String>,

    /// Narration tone, e.g. "friendly tutor"
    pub tone: String,

    /// Difficulty the explanations are pitched at
    pub difficulty: Difficulty,

    /// Target podcast length in minutes
    pub length_minutes: f64,
}

impl Default for PreferenceSet {
    fn default() -> Self {
        Self {
            focus_topics: Vec::new(),
            tone: "friendly tutor".to_string(),
            difficulty: Difficulty::default(),
            length_minutes: 5.0,
        }
    }
}

/// The five derived outputs, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ArtifactKind {
    NotesShort,
    NotesDetailed,
    Flashcards,
    Quiz,
    PodcastScript,
}

impl ArtifactKind {
    /// Fixed generation order
    pub const ALL: [ArtifactKind; 5] = [
        Self::NotesShort,
        Self::NotesDetailed,
        Self::Flashcards,
        Self::Quiz,
        Self::PodcastScript,
    ];

    /// Key used for this artifact in the output mapping
    pub fn key(&self) -> &'static str {
        match self {
            Self::NotesShort => "notesShort",
            Self::NotesDetailed => "notesDetailed",
            Self::Flashcards => "flashcards",
            Self::Quiz => "quiz",
            Self::PodcastScript => "podcastScript",
        }
    }

    /// Parse an artifact name as accepted on the command line.
    ///
    /// Accepts the output-mapping key ("notesShort") and its kebab-case
    /// spelling ("notes-short").
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "notesShort" | "notes-short" => Ok(Self::NotesShort),
            "notesDetailed" | "notes-detailed" => Ok(Self::NotesDetailed),
            "flashcards" => Ok(Self::Flashcards),
            "quiz" => Ok(Self::Quiz),
            "podcastScript" | "podcast-script" => Ok(Self::PodcastScript),
            other => Err(LectioError::UnknownArtifact(other.to_string())),
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Which artifacts to generate, plus the shared preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArtifactRequest {
    pub notes_short: bool,
    pub notes_detailed: bool,
    pub flashcards: bool,
    pub quiz: bool,
    pub podcast_script: bool,
    pub prefs: PreferenceSet,
}

impl ArtifactRequest {
    /// Parse a request from its JSON options document.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw)
            .map_err(|e| LectioError::InvalidInput(format!("invalid options JSON: {e}")))
    }

    pub fn enable(&mut self, kind: ArtifactKind) {
        match kind {
            ArtifactKind::NotesShort => self.notes_short = true,
            ArtifactKind::NotesDetailed => self.notes_detailed = true,
            ArtifactKind::Flashcards => self.flashcards = true,
            ArtifactKind::Quiz => self.quiz = true,
            ArtifactKind::PodcastScript => self.podcast_script = true,
        }
    }

    pub fn is_requested(&self, kind: ArtifactKind) -> bool {
        match kind {
            ArtifactKind::NotesShort => self.notes_short,
            ArtifactKind::NotesDetailed => self.notes_detailed,
            ArtifactKind::Flashcards => self.flashcards,
            ArtifactKind::Quiz => self.quiz,
            ArtifactKind::PodcastScript => self.podcast_script,
        }
    }

    /// Requested kinds in the fixed generation order.
    pub fn requested(&self) -> Vec<ArtifactKind> {
        ArtifactKind::ALL
            .into_iter()
            .filter(|kind| self.is_requested(*kind))
            .collect()
    }
}

/// One question/answer study card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: u32,
    pub front: String,
    pub back: String,
    /// Source reference, "[MM:SS-MM:SS]"
    pub timestamp: String,
}

/// A generated batch of flashcards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashcardSet {
    pub flashcards: Vec<Flashcard>,
    pub total: u32,
}

impl FlashcardSet {
    /// Reject cards the model left blank.
    pub fn validate(&self) -> Result<()> {
        for card in &self.flashcards {
            if card.front.trim().is_empty() || card.back.trim().is_empty() {
                return Err(LectioError::InvalidArtifact {
                    artifact: "flashcards",
                    reason: format!("card {} has an empty front or back", card.id),
                });
            }
        }
        Ok(())
    }
}

/// One multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub question: String,
    pub options: Vec<String>,
    /// Zero-based index into `options`
    pub correct: u8,
    pub explanation: String,
}

/// A generated quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub questions: Vec<QuizQuestion>,
    pub total: u32,
}

impl Quiz {
    /// Check option count and correct-index bounds on every question.
    pub fn validate(&self) -> Result<()> {
        for question in &self.questions {
            if question.options.len() != 4 {
                return Err(LectioError::InvalidArtifact {
                    artifact: "quiz",
                    reason: format!(
                        "question {} has {} options, expected 4",
                        question.id,
                        question.options.len()
                    ),
                });
            }
            if question.correct > 3 {
                return Err(LectioError::InvalidArtifact {
                    artifact: "quiz",
                    reason: format!(
                        "question {} has correct index {} out of range [0,3]",
                        question.id, question.correct
                    ),
                });
            }
        }
        Ok(())
    }
}

/// Result mapping: one optional slot per artifact, keyed like the request.
///
/// Unset slots are skipped on serialization, so the output document only
/// ever contains keys that were requested and succeeded.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes_short: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes_detailed: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flashcards: Option<FlashcardSet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz: Option<Quiz>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub podcast_script: Option<String>,
}

impl ArtifactSet {
    pub fn is_empty(&self) -> bool {
        self.notes_short.is_none()
            && self.notes_detailed.is_none()
            && self.flashcards.is_none()
            && self.quiz.is_none()
            && self.podcast_script.is_none()
    }
}

/// A failed artifact, attributed to its kind.
#[derive(Debug)]
pub struct ArtifactFailure {
    pub kind: ArtifactKind,
    pub error: LectioError,
}

/// Outcome of one generation call: whatever succeeded, plus per-artifact
/// failures in request order.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub artifacts: ArtifactSet,
    pub failures: Vec<ArtifactFailure>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_parses_options_document() {
        let raw = r#"{
            "quiz": true,
            "podcastScript": true,
            "prefs": {
                "focusTopics": ["neural networks"],
                "tone": "calm lecturer",
                "difficulty": "advanced",
                "lengthMinutes": 8
            }
        }"#;

        let request = ArtifactRequest::from_json(raw).unwrap();
        assert!(request.quiz);
        assert!(request.podcast_script);
        assert!(!request.notes_short);
        assert_eq!(request.prefs.focus_topics, vec!["neural networks"]);
        assert_eq!(request.prefs.difficulty, Difficulty::Advanced);
        assert_eq!(request.prefs.length_minutes, 8.0);
    }

    #[test]
    fn request_defaults_are_all_off() {
        let request = ArtifactRequest::from_json("{}").unwrap();
        assert!(request.requested().is_empty());
        assert_eq!(request.prefs.tone, "friendly tutor");
        assert_eq!(request.prefs.difficulty, Difficulty::Intermediate);
        assert_eq!(request.prefs.length_minutes, 5.0);
    }

    #[test]
    fn bad_difficulty_is_invalid_input() {
        let err = ArtifactRequest::from_json(r#"{"prefs": {"difficulty": "expert"}}"#).unwrap_err();
        assert!(matches!(err, LectioError::InvalidInput(_)));
    }

    #[test]
    fn requested_kinds_keep_fixed_order() {
        let mut request = ArtifactRequest::default();
        request.enable(ArtifactKind::PodcastScript);
        request.enable(ArtifactKind::NotesShort);
        request.enable(ArtifactKind::Quiz);

        assert_eq!(
            request.requested(),
            vec![
                ArtifactKind::NotesShort,
                ArtifactKind::Quiz,
                ArtifactKind::PodcastScript
            ]
        );
    }

    #[test]
    fn unknown_artifact_name_is_rejected() {
        let err = ArtifactKind::parse("mindmap").unwrap_err();
        assert!(matches!(err, LectioError::UnknownArtifact(name) if name == "mindmap"));
    }

    #[test]
    fn artifact_names_parse_in_both_spellings() {
        assert_eq!(
            ArtifactKind::parse("notes-short").unwrap(),
            ArtifactKind::NotesShort
        );
        assert_eq!(
            ArtifactKind::parse("notesShort").unwrap(),
            ArtifactKind::NotesShort
        );
        assert_eq!(
            ArtifactKind::parse("podcast-script").unwrap(),
            ArtifactKind::PodcastScript
        );
    }

    #[test]
    fn quiz_validation_rejects_out_of_range_index() {
        let quiz = Quiz {
            questions: vec![QuizQuestion {
                id: 1,
                kind: "multiple_choice".to_string(),
                question: "?".to_string(),
                options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                correct: 4,
                explanation: "see [00:10]".to_string(),
            }],
            total: 1,
        };

        let err = quiz.validate().unwrap_err();
        assert!(matches!(
            err,
            LectioError::InvalidArtifact {
                artifact: "quiz",
                ..
            }
        ));
    }

    #[test]
    fn quiz_validation_rejects_wrong_option_count() {
        let quiz = Quiz {
            questions: vec![QuizQuestion {
                id: 2,
                kind: "multiple_choice".to_string(),
                question: "?".to_string(),
                options: vec!["a".into(), "b".into()],
                correct: 0,
                explanation: String::new(),
            }],
            total: 1,
        };

        assert!(quiz.validate().is_err());
    }

    #[test]
    fn flashcard_validation_rejects_blank_cards() {
        let set = FlashcardSet {
            flashcards: vec![Flashcard {
                id: 3,
                front: "Term".to_string(),
                back: "   ".to_string(),
                timestamp: "[00:05-00:10]".to_string(),
            }],
            total: 1,
        };

        assert!(set.validate().is_err());
    }

    #[test]
    fn empty_artifact_set_serializes_to_empty_object() {
        let set = ArtifactSet::default();
        assert_eq!(serde_json::to_string(&set).unwrap(), "{}");
    }
}
