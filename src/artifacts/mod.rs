//! Artifact generation engine.
//!
//! Builds one prompt per requested artifact, invokes the model, and parses
//! structured responses back into typed batches.

mod extract;
mod generator;
mod types;

pub use extract::extract_json;
pub use generator::Generator;
pub use types::{
    ArtifactFailure, ArtifactKind, ArtifactRequest, ArtifactSet, Difficulty, Flashcard,
    FlashcardSet, GenerationReport, PreferenceSet, Quiz, QuizQuestion,
};
