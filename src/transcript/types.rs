//! Transcript data model

use serde::{Deserialize, Serialize};

use crate::{LectioError, Result};

/// One timestamped span of transcribed speech.
///
/// Fields default individually so a sloppy upstream payload degrades to
/// zero times / empty text instead of failing the whole transcript.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Segment {
    /// Start time in seconds from the beginning of the recording
    pub start: f64,

    /// End time in seconds
    pub end: f64,

    /// Transcribed text
    pub text: String,
}

/// A full transcript: language tag plus ordered segments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Transcript {
    /// Language code reported by the speech-to-text stage (e.g. "en")
    pub language: String,

    /// Segments in spoken order
    pub segments: Vec<Segment>,
}

impl Transcript {
    /// Parse a transcript from its JSON wire format.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw)
            .map_err(|e| LectioError::InvalidInput(format!("invalid transcript JSON: {e}")))
    }
}
