//! Transcript input types and formatting.
//!
//! Transcripts come from an external speech-to-text stage as JSON; this
//! module parses them and renders the timestamped text block fed to prompts.

mod format;
mod types;

pub use format::{format_timestamp, format_transcript};
pub use types::{Segment, Transcript};
