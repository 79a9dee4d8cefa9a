//! Transcript text formatting

use super::Segment;

/// Format seconds as a zero-padded MM:SS timestamp.
///
/// Minutes are not capped, so an hour-long mark renders as "61:01".
/// Negative or non-finite values render as "00:00".
pub fn format_timestamp(seconds: f64) -> String {
    let seconds = if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    };
    let mins = (seconds / 60.0) as u64;
    let secs = (seconds % 60.0) as u64;
    format!("{mins:02}:{secs:02}")
}

/// Render segments as one "[MM:SS-MM:SS] text" line each, in order.
///
/// Segments whose trimmed text is empty contribute no line.
pub fn format_transcript(segments: &[Segment]) -> String {
    segments
        .iter()
        .filter_map(|seg| {
            let text = seg.text.trim();
            if text.is_empty() {
                return None;
            }
            Some(format!(
                "[{}-{}] {}",
                format_timestamp(seg.start),
                format_timestamp(seg.end),
                text
            ))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
