//! Per-artifact prompt construction.
//!
//! Deterministic string templates; every model interaction happens
//! elsewhere. Notes and podcast prompts honor the preference set, the
//! structured prompts (flashcards, quiz) pin an exact JSON shape instead.

use crate::artifacts::PreferenceSet;

/// Build the prompt for concise bullet-point notes.
pub fn short_notes_prompt(transcript: &str, prefs: &PreferenceSet) -> String {
    let focus = focus_line("Focus on these topics: ", &prefs.focus_topics);
    format!(
        "You are an expert note-taker. Summarize the following lecture transcript into concise, bullet-point notes.\n\
Format: Use markdown with clear bullet points. Keep it brief and highlight only the most important points.\n\
{focus}\
\n\
Transcript:\n\
{transcript}\n\
\n\
Generate concise bullet-point notes:"
    )
}

/// Build the prompt for sectioned, timestamped study notes.
pub fn detailed_notes_prompt(transcript: &str, prefs: &PreferenceSet) -> String {
    let focus = focus_line("Focus on these topics: ", &prefs.focus_topics);
    let tone = &prefs.tone;
    let difficulty = prefs.difficulty.as_str();
    format!(
        "You are an expert educator creating detailed study notes from a lecture transcript.\n\
Tone: {tone}\n\
Difficulty level: {difficulty}\n\
{focus}\
\n\
Create comprehensive notes that:\n\
1. Break the content into logical sections with headers\n\
2. Include timestamps for reference (format: [MM:SS])\n\
3. Explain concepts clearly at the {difficulty} level\n\
4. Use markdown formatting with headers, bullet points, and emphasis\n\
5. Add summaries for each section\n\
\n\
Transcript:\n\
{transcript}\n\
\n\
Generate detailed lecture notes:"
    )
}

/// Build the prompt for a flashcard batch with a pinned JSON shape.
pub fn flashcards_prompt(transcript: &str) -> String {
    format!(
        "Create 8-10 flashcards from this lecture transcript.\n\
Each flashcard should have:\n\
- A clear question or term on the front\n\
- A concise answer or definition on the back\n\
- A timestamp reference from the transcript\n\
\n\
Format your response as valid JSON with this structure:\n\
{{\n\
  \"flashcards\": [\n\
    {{\n\
      \"id\": 1,\n\
      \"front\": \"Question or term\",\n\
      \"back\": \"Answer or definition\",\n\
      \"timestamp\": \"[MM:SS-MM:SS]\"\n\
    }}\n\
  ],\n\
  \"total\": 10\n\
}}\n\
\n\
Transcript:\n\
{transcript}\n\
\n\
Generate flashcards in JSON format (respond with ONLY the JSON, no markdown formatting):"
    )
}

/// Build the prompt for a multiple-choice quiz with a pinned JSON shape.
pub fn quiz_prompt(transcript: &str) -> String {
    format!(
        "Create a 5-question multiple-choice quiz from this lecture transcript.\n\
Each question should:\n\
- Test understanding of key concepts\n\
- Have 4 options (A, B, C, D)\n\
- Include the correct answer index (0-3)\n\
- Provide an explanation with timestamp reference\n\
\n\
Format your response as valid JSON with this structure:\n\
{{\n\
  \"questions\": [\n\
    {{\n\
      \"id\": 1,\n\
      \"type\": \"multiple_choice\",\n\
      \"question\": \"Question text\",\n\
      \"options\": [\"Option A\", \"Option B\", \"Option C\", \"Option D\"],\n\
      \"correct\": 0,\n\
      \"explanation\": \"Explanation with [MM:SS] reference\"\n\
    }}\n\
  ],\n\
  \"total\": 5\n\
}}\n\
\n\
Transcript:\n\
{transcript}\n\
\n\
Generate quiz in JSON format (respond with ONLY the JSON, no markdown formatting):"
    )
}

/// Build the prompt for a spoken-style podcast script.
pub fn podcast_script_prompt(transcript: &str, prefs: &PreferenceSet) -> String {
    let focus = focus_line("Focus on: ", &prefs.focus_topics);
    let tone = &prefs.tone;
    let length = prefs.length_minutes;
    format!(
        "Create a {length}-minute podcast script that summarizes this lecture.\n\
Tone: {tone}\n\
{focus}\
\n\
The script should:\n\
1. Start with an engaging intro\n\
2. Cover the main points in a conversational way\n\
3. Use natural spoken language\n\
4. End with a memorable conclusion\n\
5. Include [INTRO MUSIC], [MAIN CONTENT], [OUTRO MUSIC] markers\n\
\n\
Transcript:\n\
{transcript}\n\
\n\
Generate podcast script:"
    )
}

/// Comma-joined focus directive, or nothing at all when no topics are set.
fn focus_line(prefix: &str, topics: &[String]) -> String {
    if topics.is_empty() {
        String::new()
    } else {
        format!("{prefix}{}\n", topics.join(", "))
    }
}
