//! Structured JSON transcript rendering.
//!
//! The shape is consumed by downstream tooling (scoring, RTTM conversion),
//! so it is stable: `{"metadata": {...}, "segments": [...]}` with the
//! segment fields exactly as produced by the pipeline.

use serde::Serialize;

use crate::error::Result;
use crate::types::{TranscriptMetadata, TranscriptSegment};

#[derive(Serialize)]
struct JsonTranscript<'a> {
    metadata: &'a TranscriptMetadata,
    segments: &'a [TranscriptSegment],
}

/// Render the transcript as pretty-printed JSON.
pub fn render(segments: &[TranscriptSegment], metadata: &TranscriptMetadata) -> Result<String> {
    let doc = JsonTranscript { metadata, segments };
    let mut rendered = serde_json::to_string_pretty(&doc)?;
    rendered.push('\n');
    Ok(rendered)
}
