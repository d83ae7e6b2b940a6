//! Markdown transcript rendering with per-speaker blocks.

use crate::types::{TranscriptMetadata, TranscriptSegment};

use super::format_mmss;

/// Label used for segments without a speaker attribution.
const UNKNOWN_SPEAKER: &str = "Unknown";

/// Render a markdown document: a title from the source file, then one
/// block per speaker turn. Consecutive segments by the same speaker fold
/// into a single block.
pub fn render(segments: &[TranscriptSegment], metadata: &TranscriptMetadata) -> String {
    let mut out = String::new();
    out.push_str(&format!("# Transcript: {}\n", metadata.source_file));

    let mut current_speaker: Option<&str> = None;
    let mut first_block = true;

    for seg in segments {
        let speaker = seg.speaker.as_deref();
        if first_block || speaker != current_speaker {
            out.push('\n');
            out.push_str(&format!(
                "**{}** {}\n\n",
                speaker.unwrap_or(UNKNOWN_SPEAKER),
                format_mmss(seg.start)
            ));
            current_speaker = speaker;
            first_block = false;
        } else {
            // Continuation of the same turn: drop the trailing newline so
            // the text flows in one paragraph.
            while out.ends_with('\n') {
                out.pop();
            }
            out.push(' ');
        }
        out.push_str(&seg.text);
        out.push('\n');
    }

    out
}
