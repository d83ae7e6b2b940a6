//! Plain-text transcript rendering.

use crate::types::TranscriptSegment;

use super::format_mmss;

/// One line per segment: `[MM:SS] speaker: text` (speaker omitted when
/// unattributed).
pub fn render(segments: &[TranscriptSegment]) -> String {
    let mut out = String::new();

    for seg in segments {
        out.push_str(&format_mmss(seg.start));
        out.push(' ');
        if let Some(speaker) = seg.speaker.as_deref() {
            out.push_str(speaker);
            out.push_str(": ");
        }
        out.push_str(&seg.text);
        out.push('\n');
    }

    out
}
