//! The speaker-attribution and segmentation pipeline.
//!
//! Converts an ASR result (token timings) and an optional diarization
//! result (speaker segments) into speaker-attributed, sentence-aligned
//! transcript segments. Six stages run strictly in order:
//!
//! 1. token→word merge ([`words::merge_tokens`])
//! 2. optional filler removal ([`words::remove_fillers`])
//! 3. per-word speaker assignment ([`assign::assign_speakers`])
//! 4. snap-to-pause boundary repair ([`snap::snap_to_pauses`])
//! 5. nil absorption + short-run smoothing ([`smooth`])
//! 6. sentence-aware grouping ([`group`])
//!
//! The pipeline is total (malformed input is repaired or ignored, never
//! rejected), deterministic, and free of shared state: concurrent
//! invocations on disjoint inputs are safe.

pub mod assign;
pub mod group;
pub mod smooth;
pub mod snap;
pub mod words;

use log::debug;

use crate::types::{AsrResult, DiarizationResult, TranscriptSegment};

/// Merge an ASR result with an optional diarization result into transcript
/// segments.
///
/// Degenerate cases: without token timings the whole transcript becomes a
/// single unattributed segment spanning the full duration; if filler
/// removal leaves no words, a single empty segment is returned.
pub fn merge_results(
    asr: &AsrResult,
    diarization: Option<&DiarizationResult>,
    remove_fillers: bool,
) -> Vec<TranscriptSegment> {
    let tokens = match asr.token_timings.as_deref() {
        Some(tokens) if !tokens.is_empty() => tokens,
        _ => {
            return vec![TranscriptSegment::new(
                0.0,
                asr.duration,
                asr.text.trim(),
                None,
            )];
        }
    };

    let mut word_timings = words::merge_tokens(tokens);
    if remove_fillers {
        word_timings = words::remove_fillers(word_timings);
    }
    if word_timings.is_empty() {
        return vec![TranscriptSegment::new(0.0, asr.duration, "", None)];
    }

    match diarization {
        Some(result) => {
            let mut attributed = assign::assign_speakers(&word_timings, &result.segments);
            snap::snap_to_pauses(&mut attributed);
            smooth::absorb_unassigned(&mut attributed);
            smooth::smooth_short_runs(&mut attributed);
            let segments = group::group_attributed(&attributed);
            debug!(
                "merged {} words and {} speaker segments into {} transcript segments",
                attributed.len(),
                result.segments.len(),
                segments.len()
            );
            segments
        }
        None => group::group_plain(&word_timings),
    }
}
