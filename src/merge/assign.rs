//! Per-word speaker assignment by diarization overlap.
//!
//! Each word is claimed by the speaker whose diarization segments overlap
//! it the most. Two refinements over a plain majority vote:
//!
//! - a small continuity bonus for the previous word's speaker, so near-ties
//!   at a jittery boundary resolve toward whoever was already talking;
//! - a nearest-segment fallback for words no segment touches at all, which
//!   happens when the diarizer leaves gaps around short utterances.

use crate::defaults::{CONTINUITY_BONUS_SECS, FALLBACK_RADIUS_SECS};
use crate::types::{AttributedWord, SpeakerSegment, WordTiming};

/// Assign a tentative speaker to every word, in order.
///
/// The "previous speaker" carried between words is the last non-nil
/// assignment; unassigned words leave it unchanged.
pub fn assign_speakers(words: &[WordTiming], segments: &[SpeakerSegment]) -> Vec<AttributedWord> {
    let mut attributed = Vec::with_capacity(words.len());
    let mut previous: Option<String> = None;

    for word in words {
        let speaker = assign_word(word, segments, previous.as_deref());
        if speaker.is_some() {
            previous = speaker.clone();
        }
        attributed.push(AttributedWord::new(word.clone(), speaker));
    }

    attributed
}

/// Pick the speaker for one word.
///
/// Overlap tallies are kept in first-appearance order and the argmax uses a
/// strictly-greater comparison, so ties resolve to the speaker seen
/// earliest in the diarization input. That rule is deterministic across
/// runs and platforms.
fn assign_word(
    word: &WordTiming,
    segments: &[SpeakerSegment],
    previous: Option<&str>,
) -> Option<String> {
    let mut tallies: Vec<(&str, f64)> = Vec::new();

    for seg in segments {
        let overlap = overlap(word.start, word.end, seg.start, seg.end);
        if overlap <= 0.0 {
            continue;
        }
        match tallies.iter_mut().find(|(id, _)| *id == seg.speaker_id) {
            Some((_, total)) => *total += overlap,
            None => tallies.push((seg.speaker_id.as_str(), overlap)),
        }
    }

    if let Some(prev) = previous
        && let Some((_, total)) = tallies.iter_mut().find(|(id, _)| *id == prev)
    {
        *total += CONTINUITY_BONUS_SECS;
    }

    let mut best: Option<(&str, f64)> = None;
    for &(id, total) in &tallies {
        if best.is_none_or(|(_, t)| total > t) {
            best = Some((id, total));
        }
    }

    match best {
        Some((id, _)) => Some(id.to_string()),
        None => nearest_segment(word, segments),
    }
}

/// Fallback for words with zero overlap: the segment whose interval is
/// closest to the word's midpoint, if it is within the search radius.
fn nearest_segment(word: &WordTiming, segments: &[SpeakerSegment]) -> Option<String> {
    let mid = (word.start + word.end) / 2.0;
    let mut best: Option<(&SpeakerSegment, f64)> = None;

    for seg in segments {
        let dist = if mid < seg.start {
            seg.start - mid
        } else if mid > seg.end {
            mid - seg.end
        } else {
            0.0
        };
        if best.is_none_or(|(_, d)| dist < d) {
            best = Some((seg, dist));
        }
    }

    best.filter(|(_, dist)| *dist <= FALLBACK_RADIUS_SECS)
        .map(|(seg, _)| seg.speaker_id.clone())
}

/// Length of the intersection of two intervals, clamped at zero.
fn overlap(a_start: f64, a_end: f64, b_start: f64, b_end: f64) -> f64 {
    (a_end.min(b_end) - a_start.max(b_start)).max(0.0)
}
