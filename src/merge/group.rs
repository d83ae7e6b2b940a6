//! Sentence-aware segment grouping.
//!
//! Folds the attributed word sequence into transcript segments aligned to
//! sentence boundaries and speaker changes. A boundary is a sentence-ending
//! character or a long inter-word pause; segments are emitted when a
//! boundary coincides with a speaker change (directly or within a short
//! lookahead), and a safety cap bounds segment length when punctuation
//! never appears.

use crate::defaults::{
    LOOKAHEAD_GAP_SECS, LOOKAHEAD_WORDS, MAX_SEGMENT_SECS, SENTENCE_ENDERS, SENTENCE_PAUSE_SECS,
};
use crate::types::{AttributedWord, TranscriptSegment, WordTiming};

/// Group speaker-attributed words into transcript segments.
pub fn group_attributed(words: &[AttributedWord]) -> Vec<TranscriptSegment> {
    let mut segments = Vec::new();
    let mut acc: Vec<&AttributedWord> = Vec::new();
    // Accumulator index of the most recent speaker change, for the safety
    // cap. Zero means "none recorded".
    let mut last_change = 0usize;

    for (i, w) in words.iter().enumerate() {
        if let Some(prev) = acc.last()
            && prev.speaker != w.speaker
        {
            last_change = acc.len();
        }
        acc.push(w);

        let next = words.get(i + 1);
        let gap_to_next = next.map(|n| n.word.start - w.word.end);
        let boundary = ends_sentence(&w.word.word)
            || gap_to_next.is_some_and(|g| g > SENTENCE_PAUSE_SECS);
        let change_next = next.is_some_and(|n| n.speaker != w.speaker);

        // Clean split: boundary and the speaker changes right here.
        if boundary && change_next {
            segments.push(fold(&acc));
            acc.clear();
            last_change = 0;
            continue;
        }

        // Lookahead split: boundary inside a run, but the turn ends within
        // the next few words. The gap gate keeps mid-phrase punctuation
        // ("Mr. Smith") from splitting.
        if boundary
            && !change_next
            && gap_to_next.is_some_and(|g| g > LOOKAHEAD_GAP_SECS)
            && words[i + 1..]
                .iter()
                .take(LOOKAHEAD_WORDS)
                .any(|n| n.speaker != w.speaker)
        {
            segments.push(fold(&acc));
            acc.clear();
            last_change = 0;
            continue;
        }

        // Safety cap: force a split at the last known speaker change once
        // the accumulator spans too long.
        if let (Some(first), Some(last)) = (acc.first(), acc.last())
            && last.word.end - first.word.start >= MAX_SEGMENT_SECS
            && last_change > 0
        {
            segments.push(fold(&acc[..last_change]));
            acc.drain(..last_change);
            last_change = find_last_change(&acc);
        }
    }

    if !acc.is_empty() {
        segments.push(fold(&acc));
    }

    segments
}

/// Group plain words into segments when no diarization is available.
///
/// Same boundary detection, but every boundary emits (there is no speaker
/// gate) and all segments carry a nil speaker.
pub fn group_plain(words: &[WordTiming]) -> Vec<TranscriptSegment> {
    let mut segments = Vec::new();
    let mut acc: Vec<&WordTiming> = Vec::new();

    for (i, w) in words.iter().enumerate() {
        acc.push(w);

        let gap_to_next = words.get(i + 1).map(|n| n.start - w.end);
        let boundary =
            ends_sentence(&w.word) || gap_to_next.is_some_and(|g| g > SENTENCE_PAUSE_SECS);
        if boundary {
            segments.push(fold_plain(&acc));
            acc.clear();
        }
    }

    if !acc.is_empty() {
        segments.push(fold_plain(&acc));
    }

    segments
}

fn ends_sentence(word: &str) -> bool {
    word.chars()
        .last()
        .is_some_and(|c| SENTENCE_ENDERS.contains(&c))
}

/// Index of the last speaker change within the accumulator, or zero.
fn find_last_change(acc: &[&AttributedWord]) -> usize {
    (1..acc.len())
        .rev()
        .find(|&i| acc[i].speaker != acc[i - 1].speaker)
        .unwrap_or(0)
}

/// Collapse the accumulator into one segment.
fn fold(acc: &[&AttributedWord]) -> TranscriptSegment {
    let text = acc
        .iter()
        .map(|w| w.word.word.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    TranscriptSegment {
        start: acc.first().map_or(0.0, |w| w.word.start),
        end: acc.last().map_or(0.0, |w| w.word.end),
        text,
        speaker: majority_speaker(acc),
    }
}

fn fold_plain(acc: &[&WordTiming]) -> TranscriptSegment {
    let text = acc
        .iter()
        .map(|w| w.word.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    TranscriptSegment {
        start: acc.first().map_or(0.0, |w| w.start),
        end: acc.last().map_or(0.0, |w| w.end),
        text,
        speaker: None,
    }
}

/// The speaker owning the largest summed word duration in the segment.
///
/// Tallies keep first-appearance order and the argmax is strictly greater,
/// mirroring the assignment tie-break. All-nil segments get a nil speaker.
fn majority_speaker(acc: &[&AttributedWord]) -> Option<String> {
    let mut tallies: Vec<(&str, f64)> = Vec::new();

    for w in acc {
        let Some(id) = w.speaker.as_deref() else {
            continue;
        };
        match tallies.iter_mut().find(|(t, _)| *t == id) {
            Some((_, total)) => *total += w.word.duration(),
            None => tallies.push((id, w.word.duration())),
        }
    }

    let mut best: Option<(&str, f64)> = None;
    for &(id, total) in &tallies {
        if best.is_none_or(|(_, t)| total > t) {
            best = Some((id, total));
        }
    }

    best.map(|(id, _)| id.to_string())
}
