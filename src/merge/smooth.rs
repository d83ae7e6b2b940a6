//! Nil-speaker absorption and short-run smoothing.
//!
//! Two post-hoc refinements on the attributed word sequence. Absorption
//! fills unassigned words from the temporally closer assigned neighbor;
//! smoothing repeatedly merges runs shorter than the threshold into an
//! adjacent run, since sub-second attribution flickers are diarization
//! noise rather than real turns.

use std::cmp::Ordering;
use std::ops::Range;

use log::debug;

use crate::defaults::SHORT_RUN_SECS;
use crate::types::AttributedWord;

/// A maximal contiguous subsequence of words sharing one speaker value
/// (including a shared nil).
#[derive(Debug, Clone, PartialEq)]
struct Run {
    /// Word index range covered by this run.
    words: Range<usize>,
    speaker: Option<String>,
    /// Wall-clock span: last word's end minus first word's start.
    duration: f64,
}

/// Assign each nil-speaker word the nearer of its non-nil neighbors.
///
/// Distance is measured start-to-end (gap to the neighbor word); ties
/// break toward the backward neighbor. The sweep runs left to right on the
/// live sequence, so an absorbed word can serve as the neighbor for later
/// nil words. Words with no assigned neighbor on either side stay nil.
pub fn absorb_unassigned(words: &mut [AttributedWord]) {
    let mut absorbed = 0usize;

    for i in 0..words.len() {
        if words[i].speaker.is_some() {
            continue;
        }

        let backward = words[..i]
            .iter()
            .rev()
            .find(|w| w.speaker.is_some())
            .map(|w| (w.speaker.clone(), words[i].word.start - w.word.end));
        let forward = words[i + 1..]
            .iter()
            .find(|w| w.speaker.is_some())
            .map(|w| (w.speaker.clone(), w.word.start - words[i].word.end));

        words[i].speaker = match (backward, forward) {
            (Some((speaker, back)), Some((_, ahead))) if back <= ahead => speaker,
            (_, Some((speaker, _))) | (Some((speaker, _)), None) => speaker,
            (None, None) => None,
        };
        if words[i].speaker.is_some() {
            absorbed += 1;
        }
    }

    if absorbed > 0 {
        debug!("absorbed {absorbed} unassigned word(s) into neighboring runs");
    }
}

/// Iteratively merge runs shorter than [`SHORT_RUN_SECS`] into a neighbor.
///
/// Each round merges the single shortest run (leftmost on ties): edge runs
/// merge inward, interior runs merge into the longer neighbor (ties toward
/// the previous). Every round reduces the run count, so termination is
/// guaranteed; afterwards no run is shorter than the threshold unless only
/// one run remains.
pub fn smooth_short_runs(words: &mut [AttributedWord]) {
    let mut merged = 0usize;

    loop {
        let runs = build_runs(words);
        if runs.len() <= 1 {
            break;
        }

        let Some((idx, shortest)) = runs
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                a.duration
                    .partial_cmp(&b.duration)
                    .unwrap_or(Ordering::Equal)
            })
        else {
            break;
        };
        if shortest.duration >= SHORT_RUN_SECS {
            break;
        }

        let target = if idx == 0 {
            1
        } else if idx == runs.len() - 1 {
            idx - 1
        } else if runs[idx + 1].duration > runs[idx - 1].duration {
            idx + 1
        } else {
            idx - 1
        };

        let speaker = runs[target].speaker.clone();
        for w in &mut words[shortest.words.clone()] {
            w.speaker = speaker.clone();
        }
        merged += 1;
    }

    if merged > 0 {
        debug!("smoothed {merged} sub-threshold run(s)");
    }
}

/// Split the sequence into maximal same-speaker runs.
fn build_runs(words: &[AttributedWord]) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();

    for (i, w) in words.iter().enumerate() {
        match runs.last_mut() {
            Some(run) if run.speaker == w.speaker => {
                run.words.end = i + 1;
                run.duration = w.word.end - words[run.words.start].word.start;
            }
            _ => runs.push(Run {
                words: i..i + 1,
                speaker: w.speaker.clone(),
                duration: w.word.duration(),
            }),
        }
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WordTiming;

    fn aw(text: &str, start: f64, end: f64, speaker: Option<&str>) -> AttributedWord {
        AttributedWord::new(
            WordTiming::new(text, start, end, 0.9),
            speaker.map(str::to_string),
        )
    }

    fn speakers(words: &[AttributedWord]) -> Vec<Option<&str>> {
        words.iter().map(|w| w.speaker.as_deref()).collect()
    }

    // ── absorption ──────────────────────────────────────────────────────────

    #[test]
    fn nil_word_takes_the_temporally_closer_neighbor() {
        let mut words = vec![
            aw("left", 0.0, 0.5, Some("A")),
            aw("mid", 1.5, 1.7, None),
            aw("right", 1.8, 2.2, Some("B")),
        ];
        absorb_unassigned(&mut words);
        // 1.0 s behind A, 0.1 s ahead of B.
        assert_eq!(speakers(&words), vec![Some("A"), Some("B"), Some("B")]);
    }

    #[test]
    fn distance_tie_breaks_backward() {
        let mut words = vec![
            aw("left", 0.0, 1.0, Some("A")),
            aw("mid", 1.2, 1.4, None),
            aw("right", 1.6, 2.0, Some("B")),
        ];
        absorb_unassigned(&mut words);
        assert_eq!(speakers(&words), vec![Some("A"), Some("A"), Some("B")]);
    }

    #[test]
    fn leading_nils_absorb_forward() {
        let mut words = vec![
            aw("a", 0.0, 0.2, None),
            aw("b", 0.3, 0.5, None),
            aw("c", 0.6, 1.0, Some("B")),
        ];
        absorb_unassigned(&mut words);
        assert_eq!(speakers(&words), vec![Some("B"), Some("B"), Some("B")]);
    }

    #[test]
    fn all_nil_sequence_stays_nil() {
        let mut words = vec![aw("a", 0.0, 0.2, None), aw("b", 0.3, 0.5, None)];
        absorb_unassigned(&mut words);
        assert_eq!(speakers(&words), vec![None, None]);
    }

    #[test]
    fn absorbed_words_chain_left_to_right() {
        // The second nil sees the first one already absorbed into A.
        let mut words = vec![
            aw("a", 0.0, 1.0, Some("A")),
            aw("b", 1.1, 1.3, None),
            aw("c", 1.4, 1.6, None),
            aw("d", 4.0, 4.5, Some("B")),
        ];
        absorb_unassigned(&mut words);
        assert_eq!(
            speakers(&words),
            vec![Some("A"), Some("A"), Some("A"), Some("B")]
        );
    }

    // ── short-run smoothing ─────────────────────────────────────────────────

    #[test]
    fn sub_threshold_backchannel_is_merged_into_the_surrounding_turn() {
        let mut words = vec![
            aw("we", 0.0, 0.3, Some("A")),
            aw("should", 0.35, 0.6, Some("A")),
            aw("go", 0.65, 0.9, Some("A")),
            aw("mhm", 0.9, 1.0, Some("B")),
            aw("there", 1.05, 1.4, Some("A")),
            aw("today", 1.45, 1.8, Some("A")),
        ];
        smooth_short_runs(&mut words);
        assert!(words.iter().all(|w| w.speaker.as_deref() == Some("A")));
    }

    #[test]
    fn first_run_merges_into_the_second() {
        let mut words = vec![
            aw("oh", 0.0, 0.2, Some("A")),
            aw("well", 0.3, 1.0, Some("B")),
            aw("then", 1.1, 2.1, Some("B")),
        ];
        smooth_short_runs(&mut words);
        assert!(words.iter().all(|w| w.speaker.as_deref() == Some("B")));
    }

    #[test]
    fn last_run_merges_into_the_previous() {
        let mut words = vec![
            aw("that", 0.0, 0.8, Some("A")),
            aw("works", 0.9, 1.9, Some("A")),
            aw("yeah", 2.0, 2.3, Some("B")),
        ];
        smooth_short_runs(&mut words);
        assert!(words.iter().all(|w| w.speaker.as_deref() == Some("A")));
    }

    #[test]
    fn interior_run_merges_into_the_longer_neighbor() {
        let mut words = vec![
            aw("a", 0.0, 0.5, Some("A")),
            aw("flick", 0.6, 0.7, Some("B")),
            aw("b", 0.8, 2.8, Some("C")),
            aw("c", 2.9, 4.5, Some("C")),
        ];
        smooth_short_runs(&mut words);
        // The C run (3.7 s) outweighs the A run (0.5 s), so the flicker
        // joins C; the A run then merges too (first run, still short).
        assert!(words.iter().all(|w| w.speaker.as_deref() == Some("C")));
    }

    #[test]
    fn runs_at_or_above_threshold_are_kept() {
        let mut words = vec![
            aw("a", 0.0, 0.7, Some("A")),
            aw("b", 0.8, 1.5, Some("A")),
            aw("c", 1.6, 2.3, Some("B")),
            aw("d", 2.4, 3.1, Some("B")),
        ];
        smooth_short_runs(&mut words);
        assert_eq!(
            speakers(&words),
            vec![Some("A"), Some("A"), Some("B"), Some("B")]
        );
    }

    #[test]
    fn single_run_is_never_touched() {
        let mut words = vec![aw("short", 0.0, 0.2, Some("A"))];
        smooth_short_runs(&mut words);
        assert_eq!(speakers(&words), vec![Some("A")]);
    }

    #[test]
    fn no_sub_threshold_runs_survive_smoothing() {
        let mut words = vec![
            aw("a", 0.0, 1.6, Some("A")),
            aw("b", 1.7, 1.9, Some("B")),
            aw("c", 2.0, 2.2, Some("C")),
            aw("d", 2.3, 4.0, Some("D")),
        ];
        smooth_short_runs(&mut words);
        let runs = build_runs(&words);
        assert!(
            runs.len() == 1 || runs.iter().all(|r| r.duration >= SHORT_RUN_SECS),
            "short run survived: {runs:?}"
        );
    }

    #[test]
    fn nil_runs_participate_in_smoothing() {
        // A short nil run between two long assigned runs is merged like any
        // other run.
        let mut words = vec![
            aw("a", 0.0, 1.8, Some("A")),
            aw("b", 1.9, 2.0, None),
            aw("c", 2.1, 4.0, Some("B")),
        ];
        smooth_short_runs(&mut words);
        let runs = build_runs(&words);
        assert_eq!(runs.len(), 2);
        assert!(words[1].speaker.is_some());
    }

    // ── run construction ────────────────────────────────────────────────────

    #[test]
    fn build_runs_groups_consecutive_equal_speakers() {
        let words = vec![
            aw("a", 0.0, 0.5, Some("A")),
            aw("b", 0.6, 1.0, Some("A")),
            aw("c", 1.1, 1.5, None),
            aw("d", 1.6, 2.0, Some("A")),
        ];
        let runs = build_runs(&words);
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0].words, 0..2);
        assert!((runs[0].duration - 1.0).abs() < 1e-9);
        assert_eq!(runs[1].speaker, None);
        assert_eq!(runs[2].words, 3..4);
    }
}
