//! Snap speaker transitions to real pauses.
//!
//! Diarization boundaries systematically lag the true turn-taking point:
//! the outgoing speaker's last word or two get absorbed into the incoming
//! speaker's segment. Real turn-taking almost always coincides with a
//! pause in the ASR timing, so when a speaker change sits inside
//! continuous speech the boundary is moved forward to the first real pause
//! in the new speaker's run.

use log::debug;

use crate::defaults::{SNAP_DURATION_CAP_SECS, SNAP_PAUSE_SECS, SNAP_WORD_CAP};
use crate::types::AttributedWord;

/// Repair boundary-lagged words in place.
///
/// Never creates or removes entries; only reassigns `speaker`. Running the
/// pass twice yields the same result as running it once.
pub fn snap_to_pauses(words: &mut [AttributedWord]) {
    let mut moved = 0usize;
    let mut i = 1;

    while i < words.len() {
        let differs = match (&words[i - 1].speaker, &words[i].speaker) {
            (Some(prev), Some(cur)) => prev != cur,
            _ => false,
        };
        if !differs {
            i += 1;
            continue;
        }

        let gap = words[i].word.start - words[i - 1].word.end;
        if gap >= SNAP_PAUSE_SECS {
            // The transition already sits on a real pause.
            i += 1;
            continue;
        }

        match find_snap_point(words, i) {
            Some(j) => {
                let outgoing = words[i - 1].speaker.clone();
                for k in i..j {
                    words[k].speaker = outgoing.clone();
                }
                moved += j - i;
                i = j + 1;
            }
            None => i += 1,
        }
    }

    if moved > 0 {
        debug!("snap pass reassigned {moved} boundary-lagged word(s)");
    }
}

/// Scan forward from a pauseless transition at `i` for the first real
/// pause inside the incoming speaker's run.
///
/// The scan is bounded by [`SNAP_WORD_CAP`] words and
/// [`SNAP_DURATION_CAP_SECS`] accumulated duration (seeded with the
/// duration of `words[i]` itself), so a long pauseless monologue can never
/// be reattributed wholesale.
fn find_snap_point(words: &[AttributedWord], i: usize) -> Option<usize> {
    let mut accumulated = words[i].word.duration();
    let mut j = i + 1;

    while j < words.len()
        && words[j].speaker == words[i].speaker
        && j - i <= SNAP_WORD_CAP
        && accumulated < SNAP_DURATION_CAP_SECS
    {
        if words[j].word.start - words[j - 1].word.end >= SNAP_PAUSE_SECS {
            return Some(j);
        }
        accumulated += words[j].word.duration();
        j += 1;
    }

    None
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

    // ── core behavior ───────────────────────────────────────────────────────

    #[test]
    fn transition_on_a_real_pause_is_left_alone() {
        let mut words = vec![
            aw("done.", 0.0, 0.5, Some("A")),
            aw("Okay", 1.0, 1.3, Some("B")),
        ];
        snap_to_pauses(&mut words);
        assert_eq!(speakers(&words), vec![Some("A"), Some("B")]);
    }

    #[test]
    fn lagged_boundary_word_is_returned_to_the_outgoing_speaker() {
        // Continuous speech across the diarization boundary (0.08 s gap),
        // real pause (0.4 s) one word later.
        let mut words = vec![
            aw("у", 10.0, 10.2, Some("A")),
            aw("него", 10.3, 10.6, Some("A")),
            aw("ограниченный", 10.68, 11.7, Some("B")),
            aw("у", 12.1, 12.2, Some("B")),
            aw("меня", 12.3, 12.5, Some("B")),
        ];
        snap_to_pauses(&mut words);
        assert_eq!(
            speakers(&words),
            vec![Some("A"), Some("A"), Some("A"), Some("B"), Some("B")]
        );
    }

    #[test]
    fn two_lagged_words_move_together() {
        let mut words = vec![
            aw("so", 0.0, 0.3, Some("A")),
            aw("that's", 0.35, 0.7, Some("B")),
            aw("it", 0.75, 0.9, Some("B")),
            aw("Right", 1.4, 1.7, Some("B")),
        ];
        snap_to_pauses(&mut words);
        assert_eq!(
            speakers(&words),
            vec![Some("A"), Some("A"), Some("A"), Some("B")]
        );
    }

    // ── caps ────────────────────────────────────────────────────────────────

    #[test]
    fn word_cap_bounds_the_lookahead() {
        // Five continuous words after the boundary, pause only after the
        // fifth: beyond the 3-word cap, so nothing moves.
        let mut words = vec![
            aw("a", 0.0, 0.2, Some("A")),
            aw("b", 0.25, 0.45, Some("B")),
            aw("c", 0.5, 0.7, Some("B")),
            aw("d", 0.75, 0.95, Some("B")),
            aw("e", 1.0, 1.2, Some("B")),
            aw("f", 1.25, 1.45, Some("B")),
            aw("g", 2.0, 2.2, Some("B")),
        ];
        snap_to_pauses(&mut words);
        assert_eq!(
            speakers(&words),
            vec![
                Some("A"),
                Some("B"),
                Some("B"),
                Some("B"),
                Some("B"),
                Some("B"),
                Some("B")
            ]
        );
    }

    #[test]
    fn duration_cap_bounds_the_lookahead() {
        // One long word (1.9 s) at the boundary, then a short continuous
        // word; the accumulated duration passes 2.0 s before any pause.
        let mut words = vec![
            aw("well", 0.0, 0.3, Some("A")),
            aw("unquestionably", 0.35, 2.25, Some("B")),
            aw("yes", 2.3, 2.5, Some("B")),
            aw("next", 3.0, 3.2, Some("B")),
        ];
        snap_to_pauses(&mut words);
        assert_eq!(
            speakers(&words),
            vec![Some("A"), Some("B"), Some("B"), Some("B")]
        );
    }

    // ── edges ───────────────────────────────────────────────────────────────

    #[test]
    fn unassigned_neighbors_are_not_transitions() {
        let mut words = vec![
            aw("a", 0.0, 0.2, Some("A")),
            aw("b", 0.25, 0.45, None),
            aw("c", 0.5, 0.7, Some("B")),
        ];
        snap_to_pauses(&mut words);
        assert_eq!(speakers(&words), vec![Some("A"), None, Some("B")]);
    }

    #[test]
    fn pass_is_a_fixed_point() {
        let mut words = vec![
            aw("у", 10.0, 10.2, Some("A")),
            aw("него", 10.3, 10.6, Some("A")),
            aw("ограниченный", 10.68, 11.7, Some("B")),
            aw("у", 12.1, 12.2, Some("B")),
            aw("меня", 12.3, 12.5, Some("B")),
        ];
        snap_to_pauses(&mut words);
        let once = words.clone();
        snap_to_pauses(&mut words);
        assert_eq!(words, once);
    }

    #[test]
    fn empty_and_single_word_sequences_are_noops() {
        let mut empty: Vec<AttributedWord> = vec![];
        snap_to_pauses(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![aw("hi", 0.0, 0.3, Some("A"))];
        snap_to_pauses(&mut one);
        assert_eq!(speakers(&one), vec![Some("A")]);
    }
}
