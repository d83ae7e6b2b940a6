//! Semantic constants of the merge pipeline.
//!
//! These values are fixed by design, not configuration: each one encodes an
//! empirical observation about how diarization output misaligns with ASR
//! timing. Changing any of them requires re-running the accuracy
//! benchmarks.

/// Overlap credit added to the previous word's speaker during assignment.
///
/// Diarization boundaries jitter around the true turn-taking point, so on a
/// near-tie the word most likely belongs to whoever was already talking.
/// The bonus is small enough that a clear overlap majority for a new
/// speaker still wins.
pub const CONTINUITY_BONUS_SECS: f64 = 0.08;

/// Maximum distance from a word's midpoint to the nearest diarization
/// segment for the nearest-segment fallback to apply.
///
/// Words farther than this from any segment stay unassigned and are picked
/// up later by nil-speaker absorption.
pub const FALLBACK_RADIUS_SECS: f64 = 2.0;

/// Minimum inter-word gap that counts as a real pause in the ASR timing.
///
/// Genuine turn-taking almost always coincides with a pause at least this
/// long; a speaker change across a smaller gap is treated as a lagging
/// diarization boundary.
pub const SNAP_PAUSE_SECS: f64 = 0.3;

/// Maximum number of words the snap pass may reassign at one boundary.
pub const SNAP_WORD_CAP: usize = 3;

/// Maximum accumulated duration the snap pass may reassign at one boundary.
pub const SNAP_DURATION_CAP_SECS: f64 = 2.0;

/// Runs shorter than this are merged into a neighboring run.
///
/// Short attribution flickers are almost always diarization noise
/// (backchannels smeared across turns), not real speaker changes.
pub const SHORT_RUN_SECS: f64 = 1.5;

/// Characters that terminate a sentence when they end a word.
pub const SENTENCE_ENDERS: &[char] = &['.', '!', '?'];

/// Inter-word gap treated as a sentence boundary even without punctuation.
pub const SENTENCE_PAUSE_SECS: f64 = 1.0;

/// How many upcoming words the grouping lookahead inspects for a speaker
/// change.
pub const LOOKAHEAD_WORDS: usize = 3;

/// Minimum gap to the next word for the lookahead split to fire.
///
/// Prevents splitting at mid-phrase punctuation such as "Mr. Smith".
pub const LOOKAHEAD_GAP_SECS: f64 = 0.15;

/// Hard ceiling on segment duration.
///
/// Bounds segment length when punctuation is absent (common for
/// non-English ASR output); the grouper splits at the last recorded
/// speaker change once this is reached.
pub const MAX_SEGMENT_SECS: f64 = 30.0;

/// Words removed by the opt-in filler filter, matched exactly after
/// normalization (lowercase, surrounding punctuation stripped).
///
/// The list is intentionally minimal: single-word, unambiguous fillers
/// only, so the transform stays predictable and safe for non-English
/// input.
pub const FILLER_WORDS: &[&str] = &[
    "um", "uh", "umm", "uhh", "hmm", "hm", "er", "ah", "erm", "eh", "mm",
];

/// Default output format when neither CLI nor config specifies one.
pub const DEFAULT_FORMAT: &str = "plain";
