//! Data types shared between the merge pipeline, the formatters and the CLI.
//!
//! Times are seconds from the start of the recording (`f64`); confidences
//! are `f32` in 0..1 as reported by the ASR backend.

use serde::{Deserialize, Serialize};

/// An indivisible ASR unit: a subword token with its time span.
///
/// Token text may begin with whitespace, which marks a word boundary
/// (SentencePiece convention). Tokens arrive ordered by start time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenTiming {
    pub token: String,
    pub start: f64,
    pub end: f64,
    pub confidence: f32,
}

impl TokenTiming {
    pub fn new(token: impl Into<String>, start: f64, end: f64, confidence: f32) -> Self {
        Self {
            token: token.into(),
            start,
            end,
            confidence,
        }
    }
}

/// A whole word assembled from one or more tokens.
///
/// `start` is the first contributing token's start, `end` the last one's
/// end. Within a session, `start` is monotonically non-decreasing across
/// consecutive words.
#[derive(Debug, Clone, PartialEq)]
pub struct WordTiming {
    /// Word text with the word-opening whitespace trimmed.
    pub word: String,
    pub start: f64,
    pub end: f64,
    /// Arithmetic mean of the contributing token confidences.
    pub confidence: f32,
}

impl WordTiming {
    pub fn new(word: impl Into<String>, start: f64, end: f64, confidence: f32) -> Self {
        Self {
            word: word.into(),
            start,
            end,
            confidence,
        }
    }

    /// Wall-clock span of this word in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Diarizer output: a time span attributed to one speaker.
///
/// `speaker_id` is opaque and stable only within a single diarization
/// result. Segments may overlap each other and need not cover the whole
/// timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakerSegment {
    pub speaker_id: String,
    pub start: f64,
    pub end: f64,
}

impl SpeakerSegment {
    pub fn new(speaker_id: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            speaker_id: speaker_id.into(),
            start,
            end,
        }
    }
}

/// A word with its tentative speaker assignment.
///
/// `None` means no diarization segment was close enough to claim the word.
/// The repair passes mutate `speaker` in place; `word` never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributedWord {
    pub word: WordTiming,
    pub speaker: Option<String>,
}

impl AttributedWord {
    pub fn new(word: WordTiming, speaker: Option<String>) -> Self {
        Self { word, speaker }
    }
}

/// Complete ASR output for one audio source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsrResult {
    /// Full transcript text. Used only as a fallback when token timings
    /// are missing.
    #[serde(default)]
    pub text: String,
    /// Total audio duration in seconds.
    pub duration: f64,
    #[serde(default)]
    pub token_timings: Option<Vec<TokenTiming>>,
}

/// Complete diarization output for one audio source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiarizationResult {
    #[serde(default)]
    pub segments: Vec<SpeakerSegment>,
}

/// One speaker-attributed span of the final transcript.
///
/// Consecutive segments never overlap in time and `text` is a single-line,
/// single-space join of the contributing words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub start: f64,
    pub end: f64,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub speaker: Option<String>,
}

impl TranscriptSegment {
    pub fn new(start: f64, end: f64, text: impl Into<String>, speaker: Option<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
            speaker,
        }
    }
}

/// Summary record handed to the output formatters alongside the segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptMetadata {
    /// Total audio duration in seconds.
    pub duration: f64,
    /// Distinct speaker IDs in order of first appearance.
    pub speakers: Vec<String>,
    /// Name of the audio file this transcript was produced from.
    pub source_file: String,
}
