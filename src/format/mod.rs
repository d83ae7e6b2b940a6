//! Transcript output formatting.
//!
//! All formatters are pure functions over the pipeline's output shape: an
//! ordered segment list plus a metadata record. File writing is the
//! caller's concern.

mod json;
mod markdown;
mod plain;
mod subtitle;

use std::str::FromStr;

use crate::error::{Result, TurnscribeError};
use crate::types::{TranscriptMetadata, TranscriptSegment};

/// Supported transcript output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text with `[MM:SS]` prefixes.
    Plain,
    /// Markdown with per-speaker blocks.
    Markdown,
    /// Structured JSON: `{metadata, segments}`.
    Json,
    /// SubRip subtitles.
    Srt,
    /// WebVTT subtitles.
    Vtt,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Markdown => "markdown",
            Self::Json => "json",
            Self::Srt => "srt",
            Self::Vtt => "vtt",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = TurnscribeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "plain" | "txt" | "text" => Ok(Self::Plain),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            "srt" => Ok(Self::Srt),
            "vtt" | "webvtt" => Ok(Self::Vtt),
            other => Err(TurnscribeError::UnknownFormat(other.to_string())),
        }
    }
}

/// Render segments in the requested format.
pub fn render(
    format: OutputFormat,
    segments: &[TranscriptSegment],
    metadata: &TranscriptMetadata,
) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(plain::render(segments)),
        OutputFormat::Markdown => Ok(markdown::render(segments, metadata)),
        OutputFormat::Json => json::render(segments, metadata),
        OutputFormat::Srt => Ok(subtitle::render_srt(segments)),
        OutputFormat::Vtt => Ok(subtitle::render_vtt(segments)),
    }
}

/// Build the metadata record for a segment list.
///
/// `speakers` collects distinct IDs in order of first appearance, which
/// keeps the record deterministic for identical input.
pub fn build_metadata(
    segments: &[TranscriptSegment],
    duration: f64,
    source_file: impl Into<String>,
) -> TranscriptMetadata {
    let mut speakers: Vec<String> = Vec::new();
    for seg in segments {
        if let Some(id) = seg.speaker.as_deref()
            && !speakers.iter().any(|s| s == id)
        {
            speakers.push(id.to_string());
        }
    }

    TranscriptMetadata {
        duration,
        speakers,
        source_file: source_file.into(),
    }
}

/// Format seconds as a `[MM:SS]` recording-relative prefix.
pub(crate) fn format_mmss(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    format!("[{:02}:{:02}]", total / 60, total % 60)
}
