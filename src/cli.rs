//! Command-line interface for turnscribe
//!
//! Provides argument parsing using clap derive macros.

use clap::Parser;
use std::path::PathBuf;

/// Speaker-attributed transcripts from ASR and diarization output
#[derive(Parser, Debug)]
#[command(
    name = "turnscribe",
    version,
    about = "Speaker-attributed transcripts from ASR and diarization output"
)]
pub struct Cli {
    /// ASR result JSON (text, duration, token timings)
    #[arg(value_name = "ASR_JSON")]
    pub asr: PathBuf,

    /// Diarization result JSON (speaker segments); omit for an
    /// unattributed transcript
    #[arg(long, short = 'd', value_name = "PATH")]
    pub diarization: Option<PathBuf>,

    /// Output format: plain, markdown, json, srt, vtt
    #[arg(long, short = 'f', value_name = "FORMAT")]
    pub format: Option<String>,

    /// Drop unambiguous filler words (um, uh, ...) before grouping
    #[arg(long)]
    pub remove_fillers: bool,

    /// Write output to a file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress status messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output (-v: stage summaries, -vv: full diagnostics)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
