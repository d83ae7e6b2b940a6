//! Application entry point.
//!
//! Orchestrates the complete flow: load inputs → merge → format → write.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{Result, TurnscribeError};
use crate::format::{self, OutputFormat};
use crate::merge;
use crate::types::{AsrResult, DiarizationResult};

/// Run one merge invocation from parsed CLI arguments.
pub fn run(cli: Cli) -> Result<()> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(Config::default_path);
    let config = Config::load_or_default(&config_path).with_env_overrides();
    debug!("using config from {}", config_path.display());

    // CLI flags win over config file values.
    let format: OutputFormat = cli
        .format
        .as_deref()
        .unwrap_or(config.output.format.as_str())
        .parse()?;
    let remove_fillers = cli.remove_fillers || config.merge.remove_fillers;

    let asr: AsrResult = read_json(&cli.asr)?;
    let diarization: Option<DiarizationResult> = match cli.diarization.as_deref() {
        Some(path) => Some(read_json(path)?),
        None => None,
    };
    info!(
        "loaded ASR result ({:.1} s) from {}",
        asr.duration,
        cli.asr.display()
    );

    let segments = merge::merge_results(&asr, diarization.as_ref(), remove_fillers);
    let metadata = format::build_metadata(&segments, asr.duration, source_name(&cli.asr));
    let rendered = format::render(format, &segments, &metadata)?;

    match cli.output.as_deref() {
        Some(path) => {
            fs::write(path, &rendered)?;
            if !cli.quiet {
                eprintln!(
                    "Wrote {} segment(s), {} speaker(s) to {}",
                    segments.len(),
                    metadata.speakers.len(),
                    path.display()
                );
            }
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

/// The source file name recorded in the metadata: the input's file stem
/// plus extension, without its directory.
fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path).map_err(|source| TurnscribeError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|e| TurnscribeError::InputParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
