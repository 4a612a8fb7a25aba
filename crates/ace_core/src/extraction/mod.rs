//! Channel extraction: directory scanning, job construction, FFmpeg runs.
//!
//! The extractor walks one album folder, and for every `.m4a` file inside
//! it drives a single FFmpeg invocation that splits the fixed 5.1 layout
//! into six mono files:
//!
//! ```text
//! <output_root>/<album>/<song>/<song>_Front_Left.<ext>
//!                              <song>_Front_Right.<ext>
//!                              <song>_Center.<ext>
//!                              <song>_LFE.<ext>
//!                              <song>_Surround_Left.<ext>
//!                              <song>_Surround_Right.<ext>
//! ```
//!
//! Processing is sequential and blocking; each invocation finishes (with
//! output captured) before the next file starts. A failing invocation is
//! recorded and skipped, a missing FFmpeg binary aborts the whole run.

mod ffmpeg;
mod job;
mod types;

pub use ffmpeg::{build_args, filter_graph, FfmpegRunner, DEFAULT_PROGRAM};
pub use job::{album_name, ExtractionJob};
pub use types::{BatchReport, ExtractError, ExtractResult, FileOutcome};

use std::fs;
use std::path::{Path, PathBuf};

use crate::models::OutputFormat;

/// Select `.m4a` files from a directory (non-recursive).
///
/// Matches the exact lowercase suffix, so `.M4A` and `.m4a.bak` entries are
/// skipped. Order follows the OS directory listing and is not sorted.
pub fn scan_input_dir(dir: &Path) -> ExtractResult<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).map_err(|e| ExtractError::input_dir_unusable(dir, &e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ExtractError::input_dir_unusable(dir, &e))?;
        if entry.file_name().to_string_lossy().ends_with(".m4a") {
            files.push(entry.path());
        }
    }

    Ok(files)
}

/// Split every `.m4a` file under `input_dir` into six mono channel files.
///
/// `<album>` is the final component of `input_dir` and `<song>` the input
/// file stem; outputs land in `output_root/<album>/<song>/`. Single-file
/// FFmpeg failures are recorded in the report and the batch continues with
/// the next file. An unusable input directory or a missing FFmpeg binary
/// aborts the run; files not yet processed at that point are never touched.
pub fn extract_channels(
    input_dir: &Path,
    output_root: &Path,
    format: OutputFormat,
    runner: &FfmpegRunner,
) -> ExtractResult<BatchReport> {
    let input_dir = input_dir
        .canonicalize()
        .map_err(|e| ExtractError::input_dir_unusable(input_dir, &e))?;
    let album = album_name(&input_dir).ok_or_else(|| {
        ExtractError::input_dir_unusable(&input_dir, "path has no usable folder name")
    })?;

    tracing::info!("Album folder: '{}'", album);
    tracing::info!("Output format: {}", format);
    if format == OutputFormat::Mp3 {
        tracing::info!("MP3 output requires an FFmpeg build with libmp3lame support");
    }

    let files = scan_input_dir(&input_dir)?;
    tracing::info!(
        "Found {} .m4a file(s) in {}",
        files.len(),
        input_dir.display()
    );

    let mut report = BatchReport::new(album.clone(), format);
    for input_path in files {
        let job = ExtractionJob::new(input_path, &album, output_root, format);

        fs::create_dir_all(&job.output_dir)
            .map_err(|e| ExtractError::io_error("creating output folder", e))?;

        tracing::info!("Processing '{}' -> {}", job.song_name, job.output_dir.display());

        match runner.run(&job) {
            Ok(()) => {
                tracing::info!("Extracted 6 channels to {}", job.output_dir.display());
                report.record(FileOutcome::success(job.input_path, job.output_dir));
            }
            Err(failure @ ExtractError::CommandFailed { .. }) => {
                tracing::error!("Skipping '{}': {}", job.song_name, failure);
                report.record(FileOutcome::failed(job.input_path, job.output_dir, failure));
            }
            Err(fatal) => return Err(fatal),
        }
    }

    Ok(report)
}
