//! Error and report types for extraction runs.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::OutputFormat;

/// Errors raised while extracting channels.
///
/// `CommandFailed` is recoverable: the batch records it and moves on to the
/// next file. Every other variant aborts the run.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Input directory missing or unreadable.
    #[error("Input directory not usable: {}: {message}", path.display())]
    InputDirUnusable { path: PathBuf, message: String },

    /// The FFmpeg executable could not be found.
    #[error(
        "FFmpeg not found (looked for '{program}'). \
         Install FFmpeg and make sure it is on your PATH"
    )]
    ToolMissing { program: String },

    /// FFmpeg ran but exited non-zero for one input file.
    #[error("FFmpeg exited with code {exit_code}:\n{stderr}")]
    CommandFailed { exit_code: i32, stderr: String },

    /// I/O failure outside the external command itself.
    #[error("I/O error in {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: io::Error,
    },
}

impl ExtractError {
    /// Create an unusable-input-directory error.
    pub fn input_dir_unusable(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::InputDirUnusable {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Create a missing-tool error.
    pub fn tool_missing(program: impl Into<String>) -> Self {
        Self::ToolMissing {
            program: program.into(),
        }
    }

    /// Create a command-failed error.
    pub fn command_failed(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self::CommandFailed {
            exit_code,
            stderr: stderr.into(),
        }
    }

    /// Create an I/O error with context.
    pub fn io_error(operation: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }
}

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Result of processing one input file.
#[derive(Debug)]
pub struct FileOutcome {
    /// Input file this outcome refers to.
    pub input: PathBuf,
    /// Folder the channel files were written to.
    pub output_dir: PathBuf,
    /// Failure, if the file was not fully extracted.
    pub failure: Option<ExtractError>,
}

impl FileOutcome {
    /// Outcome for a fully extracted file.
    pub fn success(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            failure: None,
        }
    }

    /// Outcome for a file whose extraction failed.
    pub fn failed(
        input: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        failure: ExtractError,
    ) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            failure: Some(failure),
        }
    }

    /// Whether all six channel files were produced.
    pub fn succeeded(&self) -> bool {
        self.failure.is_none()
    }
}

/// Summary of a whole extraction run.
#[derive(Debug)]
pub struct BatchReport {
    /// Album folder name the outputs were grouped under.
    pub album: String,
    /// Effective output format (after any coercion).
    pub format: OutputFormat,
    /// Per-file outcomes, in processing order.
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    /// Create an empty report.
    pub fn new(album: impl Into<String>, format: OutputFormat) -> Self {
        Self {
            album: album.into(),
            format,
            outcomes: Vec::new(),
        }
    }

    /// Record the outcome for one input file.
    pub fn record(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    /// Number of input files processed.
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of files fully extracted.
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded()).count()
    }

    /// Number of files that failed.
    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    /// Outcomes for files that failed, in processing order.
    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| !o.succeeded())
    }
}
