//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Every field carries a serde default so partial files parse cleanly.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Path-related settings.
    #[serde(default)]
    pub paths: PathSettings,

    /// Extraction behavior.
    #[serde(default)]
    pub extraction: ExtractionSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Output and log directories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSettings {
    /// Root folder extracted channel trees are written under.
    #[serde(default = "default_output_root")]
    pub output_root: String,

    /// Folder for run log files.
    #[serde(default = "default_logs_folder")]
    pub logs_folder: String,

    /// Last input folder used, remembered between runs.
    #[serde(default)]
    pub last_input_dir: String,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            output_root: default_output_root(),
            logs_folder: default_logs_folder(),
            last_input_dir: String::new(),
        }
    }
}

fn default_output_root() -> String {
    "extracted_audio".to_string()
}

fn default_logs_folder() -> String {
    ".logs".to_string()
}

/// Extraction behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionSettings {
    /// Format token used when the format prompt is left blank.
    ///
    /// Kept as a raw token so an unknown value degrades to wav with a
    /// warning instead of failing the whole config parse.
    #[serde(default = "default_format")]
    pub default_format: String,

    /// FFmpeg program name or path (resolved on PATH when bare).
    #[serde(default = "default_ffmpeg_path")]
    pub ffmpeg_path: String,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            ffmpeg_path: default_ffmpeg_path(),
        }
    }
}

fn default_format() -> String {
    "wav".to_string()
}

fn default_ffmpeg_path() -> String {
    "ffmpeg".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default log level when RUST_LOG is not set.
    #[serde(default)]
    pub level: LogLevel,

    /// Also write a per-run log file into `paths.logs_folder`.
    #[serde(default = "default_log_to_file")]
    pub log_to_file: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            log_to_file: default_log_to_file(),
        }
    }
}

fn default_log_to_file() -> bool {
    true
}
