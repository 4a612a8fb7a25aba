//! Low-level FFmpeg command wrapper.
//!
//! Builds the channelsplit filter graph and argument list, then runs one
//! blocking FFmpeg process per input file with stdout/stderr captured
//! instead of streamed to the console.

use std::ffi::OsString;
use std::io;
use std::process::Command;

use super::job::ExtractionJob;
use super::types::{ExtractError, ExtractResult};
use crate::models::{CHANNELS_5_1, CHANNEL_LAYOUT};

/// Default program name, resolved on PATH.
pub const DEFAULT_PROGRAM: &str = "ffmpeg";

/// Build the channelsplit filter graph.
///
/// Declares the fixed 5.1 layout and one named output pad per channel:
/// `channelsplit=channel_layout=5.1[FL][FR][C][LFE][SL][SR]`
pub fn filter_graph() -> String {
    let mut graph = format!("channelsplit=channel_layout={}", CHANNEL_LAYOUT);
    for channel in &CHANNELS_5_1 {
        graph.push('[');
        graph.push_str(channel.label);
        graph.push(']');
    }
    graph
}

/// Build the full FFmpeg argument list for one job.
///
/// One invocation produces all six mono outputs: `-ac 1` forces the mono
/// downmix on every mapped pad and `-y` overwrites existing files, keeping
/// reruns idempotent.
pub fn build_args(job: &ExtractionJob) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "-i".into(),
        job.input_path.clone().into_os_string(),
        "-filter_complex".into(),
        filter_graph().into(),
        "-ac".into(),
        "1".into(),
        "-y".into(),
    ];

    for arg in job.format.codec_args() {
        args.push((*arg).into());
    }

    for channel in &CHANNELS_5_1 {
        args.push("-map".into());
        args.push(format!("[{}]", channel.label).into());
        args.push(job.channel_output_path(channel).into_os_string());
    }

    args
}

/// Runs FFmpeg invocations for extraction jobs.
#[derive(Debug, Clone)]
pub struct FfmpegRunner {
    /// Program name or path handed to the OS.
    program: String,
}

impl FfmpegRunner {
    /// Runner using `ffmpeg` from PATH.
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }

    /// Runner using a specific program name or path.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The program this runner invokes.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run one job to completion, capturing output.
    ///
    /// A non-zero exit becomes [`ExtractError::CommandFailed`] carrying the
    /// exit code and captured stderr. A spawn failure with `NotFound` means
    /// the tool itself is missing and becomes [`ExtractError::ToolMissing`].
    pub fn run(&self, job: &ExtractionJob) -> ExtractResult<()> {
        let args = build_args(job);

        tracing::debug!("Running: {} {:?}", self.program, args);

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => ExtractError::tool_missing(&self.program),
                _ => ExtractError::io_error(format!("spawning {}", self.program), e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(ExtractError::command_failed(
                output.status.code().unwrap_or(-1),
                stderr,
            ));
        }

        Ok(())
    }
}

impl Default for FfmpegRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OutputFormat;
    use std::path::Path;

    fn test_job(format: OutputFormat) -> ExtractionJob {
        ExtractionJob::new(
            "/music/Serotonin/Track1.m4a",
            "Serotonin",
            Path::new("/out"),
            format,
        )
    }

    #[test]
    fn filter_graph_declares_layout_and_pads() {
        assert_eq!(
            filter_graph(),
            "channelsplit=channel_layout=5.1[FL][FR][C][LFE][SL][SR]"
        );
    }

    #[test]
    fn args_follow_documented_shape() {
        let args = build_args(&test_job(OutputFormat::Wav));
        let args: Vec<String> = args
            .iter()
            .map(|a| a.to_string_lossy().to_string())
            .collect();

        assert_eq!(
            &args[..7],
            [
                "-i",
                "/music/Serotonin/Track1.m4a",
                "-filter_complex",
                "channelsplit=channel_layout=5.1[FL][FR][C][LFE][SL][SR]",
                "-ac",
                "1",
                "-y",
            ]
        );
        assert_eq!(&args[7..9], ["-acodec", "pcm_s16le"]);

        // Six -map pairs follow the codec arguments.
        let maps: Vec<&String> = args.iter().filter(|a| *a == "-map").collect();
        assert_eq!(maps.len(), 6);
        assert_eq!(args[9], "-map");
        assert_eq!(args[10], "[FL]");
        assert_eq!(args[11], "/out/Serotonin/Track1/Track1_Front_Left.wav");
        assert_eq!(
            *args.last().unwrap(),
            "/out/Serotonin/Track1/Track1_Surround_Right.wav"
        );
    }

    #[test]
    fn codec_args_are_inserted_before_maps() {
        let args = build_args(&test_job(OutputFormat::Aac));
        let args: Vec<String> = args
            .iter()
            .map(|a| a.to_string_lossy().to_string())
            .collect();

        let acodec = args.iter().position(|a| a == "-acodec").unwrap();
        let first_map = args.iter().position(|a| a == "-map").unwrap();
        assert!(acodec < first_map);
        assert_eq!(args[acodec + 1], "aac");
        assert_eq!(args[acodec + 2], "-b:a");
        assert_eq!(args[acodec + 3], "256k");
    }

    #[test]
    fn default_runner_uses_path_ffmpeg() {
        assert_eq!(FfmpegRunner::default().program(), DEFAULT_PROGRAM);
    }

    #[test]
    fn missing_program_reports_tool_missing() {
        let runner = FfmpegRunner::with_program("ffmpeg-does-not-exist-4421");
        let result = runner.run(&test_job(OutputFormat::Wav));
        assert!(matches!(result, Err(ExtractError::ToolMissing { .. })));
    }

    #[test]
    fn nonzero_exit_reports_command_failed() {
        // `false` exits 1 without reading its arguments.
        let runner = FfmpegRunner::with_program("false");
        let result = runner.run(&test_job(OutputFormat::Wav));
        assert!(matches!(
            result,
            Err(ExtractError::CommandFailed { exit_code: 1, .. })
        ));
    }
}
