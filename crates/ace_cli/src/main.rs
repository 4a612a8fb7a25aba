//! Atmos Channel Extract - interactive entry point.
//!
//! Handles configuration loading, logging initialization, the three input
//! prompts (album folder, output format, output root), and the final run
//! summary. All extraction logic lives in `ace_core`.

use std::path::PathBuf;
use std::process::ExitCode;

use ace_core::config::ConfigManager;
use ace_core::extraction::{self, BatchReport, FfmpegRunner};
use ace_core::logging::{init_tracing, init_tracing_with_file};
use ace_core::models::OutputFormat;

mod prompt;

/// Config path: XDG config dir, falling back to the working directory.
fn default_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir
            .join("atmos-channel-extract")
            .join("settings.toml")
    } else {
        PathBuf::from("settings.toml")
    }
}

fn main() -> ExitCode {
    // Load configuration first (needed for the logs directory path).
    let config_path = default_config_path();
    let mut config = ConfigManager::new(&config_path);

    if let Err(e) = config.load_or_create() {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
    }

    let level = config.settings().logging.level;
    let _log_guard = if config.settings().logging.log_to_file {
        init_tracing_with_file(level, &config.logs_folder())
    } else {
        init_tracing(level);
        None
    };

    tracing::info!("Atmos Channel Extract starting");
    tracing::info!("Config: {}", config_path.display());
    tracing::info!("Core version: {}", ace_core::version());

    // Ensure the configured directories exist up front.
    if let Err(e) = config.ensure_dirs_exist() {
        tracing::warn!("Failed to create configured directories: {}", e);
    }

    // An unknown configured token degrades to wav with a warning.
    let default_format =
        OutputFormat::from_token_lossy(&config.settings().extraction.default_format);

    // The three prompt loops; EOF on stdin ends the run gracefully.
    let input_dir = match prompt::ask_input_dir(&config.settings().paths.last_input_dir) {
        Ok(path) => path,
        Err(e) => return fail(&format!("No input directory given: {}", e)),
    };
    let format = match prompt::ask_format(default_format) {
        Ok(format) => format,
        Err(e) => return fail(&format!("No output format given: {}", e)),
    };
    let output_root = match prompt::ask_output_root(&config.settings().paths.output_root) {
        Ok(path) => path,
        Err(e) => return fail(&format!("No output directory given: {}", e)),
    };

    // Remember the input folder for the next run (best effort).
    config.settings_mut().paths.last_input_dir = input_dir.display().to_string();
    if let Err(e) = config.save() {
        tracing::warn!("Could not save config: {}", e);
    }

    println!();
    println!("Starting channel extraction...");
    println!("  Input directory:  {}", input_dir.display());
    println!("  Output directory: {}", output_root.display());
    println!("  Output format:    {}", format.to_string().to_uppercase());

    let runner = FfmpegRunner::with_program(&config.settings().extraction.ffmpeg_path);
    match extraction::extract_channels(&input_dir, &output_root, format, &runner) {
        Ok(report) => {
            print_summary(&report);
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e.to_string()),
    }
}

/// Log a fatal diagnostic and end the run without panicking.
fn fail(message: &str) -> ExitCode {
    tracing::error!("{}", message);
    eprintln!("ERROR: {}", message);
    ExitCode::FAILURE
}

fn print_summary(report: &BatchReport) {
    println!();
    println!("--- All processing complete ---");
    println!("Album: {}", report.album);
    println!(
        "Files: {} processed, {} succeeded, {} failed",
        report.total(),
        report.succeeded(),
        report.failed()
    );
    for outcome in report.failures() {
        println!("  FAILED: {}", outcome.input.display());
    }
}
