//! Interactive prompt loops for the three run parameters.
//!
//! Each loop re-asks until the answer is usable. The parsing helpers are
//! pure functions so they can be tested without a terminal.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use ace_core::models::OutputFormat;

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            if rest.is_empty() {
                return home;
            }
            if let Some(rest) = rest.strip_prefix('/') {
                return home.join(rest);
            }
        }
    }
    PathBuf::from(raw)
}

/// Parse a format answer; empty input selects the default.
fn parse_format(answer: &str, default: OutputFormat) -> Option<OutputFormat> {
    let token = answer.trim().to_lowercase();
    if token.is_empty() {
        return Some(default);
    }
    OutputFormat::from_token(&token)
}

/// Print a prompt and read one trimmed line from stdin.
///
/// A closed stdin is an error so the caller can end the run instead of
/// looping forever.
fn read_line(prompt_text: &str) -> io::Result<String> {
    print!("{}", prompt_text);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line.trim().to_string())
}

/// Ask for the folder containing the `.m4a` files.
///
/// An empty answer re-uses `last` when one is remembered. Loops until the
/// answer names an existing directory.
pub fn ask_input_dir(last: &str) -> io::Result<PathBuf> {
    loop {
        let hint = if last.is_empty() {
            String::new()
        } else {
            format!(" [last: {}]", last)
        };
        let answer = read_line(&format!("Folder containing your M4A files{}: ", hint))?;

        let raw = if answer.is_empty() && !last.is_empty() {
            last.to_string()
        } else {
            answer
        };
        let path = expand_tilde(&raw);
        if path.is_dir() {
            return Ok(path);
        }
        println!(
            "Not a folder: {}. Enter the path to an existing folder.",
            path.display()
        );
    }
}

/// Ask for the output format; empty input keeps the default.
pub fn ask_format(default: OutputFormat) -> io::Result<OutputFormat> {
    let choices = OutputFormat::all()
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    loop {
        let answer = read_line(&format!(
            "Output format ({}) [default: {}]: ",
            choices, default
        ))?;
        match parse_format(&answer, default) {
            Some(format) => return Ok(format),
            None => println!("Invalid format. Choose one of: {}.", choices),
        }
    }
}

/// Ask for the base output folder; empty input keeps the default.
///
/// The folder is created on the spot, which also proves it is writable.
pub fn ask_output_root(default: &str) -> io::Result<PathBuf> {
    loop {
        let answer = read_line(&format!(
            "Base folder for extracted channels [default: {}]: ",
            default
        ))?;

        let raw = if answer.is_empty() {
            default.to_string()
        } else {
            answer
        };
        let path = expand_tilde(&raw);
        match std::fs::create_dir_all(&path) {
            Ok(()) => return Ok(path),
            Err(e) => println!(
                "Cannot create {}: {}. Enter a writable path.",
                path.display(),
                e
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_pass_through_unchanged() {
        assert_eq!(
            expand_tilde("/music/Serotonin"),
            PathBuf::from("/music/Serotonin")
        );
        assert_eq!(expand_tilde("relative/dir"), PathBuf::from("relative/dir"));
    }

    #[test]
    fn tilde_expands_to_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~"), home);
            assert_eq!(expand_tilde("~/Music"), home.join("Music"));
        }
    }

    #[test]
    fn tilde_in_the_middle_is_literal() {
        assert_eq!(expand_tilde("/a/~b"), PathBuf::from("/a/~b"));
    }

    #[test]
    fn blank_answer_selects_default_format() {
        assert_eq!(
            parse_format("", OutputFormat::Flac),
            Some(OutputFormat::Flac)
        );
        assert_eq!(
            parse_format("   ", OutputFormat::Wav),
            Some(OutputFormat::Wav)
        );
    }

    #[test]
    fn format_answers_are_case_insensitive() {
        assert_eq!(
            parse_format("FLAC", OutputFormat::Wav),
            Some(OutputFormat::Flac)
        );
        assert_eq!(
            parse_format(" mp3 ", OutputFormat::Wav),
            Some(OutputFormat::Mp3)
        );
    }

    #[test]
    fn unknown_format_answer_is_rejected() {
        assert_eq!(parse_format("ogg", OutputFormat::Wav), None);
    }
}
