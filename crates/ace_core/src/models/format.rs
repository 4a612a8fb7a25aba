//! Output format selection and FFmpeg codec mapping.

use serde::{Deserialize, Serialize};

/// Supported output audio formats.
///
/// Each variant maps to a fixed FFmpeg codec argument set. Unknown tokens
/// coerce to [`OutputFormat::Wav`] rather than being rejected; the coerced
/// value also drives output file naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Uncompressed 16-bit little-endian PCM.
    #[default]
    Wav,
    /// Lossless FLAC, encoder defaults.
    Flac,
    /// AAC at 256 kbps.
    Aac,
    /// MP3 via libmp3lame, VBR quality 2.
    Mp3,
}

impl OutputFormat {
    /// Get all supported formats as a list.
    pub fn all() -> &'static [OutputFormat] {
        &[Self::Wav, Self::Flac, Self::Aac, Self::Mp3]
    }

    /// File extension used for output files.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Flac => "flac",
            Self::Aac => "aac",
            Self::Mp3 => "mp3",
        }
    }

    /// FFmpeg codec arguments for this format.
    pub fn codec_args(&self) -> &'static [&'static str] {
        match self {
            Self::Wav => &["-acodec", "pcm_s16le"],
            Self::Flac => &["-acodec", "flac"],
            Self::Aac => &["-acodec", "aac", "-b:a", "256k"],
            Self::Mp3 => &["-acodec", "libmp3lame", "-q:a", "2"],
        }
    }

    /// Parse a format token (`wav`, `flac`, `aac`, `mp3`).
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "wav" => Some(Self::Wav),
            "flac" => Some(Self::Flac),
            "aac" => Some(Self::Aac),
            "mp3" => Some(Self::Mp3),
            _ => None,
        }
    }

    /// Parse a format token, coercing anything unknown to WAV.
    ///
    /// The coercion is a correction, not an error: a warning is emitted and
    /// the returned value is used everywhere, including file naming.
    pub fn from_token_lossy(token: &str) -> Self {
        match Self::from_token(token) {
            Some(format) => format,
            None => {
                tracing::warn!(
                    "Unknown output format '{}', defaulting to wav (pcm_s16le)",
                    token
                );
                Self::Wav
            }
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}
