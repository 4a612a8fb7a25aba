//! Per-file extraction job: derived paths and output naming.

use std::path::{Path, PathBuf};

use crate::models::{ChannelDescriptor, OutputFormat, CHANNELS_5_1};

/// Everything needed to split one input file.
///
/// Jobs are derived fresh for each input file and discarded once the FFmpeg
/// invocation returns; nothing is shared between them except the filesystem.
#[derive(Debug, Clone)]
pub struct ExtractionJob {
    /// Path to the source file.
    pub input_path: PathBuf,
    /// Song folder name (input file name without its extension).
    pub song_name: String,
    /// Folder all six channel files are written to.
    pub output_dir: PathBuf,
    /// Output format (drives codec arguments and file extension).
    pub format: OutputFormat,
}

impl ExtractionJob {
    /// Build the job for one input file.
    ///
    /// The output folder is `output_root/album/song`, where `song` is the
    /// input file stem (e.g., `Track1.m4a` -> `Track1`).
    pub fn new(
        input_path: impl Into<PathBuf>,
        album: &str,
        output_root: &Path,
        format: OutputFormat,
    ) -> Self {
        let input_path = input_path.into();
        let song_name = input_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_default();
        let output_dir = output_root.join(album).join(&song_name);

        Self {
            input_path,
            song_name,
            output_dir,
            format,
        }
    }

    /// Output path for one channel: `{song}_{Channel_Name}.{ext}`.
    pub fn channel_output_path(&self, channel: &ChannelDescriptor) -> PathBuf {
        self.output_dir.join(format!(
            "{}_{}.{}",
            self.song_name,
            channel.file_name_part(),
            self.format.extension()
        ))
    }

    /// All six output paths, in canonical channel order.
    pub fn output_paths(&self) -> Vec<PathBuf> {
        CHANNELS_5_1
            .iter()
            .map(|channel| self.channel_output_path(channel))
            .collect()
    }
}

/// Resolve the album folder name from the input directory path.
///
/// This is the final component of the path (`Serotonin` for
/// `/music/atmos/Serotonin`). Returns `None` for paths without a usable
/// final component, such as a filesystem root.
pub fn album_name(input_dir: &Path) -> Option<String> {
    input_dir
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flac_job() -> ExtractionJob {
        ExtractionJob::new(
            "/music/Serotonin/Track1.m4a",
            "Serotonin",
            Path::new("/out"),
            OutputFormat::Flac,
        )
    }

    #[test]
    fn output_dir_nests_album_and_song() {
        let job = flac_job();
        assert_eq!(job.song_name, "Track1");
        assert_eq!(job.output_dir, Path::new("/out/Serotonin/Track1"));
    }

    #[test]
    fn builds_six_output_paths_in_canonical_order() {
        let job = flac_job();
        let paths = job.output_paths();

        let expected = [
            "/out/Serotonin/Track1/Track1_Front_Left.flac",
            "/out/Serotonin/Track1/Track1_Front_Right.flac",
            "/out/Serotonin/Track1/Track1_Center.flac",
            "/out/Serotonin/Track1/Track1_LFE.flac",
            "/out/Serotonin/Track1/Track1_Surround_Left.flac",
            "/out/Serotonin/Track1/Track1_Surround_Right.flac",
        ];
        assert_eq!(paths.len(), 6);
        for (path, expected) in paths.iter().zip(expected) {
            assert_eq!(path, Path::new(expected));
        }
    }

    #[test]
    fn output_extension_follows_format() {
        let job = ExtractionJob::new(
            "/music/Serotonin/Track1.m4a",
            "Serotonin",
            Path::new("/out"),
            OutputFormat::Wav,
        );
        for path in job.output_paths() {
            assert_eq!(path.extension().unwrap(), "wav");
        }
    }

    #[test]
    fn song_name_strips_only_the_final_extension() {
        let job = ExtractionJob::new(
            "/music/Album/01. Intro v1.2.m4a",
            "Album",
            Path::new("/out"),
            OutputFormat::Wav,
        );
        assert_eq!(job.song_name, "01. Intro v1.2");
    }

    #[test]
    fn album_name_takes_final_component() {
        assert_eq!(
            album_name(Path::new("/music/atmos/Serotonin")),
            Some("Serotonin".to_string())
        );
        // A trailing separator does not change the component.
        assert_eq!(
            album_name(Path::new("/music/atmos/Serotonin/")),
            Some("Serotonin".to_string())
        );
        assert_eq!(album_name(Path::new("/")), None);
    }
}
