//! Audio track extraction via an external `ffmpeg` process.
//!
//! Extraction shells out to the `ffmpeg` binary rather than linking the
//! FFmpeg libraries: the transcoder demuxes one audio track from the video
//! container and writes it as a mono 44.1 kHz WAV file. The subprocess is
//! the only collaborator this crate has, so it sits behind the narrow
//! [`TrackExtractor`] trait and tests substitute fakes that never spawn a
//! process.
//!
//! # Example
//!
//! ```no_run
//! use blipscan::{FfmpegExtractor, TrackExtractor};
//! use std::path::Path;
//!
//! let extractor = FfmpegExtractor::new();
//! extractor.extract_track(
//!     Path::new("input.mp4"),
//!     Path::new("temp_audio.wav"),
//!     3,
//! )?;
//! # Ok::<(), blipscan::BlipscanError>(())
//! ```

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::BlipscanError;

/// Something that can pull one audio track out of a video file.
///
/// `track_number` is 1-based, matching how editors number audio tracks.
/// Implementations must leave a decodable audio file at `destination` on
/// success and must not leave a partial file behind on failure.
pub trait TrackExtractor {
    /// Extract `track_number` from `video_path` into `destination`.
    fn extract_track(
        &self,
        video_path: &Path,
        destination: &Path,
        track_number: u32,
    ) -> Result<(), BlipscanError>;
}

/// The production [`TrackExtractor`]: invokes `ffmpeg` as a subprocess.
///
/// `ffmpeg` is a runtime dependency; nothing is linked at build time. The
/// binary is resolved through `PATH` unless overridden with
/// [`with_program`](FfmpegExtractor::with_program).
#[derive(Debug, Clone)]
pub struct FfmpegExtractor {
    program: String,
}

impl Default for FfmpegExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FfmpegExtractor {
    /// Create an extractor that invokes `ffmpeg` from `PATH`.
    pub fn new() -> Self {
        Self {
            program: "ffmpeg".to_string(),
        }
    }

    /// Use a specific transcoder binary instead of `ffmpeg` from `PATH`.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }
}

/// Build the ffmpeg arguments for extracting one audio track.
///
/// Selects the stream by zero-based index (`0:a:{track_number - 1}`),
/// forces mono output at 44.1 kHz, and overwrites the destination.
#[must_use]
pub fn build_ffmpeg_args(
    video_path: &Path,
    destination: &Path,
    track_number: u32,
) -> Vec<String> {
    vec![
        "-hide_banner".to_string(),
        "-nostdin".to_string(),
        "-loglevel".to_string(),
        "error".to_string(),
        "-i".to_string(),
        video_path.to_string_lossy().to_string(),
        "-map".to_string(),
        format!("0:a:{}", track_number - 1),
        "-ac".to_string(),
        "1".to_string(),
        "-ar".to_string(),
        "44100".to_string(),
        "-y".to_string(),
        destination.to_string_lossy().to_string(),
    ]
}

impl TrackExtractor for FfmpegExtractor {
    fn extract_track(
        &self,
        video_path: &Path,
        destination: &Path,
        track_number: u32,
    ) -> Result<(), BlipscanError> {
        if track_number == 0 {
            return Err(BlipscanError::InvalidTrackNumber(track_number));
        }

        let args = build_ffmpeg_args(video_path, destination, track_number);
        log::debug!("Running {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| BlipscanError::TranscoderSpawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            log::debug!("Transcoder failed ({}): {}", output.status, stderr);
            // Never leave a half-written track for the decoder to trip on.
            let _ = std::fs::remove_file(destination);
            return Err(BlipscanError::ExtractionFailed {
                status: output.status,
                stderr,
            });
        }

        Ok(())
    }
}
