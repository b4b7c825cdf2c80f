//! Analysis configuration.
//!
//! [`AnalysisConfig`] is the immutable parameter set for one scan: which
//! video to read, where the temporary audio track may be written, which
//! track to extract, and how the detector should chunk and threshold the
//! signal. Build one with the `with_*` methods and pass it to
//! [`scan_video`](crate::scan_video).
//!
//! # Example
//!
//! ```no_run
//! use blipscan::AnalysisConfig;
//!
//! let config = AnalysisConfig::new("input.mp4", "/tmp/project")
//!     .with_track_number(2)
//!     .with_threshold_dbfs(-42.0)
//!     .with_in_time(10.0)
//!     .with_out_time(95.5);
//! let timestamps = blipscan::scan_video(&config)?;
//! # Ok::<(), blipscan::BlipscanError>(())
//! ```

use std::path::{Path, PathBuf};

use crate::detect::DetectorOptions;
use crate::error::BlipscanError;

/// Parameters for one end-to-end scan.
///
/// Defaults mirror the tool's command line: track 3, −50.0 dBFS threshold,
/// 25 fps, no explicit chunk size (derived from fps), full-track window.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// The video file to read.
    pub video_path: PathBuf,
    /// Directory that receives the temporary extracted track.
    pub project_dir: PathBuf,
    /// 1-based audio track number to analyze. Default: 3.
    pub track_number: u32,
    /// Optional analysis window start in seconds.
    pub in_time: Option<f64>,
    /// Optional analysis window end in seconds.
    pub out_time: Option<f64>,
    /// Activity threshold in dBFS. Default: −50.0.
    pub threshold_dbfs: f64,
    /// Explicit chunk size in milliseconds. `None` derives it from `fps`.
    pub chunk_size_ms: Option<u32>,
    /// Video frame rate. Default: 25.
    pub fps: u32,
}

impl AnalysisConfig {
    /// Create a configuration for `video_path` with defaults, using
    /// `project_dir` for the temporary audio track.
    pub fn new(video_path: impl Into<PathBuf>, project_dir: impl Into<PathBuf>) -> Self {
        Self {
            video_path: video_path.into(),
            project_dir: project_dir.into(),
            track_number: 3,
            in_time: None,
            out_time: None,
            threshold_dbfs: -50.0,
            chunk_size_ms: None,
            fps: 25,
        }
    }

    /// Set the 1-based audio track number.
    #[must_use]
    pub fn with_track_number(mut self, track_number: u32) -> Self {
        self.track_number = track_number;
        self
    }

    /// Set the analysis window start in seconds.
    #[must_use]
    pub fn with_in_time(mut self, seconds: f64) -> Self {
        self.in_time = Some(seconds);
        self
    }

    /// Set the analysis window end in seconds.
    #[must_use]
    pub fn with_out_time(mut self, seconds: f64) -> Self {
        self.out_time = Some(seconds);
        self
    }

    /// Set the activity threshold in dBFS.
    #[must_use]
    pub fn with_threshold_dbfs(mut self, threshold_dbfs: f64) -> Self {
        self.threshold_dbfs = threshold_dbfs;
        self
    }

    /// Set an explicit chunk size in milliseconds.
    #[must_use]
    pub fn with_chunk_size_ms(mut self, chunk_size_ms: u32) -> Self {
        self.chunk_size_ms = Some(chunk_size_ms);
        self
    }

    /// Set the video frame rate used to derive the chunk size.
    #[must_use]
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    /// Where the temporary extracted track lives for this configuration.
    ///
    /// The name is fixed (`temp_audio.wav`); concurrent scans sharing one
    /// project directory are unsupported.
    pub fn temp_audio_path(&self) -> PathBuf {
        self.project_dir.join("temp_audio.wav")
    }

    /// The detector settings implied by this configuration.
    pub fn detector_options(&self) -> DetectorOptions {
        DetectorOptions {
            threshold_dbfs: self.threshold_dbfs,
            fps: self.fps,
            chunk_size_ms: self.chunk_size_ms,
        }
    }

    /// Check the configuration before any work is attempted.
    ///
    /// Rejects a zero track number, an inverted time window, and a project
    /// directory that is missing or not a directory.
    pub fn validate(&self) -> Result<(), BlipscanError> {
        if self.track_number == 0 {
            return Err(BlipscanError::InvalidTrackNumber(self.track_number));
        }

        if let (Some(start), Some(end)) = (self.in_time, self.out_time) {
            if start > end {
                return Err(BlipscanError::InvalidTimeRange { start, end });
            }
        }

        check_project_dir(&self.project_dir)?;
        Ok(())
    }
}

fn check_project_dir(path: &Path) -> Result<(), BlipscanError> {
    if !path.exists() {
        return Err(BlipscanError::ProjectDir {
            path: path.to_path_buf(),
            reason: "directory does not exist".to_string(),
        });
    }
    if !path.is_dir() {
        return Err(BlipscanError::ProjectDir {
            path: path.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }
    Ok(())
}
