//! End-to-end scan pipeline.
//!
//! Wires the two pipeline steps together: extract the configured audio
//! track into `<project_dir>/temp_audio.wav`, decode and slice it, run the
//! activity detector, and return the onset timestamps. The temporary track
//! is removed on every exit path, including extraction and decode failures.
//!
//! A scan either produces the complete timestamp list or an error; clean
//! silence is `Ok` with an empty list, never an error.
//!
//! # Example
//!
//! ```no_run
//! use blipscan::{AnalysisConfig, scan_video};
//!
//! let config = AnalysisConfig::new("input.mp4", "/tmp/project");
//! for seconds in scan_video(&config)? {
//!     println!("{seconds} seconds");
//! }
//! # Ok::<(), blipscan::BlipscanError>(())
//! ```

use std::path::{Path, PathBuf};

use crate::config::AnalysisConfig;
use crate::detect::detect_onsets;
use crate::error::BlipscanError;
use crate::extract::{FfmpegExtractor, TrackExtractor};
use crate::waveform::Waveform;

/// Scan `config.video_path` with the system `ffmpeg` and return the
/// activity-onset timestamps in seconds.
///
/// Equivalent to [`scan_video_with_extractor`] with a default
/// [`FfmpegExtractor`].
pub fn scan_video(config: &AnalysisConfig) -> Result<Vec<f64>, BlipscanError> {
    scan_video_with_extractor(config, &FfmpegExtractor::new())
}

/// Scan `config.video_path` using the given extractor.
///
/// Timestamps are relative to the start of the analysis window: with an
/// `in_time` of 10 s, a blip at 12 s in the file is reported as 2.0.
pub fn scan_video_with_extractor(
    config: &AnalysisConfig,
    extractor: &dyn TrackExtractor,
) -> Result<Vec<f64>, BlipscanError> {
    config.validate()?;

    let temp = TempTrack::new(config.temp_audio_path());
    log::debug!(
        "Extracting track {} of {} to {}",
        config.track_number,
        config.video_path.display(),
        temp.path().display()
    );
    extractor.extract_track(&config.video_path, temp.path(), config.track_number)?;

    let waveform = Waveform::from_wav_file(temp.path())?;
    let window = waveform.slice(config.in_time, config.out_time);
    log::debug!(
        "Analysis window: {:.3}s of {:.3}s",
        window.duration_seconds(),
        waveform.duration_seconds()
    );

    let onsets = detect_onsets(&window, &config.detector_options());
    log::info!(
        "Detected {} activity onset(s) in {}",
        onsets.len(),
        config.video_path.display()
    );
    Ok(onsets)
}

/// Removes the temporary track when dropped, whatever the exit path.
struct TempTrack {
    path: PathBuf,
}

impl TempTrack {
    fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempTrack {
    fn drop(&mut self) {
        if std::fs::remove_file(&self.path).is_ok() {
            log::debug!("Removed temporary track {}", self.path.display());
        }
    }
}
