//! # blipscan
//!
//! Scan an audio track of a video file for activity and report blip onset
//! timestamps.
//!
//! `blipscan` extracts one audio track from a video container (via the
//! external `ffmpeg` binary), slices it to an optional time window, and
//! walks it in fixed-size chunks measuring dBFS loudness. Every time the
//! signal rises above the threshold after a quiet chunk, the chunk's start
//! time is recorded. The result is an ordered list of second offsets — the
//! moments a sync blip, clap, or other marker sound begins — ready to feed
//! into an editing workflow.
//!
//! ## Quick Start
//!
//! ```no_run
//! use blipscan::{AnalysisConfig, scan_video};
//!
//! let config = AnalysisConfig::new("shoot.mp4", "/tmp/project")
//!     .with_track_number(3)
//!     .with_threshold_dbfs(-50.0);
//!
//! for seconds in scan_video(&config)? {
//!     println!("{seconds} seconds");
//! }
//! # Ok::<(), blipscan::BlipscanError>(())
//! ```
//!
//! Or scan an already-decoded waveform directly:
//!
//! ```
//! use blipscan::{DetectorOptions, Waveform, detect_onsets};
//!
//! let waveform = Waveform::from_samples(vec![0.5_f32; 44_100], 44_100);
//! let onsets = detect_onsets(&waveform, &DetectorOptions::new().chunk_size_ms(400));
//! assert_eq!(onsets, vec![0.0]);
//! ```
//!
//! ## Features
//!
//! - **Track selection** — analyze any audio track by its 1-based number
//! - **Windowed analysis** — restrict the scan to an `in_time`/`out_time`
//!   range; timestamps are relative to the window start
//! - **Chunked thresholding** — fixed-size chunks with RMS dBFS loudness,
//!   rising-edge onsets only
//! - **Swappable extraction** — the `ffmpeg` subprocess sits behind the
//!   [`TrackExtractor`] trait, so tests never spawn a process
//! - **Guaranteed cleanup** — the intermediate WAV is removed on every
//!   exit path
//! - **JSON reports** — emit the timestamp list as a JSON array, on stdout
//!   or to a file
//!
//! ## Requirements
//!
//! The `ffmpeg` binary must be available at runtime (on `PATH`, or pointed
//! at explicitly). No FFmpeg libraries are linked.

pub mod config;
pub mod detect;
pub mod error;
pub mod extract;
pub mod report;
pub mod scan;
pub mod waveform;

pub use config::AnalysisConfig;
pub use detect::{DetectorOptions, dbfs, detect_onsets};
pub use error::BlipscanError;
pub use extract::{FfmpegExtractor, TrackExtractor, build_ffmpeg_args};
pub use report::{to_json, write_json};
pub use scan::{scan_video, scan_video_with_extractor};
pub use waveform::Waveform;
