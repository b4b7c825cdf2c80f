//! Error types for the `blipscan` crate.
//!
//! This module defines [`BlipscanError`], the unified error type returned by
//! all fallible operations in the crate. Errors carry rich context to aid
//! debugging, including file paths, process exit status, and captured
//! transcoder output.

use std::{io::Error as IoError, path::PathBuf, process::ExitStatus};

use thiserror::Error;

/// The unified error type for all `blipscan` operations.
///
/// Every public method that can fail returns `Result<T, BlipscanError>`.
/// Variants carry enough context to diagnose the problem without needing
/// additional logging at the call site. Extraction failures and waveform
/// decode failures are deliberately distinct variants: the former means the
/// external transcoder rejected the input, the latter means the intermediate
/// audio file it produced could not be parsed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BlipscanError {
    /// The external transcoder binary could not be started at all.
    #[error("Failed to start transcoder `{program}`: {source}")]
    TranscoderSpawn {
        /// The program name or path that was invoked.
        program: String,
        /// Underlying reason the spawn failed.
        #[source]
        source: IoError,
    },

    /// The transcoder ran but exited with a non-zero status.
    ///
    /// This is terminal for the run: no analysis is attempted and any
    /// partial output file has been removed.
    #[error("Audio track extraction failed ({status}): {stderr}")]
    ExtractionFailed {
        /// Exit status reported by the transcoder process.
        status: ExitStatus,
        /// Captured standard error output, trimmed.
        stderr: String,
    },

    /// A zero track number was requested. Track numbers are 1-based.
    #[error("Invalid audio track number {0}: track numbers start at 1")]
    InvalidTrackNumber(u32),

    /// The extracted audio file could not be decoded into a waveform.
    #[error("Failed to decode waveform from {path}: {reason}")]
    WaveformDecode {
        /// Path of the file that failed to decode.
        path: PathBuf,
        /// Underlying reason the decode failed.
        reason: String,
    },

    /// An analysis window's start time is greater than its end time.
    #[error("Invalid time range: start ({start}s) must be <= end ({end}s)")]
    InvalidTimeRange {
        /// Window start in seconds.
        start: f64,
        /// Window end in seconds.
        end: f64,
    },

    /// The project directory does not exist or is not a directory.
    #[error("Project directory {path} is not usable: {reason}")]
    ProjectDir {
        /// The directory that was checked.
        path: PathBuf,
        /// Why it was rejected.
        reason: String,
    },

    /// An I/O error occurred while reading or writing files.
    #[error("I/O error: {0}")]
    IoError(#[from] IoError),
}
