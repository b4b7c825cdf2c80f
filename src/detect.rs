//! Audio activity detection.
//!
//! This module scans a decoded [`Waveform`] in fixed-size time chunks and
//! reports the onset of each contiguous above-threshold region. A chunk is
//! active when its RMS loudness is strictly greater than the configured
//! dBFS threshold; only the first chunk of a run of active chunks produces
//! a timestamp, and a single quiet chunk is enough to end the run.
//!
//! Timestamps are chunk-grid positions (`chunk_index × chunk_size / 1000`
//! seconds) measured from the start of the scanned waveform. When the
//! waveform is a [`slice`](Waveform::slice) of a longer track, they are
//! therefore relative to the slice, not the original file.
//!
//! # Example
//!
//! ```
//! use blipscan::{DetectorOptions, Waveform, detect_onsets};
//!
//! // 1.2 s of silence, then a 400 ms burst.
//! let mut samples = vec![0.0_f32; 52_920];
//! samples.extend(std::iter::repeat(0.5).take(17_640));
//! let waveform = Waveform::from_samples(samples, 44_100);
//!
//! let onsets = detect_onsets(&waveform, &DetectorOptions::new().chunk_size_ms(400));
//! assert_eq!(onsets, vec![1.2]);
//! ```

use crate::waveform::Waveform;

/// Configuration for activity detection.
#[derive(Debug, Clone)]
pub struct DetectorOptions {
    /// Activity threshold in dBFS. Default: −50.0.
    pub threshold_dbfs: f64,
    /// Video frame rate, used to derive the chunk size when none is set.
    /// Default: 25.
    pub fps: u32,
    /// Chunk size in milliseconds. `None` derives one video frame's worth
    /// from [`fps`](DetectorOptions::fps).
    pub chunk_size_ms: Option<u32>,
}

impl Default for DetectorOptions {
    fn default() -> Self {
        Self {
            threshold_dbfs: -50.0,
            fps: 25,
            chunk_size_ms: None,
        }
    }
}

impl DetectorOptions {
    /// Create a new [`DetectorOptions`] with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the activity threshold in dBFS.
    pub fn threshold_dbfs(mut self, threshold_dbfs: f64) -> Self {
        self.threshold_dbfs = threshold_dbfs;
        self
    }

    /// Set the video frame rate.
    pub fn fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    /// Set an explicit chunk size in milliseconds.
    pub fn chunk_size_ms(mut self, chunk_size_ms: u32) -> Self {
        self.chunk_size_ms = Some(chunk_size_ms);
        self
    }

    /// The chunk size actually used for scanning: the explicit value when
    /// set, otherwise `round(1000 / fps)` milliseconds. Never less than 1.
    pub fn resolved_chunk_size_ms(&self) -> u32 {
        match self.chunk_size_ms {
            Some(ms) => ms.max(1),
            None => (1000.0 / self.fps.max(1) as f64).round().max(1.0) as u32,
        }
    }
}

/// Measure loudness in dBFS (decibels relative to full scale).
///
/// Uses the root-mean-square amplitude of the samples; a full-scale signal
/// measures 0.0 dBFS. Empty or all-zero input measures negative infinity,
/// which compares below any finite threshold.
pub fn dbfs(samples: &[f32]) -> f64 {
    if samples.is_empty() {
        return f64::NEG_INFINITY;
    }

    let mut sum_sq = 0.0_f64;
    for &sample in samples {
        sum_sq += (sample as f64) * (sample as f64);
    }

    let rms = (sum_sq / samples.len() as f64).sqrt();
    if rms > 0.0 {
        20.0 * rms.log10()
    } else {
        f64::NEG_INFINITY
    }
}

/// Scan a waveform and return the ordered activity-onset timestamps.
///
/// The waveform is partitioned into fixed-size chunks from its start; the
/// final chunk may be shorter. Each emitted timestamp is the grid position
/// of the first chunk of an active region, in seconds relative to the start
/// of `waveform`. The output is strictly increasing and duplicate-free, and
/// the scan is a single deterministic pass.
pub fn detect_onsets(waveform: &Waveform, options: &DetectorOptions) -> Vec<f64> {
    let chunk_size_ms = options.resolved_chunk_size_ms() as u64;
    let sample_rate = waveform.sample_rate() as u64;
    let samples = waveform.samples();
    let total = samples.len() as u64;

    log::debug!(
        "Scanning {} samples in {} ms chunks (threshold {} dBFS)",
        total,
        chunk_size_ms,
        options.threshold_dbfs
    );

    let mut onsets = Vec::new();
    let mut is_active = false;
    let mut chunk_index: u64 = 0;
    let mut cursor: u64 = 0;

    while cursor < total {
        // Chunk boundaries follow the ideal millisecond grid; the clamp
        // keeps degenerate sub-sample chunks moving forward.
        let boundary = (chunk_index + 1) * chunk_size_ms * sample_rate / 1000;
        let end = boundary.clamp(cursor + 1, total);

        let level = dbfs(&samples[cursor as usize..end as usize]);
        if level > options.threshold_dbfs {
            if !is_active {
                onsets.push((chunk_index * chunk_size_ms) as f64 / 1000.0);
                is_active = true;
            }
        } else {
            // Any chunk at or below the threshold ends the active region.
            is_active = false;
        }

        chunk_index += 1;
        cursor = end;
    }

    log::debug!("Found {} onset(s) in {} chunk(s)", onsets.len(), chunk_index);
    onsets
}
