//! Decoded audio waveforms.
//!
//! This module provides [`Waveform`], the in-memory representation of an
//! extracted audio track: a sequence of mono `f32` samples normalised to
//! the −1.0..1.0 range, plus the sample rate. A waveform is ephemeral —
//! decoded from the intermediate WAV file, sliced to the analysis window,
//! scanned, and discarded.
//!
//! # Example
//!
//! ```no_run
//! use blipscan::Waveform;
//!
//! let waveform = Waveform::from_wav_file("temp_audio.wav")?;
//! println!("{} samples at {} Hz", waveform.len(), waveform.sample_rate());
//! # Ok::<(), blipscan::BlipscanError>(())
//! ```

use std::path::Path;

use crate::error::BlipscanError;

/// A decoded mono amplitude signal.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl Waveform {
    /// Wrap already-decoded mono samples.
    ///
    /// Samples are expected in the −1.0..1.0 range; `sample_rate` must be
    /// non-zero for time-based operations to be meaningful.
    pub fn from_samples(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Decode a WAV file into a mono waveform.
    ///
    /// Integer samples of any bit depth are normalised to −1.0..1.0 and
    /// float samples are passed through. Multi-channel audio is downmixed
    /// by averaging each interleaved frame; extracted tracks are already
    /// mono, so this path only matters for files produced elsewhere.
    pub fn from_wav_file(path: impl AsRef<Path>) -> Result<Self, BlipscanError> {
        let path = path.as_ref();
        log::debug!("Decoding waveform from {}", path.display());

        let mut reader = hound::WavReader::open(path).map_err(|e| decode_error(path, &e))?;
        let spec = reader.spec();
        let channels = spec.channels.max(1) as usize;

        let interleaved: Vec<f32> = match spec.sample_format {
            hound::SampleFormat::Float => reader
                .samples::<f32>()
                .collect::<Result<_, _>>()
                .map_err(|e| decode_error(path, &e))?,
            hound::SampleFormat::Int => {
                let scale = (1_i64 << (spec.bits_per_sample.max(1) - 1)) as f32;
                reader
                    .samples::<i32>()
                    .map(|sample| sample.map(|value| value as f32 / scale))
                    .collect::<Result<_, _>>()
                    .map_err(|e| decode_error(path, &e))?
            }
        };

        let samples = downmix(interleaved, channels);
        log::debug!(
            "Decoded {} mono samples at {} Hz from {}",
            samples.len(),
            spec.sample_rate,
            path.display()
        );

        Ok(Self {
            samples,
            sample_rate: spec.sample_rate,
        })
    }

    /// The mono samples, in decode order.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Samples per second.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if the waveform holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration of the signal in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Copy out the analysis window between two optional time offsets.
    ///
    /// A missing `start_seconds` means the beginning of the signal; a
    /// missing `end_seconds` means its natural end. Both offsets are
    /// clamped to the available duration, and negative offsets are treated
    /// as zero. An inverted window yields an empty waveform.
    ///
    /// Timestamps computed from the returned window are relative to the
    /// window's own start, not to the start of the original signal.
    pub fn slice(&self, start_seconds: Option<f64>, end_seconds: Option<f64>) -> Waveform {
        let rate = self.sample_rate as f64;
        let total = self.samples.len();

        let start = ((start_seconds.unwrap_or(0.0).max(0.0) * rate) as usize).min(total);
        let end = match end_seconds {
            Some(seconds) => ((seconds.max(0.0) * rate) as usize).min(total),
            None => total,
        };

        let samples = if end > start {
            self.samples[start..end].to_vec()
        } else {
            Vec::new()
        };

        Waveform {
            samples,
            sample_rate: self.sample_rate,
        }
    }
}

fn decode_error(path: &Path, error: &hound::Error) -> BlipscanError {
    BlipscanError::WaveformDecode {
        path: path.to_path_buf(),
        reason: error.to_string(),
    }
}

/// Average each interleaved frame down to a single mono sample.
fn downmix(interleaved: Vec<f32>, channels: usize) -> Vec<f32> {
    if channels <= 1 {
        return interleaved;
    }
    interleaved
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
        .collect()
}
