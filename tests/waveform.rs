//! Waveform decoding and slicing tests.
//!
//! WAV inputs are generated on the fly with `hound` into temporary
//! directories.

use std::path::Path;

use blipscan::{BlipscanError, Waveform};

fn write_wav_i16(path: &Path, samples: &[i16], channels: u16, sample_rate: u32) {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).expect("create wav");
    for &sample in samples {
        writer.write_sample(sample).expect("write sample");
    }
    writer.finalize().expect("finalize wav");
}

// ── Decoding ─────────────────────────────────────────────────────

#[test]
fn decodes_mono_i16_normalised() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("mono.wav");
    write_wav_i16(&path, &[0, 16_384, -16_384, 32_767], 1, 44_100);

    let waveform = Waveform::from_wav_file(&path).expect("decode");
    assert_eq!(waveform.sample_rate(), 44_100);
    assert_eq!(waveform.len(), 4);

    let samples = waveform.samples();
    assert_eq!(samples[0], 0.0);
    assert_eq!(samples[1], 0.5);
    assert_eq!(samples[2], -0.5);
    assert!((samples[3] - 0.99997).abs() < 1e-4);
}

#[test]
fn downmixes_stereo_by_averaging() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("stereo.wav");
    // Two frames: (0.5, 0.0) and (0.0, 0.5).
    write_wav_i16(&path, &[16_384, 0, 0, 16_384], 2, 44_100);

    let waveform = Waveform::from_wav_file(&path).expect("decode");
    assert_eq!(waveform.len(), 2);
    assert_eq!(waveform.samples(), &[0.25, 0.25]);
}

#[test]
fn decodes_float_wav() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("float.wav");
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 48_000,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(&path, spec).expect("create wav");
    for sample in [0.25_f32, -0.25, 1.0] {
        writer.write_sample(sample).expect("write sample");
    }
    writer.finalize().expect("finalize wav");

    let waveform = Waveform::from_wav_file(&path).expect("decode");
    assert_eq!(waveform.sample_rate(), 48_000);
    assert_eq!(waveform.samples(), &[0.25, -0.25, 1.0]);
}

#[test]
fn rejects_garbage_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("garbage.wav");
    std::fs::write(&path, b"this is not a wav file").expect("write garbage");

    let error = Waveform::from_wav_file(&path).expect_err("garbage should not decode");
    assert!(
        matches!(error, BlipscanError::WaveformDecode { .. }),
        "expected a decode error, got {error}",
    );
}

#[test]
fn missing_file_is_a_decode_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let error = Waveform::from_wav_file(dir.path().join("nope.wav"))
        .expect_err("missing file should not decode");
    assert!(matches!(error, BlipscanError::WaveformDecode { .. }));
}

// ── Slicing ──────────────────────────────────────────────────────

fn ramp(len: usize) -> Waveform {
    // Strictly increasing samples make slice boundaries observable.
    let samples = (0..len).map(|i| i as f32 / len as f32).collect();
    Waveform::from_samples(samples, 1_000)
}

#[test]
fn slice_defaults_to_the_full_track() {
    let waveform = ramp(2_000);
    let window = waveform.slice(None, None);
    assert_eq!(window, waveform);
}

#[test]
fn slice_takes_the_requested_window() {
    let waveform = ramp(2_000);
    let window = waveform.slice(Some(0.5), Some(1.5));
    assert_eq!(window.len(), 1_000);
    assert_eq!(window.samples()[0], waveform.samples()[500]);
}

#[test]
fn slice_clamps_to_the_available_duration() {
    let waveform = ramp(2_000);
    assert_eq!(waveform.slice(None, Some(99.0)).len(), 2_000);
    assert_eq!(waveform.slice(Some(-5.0), None).len(), 2_000);
}

#[test]
fn slice_past_the_end_is_empty() {
    let waveform = ramp(2_000);
    assert!(waveform.slice(Some(10.0), None).is_empty());
}

#[test]
fn inverted_slice_is_empty() {
    let waveform = ramp(2_000);
    assert!(waveform.slice(Some(1.5), Some(0.5)).is_empty());
}

#[test]
fn duration_reflects_sample_count() {
    let waveform = ramp(2_000);
    assert_eq!(waveform.duration_seconds(), 2.0);
    assert!(!waveform.is_empty());
}
