//! Track extractor integration tests.
//!
//! These tests exercise [`FfmpegExtractor`] with substitute programs;
//! none of them requires a real `ffmpeg` install.

use std::path::Path;

use blipscan::{BlipscanError, FfmpegExtractor, TrackExtractor, build_ffmpeg_args};

#[test]
fn argument_set_matches_the_transcoder_contract() {
    let args = build_ffmpeg_args(Path::new("shoot.mp4"), Path::new("temp_audio.wav"), 3);
    let expected: Vec<String> = [
        "-hide_banner",
        "-nostdin",
        "-loglevel",
        "error",
        "-i",
        "shoot.mp4",
        "-map",
        "0:a:2",
        "-ac",
        "1",
        "-ar",
        "44100",
        "-y",
        "temp_audio.wav",
    ]
    .iter()
    .map(ToString::to_string)
    .collect();
    assert_eq!(args, expected);
}

#[test]
fn nonexistent_program_is_a_spawn_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let destination = dir.path().join("out.wav");
    let extractor = FfmpegExtractor::new().with_program("definitely-not-a-real-ffmpeg");

    let error = extractor
        .extract_track(Path::new("in.mp4"), &destination, 1)
        .expect_err("missing binary should fail to spawn");

    match &error {
        BlipscanError::TranscoderSpawn { program, .. } => {
            assert_eq!(program, "definitely-not-a-real-ffmpeg");
        }
        other => panic!("expected a spawn error, got {other}"),
    }

    let message = error.to_string();
    assert!(
        message.contains("Failed to start transcoder"),
        "error message should mention the spawn failure: {message}",
    );
}

#[test]
fn track_zero_is_rejected_before_spawning() {
    let dir = tempfile::tempdir().expect("tempdir");
    let destination = dir.path().join("out.wav");
    // A bogus program: reaching the spawn would fail with a different error.
    let extractor = FfmpegExtractor::new().with_program("definitely-not-a-real-ffmpeg");

    let error = extractor
        .extract_track(Path::new("in.mp4"), &destination, 0)
        .expect_err("track 0 should be rejected");
    assert!(matches!(error, BlipscanError::InvalidTrackNumber(0)));
}

#[cfg(unix)]
#[test]
fn nonzero_exit_is_an_extraction_failure() {
    let dir = tempfile::tempdir().expect("tempdir");
    let destination = dir.path().join("out.wav");
    let extractor = FfmpegExtractor::new().with_program("false");

    let error = extractor
        .extract_track(Path::new("in.mp4"), &destination, 1)
        .expect_err("non-zero exit should fail the extraction");

    assert!(
        matches!(error, BlipscanError::ExtractionFailed { .. }),
        "expected an extraction failure, got {error}",
    );
    assert!(!destination.exists());
}

#[cfg(unix)]
#[test]
fn failed_extraction_removes_partial_output_and_captures_stderr() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().expect("tempdir");
    let destination = dir.path().join("out.wav");

    // A stand-in transcoder that writes a partial destination file (the
    // last argument, as with the real argument set), complains on stderr,
    // and exits non-zero.
    let fake = dir.path().join("fake-ffmpeg");
    std::fs::write(
        &fake,
        "#!/bin/sh\nfor last; do :; done\necho partial > \"$last\"\necho 'no such audio track' >&2\nexit 1\n",
    )
    .expect("write fake transcoder");
    let mut permissions = std::fs::metadata(&fake).expect("stat").permissions();
    permissions.set_mode(0o755);
    std::fs::set_permissions(&fake, permissions).expect("chmod");

    let extractor = FfmpegExtractor::new().with_program(fake.to_string_lossy());
    let error = extractor
        .extract_track(Path::new("in.mp4"), &destination, 2)
        .expect_err("fake transcoder exits non-zero");

    match &error {
        BlipscanError::ExtractionFailed { stderr, .. } => {
            assert!(
                stderr.contains("no such audio track"),
                "stderr should be captured in the error: {stderr}",
            );
        }
        other => panic!("expected an extraction failure, got {other}"),
    }
    assert!(
        !destination.exists(),
        "partial output should be removed after a failed extraction",
    );
}
