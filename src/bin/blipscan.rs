use std::{path::PathBuf, time::Duration};

use blipscan::{AnalysisConfig, FfmpegExtractor, scan_video_with_extractor};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

const CLI_AFTER_HELP: &str = "Examples:\n  blipscan shoot.mp4 ./project\n  blipscan shoot.mp4 ./project --track-number 2 --threshold -45 --json\n  blipscan shoot.mp4 ./project --in-time 00:01:30 --out-time 00:12:00 --out timestamps.json\n  blipscan --completions zsh > _blipscan";

#[derive(Debug, Parser)]
#[command(
    name = "blipscan",
    version,
    about = "Scan an audio track of a video file for activity and report blip onset timestamps",
    after_help = CLI_AFTER_HELP
)]
struct Cli {
    /// Path to the input video file.
    #[arg(required_unless_present = "completions")]
    video_path: Option<PathBuf>,

    /// Project directory where the temporary audio track is written.
    #[arg(required_unless_present = "completions")]
    project_path: Option<PathBuf>,

    /// Start of the analysis window (seconds, MM:SS, or HH:MM:SS).
    /// Timestamps are reported relative to this point.
    #[arg(long)]
    in_time: Option<String>,

    /// End of the analysis window (seconds, MM:SS, or HH:MM:SS).
    #[arg(long)]
    out_time: Option<String>,

    /// Audio track to analyze (1-based).
    #[arg(long, default_value_t = 3)]
    track_number: u32,

    /// Activity threshold in dBFS.
    #[arg(long, default_value_t = -50.0, allow_negative_numbers = true)]
    threshold: f64,

    /// Chunk size to analyze, in milliseconds.
    #[arg(long, default_value_t = 400)]
    chunk_size: u32,

    /// Video frame rate.
    #[arg(long, default_value_t = 25)]
    fps: u32,

    /// Write the timestamps as a JSON array to this file.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print the timestamps as a JSON array instead of one per line.
    #[arg(long)]
    json: bool,

    /// Transcoder binary to invoke.
    #[arg(long, default_value = "ffmpeg")]
    ffmpeg: String,

    /// Show a progress spinner while scanning.
    #[arg(long)]
    progress: bool,

    /// Show additional logging output.
    #[arg(long)]
    verbose: bool,

    /// Generate shell completion scripts and exit.
    #[arg(long, value_enum)]
    completions: Option<Shell>,
}

fn parse_timecode(value: &str) -> Result<f64, Box<dyn std::error::Error>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("time value cannot be empty".into());
    }

    if let Ok(seconds) = trimmed.parse::<f64>() {
        return Ok(seconds.max(0.0));
    }

    let parts: Vec<&str> = trimmed.split(':').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return Err(format!("invalid time format: {trimmed}").into());
    }

    let (hours, minutes, seconds_str) = if parts.len() == 3 {
        (parts[0].parse::<u64>()?, parts[1].parse::<u64>()?, parts[2])
    } else {
        (0_u64, parts[0].parse::<u64>()?, parts[1])
    };

    let seconds = seconds_str.parse::<f64>()?;
    let total_seconds = (hours as f64 * 3600.0) + (minutes as f64 * 60.0) + seconds;
    Ok(total_seconds.max(0.0))
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn build_config(cli: &Cli) -> Result<AnalysisConfig, Box<dyn std::error::Error>> {
    let video_path = cli.video_path.clone().ok_or("missing <VIDEO_PATH>")?;
    let project_path = cli.project_path.clone().ok_or("missing <PROJECT_PATH>")?;

    let mut config = AnalysisConfig::new(video_path, project_path)
        .with_track_number(cli.track_number)
        .with_threshold_dbfs(cli.threshold)
        .with_chunk_size_ms(cli.chunk_size)
        .with_fps(cli.fps);

    if let Some(value) = &cli.in_time {
        let seconds = parse_timecode(value).map_err(|e| format!("invalid --in-time: {e}"))?;
        config = config.with_in_time(seconds);
    }
    if let Some(value) = &cli.out_time {
        let seconds = parse_timecode(value).map_err(|e| format!("invalid --out-time: {e}"))?;
        config = config.with_out_time(seconds);
    }

    Ok(config)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut command = Cli::command();
        clap_complete::generate(shell, &mut command, "blipscan", &mut std::io::stdout());
        return Ok(());
    }

    init_logging(cli.verbose);
    let config = build_config(&cli)?;

    let spinner = if cli.progress {
        let bar = ProgressBar::new_spinner();
        bar.set_style(ProgressStyle::with_template("{spinner:.green} {msg}")?);
        bar.enable_steady_tick(Duration::from_millis(100));
        bar.set_message(format!("scanning {}", config.video_path.display()));
        Some(bar)
    } else {
        None
    };

    let extractor = FfmpegExtractor::new().with_program(&cli.ffmpeg);
    let result = scan_video_with_extractor(&config, &extractor);

    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }
    let timestamps = result?;

    if cli.json {
        println!("{}", blipscan::to_json(&timestamps)?);
    } else if timestamps.is_empty() {
        println!("{}", "No audio activity detected.".yellow());
    } else {
        println!("Detected audio activity at timestamps:");
        for seconds in &timestamps {
            println!("{seconds} seconds");
        }
    }

    if let Some(path) = &cli.out {
        blipscan::write_json(path, &timestamps)?;
        eprintln!(
            "{} {}",
            "saved:".green().bold(),
            format!("{} timestamp(s) to {}", timestamps.len(), path.display()).green()
        );
    }

    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
