use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use clap::Parser;
use serde::Deserialize;

use focusmon_core::alert::domain::alert_sink::AlertSink;
use focusmon_core::alert::infrastructure::log_alert_sink::LogAlertSink;
use focusmon_core::alert::infrastructure::writer_alert_sink::WriterAlertSink;
use focusmon_core::detection::domain::detection_result::{DetectionResult, FaceDetection};
use focusmon_core::shared::clock::{Clock, ProcessClock};
use focusmon_core::shared::region::Rect;
use focusmon_core::tracking::domain::attention_tracker::AttentionTracker;
use focusmon_core::tracking::domain::thresholds::Thresholds;

/// Replay a detection event stream through the focus monitor.
///
/// Input is JSON lines, one record per frame tick:
/// `{"t": 1.5, "faces": [2, 0]}` — "faces" lists the open-eye region
/// count per detected face, `"faces": null` (or absent) marks a tick
/// where detection was unavailable, and a record without "t" is stamped
/// from the process clock (for live feeds piped over stdin).
#[derive(Parser)]
#[command(name = "focusmon")]
struct Cli {
    /// Input JSONL file, or '-' for stdin.
    input: PathBuf,

    /// Seconds without any face before the distracted alert.
    #[arg(long, default_value = "6.0")]
    face_absence: f64,

    /// Seconds without open eyes before the wake-up alert.
    #[arg(long, default_value = "2.0")]
    eyes_closed: f64,

    /// Minimum seconds between repeated alert firings.
    #[arg(long, default_value = "1.0")]
    cooldown: f64,

    /// Emit status events as JSON lines on stdout instead of log output.
    #[arg(long)]
    json: bool,
}

#[derive(Deserialize)]
struct FrameRecord {
    #[serde(default)]
    t: Option<f64>,
    #[serde(default)]
    faces: Option<Vec<usize>>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let thresholds = Thresholds::from_secs_f64(cli.face_absence, cli.eyes_closed, cli.cooldown)?;

    let mut tracker = AttentionTracker::new(thresholds);
    let clock = ProcessClock::new();
    let mut sink: Box<dyn AlertSink> = if cli.json {
        Box::new(WriterAlertSink::new(io::stdout()))
    } else {
        Box::new(LogAlertSink)
    };

    let reader: Box<dyn BufRead> = if cli.input == Path::new("-") {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(&cli.input)
            .map_err(|e| format!("cannot open {}: {e}", cli.input.display()))?;
        Box::new(BufReader::new(file))
    };

    let mut ticks = 0usize;
    let mut alerts = 0usize;
    let mut unavailable = 0usize;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: FrameRecord =
            serde_json::from_str(&line).map_err(|e| format!("line {}: {e}", line_no + 1))?;

        // try_from_secs_f64 rejects NaN, negative and overflowing values
        // in one place, so a garbled timestamp is an error, never a panic.
        let now = match record.t {
            Some(t) => Duration::try_from_secs_f64(t)
                .map_err(|_| format!("line {}: bad timestamp {t}", line_no + 1))?,
            None => clock.now(),
        };

        // A tick with no detection result must not touch the timers.
        let Some(face_counts) = record.faces else {
            unavailable += 1;
            log::warn!("line {}: detection unavailable, tick skipped", line_no + 1);
            continue;
        };

        let event = tracker.update(&to_detection(&face_counts), now)?;
        if event.alert_fired {
            alerts += 1;
        }
        sink.deliver(&event);
        ticks += 1;
    }

    log::info!("replayed {ticks} ticks: {alerts} alerts fired, {unavailable} unavailable");
    if tracker.clock_regressions() > 0 {
        log::warn!(
            "{} out-of-order timestamps were clamped",
            tracker.clock_regressions()
        );
    }

    Ok(())
}

/// Builds a detection result from per-face open-eye counts. The replay
/// format carries no geometry, so regions are nominal one-pixel rects;
/// the tracker only counts them.
fn to_detection(face_counts: &[usize]) -> DetectionResult {
    DetectionResult {
        faces: face_counts
            .iter()
            .map(|&eyes| FaceDetection {
                region: Rect::new(0, 0, 1, 1),
                eyes: vec![Rect::new(0, 0, 1, 1); eyes],
            })
            .collect(),
    }
}
