use std::thread;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use colored::*;
use handsign_common::{LandmarkFrame, RecognitionConfig, Timestamp, success};
use handsign_core::session::{self, DEFAULT_QUEUE_CAPACITY, FrameSource, SessionSummary};
use handsign_core::{DisplayEvent, pump};
use handsign_protocols::{FrameError, FrameReader, TimedFrame};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::mpsc;
use tokio::time::{Interval, MissedTickBehavior};
use tracing::info;

use crate::commands::{Input, replay::print_event};
use crate::terminal::{colors, print};

const READ_AHEAD: usize = 64;

/// Frames from a JSON-lines reader, released at a fixed rate with optional
/// coordinate noise.
pub struct PacedSource {
    frames: mpsc::Receiver<Result<TimedFrame, FrameError>>,
    ticker: Interval,
    jitter: Option<Jitter>,
}

struct Jitter {
    amount: f64,
    rng: StdRng,
}

impl Jitter {
    fn apply(&mut self, frame: &mut LandmarkFrame) {
        for (_, landmark) in frame.iter_mut() {
            landmark.x = (landmark.x + self.rng.random_range(-self.amount..=self.amount)).clamp(0.0, 1.0);
            landmark.y = (landmark.y + self.rng.random_range(-self.amount..=self.amount)).clamp(0.0, 1.0);
        }
    }
}

impl PacedSource {
    pub fn open(input: &Input, fps: f64, jitter: f64, seed: Option<u64>) -> anyhow::Result<Self> {
        anyhow::ensure!(fps.is_finite() && fps > 0.0, "--fps must be positive, got {fps}");
        anyhow::ensure!(
            jitter.is_finite() && (0.0..=1.0).contains(&jitter),
            "--jitter must be within [0, 1], got {jitter}"
        );

        let reader = input.open()?;
        let (tx, rx) = mpsc::channel(READ_AHEAD);

        // Decoding blocks on I/O (stdin in particular), so it gets its own thread.
        thread::Builder::new()
            .name("frame-reader".into())
            .spawn(move || {
                for decoded in FrameReader::new(reader) {
                    let failed = decoded.is_err();
                    if tx.blocking_send(decoded).is_err() || failed {
                        break;
                    }
                }
            })
            .context("spawning frame reader")?;

        let mut ticker = tokio::time::interval(Duration::from_secs_f64(1.0 / fps));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let jitter = (jitter > 0.0).then(|| Jitter {
            amount: jitter,
            rng: match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            },
        });

        Ok(Self {
            frames: rx,
            ticker,
            jitter,
        })
    }
}

#[async_trait]
impl FrameSource for PacedSource {
    async fn next_frame(&mut self) -> anyhow::Result<Option<LandmarkFrame>> {
        let Some(decoded) = self.frames.recv().await else {
            return Ok(None);
        };
        let mut frame = decoded.context("reading live frames")?.frame;

        self.ticker.tick().await;
        if let Some(jitter) = self.jitter.as_mut() {
            jitter.apply(&mut frame);
        }
        Ok(Some(frame))
    }
}

pub async fn live(
    input: &Input,
    fps: f64,
    jitter: f64,
    seed: Option<u64>,
    cfg: &RecognitionConfig,
    q_level: u8,
) -> anyhow::Result<()> {
    let mut source = PacedSource::open(input, fps, jitter, seed)?;

    print::header("live recognition", q_level);
    info!("streaming {input} at {fps} fps");

    let sink = |at: Timestamp, event: DisplayEvent| print_event(at, event);
    let (handle, task) = session::spawn(cfg, DEFAULT_QUEUE_CAPACITY, sink)?;

    let forwarded = pump(&mut source, &handle).await;
    // The session clears the last label itself before finishing.
    drop(handle);

    let summary = task.await.context("recognition session panicked")?;
    forwarded?;

    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &SessionSummary) {
    print::fat_separator();
    print::as_tree_one_level(&[
        ("Frames", summary.frames.to_string().color(colors::ACCENT)),
        ("Classified", summary.classified.to_string().color(colors::ACCENT)),
        ("Shown", summary.shown.to_string().color(colors::LABEL)),
        ("Cleared", summary.cleared.to_string().color(colors::CLEARED)),
    ]);
    success!("live session complete");
}
