//! A live **recognition session**.
//!
//! The session owns one [`Classifier`] and one [`DisplayController`] and runs
//! them inside a single tokio task. Frames arrive over a bounded channel and
//! label expiry is driven by a timer on the current expiry instant, both
//! multiplexed with `select!`, so the controller only ever has one writer.
//!
//! ```text
//!   capture ──offer()/send()──▶ [ mpsc ] ──▶ session task ──▶ DisplaySink
//!                                               │
//!                                               └──▶ watch<Option<Label>>
//! ```

use anyhow::Context;
use async_trait::async_trait;
use handsign_common::{Label, LandmarkFrame, RecognitionConfig, Timestamp, success};
use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
    time::{Instant, sleep_until},
};
use tracing::{debug, info};

use crate::{
    classifier::Classifier,
    display::{DisplayController, DisplayEvent},
};

pub const DEFAULT_QUEUE_CAPACITY: usize = 8;

/// Receives every display event other than [`DisplayEvent::Unchanged`].
pub trait DisplaySink: Send {
    fn on_event(&mut self, at: Timestamp, event: DisplayEvent);
}

impl<F> DisplaySink for F
where
    F: FnMut(Timestamp, DisplayEvent) + Send,
{
    fn on_event(&mut self, at: Timestamp, event: DisplayEvent) {
        self(at, event)
    }
}

impl DisplaySink for mpsc::UnboundedSender<(Timestamp, DisplayEvent)> {
    fn on_event(&mut self, at: Timestamp, event: DisplayEvent) {
        // A closed receiver just means nobody is watching anymore.
        let _ = self.send((at, event));
    }
}

/// Upstream producer of landmark frames, e.g. a pose estimator or a recording.
#[async_trait]
pub trait FrameSource: Send {
    /// The next frame, or `None` once the source is exhausted.
    async fn next_frame(&mut self) -> anyhow::Result<Option<LandmarkFrame>>;
}

/// Forwards every frame from `source` into the session, waiting for queue
/// space. Returns the number of frames forwarded.
pub async fn pump<S>(source: &mut S, handle: &SessionHandle) -> anyhow::Result<usize>
where
    S: FrameSource + ?Sized,
{
    let mut forwarded = 0;
    while let Some(frame) = source.next_frame().await? {
        handle.send(frame).await?;
        forwarded += 1;
    }
    debug!(forwarded, "frame source exhausted");
    Ok(forwarded)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    pub frames: usize,
    /// Frames for which the classifier returned a label, accepted or not.
    pub classified: usize,
    pub shown: usize,
    pub cleared: usize,
}

/// Producer-side handle. Once every handle is dropped the session runs the
/// current label out and stops.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    frames: mpsc::Sender<LandmarkFrame>,
    label: watch::Receiver<Option<Label>>,
}

impl SessionHandle {
    /// Queues a frame, waiting while the queue is full.
    pub async fn send(&self, frame: LandmarkFrame) -> anyhow::Result<()> {
        self.frames
            .send(frame)
            .await
            .ok()
            .context("recognition session has stopped")
    }

    /// Queues a frame without waiting. A full queue drops the frame and
    /// returns `false`.
    pub fn offer(&self, frame: LandmarkFrame) -> bool {
        self.frames.try_send(frame).is_ok()
    }

    /// The label currently on display.
    pub fn current_label(&self) -> Option<Label> {
        *self.label.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Label>> {
        self.label.clone()
    }
}

pub struct RecognitionSession {
    classifier: Classifier,
    controller: DisplayController,
    frames: mpsc::Receiver<LandmarkFrame>,
    label: watch::Sender<Option<Label>>,
    origin: Instant,
    summary: SessionSummary,
}

impl RecognitionSession {
    /// Builds a session and its first handle. Nothing runs until [`run`](Self::run).
    pub fn new(config: &RecognitionConfig, capacity: usize) -> anyhow::Result<(Self, SessionHandle)> {
        let controller = DisplayController::new(config).context("invalid recognition config")?;
        let (frame_tx, frame_rx) = mpsc::channel(capacity.max(1));
        let (label_tx, label_rx) = watch::channel(None);

        let session = Self {
            classifier: Classifier::new(config),
            controller,
            frames: frame_rx,
            label: label_tx,
            origin: Instant::now(),
            summary: SessionSummary::default(),
        };
        let handle = SessionHandle {
            frames: frame_tx,
            label: label_rx,
        };
        Ok((session, handle))
    }

    /// Processes frames and expiries until every handle is dropped and the
    /// last shown label has expired.
    pub async fn run<S: DisplaySink>(mut self, mut sink: S) -> SessionSummary {
        info!("recognition session started");
        let mut open = true;

        loop {
            let deadline = self
                .controller
                .expires_at()
                .map(|at| self.origin + at.as_duration());

            if !open && deadline.is_none() {
                break;
            }

            tokio::select! {
                frame = self.frames.recv(), if open => {
                    match frame {
                        Some(frame) => self.on_frame(&frame, &mut sink),
                        None => {
                            debug!("frame queue closed, draining display");
                            open = false;
                        }
                    }
                }

                _ = sleep_until(deadline.unwrap_or(self.origin)), if deadline.is_some() => {
                    self.on_tick(None, &mut sink);
                }

                else => break,
            }
        }

        let summary = self.summary;
        success!(
            frames = summary.frames,
            shown = summary.shown,
            cleared = summary.cleared,
            "recognition session finished"
        );
        summary
    }

    fn now(&self) -> Timestamp {
        Timestamp::from_duration(Instant::now().duration_since(self.origin))
    }

    fn on_frame<S: DisplaySink>(&mut self, frame: &LandmarkFrame, sink: &mut S) {
        self.summary.frames += 1;
        let label = self.classifier.classify(frame);
        if label.is_some() {
            self.summary.classified += 1;
        }
        self.on_tick(label, sink);
    }

    fn on_tick<S: DisplaySink>(&mut self, label: Option<Label>, sink: &mut S) {
        let now = self.now();
        let event = self.controller.tick(now, label);
        match event {
            DisplayEvent::Unchanged => return,
            DisplayEvent::Shown(_) => self.summary.shown += 1,
            DisplayEvent::Cleared => self.summary.cleared += 1,
        }
        self.label.send_replace(self.controller.current_label());
        sink.on_event(now, event);
    }
}

/// Spawns a session on the current runtime.
pub fn spawn<S>(
    config: &RecognitionConfig,
    capacity: usize,
    sink: S,
) -> anyhow::Result<(SessionHandle, JoinHandle<SessionSummary>)>
where
    S: DisplaySink + 'static,
{
    let (session, handle) = RecognitionSession::new(config, capacity)?;
    Ok((handle, tokio::spawn(session.run(sink))))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
