use std::io::Cursor;

use handsign_common::{Label, RecognitionConfig, Timestamp};
use handsign_core::session::{self, FrameSource};
use handsign_core::{Classifier, DisplayController, DisplayEvent, pump};
use handsign_protocols::{FrameReader, decode_all, encode_frame};
use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::util::{RECORDING, cleared, ms, recording, shown};

#[test]
fn recording_decodes_with_line_numbers_intact() {
    let frames = recording();
    assert_eq!(frames.len(), 8);
    assert!(frames.iter().all(|timed| timed.at.is_some()));
    assert_eq!(frames[3].at, Some(ms(625)));

    let broken = RECORDING.replace("\"t\":0.25", "\"t\":-0.25");
    let err = decode_all(broken.as_bytes()).unwrap_err();
    assert_eq!(err.line(), Some(4));
}

#[test]
fn every_recorded_frame_classifies_as_scripted() {
    let classifier = Classifier::default();
    let labels: Vec<Option<&str>> = recording()
        .iter()
        .map(|timed| classifier.classify(&timed.frame).map(|label| label.as_str()))
        .collect();

    assert_eq!(
        labels,
        vec![
            Some("A"),
            Some("1"),
            Some("1"),
            Some("1"),
            None,
            None, // wrist below the confidence gate
            Some("B"),
            Some("YES"),
        ]
    );
}

#[test]
fn reencoded_recording_classifies_identically() {
    let classifier = Classifier::default();
    let frames = recording();
    let encoded: String = frames
        .iter()
        .map(|timed| encode_frame(timed).unwrap() + "\n")
        .collect();

    let decoded: Vec<_> = FrameReader::new(Cursor::new(encoded))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(decoded, frames);
    for (a, b) in frames.iter().zip(&decoded) {
        assert_eq!(classifier.classify(&a.frame), classifier.classify(&b.frame));
    }
}

#[test]
fn replay_through_controller_debounces_and_expires() {
    let config = RecognitionConfig::default();
    let classifier = Classifier::new(&config);
    let mut controller = DisplayController::new(&config).unwrap();

    let events: Vec<(Timestamp, DisplayEvent)> = recording()
        .iter()
        .filter_map(|timed| {
            let now = timed.at?;
            match controller.tick(now, classifier.classify(&timed.frame)) {
                DisplayEvent::Unchanged => None,
                event => Some((now, event)),
            }
        })
        .collect();

    assert_eq!(
        events,
        vec![shown(0, "A"), shown(625, "1"), cleared(3_000), shown(3_125, "B")]
    );
    assert_eq!(controller.current_label(), Some(Label::new("B")));
    assert_eq!(controller.expires_at(), Some(ms(5_125)));
}

#[test]
fn longer_minimum_interval_suppresses_the_switch_to_one() {
    let config = RecognitionConfig::default()
        .with_minimum_interval(std::time::Duration::from_millis(700));
    let classifier = Classifier::new(&config);
    let mut controller = DisplayController::new(&config).unwrap();

    let accepted: Vec<Label> = recording()
        .iter()
        .filter_map(|timed| {
            match controller.tick(timed.at?, classifier.classify(&timed.frame)) {
                DisplayEvent::Shown(label) => Some(label),
                _ => None,
            }
        })
        .collect();

    assert_eq!(accepted, vec![Label::new("A"), Label::new("B")]);
}

/// Replays the recording in (paused) real time through a live session.
#[tokio::test(start_paused = true)]
async fn live_session_follows_recording_timestamps() {
    let (tx, mut rx) = mpsc::unbounded_channel::<(Timestamp, DisplayEvent)>();
    let (handle, task) = session::spawn(&RecognitionConfig::default(), 4, tx).unwrap();
    let start = Instant::now();

    for timed in recording() {
        let at = timed.at.unwrap();
        tokio::time::sleep_until(start + at.as_duration()).await;
        handle.send(timed.frame).await.unwrap();
    }

    let mut label = handle.subscribe();
    label.wait_for(Option::is_none).await.unwrap();
    drop(handle);

    let summary = task.await.unwrap();
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }

    // Unlike the frame-driven replay, the session timer clears "1" at its
    // exact expiry rather than on the next frame.
    assert_eq!(
        events,
        vec![
            shown(0, "A"),
            shown(625, "1"),
            cleared(2_625),
            shown(3_125, "B"),
            cleared(5_125),
        ]
    );
    assert_eq!(summary.frames, 8);
    assert_eq!(summary.classified, 6);
    assert_eq!(summary.shown, 3);
    assert_eq!(summary.cleared, 2);
}

struct Recording(std::vec::IntoIter<handsign_protocols::TimedFrame>);

#[async_trait::async_trait]
impl FrameSource for Recording {
    async fn next_frame(&mut self) -> anyhow::Result<Option<handsign_common::LandmarkFrame>> {
        Ok(self.0.next().map(|timed| timed.frame))
    }
}

#[tokio::test(start_paused = true)]
async fn pumped_recording_without_pacing_shows_only_the_first_label() {
    let (tx, mut rx) = mpsc::unbounded_channel::<(Timestamp, DisplayEvent)>();
    let (handle, task) = session::spawn(&RecognitionConfig::default(), 2, tx).unwrap();

    let mut source = Recording(recording().into_iter());
    assert_eq!(pump(&mut source, &handle).await.unwrap(), 8);
    drop(handle);

    let summary = task.await.unwrap();
    assert_eq!(rx.recv().await, Some(shown(0, "A")));
    // Dropping the handle does not cut the label short.
    assert_eq!(rx.recv().await, Some(cleared(2_000)));
    assert_eq!(rx.recv().await, None);
    assert_eq!(summary.shown, 1);
    assert_eq!(summary.cleared, 1);
    assert_eq!(summary.frames, 8);
}
