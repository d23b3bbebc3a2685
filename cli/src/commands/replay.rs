use std::time::Duration;

use colored::*;
use handsign_common::{RecognitionConfig, Timestamp, success};
use handsign_core::{Classifier, DisplayController, DisplayEvent};
use handsign_protocols::TimedFrame;
use tracing::warn;

use crate::commands::Input;
use crate::terminal::{colors, print};

/// Deterministic replay: the recording's own timestamps drive the controller.
pub fn replay(input: &Input, fps: f64, cfg: &RecognitionConfig, q_level: u8) -> anyhow::Result<()> {
    anyhow::ensure!(fps.is_finite() && fps > 0.0, "--fps must be positive, got {fps}");

    let frames = input.read_all()?;
    let classifier = Classifier::new(cfg);
    let mut controller = DisplayController::new(cfg)?;

    print::header("replay", q_level);

    let events = replay_events(&frames, fps, &classifier, &mut controller);
    let mut shown = 0;
    let mut cleared = 0;
    for (at, event) in events {
        match event {
            DisplayEvent::Shown(_) => shown += 1,
            DisplayEvent::Cleared => cleared += 1,
            DisplayEvent::Unchanged => {}
        }
        print_event(at, event);
    }

    // The recording may end while a label is still up; report when it would clear.
    if let (Some(label), Some(expires_at)) = (controller.current_label(), controller.expires_at()) {
        print::print_status(format!(
            "{} {} until {}",
            label.as_str().color(colors::LABEL).bold(),
            "showing".color(colors::SEPARATOR),
            format!("{:.3}s", expires_at.as_secs_f64()).color(colors::TIMESTAMP)
        ));
    }

    success!(
        "replayed {} frames: {} labels shown, {} cleared",
        frames.len(),
        shown,
        cleared
    );
    Ok(())
}

/// Runs `frames` through `controller` and collects every visible event.
///
/// Frames without a timestamp sit at `index / fps`. A frame that goes back
/// in time is processed at the previous instant, and an expiry that falls
/// between two frames is reported at its own instant.
pub fn replay_events(
    frames: &[TimedFrame],
    fps: f64,
    classifier: &Classifier,
    controller: &mut DisplayController,
) -> Vec<(Timestamp, DisplayEvent)> {
    let mut events = Vec::new();
    let mut previous = Timestamp::ZERO;
    let mut record = |at: Timestamp, event: DisplayEvent| {
        if event != DisplayEvent::Unchanged {
            events.push((at, event));
        }
    };

    for (idx, timed) in frames.iter().enumerate() {
        let at = timed
            .at
            .or_else(|| frame_offset(idx, fps).map(Timestamp::from_duration))
            .unwrap_or(previous);

        let now = if at < previous {
            warn!(
                "frame {idx} goes back in time ({:.3}s < {:.3}s), holding the clock",
                at.as_secs_f64(),
                previous.as_secs_f64()
            );
            previous
        } else {
            at
        };
        previous = now;

        if let Some(expires_at) = controller.expires_at().filter(|expiry| *expiry < now) {
            record(expires_at, controller.tick(expires_at, None));
        }
        record(now, controller.tick(now, classifier.classify(&timed.frame)));
    }

    events
}

/// Elapsed recording time for a frame index at a fixed rate.
fn frame_offset(index: usize, fps: f64) -> Option<Duration> {
    if !(fps.is_finite() && fps > 0.0) {
        return None;
    }
    Duration::try_from_secs_f64(index as f64 / fps).ok()
}

pub fn print_event(at: Timestamp, event: DisplayEvent) {
    let at: ColoredString = format!("{:>8.3}s", at.as_secs_f64()).color(colors::TIMESTAMP);
    match event {
        DisplayEvent::Shown(label) => print::print_status(format!(
            "{at} {} {}",
            "show ".color(colors::SEPARATOR),
            label.as_str().color(colors::LABEL).bold()
        )),
        DisplayEvent::Cleared => print::print_status(format!(
            "{at} {}",
            "clear".color(colors::CLEARED)
        )),
        DisplayEvent::Unchanged => {}
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use handsign_common::{Joint, Label, Landmark, LandmarkFrame};

    use super::*;

    const YES: Label = Label::new("YES");

    /// Index curled below its knuckle.
    fn fist() -> LandmarkFrame {
        LandmarkFrame::new()
            .with(Joint::IndexTip, Landmark::new(0.45, 0.3, 0.9))
            .with(Joint::IndexMcp, Landmark::new(0.45, 0.4, 0.9))
    }

    fn at(secs: f64, frame: LandmarkFrame) -> TimedFrame {
        TimedFrame::new(frame).at(Timestamp::try_from_secs_f64(secs).unwrap())
    }

    fn run(frames: &[TimedFrame], fps: f64) -> Vec<(Timestamp, DisplayEvent)> {
        let config = RecognitionConfig::default();
        let mut controller = DisplayController::new(&config).unwrap();
        replay_events(frames, fps, &Classifier::new(&config), &mut controller)
    }

    #[test]
    fn expiry_between_frames_is_reported_at_its_own_instant() {
        let frames = [at(0.0, fist()), at(3.0, LandmarkFrame::new())];

        assert_eq!(
            run(&frames, 30.0),
            vec![
                (Timestamp::ZERO, DisplayEvent::Shown(YES)),
                (Timestamp::from_millis(2_000), DisplayEvent::Cleared),
            ]
        );
    }

    #[test]
    fn clock_is_held_when_time_goes_backwards() {
        let frames = [at(0.0, fist()), at(3.0, LandmarkFrame::new()), at(1.0, fist())];

        assert_eq!(
            run(&frames, 30.0),
            vec![
                (Timestamp::ZERO, DisplayEvent::Shown(YES)),
                (Timestamp::from_millis(2_000), DisplayEvent::Cleared),
                (Timestamp::from_millis(3_000), DisplayEvent::Shown(YES)),
            ]
        );
    }

    #[test]
    fn untimed_frames_are_spaced_by_the_frame_rate() {
        let frames = [
            TimedFrame::new(fist()),
            TimedFrame::new(fist()),
            TimedFrame::new(fist()),
        ];

        // The frame at 250ms falls inside the minimum interval.
        assert_eq!(
            run(&frames, 4.0),
            vec![
                (Timestamp::ZERO, DisplayEvent::Shown(YES)),
                (Timestamp::from_millis(500), DisplayEvent::Shown(YES)),
            ]
        );
    }

    #[test]
    fn frame_offset_uses_rate() {
        assert_eq!(frame_offset(15, 30.0), Some(Duration::from_millis(500)));
        assert_eq!(frame_offset(1, 0.0), None);
        assert_eq!(frame_offset(1, f64::NAN), None);
    }
}
