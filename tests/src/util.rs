use handsign_common::{Label, Timestamp};
use handsign_core::DisplayEvent;
use handsign_protocols::{TimedFrame, decode_all};

pub const RECORDING: &str = include_str!("../data/recording.jsonl");

pub fn recording() -> Vec<TimedFrame> {
    decode_all(RECORDING.as_bytes()).unwrap()
}

pub fn ms(millis: u64) -> Timestamp {
    Timestamp::from_millis(millis)
}

pub fn shown(millis: u64, label: &'static str) -> (Timestamp, DisplayEvent) {
    (ms(millis), DisplayEvent::Shown(Label::new(label)))
}

pub fn cleared(millis: u64) -> (Timestamp, DisplayEvent) {
    (ms(millis), DisplayEvent::Cleared)
}
