//! Rule-based hand-sign recognition.
//!
//! * [`rules`]: the ordered table of sign predicates.
//! * [`classifier`]: confidence gating plus first-match evaluation of one frame.
//! * [`display`]: the debounce / display state machine.
//! * [`session`]: a tokio task wiring the two together for live input.

pub mod classifier;
pub mod display;
pub mod rules;
pub mod session;

pub use classifier::Classifier;
pub use display::{DisplayController, DisplayEvent, DisplayState, RecognitionState};
pub use rules::{CANONICAL_ORDER, Category, SignRule, SignRuleSet};
pub use session::{
    DisplaySink, FrameSource, RecognitionSession, SessionHandle, SessionSummary, pump,
};
