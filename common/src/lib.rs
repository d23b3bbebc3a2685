//! Shared data model for the handsign workspace: hand joints, landmark frames,
//! sign labels, session timestamps and recognition settings.

pub mod config;
pub mod hand;
pub mod label;
pub mod log;
pub mod time;

#[doc(hidden)]
pub use tracing;

pub use config::{ConfigError, RecognitionConfig};
pub use hand::{HandPose, JOINT_COUNT, Joint, Landmark, LandmarkFrame, Point};
pub use label::Label;
pub use time::Timestamp;
