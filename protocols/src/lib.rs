//! Wire formats for feeding landmark frames into the recognizer.

pub mod error;
pub mod frame;

pub use error::FrameError;
pub use frame::{FrameReader, TimedFrame, decode_all, decode_line, encode_frame};
