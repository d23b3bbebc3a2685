use handsign_common::Joint;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("invalid frame JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown joint `{0}`")]
    UnknownJoint(String),

    #[error("joint {0} appears more than once")]
    DuplicateJoint(Joint),

    #[error("{joint}.{axis} = {value} is outside [0, 1]")]
    CoordinateOutOfRange {
        joint: Joint,
        axis: char,
        value: f64,
    },

    #[error("{joint}.confidence = {value} is outside [0, 1]")]
    ConfidenceOutOfRange { joint: Joint, value: f64 },

    #[error("timestamp must be a non-negative number of seconds, got {0}")]
    InvalidTimestamp(f64),

    #[error("line {line}: {source}")]
    Line {
        line: usize,
        source: Box<FrameError>,
    },

    #[error("failed to read frames: {0}")]
    Io(#[from] std::io::Error),
}

impl FrameError {
    pub(crate) fn at_line(self, line: usize) -> Self {
        FrameError::Line {
            line,
            source: Box::new(self),
        }
    }

    /// 1-based line number, when the error came from a multi-line stream.
    pub fn line(&self) -> Option<usize> {
        match self {
            FrameError::Line { line, .. } => Some(*line),
            _ => None,
        }
    }
}
