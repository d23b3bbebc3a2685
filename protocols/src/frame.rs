//! # Landmark frame wire format
//!
//! One JSON object per line:
//!
//! ```text
//! {"t": 0.033, "joints": {"wrist": [0.5, 0.1, 0.98], "indexTip": [0.45, 0.7]}}
//! ```
//!
//! * `t` is optional, seconds since the start of the recording.
//! * Each joint is `[x, y, confidence]`, `[x, y]` (confidence 1.0) or
//!   `{"x": .., "y": .., "confidence": ..}`.
//! * Joint names go through [`Joint::from_str`], so `index_tip`, `pinkyTip`
//!   and `8` are all accepted.
//! * Blank lines and lines starting with `#` are skipped.
//!
//! Everything is validated here so the classifier only ever sees finite,
//! in-range values.

use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use handsign_common::{Joint, Landmark, LandmarkFrame, Timestamp};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::trace;

use crate::error::FrameError;

/// Confidence assigned to joints written as a bare `[x, y]` pair.
pub const DEFAULT_CONFIDENCE: f64 = 1.0;

/// A decoded frame plus its optional recording timestamp.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimedFrame {
    pub at: Option<Timestamp>,
    pub frame: LandmarkFrame,
}

impl TimedFrame {
    pub fn new(frame: LandmarkFrame) -> Self {
        Self { at: None, frame }
    }

    pub fn at(mut self, at: Timestamp) -> Self {
        self.at = Some(at);
        self
    }
}

#[derive(Deserialize)]
struct RawFrame {
    #[serde(default)]
    t: Option<f64>,
    #[serde(deserialize_with = "joint_entries")]
    joints: Vec<(String, RawPoint)>,
}

/// Keeps every `joints` entry in document order, repeated keys included, so
/// duplicates can be rejected instead of silently overwritten.
fn joint_entries<'de, D>(deserializer: D) -> Result<Vec<(String, RawPoint)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct Entries;

    impl<'de> Visitor<'de> for Entries {
        type Value = Vec<(String, RawPoint)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of joint names to points")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(Entries)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPoint {
    Scored([f64; 3]),
    Bare([f64; 2]),
    Object {
        x: f64,
        y: f64,
        #[serde(default)]
        confidence: Option<f64>,
    },
}

impl RawPoint {
    fn into_landmark(self, joint: Joint) -> Result<Landmark, FrameError> {
        let (x, y, confidence) = match self {
            RawPoint::Scored([x, y, c]) => (x, y, c),
            RawPoint::Bare([x, y]) => (x, y, DEFAULT_CONFIDENCE),
            RawPoint::Object { x, y, confidence } => {
                (x, y, confidence.unwrap_or(DEFAULT_CONFIDENCE))
            }
        };

        for (axis, value) in [('x', x), ('y', y)] {
            if !unit(value) {
                return Err(FrameError::CoordinateOutOfRange { joint, axis, value });
            }
        }
        if !unit(confidence) {
            return Err(FrameError::ConfidenceOutOfRange {
                joint,
                value: confidence,
            });
        }

        Ok(Landmark::new(x, y, confidence))
    }
}

fn unit(value: f64) -> bool {
    value.is_finite() && (0.0..=1.0).contains(&value)
}

/// Decodes one line. Blank and comment lines yield `Ok(None)`.
pub fn decode_line(line: &str) -> Result<Option<TimedFrame>, FrameError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let raw: RawFrame = serde_json::from_str(line)?;

    let at = raw
        .t
        .map(|secs| Timestamp::try_from_secs_f64(secs).ok_or(FrameError::InvalidTimestamp(secs)))
        .transpose()?;

    let mut frame = LandmarkFrame::new();
    for (name, point) in raw.joints {
        let joint = Joint::from_str(&name).map_err(|_| FrameError::UnknownJoint(name))?;
        let landmark = point.into_landmark(joint)?;
        if frame.insert(joint, landmark).is_some() {
            return Err(FrameError::DuplicateJoint(joint));
        }
    }

    trace!(joints = frame.len(), "decoded frame");
    Ok(Some(TimedFrame { at, frame }))
}

/// Streaming decoder over a line-oriented reader.
///
/// Errors carry the 1-based line number they occurred on.
pub struct FrameReader<R> {
    lines: std::io::Lines<R>,
    line: usize,
}

impl<R: BufRead> FrameReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for FrameReader<R> {
    type Item = Result<TimedFrame, FrameError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let text = self.lines.next()?;
            self.line += 1;

            let decoded = text
                .map_err(FrameError::from)
                .and_then(|text| decode_line(&text));

            match decoded {
                Ok(Some(frame)) => return Some(Ok(frame)),
                Ok(None) => continue,
                Err(e) => return Some(Err(e.at_line(self.line))),
            }
        }
    }
}

/// Decodes every frame in `reader`, stopping at the first error.
pub fn decode_all<R: BufRead>(reader: R) -> Result<Vec<TimedFrame>, FrameError> {
    FrameReader::new(reader).collect()
}

struct Joints<'a>(&'a LandmarkFrame);

impl Serialize for Joints<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (joint, landmark) in self.0.iter() {
            map.serialize_entry(joint.as_str(), &[landmark.x, landmark.y, landmark.confidence])?;
        }
        map.end()
    }
}

#[derive(Serialize)]
struct WireFrame<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    t: Option<f64>,
    joints: Joints<'a>,
}

/// Encodes a frame as a single line (no trailing newline), joints in index
/// order, every joint as `[x, y, confidence]`.
pub fn encode_frame(frame: &TimedFrame) -> Result<String, FrameError> {
    let wire = WireFrame {
        t: frame.at.map(|at| at.as_secs_f64()),
        joints: Joints(&frame.frame),
    };
    Ok(serde_json::to_string(&wire)?)
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
    use super::*;

    fn decode(line: &str) -> TimedFrame {
        decode_line(line).unwrap().unwrap()
    }

    #[test]
    fn accepts_every_point_shape() {
        let timed = decode(
            r#"{"t": 0.5, "joints": {
                "wrist": [0.5, 0.1, 0.9],
                "index_tip": [0.45, 0.7],
                "pinkyTip": {"x": 0.6, "y": 0.3, "confidence": 0.4},
                "4": {"x": 0.3, "y": 0.4}
            }}"#,
        );

        assert_eq!(timed.at, Some(Timestamp::from_millis(500)));
        let frame = &timed.frame;
        assert_eq!(frame.len(), 4);
        assert_eq!(frame.get(Joint::Wrist), Some(&Landmark::new(0.5, 0.1, 0.9)));
        assert_eq!(frame.get(Joint::IndexTip), Some(&Landmark::new(0.45, 0.7, 1.0)));
        assert_eq!(frame.get(Joint::LittleTip), Some(&Landmark::new(0.6, 0.3, 0.4)));
        assert_eq!(frame.get(Joint::ThumbTip), Some(&Landmark::new(0.3, 0.4, 1.0)));
    }

    #[test]
    fn timestamp_is_optional() {
        let timed = decode(r#"{"joints": {}}"#);
        assert_eq!(timed.at, None);
        assert!(timed.frame.is_empty());
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        assert!(decode_line("").unwrap().is_none());
        assert!(decode_line("   \t").unwrap().is_none());
        assert!(decode_line("# recorded 2024-03-01").unwrap().is_none());
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(matches!(
            decode_line(r#"{"joints": {"wrist": [1.2, 0.1, 0.9]}}"#),
            Err(FrameError::CoordinateOutOfRange { joint: Joint::Wrist, axis: 'x', .. })
        ));
        assert!(matches!(
            decode_line(r#"{"joints": {"wrist": [0.2, -0.1]}}"#),
            Err(FrameError::CoordinateOutOfRange { axis: 'y', .. })
        ));
        assert!(matches!(
            decode_line(r#"{"joints": {"thumbTip": [0.2, 0.1, 1.5]}}"#),
            Err(FrameError::ConfidenceOutOfRange { joint: Joint::ThumbTip, .. })
        ));
        assert!(matches!(
            decode_line(r#"{"t": -1, "joints": {}}"#),
            Err(FrameError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn rejects_unknown_and_duplicate_joints() {
        assert!(matches!(
            decode_line(r#"{"joints": {"elbow": [0.2, 0.1]}}"#),
            Err(FrameError::UnknownJoint(name)) if name == "elbow"
        ));
        assert!(matches!(
            decode_line(r#"{"joints": {"indexTip": [0.2, 0.1], "index_tip": [0.2, 0.1]}}"#),
            Err(FrameError::DuplicateJoint(Joint::IndexTip))
        ));
        assert!(matches!(
            decode_line(r#"{"joints": {"indexTip": [0.2, 0.1], "indexTip": [0.9, 0.9]}}"#),
            Err(FrameError::DuplicateJoint(Joint::IndexTip))
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(decode_line("{not json"), Err(FrameError::Json(_))));
        assert!(matches!(
            decode_line(r#"{"joints": {"wrist": [0.2]}}"#),
            Err(FrameError::Json(_))
        ));
        assert!(matches!(decode_line(r#"{"t": 1}"#), Err(FrameError::Json(_))));
    }

    #[test]
    fn reader_reports_line_numbers() {
        let input = "# header\n{\"joints\": {}}\n\n{\"joints\": {\"wrist\": [2, 0]}}\n";
        let mut reader = FrameReader::new(input.as_bytes());

        assert!(reader.next().unwrap().is_ok());
        let err = reader.next().unwrap().unwrap_err();
        assert_eq!(err.line(), Some(4));
        assert!(err.to_string().starts_with("line 4: wrist.x = 2"));
        assert!(reader.next().is_none());
    }

    #[test]
    fn decode_all_collects_frames() {
        let input = "{\"t\": 0, \"joints\": {}}\n{\"t\": 0.1, \"joints\": {\"wrist\": [0.5, 0.5]}}\n";
        let frames = decode_all(input.as_bytes()).unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1].at, Some(Timestamp::from_millis(100)));
    }

    #[test]
    fn encode_writes_joints_in_index_order() {
        let frame = LandmarkFrame::new()
            .with(Joint::IndexTip, Landmark::new(0.5, 0.75, 1.0))
            .with(Joint::Wrist, Landmark::new(0.5, 0.25, 0.5));
        let line = encode_frame(&TimedFrame::new(frame.clone()).at(Timestamp::from_millis(1_500)))
            .unwrap();

        assert_eq!(
            line,
            r#"{"t":1.5,"joints":{"wrist":[0.5,0.25,0.5],"indexTip":[0.5,0.75,1.0]}}"#
        );
        assert_eq!(decode(&line).frame, frame);
    }

    #[test]
    fn encode_omits_missing_timestamp() {
        let line = encode_frame(&TimedFrame::default()).unwrap();
        assert_eq!(line, r#"{"joints":{}}"#);
    }
}
