//! # Hand Joints
//!
//! The closed set of 21 landmarks a pose estimator reports for one hand.
//!
//! Indices follow the usual 21-point hand layout:
//! * `0` - wrist
//! * `1..=4` - thumb (CMC, MP, IP, tip)
//! * `5..=8` - index (MCP, PIP, DIP, tip)
//! * `9..=12` - middle
//! * `13..=16` - ring
//! * `17..=20` - little

use std::fmt;
use std::str::FromStr;

/// Total number of joints per hand.
pub const JOINT_COUNT: usize = 21;

/// One anatomical hand landmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Joint {
    Wrist,
    ThumbCmc,
    ThumbMp,
    ThumbIp,
    ThumbTip,
    IndexMcp,
    IndexPip,
    IndexDip,
    IndexTip,
    MiddleMcp,
    MiddlePip,
    MiddleDip,
    MiddleTip,
    RingMcp,
    RingPip,
    RingDip,
    RingTip,
    LittleMcp,
    LittlePip,
    LittleDip,
    LittleTip,
}

impl Joint {
    /// Every joint, in index order.
    pub const ALL: [Joint; JOINT_COUNT] = [
        Joint::Wrist,
        Joint::ThumbCmc,
        Joint::ThumbMp,
        Joint::ThumbIp,
        Joint::ThumbTip,
        Joint::IndexMcp,
        Joint::IndexPip,
        Joint::IndexDip,
        Joint::IndexTip,
        Joint::MiddleMcp,
        Joint::MiddlePip,
        Joint::MiddleDip,
        Joint::MiddleTip,
        Joint::RingMcp,
        Joint::RingPip,
        Joint::RingDip,
        Joint::RingTip,
        Joint::LittleMcp,
        Joint::LittlePip,
        Joint::LittleDip,
        Joint::LittleTip,
    ];

    /// Skeleton connections (parent, child) for renderers.
    pub const BONES: [(Joint, Joint); 20] = [
        (Joint::Wrist, Joint::ThumbCmc),
        (Joint::ThumbCmc, Joint::ThumbMp),
        (Joint::ThumbMp, Joint::ThumbIp),
        (Joint::ThumbIp, Joint::ThumbTip),
        (Joint::Wrist, Joint::IndexMcp),
        (Joint::IndexMcp, Joint::IndexPip),
        (Joint::IndexPip, Joint::IndexDip),
        (Joint::IndexDip, Joint::IndexTip),
        (Joint::Wrist, Joint::MiddleMcp),
        (Joint::MiddleMcp, Joint::MiddlePip),
        (Joint::MiddlePip, Joint::MiddleDip),
        (Joint::MiddleDip, Joint::MiddleTip),
        (Joint::Wrist, Joint::RingMcp),
        (Joint::RingMcp, Joint::RingPip),
        (Joint::RingPip, Joint::RingDip),
        (Joint::RingDip, Joint::RingTip),
        (Joint::Wrist, Joint::LittleMcp),
        (Joint::LittleMcp, Joint::LittlePip),
        (Joint::LittlePip, Joint::LittleDip),
        (Joint::LittleDip, Joint::LittleTip),
    ];

    /// Array index (0-20).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Joint> {
        Self::ALL.get(index).copied()
    }

    /// Canonical camelCase name, as used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wrist => "wrist",
            Self::ThumbCmc => "thumbCMC",
            Self::ThumbMp => "thumbMP",
            Self::ThumbIp => "thumbIP",
            Self::ThumbTip => "thumbTip",
            Self::IndexMcp => "indexMCP",
            Self::IndexPip => "indexPIP",
            Self::IndexDip => "indexDIP",
            Self::IndexTip => "indexTip",
            Self::MiddleMcp => "middleMCP",
            Self::MiddlePip => "middlePIP",
            Self::MiddleDip => "middleDIP",
            Self::MiddleTip => "middleTip",
            Self::RingMcp => "ringMCP",
            Self::RingPip => "ringPIP",
            Self::RingDip => "ringDIP",
            Self::RingTip => "ringTip",
            Self::LittleMcp => "littleMCP",
            Self::LittlePip => "littlePIP",
            Self::LittleDip => "littleDIP",
            Self::LittleTip => "littleTip",
        }
    }
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Joint {
    type Err = String;

    /// Parses a joint name.
    ///
    /// Supported formats:
    /// * **camelCase**: "indexTip", "thumbCMC" (case-insensitive).
    /// * **snake_case**: "index_tip", "thumb_cmc".
    /// * **Aliases**: "pinky*" for "little*".
    /// * **Index**: "0" through "20".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Ok(index) = trimmed.parse::<usize>() {
            return Joint::from_index(index)
                .ok_or_else(|| format!("joint index out of range: {index}"));
        }

        let folded: String = trimmed
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        let folded = match folded.strip_prefix("pinky") {
            Some(rest) => format!("little{rest}"),
            None => folded,
        };

        Joint::ALL
            .into_iter()
            .find(|joint| joint.as_str().eq_ignore_ascii_case(&folded))
            .ok_or_else(|| format!("unknown joint: {s}"))
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
