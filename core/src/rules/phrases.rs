//! Common words and phrases.
//!
//! These signs involve motion in real signing; only the static hand shape is
//! checked here.

use handsign_common::{HandPose, Joint};

const EXTENSION: f64 = 0.15;

pub(super) const HELLO_JOINTS: [Joint; 3] = [Joint::ThumbTip, Joint::IndexTip, Joint::IndexMcp];

/// Flat hand, thumb alongside the fingers.
pub(super) fn hello(pose: &HandPose<'_>) -> bool {
    let Some([thumb_tip, index_tip, index_mcp]) = pose.require(HELLO_JOINTS) else {
        return false;
    };

    let fingers_extended = index_tip.y > index_mcp.y + EXTENSION;
    let thumb_parallel = (thumb_tip.y - index_tip.y).abs() < 0.1;

    fingers_extended && thumb_parallel
}

pub(super) const THANK_YOU_JOINTS: [Joint; 3] = [Joint::ThumbTip, Joint::IndexTip, Joint::IndexMcp];

pub(super) fn thank_you(pose: &HandPose<'_>) -> bool {
    let Some([thumb_tip, index_tip, index_mcp]) = pose.require(THANK_YOU_JOINTS) else {
        return false;
    };

    index_tip.y > thumb_tip.y && index_tip.y > index_mcp.y + EXTENSION
}

pub(super) const PLEASE_JOINTS: [Joint; 2] = [Joint::ThumbTip, Joint::IndexTip];

pub(super) fn please(pose: &HandPose<'_>) -> bool {
    let Some([thumb_tip, index_tip]) = pose.require(PLEASE_JOINTS) else {
        return false;
    };

    (thumb_tip.y - index_tip.y).abs() < 0.1
}

pub(super) const YES_JOINTS: [Joint; 2] = [Joint::IndexTip, Joint::IndexMcp];

/// Fist.
pub(super) fn yes(pose: &HandPose<'_>) -> bool {
    let Some([index_tip, index_mcp]) = pose.require(YES_JOINTS) else {
        return false;
    };

    index_tip.y < index_mcp.y
}

pub(super) const NO_JOINTS: [Joint; 2] = [Joint::IndexTip, Joint::IndexMcp];

/// Index pushed out to the side of its knuckle.
pub(super) fn no(pose: &HandPose<'_>) -> bool {
    let Some([index_tip, index_mcp]) = pose.require(NO_JOINTS) else {
        return false;
    };

    (index_tip.x - index_mcp.x).abs() > 0.1
}

pub(super) const I_LOVE_YOU_JOINTS: [Joint; 4] = [
    Joint::ThumbTip,
    Joint::IndexTip,
    Joint::LittleTip,
    Joint::IndexMcp,
];

/// Thumb, index and little finger extended.
pub(super) fn i_love_you(pose: &HandPose<'_>) -> bool {
    let Some([thumb_tip, index_tip, little_tip, index_mcp]) = pose.require(I_LOVE_YOU_JOINTS) else {
        return false;
    };

    let thumb_out = thumb_tip.x < index_mcp.x;
    let index_up = index_tip.y > index_mcp.y;
    let little_up = little_tip.y > index_mcp.y;

    thumb_out && index_up && little_up
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
