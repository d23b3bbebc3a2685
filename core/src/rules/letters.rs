//! Fingerspelled letters.

use handsign_common::{HandPose, Joint};

/// Fingers count as level with each other when their tips are this close in `y`.
const ALIGNED: f64 = 0.1;

pub(super) const A_JOINTS: [Joint; 10] = [
    Joint::ThumbTip,
    Joint::ThumbIp,
    Joint::IndexTip,
    Joint::IndexMcp,
    Joint::MiddleTip,
    Joint::MiddleMcp,
    Joint::RingTip,
    Joint::RingMcp,
    Joint::LittleTip,
    Joint::LittleMcp,
];

/// Fist with every fingertip below its own knuckle, thumb held out sideways.
pub(super) fn a(pose: &HandPose<'_>) -> bool {
    let Some([thumb_tip, thumb_ip, index_tip, index_mcp, middle_tip, middle_mcp, ring_tip, ring_mcp, little_tip, little_mcp]) =
        pose.require(A_JOINTS)
    else {
        return false;
    };

    let fingers_closed = index_tip.y < index_mcp.y
        && middle_tip.y < middle_mcp.y
        && ring_tip.y < ring_mcp.y
        && little_tip.y < little_mcp.y;
    let thumb_extended = (thumb_tip.x - thumb_ip.x).abs() > 0.05;

    fingers_closed && thumb_extended
}

pub(super) const B_JOINTS: [Joint; 9] = [
    Joint::ThumbTip,
    Joint::IndexTip,
    Joint::IndexMcp,
    Joint::MiddleTip,
    Joint::MiddleMcp,
    Joint::RingTip,
    Joint::RingMcp,
    Joint::LittleTip,
    Joint::LittleMcp,
];

/// Flat hand: four fingers up and close together, thumb tucked across the palm.
pub(super) fn b(pose: &HandPose<'_>) -> bool {
    let Some([thumb_tip, index_tip, index_mcp, middle_tip, middle_mcp, ring_tip, ring_mcp, little_tip, little_mcp]) =
        pose.require(B_JOINTS)
    else {
        return false;
    };

    let fingers_extended = index_tip.y > index_mcp.y + 0.1
        && middle_tip.y > middle_mcp.y + 0.1
        && ring_tip.y > ring_mcp.y + 0.1
        && little_tip.y > little_mcp.y + 0.1;
    let fingers_close = (index_tip.x - little_tip.x).abs() < 0.15;
    let thumb_tucked = thumb_tip.x > index_mcp.x;

    fingers_extended && fingers_close && thumb_tucked
}

pub(super) const C_JOINTS: [Joint; 5] = [
    Joint::ThumbTip,
    Joint::IndexTip,
    Joint::MiddleTip,
    Joint::RingTip,
    Joint::LittleTip,
];

/// Curved hand: fingertips level, thumb curling back towards the little finger.
pub(super) fn c(pose: &HandPose<'_>) -> bool {
    let Some([thumb_tip, index_tip, middle_tip, ring_tip, little_tip]) = pose.require(C_JOINTS) else {
        return false;
    };

    let fingers_aligned = (index_tip.y - middle_tip.y).abs() < ALIGNED
        && (middle_tip.y - ring_tip.y).abs() < ALIGNED
        && (ring_tip.y - little_tip.y).abs() < ALIGNED;
    let curved = (thumb_tip.x - little_tip.x).abs() < 0.2;

    fingers_aligned && curved
}

pub(super) const D_JOINTS: [Joint; 4] = [Joint::IndexTip, Joint::MiddleTip, Joint::IndexDip, Joint::Wrist];

/// Index pointing up and straight, middle finger folded below the wrist line.
pub(super) fn d(pose: &HandPose<'_>) -> bool {
    let Some([index_tip, middle_tip, index_dip, wrist]) = pose.require(D_JOINTS) else {
        return false;
    };

    index_tip.y > wrist.y && middle_tip.y < wrist.y && index_tip.y > index_dip.y
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
    use crate::rules::fixtures::{HandBuilder, letter_a, letter_b};

    #[test]
    fn a_needs_the_thumb_out() {
        assert!(a(&letter_a().pose(0.3)));

        let thumb_in = HandBuilder::new()
            .tips(0.3, 0.3, 0.3, 0.3)
            .at(Joint::ThumbIp, 0.4, 0.36)
            .at(Joint::ThumbTip, 0.42, 0.42)
            .build();
        assert!(!a(&thumb_in.pose(0.3)));
    }

    #[test]
    fn b_rejects_spread_fingers_and_loose_thumb() {
        assert!(b(&letter_b().pose(0.3)));

        let spread = HandBuilder::new()
            .at(Joint::IndexTip, 0.35, 0.7)
            .at(Joint::MiddleTip, 0.45, 0.7)
            .at(Joint::RingTip, 0.55, 0.7)
            .at(Joint::LittleTip, 0.65, 0.7)
            .at(Joint::ThumbTip, 0.52, 0.45)
            .build();
        assert!(!b(&spread.pose(0.3)));

        let thumb_out = HandBuilder::new()
            .at(Joint::IndexTip, 0.46, 0.7)
            .at(Joint::MiddleTip, 0.5, 0.72)
            .at(Joint::RingTip, 0.54, 0.71)
            .at(Joint::LittleTip, 0.58, 0.68)
            .at(Joint::ThumbTip, 0.3, 0.45)
            .build();
        assert!(!b(&thumb_out.pose(0.3)));
    }

    #[test]
    fn c_requires_level_tips_and_curled_thumb() {
        let curved = HandBuilder::new()
            .tips(0.6, 0.62, 0.63, 0.61)
            .at(Joint::ThumbTip, 0.7, 0.45)
            .build();
        assert!(c(&curved.pose(0.3)));

        let uneven = HandBuilder::new()
            .tips(0.6, 0.75, 0.63, 0.61)
            .at(Joint::ThumbTip, 0.7, 0.45)
            .build();
        assert!(!c(&uneven.pose(0.3)));
    }

    #[test]
    fn d_points_index_up_with_middle_below_wrist() {
        let pointing = HandBuilder::new()
            .at(Joint::Wrist, 0.5, 0.3)
            .at(Joint::IndexDip, 0.45, 0.6)
            .tips(0.7, 0.2, 0.2, 0.2)
            .build();
        assert!(d(&pointing.pose(0.3)));

        let middle_high = HandBuilder::new()
            .at(Joint::Wrist, 0.5, 0.3)
            .at(Joint::IndexDip, 0.45, 0.6)
            .tips(0.7, 0.35, 0.2, 0.2)
            .build();
        assert!(!d(&middle_high.pose(0.3)));
    }
}
