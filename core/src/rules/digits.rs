//! Digits 0-9.
//!
//! Finger extension is measured against the index knuckle for every finger:
//! a fingertip more than [`EXTENSION`] above `indexMCP` counts as raised, a
//! fingertip below `indexMCP` counts as folded.

use handsign_common::{HandPose, Joint, Point};

const EXTENSION: f64 = 0.15;

fn raised(tip: Point, index_mcp: Point) -> bool {
    tip.y > index_mcp.y + EXTENSION
}

fn folded(tip: Point, index_mcp: Point) -> bool {
    tip.y < index_mcp.y
}

pub(super) const ZERO_JOINTS: [Joint; 2] = [Joint::ThumbTip, Joint::IndexTip];

/// Thumb and index tips touching to close an "O".
pub(super) fn zero(pose: &HandPose<'_>) -> bool {
    let Some([thumb_tip, index_tip]) = pose.require(ZERO_JOINTS) else {
        return false;
    };

    (thumb_tip.x - index_tip.x).abs() < 0.05 && (thumb_tip.y - index_tip.y).abs() < 0.05
}

pub(super) const ONE_JOINTS: [Joint; 5] = [
    Joint::IndexTip,
    Joint::IndexMcp,
    Joint::MiddleTip,
    Joint::RingTip,
    Joint::LittleTip,
];

pub(super) fn one(pose: &HandPose<'_>) -> bool {
    let Some([index_tip, index_mcp, middle_tip, ring_tip, little_tip]) = pose.require(ONE_JOINTS) else {
        return false;
    };

    raised(index_tip, index_mcp)
        && folded(middle_tip, index_mcp)
        && folded(ring_tip, index_mcp)
        && folded(little_tip, index_mcp)
}

pub(super) const TWO_JOINTS: [Joint; 5] = [
    Joint::IndexTip,
    Joint::MiddleTip,
    Joint::IndexMcp,
    Joint::RingTip,
    Joint::LittleTip,
];

/// Index and middle raised in a "V".
pub(super) fn two(pose: &HandPose<'_>) -> bool {
    let Some([index_tip, middle_tip, index_mcp, ring_tip, little_tip]) = pose.require(TWO_JOINTS) else {
        return false;
    };

    let two_up = raised(index_tip, index_mcp) && raised(middle_tip, index_mcp);
    let spread = (index_tip.x - middle_tip.x).abs() > 0.1;
    let others_down = folded(ring_tip, index_mcp) && folded(little_tip, index_mcp);

    two_up && spread && others_down
}

pub(super) const THREE_JOINTS: [Joint; 5] = [
    Joint::IndexTip,
    Joint::MiddleTip,
    Joint::RingTip,
    Joint::IndexMcp,
    Joint::LittleTip,
];

pub(super) fn three(pose: &HandPose<'_>) -> bool {
    let Some([index_tip, middle_tip, ring_tip, index_mcp, little_tip]) = pose.require(THREE_JOINTS) else {
        return false;
    };

    raised(index_tip, index_mcp)
        && raised(middle_tip, index_mcp)
        && raised(ring_tip, index_mcp)
        && folded(little_tip, index_mcp)
}

pub(super) const FOUR_JOINTS: [Joint; 5] = [
    Joint::IndexTip,
    Joint::MiddleTip,
    Joint::RingTip,
    Joint::LittleTip,
    Joint::IndexMcp,
];

pub(super) fn four(pose: &HandPose<'_>) -> bool {
    let Some([index_tip, middle_tip, ring_tip, little_tip, index_mcp]) = pose.require(FOUR_JOINTS) else {
        return false;
    };

    [index_tip, middle_tip, ring_tip, little_tip]
        .into_iter()
        .all(|tip| raised(tip, index_mcp))
}

pub(super) const FIVE_JOINTS: [Joint; 6] = [
    Joint::IndexTip,
    Joint::MiddleTip,
    Joint::RingTip,
    Joint::LittleTip,
    Joint::ThumbTip,
    Joint::IndexMcp,
];

/// Open hand: four fingers raised and fanned out, thumb up.
pub(super) fn five(pose: &HandPose<'_>) -> bool {
    let Some([index_tip, middle_tip, ring_tip, little_tip, thumb_tip, index_mcp]) =
        pose.require(FIVE_JOINTS)
    else {
        return false;
    };

    let all_up = [index_tip, middle_tip, ring_tip, little_tip]
        .into_iter()
        .all(|tip| raised(tip, index_mcp))
        && thumb_tip.y > index_mcp.y;
    let spread = (index_tip.x - little_tip.x).abs() > 0.2;

    all_up && spread
}

pub(super) const SIX_JOINTS: [Joint; 3] = [Joint::ThumbTip, Joint::LittleTip, Joint::IndexMcp];

/// Thumb out to the side, little finger folded.
pub(super) fn six(pose: &HandPose<'_>) -> bool {
    let Some([thumb_tip, little_tip, index_mcp]) = pose.require(SIX_JOINTS) else {
        return false;
    };

    thumb_tip.x < index_mcp.x && folded(little_tip, index_mcp)
}

pub(super) const SEVEN_JOINTS: [Joint; 4] = [
    Joint::ThumbTip,
    Joint::IndexTip,
    Joint::RingTip,
    Joint::IndexMcp,
];

pub(super) fn seven(pose: &HandPose<'_>) -> bool {
    let Some([thumb_tip, index_tip, ring_tip, index_mcp]) = pose.require(SEVEN_JOINTS) else {
        return false;
    };

    thumb_tip.y > index_mcp.y && index_tip.y > index_mcp.y && folded(ring_tip, index_mcp)
}

pub(super) const EIGHT_JOINTS: [Joint; 4] = [
    Joint::ThumbTip,
    Joint::IndexTip,
    Joint::MiddleTip,
    Joint::IndexMcp,
];

/// Thumb reaching over to the middle finger with the index up.
pub(super) fn eight(pose: &HandPose<'_>) -> bool {
    let Some([thumb_tip, index_tip, middle_tip, index_mcp]) = pose.require(EIGHT_JOINTS) else {
        return false;
    };

    (thumb_tip.x - middle_tip.x).abs() < 0.1 && index_tip.y > index_mcp.y
}

pub(super) const NINE_JOINTS: [Joint; 3] = [Joint::IndexTip, Joint::IndexMcp, Joint::ThumbTip];

pub(super) fn nine(pose: &HandPose<'_>) -> bool {
    let Some([index_tip, index_mcp, thumb_tip]) = pose.require(NINE_JOINTS) else {
        return false;
    };

    folded(index_tip, index_mcp) && thumb_tip.x < index_mcp.x
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
    use crate::rules::fixtures::{HandBuilder, digit_five, digit_four, digit_one};

    #[test]
    fn one_is_index_two_tenths_above_its_knuckle() {
        let frame = digit_one();
        let pose = frame.pose(0.3);
        assert!(one(&pose));
        assert!(!two(&pose));
        assert!(!three(&pose));
        assert!(!four(&pose));
    }

    #[test]
    fn one_fails_when_index_is_barely_raised() {
        let frame = HandBuilder::new().tips(0.5, 0.3, 0.3, 0.3).build();
        assert!(!one(&frame.pose(0.3)));
    }

    #[test]
    fn two_needs_a_gap_between_index_and_middle() {
        let v_sign = HandBuilder::new()
            .at(Joint::IndexTip, 0.38, 0.7)
            .at(Joint::MiddleTip, 0.55, 0.7)
            .at(Joint::RingTip, 0.55, 0.3)
            .at(Joint::LittleTip, 0.6, 0.3)
            .build();
        assert!(two(&v_sign.pose(0.3)));

        let together = HandBuilder::new().tips(0.7, 0.7, 0.3, 0.3).build();
        assert!(!two(&together.pose(0.3)));
    }

    #[test]
    fn three_and_four_split_on_the_little_finger() {
        let three_up = HandBuilder::new().tips(0.7, 0.7, 0.7, 0.3).build();
        assert!(three(&three_up.pose(0.3)));
        assert!(!four(&three_up.pose(0.3)));

        let four_up = digit_four();
        assert!(four(&four_up.pose(0.3)));
        assert!(!three(&four_up.pose(0.3)));
    }

    #[test]
    fn five_is_four_with_thumb_and_spread() {
        assert!(five(&digit_five().pose(0.3)));
        assert!(!five(&digit_four().pose(0.3)));

        let narrow = HandBuilder::new()
            .tips(0.7, 0.7, 0.7, 0.7)
            .at(Joint::ThumbTip, 0.2, 0.5)
            .build();
        assert!(four(&narrow.pose(0.3)));
        assert!(!five(&narrow.pose(0.3)));
    }

    #[test]
    fn zero_is_a_closed_circle() {
        let circle = HandBuilder::new()
            .tips(0.5, 0.3, 0.3, 0.3)
            .at(Joint::ThumbTip, 0.47, 0.52)
            .build();
        assert!(zero(&circle.pose(0.3)));

        let open = HandBuilder::new()
            .tips(0.5, 0.3, 0.3, 0.3)
            .at(Joint::ThumbTip, 0.35, 0.52)
            .build();
        assert!(!zero(&open.pose(0.3)));
    }

    #[test]
    fn thumb_position_digits() {
        let six_pose = HandBuilder::new()
            .tips(0.6, 0.6, 0.6, 0.3)
            .at(Joint::ThumbTip, 0.3, 0.35)
            .build();
        assert!(six(&six_pose.pose(0.3)));

        let seven_pose = HandBuilder::new()
            .tips(0.5, 0.5, 0.3, 0.5)
            .at(Joint::ThumbTip, 0.55, 0.5)
            .build();
        assert!(seven(&seven_pose.pose(0.3)));

        let eight_pose = HandBuilder::new()
            .tips(0.5, 0.3, 0.5, 0.5)
            .at(Joint::ThumbTip, 0.52, 0.35)
            .build();
        assert!(eight(&eight_pose.pose(0.3)));

        let nine_pose = HandBuilder::new()
            .tips(0.3, 0.5, 0.5, 0.5)
            .at(Joint::ThumbTip, 0.3, 0.35)
            .build();
        assert!(nine(&nine_pose.pose(0.3)));
        assert!(!nine(&digit_one().pose(0.3)));
    }
}
