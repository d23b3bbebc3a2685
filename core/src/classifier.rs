//! Per-frame sign classification.
//!
//! The classifier is a pure function of its input frame: it gates landmarks by
//! confidence, walks the rule set in order and returns the first match. It holds
//! no mutable state, so one instance can be shared across threads and called
//! directly from a capture callback.

use handsign_common::{Label, LandmarkFrame, RecognitionConfig};
use tracing::trace;

use crate::rules::{SignRule, SignRuleSet};

#[derive(Debug, Clone)]
pub struct Classifier {
    rules: SignRuleSet,
    confidence_threshold: f64,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&RecognitionConfig::default())
    }
}

impl Classifier {
    /// Classifier over the canonical rule set.
    pub fn new(config: &RecognitionConfig) -> Self {
        Self::with_rules(SignRuleSet::canonical(), config.confidence_threshold)
    }

    pub fn with_rules(rules: SignRuleSet, confidence_threshold: f64) -> Self {
        Self {
            rules,
            confidence_threshold,
        }
    }

    pub fn rules(&self) -> &SignRuleSet {
        &self.rules
    }

    pub fn confidence_threshold(&self) -> f64 {
        self.confidence_threshold
    }

    /// Label of the first matching rule, or `None`.
    pub fn classify(&self, frame: &LandmarkFrame) -> Option<Label> {
        self.classify_rule(frame).map(SignRule::label)
    }

    /// Like [`classify`](Self::classify), but returns the rule itself.
    pub fn classify_rule(&self, frame: &LandmarkFrame) -> Option<SignRule> {
        let pose = frame.pose(self.confidence_threshold);
        let matched = self.rules.first_match(&pose);
        if let Some(rule) = matched {
            trace!(label = %rule.label(), joints = pose.confident_count(), "rule matched");
        }
        matched
    }

    /// Every matching rule in evaluation order. Useful for diagnosing overlaps.
    pub fn explain(&self, frame: &LandmarkFrame) -> Vec<SignRule> {
        self.rules.matching(&frame.pose(self.confidence_threshold))
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::{HandBuilder, digit_one, letter_a};
    use handsign_common::{Joint, Landmark};

    #[test]
    fn empty_frame_yields_none() {
        let classifier = Classifier::default();
        assert_eq!(classifier.classify(&LandmarkFrame::new()), None);
    }

    #[test]
    fn low_confidence_frame_yields_none() {
        let mut frame = letter_a();
        for (_, landmark) in frame.iter_mut() {
            landmark.confidence = 0.2;
        }
        let classifier = Classifier::default();
        assert_eq!(classifier.classify(&frame), None);
        assert!(classifier.explain(&frame).is_empty());
    }

    #[test]
    fn threshold_is_applied_by_the_classifier() {
        let mut frame = letter_a();
        for (_, landmark) in frame.iter_mut() {
            landmark.confidence = 0.5;
        }
        assert_eq!(Classifier::default().classify(&frame), Some(Label::new("A")));

        let strict = Classifier::new(&RecognitionConfig::default().with_confidence_threshold(0.6));
        assert_eq!(strict.classify(&frame), None);
    }

    #[test]
    fn index_raised_point_two_above_knuckle_is_one() {
        let frame = digit_one();
        let index_mcp = frame.get(Joint::IndexMcp).unwrap().y;
        let index_tip = frame.get(Joint::IndexTip).unwrap().y;
        assert!((index_tip - index_mcp - 0.2).abs() < 1e-9);

        assert_eq!(Classifier::default().classify(&frame), Some(Label::new("1")));
    }

    #[test]
    fn classify_is_deterministic() {
        let classifier = Classifier::default();
        let frame = digit_one();
        let first = classifier.classify(&frame);
        for _ in 0..10 {
            assert_eq!(classifier.classify(&frame), first);
        }
    }

    #[test]
    fn earlier_rule_wins_when_two_match() {
        // Digit one with the thumb raised also satisfies seven.
        let frame = HandBuilder::new()
            .tips(0.6, 0.3, 0.3, 0.3)
            .at(Joint::ThumbIp, 0.32, 0.45)
            .at(Joint::ThumbTip, 0.3, 0.5)
            .build();
        let classifier = Classifier::default();

        let matched = classifier.explain(&frame);
        assert!(matched.contains(&SignRule::Digit1));
        assert!(matched.contains(&SignRule::Digit7));

        for _ in 0..5 {
            assert_eq!(classifier.classify(&frame), Some(Label::new("1")));
        }
    }

    #[test]
    fn missing_joint_only_disables_rules_that_need_it() {
        let frame = digit_one();
        let without_ring: LandmarkFrame = frame
            .iter()
            .filter(|(joint, _)| *joint != Joint::RingTip)
            .map(|(joint, landmark)| (joint, *landmark))
            .collect();
        let classifier = Classifier::default();

        assert!(!classifier.explain(&without_ring).contains(&SignRule::Digit1));
        // Rules that never look at the ring finger still run.
        let single = LandmarkFrame::new()
            .with(Joint::IndexTip, Landmark::new(0.45, 0.3, 0.9))
            .with(Joint::IndexMcp, Landmark::new(0.45, 0.4, 0.9));
        assert_eq!(classifier.classify(&single), Some(Label::new("YES")));
    }
}
