//! The canonical **sign rule set**.
//!
//! Every recognizable sign is one [`SignRule`] variant. A rule names the joints
//! it reads and a pure geometric predicate over them; a rule with any required
//! joint missing simply does not match.
//!
//! Rules overlap by design, so evaluation order is the tie-break. The canonical
//! order is letters, then digits, then phrases:
//!
//! * **Letters**: A, B, C, D
//! * **Digits**: 0, 5, 4, 3, 2, 1, 7, 6, 8, 9. A rule that refines another
//!   comes first (5 is 4 plus thumb and spread), and finger-count digits come
//!   before the thumb-position ones.
//! * **Phrases**: I LOVE YOU, HELLO, THANK YOU, NO, PLEASE, YES. The
//!   single-constraint rules go last.
//!
//! All thresholds assume `y` grows upward (see `handsign_common::hand::frame`).

use std::fmt;

use handsign_common::{HandPose, Joint, Label};

mod digits;
mod letters;
mod phrases;

/// Documentation grouping for rules. Has no effect on evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Letter,
    Digit,
    Phrase,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Letter => "letter",
            Category::Digit => "digit",
            Category::Phrase => "phrase",
        };
        f.write_str(name)
    }
}

/// One hand-authored sign predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignRule {
    LetterA,
    LetterB,
    LetterC,
    LetterD,
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    Hello,
    ThankYou,
    Please,
    Yes,
    No,
    ILoveYou,
}

impl SignRule {
    pub fn label(self) -> Label {
        let text = match self {
            Self::LetterA => "A",
            Self::LetterB => "B",
            Self::LetterC => "C",
            Self::LetterD => "D",
            Self::Digit0 => "0",
            Self::Digit1 => "1",
            Self::Digit2 => "2",
            Self::Digit3 => "3",
            Self::Digit4 => "4",
            Self::Digit5 => "5",
            Self::Digit6 => "6",
            Self::Digit7 => "7",
            Self::Digit8 => "8",
            Self::Digit9 => "9",
            Self::Hello => "HELLO",
            Self::ThankYou => "THANK YOU",
            Self::Please => "PLEASE",
            Self::Yes => "YES",
            Self::No => "NO",
            Self::ILoveYou => "I LOVE YOU",
        };
        Label::new(text)
    }

    pub fn category(self) -> Category {
        match self {
            Self::LetterA | Self::LetterB | Self::LetterC | Self::LetterD => Category::Letter,
            Self::Digit0
            | Self::Digit1
            | Self::Digit2
            | Self::Digit3
            | Self::Digit4
            | Self::Digit5
            | Self::Digit6
            | Self::Digit7
            | Self::Digit8
            | Self::Digit9 => Category::Digit,
            Self::Hello
            | Self::ThankYou
            | Self::Please
            | Self::Yes
            | Self::No
            | Self::ILoveYou => Category::Phrase,
        }
    }

    /// The joints this rule reads. Missing any of them is a non-match.
    pub fn required_joints(self) -> &'static [Joint] {
        match self {
            Self::LetterA => &letters::A_JOINTS,
            Self::LetterB => &letters::B_JOINTS,
            Self::LetterC => &letters::C_JOINTS,
            Self::LetterD => &letters::D_JOINTS,
            Self::Digit0 => &digits::ZERO_JOINTS,
            Self::Digit1 => &digits::ONE_JOINTS,
            Self::Digit2 => &digits::TWO_JOINTS,
            Self::Digit3 => &digits::THREE_JOINTS,
            Self::Digit4 => &digits::FOUR_JOINTS,
            Self::Digit5 => &digits::FIVE_JOINTS,
            Self::Digit6 => &digits::SIX_JOINTS,
            Self::Digit7 => &digits::SEVEN_JOINTS,
            Self::Digit8 => &digits::EIGHT_JOINTS,
            Self::Digit9 => &digits::NINE_JOINTS,
            Self::Hello => &phrases::HELLO_JOINTS,
            Self::ThankYou => &phrases::THANK_YOU_JOINTS,
            Self::Please => &phrases::PLEASE_JOINTS,
            Self::Yes => &phrases::YES_JOINTS,
            Self::No => &phrases::NO_JOINTS,
            Self::ILoveYou => &phrases::I_LOVE_YOU_JOINTS,
        }
    }

    pub fn matches(self, pose: &HandPose<'_>) -> bool {
        match self {
            Self::LetterA => letters::a(pose),
            Self::LetterB => letters::b(pose),
            Self::LetterC => letters::c(pose),
            Self::LetterD => letters::d(pose),
            Self::Digit0 => digits::zero(pose),
            Self::Digit1 => digits::one(pose),
            Self::Digit2 => digits::two(pose),
            Self::Digit3 => digits::three(pose),
            Self::Digit4 => digits::four(pose),
            Self::Digit5 => digits::five(pose),
            Self::Digit6 => digits::six(pose),
            Self::Digit7 => digits::seven(pose),
            Self::Digit8 => digits::eight(pose),
            Self::Digit9 => digits::nine(pose),
            Self::Hello => phrases::hello(pose),
            Self::ThankYou => phrases::thank_you(pose),
            Self::Please => phrases::please(pose),
            Self::Yes => phrases::yes(pose),
            Self::No => phrases::no(pose),
            Self::ILoveYou => phrases::i_love_you(pose),
        }
    }
}

/// Canonical evaluation order. See the module docs for the reasoning.
pub const CANONICAL_ORDER: [SignRule; 20] = [
    SignRule::LetterA,
    SignRule::LetterB,
    SignRule::LetterC,
    SignRule::LetterD,
    SignRule::Digit0,
    SignRule::Digit5,
    SignRule::Digit4,
    SignRule::Digit3,
    SignRule::Digit2,
    SignRule::Digit1,
    SignRule::Digit7,
    SignRule::Digit6,
    SignRule::Digit8,
    SignRule::Digit9,
    SignRule::ILoveYou,
    SignRule::Hello,
    SignRule::ThankYou,
    SignRule::No,
    SignRule::Please,
    SignRule::Yes,
];

/// An ordered, immutable list of rules.
#[derive(Debug, Clone)]
pub struct SignRuleSet {
    rules: Vec<SignRule>,
}

impl Default for SignRuleSet {
    fn default() -> Self {
        Self::canonical()
    }
}

impl SignRuleSet {
    pub fn canonical() -> Self {
        Self {
            rules: CANONICAL_ORDER.to_vec(),
        }
    }

    /// A custom ordering. Duplicates are dropped, keeping the first occurrence.
    pub fn from_rules(rules: impl IntoIterator<Item = SignRule>) -> Self {
        let mut ordered: Vec<SignRule> = Vec::new();
        for rule in rules {
            if !ordered.contains(&rule) {
                ordered.push(rule);
            }
        }
        Self { rules: ordered }
    }

    pub fn rules(&self) -> &[SignRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The earliest rule that matches.
    pub fn first_match(&self, pose: &HandPose<'_>) -> Option<SignRule> {
        self.rules.iter().copied().find(|rule| rule.matches(pose))
    }

    /// Every matching rule, in evaluation order.
    pub fn matching(&self, pose: &HandPose<'_>) -> Vec<SignRule> {
        self.rules.iter().copied().filter(|rule| rule.matches(pose)).collect()
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
