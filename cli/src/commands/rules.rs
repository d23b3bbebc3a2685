use colored::*;
use handsign_core::SignRuleSet;

use crate::{hprint, terminal::colors, terminal::print};

pub fn rules(q_level: u8) {
    let rule_set = SignRuleSet::canonical();
    print::header("sign rules", q_level);

    for (idx, rule) in rule_set.rules().iter().enumerate() {
        let joints: String = rule
            .required_joints()
            .iter()
            .map(|joint| joint.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        print::tree_head(idx, rule.label().as_str());
        print::as_tree_one_level(&[
            ("Kind", rule.category().to_string().color(colors::TEXT_DEFAULT)),
            ("Joints", joints.color(colors::SEPARATOR)),
        ]);
        if idx + 1 != rule_set.len() {
            hprint!();
        }
    }

    print::fat_separator();
    print::centerln(&format!("{} rules, first match wins", rule_set.len()));
}
