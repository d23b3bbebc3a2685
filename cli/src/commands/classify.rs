use std::collections::BTreeMap;
use std::time::Instant;

use colored::*;
use handsign_common::{Label, RecognitionConfig, success};
use handsign_core::{Classifier, SignRule};
use handsign_protocols::TimedFrame;
use rayon::prelude::*;

use crate::commands::Input;
use crate::terminal::{colors, print};

struct Outcome {
    label: Option<Label>,
    matching: Vec<SignRule>,
}

pub fn classify(input: &Input, explain: bool, cfg: &RecognitionConfig, q_level: u8) -> anyhow::Result<()> {
    let frames: Vec<TimedFrame> = input.read_all()?;
    let classifier = Classifier::new(cfg);
    let start = Instant::now();

    let outcomes: Vec<Outcome> = frames
        .par_iter()
        .map(|timed| Outcome {
            label: classifier.classify(&timed.frame),
            matching: if explain {
                classifier.explain(&timed.frame)
            } else {
                Vec::new()
            },
        })
        .collect();

    print::header("classification", q_level);
    for (idx, (timed, outcome)) in frames.iter().zip(&outcomes).enumerate() {
        print_outcome(idx, timed, outcome, explain);
    }

    let tally = tally(&outcomes);
    print::header("tally", q_level);
    let key_width = tally.keys().map(|label| label.as_str().len()).max().unwrap_or(0);
    for (label, count) in &tally {
        print::aligned_line(label.as_str(), key_width, count.to_string().color(colors::ACCENT));
    }

    let recognized: usize = tally.values().sum();
    success!(
        "{} of {} frames recognized in {:.2}ms",
        recognized,
        frames.len(),
        start.elapsed().as_secs_f64() * 1_000.0
    );
    Ok(())
}

fn print_outcome(idx: usize, timed: &TimedFrame, outcome: &Outcome, explain: bool) {
    let at: String = match timed.at {
        Some(at) => format!("{:>7.3}s", at.as_secs_f64()),
        None => format!("{:>8}", "-"),
    };
    let label: ColoredString = match outcome.label {
        Some(label) => label.as_str().color(colors::LABEL).bold(),
        None => "no match".color(colors::NO_MATCH),
    };

    let mut line = format!(
        "{} {} {}",
        format!("#{idx:<4}").color(colors::SEPARATOR),
        at.color(colors::TIMESTAMP),
        label
    );
    if explain && outcome.matching.len() > 1 {
        let others: Vec<&str> = outcome.matching[1..]
            .iter()
            .map(|rule| rule.label().as_str())
            .collect();
        line.push_str(&format!(" {}", format!("(also {})", others.join(", ")).dimmed()));
    }
    print::print_status(line);
}

fn tally(outcomes: &[Outcome]) -> BTreeMap<Label, usize> {
    let mut counts: BTreeMap<Label, usize> = BTreeMap::new();
    for label in outcomes.iter().filter_map(|outcome| outcome.label) {
        *counts.entry(label).or_default() += 1;
    }
    counts
}
