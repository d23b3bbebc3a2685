pub mod classify;
pub mod live;
pub mod replay;
pub mod rules;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use handsign_common::{RecognitionConfig, config};
use handsign_protocols::{TimedFrame, decode_all};

#[derive(Parser)]
#[command(name = "handsign")]
#[command(version, about = "Rule-based hand sign recognition over landmark frames.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// TOML file with minimumInterval, displayDuration and confidenceThreshold
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Seconds a showing label blocks new ones
    #[arg(long, global = true, value_name = "SECS")]
    pub min_interval: Option<f64>,

    /// Seconds a label stays visible
    #[arg(long, global = true, value_name = "SECS")]
    pub display_duration: Option<f64>,

    /// Landmarks at or below this confidence are ignored
    #[arg(long, global = true, value_name = "0..1")]
    pub confidence_threshold: Option<f64>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Less decoration (-q hides headers)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the sign rules in evaluation order
    #[command(alias = "r")]
    Rules,
    /// Classify every frame of a recording independently
    #[command(alias = "c")]
    Classify {
        /// JSON-lines frame file, or `-` for stdin
        input: Input,
        /// Show every matching rule, not only the winner
        #[arg(long)]
        explain: bool,
    },
    /// Run a recording through the display controller using its timestamps
    #[command(alias = "p")]
    Replay {
        input: Input,
        /// Frame rate used for frames without a timestamp
        #[arg(long, default_value_t = 30.0)]
        fps: f64,
    },
    /// Stream a recording in real time through a recognition session
    #[command(alias = "l")]
    Live {
        input: Input,
        #[arg(long, default_value_t = 30.0)]
        fps: f64,
        /// Uniform noise added to every coordinate, e.g. 0.01
        #[arg(long, default_value_t = 0.0)]
        jitter: f64,
        /// Seed for the jitter generator
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Defaults, then the config file, then command-line overrides.
    pub fn recognition_config(&self) -> anyhow::Result<RecognitionConfig> {
        let mut cfg = match &self.config {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                RecognitionConfig::from_toml_str(&content)
                    .with_context(|| format!("loading {}", path.display()))?
            }
            None => RecognitionConfig::default(),
        };

        if let Some(secs) = self.min_interval {
            cfg.minimum_interval = config::seconds("minimumInterval", secs)?;
        }
        if let Some(secs) = self.display_duration {
            cfg.display_duration = config::seconds("displayDuration", secs)?;
        }
        if let Some(threshold) = self.confidence_threshold {
            cfg.confidence_threshold = threshold;
        }

        cfg.validate()?;
        Ok(cfg)
    }
}

/// Where frames are read from.
#[derive(Debug, Clone)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl FromStr for Input {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err("input path is empty".to_string()),
            "-" => Ok(Input::Stdin),
            path => Ok(Input::File(PathBuf::from(path))),
        }
    }
}

impl Input {
    pub fn open(&self) -> anyhow::Result<Box<dyn BufRead + Send>> {
        match self {
            Input::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
            Input::File(path) => {
                let file =
                    File::open(path).with_context(|| format!("opening {}", path.display()))?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }

    pub fn read_all(&self) -> anyhow::Result<Vec<TimedFrame>> {
        decode_all(self.open()?).with_context(|| format!("decoding frames from {self}"))
    }
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Stdin => f.write_str("stdin"),
            Input::File(path) => write!(f, "{}", path.display()),
        }
    }
}
