mod commands;
mod terminal;

use commands::{CommandLine, Commands, classify, live, replay, rules};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);
    print::banner(commands.quiet);

    let cfg = commands.recognition_config()?;
    let q_level = commands.quiet;

    match &commands.command {
        Commands::Rules => {
            rules::rules(q_level);
            Ok(())
        }
        Commands::Classify { input, explain } => {
            classify::classify(input, *explain, &cfg, q_level)
        }
        Commands::Replay { input, fps } => replay::replay(input, *fps, &cfg, q_level),
        Commands::Live {
            input,
            fps,
            jitter,
            seed,
        } => live::live(input, *fps, *jitter, *seed, &cfg, q_level).await,
    }
}
