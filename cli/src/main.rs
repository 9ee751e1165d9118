use anyhow::Context;
use bingo_core::{BingoEngine, BoardGenerator, RandomBoardGenerator, SequentialBoardGenerator};
use clap::Parser;

mod cli;
mod runner;
mod script;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = args.load_config()?;
    let generator: Box<dyn BoardGenerator> = if args.no_shuffle {
        Box::new(SequentialBoardGenerator)
    } else {
        let seed = args.seed();
        log::debug!("seed: {seed}");
        Box::new(RandomBoardGenerator::new(seed))
    };

    let mut engine = BingoEngine::new(config, generator).context("dealing the first board")?;
    log::info!("{} board dealt, {} steps", engine.size(), args.steps.len());

    let stdout = std::io::stdout();
    runner::run(&mut engine, &args.steps, &mut stdout.lock())
}
