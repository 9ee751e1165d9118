use std::path::PathBuf;

use anyhow::Context;
use bingo_core::{GameConfig, GridSize};
use clap::Parser;

use crate::script::Step;

/// Replays bingo board events and prints a JSON snapshot after each one.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// What log level to use
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    /// TOML file with `size`, `word_bank` and `dismiss_delay_ms`
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Grid size (3, 4, 5 or 6), overrides the config file
    #[arg(short, long)]
    pub size: Option<u8>,

    /// Force a seed instead of random
    #[arg(long)]
    pub seed: Option<u64>,

    /// Deal words in bank order instead of shuffling
    #[arg(long)]
    pub no_shuffle: bool,

    /// Steps: select:ROW,COL, size:N, clear, yes, no, again, wait:MS, fire
    pub steps: Vec<Step>,
}

impl Args {
    pub fn load_config(&self) -> anyhow::Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                parse_config(&text).with_context(|| format!("parsing {}", path.display()))?
            }
            None => GameConfig::default(),
        };

        if let Some(size) = self.size {
            config.size = GridSize::try_from(size)?;
        }
        Ok(config)
    }

    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

pub fn parse_config(text: &str) -> anyhow::Result<GameConfig> {
    Ok(toml::from_str(text)?)
}
