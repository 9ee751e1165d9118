use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Word bank too small: need {needed} words but only {available} available")]
    InsufficientWords { needed: usize, available: usize },
    #[error("Word bank contains duplicate word {0:?}")]
    DuplicateWord(String),
    #[error("Grid size {0} is not one of 3, 4, 5 or 6")]
    InvalidGridSize(u8),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = core::result::Result<T, GameError>;
