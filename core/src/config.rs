use alloc::collections::BTreeSet;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::time::Duration;
use serde::{Deserialize, Serialize};

use crate::*;

/// Side length of a board, restricted to the sizes a player can pick.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GridSize {
    Three,
    Four,
    Five,
    Six,
}

impl GridSize {
    pub const ALL: [GridSize; 4] = [Self::Three, Self::Four, Self::Five, Self::Six];

    pub const fn get(self) -> Coord {
        match self {
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
        }
    }

    pub const fn total_cells(self) -> usize {
        cell_count(self.get())
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::Five
    }
}

impl TryFrom<u8> for GridSize {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or(GameError::InvalidGridSize(value))
    }
}

impl From<GridSize> for u8 {
    fn from(size: GridSize) -> Self {
        size.get()
    }
}

impl core::fmt::Display for GridSize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let side = self.get();
        write!(f, "{side} x {side}")
    }
}

const DEFAULT_WORDS: [&str; 26] = [
    "Apple", "Banana", "Carrot", "Dog", "Elephant", "Fish", "Giraffe", "Hat", "Igloo", "Jacket",
    "Kite", "Lion", "Monkey", "Notebook", "Orange", "Penguin", "Queen", "Robot", "Sun", "Tiger",
    "Umbrella", "Violin", "Whale", "Xylophone", "Yak", "Zebra",
];

/// Ordered list of unique words boards are drawn from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let mut seen = BTreeSet::new();
        for word in &words {
            if !seen.insert(word.as_str()) {
                return Err(GameError::DuplicateWord(word.clone()));
            }
        }
        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Largest selectable grid size this bank can fill, if any.
    pub fn max_grid_size(&self) -> Option<GridSize> {
        GridSize::ALL
            .into_iter()
            .rev()
            .find(|size| size.total_cells() <= self.len())
    }

    pub(crate) fn check_capacity(&self, side: Coord) -> Result<usize> {
        let needed = cell_count(side);
        if needed > self.len() {
            return Err(GameError::InsufficientWords {
                needed,
                available: self.len(),
            });
        }
        Ok(needed)
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|word| word.to_string()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for WordBank {
    type Error = GameError;

    fn try_from(words: Vec<String>) -> Result<Self> {
        Self::new(words)
    }
}

impl From<WordBank> for Vec<String> {
    fn from(bank: WordBank) -> Self {
        bank.words
    }
}

/// Everything a caller can tune before the first board is dealt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub size: GridSize,
    pub word_bank: WordBank,
    /// How long the line overlay stays up before the board unlocks.
    pub dismiss_delay_ms: u64,
}

impl GameConfig {
    pub const DEFAULT_DISMISS_DELAY_MS: u64 = 3000;

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|err| GameError::InvalidConfig(err.to_string()))
    }

    pub const fn dismiss_delay(&self) -> Duration {
        Duration::from_millis(self.dismiss_delay_ms)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: GridSize::default(),
            word_bank: WordBank::default(),
            dismiss_delay_ms: Self::DEFAULT_DISMISS_DELAY_MS,
        }
    }
}
