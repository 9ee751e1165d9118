use alloc::vec::Vec;
use rand::prelude::*;

use super::*;

/// Uniformly random layouts: every ordering of the chosen words is equally likely.
///
/// Runs the first `side * side` steps of a Fisher-Yates shuffle over the bank
/// indices, so only the cells that end up on the board are drawn.
#[derive(Clone, Debug)]
pub struct RandomBoardGenerator {
    rng: SmallRng,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(&mut self, side: Coord, bank: &WordBank) -> Result<Board> {
        let needed = bank.check_capacity(side)?;

        let mut order: Vec<usize> = (0..bank.len()).collect();
        for i in 0..needed {
            let pick = self.rng.random_range(i..order.len());
            order.swap(i, pick);
        }
        order.truncate(needed);

        log::trace!("dealt {side}x{side} board from {} words", bank.len());
        Ok(Board::from_order(side, bank, &order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    #[test]
    fn boards_hold_distinct_bank_words() {
        let bank = WordBank::default();
        let mut generator = RandomBoardGenerator::new(7);

        for side in 0..=5 {
            let board = generator.generate(side, &bank).unwrap();
            let words: BTreeSet<_> = board.words().collect();

            assert_eq!(board.size(), side);
            assert_eq!(words.len(), cell_count(side));
            assert!(words.iter().all(|word| bank.iter().any(|w| w == *word)));
        }
    }

    #[test]
    fn same_seed_same_board() {
        let bank = WordBank::default();
        let a = RandomBoardGenerator::new(42).generate(4, &bank).unwrap();
        let b = RandomBoardGenerator::new(42).generate(4, &bank).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn consecutive_boards_differ() {
        let bank = WordBank::default();
        let mut generator = RandomBoardGenerator::new(42);
        let a = generator.generate(5, &bank).unwrap();
        let b = generator.generate(5, &bank).unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn exact_fit_uses_whole_bank() {
        let bank = WordBank::new(["a", "b", "c", "d"]).unwrap();
        let board = RandomBoardGenerator::new(1).generate(2, &bank).unwrap();

        let words: BTreeSet<_> = board.words().collect();
        assert_eq!(words, BTreeSet::from(["a", "b", "c", "d"]));
    }

    #[test]
    fn first_cell_is_not_biased_towards_bank_order() {
        let bank = WordBank::new(["a", "b", "c", "d"]).unwrap();
        let mut generator = RandomBoardGenerator::new(3);
        let mut hits = [0u32; 4];

        for _ in 0..4000 {
            let board = generator.generate(1, &bank).unwrap();
            let word = board.word_at((0, 0)).unwrap();
            let index = bank.iter().position(|w| w == word).unwrap();
            hits[index] += 1;
        }

        // each word should land near 1000 times
        assert!(hits.iter().all(|&count| (800..1200).contains(&count)), "{hits:?}");
    }

    #[test]
    fn rejects_small_bank() {
        let bank = WordBank::default();
        assert_eq!(
            RandomBoardGenerator::new(0).generate(6, &bank),
            Err(GameError::InsufficientWords {
                needed: 36,
                available: 26,
            })
        );
    }
}
