use alloc::vec::Vec;

use super::*;

/// Deals words in bank order, giving the same layout every time.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SequentialBoardGenerator;

impl BoardGenerator for SequentialBoardGenerator {
    fn generate(&mut self, side: Coord, bank: &WordBank) -> Result<Board> {
        let needed = bank.check_capacity(side)?;
        let order: Vec<usize> = (0..needed).collect();
        Ok(Board::from_order(side, bank, &order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deals_first_words_in_order() {
        let board = SequentialBoardGenerator
            .generate(3, &WordBank::default())
            .unwrap();

        assert_eq!(board.word_at((0, 0)), Some("Apple"));
        assert_eq!(board.word_at((0, 2)), Some("Carrot"));
        assert_eq!(board.word_at((2, 2)), Some("Igloo"));
    }

    #[test]
    fn rejects_small_bank() {
        let bank = WordBank::new(["a", "b", "c"]).unwrap();
        assert_eq!(
            SequentialBoardGenerator.generate(2, &bank),
            Err(GameError::InsufficientWords {
                needed: 4,
                available: 3,
            })
        );
    }
}
