use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Immutable grid of words, each cell an index into the bank it was dealt from.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    bank: WordBank,
    cells: Array2<usize>,
}

impl Board {
    /// Lays `order` out row-major; `order` must hold at least `side * side`
    /// distinct in-range bank indices.
    pub(crate) fn from_order(side: Coord, bank: &WordBank, order: &[usize]) -> Self {
        let n = usize::from(side);
        debug_assert!(order.len() >= n * n);
        debug_assert!(order.iter().all(|&index| index < bank.len()));
        Self {
            bank: bank.clone(),
            cells: Array2::from_shape_fn((n, n), |(row, col)| order[row * n + col]),
        }
    }

    pub fn size(&self) -> Coord {
        // boards are only ever built with a `Coord` side
        self.cells.nrows() as Coord
    }

    pub fn word_at(&self, coords: Coord2) -> Option<&str> {
        let index = self.cells.get(coords.to_nd_index())?;
        self.bank.get(*index)
    }

    /// Words in row-major order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().filter_map(|&index| self.bank.get(index))
    }
}

/// Which cells the player has marked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectionMask {
    cells: Array2<bool>,
}

impl SelectionMask {
    pub fn new(side: Coord) -> Self {
        let side = usize::from(side);
        Self {
            cells: Array2::default((side, side)),
        }
    }

    pub fn size(&self) -> Coord {
        self.cells.nrows() as Coord
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        self.cells.get(coords.to_nd_index()).is_some()
    }

    /// Out-of-range coordinates read as unselected.
    pub fn is_selected(&self, coords: Coord2) -> bool {
        self.cells
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or(false)
    }

    /// Marks a cell, returning whether anything changed.
    pub fn select(&mut self, coords: Coord2) -> bool {
        match self.cells.get_mut(coords.to_nd_index()) {
            Some(cell) if !*cell => {
                *cell = true;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn selected_count(&self) -> usize {
        self.cells.iter().filter(|&&selected| selected).count()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.is_empty() && self.cells.iter().all(|&selected| selected)
    }

    pub fn evaluate(&self) -> WinReport {
        evaluate(&self.cells, usize::from(self.size()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn board_lays_out_row_major() {
        let bank = WordBank::new(["a", "b", "c", "d", "e"]).unwrap();
        let board = Board::from_order(2, &bank, &[4, 0, 2, 1]);

        assert_eq!(board.size(), 2);
        assert_eq!(board.word_at((0, 0)), Some("e"));
        assert_eq!(board.word_at((0, 1)), Some("a"));
        assert_eq!(board.word_at((1, 0)), Some("c"));
        assert_eq!(board.word_at((1, 1)), Some("b"));
        assert_eq!(board.word_at((2, 0)), None);
        assert_eq!(board.words().collect::<Vec<_>>(), ["e", "a", "c", "b"]);
    }

    #[test]
    fn select_only_changes_unselected_in_range_cells() {
        let mut mask = SelectionMask::new(3);

        assert!(mask.select((1, 2)));
        assert!(!mask.select((1, 2)));
        assert!(!mask.select((3, 0)));
        assert!(mask.is_selected((1, 2)));
        assert!(!mask.is_selected((9, 9)));
        assert_eq!(mask.selected_count(), 1);
    }

    #[test]
    fn clear_resets_every_cell() {
        let mut mask = SelectionMask::new(2);
        for coords in iter_coords(2) {
            mask.select(coords);
        }
        assert!(mask.is_full());

        mask.clear();

        assert_eq!(mask.selected_count(), 0);
        assert!(!mask.is_full());
    }
}
