use alloc::collections::BTreeSet;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// A row, column or diagonal of the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LineId {
    Row(Coord),
    Col(Coord),
    DiagMain,
    DiagAnti,
}

impl core::fmt::Display for LineId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Row(row) => write!(f, "row-{row}"),
            Self::Col(col) => write!(f, "col-{col}"),
            Self::DiagMain => f.write_str("diag-main"),
            Self::DiagAnti => f.write_str("diag-anti"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinReport {
    pub lines: BTreeSet<LineId>,
    pub full_house: bool,
}

/// Finds every satisfied line of a `size` x `size` selection mask.
///
/// Cells missing from `mask` (it may be smaller than `size`, or empty) count as
/// unselected. An empty grid satisfies nothing. The full house needs every cell
/// of `mask` selected, including any lying outside the `size` x `size` window.
pub fn evaluate(mask: &Array2<bool>, size: usize) -> WinReport {
    let mut report = WinReport::default();
    if size == 0 {
        return report;
    }

    let at = |row: usize, col: usize| mask.get((row, col)).copied().unwrap_or(false);
    // line ids are `Coord`-indexed, anything past that cannot be a board
    let size = size.min(usize::from(Coord::MAX) + 1);

    for row in 0..size {
        if (0..size).all(|col| at(row, col)) {
            report.lines.insert(LineId::Row(row as Coord));
        }
    }

    for col in 0..size {
        if (0..size).all(|row| at(row, col)) {
            report.lines.insert(LineId::Col(col as Coord));
        }
    }

    if (0..size).all(|i| at(i, i)) {
        report.lines.insert(LineId::DiagMain);
    }
    if (0..size).all(|i| at(i, size - 1 - i)) {
        report.lines.insert(LineId::DiagAnti);
    }

    report.full_house = (0..size).all(|row| (0..size).all(|col| at(row, col)))
        && mask.iter().all(|&selected| selected);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    fn mask_from(rows: &[&[bool]]) -> Array2<bool> {
        let n = rows.len();
        Array2::from_shape_fn((n, n), |(row, col)| rows[row][col])
    }

    #[test]
    fn all_true_mask_satisfies_everything() {
        let report = evaluate(&Array2::from_elem((4, 4), true), 4);

        let expected: BTreeSet<_> = (0..4)
            .flat_map(|i| [LineId::Row(i), LineId::Col(i)])
            .chain([LineId::DiagMain, LineId::DiagAnti])
            .collect();
        assert_eq!(report.lines, expected);
        assert_eq!(report.lines.len(), 10);
        assert!(report.full_house);
    }

    #[test]
    fn all_false_mask_satisfies_nothing() {
        let report = evaluate(&Array2::from_elem((3, 3), false), 3);

        assert!(report.lines.is_empty());
        assert!(!report.full_house);
    }

    #[test]
    fn detects_rows_columns_and_diagonals() {
        let t = true;
        let f = false;

        let row = evaluate(&mask_from(&[&[f, f, f], &[t, t, t], &[f, t, f]]), 3);
        assert_eq!(row.lines.into_iter().collect::<Vec<_>>(), [LineId::Row(1)]);

        let col = evaluate(&mask_from(&[&[f, f, t], &[f, f, t], &[t, f, t]]), 3);
        assert_eq!(col.lines.into_iter().collect::<Vec<_>>(), [LineId::Col(2)]);

        let diag = evaluate(&mask_from(&[&[t, f, t], &[f, t, f], &[t, f, t]]), 3);
        assert_eq!(
            diag.lines.into_iter().collect::<Vec<_>>(),
            [LineId::DiagMain, LineId::DiagAnti]
        );
    }

    #[test]
    fn missing_cells_count_as_unselected() {
        let report = evaluate(&Array2::from_elem((2, 3), true), 3);

        assert_eq!(
            report.lines.into_iter().collect::<Vec<_>>(),
            [LineId::Row(0), LineId::Row(1)]
        );
        assert!(!report.full_house);

        let empty = evaluate(&Array2::from_elem((0, 0), true), 3);
        assert_eq!(empty, WinReport::default());
    }

    #[test]
    fn full_house_needs_cells_outside_the_window() {
        let mask = Array2::from_shape_fn((4, 4), |(row, col)| row < 3 && col < 3);

        let report = evaluate(&mask, 3);

        assert_eq!(report.lines.len(), 8);
        assert!(!report.full_house);
        assert!(evaluate(&Array2::from_elem((4, 4), true), 3).full_house);
    }

    #[test]
    fn zero_size_yields_nothing() {
        assert_eq!(evaluate(&Array2::from_elem((0, 0), false), 0), WinReport::default());
    }

    #[test]
    fn line_ids_display_as_dashed_names() {
        assert_eq!(LineId::Row(0).to_string(), "row-0");
        assert_eq!(LineId::Col(3).to_string(), "col-3");
        assert_eq!(LineId::DiagMain.to_string(), "diag-main");
        assert_eq!(LineId::DiagAnti.to_string(), "diag-anti");
    }
}
