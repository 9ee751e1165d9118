use alloc::collections::BTreeSet;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub word: String,
    pub selected: bool,
}

/// Everything a renderer needs to draw the current state, detached from the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub size: GridSize,
    pub board_id: u64,
    pub rows: Vec<Vec<CellView>>,
    pub locked: bool,
    pub overlay: Overlay,
    /// Whether any overlay covers the board.
    pub overlay_visible: bool,
    /// Every cell is marked.
    pub full: bool,
    pub dialog: Option<String>,
    pub achieved_lines: BTreeSet<LineId>,
}

impl GameSnapshot {
    pub fn from_engine<G: BoardGenerator>(engine: &BingoEngine<G>) -> Self {
        let side = engine.size().get();
        let rows = (0..side)
            .map(|row| {
                (0..side)
                    .map(|col| CellView {
                        word: engine.word_at((row, col)).unwrap_or_default().to_string(),
                        selected: engine.is_selected((row, col)),
                    })
                    .collect()
            })
            .collect();

        Self {
            size: engine.size(),
            board_id: engine.board_id(),
            rows,
            locked: engine.is_locked(),
            overlay: engine.overlay(),
            overlay_visible: engine.overlay().is_visible(),
            full: engine.selection().is_full(),
            dialog: engine.dialog().map(|request| request.message().to_string()),
            achieved_lines: engine.achieved_lines().clone(),
        }
    }

    pub fn selected_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| cell.selected)
            .count()
    }
}
