use serde::{Deserialize, Serialize};

use crate::*;

/// A destructive action waiting for the player to confirm it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogRequest {
    ChangeSize(GridSize),
    ClearBoard,
}

impl DialogRequest {
    pub const fn message(self) -> &'static str {
        match self {
            Self::ChangeSize(_) => "Do you want to generate a new board with the selected size?",
            Self::ClearBoard => "Do you want to clear the board? All selections will be lost.",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DialogOutcome {
    /// Request ignored, or there was no dialog to answer.
    NoChange,
    Opened(DialogRequest),
    Declined,
    /// A fresh board was dealt at the given size.
    Regenerated(GridSize),
    Cleared,
}

impl DialogOutcome {
    pub const fn has_update(self) -> bool {
        use DialogOutcome::*;
        match self {
            NoChange => false,
            Opened(_) => true,
            Declined => true,
            Regenerated(_) => true,
            Cleared => true,
        }
    }
}
