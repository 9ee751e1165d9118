use core::time::Duration;
use serde::{Deserialize, Serialize};

use crate::*;

/// Every input a renderer can feed the engine.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    SelectCell(Coord2),
    RequestSizeChange(u8),
    RequestClear,
    StartAgain,
    ConfirmDialog,
    DeclineDialog,
    TimerFired(TimerToken),
    Advance(Duration),
}

/// What an event did, so the renderer knows whether to redraw.
#[derive(Clone, Debug, PartialEq)]
pub enum Transition {
    Select(SelectOutcome),
    Dialog(DialogOutcome),
    Timer(TimerOutcome),
    Restarted,
}

impl Transition {
    pub const fn has_update(&self) -> bool {
        match self {
            Self::Select(outcome) => outcome.has_update(),
            Self::Dialog(outcome) => outcome.has_update(),
            Self::Timer(outcome) => outcome.has_update(),
            Self::Restarted => true,
        }
    }

    /// Whether this transition is the once-per-board full house.
    pub const fn is_celebration(&self) -> bool {
        matches!(self, Self::Select(SelectOutcome::FullHouse { .. }))
    }
}

impl<G: BoardGenerator> BingoEngine<G> {
    /// Only dealing a new board can fail, with [`GameError::InsufficientWords`].
    pub fn handle(&mut self, event: GameEvent) -> Result<Transition> {
        use GameEvent::*;

        log::trace!("event {event:?}");
        Ok(match event {
            SelectCell(coords) => Transition::Select(self.select_cell(coords)),
            RequestSizeChange(size) => Transition::Dialog(self.request_size_change(size)),
            RequestClear => Transition::Dialog(self.request_clear()),
            StartAgain => {
                self.start_again()?;
                Transition::Restarted
            }
            ConfirmDialog => Transition::Dialog(self.confirm_dialog()?),
            DeclineDialog => Transition::Dialog(self.decline_dialog()),
            TimerFired(token) => Transition::Timer(self.fire_timer(token)),
            Advance(elapsed) => Transition::Timer(self.advance(elapsed)),
        })
    }
}
