use alloc::collections::BTreeSet;
use core::time::Duration;
use serde::{Deserialize, Serialize};

use crate::*;

/// Celebration currently covering the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overlay {
    Hidden,
    Bingo,
    FullHouse,
}

impl Overlay {
    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

impl Default for Overlay {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SelectOutcome {
    NoChange,
    Selected,
    /// New lines completed; the board is locked until `timer` fires.
    Bingo {
        lines: BTreeSet<LineId>,
        timer: DismissTimer,
    },
    /// Every cell is marked. Fires once per board and is the cue for the
    /// celebration effect. `lines` were credited without a line overlay.
    FullHouse { lines: BTreeSet<LineId> },
}

impl SelectOutcome {
    pub const fn has_update(&self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Single-board bingo session: owns the layout, the marks and every overlay,
/// lock and dialog flag a renderer needs to draw it.
#[derive(Clone, Debug)]
pub struct BingoEngine<G = RandomBoardGenerator> {
    generator: G,
    word_bank: WordBank,
    dismiss_delay: Duration,
    size: GridSize,
    board: Board,
    board_id: u64,
    selection: SelectionMask,
    achieved_lines: BTreeSet<LineId>,
    locked: bool,
    overlay: Overlay,
    full_house_shown: bool,
    dialog: Option<DialogRequest>,
    clock: Duration,
    dismiss: DismissSchedule,
}

impl BingoEngine<RandomBoardGenerator> {
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(config, RandomBoardGenerator::new(seed))
    }
}

impl<G: BoardGenerator> BingoEngine<G> {
    pub fn new(config: GameConfig, mut generator: G) -> Result<Self> {
        let dismiss_delay = config.dismiss_delay();
        let GameConfig { size, word_bank, .. } = config;
        let board = generator.generate(size.get(), &word_bank)?;
        log::debug!("new {size} board");

        Ok(Self {
            generator,
            word_bank,
            dismiss_delay,
            size,
            board,
            board_id: 0,
            selection: SelectionMask::new(size.get()),
            achieved_lines: BTreeSet::new(),
            locked: false,
            overlay: Overlay::Hidden,
            full_house_shown: false,
            dialog: None,
            clock: Duration::ZERO,
            dismiss: DismissSchedule::default(),
        })
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Increments every time a new layout is dealt.
    pub fn board_id(&self) -> u64 {
        self.board_id
    }

    pub fn word_at(&self, coords: Coord2) -> Option<&str> {
        self.board.word_at(coords)
    }

    pub fn selection(&self) -> &SelectionMask {
        &self.selection
    }

    pub fn is_selected(&self, coords: Coord2) -> bool {
        self.selection.is_selected(coords)
    }

    /// Whether a click on `coords` would be accepted right now.
    pub fn can_select(&self, coords: Coord2) -> bool {
        !self.locked && self.selection.contains(coords) && !self.selection.is_selected(coords)
    }

    pub fn achieved_lines(&self) -> &BTreeSet<LineId> {
        &self.achieved_lines
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn full_house_shown(&self) -> bool {
        self.full_house_shown
    }

    pub fn dialog(&self) -> Option<DialogRequest> {
        self.dialog
    }

    pub fn pending_timer(&self) -> Option<DismissTimer> {
        self.dismiss.pending()
    }

    /// Logical time accumulated through [`Self::advance`].
    pub fn clock(&self) -> Duration {
        self.clock
    }

    pub fn word_bank(&self) -> &WordBank {
        &self.word_bank
    }

    /// Swaps the bank future boards are dealt from. The current board keeps its words.
    pub fn replace_word_bank(&mut self, word_bank: WordBank) {
        log::debug!("word bank replaced, {} words", word_bank.len());
        self.word_bank = word_bank;
    }

    pub fn select_cell(&mut self, coords: Coord2) -> SelectOutcome {
        if self.locked {
            log::trace!("{coords:?} ignored, board locked");
            return SelectOutcome::NoChange;
        }
        if !self.selection.select(coords) {
            log::trace!("{coords:?} ignored, out of range or already selected");
            return SelectOutcome::NoChange;
        }

        let report = self.selection.evaluate();
        let lines: BTreeSet<LineId> = report
            .lines
            .difference(&self.achieved_lines)
            .copied()
            .collect();
        self.achieved_lines.extend(lines.iter().copied());

        if report.full_house && !self.full_house_shown {
            log::debug!("full house on board {}", self.board_id);
            self.full_house_shown = true;
            self.overlay = Overlay::FullHouse;
            return SelectOutcome::FullHouse { lines };
        }

        if lines.is_empty() {
            return SelectOutcome::Selected;
        }

        self.locked = true;
        self.overlay = Overlay::Bingo;
        let timer = self.dismiss.schedule(self.clock, self.dismiss_delay);
        log::debug!("bingo {lines:?}, locked until {:?}", timer.deadline);
        SelectOutcome::Bingo { lines, timer }
    }

    /// Asks to deal a new board of `size`. Sizes outside 3..=6 are ignored.
    pub fn request_size_change(&mut self, size: u8) -> DialogOutcome {
        match GridSize::try_from(size) {
            Ok(size) => self.open_dialog(DialogRequest::ChangeSize(size)),
            Err(err) => {
                log::trace!("size change ignored: {err}");
                DialogOutcome::NoChange
            }
        }
    }

    pub fn request_clear(&mut self) -> DialogOutcome {
        self.open_dialog(DialogRequest::ClearBoard)
    }

    /// Carries out the pending request.
    ///
    /// The dialog closes even when dealing the new board fails, in which case
    /// the current board is left exactly as it was.
    pub fn confirm_dialog(&mut self) -> Result<DialogOutcome> {
        let Some(request) = self.dialog.take() else {
            return Ok(DialogOutcome::NoChange);
        };

        Ok(match request {
            DialogRequest::ChangeSize(size) => {
                self.regenerate(size)?;
                DialogOutcome::Regenerated(size)
            }
            DialogRequest::ClearBoard => {
                self.clear_selection();
                DialogOutcome::Cleared
            }
        })
    }

    pub fn decline_dialog(&mut self) -> DialogOutcome {
        match self.dialog.take() {
            Some(request) => {
                log::trace!("{request:?} declined");
                DialogOutcome::Declined
            }
            None => DialogOutcome::NoChange,
        }
    }

    /// Deals a fresh layout at the current size.
    pub fn start_again(&mut self) -> Result<()> {
        self.regenerate(self.size)
    }

    /// Moves the logical clock forward, firing the dismissal once it is due.
    pub fn advance(&mut self, elapsed: Duration) -> TimerOutcome {
        self.clock = self.clock.saturating_add(elapsed);
        match self.dismiss.take_due(self.clock) {
            Some(timer) => self.dismiss_line_overlay(timer),
            None => TimerOutcome::NoChange,
        }
    }

    /// Fires a dismissal scheduled by a host timer.
    pub fn fire_timer(&mut self, token: TimerToken) -> TimerOutcome {
        match self.dismiss.take_matching(token) {
            Some(timer) => self.dismiss_line_overlay(timer),
            None => {
                log::trace!("stale timer {token:?}");
                TimerOutcome::Stale
            }
        }
    }

    fn open_dialog(&mut self, request: DialogRequest) -> DialogOutcome {
        if let Some(previous) = self.dialog.replace(request) {
            log::trace!("{previous:?} replaced by {request:?}");
        }
        DialogOutcome::Opened(request)
    }

    fn dismiss_line_overlay(&mut self, timer: DismissTimer) -> TimerOutcome {
        log::debug!("dismiss timer {:?} fired", timer.token);
        self.locked = false;
        if self.overlay == Overlay::Bingo {
            self.overlay = Overlay::Hidden;
        }
        TimerOutcome::Dismissed
    }

    fn regenerate(&mut self, size: GridSize) -> Result<()> {
        let board = self
            .generator
            .generate(size.get(), &self.word_bank)
            .inspect_err(|err| log::warn!("could not deal {size} board: {err}"))?;

        self.board = board;
        self.board_id += 1;
        self.size = size;
        self.selection = SelectionMask::new(size.get());
        self.reset_progress();
        log::debug!("board {} dealt at {size}", self.board_id);
        Ok(())
    }

    fn clear_selection(&mut self) {
        self.selection.clear();
        self.reset_progress();
        log::debug!("board {} cleared", self.board_id);
    }

    fn reset_progress(&mut self) {
        self.achieved_lines.clear();
        self.locked = false;
        self.overlay = Overlay::Hidden;
        self.full_house_shown = false;
        self.dismiss.invalidate();
    }
}
