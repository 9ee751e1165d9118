use core::time::Duration;
use serde::{Deserialize, Serialize};

/// Identifies one scheduled overlay dismissal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimerToken(u64);

impl TimerToken {
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// One-shot dismissal of the line overlay.
///
/// Hosts with a real event loop schedule a callback after [`DismissTimer::delay`]
/// and hand the token back through `BingoEngine::fire_timer`. Hosts that only
/// know elapsed time call `BingoEngine::advance` instead, which fires once the
/// engine clock reaches [`DismissTimer::deadline`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DismissTimer {
    pub token: TimerToken,
    pub delay: Duration,
    pub deadline: Duration,
}

impl DismissTimer {
    pub fn is_due(&self, now: Duration) -> bool {
        now >= self.deadline
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TimerOutcome {
    /// Nothing was pending, or the pending timer is not due yet.
    NoChange,
    /// The token belongs to a timer that was superseded or already fired.
    Stale,
    /// The line overlay was hidden and the board unlocked.
    Dismissed,
}

impl TimerOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Stale => false,
            Self::Dismissed => true,
        }
    }
}

/// Hands out tokens and tracks the single pending dismissal.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct DismissSchedule {
    next_token: u64,
    pending: Option<DismissTimer>,
}

impl DismissSchedule {
    pub(crate) fn schedule(&mut self, now: Duration, delay: Duration) -> DismissTimer {
        let timer = DismissTimer {
            token: TimerToken(self.next_token),
            delay,
            deadline: now.saturating_add(delay),
        };
        self.next_token += 1;
        if let Some(superseded) = self.pending.replace(timer) {
            log::trace!("dismiss timer {:?} superseded", superseded.token);
        }
        timer
    }

    pub(crate) fn pending(&self) -> Option<DismissTimer> {
        self.pending
    }

    /// Drops the pending timer so its token can no longer fire.
    pub(crate) fn invalidate(&mut self) {
        if let Some(timer) = self.pending.take() {
            log::debug!("dismiss timer {:?} invalidated", timer.token);
        }
    }

    /// Takes the pending timer if `token` is the one currently scheduled.
    pub(crate) fn take_matching(&mut self, token: TimerToken) -> Option<DismissTimer> {
        self.pending.take_if(|timer| timer.token == token)
    }

    /// Takes the pending timer if it is due at `now`.
    pub(crate) fn take_due(&mut self, now: Duration) -> Option<DismissTimer> {
        self.pending.take_if(|timer| timer.is_due(now))
    }
}
