use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, bail};
use bingo_core::{Coord, GameEvent};

/// One scripted renderer input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Step {
    Event(GameEvent),
    /// Hand back the pending dismissal token, as a host timer callback would.
    FirePending,
}

fn parse_coord(text: &str) -> anyhow::Result<Coord> {
    text.trim()
        .parse()
        .with_context(|| format!("bad coordinate {text:?}"))
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        use GameEvent::*;

        let (verb, arg) = match s.split_once(':') {
            Some((verb, arg)) => (verb, Some(arg)),
            None => (s, None),
        };

        let event = match (verb, arg) {
            ("select", Some(arg)) => {
                let (row, col) = arg
                    .split_once(',')
                    .with_context(|| format!("expected select:ROW,COL, got {s:?}"))?;
                SelectCell((parse_coord(row)?, parse_coord(col)?))
            }
            ("size", Some(arg)) => RequestSizeChange(
                arg.trim()
                    .parse()
                    .with_context(|| format!("bad size {arg:?}"))?,
            ),
            ("clear", None) => RequestClear,
            ("yes" | "confirm", None) => ConfirmDialog,
            ("no" | "decline", None) => DeclineDialog,
            ("again", None) => StartAgain,
            ("wait", Some(ms)) => Advance(Duration::from_millis(
                ms.trim()
                    .parse()
                    .with_context(|| format!("bad wait {ms:?}"))?,
            )),
            ("fire", None) => return Ok(Self::FirePending),
            _ => bail!("unrecognised step {s:?}"),
        };
        Ok(Self::Event(event))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use GameEvent::*;

        match self {
            Self::FirePending => f.write_str("fire"),
            Self::Event(SelectCell((row, col))) => write!(f, "select:{row},{col}"),
            Self::Event(RequestSizeChange(size)) => write!(f, "size:{size}"),
            Self::Event(RequestClear) => f.write_str("clear"),
            Self::Event(ConfirmDialog) => f.write_str("yes"),
            Self::Event(DeclineDialog) => f.write_str("no"),
            Self::Event(StartAgain) => f.write_str("again"),
            Self::Event(Advance(elapsed)) => write!(f, "wait:{}", elapsed.as_millis()),
            Self::Event(TimerFired(token)) => write!(f, "timer:{}", token.get()),
        }
    }
}
