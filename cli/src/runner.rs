use std::io::Write;

use bingo_core::*;
use serde::Serialize;

use crate::script::Step;

/// One JSON line of output.
#[derive(Serialize, Debug)]
pub struct StepReport {
    pub step: String,
    pub redraw: bool,
    pub celebrate: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timer: Option<DismissTimer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub snapshot: GameSnapshot,
}

fn apply<G: BoardGenerator>(engine: &mut BingoEngine<G>, step: Step) -> Result<Transition> {
    match step {
        Step::Event(event) => engine.handle(event),
        Step::FirePending => match engine.pending_timer() {
            Some(timer) => engine.handle(GameEvent::TimerFired(timer.token)),
            None => Ok(Transition::Timer(TimerOutcome::NoChange)),
        },
    }
}

pub fn run_step<G: BoardGenerator>(engine: &mut BingoEngine<G>, step: Step) -> StepReport {
    let (redraw, celebrate, timer, error) = match apply(engine, step) {
        Ok(transition) => {
            let timer = match &transition {
                Transition::Select(SelectOutcome::Bingo { timer, .. }) => Some(*timer),
                _ => None,
            };
            (transition.has_update(), transition.is_celebration(), timer, None)
        }
        Err(err) => {
            log::warn!("{step}: {err}");
            (true, false, None, Some(err.to_string()))
        }
    };

    StepReport {
        step: step.to_string(),
        redraw,
        celebrate,
        timer,
        error,
        snapshot: GameSnapshot::from_engine(engine),
    }
}

/// Writes the starting snapshot, then one report per step.
pub fn run<G: BoardGenerator>(
    engine: &mut BingoEngine<G>,
    steps: &[Step],
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let start = StepReport {
        step: "start".into(),
        redraw: true,
        celebrate: false,
        timer: None,
        error: None,
        snapshot: GameSnapshot::from_engine(engine),
    };
    serde_json::to_writer(&mut *out, &start)?;
    writeln!(out)?;

    for &step in steps {
        let report = run_step(engine, step);
        serde_json::to_writer(&mut *out, &report)?;
        writeln!(out)?;
    }
    Ok(())
}
