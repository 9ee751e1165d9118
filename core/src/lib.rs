//! Board-state engine for a single-screen word bingo game.
//!
//! A [`BingoEngine`] deals a grid of words from a [`WordBank`], tracks which
//! cells the player marked, credits completed lines and the full house, and
//! keeps the lock, overlay and confirmation-dialog state a renderer draws from.
//! Renderers feed it [`GameEvent`]s and redraw from a [`GameSnapshot`].

#![no_std]

extern crate alloc;

pub use board::*;
pub use config::*;
pub use dialog::*;
pub use engine::*;
pub use error::*;
pub use event::*;
pub use generator::*;
pub use snapshot::*;
pub use timer::*;
pub use types::*;
pub use win::*;

mod board;
mod config;
mod dialog;
mod engine;
mod error;
mod event;
mod generator;
mod snapshot;
mod timer;
mod types;
mod win;
