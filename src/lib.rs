// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Delve: a turn-based dungeon crawler engine.
//!
//! The library is the whole game minus its I/O: dungeon generation, the
//! per-turn state machine, and combat, all driven by an injected source of
//! randomness so any run can be replayed from a seed or scripted in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │        CLI (render, key input)      │
//! ├─────────────────────────────────────┤
//! │   Game session (grid + player)      │
//! ├─────────────────────────────────────┤
//! │  Turn engine / combat / generator   │
//! └─────────────────────────────────────┘
//! ```
//!
//! The CLI feeds one [`Intent`] per turn into [`Game::take_turn`] and
//! renders the returned [`TurnEvent`]s; the engine itself never prints.

pub mod game;

// Re-export key game types at crate root for convenience
pub use game::{
    Cell, Dice, Game, Grid, Intent, Outcome, Player, Pos, SeededDice, SequenceDice, TurnEvent,
};
