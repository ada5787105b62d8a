//! Game engine for delve.
//!
//! Implements the dungeon rules:
//! - Bordered grid of cells (walls, pickups, traps, enemies, markers)
//! - Procedural generation with weighted cell seeding
//! - Player vitals (food, health) and survival rules
//! - Turn resolution (movement legality, cell effects)
//! - Round-based combat against enemy packs
//!
//! The engine performs no I/O. Randomness comes in through the [`Dice`]
//! capability; everything user-visible goes out as [`TurnEvent`]s.

mod combat;
mod dice;
pub mod flavor;
pub mod r#gen;
mod grid;
mod player;
mod state;
mod turn;

pub use combat::{ENEMY_HIT_PERCENT, PLAYER_HIT_PERCENT, resolve_combat};
pub use dice::{Dice, SeededDice, SequenceDice};
pub use r#gen::{DEFAULT_SIZE, MIN_SIZE, generate, place_in_column};
pub use grid::{Cell, Grid, Pos};
pub use player::{MAX_HEALTH, Player, START_FOOD};
pub use state::{Game, Outcome};
pub use turn::{Intent, TurnEvent, resolve_move, resolve_turn};
