//! Game session state.

use crate::game::{Cell, Dice, Grid, Intent, Player, Pos, TurnEvent, r#gen, turn};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player reached the exit.
    Escaped,
    /// The player died (starvation, combat, traps, or forfeit).
    Died,
}

/// A running game: the grid, the player, and the exit location.
///
/// The session owns all mutable state for the run and hands exclusive
/// references into the turn engine each turn. The exit is tracked by
/// position because the player marker overwrites the exit symbol on
/// arrival.
#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    player: Player,
    exit: Pos,
    turn: u32,
}

impl Game {
    /// Generate a fresh dungeon and drop the player at its start cell.
    ///
    /// `width` and `height` must already be normalized to at least
    /// [`gen::MIN_SIZE`].
    #[must_use]
    pub fn new(width: u16, height: u16, dice: &mut impl Dice) -> Self {
        let (grid, start, exit) = r#gen::generate(width, height, dice);
        Self {
            grid,
            player: Player::new(start),
            exit,
            turn: 0,
        }
    }

    /// Build a session from a hand-made grid.
    ///
    /// Stamps the player and exit markers onto the grid, enforcing the
    /// one-marker-each invariant regardless of what the caller drew.
    #[must_use]
    pub fn from_parts(mut grid: Grid, start: Pos, exit: Pos) -> Self {
        grid.set(start, Cell::Player);
        grid.set(exit, Cell::Exit);
        Self {
            grid,
            player: Player::new(start),
            exit,
            turn: 0,
        }
    }

    /// The grid as it currently stands.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Where the exit is.
    #[must_use]
    pub const fn exit(&self) -> Pos {
        self.exit
    }

    /// Turns taken so far.
    #[must_use]
    pub const fn turn(&self) -> u32 {
        self.turn
    }

    /// How the game ended, or `None` while it is still running.
    ///
    /// Standing on the exit wins even on the turn the last food was spent;
    /// the arrival check comes first.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if self.player.is_at(self.exit) {
            Some(Outcome::Escaped)
        } else if self.player.alive() {
            None
        } else {
            Some(Outcome::Died)
        }
    }

    /// Whether the game has reached a terminal state.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Play one turn. A finished game ignores further input.
    pub fn take_turn(&mut self, intent: Option<Intent>, dice: &mut impl Dice) -> Vec<TurnEvent> {
        if self.is_over() {
            return Vec::new();
        }
        let events = turn::resolve_turn(&mut self.grid, &mut self.player, intent, dice);
        self.turn += 1;
        events
    }
}
