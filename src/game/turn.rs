//! Turn resolution.
//!
//! One turn runs intent → destination validation → cell effect → food loss.
//! The engine mutates the grid and player in place and reports what
//! happened as an ordered list of [`TurnEvent`]s; rendering those events is
//! the caller's business.

use crate::game::{Cell, Dice, Grid, Player, Pos, combat, flavor};

/// Smallest number of days a food pickup is worth.
const FOOD_MIN_DAYS: u32 = 4;

/// Spread of the food pickup draw; the result lands in `[4, 8]`.
const FOOD_SPREAD: u32 = 5;

/// Smallest pack of enemies an ambush can hold.
const ENEMY_MIN_COUNT: u32 = 2;

/// Spread of the enemy count draw; the result lands in `[2, 4]`.
const ENEMY_SPREAD: u32 = 3;

/// A directional intent for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Move one cell up (toward row 0).
    Up,
    /// Move one cell down.
    Down,
    /// Move one cell left.
    Left,
    /// Move one cell right.
    Right,
    /// Give up and end the game in a loss.
    Forfeit,
}

impl Intent {
    /// Parse a move character, case-insensitively.
    ///
    /// Returns `None` for anything outside {U, D, L, R, X}; the turn engine
    /// treats that as a wasted turn.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'U' => Some(Intent::Up),
            'D' => Some(Intent::Down),
            'L' => Some(Intent::Left),
            'R' => Some(Intent::Right),
            'X' => Some(Intent::Forfeit),
            _ => None,
        }
    }

    /// The cell one step in this direction from `pos`.
    ///
    /// Steps off the top or left edge saturate to the border row/column,
    /// which the turn engine rejects anyway. `Forfeit` stays put.
    #[must_use]
    pub const fn destination_from(self, pos: Pos) -> Pos {
        match self {
            Intent::Up => Pos::new(pos.x, pos.y.saturating_sub(1)),
            Intent::Down => Pos::new(pos.x, pos.y.saturating_add(1)),
            Intent::Left => Pos::new(pos.x.saturating_sub(1), pos.y),
            Intent::Right => Pos::new(pos.x.saturating_add(1), pos.y),
            Intent::Forfeit => pos,
        }
    }
}

/// Something that happened during a turn, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    /// Unrecognized input; the turn was consumed with no move.
    Wasted,
    /// The player gave up.
    Forfeited,
    /// The destination was on the outer border; move rejected.
    EdgeOfRoom,
    /// The destination was a wall; move cancelled.
    BlockedByWall,
    /// Stepped onto open floor.
    SteppedOnEmpty,
    /// Stepped onto the exit cell.
    ReachedExit,
    /// Picked up health. Carries health after the gain.
    HealthFound {
        /// Health after the pickup.
        health: u32,
    },
    /// Sprung a trap.
    TrapSprung {
        /// Flavor line describing the trap.
        line: &'static str,
        /// Health after the hit.
        health: u32,
    },
    /// Found food.
    FoodFound {
        /// Flavor line describing the find.
        line: &'static str,
        /// Days of food gained, in `[4, 8]`.
        days: u32,
    },
    /// Walked into an ambush; combat begins.
    CombatStarted {
        /// Number of enemies, in `[2, 4]`.
        enemies: u32,
    },
    /// The player felled one enemy.
    EnemyFelled {
        /// Flavor line describing the blow.
        line: &'static str,
        /// Enemies still standing.
        remaining: u32,
    },
    /// An enemy struck the player.
    PlayerStruck {
        /// Flavor line describing the blow.
        line: &'static str,
        /// Health after the hit.
        health: u32,
    },
    /// Combat is over.
    CombatEnded {
        /// Whether the player walked away.
        survived: bool,
    },
}

/// Resolve one full turn.
///
/// `intent` is `None` when the input was unrecognized: the turn is wasted
/// but still costs food. Forfeit kills the player outright. A directional
/// intent is validated against the border and then handed to
/// [`resolve_move`]. Food is spent unconditionally at the end of every
/// turn, whatever happened before.
pub fn resolve_turn(
    grid: &mut Grid,
    player: &mut Player,
    intent: Option<Intent>,
    dice: &mut impl Dice,
) -> Vec<TurnEvent> {
    let mut events = Vec::new();
    let mut destination = player.pos();

    match intent {
        None => events.push(TurnEvent::Wasted),
        Some(Intent::Forfeit) => {
            player.forfeit();
            events.push(TurnEvent::Forfeited);
        }
        Some(direction) => destination = direction.destination_from(player.pos()),
    }

    if grid.is_border(destination) {
        events.push(TurnEvent::EdgeOfRoom);
    } else if player.alive() && destination != player.pos() {
        resolve_move(grid, player, destination, dice, &mut events);
    }

    player.lose_food();
    events
}

/// Resolve a move onto a validated interior destination.
///
/// Branches on the destination cell: walls cancel the move, pickups and
/// traps adjust vitals, an enemy cell starts combat. If the move proceeds
/// the old cell is cleared; the player marker is rewritten only while the
/// player lives, so a player slain in combat vanishes from the grid.
pub fn resolve_move(
    grid: &mut Grid,
    player: &mut Player,
    destination: Pos,
    dice: &mut impl Dice,
    events: &mut Vec<TurnEvent>,
) {
    let mut moved = true;

    match grid.get(destination) {
        Cell::Empty | Cell::Player => events.push(TurnEvent::SteppedOnEmpty),
        Cell::Exit => events.push(TurnEvent::ReachedExit),
        Cell::Wall => {
            moved = false;
            events.push(TurnEvent::BlockedByWall);
        }
        Cell::Health => {
            player.gain_health();
            events.push(TurnEvent::HealthFound {
                health: player.health(),
            });
        }
        Cell::Trap => {
            let line = flavor::pick(&flavor::TRAP_LINES, dice);
            player.lose_health();
            events.push(TurnEvent::TrapSprung {
                line,
                health: player.health(),
            });
        }
        Cell::Food => {
            let days = FOOD_MIN_DAYS + dice.roll(FOOD_SPREAD);
            player.gain_food(days);
            let line = flavor::pick(&flavor::FOOD_LINES, dice);
            events.push(TurnEvent::FoodFound { line, days });
        }
        Cell::Enemy => {
            let enemies = ENEMY_MIN_COUNT + dice.roll(ENEMY_SPREAD);
            events.push(TurnEvent::CombatStarted { enemies });
            combat::resolve_combat(player, enemies, dice, events);
        }
    }

    if moved {
        grid.set(player.pos(), Cell::Empty);
        if player.alive() {
            grid.set(destination, Cell::Player);
            player.move_to(destination);
        }
    }
}
