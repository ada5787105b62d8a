//! Combat resolution.
//!
//! Combat is a sequence of discrete rounds against a pack of enemies. Each
//! round the player swings once, then every enemy still standing swings
//! back independently, so health can drop by more than one point per round.

use crate::game::{Dice, Player, TurnEvent, flavor};

/// Chance (percent) per round that the player fells one enemy.
pub const PLAYER_HIT_PERCENT: u32 = 30;

/// Chance (percent) per round that a single enemy lands a hit.
pub const ENEMY_HIT_PERCENT: u32 = 10;

/// Fight a pack of `enemies` to the end.
///
/// Rounds repeat until every enemy is felled or the player dies. Per round:
/// one 30% trial for the player's swing (success removes one enemy), then
/// one independent 10% trial for each enemy remaining *after* that swing
/// (each success costs the player one health). Events are appended in
/// order, ending with [`TurnEvent::CombatEnded`].
pub fn resolve_combat(
    player: &mut Player,
    enemies: u32,
    dice: &mut impl Dice,
    events: &mut Vec<TurnEvent>,
) {
    let mut remaining = enemies;

    while remaining > 0 && player.alive() {
        if dice.roll(100) < PLAYER_HIT_PERCENT {
            let line = flavor::pick(&flavor::HIT_LINES, dice);
            remaining -= 1;
            events.push(TurnEvent::EnemyFelled { line, remaining });
        }

        for _ in 0..remaining {
            if dice.roll(100) < ENEMY_HIT_PERCENT {
                let line = flavor::pick(&flavor::GET_HIT_LINES, dice);
                player.lose_health();
                events.push(TurnEvent::PlayerStruck {
                    line,
                    health: player.health(),
                });
            }
        }
    }

    events.push(TurnEvent::CombatEnded {
        survived: player.alive(),
    });
}
