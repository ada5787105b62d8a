//! Player vitals and survival rules.

use crate::game::Pos;

/// Food the player starts with, in days.
pub const START_FOOD: u32 = 64;

/// Health the player starts with; also the hard cap.
pub const MAX_HEALTH: u32 = 10;

/// The player character.
///
/// Vitals only change through the methods here, so the floor, cap, and
/// death invariants hold everywhere: food and health never go below 0,
/// health never exceeds [`MAX_HEALTH`], and `alive` flips to false exactly
/// when a vital first reaches 0 (or on forfeit) and never flips back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pos: Pos,
    food: u32,
    health: u32,
    alive: bool,
}

impl Player {
    /// Create a player at the given position with full vitals.
    #[must_use]
    pub const fn new(pos: Pos) -> Self {
        Self {
            pos,
            food: START_FOOD,
            health: MAX_HEALTH,
            alive: true,
        }
    }

    /// Current position.
    #[must_use]
    pub const fn pos(&self) -> Pos {
        self.pos
    }

    /// Remaining food, in days.
    #[must_use]
    pub const fn food(&self) -> u32 {
        self.food
    }

    /// Current health.
    #[must_use]
    pub const fn health(&self) -> u32 {
        self.health
    }

    /// Whether the player is still alive.
    #[must_use]
    pub const fn alive(&self) -> bool {
        self.alive
    }

    /// Check whether the player stands at `pos`.
    #[must_use]
    pub fn is_at(&self, pos: Pos) -> bool {
        self.pos == pos
    }

    /// Spend one day of food. Starving to 0 kills the player.
    pub fn lose_food(&mut self) {
        self.food = self.food.saturating_sub(1);
        if self.food == 0 {
            self.alive = false;
        }
    }

    /// Take one point of damage. Dropping to 0 health kills the player.
    pub fn lose_health(&mut self) {
        self.health = self.health.saturating_sub(1);
        if self.health == 0 {
            self.alive = false;
        }
    }

    /// Recover one point of health, capped at [`MAX_HEALTH`].
    ///
    /// Healing never resurrects: the alive flag is untouched.
    pub fn gain_health(&mut self) {
        if self.health < MAX_HEALTH {
            self.health += 1;
        }
    }

    /// Add `days` of food.
    pub fn gain_food(&mut self, days: u32) {
        self.food = self.food.saturating_add(days);
    }

    /// Give up. The game ends in a loss.
    pub fn forfeit(&mut self) {
        self.alive = false;
    }

    /// Update the stored position after a resolved move.
    pub fn move_to(&mut self, pos: Pos) {
        self.pos = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player() {
        let player = Player::new(Pos::new(1, 3));
        assert_eq!(player.pos(), Pos::new(1, 3));
        assert_eq!(player.food(), START_FOOD);
        assert_eq!(player.health(), MAX_HEALTH);
        assert!(player.alive());
        assert!(player.is_at(Pos::new(1, 3)));
    }

    #[test]
    fn test_starvation() {
        let mut player = Player::new(Pos::new(1, 1));
        for _ in 0..START_FOOD - 1 {
            player.lose_food();
        }
        assert_eq!(player.food(), 1);
        assert!(player.alive());

        player.lose_food();
        assert_eq!(player.food(), 0);
        assert!(!player.alive());

        // Floor at zero even when already dead.
        player.lose_food();
        assert_eq!(player.food(), 0);
    }

    #[test]
    fn test_health_floor_and_death() {
        let mut player = Player::new(Pos::new(1, 1));
        for _ in 0..MAX_HEALTH - 1 {
            player.lose_health();
        }
        assert_eq!(player.health(), 1);
        assert!(player.alive());

        player.lose_health();
        assert_eq!(player.health(), 0);
        assert!(!player.alive());

        player.lose_health();
        assert_eq!(player.health(), 0);
    }

    #[test]
    fn test_health_cap() {
        let mut player = Player::new(Pos::new(1, 1));
        player.gain_health();
        assert_eq!(player.health(), MAX_HEALTH);

        player.lose_health();
        player.gain_health();
        player.gain_health();
        assert_eq!(player.health(), MAX_HEALTH);
    }

    #[test]
    fn test_healing_never_resurrects() {
        let mut player = Player::new(Pos::new(1, 1));
        for _ in 0..MAX_HEALTH {
            player.lose_health();
        }
        assert!(!player.alive());

        player.gain_health();
        assert_eq!(player.health(), 1);
        assert!(!player.alive());
    }

    #[test]
    fn test_gain_food() {
        let mut player = Player::new(Pos::new(1, 1));
        player.gain_food(8);
        assert_eq!(player.food(), START_FOOD + 8);
    }

    #[test]
    fn test_forfeit() {
        let mut player = Player::new(Pos::new(1, 1));
        player.forfeit();
        assert!(!player.alive());
        assert_eq!(player.food(), START_FOOD);
        assert_eq!(player.health(), MAX_HEALTH);
    }

    #[test]
    fn test_move_to() {
        let mut player = Player::new(Pos::new(1, 1));
        player.move_to(Pos::new(2, 1));
        assert!(player.is_at(Pos::new(2, 1)));
        assert!(!player.is_at(Pos::new(1, 1)));
    }
}
