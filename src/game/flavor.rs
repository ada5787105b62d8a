//! Flavor text tables.
//!
//! The engine never prints; it attaches one of these lines to the events it
//! returns and the CLI decides what to do with them.

use crate::game::Dice;

/// Lines shown when the player springs a trap.
pub const TRAP_LINES: [&str; 3] = [
    "You walked into some spikes that sprung out of the floor.",
    "You stepped into a bear trap and got yourself injured.",
    "An arrow flew out of a nearby wall and hit you in your posterior. That will leave a scar!",
];

/// Lines shown when the player finds food.
pub const FOOD_LINES: [&str; 3] = [
    "You looked at the food and it was a well cooked chicken ... well at least it looked like one.",
    "It is a bread roll in this dungeon? Maybe there is a secret bakery around here.",
    "It is a rat as big as a rabbit. It will go down well with a bit of wasp juice.",
];

/// Lines shown when the player lands a blow in combat.
pub const HIT_LINES: [&str; 3] = [
    "You made an excellent jab that knocked the lights out of your enemy.",
    "Your speed is unmatched and delivered a Stone Cold Stunner.",
    "Your roundhouse kick sent your enemy flying right into a gutter.",
];

/// Lines shown when an enemy lands a blow on the player.
pub const GET_HIT_LINES: [&str; 3] = [
    "The enemy avoided your attack and gave you a nasty scratch.",
    "You were not prepared for a sudden lunging attack that hit you hard.",
    "The enemy threw a rock that hit you on the temple and shook you bad.",
];

/// Pick one line from a table uniformly at random.
#[must_use]
pub fn pick(lines: &[&'static str; 3], dice: &mut impl Dice) -> &'static str {
    lines[dice.roll(3) as usize]
}
