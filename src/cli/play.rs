//! Play command implementation: the interactive game loop.

use super::{CliError, normalize_dimensions, seed_from_time};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use delve::game::{Game, Intent, Outcome, SeededDice, TurnEvent};
use std::io::{self, Write as _};

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the terminal cannot be read.
pub(crate) fn execute(
    width: Option<u16>,
    height: Option<u16>,
    seed: Option<u64>,
) -> Result<(), CliError> {
    let (width, height) = match (width, height) {
        (Some(w), Some(h)) => (w, h),
        _ => prompt_dimensions()?,
    };
    let (width, height) = {
        let normalized = normalize_dimensions(width, height);
        if normalized != (width, height) {
            println!("Invalid values. Declaring the default 16 x 16 dungeon");
        }
        normalized
    };

    let seed = seed.unwrap_or_else(seed_from_time);
    let mut dice = SeededDice::new(seed);
    let mut game = Game::new(width, height, &mut dice);

    println!("After being captured by a raid of some robbers on your caravan,");
    println!("you find yourself alone in a dark dungeon. With nothing but your");
    println!("wits, you choose to take a step...");
    println!();
    print!("{}", game.grid());

    while !game.is_over() {
        println!(
            "You have {} health and food for {} days.",
            game.player().health(),
            game.player().food()
        );
        println!("In which direction do you want to move?");
        println!("(U,D,L,R; Press X if you want to give up and die.)");

        let key = read_key()?;
        let intent = Intent::from_char(key);
        let events = game.take_turn(intent, &mut dice);
        for event in events {
            describe(event);
        }
        println!();
        print!("{}", game.grid());
    }

    match game.outcome() {
        Some(Outcome::Escaped) => {
            println!("***********************************************************");
            println!("*********   You found the exit... You are free!   *********");
            println!("***********************************************************");
        }
        _ => {
            println!("*************************************************");
            println!("*****************   You Died!   *****************");
            println!("*************************************************");
        }
    }

    Ok(())
}

/// Ask the user for dungeon dimensions on stdin.
///
/// Unparseable input comes back as zero, which the caller normalizes to
/// the default dungeon.
fn prompt_dimensions() -> Result<(u16, u16), CliError> {
    println!("Enter the width and height of the dungeon you want to play in:");
    let width = prompt_number("Width: ")?;
    let height = prompt_number("Height: ")?;
    Ok((width, height))
}

/// Read one number from stdin, zero on anything unparseable.
fn prompt_number(label: &str) -> Result<u16, CliError> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().parse().unwrap_or(0))
}

/// Block for a single key press.
///
/// Raw mode is only held while waiting so the rest of the output behaves
/// like a normal line-based terminal. Ctrl-C maps to forfeit.
fn read_key() -> Result<char, CliError> {
    terminal::enable_raw_mode()?;
    let key = loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break 'x',
                KeyCode::Char(c) => break c,
                KeyCode::Esc => break 'x',
                _ => {}
            }
        }
    };
    terminal::disable_raw_mode()?;
    Ok(key)
}

/// Print the narration for one turn event.
fn describe(event: TurnEvent) {
    match event {
        TurnEvent::Wasted => println!("Incorrect move. You just wasted a turn."),
        TurnEvent::Forfeited => println!("You give up and sit down in the dark."),
        TurnEvent::EdgeOfRoom => println!("You are at the edge of the room"),
        TurnEvent::BlockedByWall => println!("There is a wall there, you cannot move."),
        TurnEvent::SteppedOnEmpty => println!("There is nothing here."),
        TurnEvent::ReachedExit => {}
        TurnEvent::HealthFound { health } => {
            println!("You found some health.");
            println!("Your current health is: {health}");
        }
        TurnEvent::TrapSprung { line, health } => {
            println!("{line}");
            println!("Your current health is: {health}");
        }
        TurnEvent::FoodFound { line, days } => {
            println!("You found some food that will last you for {days} more days.");
            println!("{line}");
        }
        TurnEvent::CombatStarted { enemies } => {
            println!("You came across {enemies} enemies. You will have to fight.");
            println!("*************************************************");
            println!("**************   Start of Combat   **************");
            println!("*************************************************");
            println!();
        }
        TurnEvent::EnemyFelled { line, .. } => {
            println!("{line}");
            println!("^_^ You killed one enemy!");
        }
        TurnEvent::PlayerStruck { line, .. } => {
            println!("{line}");
            println!("x_x You lost 1 health");
        }
        TurnEvent::CombatEnded { .. } => {
            println!();
            println!("*************************************************");
            println!("***************   end of Combat   ***************");
            println!("*************************************************");
            println!();
        }
    }
}
