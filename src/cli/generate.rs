//! Generate command implementation: emit one dungeon without playing.

use super::{CliError, OutputFormat, normalize_dimensions, seed_from_time};
use delve::game::{SeededDice, generate};
use serde::Serialize;

/// JSON shape for a generated dungeon.
#[derive(Debug, Serialize)]
struct JsonDungeon {
    /// Seed the dungeon was generated from.
    seed: u64,
    /// Grid width in cells.
    width: u16,
    /// Grid height in cells.
    height: u16,
    /// Player start position as `[x, y]`.
    start: [u16; 2],
    /// Exit position as `[x, y]`.
    exit: [u16; 2],
    /// One string of cell symbols per row.
    rows: Vec<String>,
}

/// Execute the generate command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn execute(
    width: u16,
    height: u16,
    seed: Option<u64>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let (width, height) = normalize_dimensions(width, height);
    let seed = seed.unwrap_or_else(seed_from_time);
    let mut dice = SeededDice::new(seed);
    let (grid, start, exit) = generate(width, height, &mut dice);

    match format {
        OutputFormat::Text => {
            print!("{grid}");
            println!("seed: {seed}");
            println!("start: ({}, {})", start.x, start.y);
            println!("exit: ({}, {})", exit.x, exit.y);
        }
        OutputFormat::Json => {
            let rows = grid
                .to_string()
                .lines()
                .map(str::to_owned)
                .collect();
            let dungeon = JsonDungeon {
                seed,
                width,
                height,
                start: [start.x, start.y],
                exit: [exit.x, exit.y],
                rows,
            };
            let json = serde_json::to_string_pretty(&dungeon)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}
