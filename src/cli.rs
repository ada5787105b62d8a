//! CLI command implementations for delve.

pub(crate) mod generate;
pub(crate) mod play;

use clap::ValueEnum;
use delve::game::{DEFAULT_SIZE, MIN_SIZE};
use std::error::Error;
use std::fmt;

/// Output format for the `generate` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

/// Clamp requested dimensions to something the generator accepts.
///
/// Anything below the 8-cell minimum falls back to the default 16x16
/// dungeon, both axes at once.
pub(crate) fn normalize_dimensions(width: u16, height: u16) -> (u16, u16) {
    if width < MIN_SIZE || height < MIN_SIZE {
        (DEFAULT_SIZE, DEFAULT_SIZE)
    } else {
        (width, height)
    }
}

/// Seed to use when the user did not supply one.
pub(crate) fn seed_from_time() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
        .unwrap_or(42)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_accepts_valid() {
        assert_eq!(normalize_dimensions(8, 8), (8, 8));
        assert_eq!(normalize_dimensions(20, 12), (20, 12));
    }

    #[test]
    fn test_normalize_defaults_both_axes() {
        assert_eq!(normalize_dimensions(7, 40), (16, 16));
        assert_eq!(normalize_dimensions(40, 7), (16, 16));
        assert_eq!(normalize_dimensions(0, 0), (16, 16));
    }
}
