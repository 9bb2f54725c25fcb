//! Configuration of the console used by a `HumanPlayer`.

use crate::PlayerError;
use serde::Deserialize;
use std::path::Path;

/// What a `HumanPlayer` does when the text entered for a bet is not a valid amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidBetPolicy {
    /// Print a diagnostic and ask for the bet again.
    #[default]
    Reprompt,
    /// Silently treat the bet as zero.
    Zero,
}

/// Struct holding the console settings of a human player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub invalid_bet: InvalidBetPolicy,
    pub show_totals: bool,
}

impl ConsoleConfig {
    /// Associated method for returning a new `ConsoleConfigBuilder` object.
    pub fn new() -> ConsoleConfigBuilder {
        ConsoleConfigBuilder {
            invalid_bet: None,
            show_totals: None,
        }
    }

    /// Reads a `ConsoleConfig` from a JSON file, any missing field takes its default value.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<ConsoleConfig, PlayerError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PlayerError::Config(format!("unable to read {}: {}", path.display(), e))
        })?;
        ConsoleConfig::from_json(&contents)
    }

    /// Parses a `ConsoleConfig` from a JSON string.
    pub fn from_json(contents: &str) -> Result<ConsoleConfig, PlayerError> {
        let json: ConsoleConfigJson = serde_json::from_str(contents)?;
        Ok(ConsoleConfig::from(json))
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig::new().build()
    }
}

/// Struct to implement builder pattern for `ConsoleConfig`
#[derive(Clone, Copy)]
pub struct ConsoleConfigBuilder {
    invalid_bet: Option<InvalidBetPolicy>,
    show_totals: Option<bool>,
}

impl ConsoleConfigBuilder {
    /// Method for choosing how malformed bets are handled.
    pub fn invalid_bet(&mut self, policy: InvalidBetPolicy) -> &mut Self {
        self.invalid_bet = Some(policy);
        self
    }

    /// Method for choosing whether the hand total is printed next to the hand.
    pub fn show_totals(&mut self, show: bool) -> &mut Self {
        self.show_totals = Some(show);
        self
    }

    pub fn build(&mut self) -> ConsoleConfig {
        ConsoleConfig {
            invalid_bet: self.invalid_bet.unwrap_or_default(),
            show_totals: self.show_totals.unwrap_or(false),
        }
    }
}

/// The on-disk form of `ConsoleConfig`. Meant to be deserialized from JSON.
#[derive(Debug, Deserialize)]
struct ConsoleConfigJson {
    invalid_bet: Option<InvalidBetPolicy>,
    show_totals: Option<bool>,
}

impl From<ConsoleConfigJson> for ConsoleConfig {
    fn from(value: ConsoleConfigJson) -> Self {
        let mut builder = ConsoleConfig::new();
        if let Some(policy) = value.invalid_bet {
            builder.invalid_bet(policy);
        }
        if let Some(show) = value.show_totals {
            builder.show_totals(show);
        }
        builder.build()
    }
}
