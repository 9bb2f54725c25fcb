pub mod config;
pub mod game;

pub use config::{ConsoleConfig, ConsoleConfigBuilder, InvalidBetPolicy};
pub use game::prelude::*;
use std::error::Error;
use std::fmt::Display;

pub mod prelude {
    pub use super::{
        game::prelude::*, ConsoleConfig, ConsoleConfigBuilder, InvalidBetPolicy, PlayerError,
    };
}

#[derive(Debug)]
pub enum PlayerError {
    InputClosed,
    Io(String),
    Config(String),
}

impl Display for PlayerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerError::InputClosed => write!(f, "input closed while waiting for a decision"),
            PlayerError::Io(s) => write!(f, "console error: {}", s),
            PlayerError::Config(s) => write!(f, "configuration error: {}", s),
        }
    }
}

impl Error for PlayerError {}

impl From<std::io::Error> for PlayerError {
    fn from(value: std::io::Error) -> Self {
        PlayerError::Io(value.to_string())
    }
}

impl From<serde_json::Error> for PlayerError {
    fn from(value: serde_json::Error) -> Self {
        PlayerError::Config(value.to_string())
    }
}
