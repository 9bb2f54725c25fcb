//! Module for the parties that make decisions at a blackjack table. Whoever runs the game
//! holds a `Player` and asks it for a bet, a move per turn and shows it the final hands,
//! without needing to know whether a person or the house is behind it.

pub mod dealer;
pub mod moves;
pub mod player;
pub mod prelude {
    pub use super::{dealer, human_player, Player};
    pub use crate::game::dealer::Dealer;
    pub use crate::game::moves::Move;
    pub use crate::game::player::HumanPlayer;
    pub use blackjack_lib::{busted, score, soft, Card, Rank, Suit};
}

pub use prelude::*;

use crate::config::ConsoleConfig;
use crate::PlayerError;
use std::io::{StdinLock, Stdout};

/// Trait for anything that makes blackjack decisions.
pub trait Player {
    /// Returns the amount the player wants to stake on the next hand. `shuffled` tells the
    /// player whether the shoe was reshuffled right before this bet.
    fn bet(&mut self, shuffled: bool) -> Result<u32, PlayerError>;

    /// Returns the move for `hand`, given the dealer's face up card.
    fn play(&mut self, hand: &[Card], dealer: &Card) -> Result<Move, PlayerError>;

    /// Shows the player all of their final hands and the dealer's final hand.
    fn summary(&mut self, hands: &[Vec<Card>], dealer: &[Card]) -> Result<(), PlayerError>;
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn bet(&mut self, shuffled: bool) -> Result<u32, PlayerError> {
        (**self).bet(shuffled)
    }

    fn play(&mut self, hand: &[Card], dealer: &Card) -> Result<Move, PlayerError> {
        (**self).play(hand, dealer)
    }

    fn summary(&mut self, hands: &[Vec<Card>], dealer: &[Card]) -> Result<(), PlayerError> {
        (**self).summary(hands, dealer)
    }
}

/// Builds a player driven by a person on stdin/stdout.
pub fn human_player() -> HumanPlayer<StdinLock<'static>, Stdout> {
    HumanPlayer::stdio(ConsoleConfig::default())
}

/// Builds the fixed rule dealer.
pub fn dealer() -> Dealer {
    Dealer
}
