//! Cards and hand scoring shared by the blackjack players.

pub mod card;

pub use card::{Card, Rank, Suit};
use std::error::Error;
use std::fmt::Display;

/// Error struct for anything that goes wrong while interpreting cards or hands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlackjackGameError {
    pub message: String,
}

impl BlackjackGameError {
    pub fn new(message: String) -> BlackjackGameError {
        BlackjackGameError { message }
    }
}

impl Display for BlackjackGameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for BlackjackGameError {}

/// Returns the total of the hand counting every ace as 1. Saturates at `u8::MAX` for
/// absurdly long hands.
pub fn hard_total(cards: &[Card]) -> u8 {
    cards.iter().fold(0u8, |total, c| total.saturating_add(c.val))
}

/// Returns the blackjack score of `cards`. A single ace is counted as 11 whenever that
/// keeps the total at or under 21, otherwise every ace counts as 1.
pub fn score(cards: &[Card]) -> u8 {
    let total = hard_total(cards);
    if soft(cards) {
        total + 10
    } else {
        total
    }
}

/// Returns true if the score of `cards` is counting an ace as 11, i.e. the hand could be
/// recounted with that ace as 1 for a lower total.
pub fn soft(cards: &[Card]) -> bool {
    cards.iter().any(|c| c.is_ace()) && hard_total(cards) <= 11
}

/// Returns true if the hand is over 21 with every ace counted as 1.
pub fn busted(cards: &[Card]) -> bool {
    hard_total(cards) > 21
}

/// Formats the value of a hand, soft hands show both totals, e.g. "7/17".
pub fn format_hand_value(cards: &[Card]) -> String {
    if soft(cards) {
        format!("{}/{}", hard_total(cards), score(cards))
    } else {
        format!("{}", hard_total(cards))
    }
}

/// Formats a hand as a comma separated list of cards inside brackets.
pub fn format_hand(cards: &[Card]) -> String {
    let cards = cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<String>>()
        .join(", ");
    format!("[{}]", cards)
}

#[cfg(test)]
mod test {
    use super::*;

    fn hand(cards: &[&str]) -> Vec<Card> {
        cards.iter().map(|c| c.parse::<Card>().unwrap()).collect()
    }

    #[test]
    fn test_hard_hands() {
        assert_eq!(score(&hand(&["10S", "7H"])), 17);
        assert!(!soft(&hand(&["10S", "7H"])));
        assert_eq!(score(&hand(&["KS", "QH"])), 20);
        assert_eq!(score(&hand(&["2S", "3H", "4D"])), 9);
        assert_eq!(score(&[]), 0);
        assert!(!soft(&[]));
    }

    #[test]
    fn test_soft_hands() {
        let ace_six = hand(&["AS", "6H"]);
        assert_eq!(score(&ace_six), 17);
        assert!(soft(&ace_six));

        let ace_ace = hand(&["AS", "AH"]);
        assert_eq!(score(&ace_ace), 12);
        assert!(soft(&ace_ace));

        let blackjack = hand(&["AS", "KH"]);
        assert_eq!(score(&blackjack), 21);
        assert!(soft(&blackjack));
    }

    #[test]
    fn test_ace_recounted_as_one() {
        let cards = hand(&["AS", "6H", "9D"]);
        assert_eq!(score(&cards), 16);
        assert!(!soft(&cards));

        let cards = hand(&["AS", "AH", "KD", "9C"]);
        assert_eq!(score(&cards), 21);
        assert!(!soft(&cards));
    }

    #[test]
    fn test_busted() {
        assert!(busted(&hand(&["KS", "QH", "2D"])));
        assert!(!busted(&hand(&["AS", "KH", "QD"])));
        assert_eq!(score(&hand(&["KS", "QH", "5D"])), 25);
    }

    #[test]
    fn test_long_hand_saturates() {
        let cards = vec![Card::new(Rank::King, Suit::Spades); 26];
        assert_eq!(hard_total(&cards), u8::MAX);
        assert_eq!(score(&cards), u8::MAX);
        assert!(!soft(&cards));
        assert!(busted(&cards));

        let mut cards = vec![Card::new(Rank::Ace, Suit::Hearts); 300];
        cards.push(Card::new(Rank::Six, Suit::Clubs));
        assert_eq!(score(&cards), u8::MAX);
        assert!(busted(&cards));
    }

    #[test]
    fn test_format_hand_value() {
        assert_eq!(format_hand_value(&hand(&["AS", "6H"])), "7/17");
        assert_eq!(format_hand_value(&hand(&["10S", "7H"])), "17");
        assert_eq!(format_hand_value(&hand(&["AS", "6H", "9D"])), "16");
    }

    #[test]
    fn test_format_hand() {
        assert_eq!(
            format_hand(&hand(&["AS", "10H"])),
            "[Ace of Spades, Ten of Hearts]"
        );
        assert_eq!(format_hand(&[]), "[]");
    }
}
