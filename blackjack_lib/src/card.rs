use crate::BlackjackGameError;
use std::fmt::Display;
use std::str::FromStr;

/// Enum for the rank of a card, ordered from `Ace` up to `King`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Returns the blackjack point value of the rank, aces count as 1 and face cards as 10.
    pub fn val(&self) -> u8 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        }
    }

    /// The short notation used when parsing cards, i.e. "A", "10", "K".
    pub fn symbol(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rank::Ace => "Ace",
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Rank {
    type Err = BlackjackGameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rank::ALL
            .iter()
            .find(|rank| rank.symbol().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| BlackjackGameError::new(format!("invalid rank: {}", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Spades => "Spades",
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Suit {
    type Err = BlackjackGameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "S" => Ok(Suit::Spades),
            "H" => Ok(Suit::Hearts),
            "D" => Ok(Suit::Diamonds),
            "C" => Ok(Suit::Clubs),
            _ => Err(BlackjackGameError::new(format!("invalid suit: {}", s))),
        }
    }
}

/// Struct for a single playing card. `val` is the blackjack value of the card and is derived from `rank`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
    pub val: u8,
}

impl Card {
    /// Associated function to create a new `Card` struct.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card {
            rank,
            suit,
            val: rank.val(),
        }
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Parses the short `<rank><suit>` notation, e.g. "AS", "10h" or "kd".
impl FromStr for Card {
    type Err = BlackjackGameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split_at = match s.char_indices().last() {
            Some((i, _)) if i > 0 => i,
            _ => return Err(BlackjackGameError::new(format!("invalid card: {:?}", s))),
        };
        let (rank, suit) = s.split_at(split_at);
        let rank = rank
            .parse::<Rank>()
            .map_err(|e| BlackjackGameError::new(format!("invalid card {:?}, {}", s, e)))?;
        let suit = suit
            .parse::<Suit>()
            .map_err(|e| BlackjackGameError::new(format!("invalid card {:?}, {}", s, e)))?;
        Ok(Card::new(rank, suit))
    }
}
