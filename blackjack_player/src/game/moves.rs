use std::fmt::Display;
use std::str::FromStr;

/// The move a player declares for the current turn. Applying the move to the hand and bet is
/// left to whatever is running the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Hit,
    Stand,
    Double,
    Split,
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Move::Hit => "hit",
            Move::Stand => "stand",
            Move::Double => "double",
            Move::Split => "split",
        };
        write!(f, "{}", name)
    }
}

/// Parses the single character console commands, `h`, `s`, `d` and `p`.
impl FromStr for Move {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h" => Ok(Move::Hit),
            "s" => Ok(Move::Stand),
            "d" => Ok(Move::Double),
            "p" => Ok(Move::Split),
            _ => Err(s.to_string()),
        }
    }
}
