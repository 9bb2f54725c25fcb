use crate::game::{Move, Player};
use crate::PlayerError;
use blackjack_lib::{score, soft, Card};
use log::debug;

/// The house. Hits on 16 or less and on a soft 17, stands on everything else. Never bets,
/// doubles or splits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dealer;

impl Dealer {
    /// The fixed rule the dealer plays by, computed from the dealer's own hand.
    pub fn decide(hand: &[Card]) -> Move {
        let hand_score = score(hand);
        let is_soft = soft(hand);
        let decision = if hand_score <= 16 || (hand_score == 17 && is_soft) {
            Move::Hit
        } else {
            Move::Stand
        };
        debug!(
            "dealer score {} (soft: {}), decision: {}",
            hand_score, is_soft, decision
        );
        decision
    }
}

impl Player for Dealer {
    fn bet(&mut self, _shuffled: bool) -> Result<u32, PlayerError> {
        Ok(0)
    }

    fn play(&mut self, hand: &[Card], _dealer: &Card) -> Result<Move, PlayerError> {
        Ok(Dealer::decide(hand))
    }

    fn summary(&mut self, _hands: &[Vec<Card>], _dealer: &[Card]) -> Result<(), PlayerError> {
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use blackjack_lib::{Rank, Suit};

    fn hand(cards: &[&str]) -> Vec<Card> {
        cards.iter().map(|c| c.parse::<Card>().unwrap()).collect()
    }

    fn up_card() -> Card {
        Card::new(Rank::Nine, Suit::Clubs)
    }

    #[test]
    fn test_hits_sixteen_or_less() {
        let mut dealer = Dealer;
        for first in 2..=10u8 {
            for second in 2..=10u8 {
                let cards = vec![
                    Card::new(Rank::ALL[(first - 1) as usize], Suit::Spades),
                    Card::new(Rank::ALL[(second - 1) as usize], Suit::Hearts),
                ];
                let expected = if first + second <= 16 {
                    Move::Hit
                } else {
                    Move::Stand
                };
                assert_eq!(dealer.play(&cards, &up_card()).unwrap(), expected);
            }
        }
        assert_eq!(
            dealer.play(&hand(&["10S", "6H"]), &up_card()).unwrap(),
            Move::Hit
        );
        assert_eq!(
            dealer.play(&hand(&["AS", "6H", "9D"]), &up_card()).unwrap(),
            Move::Hit
        );
    }

    #[test]
    fn test_soft_seventeen() {
        let mut dealer = Dealer;
        assert_eq!(
            dealer.play(&hand(&["AS", "6H"]), &up_card()).unwrap(),
            Move::Hit
        );
        assert_eq!(
            dealer.play(&hand(&["AS", "2H", "4D"]), &up_card()).unwrap(),
            Move::Hit
        );
        assert_eq!(
            dealer.play(&hand(&["10S", "7H"]), &up_card()).unwrap(),
            Move::Stand
        );
        assert_eq!(
            dealer.play(&hand(&["AS", "6H", "KD"]), &up_card()).unwrap(),
            Move::Stand
        );
    }

    #[test]
    fn test_stands_eighteen_or_more() {
        let mut dealer = Dealer;
        assert_eq!(
            dealer.play(&hand(&["KS", "QH"]), &up_card()).unwrap(),
            Move::Stand
        );
        assert_eq!(
            dealer.play(&hand(&["AS", "7H"]), &up_card()).unwrap(),
            Move::Stand
        );
        assert_eq!(
            dealer.play(&hand(&["AS", "KH"]), &up_card()).unwrap(),
            Move::Stand
        );
        assert_eq!(
            dealer.play(&hand(&["KS", "QH", "5D"]), &up_card()).unwrap(),
            Move::Stand
        );
    }

    #[test]
    fn test_stands_on_long_bust_hand() {
        let mut dealer = Dealer;
        let cards = vec![Card::new(Rank::King, Suit::Spades); 26];
        assert_eq!(dealer.play(&cards, &up_card()).unwrap(), Move::Stand);
    }

    #[test]
    fn test_soft_twelve() {
        let mut dealer = Dealer;
        assert_eq!(
            dealer.play(&hand(&["AS", "AH"]), &up_card()).unwrap(),
            Move::Hit
        );
    }

    #[test]
    fn test_never_bets() {
        let mut dealer = Dealer;
        assert_eq!(dealer.bet(true).unwrap(), 0);
        assert_eq!(dealer.bet(false).unwrap(), 0);
    }

    #[test]
    fn test_summary_is_noop() {
        let mut dealer = Dealer;
        let hands = vec![hand(&["AS", "KH"]), hand(&["2S", "3H"])];
        assert!(dealer.summary(&hands, &hand(&["10S", "7H"])).is_ok());
        assert!(dealer.summary(&[], &[]).is_ok());
        assert_eq!(std::mem::size_of::<Dealer>(), 0);
    }
}
