use crate::config::{ConsoleConfig, InvalidBetPolicy};
use crate::game::{Move, Player};
use crate::PlayerError;
use blackjack_lib::{format_hand, format_hand_value, Card};
use log::{info, warn};
use std::io::{self, BufRead, Stdout, Write};

/// Struct for a player whose decisions are typed in by a person on a console.
/// `reader` and `writer` are the two ends of the console, no game state is kept between calls.
pub struct HumanPlayer<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    config: ConsoleConfig,
}

impl HumanPlayer<io::StdinLock<'static>, Stdout> {
    /// Associated function to create a `HumanPlayer` reading from stdin and writing to stdout.
    pub fn stdio(config: ConsoleConfig) -> Self {
        HumanPlayer::with_config(io::stdin().lock(), io::stdout(), config)
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Associated function to create a new `HumanPlayer` with the default console configuration.
    pub fn new(reader: R, writer: W) -> Self {
        HumanPlayer::with_config(reader, writer, ConsoleConfig::default())
    }

    pub fn with_config(reader: R, writer: W, config: ConsoleConfig) -> Self {
        HumanPlayer {
            reader,
            writer,
            config,
        }
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Consumes the player, giving back the console reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Blocks until a line is available and returns it without surrounding whitespace.
    fn read_line(&mut self) -> Result<String, PlayerError> {
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(PlayerError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn bet(&mut self, shuffled: bool) -> Result<u32, PlayerError> {
        if shuffled {
            writeln!(self.writer, "The deck was just shuffled.")?;
        }
        loop {
            writeln!(self.writer, "What would you like to bet?")?;
            let input = self.read_line()?;
            match input.parse::<u32>() {
                Ok(bet) => {
                    info!("player bet {}", bet);
                    return Ok(bet);
                }
                Err(e) => match self.config.invalid_bet {
                    InvalidBetPolicy::Zero => {
                        warn!("bet {:?} not understood ({}), betting 0", input, e);
                        return Ok(0);
                    }
                    InvalidBetPolicy::Reprompt => {
                        warn!("bet {:?} not understood ({})", input, e);
                        writeln!(self.writer, "Invalid bet: {}", input)?;
                    }
                },
            }
        }
    }

    fn play(&mut self, hand: &[Card], dealer: &Card) -> Result<Move, PlayerError> {
        loop {
            if self.config.show_totals {
                writeln!(
                    self.writer,
                    "Player: {} ({})",
                    format_hand(hand),
                    format_hand_value(hand)
                )?;
            } else {
                writeln!(self.writer, "Player: {}", format_hand(hand))?;
            }
            writeln!(self.writer, "Dealer: {}", dealer)?;
            writeln!(self.writer, "What will you do? (h)it, (s)tand, (d)ouble, s(p)lit")?;

            // only the first word counts, "h please" is a hit
            let input = self.read_line()?;
            let command = input.split_whitespace().next().unwrap_or("");
            match command.parse::<Move>() {
                Ok(decision) => {
                    info!("player chose {}", decision);
                    return Ok(decision);
                }
                Err(option) => {
                    warn!("invalid option {:?}", option);
                    writeln!(self.writer, "Invalid option: {}", option)?;
                }
            }
        }
    }

    fn summary(&mut self, hands: &[Vec<Card>], dealer: &[Card]) -> Result<(), PlayerError> {
        writeln!(self.writer, "==FINAL HANDS==")?;
        writeln!(self.writer, "Player:")?;
        for hand in hands {
            writeln!(self.writer, "  {}", format_hand(hand))?;
        }
        writeln!(self.writer, "Dealer: {}", format_hand(dealer))?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
