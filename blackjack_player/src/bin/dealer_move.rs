use blackjack_player::prelude::*;
use clap::Parser;
use log::debug;

/// Prints the move the dealer makes holding the given cards.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The dealer's cards in short notation, e.g. AS 6H
    #[arg(required = true)]
    cards: Vec<Card>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    debug!("dealer hand: {:?}", args.cards);
    println!("{}", Dealer::decide(&args.cards));
}
