use blackjack_player::prelude::*;
use clap::Parser;
use log::info;
use std::path::PathBuf;

/// Plays a single turn at the console: place a bet, pick a move for the hand, then see the
/// dealer's pick for the same cards and the final hands.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The player's cards in short notation, e.g. AS 6H
    #[arg(long, num_args = 1.., required = true)]
    hand: Vec<Card>,

    /// The dealer's face up card
    #[arg(long)]
    dealer: Card,

    /// Announce that the shoe was just shuffled before the bet
    #[arg(long)]
    shuffled: bool,

    /// JSON file with console settings
    #[arg(long)]
    config: Option<PathBuf>,
}

fn run(args: Args) -> Result<(), PlayerError> {
    let config = match args.config {
        Some(ref path) => ConsoleConfig::from_json_file(path)?,
        None => ConsoleConfig::default(),
    };
    let mut human = HumanPlayer::stdio(config);
    info!("console config: {:?}", human.config());
    let mut house = dealer();

    let bet = human.bet(args.shuffled)?;
    let decision = human.play(&args.hand, &args.dealer)?;
    let house_decision = house.play(&args.hand, &args.dealer)?;
    if busted(&args.hand) {
        println!("Your hand is already bust at {}.", score(&args.hand));
    }
    println!("You bet {} and chose to {}.", bet, decision);
    println!("The dealer would {} on the same cards.", house_decision);

    let dealers_hand = vec![args.dealer];
    human.summary(&[args.hand], &dealers_hand)?;
    house.summary(&[], &dealers_hand)?;
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
