//! Play Carta in the terminal.
//!
//! Usage: `carta [SEED]`. Without a seed the board is dealt from entropy;
//! the seed in use is printed either way.

use std::process::ExitCode;

use decker::carta::{run_session, BoardConfig, CartaBoard, Console, GridShape, SessionOutcome};
use decker::{DeckRng, PlayingCard, PlayingCardDeck, Suit};

fn main() -> ExitCode {
    let mut rng = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<u64>() {
            Ok(seed) => DeckRng::new(seed),
            Err(_) => {
                eprintln!("seed must be a non-negative integer, got {arg:?}");
                return ExitCode::FAILURE;
            }
        },
        None => DeckRng::from_entropy(),
    };
    println!("Seed: {} (pass it as an argument to replay this board)", rng.seed());

    match play(&mut rng) {
        Ok(SessionOutcome::Reached { moves }) => {
            println!("Reached the goal in {moves} moves.");
            ExitCode::SUCCESS
        }
        Ok(SessionOutcome::Quit) | Ok(SessionOutcome::InputClosed) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("could not set up the board: {err}");
            ExitCode::FAILURE
        }
    }
}

fn play(rng: &mut DeckRng) -> decker::Result<SessionOutcome> {
    let mut deck = PlayingCardDeck::standard().into_deck();
    let shape = GridShape::filled(4, 3)?;
    let goal = PlayingCard::new(Suit::Hearts, 2)?;
    let start = PlayingCard::new(Suit::Clubs, 2)?;

    let mut board = CartaBoard::build(&mut deck, &shape, goal, start, BoardConfig::default(), rng)?;
    Ok(run_session(&mut board, &mut Console, &mut Console))
}
