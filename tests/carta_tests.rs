//! Carta board and session tests.
//!
//! These tests verify board construction over a full deck, the single-step
//! movement rules, and whole sessions driven by scripted input.

use proptest::prelude::*;

use decker::carta::{run_session, ScriptedInput};
use decker::cards::{Card, CardFace};
use decker::{
    BoardConfig, BoardState, CartaBoard, Cell, Deck, DeckRng, Direction, GridShape, MoveError,
    PlayingCard, PlayingCardDeck, Position, SessionOutcome, Suit,
};

fn goal() -> PlayingCard {
    PlayingCard::new(Suit::Hearts, 2).unwrap()
}

fn start() -> PlayingCard {
    PlayingCard::new(Suit::Clubs, 2).unwrap()
}

fn build(shape: &GridShape, seed: u64) -> (CartaBoard<PlayingCard>, Deck<PlayingCard>) {
    let mut deck = PlayingCardDeck::standard().into_deck();
    let board = CartaBoard::build(
        &mut deck,
        shape,
        goal(),
        start(),
        BoardConfig::default(),
        &mut DeckRng::new(seed),
    )
    .unwrap();
    (board, deck)
}

/// A 4x3 grid over a 52-card deck: 12 distinct cards, only the start face-up.
#[test]
fn test_four_by_three_board() {
    let (board, deck) = build(&GridShape::filled(4, 3).unwrap(), 42);

    let placed: Vec<_> = board.cards().collect();
    assert_eq!(placed.len(), 12);
    for pos in GridShape::filled(4, 3).unwrap().open_positions() {
        assert!(matches!(board.cell(pos), Some(Cell::Card(_))));
    }

    let mut distinct: Vec<PlayingCard> = placed.iter().map(|(_, c)| (*c).clone()).collect();
    distinct.sort();
    distinct.dedup();
    assert_eq!(distinct.len(), 12);

    assert_eq!(placed.iter().filter(|(_, c)| **c == goal()).count(), 1);
    assert_eq!(placed.iter().filter(|(_, c)| **c == start()).count(), 1);

    for (pos, card) in &placed {
        assert_eq!(card.is_face_up(), *pos == board.starting_position());
    }

    assert_eq!(deck.len(), 40);
    assert!(!deck.contains(&goal()));
    assert!(!deck.contains(&start()));
}

/// Moving north off row 0 is rejected and nothing changes.
#[test]
fn test_north_blocked_on_top_row() {
    let (mut board, _) = build(&GridShape::parse("XXXX").unwrap(), 8);
    let before = board.player_position();
    assert_eq!(before.row, 0);

    assert_eq!(board.try_move(Direction::N), Err(MoveError::IllegalMove));
    assert_eq!(board.player_position(), before);
    assert_eq!(board.state(), BoardState::AwaitingMove);
}

/// Moving north onto a card moves the player and turns the card up.
#[test]
fn test_north_moves_and_reveals() {
    let (mut board, _) = build(&GridShape::filled(3, 3).unwrap(), 8);
    assert_eq!(board.player_position(), Position::new(2, 2));

    let above = Position::new(1, 2);
    assert!(!board.cell(above).and_then(Cell::card).unwrap().is_face_up());

    board.try_move(Direction::N).unwrap();
    assert_eq!(board.player_position(), above);
    assert!(board.cell(above).and_then(Cell::card).unwrap().is_face_up());
}

/// Walking the whole board always finds the goal, and the session stops
/// asking for moves as soon as it does.
#[test]
fn test_session_stops_at_goal() {
    let shape = GridShape::filled(2, 3).unwrap();
    let (mut board, _) = build(&shape, 31);

    // Snake through every cell from the bottom-right start.
    let script = ["w", "w", "n", "e", "e"];
    let mut input = ScriptedInput::new(script);
    let mut output: Vec<String> = Vec::new();

    let outcome = run_session(&mut board, &mut input, &mut output);

    let SessionOutcome::Reached { moves } = outcome else {
        panic!("expected to reach the goal, got {outcome:?}");
    };
    assert_eq!(input.prompts().len(), moves);
    assert_eq!(input.remaining(), script.len() - moves);
    assert_eq!(board.player_position(), board.goal_position());
    assert_eq!(output.last().map(String::as_str), Some("You have reached your goal!"));
}

/// Quit ends the session without reaching the goal.
#[test]
fn test_session_quit_is_an_outcome() {
    let (mut board, _) = build(&GridShape::filled(3, 3).unwrap(), 1);
    let mut input = ScriptedInput::new(["q"]);
    let mut output: Vec<String> = Vec::new();

    assert_eq!(run_session(&mut board, &mut input, &mut output), SessionOutcome::Quit);
    assert_eq!(output.last().map(String::as_str), Some("Goodbye!"));
}

/// Boards work with plain described cards, not just playing cards.
#[test]
fn test_board_of_plain_cards() {
    let mut deck: Deck<CardFace> = ["Gate", "Well", "Tower", "Forest", "Ruins"]
        .into_iter()
        .map(CardFace::described)
        .collect();

    let mut board = CartaBoard::build(
        &mut deck,
        &GridShape::parse("XX\nXX").unwrap(),
        CardFace::described("Tower"),
        CardFace::described("Gate"),
        BoardConfig::orthogonal(),
        &mut DeckRng::new(3),
    )
    .unwrap();

    assert_eq!(deck.len(), 1);
    assert_eq!(board.location_lines(), vec!["You are at: Gate", "Gate"]);
    assert!(matches!(
        board.try_move(Direction::NW),
        Err(MoveError::UnrecognizedDirection { .. })
    ));
    assert_eq!(board.legal_moves(), vec![Direction::N, Direction::W]);
}

/// The move history records each accepted move in order.
#[test]
fn test_move_history_serializes() {
    let (mut board, _) = build(&GridShape::filled(3, 3).unwrap(), 12);
    let mut moves = 0;
    for direction in [Direction::N, Direction::N, Direction::W] {
        if board.is_reached() {
            break;
        }
        board.try_move(direction).unwrap();
        moves += 1;
    }

    let history = board.history();
    assert_eq!(history.len(), moves);
    for (i, record) in history.iter().enumerate() {
        assert_eq!(record.turn as usize, i + 1);
    }

    let json = serde_json::to_string(history).unwrap();
    let back: Vec<decker::MoveRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, history);
}

proptest! {
    /// Any seed and any filled shape: the start sits in the last open cell,
    /// the goal is somewhere else, and the deck shrinks by the cell count.
    #[test]
    fn prop_build_invariants(seed in any::<u64>(), rows in 1usize..=5, cols in 2usize..=5) {
        let shape = GridShape::filled(rows, cols).unwrap();
        let (board, deck) = build(&shape, seed);

        prop_assert_eq!(board.starting_position(), Position::new(rows - 1, cols - 1));
        prop_assert_ne!(board.goal_position(), board.starting_position());
        prop_assert_eq!(board.goal_card(), &goal());
        prop_assert_eq!(board.cards().count(), rows * cols);
        prop_assert_eq!(deck.len(), 52 - rows * cols);
        prop_assert_eq!(board.cards().filter(|(_, c)| c.is_face_up()).count(), 1);
    }
}
