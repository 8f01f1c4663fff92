//! The interactive game loop.
//!
//! The loop talks to the outside world only through `InputSource` and
//! `OutputSink`, so it runs the same against a terminal or a script.
//! Quitting returns `SessionOutcome::Quit`; what happens next is up to the
//! caller.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use super::board::{CartaBoard, Turn};
use crate::cards::Card;

/// Prompt shown before every move.
pub const MOVE_PROMPT: &str = "Which direction do you want to move in? ";

pub const GOAL_MESSAGE: &str = "You have reached your goal!";

pub const FAREWELL_MESSAGE: &str = "Goodbye!";

/// Where player input comes from.
pub trait InputSource {
    /// Show `prompt` and read one line. `None` when input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Option<String>;
}

/// Where game text goes.
pub trait OutputSink {
    fn write_line(&mut self, text: &str);
}

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The player reached the goal after `moves` accepted moves.
    Reached { moves: usize },
    /// The player typed a quit command.
    Quit,
    /// Input ran out before the game ended.
    InputClosed,
}

/// Play `board` until the goal is reached, the player quits, or input runs
/// out.
///
/// Rejected moves are reported through `output` and the player is asked
/// again; they never end the session.
pub fn run_session<C, I, O>(board: &mut CartaBoard<C>, input: &mut I, output: &mut O) -> SessionOutcome
where
    C: Card + PartialEq,
    I: InputSource + ?Sized,
    O: OutputSink + ?Sized,
{
    show(board, output);

    while !board.is_reached() {
        let Some(line) = input.read_line(MOVE_PROMPT) else {
            return SessionOutcome::InputClosed;
        };
        match board.handle_input(&line) {
            Ok(Turn::Quit) => {
                output.write_line(FAREWELL_MESSAGE);
                return SessionOutcome::Quit;
            }
            Ok(Turn::Moved(_)) | Ok(Turn::Reached(_)) => show(board, output),
            Err(err) => output.write_line(&err.to_string()),
        }
    }

    output.write_line(GOAL_MESSAGE);
    SessionOutcome::Reached {
        moves: board.history().len(),
    }
}

fn show<C, O>(board: &CartaBoard<C>, output: &mut O)
where
    C: Card + PartialEq,
    O: OutputSink + ?Sized,
{
    output.write_line(&board.render());
    for line in board.location_lines() {
        output.write_line(&line);
    }
}

/// Terminal input and output over stdin/stdout.
#[derive(Debug, Default)]
pub struct Console;

impl InputSource for Console {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        let mut stdout = std::io::stdout();
        // Prompt write failures are ignored; the read still decides.
        let _ = write!(stdout, "{prompt}");
        let _ = stdout.flush();

        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

impl OutputSink for Console {
    fn write_line(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Input replayed from a fixed list of lines.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    #[must_use]
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts shown so far.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Lines not yet read.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.prompts.push(prompt.to_string());
        self.lines.pop_front()
    }
}

impl OutputSink for Vec<String> {
    fn write_line(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carta::{BoardConfig, GridShape};
    use crate::cards::{PlayingCard, Suit};
    use crate::core::DeckRng;
    use crate::deck::PlayingCardDeck;

    // Two open cells: goal on the left, start on the right.
    fn two_cell_board() -> CartaBoard<PlayingCard> {
        let mut deck = PlayingCardDeck::standard().into_deck();
        CartaBoard::build(
            &mut deck,
            &GridShape::filled(1, 2).unwrap(),
            PlayingCard::new(Suit::Hearts, 2).unwrap(),
            PlayingCard::new(Suit::Clubs, 2).unwrap(),
            BoardConfig::default(),
            &mut DeckRng::new(1),
        )
        .unwrap()
    }

    #[test]
    fn test_session_reaches_goal() {
        let mut board = two_cell_board();
        let mut input = ScriptedInput::new(["n", "w", "e"]);
        let mut output: Vec<String> = Vec::new();

        let outcome = run_session(&mut board, &mut input, &mut output);

        assert_eq!(outcome, SessionOutcome::Reached { moves: 1 });
        assert_eq!(input.prompts().len(), 2);
        assert_eq!(input.remaining(), 1);
        assert_eq!(
            output,
            vec![
                " XX  2♣ ",
                "You are at: 2♣",
                "You can't go off the map.",
                " 2♥  2♣ ",
                "You are at: 2♥",
                GOAL_MESSAGE,
            ]
        );
    }

    #[test]
    fn test_session_quit() {
        let mut board = two_cell_board();
        let mut input = ScriptedInput::new(["north", "QUIT"]);
        let mut output: Vec<String> = Vec::new();

        let outcome = run_session(&mut board, &mut input, &mut output);

        assert_eq!(outcome, SessionOutcome::Quit);
        assert_eq!(
            output[2],
            "Direction must be one of: [N, S, W, E, NW, NE, SW, SE]"
        );
        assert_eq!(output.last().map(String::as_str), Some(FAREWELL_MESSAGE));
        assert!(!board.is_reached());
    }

    #[test]
    fn test_session_input_closed() {
        let mut board = two_cell_board();
        let mut input = ScriptedInput::new(Vec::<String>::new());
        let mut output: Vec<String> = Vec::new();

        assert_eq!(
            run_session(&mut board, &mut input, &mut output),
            SessionOutcome::InputClosed
        );
        assert_eq!(input.prompts(), &[MOVE_PROMPT.to_string()]);
    }
}
