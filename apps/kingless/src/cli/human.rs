//! The human input collaborator: a `CardPolicy` over an interactive
//! terminal. Presents the hand, handles show/hide privacy and card picks
//! by index, and re-prompts on invalid input - re-prompting lives here,
//! never inside the engine.

use std::io::{BufRead, BufReader, Stdin, Stdout, Write};
use std::sync::Mutex;

use super::render::render_hand_with_indices;
use crate::ai::{CardPolicy, PolicyError};
use crate::domain::{Card, PlayerView};

pub struct HumanPlayer<R, W> {
    label: String,
    /// Start each prompt with the hand concealed (human-vs-human privacy).
    start_hidden: bool,
    /// Whether show/hide commands are honored; disabled against a bot,
    /// where the hand is simply shown.
    allow_toggle: bool,
    input: Mutex<R>,
    output: Mutex<W>,
}

impl<R, W> std::fmt::Debug for HumanPlayer<R, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HumanPlayer")
            .field("label", &self.label)
            .field("start_hidden", &self.start_hidden)
            .field("allow_toggle", &self.allow_toggle)
            .finish_non_exhaustive()
    }
}

impl HumanPlayer<BufReader<Stdin>, Stdout> {
    /// A player reading from stdin and writing to stdout.
    pub fn stdin(label: impl Into<String>, start_hidden: bool, allow_toggle: bool) -> Self {
        Self::new(
            label,
            start_hidden,
            allow_toggle,
            BufReader::new(std::io::stdin()),
            std::io::stdout(),
        )
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(
        label: impl Into<String>,
        start_hidden: bool,
        allow_toggle: bool,
        input: R,
        output: W,
    ) -> Self {
        Self {
            label: label.into(),
            start_hidden,
            allow_toggle,
            input: Mutex::new(input),
            output: Mutex::new(output),
        }
    }
}

fn io_err(e: std::io::Error) -> PolicyError {
    PolicyError::Internal(e.to_string())
}

impl<R: BufRead + Send, W: Write + Send> CardPolicy for HumanPlayer<R, W> {
    fn choose_card(&self, view: &PlayerView<'_>) -> Result<Card, PolicyError> {
        let mut input = self
            .input
            .lock()
            .map_err(|e| PolicyError::Internal(format!("input lock poisoned: {e}")))?;
        let mut output = self
            .output
            .lock()
            .map_err(|e| PolicyError::Internal(format!("output lock poisoned: {e}")))?;

        let mut hidden = self.start_hidden;
        loop {
            if let Some(lead) = view.lead_suit {
                writeln!(output, "Lead suit: {lead:?}").map_err(io_err)?;
            }
            if hidden {
                writeln!(
                    output,
                    "{}'s hand is hidden. Type 'show' (s) to display it.",
                    self.label
                )
                .map_err(io_err)?;
            } else {
                writeln!(output, "{}'s turn. Your hand:", self.label).map_err(io_err)?;
                writeln!(output, "{}", render_hand_with_indices(view.hand)).map_err(io_err)?;
            }
            write!(
                output,
                "{}, choose an action (show/s, hide/h, or a card index): ",
                self.label
            )
            .map_err(io_err)?;
            output.flush().map_err(io_err)?;

            let mut line = String::new();
            let read = input.read_line(&mut line).map_err(io_err)?;
            if read == 0 {
                return Err(PolicyError::Internal("input closed".into()));
            }

            let choice = line.trim().to_lowercase();
            match choice.as_str() {
                "show" | "s" if self.allow_toggle => hidden = false,
                "hide" | "h" if self.allow_toggle => hidden = true,
                other => {
                    if hidden {
                        writeln!(output, "Invalid input. Please try again.").map_err(io_err)?;
                        continue;
                    }
                    match other.parse::<usize>() {
                        Ok(index) if index < view.hand.len() => return Ok(view.hand[index]),
                        _ => {
                            writeln!(output, "Invalid card index. Please try again.")
                                .map_err(io_err)?;
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::domain::try_parse_cards;

    fn view<'a>(hand: &'a [Card]) -> PlayerView<'a> {
        PlayerView {
            seat: 0,
            hand,
            lead_suit: None,
            round_no: 1,
            scores: [0, 0],
        }
    }

    fn player(script: &str, start_hidden: bool, allow_toggle: bool) -> HumanPlayer<Cursor<String>, Vec<u8>> {
        HumanPlayer::new(
            "Player 1",
            start_hidden,
            allow_toggle,
            Cursor::new(script.to_string()),
            Vec::new(),
        )
    }

    #[test]
    fn picks_a_card_by_index() {
        let hand = try_parse_cards(["AS", "3H", "4C"]).unwrap();
        let p = player("1\n", false, false);
        let card = p.choose_card(&view(&hand)).unwrap();
        assert_eq!(card.to_string(), "3H");
    }

    #[test]
    fn reprompts_on_out_of_range_index() {
        let hand = try_parse_cards(["AS", "3H"]).unwrap();
        let p = player("9\n0\n", false, false);
        let card = p.choose_card(&view(&hand)).unwrap();
        assert_eq!(card.to_string(), "AS");
    }

    #[test]
    fn hidden_hand_must_be_shown_before_picking() {
        let hand = try_parse_cards(["AS", "3H"]).unwrap();
        // An index while hidden is rejected; show first, then pick.
        let p = player("1\nshow\n1\n", true, true);
        let card = p.choose_card(&view(&hand)).unwrap();
        assert_eq!(card.to_string(), "3H");
    }

    #[test]
    fn hide_conceals_the_hand_again() {
        let hand = try_parse_cards(["AS", "3H"]).unwrap();
        let p = player("s\nh\ns\n0\n", true, true);
        let card = p.choose_card(&view(&hand)).unwrap();
        assert_eq!(card.to_string(), "AS");
    }

    #[test]
    fn closed_input_is_an_error() {
        let hand = try_parse_cards(["AS"]).unwrap();
        let p = player("", false, false);
        assert!(p.choose_card(&view(&hand)).is_err());
    }
}
