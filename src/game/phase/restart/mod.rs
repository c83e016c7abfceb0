use anyhow::Result;

use crate::console::{Console, Message, Prompt};


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RestartDecision {
    PlayAgain,
    Quit,
}

/// Asks whether to play another round, insisting on a clear yes or no.
pub struct RestartState;

impl RestartState {
    pub fn new() -> Self {
        RestartState
    }

    pub fn run(&mut self, console: &mut impl Console) -> Result<RestartDecision> {
        loop {
            let choice = console.ask(&Prompt::PlayAgain)?;
            if choice.eq_ignore_ascii_case("y") {
                console.say(&Message::Restarting);
                return Ok(RestartDecision::PlayAgain);
            }
            if choice.eq_ignore_ascii_case("n") {
                console.say(&Message::Farewell);
                return Ok(RestartDecision::Quit);
            }
            console.say(&Message::InvalidYesNo);
        }
    }
}
