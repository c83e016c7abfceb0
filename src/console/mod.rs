use anyhow::Result;

use crate::game::definition::Question;
use crate::game::phase::RoundSummary;

#[cfg(test)]
pub mod mock;
pub mod terminal;

pub use terminal::TerminalConsole;

/// Everything the game ever says, as data. Concrete consoles decide how a
/// message reads on screen; tests assert on the values themselves.
#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    AnswerNotANumber,
    AnswerOutOfRange,
    Correct,
    CustomAnswersCollide,
    CustomNeedsAllFields,
    Farewell,
    Incorrect { correct_answer: String },
    InvalidYesNo,
    Options(Vec<String>),
    QuestionBegins { number: usize, question: Question },
    QuestionSeparator(usize),
    Restarting,
    Summary(RoundSummary),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Prompt {
    AddAnotherQuestion,
    AddCustomQuestions,
    AnswerNumber,
    CorrectAnswer,
    IncorrectAnswer(usize),
    PlayAgain,
    QuestionText,
}

pub trait Console {
    fn say(&mut self, message: &Message);

    /// Displays the prompt and blocks until the player enters a line. Only
    /// the line terminator is stripped; surrounding whitespace is kept.
    fn ask(&mut self, prompt: &Prompt) -> Result<String>;
}
