use std::io::{self, Write};

use anyhow::{bail, Context, Result};

use crate::console::{Console, Message, Prompt};

/// Plays the game over stdin/stdout.
pub struct TerminalConsole;

impl TerminalConsole {
    pub fn new() -> Self {
        TerminalConsole
    }

    fn interpret_message(&self, message: &Message) -> String {
        use Message::*;
        match message {
            AnswerNotANumber => "The answer must be a number. Please try again.".into(),
            AnswerOutOfRange => "Please provide a number from the list above.".into(),
            Correct => "Correct!".into(),
            CustomAnswersCollide => "Answers must all be different. Please try again.".into(),
            CustomNeedsAllFields => "Please provide the question and answers.".into(),
            Farewell => "Thank you for playing!".into(),
            Incorrect { correct_answer } => {
                format!("Incorrect!\nThe correct answer is: {}", correct_answer)
            }
            InvalidYesNo => "Please provide a valid answer.".into(),
            Options(options) => {
                let mut listing = String::new();
                for (index, option) in options.iter().enumerate() {
                    if index > 0 {
                        listing.push('\n');
                    }
                    listing += &format!("{}. {}", index + 1, option);
                }
                listing
            }
            QuestionBegins { number, question } => format!(
                "Question number {}:\nCategory: {}\nTags: {}\nDifficulty: {}\n{}",
                number,
                question.category,
                question.tags.join(", "),
                question.difficulty,
                question.text
            ),
            QuestionSeparator(width) => format!("\n {}\n", "-".repeat(*width)),
            Restarting => "Restarting the game...".into(),
            Summary(summary) => format!(
                "Your score is: {}/{}\nPercentage of correct answers: {:.1}%\nAverage time per answer: {:.2} seconds\nFastest answer: {:.2} seconds\nSlowest answer: {:.2} seconds",
                summary.score,
                summary.questions_total,
                summary.percentage(),
                summary.average_seconds(),
                summary.fastest_seconds(),
                summary.slowest_seconds()
            ),
        }
    }

    fn interpret_prompt(&self, prompt: &Prompt) -> String {
        use Prompt::*;
        match prompt {
            AddAnotherQuestion => "Do you want to add another question? (Y/N) ".into(),
            AddCustomQuestions => "Do you want to add your own questions? (Y/N) ".into(),
            AnswerNumber => "Provide the answer number: ".into(),
            CorrectAnswer => "Provide the correct answer: ".into(),
            IncorrectAnswer(number) => format!("Provide the incorrect answer {}: ", number),
            PlayAgain => "Do you want to play again? (Y/N) ".into(),
            QuestionText => "Provide the question text: ".into(),
        }
    }
}

impl Console for TerminalConsole {
    fn say(&mut self, message: &Message) {
        println!("{}", self.interpret_message(message));
    }

    fn ask(&mut self, prompt: &Prompt) -> Result<String> {
        print!("{}", self.interpret_prompt(prompt));
        io::stdout().flush().context("failed to flush stdout")?;
        let mut line = String::new();
        let bytes_read = io::stdin()
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        if bytes_read == 0 {
            bail!("standard input was closed");
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}
