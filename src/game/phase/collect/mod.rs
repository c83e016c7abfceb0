use anyhow::Result;

use crate::console::{Console, Message, Prompt};
use crate::game::definition::Question;


const INCORRECT_ANSWERS_PER_QUESTION: usize = 3;

/// Collects player-authored questions to mix into the batch before a round.
pub struct CollectState;

impl CollectState {
    pub fn new() -> Self {
        CollectState
    }

    pub fn run(&mut self, console: &mut impl Console, batch: &mut Vec<Question>) -> Result<()> {
        let choice = console.ask(&Prompt::AddCustomQuestions)?;
        if !is_yes(&choice) {
            return Ok(());
        }
        loop {
            // A rejected set restarts the question prompts without offering
            // to stop.
            if let Some(question) = self.collect_one(console)? {
                batch.push(question);
                let again = console.ask(&Prompt::AddAnotherQuestion)?;
                if !is_yes(&again) {
                    return Ok(());
                }
            }
        }
    }

    fn collect_one(&mut self, console: &mut impl Console) -> Result<Option<Question>> {
        let text = console.ask(&Prompt::QuestionText)?.trim().to_owned();
        let correct_answer = console.ask(&Prompt::CorrectAnswer)?.trim().to_owned();
        let mut incorrect_answers = Vec::with_capacity(INCORRECT_ANSWERS_PER_QUESTION);
        for number in 1..=INCORRECT_ANSWERS_PER_QUESTION {
            let answer = console.ask(&Prompt::IncorrectAnswer(number))?.trim().to_owned();
            incorrect_answers.push(answer);
        }
        if text.is_empty()
            || correct_answer.is_empty()
            || incorrect_answers.iter().any(|a| a.is_empty())
        {
            console.say(&Message::CustomNeedsAllFields);
            return Ok(None);
        }
        if has_duplicate_answers(&correct_answer, &incorrect_answers) {
            console.say(&Message::CustomAnswersCollide);
            return Ok(None);
        }
        Ok(Some(Question::custom(text, correct_answer, incorrect_answers)))
    }
}

fn is_yes(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y")
}

fn has_duplicate_answers(correct_answer: &str, incorrect_answers: &[String]) -> bool {
    incorrect_answers.iter().any(|a| a == correct_answer)
        || incorrect_answers
            .iter()
            .enumerate()
            .any(|(index, answer)| incorrect_answers[..index].contains(answer))
}
