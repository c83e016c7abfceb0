use std::time::{Duration, Instant};

use anyhow::Result;
use rand::Rng;

use crate::console::{Console, Message, Prompt};
use crate::game::definition::Question;
use crate::game::phase::RoundSummary;


/// Plays one round over an already-sampled set of questions.
pub struct RoundState {
    questions: Vec<Question>,
    score: u32,
    questions_asked: usize,
    times: Vec<Duration>,
}

impl RoundState {
    pub fn new(questions: Vec<Question>) -> Self {
        RoundState {
            questions,
            score: 0,
            questions_asked: 0,
            times: Vec::new(),
        }
    }

    pub fn run(mut self, console: &mut impl Console, rng: &mut impl Rng) -> Result<RoundSummary> {
        let questions = std::mem::take(&mut self.questions);
        for question in &questions {
            self.ask_question(question, console, rng)?;
        }
        Ok(RoundSummary {
            score: self.score,
            questions_total: questions.len(),
            times: self.times,
        })
    }

    fn ask_question(
        &mut self,
        question: &Question,
        console: &mut impl Console,
        rng: &mut impl Rng,
    ) -> Result<()> {
        self.questions_asked += 1;
        console.say(&Message::QuestionBegins {
            number: self.questions_asked,
            question: question.clone(),
        });
        let options = question.shuffled_options(rng);
        console.say(&Message::Options(options.clone()));
        let answer = self.read_answer(options.len(), console)?;
        if question.is_correct(&options[answer - 1]) {
            self.score += 1;
            console.say(&Message::Correct);
        } else {
            console.say(&Message::Incorrect {
                correct_answer: question.correct_answer.clone(),
            });
        }
        console.say(&Message::QuestionSeparator(question.text.chars().count()));
        Ok(())
    }

    /// Reads a 1-based option number, re-prompting until the answer is
    /// valid. The option listing is not repeated, and every attempt records
    /// a timing sample, valid or not.
    fn read_answer(&mut self, option_count: usize, console: &mut impl Console) -> Result<usize> {
        loop {
            let asked_at = Instant::now();
            let line = console.ask(&Prompt::AnswerNumber)?;
            self.times.push(asked_at.elapsed());
            // Negative or oversized numerals are out of range, not garbage.
            match line.trim().parse::<i64>() {
                Ok(number) if (1..=option_count as i64).contains(&number) => {
                    return Ok(number as usize)
                }
                Ok(_) => console.say(&Message::AnswerOutOfRange),
                Err(_) if is_numeral(line.trim()) => console.say(&Message::AnswerOutOfRange),
                Err(_) => console.say(&Message::AnswerNotANumber),
            }
        }
    }
}

fn is_numeral(input: &str) -> bool {
    let digits = input.strip_prefix(['+', '-']).unwrap_or(input);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}
