use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RawQuestion {
    pub question: RawQuestionText,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub difficulty: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RawQuestionText {
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub category: String,
    pub tags: Vec<String>,
    pub difficulty: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

impl Question {
    /// Builds a player-authored question. These carry placeholder metadata
    /// since the player only provides the text and the answers.
    pub fn custom(text: String, correct_answer: String, incorrect_answers: Vec<String>) -> Self {
        Question {
            text,
            category: "Custom".to_owned(),
            tags: Vec::new(),
            difficulty: "custom".to_owned(),
            correct_answer,
            incorrect_answers,
        }
    }

    /// Every answer option, correct one included, in a uniformly random order.
    pub fn shuffled_options(&self, rng: &mut impl Rng) -> Vec<String> {
        let mut options = self.incorrect_answers.clone();
        options.push(self.correct_answer.clone());
        options.shuffle(rng);
        options
    }

    pub fn is_correct(&self, option: &str) -> bool {
        option == self.correct_answer
    }
}

impl From<RawQuestion> for Question {
    fn from(raw_question: RawQuestion) -> Self {
        Question {
            text: raw_question.question.text,
            category: raw_question.category,
            tags: raw_question.tags,
            difficulty: raw_question.difficulty,
            correct_answer: raw_question.correct_answer,
            incorrect_answers: raw_question.incorrect_answers,
        }
    }
}
