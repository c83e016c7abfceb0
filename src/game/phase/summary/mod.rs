use std::time::Duration;

use itertools::{Itertools, MinMaxResult};


/// What a finished round amounts to: the score and one timing sample per
/// answer attempt, invalid attempts included.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundSummary {
    pub score: u32,
    pub questions_total: usize,
    pub times: Vec<Duration>,
}

impl RoundSummary {
    pub fn percentage(&self) -> f64 {
        self.score as f64 / self.questions_total as f64 * 100.0
    }

    pub fn average_seconds(&self) -> f64 {
        let total: Duration = self.times.iter().sum();
        total.as_secs_f64() / self.times.len() as f64
    }

    pub fn fastest_seconds(&self) -> f64 {
        self.extremes().0.as_secs_f64()
    }

    pub fn slowest_seconds(&self) -> f64 {
        self.extremes().1.as_secs_f64()
    }

    // A round records at least one sample per question, so the minmax only
    // sees an empty sequence for an empty round.
    fn extremes(&self) -> (Duration, Duration) {
        match self.times.iter().minmax() {
            MinMaxResult::NoElements => (Duration::ZERO, Duration::ZERO),
            MinMaxResult::OneElement(time) => (*time, *time),
            MinMaxResult::MinMax(min, max) => (*min, *max),
        }
    }
}
