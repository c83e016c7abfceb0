use anyhow::{ensure, Context, Result};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::index;

use self::definition::*;
use self::phase::*;
use self::settings::*;
use crate::console::{Console, Message};
use crate::trivia::QuestionSource;

pub mod definition;
pub mod phase;
pub mod settings;


enum Phase {
    CollectCustom,
    Round,
    Summary(RoundSummary),
    OfferRestart,
}

impl Phase {
    fn name(&self) -> &'static str {
        match self {
            Phase::CollectCustom => "collect custom questions",
            Phase::Round => "round",
            Phase::Summary(_) => "summary",
            Phase::OfferRestart => "offer restart",
        }
    }
}

/// Drives a whole session, from the first custom-question offer until the
/// player declines to play again.
pub struct Game<S, C> {
    source: S,
    console: C,
    settings: Settings,
    rng: StdRng,
    batch: Vec<Question>,
    restart_counter: u32,
}

impl<S: QuestionSource, C: Console> Game<S, C> {
    pub fn new(
        source: S,
        console: C,
        settings: Settings,
        batch: Vec<Question>,
        rng: StdRng,
    ) -> Self {
        Game {
            source,
            console,
            settings,
            rng,
            batch,
            restart_counter: 1,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut phase = Phase::CollectCustom;
        loop {
            debug!("entering game phase: {}", phase.name());
            phase = match phase {
                Phase::CollectCustom => {
                    CollectState::new().run(&mut self.console, &mut self.batch)?;
                    Phase::Round
                }
                Phase::Round => Phase::Summary(self.play_round()?),
                Phase::Summary(summary) => {
                    self.console.say(&Message::Summary(summary));
                    Phase::OfferRestart
                }
                Phase::OfferRestart => match RestartState::new().run(&mut self.console)? {
                    RestartDecision::PlayAgain => {
                        self.prepare_restart()?;
                        Phase::CollectCustom
                    }
                    RestartDecision::Quit => return Ok(()),
                },
            };
        }
    }

    fn play_round(&mut self) -> Result<RoundSummary> {
        let round_size = self.settings.round_size;
        ensure!(
            self.batch.len() >= round_size,
            "not enough questions for a round: have {}, need {}",
            self.batch.len(),
            round_size
        );
        let picked = index::sample(&mut self.rng, self.batch.len(), round_size)
            .iter()
            .map(|i| self.batch[i].clone())
            .collect();
        RoundState::new(picked).run(&mut self.console, &mut self.rng)
    }

    // Most restarts replay the same batch. Every refresh_interval-th one
    // trades the whole batch, custom questions included, for a fresh fetch.
    fn prepare_restart(&mut self) -> Result<()> {
        if self.restart_counter == self.settings.refresh_interval {
            self.batch = self
                .source
                .fetch(self.settings.fetch_limit, &self.settings.region)
                .context("failed to refresh the question batch")?;
            self.restart_counter = 1;
            info!("refreshed the question batch: {} questions", self.batch.len());
        } else {
            self.restart_counter += 1;
        }
        Ok(())
    }
}
