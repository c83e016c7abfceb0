use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

mod console;
mod game;
mod trivia;

use crate::console::TerminalConsole;
use crate::game::settings::Settings;
use crate::game::Game;
use crate::trivia::{QuestionSource, TriviaClient};

#[derive(Parser)]
#[command(
    name = "quiz-night",
    version,
    about = "A terminal trivia quiz played against the Trivia API"
)]
struct Cli {
    /// How many questions to fetch per batch
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..))]
    limit: u32,

    /// Region code narrowing questions to a locale
    #[arg(long, default_value = "PL")]
    region: String,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings {
        fetch_limit: cli.limit,
        region: cli.region,
        ..Settings::default()
    };
    let client = TriviaClient::new(trivia::DEFAULT_ENDPOINT);
    let batch = client
        .fetch(settings.fetch_limit, &settings.region)
        .context("failed to fetch the question batch")?;
    info!("fetched {} questions", batch.len());
    let mut game = Game::new(
        client,
        TerminalConsole::new(),
        settings,
        batch,
        StdRng::from_entropy(),
    );
    game.run()
}
