mod cli;
mod error;
mod game;
mod languages;
mod rng;
mod terminal;
mod view;
mod words;

use clap::Parser;
use cli::Cli;
use error::HangmanError;
use game::Game;
use languages::Lives;
use log::info;
use rng::GameRng;
use std::fs::File;
use std::io;
use std::path::Path;
use words::WordPool;

fn main()
{
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), HangmanError>
{
    init_logging(cli.log_file.as_deref())?;

    let pool = WordPool::builtin()?;
    let lives = Lives::builtin()?;
    let rng = match cli.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    info!(
        "starting with {} words, {} lives, seed {}",
        pool.len(),
        lives.len(),
        rng.seed()
    );

    let mut game = Game::new(pool, lives, rng);
    terminal::run(&mut game, !cli.no_mouse)
}

/// Logs go to `log_file` or nowhere; stderr would land on the game screen.
fn init_logging(log_file: Option<&Path>) -> Result<(), HangmanError>
{
    let mut builder = env_logger::Builder::from_default_env();
    match log_file {
        Some(path) => {
            let file = File::create(path).map_err(|source| HangmanError::LogFile {
                path: path.to_path_buf(),
                source,
            })?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None => {
            builder.target(env_logger::Target::Pipe(Box::new(io::sink())));
        }
    }
    builder.try_init()?;
    Ok(())
}
