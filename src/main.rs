//! Terminal Mastermind runner (default binary).
//!
//! Reads guesses line by line from stdin and prints colored feedback with
//! crossterm. One game per run.

use std::fs::File;
use std::io;
use std::sync::Mutex;

use anyhow::{Context, Result};
use crossterm::tty::IsTty;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mastermind::config::{Config, Invocation, DEFAULT_LOG_FILTER, USAGE};
use mastermind::core::{play, GameSession, RandomColors};
use mastermind::input::LinePrompt;
use mastermind::term::{Style, TerminalRenderer};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match Config::from_env().with_args(&args)? {
        Invocation::Play(config) => config,
        Invocation::Help => {
            println!("{USAGE}");
            return Ok(());
        }
    };

    init_logging(&config)?;
    run(&config)
}

/// Logs go to `MASTERMIND_LOG_PATH` when set; otherwise to stderr, and only
/// when `RUST_LOG` asks for them, since the terminal belongs to the game.
fn init_logging(config: &Config) -> Result<()> {
    if let Some(path) = &config.log_path {
        let file = File::options()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        let filter = EnvFilter::try_new(&config.log_filter)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

fn run(config: &Config) -> Result<()> {
    let interactive = io::stdout().is_tty();
    let style = Style {
        messages: config.lang.messages(),
        color: config.color.unwrap_or(interactive),
    };

    let mut renderer = TerminalRenderer::stdout(style);
    if config.clear_screen && interactive {
        renderer.clear_screen()?;
    }

    let mut colors = match config.seed {
        Some(seed) => RandomColors::from_seed(seed),
        None => RandomColors::from_entropy(),
    };
    info!(
        seed = ?config.seed,
        lang = config.lang.as_str(),
        color = style.color,
        "starting game"
    );
    let mut session = GameSession::new(&mut colors);

    let input = LinePrompt::new(io::stdin().lock(), io::stdout(), style.messages);
    let outcome = play(&mut session, input, &mut renderer).context("game aborted")?;

    info!(win = outcome.is_win(), turns = outcome.turns, "finished");
    Ok(())
}
