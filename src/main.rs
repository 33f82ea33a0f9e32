//! Terminal Wordle - CLI
//!
//! Reads guesses from stdin and prints tile feedback to stdout.
//! Exits with status 1 when every guess is used without finding the word.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_cli::{
    core::Scoring,
    game::{DEFAULT_MAX_GUESSES, DEFAULT_WORD_LENGTH, Game, GameConfig, Session, Status},
    output::{Palette, TileRenderer},
    wordlists::{
        DEFAULT_WORDS_URL, DailySource, FixedSource, RandomSource, RemoteSource, WordSource,
    },
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "A CLI adaptation of Wordle: guess the hidden word, type 'stop' to give up",
    version,
    author
)]
struct Cli {
    /// Word source: 'daily' (default), 'random', 'remote', or path to a word list file
    #[arg(short, long, default_value = "daily")]
    source: String,

    /// Word list URL used by '--source remote'
    #[arg(long, default_value = DEFAULT_WORDS_URL)]
    url: String,

    /// Play this exact word instead of asking a word source
    #[arg(long, conflicts_with = "source")]
    word: Option<String>,

    /// Number of letters in the word
    #[arg(short, long, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Number of guesses allowed
    #[arg(short = 'g', long, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Duplicate-letter rule for feedback
    #[arg(long, value_enum, default_value_t = Scoring::Standard)]
    scoring: Scoring,

    /// Draw tiles as [X] (correct), (X) (present) and plain letters instead of colors
    #[arg(long)]
    no_color: bool,

    /// Log more to stderr (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = GameConfig::new(cli.length, cli.max_guesses).with_scoring(cli.scoring);
    config.validate()?;

    let source = word_source(&cli)?;
    let solution = source
        .current_word(config.word_length)
        .context("could not choose a solution word")?;

    let mut session = Session::new(solution, config)?;
    let mut game = Game::new(
        io::stdin().lock(),
        io::stdout().lock(),
        TileRenderer::new(palette(cli.no_color)),
    );
    let status = game.play(&mut session).context("game aborted")?;

    info!(?status, guesses = session.guesses_used(), "game over");
    Ok(exit_code(status))
}

/// Log to stderr so the game grid on stdout stays clean
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("warn,wordle_cli={level}"))),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Select the word source based on --word and --source
///
/// - "daily": Word of the day from the embedded list
/// - "random": Random word from the embedded list
/// - "remote": Random word from the list at --url
/// - "<path>": Random word from a custom word list file
fn word_source(cli: &Cli) -> Result<Box<dyn WordSource>> {
    if let Some(word) = &cli.word {
        info!("using word from the command line");
        return Ok(Box::new(FixedSource::new(word.clone())));
    }

    info!(source = %cli.source, "selecting word source");
    let source: Box<dyn WordSource> = match cli.source.as_str() {
        "daily" => Box::new(DailySource::new()),
        "random" => Box::new(RandomSource::embedded()),
        "remote" => Box::new(RemoteSource::new(cli.url.clone())),
        path => Box::new(
            RandomSource::from_file(path)
                .with_context(|| format!("failed to load word list '{path}'"))?,
        ),
    };
    Ok(source)
}

/// Plain tiles on request or when NO_COLOR is set; otherwise always emit
/// colors, even when stdout is not a terminal
fn palette(no_color: bool) -> Palette {
    if no_color || std::env::var_os("NO_COLOR").is_some() {
        Palette::Plain
    } else {
        colored::control::set_override(true);
        Palette::Color
    }
}

fn exit_code(status: Status) -> ExitCode {
    match status {
        Status::Lost => ExitCode::FAILURE,
        Status::Won | Status::Quit | Status::InProgress => ExitCode::SUCCESS,
    }
}
