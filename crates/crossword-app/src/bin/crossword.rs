//! Builds a crossword from a word list and optionally plays it on the terminal.
//!
//! # Usage
//!
//! ```sh
//! crossword cat tan net
//! crossword --words-file words.txt --shuffle --seed 7
//! crossword --play
//! ```
//!
//! Set `RUST_LOG=debug` to see placement decisions.

use std::{
    fs::File,
    io::{self, BufReader, Write as _},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use crossword_app::{AppError, Layout, Settings, session, words};
use crossword_game::NavigationEngine;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Words to place, in order. The demo list is used when none are given.
    #[arg(value_name = "WORD", conflicts_with = "words_file")]
    words: Vec<String>,

    /// Read words from a file, one per line.
    #[arg(short = 'f', long, value_name = "PATH")]
    words_file: Option<PathBuf>,

    /// Rows of the build grid.
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    rows: Option<u16>,

    /// Columns of the build grid.
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    cols: Option<u16>,

    /// Shuffle the word list before placing it.
    #[arg(long)]
    shuffle: bool,

    /// Seed for --shuffle. A random seed is chosen and printed when omitted.
    #[arg(long, requires = "shuffle")]
    seed: Option<u64>,

    /// Print the full grid instead of cropping it to the placed words.
    #[arg(long)]
    no_crop: bool,

    /// Start an interactive fill-in session after building.
    #[arg(long)]
    play: bool,
}

impl Args {
    fn settings(&self) -> Settings {
        let defaults = Settings::default();
        Settings {
            rows: self.rows.map_or(defaults.rows, usize::from),
            cols: self.cols.map_or(defaults.cols, usize::from),
            crop: !self.no_crop,
            shuffle_seed: self.shuffle.then(|| self.seed.unwrap_or_else(rand::random)),
            play: self.play,
        }
    }

    fn load_words(&self) -> Result<Vec<String>, AppError> {
        let word_list = if let Some(path) = &self.words_file {
            let file = File::open(path).map_err(|source| AppError::WordsFile {
                path: path.clone(),
                source,
            })?;
            words::read_words(BufReader::new(file)).map_err(|source| AppError::WordsFile {
                path: path.clone(),
                source,
            })?
        } else if self.words.is_empty() {
            words::demo_words()
        } else {
            self.words.clone()
        };
        if word_list.is_empty() {
            return Err(AppError::NoWords);
        }
        Ok(word_list)
    }
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let settings = args.settings();
    log::debug!("settings: {settings:?}");

    let mut word_list = args.load_words()?;
    let mut stdout = io::stdout().lock();
    if let Some(seed) = settings.shuffle_seed {
        writeln!(stdout, "Seed: {seed}")?;
        words::shuffle_words(&mut word_list, seed);
    }

    let layout = Layout::build(&settings, &word_list);
    write!(stdout, "{layout}")?;

    if settings.play {
        let mut engine = NavigationEngine::new(layout.grid);
        session::run(&mut engine, io::stdin().lock(), &mut stdout)?;
    }
    Ok(())
}
