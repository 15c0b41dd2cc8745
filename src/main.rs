//! Word Quest - CLI
//!
//! Word-guessing rounds with constraint-based suggestions and spaced review
//! of missed words, in a TUI or on the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use wordquest_engine::{
    commands::{
        Session, SessionStores, SimulationConfig, SolveConfig, open_store, review_report,
        run_simple, run_simulation, run_suggest, solve_word,
    },
    config::Config,
    core::Word,
    output::{
        print_review_report, print_simulation_statistics, print_solve_result, print_suggestions,
    },
    review::ReviewScheduler,
    round::ProgressLog,
    suggest::Suggester,
    wordlists::{builtin_words, load_from_file, playable_words},
};

const LOG_ENV: &str = "WORDQUEST_LOG";
const DEFAULT_DATA_DIR: &str = ".wordquest";

#[derive(Parser)]
#[command(
    name = "wordquest",
    about = "Word-guessing game with suggestions and spaced review",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory for the review queue and shuffle bags (default: .wordquest)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Word list file, one word per line (default: built-in list)
    #[arg(short, long, global = true)]
    wordlist: Option<PathBuf>,

    /// Only play words of this length
    #[arg(short, long, global = true)]
    length: Option<usize>,

    /// Seed for reproducible word picks and tie-breaking
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Debug logging on stderr (overrides WORDQUEST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without the TUI
    Simple,

    /// Rank words for a history like `crane=--Y-G slate=G----`
    Suggest {
        /// History entries as GUESS=FEEDBACK (G/Y/- or emoji)
        entries: Vec<String>,
    },

    /// Self-play a specific target word using the top suggestion
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and scores per turn
        #[arg(short = 'D', long)]
        details: bool,
    },

    /// Self-play every pool word in parallel and report statistics
    Simulate {
        /// Limit number of targets
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Show the review queue
    Review,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Load the word list from `--wordlist`, or the built-in one
fn load_words(path: Option<&Path>) -> Result<Vec<Word>> {
    let words = match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to load word list {}", path.display()))?,
        None => builtin_words(),
    };
    anyhow::ensure!(!words.is_empty(), "word list is empty");
    Ok(words)
}

fn rng_for(seed: Option<u64>) -> StdRng {
    seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let data_dir = cli
        .data_dir
        .clone()
        .or_else(|| config.data_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
    debug!(data_dir = %data_dir.display(), "starting");

    let words = load_words(cli.wordlist.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            use wordquest_engine::interactive::{App, run_tui};

            let session = open_session(&config, &words, cli.length, &data_dir, cli.seed)?;
            run_tui(App::new(session))
        }
        Commands::Simple => {
            let mut session = open_session(&config, &words, cli.length, &data_dir, cli.seed)?;
            run_simple(&mut session)
        }
        Commands::Suggest { entries } => {
            let suggester = Suggester::new(config.suggest);
            let mut rng = rng_for(cli.seed);
            let suggestions = run_suggest(&entries, &words, cli.length, &suggester, &mut rng)?;
            print_suggestions(&suggestions);
            Ok(())
        }
        Commands::Solve { word, details } => {
            let suggester = Suggester::new(config.suggest);
            let mut rng = rng_for(cli.seed);
            let solve_config = SolveConfig {
                target: word,
                max_guesses: config.max_guesses,
            };
            let result = solve_word(&solve_config, &words, &suggester, &mut rng)?;
            print_solve_result(&result, details);
            Ok(())
        }
        Commands::Simulate { count } => {
            let pool = playable_words(&words, cli.length);
            println!("Simulating {} targets...", count.unwrap_or(pool.len()).min(pool.len()));

            let sim_config = SimulationConfig {
                max_guesses: config.max_guesses,
                limit: count,
                seed: cli.seed.unwrap_or(0),
                show_progress: true,
            };
            let stats = run_simulation(&Suggester::new(config.suggest), &pool, &pool, &sim_config);
            print_simulation_statistics(&stats);
            Ok(())
        }
        Commands::Review => {
            let scheduler = ReviewScheduler::load(open_store(&data_dir), config.review.clone());
            let progress = ProgressLog::new(open_store(&data_dir));
            let pool = playable_words(&words, cli.length);
            print_review_report(&review_report(&scheduler, &progress, &pool));
            Ok(())
        }
    }
}

fn open_session(
    config: &Config,
    words: &[Word],
    length: Option<usize>,
    data_dir: &Path,
    seed: Option<u64>,
) -> Result<Session> {
    let stores = SessionStores::open(data_dir);
    let session = Session::new(config, words, length, stores, seed);
    anyhow::ensure!(
        !session.pool.is_empty(),
        "no playable words{}",
        length.map(|l| format!(" of length {l}")).unwrap_or_default()
    );
    Ok(session)
}
