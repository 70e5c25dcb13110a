//! Daily Solver - CLI
//!
//! Constraint-tracking solver for daily word games with TUI and CLI modes.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use daily_solver::{
    commands::{
        BenchmarkConfig, WatchConfig, load_observations, parse_guess, run_benchmark, run_simple, run_watch,
        suggest,
    },
    engine::Session,
    games::Game,
    logging::{init_logging, resolve_level},
    output::{print_benchmark_result, print_suggest_result, print_watch_update},
    wordlists::{self, CandidateList},
};
use log::info;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "daily_solver",
    about = "Constraint-tracking solver for daily word games (Wordle, Loldle)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Game: wordle (default) or loldle
    #[arg(short, long, global = true, default_value = "wordle")]
    game: String,

    /// Newline-delimited candidate list; required for games without a built-in list
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace); overrides DAILY_SOLVER_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI grid (default)
    Play,

    /// Simple line-based mode without TUI
    Simple,

    /// Suggest the next guess from known feedback
    Suggest {
        /// Guesses with feedback, e.g. crane=-YG--
        guesses: Vec<String>,

        /// JSON file with an array of {position, letter, status} observations
        #[arg(short, long)]
        observations: Option<PathBuf>,
    },

    /// Follow a live game through its exported state file
    Watch {
        /// Game state file to poll
        #[arg(short, long)]
        state: PathBuf,

        /// Seconds between polls
        #[arg(short, long, default_value = "2")]
        interval: f64,

        /// Stop after this many polls
        #[arg(short = 'n', long)]
        polls: Option<usize>,
    },

    /// Play the solver against words from the list
    Benchmark {
        /// Test only the first N words
        #[arg(short, long)]
        limit: Option<usize>,

        /// Test N randomly sampled words instead
        #[arg(long)]
        sample: Option<usize>,

        /// Seed for --sample
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Guesses allowed per game
        #[arg(long, default_value = "6")]
        max_guesses: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(resolve_level(cli.log_level.as_deref()));

    let game = Game::from_name(&cli.game).ok_or_else(|| {
        let known: Vec<&str> = Game::ALL.iter().map(|g| g.name()).collect();
        anyhow!("unknown game '{}'; expected one of: {}", cli.game, known.join(", "))
    })?;
    let candidates = Arc::new(
        wordlists::for_game(game, cli.wordlist.as_deref())
            .with_context(|| format!("loading the {game} word list"))?,
    );
    info!("{game}: {} candidates", candidates.len());

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(candidates),
        Commands::Simple => run_simple(&mut Session::new(candidates)),
        Commands::Suggest { guesses, observations } => run_suggest_command(candidates, &guesses, observations),
        Commands::Watch {
            state,
            interval,
            polls,
        } => run_watch_command(game, candidates, state, interval, polls),
        Commands::Benchmark {
            limit,
            sample,
            seed,
            max_guesses,
        } => {
            let config = BenchmarkConfig {
                limit,
                sample,
                seed,
                max_guesses,
                show_progress: true,
            };
            run_benchmark_command(&candidates, &config)
        }
    }
}

fn run_suggest_command(
    candidates: Arc<CandidateList>,
    guesses: &[String],
    observations: Option<PathBuf>,
) -> Result<()> {
    let guesses = guesses
        .iter()
        .map(|g| parse_guess(g))
        .collect::<Result<Vec<_>>>()?;
    let observations = observations
        .map(|path| load_observations(&path))
        .transpose()?
        .unwrap_or_default();

    let mut session = Session::new(candidates);
    let result = suggest(&mut session, &guesses, &observations)?;
    print_suggest_result(&result);
    Ok(())
}

fn run_watch_command(
    game: Game,
    candidates: Arc<CandidateList>,
    state: PathBuf,
    interval: f64,
    polls: Option<usize>,
) -> Result<()> {
    let interval = Duration::try_from_secs_f64(interval).context("--interval must be a non-negative number")?;
    let config = WatchConfig {
        interval,
        max_polls: polls,
        ..WatchConfig::new(state)
    };

    println!("Watching {} for {game} (Ctrl-C to stop)", config.state_file.display());
    run_watch(game, candidates, &config, print_watch_update)?;
    Ok(())
}

fn run_benchmark_command(candidates: &Arc<CandidateList>, config: &BenchmarkConfig) -> Result<()> {
    match config.sample {
        Some(n) => println!("Running benchmark on {n} sampled words (seed {})...", config.seed),
        None => println!(
            "Running benchmark on {} words...",
            config.limit.map_or(candidates.len(), |l| l.min(candidates.len()))
        ),
    }

    let result = run_benchmark(candidates, config)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_play_command(candidates: Arc<CandidateList>) -> Result<()> {
    use daily_solver::interactive::{App, run_tui};

    let app = App::new(Session::new(candidates));
    run_tui(app)
}
