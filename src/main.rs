//! Wordle Eliminator - CLI
//!
//! Suggests guesses for a live game, solves known words and benchmarks the
//! solver over the word list.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use colored::Colorize;
use wordle_eliminator::{
    commands::{run_benchmark, run_play, sample_targets, solve_word},
    core::Word,
    logging,
    output::{print_benchmark_result, print_solve_report},
    solver::{GameVariant, Solver, SolverConfig, Strategy, StrategyType},
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_eliminator",
    about = "Wordle solver using per-letter constraint elimination",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: similarity (default) or random
    #[arg(short, long, global = true, default_value = "similarity")]
    strategy: String,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Game variant: 'timed' (six attempts) or 'free-form' (no limit)
    #[arg(long, global = true, default_value = "timed")]
    variant: String,

    /// Opening word, used when it is in the word list
    #[arg(short, long, global = true, default_value = "salet")]
    opening: String,

    /// Log level when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest guesses for a game you play, entering its feedback (default)
    Play,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts after each round
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of words to test, spread evenly over the word list
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

fn load_words(wordlist: &str) -> Result<Vec<Word>> {
    let words = match wordlist {
        "embedded" => words_from_slice(WORDS),
        path => load_from_file(path).map_err(|e| anyhow!("Failed to read '{path}': {e}"))?,
    };
    if words.is_empty() {
        return Err(anyhow!("Word list '{wordlist}' has no valid words"));
    }
    Ok(words)
}

fn build_config(cli: &Cli) -> Result<SolverConfig> {
    let variant = GameVariant::from_name(&cli.variant)
        .ok_or_else(|| anyhow!("Unknown variant '{}' (use timed or free-form)", cli.variant))?;
    Ok(SolverConfig::default()
        .with_opening(&cli.opening)
        .with_variant(variant))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let words = load_words(&cli.wordlist)?;
    let config = build_config(&cli)?;
    let strategy = StrategyType::from_name(&cli.strategy);
    let solver = Solver::new(strategy, &words).with_config(config);

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => play_command(&solver),
        Commands::Solve { word, verbose } => solve_command(&word, verbose, &solver),
        Commands::Benchmark { count } => {
            benchmark_command(count, &solver);
            Ok(())
        }
    }
}

fn play_command<S: Strategy>(solver: &Solver<S>) -> Result<()> {
    match run_play(solver)? {
        Some(report) => print_solve_report(&report),
        None => println!("\n👋 Bye!"),
    }
    Ok(())
}

fn solve_command<S: Strategy>(word: &str, verbose: bool, solver: &Solver<S>) -> Result<()> {
    println!("Solving {}...\n", word.to_uppercase().bright_white().bold());
    let report = solve_word(word, solver, verbose)?;
    print_solve_report(&report);
    Ok(())
}

fn benchmark_command<S: Strategy + Sync>(count: usize, solver: &Solver<S>) {
    let targets = sample_targets(solver.words(), count);
    println!(
        "Running benchmark on {} words from a list of {}...",
        targets.len(),
        solver.words().len()
    );

    let result = run_benchmark(solver, &targets, true);
    print_benchmark_result(&result);
}
