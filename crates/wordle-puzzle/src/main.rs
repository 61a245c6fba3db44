//! Play a word-guessing puzzle, or let the solver find the word
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![warn(
    bad_style,
    dead_code,
    improper_ctypes,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    no_mangle_generic_items,
    non_shorthand_field_patterns,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unsafe_code,
    unused_allocation,
    unused_comparisons,
    unused_crate_dependencies,
    unused_extern_crates,
    unused_import_braces,
    unused_parens,
    unused_qualifications,
    unused_results,
    unused,
    while_true
)]

use clap::{value_parser, Arg, ArgAction, Command};
use console::{style, StyledObject, Term};
use eyre::{eyre, Result, WrapErr};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use std::{
    io::{self, BufRead, IsTerminal},
    path::{Path, PathBuf},
    str::FromStr,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use wordle_engine::{
    Dictionary, Game, GameState, Mark, Solver, SolverConfig, SolverState, Word, DEFAULT_OPENING,
    MAX_ATTEMPTS, WORD_LENGTH,
};

fn main() -> Result<()> {
    let opts = parse_opts();
    init_logging(opts.verbose);

    let dictionary = load_dictionary(&opts.word_list)?;
    info!(words = dictionary.len(), "dictionary loaded");

    let mut rng = opts
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

    run(&opts, &dictionary, &mut rng)
}

fn load_dictionary(path: &Path) -> Result<Dictionary> {
    Dictionary::load(path)
        .wrap_err_with(|| format!("The dictionary '{}' could not be loaded.", path.display()))
}

#[derive(Debug)]
struct Opts {
    word_list: PathBuf,
    mode: Option<Mode>,
    max_attempts: MaxAttempts,
    opening: Option<Word>,
    target: Option<Word>,
    seed: Option<u64>,
    once: bool,
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Play,
    Solve,
}

#[derive(Clone, Copy, Debug)]
struct MaxAttempts(u32);

impl FromStr for MaxAttempts {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map_err(|e| e.to_string()).and_then(|n| {
            if (1..=100).contains(&n) {
                Ok(Self(n))
            } else {
                Err(String::from("The value must be in [1..=100]"))
            }
        })
    }
}

fn parse_opts() -> Opts {
    let matches = Command::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_about(None)
        .arg(
            Arg::new("word-list")
                .value_name("WORD_LIST")
                .value_parser(value_parser!(PathBuf))
                .required(false)
                .help("The word list to use")
                .long_help(concat!(
                    "The word list to use. ",
                    "The list must contain one word per line. ",
                    "Lines that are not words of the configured length are ignored. ",
                    "The order of the list decides the order in which the solver tries words."
                ))
                .default_value("words.txt"),
        )
        .arg(
            Arg::new("mode")
                .help("Start a mode directly instead of showing the menu")
                .short('m')
                .long("mode")
                .value_parser(["play", "solve"]),
        )
        .arg(
            Arg::new("max-attempts")
                .help("Number of guesses per game")
                .short('n')
                .long("max-attempts")
                .value_parser(str::parse::<MaxAttempts>)
                .default_value("6"),
        )
        .arg(
            Arg::new("opening")
                .help("The first guess of the solver [default: CRANE]")
                .long_help(concat!(
                    "The first guess of the solver, CRANE by default. ",
                    "If the word is not part of the word list, ",
                    "the solver starts with the first word of the list instead."
                ))
                .long("opening")
                .value_parser(str::parse::<Word>),
        )
        .arg(
            Arg::new("target")
                .help("Use this word instead of picking a random one")
                .short('t')
                .long("target")
                .value_parser(str::parse::<Word>),
        )
        .arg(
            Arg::new("seed")
                .help("Seed for picking the hidden word")
                .short('s')
                .long("seed")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("once")
                .help("Play a single round and exit")
                .long("once")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .help("Print more diagnostics, can be repeated")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count),
        )
        .get_matches();

    let word_list = matches
        .get_one::<PathBuf>("word-list")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("words.txt"));
    let mode = matches
        .get_one::<String>("mode")
        .map(|mode| match mode.as_str() {
            "solve" => Mode::Solve,
            _ => Mode::Play,
        });
    let max_attempts = matches
        .get_one::<MaxAttempts>("max-attempts")
        .copied()
        .unwrap_or(MaxAttempts(MAX_ATTEMPTS));
    let opening = matches
        .get_one::<Word>("opening")
        .copied()
        .or_else(|| DEFAULT_OPENING.parse().ok());
    let target = matches.get_one::<Word>("target").copied();
    let seed = matches.get_one::<u64>("seed").copied();
    let once = matches.get_flag("once");
    let verbose = matches.get_count("verbose");

    Opts {
        word_list,
        mode,
        max_attempts,
        opening,
        target,
        seed,
        once,
        verbose,
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(opts: &Opts, dictionary: &Dictionary, rng: &mut StdRng) -> Result<()> {
    let mut mode = opts.mode;

    loop {
        let current = match mode {
            Some(mode) => mode,
            None => match main_menu() {
                Some(mode) => mode,
                None => break,
            },
        };

        match current {
            Mode::Play => play_game(opts, dictionary, rng)?,
            Mode::Solve => solve_game(opts, dictionary, rng)?,
        }

        if opts.once {
            return Ok(());
        }

        match choose(
            "What next?",
            &[
                "Play Again (Same Mode)",
                "Change Mode (Main Menu)",
                "Exit Game",
            ],
        ) {
            Some(0) => mode = Some(current),
            Some(1) => mode = None,
            _ => break,
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn main_menu() -> Option<Mode> {
    println!();
    println!("{}", style("=== WORDLE ===").bold());
    match choose(
        "Choose a mode",
        &[
            "Play Game (You guess)",
            "Run Solver (Computer guesses)",
            "Exit",
        ],
    )? {
        0 => Some(Mode::Play),
        1 => Some(Mode::Solve),
        _ => None,
    }
}

/// Check if prompts can be shown, otherwise input is read line by line from stdin
fn is_interactive() -> bool {
    io::stdin().is_terminal() && Term::stderr().is_term()
}

/// Read the next non-blank line, trimmed
///
/// Returns `None` at the end of the input or if reading fails.
fn next_line<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut line = String::new();
    loop {
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => return None,
            Ok(_) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_owned());
                }
            }
            Err(e) => {
                warn!(error = %e, "could not read from the input");
                return None;
            }
        }
    }
}

/// Turn a 1-based menu entry into an index into the items
fn parse_choice(line: &str, items: usize) -> Option<usize> {
    line.parse::<usize>()
        .ok()
        .filter(|n| (1..=items).contains(n))
        .map(|n| n - 1)
}

/// Show a selection menu, a failed read is treated like choosing to exit
fn choose(prompt: &str, items: &[&str]) -> Option<usize> {
    if !is_interactive() {
        println!("{prompt}");
        for (n, item) in items.iter().enumerate() {
            println!("{}. {item}", n + 1);
        }
        let line = next_line(&mut io::stdin().lock())?;
        let choice = parse_choice(&line, items.len());
        if choice.is_none() {
            warn!(%line, "not a menu entry");
        }
        return choice;
    }

    match dialoguer::Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
    {
        Ok(selection) => Some(selection),
        Err(e) => {
            warn!(error = %e, "could not read the menu selection");
            None
        }
    }
}

fn pick_target(dictionary: &Dictionary, fixed: Option<Word>, rng: &mut StdRng) -> Result<Word> {
    if let Some(target) = fixed {
        if !dictionary.contains(target) {
            warn!(%target, "the target is not part of the dictionary");
        }
        return Ok(target);
    }

    dictionary
        .words()
        .choose(rng)
        .copied()
        .ok_or_else(|| eyre!("The dictionary does not contain any words."))
}

fn play_game(opts: &Opts, dictionary: &Dictionary, rng: &mut StdRng) -> Result<()> {
    let target = pick_target(dictionary, opts.target, rng)?;
    let mut game = Game::new(dictionary, target, opts.max_attempts.0);

    println!();
    println!("{}", style("--- PLAYER MODE ---").bold());
    println!("Guess the {WORD_LENGTH}-letter word! (Must be in dictionary)");

    if is_interactive() {
        play_round(&mut game, prompt_guess);
    } else {
        let mut stdin = io::stdin().lock();
        play_round(&mut game, |prompt| {
            println!("{prompt}:");
            next_line(&mut stdin)
        });
    }

    println!();
    match game.state() {
        GameState::Won { attempts } => println!(
            "{} (in {attempts} of {} attempts)",
            style(format!("VICTORY! Word: {target}")).green().bold(),
            game.max_attempts()
        ),
        GameState::Lost | GameState::Playing => {
            println!("{}", style(format!("DEFEAT. Word: {target}")).red().bold());
        }
    }

    Ok(())
}

fn prompt_guess(prompt: &str) -> Option<String> {
    match dialoguer::Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
    {
        Ok(input) => Some(input),
        Err(e) => {
            warn!(error = %e, "could not read the guess");
            None
        }
    }
}

/// Ask for guesses until the game is over, or until no more input arrives
///
/// A round without input is abandoned with the game still `Playing`.
fn play_round<F>(game: &mut Game<'_>, mut next_guess: F)
where
    F: FnMut(&str) -> Option<String>,
{
    while !game.is_over() {
        println!();
        let prompt = format!("Attempt {}/{}", game.attempts() + 1, game.max_attempts());
        let Some(input) = next_guess(&prompt) else {
            warn!("no more input, abandoning the round");
            return;
        };

        match game.submit(&input) {
            Ok(turn) => {
                let result = turn
                    .guess
                    .letters()
                    .iter()
                    .zip(turn.feedback.marks())
                    .map(|(&letter, &mark)| paint(mark, char::from(letter)).to_string())
                    .collect::<String>();
                println!("Result: {result}");
            }
            Err(rejection) => println!("{}", style(format!("Error: {rejection}")).red()),
        }
    }
}

fn solve_game(opts: &Opts, dictionary: &Dictionary, rng: &mut StdRng) -> Result<()> {
    let target = pick_target(dictionary, opts.target, rng)?;
    let config = SolverConfig {
        max_attempts: opts.max_attempts.0,
        opening: opts.opening,
    };
    let mut solver = Solver::new(dictionary, target, &config);

    println!();
    println!("{}", style("--- SOLVER MODE ---").bold());
    println!("{}", style(format!("Target Word (Hidden): {target}")).cyan());
    println!();

    while let Some(round) = solver.step() {
        let marks = round
            .feedback
            .marks()
            .iter()
            .map(|&mark| paint(mark, mark.symbol()).to_string())
            .collect::<String>();
        println!(
            "Solver Guess {}: {} -> {marks}",
            round.attempt,
            style(round.guess).bold()
        );
        if opts.verbose > 0 {
            let noun = if round.remaining == 1 { "candidate" } else { "candidates" };
            println!("  {} {noun} remain", round.remaining);
        }
    }

    println!();
    match solver.state() {
        SolverState::Won { attempts } => println!(
            "{}",
            style(format!("Solver found the word in {attempts} attempts!")).green()
        ),
        SolverState::Stuck => println!(
            "{}",
            style(format!(
                "Solver stuck! No words match the feedback. The word was {target}."
            ))
            .red()
        ),
        SolverState::Lost | SolverState::Guessing => println!(
            "{}",
            style(format!("Solver failed. The word was {target}.")).red()
        ),
    }

    Ok(())
}

fn paint<D>(mark: Mark, item: D) -> StyledObject<D> {
    let item = style(item).bold();
    match mark {
        Mark::Correct => item.green(),
        Mark::Present => item.yellow(),
        Mark::Absent => item.dim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["crane", "slate", "trace", "grate", "plate"]).unwrap()
    }

    fn target() -> Word {
        "trace".parse().unwrap()
    }

    #[test]
    fn test_load_error_names_the_file() {
        let err = load_dictionary(Path::new("does/not/exist.txt")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The dictionary 'does/not/exist.txt' could not be loaded."
        );
        assert!(err.chain().count() >= 2);
    }

    #[test]
    fn test_next_line_skips_blank_lines() {
        let mut input = Cursor::new("\n  \n crane \r\nslate\n\n");
        assert_eq!(next_line(&mut input).as_deref(), Some("crane"));
        assert_eq!(next_line(&mut input).as_deref(), Some("slate"));
        assert_eq!(next_line(&mut input), None);
        assert_eq!(next_line(&mut input), None);
    }

    #[test]
    fn test_next_line_without_trailing_newline() {
        let mut input = Cursor::new("trace");
        assert_eq!(next_line(&mut input).as_deref(), Some("trace"));
        assert_eq!(next_line(&mut input), None);
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("1", 3), Some(0));
        assert_eq!(parse_choice("3", 3), Some(2));
        assert_eq!(parse_choice("0", 3), None);
        assert_eq!(parse_choice("4", 3), None);
        assert_eq!(parse_choice("play", 3), None);
    }

    #[test]
    fn test_round_ends_on_empty_input() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, target(), 6);
        let mut input = Cursor::new("");

        play_round(&mut game, |_| next_line(&mut input));
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.attempts(), 0);
    }

    #[test]
    fn test_round_is_abandoned_when_input_runs_out() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, target(), 6);
        let mut input = Cursor::new("CRANE\n\ncrate\nSLATE\n");

        play_round(&mut game, |_| next_line(&mut input));
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.attempts(), 2);
        assert_eq!(game.turns().len(), 2);
    }

    #[test]
    fn test_round_from_piped_input_is_won() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, target(), 6);
        let mut input = Cursor::new("crane\ntrace\nslate\n");
        let mut prompts = Vec::new();

        play_round(&mut game, |prompt| {
            prompts.push(prompt.to_owned());
            next_line(&mut input)
        });
        assert_eq!(game.state(), GameState::Won { attempts: 2 });
        assert_eq!(prompts, ["Attempt 1/6", "Attempt 2/6"]);
        // the guess after the win is never read
        assert_eq!(next_line(&mut input).as_deref(), Some("slate"));
    }
}
