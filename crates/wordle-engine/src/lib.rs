/*!
Building blocks for a Wordle-style word-guessing game and an automated solver.

The core is [`compute_feedback`], which scores a guess against a hidden target,
and [`CandidateSet::filter`], which keeps only the words that would have produced
the same feedback had they been the target.
On top of that, [`Solver`] plays a deterministic game against a known target
and [`Game`] validates and scores the guesses of a human player.

# Example

```rust
use wordle_engine::{compute_feedback, Dictionary, Mark, Solver, SolverConfig, SolverState, Word};

let dictionary = Dictionary::from_words(["crane", "slate", "trace", "grate", "plate"]).unwrap();
let target: Word = "trace".parse().unwrap();

// 'c' is in the word but misplaced, 'n' is not in the word at all
let feedback = compute_feedback("crane".parse().unwrap(), target);
assert_eq!(
    feedback.marks(),
    &[Mark::Present, Mark::Correct, Mark::Correct, Mark::Absent, Mark::Correct]
);
assert_eq!(feedback.to_string(), "YGGXG");

// The solver opens with 'crane', which leaves 'trace' as the only candidate
let mut solver = Solver::new(&dictionary, target, &SolverConfig::default());
assert_eq!(solver.run(), SolverState::Won { attempts: 2 });
```
*/

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

pub mod dictionary;
pub mod feedback;
pub mod filter;
pub mod game;
pub mod solver;
pub mod strategy;
pub mod types;

pub use dictionary::{Dictionary, DictionaryError};
pub use feedback::compute_feedback;
pub use filter::{is_consistent, CandidateSet};
pub use game::{validate_guess, Game, GameState, Rejection, Turn};
pub use solver::{Round, Solver, SolverConfig, SolverState};
pub use strategy::Strategy;
pub use types::{Feedback, InvalidWord, Letter, Mark, Word};

include!(concat!(env!("OUT_DIR"), "/word_length.rs"));

/// Default number of guesses per game
pub const MAX_ATTEMPTS: u32 = 6;

/// Default opening guess of the solver, chosen for its common letters
pub const DEFAULT_OPENING: &str = "CRANE";
