//! The automated solving loop

use crate::{
    dictionary::Dictionary,
    feedback::compute_feedback,
    filter::CandidateSet,
    strategy::Strategy,
    types::{Feedback, Word},
    DEFAULT_OPENING, MAX_ATTEMPTS,
};
use smallvec::SmallVec;

/// Settings for a solving session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// The number of guesses the solver may make
    pub max_attempts: u32,
    /// The word to open with, used only if it is part of the dictionary
    pub opening: Option<Word>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            opening: DEFAULT_OPENING.parse().ok(),
        }
    }
}

/// Where a solving session stands
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolverState {
    /// More guesses will be made
    Guessing,
    /// The target was guessed
    Won {
        /// The number of guesses it took, including the winning one
        attempts: u32,
    },
    /// All attempts were used without guessing the target
    Lost,
    /// No candidate is consistent with the feedback.
    ///
    /// The target is not in the dictionary, or the feedback was inconsistent
    Stuck,
}

impl SolverState {
    /// Check if the session has ended
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Guessing)
    }
}

/// The record of a single solver guess
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Round {
    /// 1-based number of this guess
    pub attempt: u32,
    /// The word that was played
    pub guess: Word,
    /// What the game answered
    pub feedback: Feedback,
    /// How many candidates are left after the feedback was applied
    ///
    /// A winning round leaves exactly the guess
    pub remaining: usize,
}

/// A solving session that deduces a hidden target from feedback
#[derive(Clone, Debug)]
pub struct Solver {
    strategy: Strategy,
    candidates: CandidateSet,
    target: Word,
    max_attempts: u32,
    attempts: u32,
    state: SolverState,
    history: SmallVec<[Round; MAX_ATTEMPTS as usize]>,
}

impl Solver {
    /// Start a new session against `target`, with every dictionary word as a candidate
    ///
    /// The target does not need to be part of the dictionary,
    /// but the solver will get stuck if it is not.
    #[must_use]
    pub fn new(dictionary: &Dictionary, target: Word, config: &SolverConfig) -> Self {
        let state = if config.max_attempts == 0 {
            SolverState::Lost
        } else {
            SolverState::Guessing
        };

        Self {
            strategy: Strategy::new(dictionary, config.opening),
            candidates: CandidateSet::new(dictionary),
            target,
            max_attempts: config.max_attempts,
            attempts: 0,
            state,
            history: SmallVec::new(),
        }
    }

    /// Play a single round
    ///
    /// Returns `None` without doing anything once the session has ended.
    pub fn step(&mut self) -> Option<Round> {
        if self.state.is_terminal() {
            return None;
        }

        let Some(guess) = self.strategy.next_guess(&self.candidates, self.attempts + 1) else {
            // candidates are checked after every round, this only happens for an empty start
            self.state = SolverState::Stuck;
            return None;
        };

        self.attempts += 1;
        let feedback = compute_feedback(guess, self.target);

        if feedback.is_solved() {
            self.candidates = std::iter::once(guess).collect();
            self.state = SolverState::Won {
                attempts: self.attempts,
            };
        } else {
            self.candidates = self.candidates.filter(guess, feedback);
            // an empty set means the target can never be found, which takes precedence over the limit
            if self.candidates.is_empty() {
                tracing::warn!(%guess, %feedback, "no candidate matches the feedback");
                self.state = SolverState::Stuck;
            } else if self.attempts >= self.max_attempts {
                self.state = SolverState::Lost;
            }
        }
        let remaining = self.candidates.len();

        tracing::debug!(
            attempt = self.attempts,
            %guess,
            %feedback,
            remaining,
            "solver round"
        );

        let round = Round {
            attempt: self.attempts,
            guess,
            feedback,
            remaining,
        };
        self.history.push(round);
        Some(round)
    }

    /// Play rounds until the session ends and return the final state
    pub fn run(&mut self) -> SolverState {
        while self.step().is_some() {}
        self.state
    }

    /// The current state
    #[must_use]
    pub const fn state(&self) -> SolverState {
        self.state
    }

    /// The hidden word this session is solving for
    #[must_use]
    pub const fn target(&self) -> Word {
        self.target
    }

    /// Number of guesses made so far
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// The words that are still consistent with all feedback
    ///
    /// After a win, this is only the winning guess.
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// All rounds played so far
    #[must_use]
    pub fn history(&self) -> &[Round] {
        &self.history
    }
}
