//! Picking the next guess

use crate::{dictionary::Dictionary, filter::CandidateSet, types::Word};

/// Deterministic guess selection
///
/// The first round plays the opening word, every later round plays the first remaining candidate.
/// Given the same dictionary and target, a solver therefore always plays the same sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Strategy {
    opening: Option<Word>,
}

impl Strategy {
    /// Create a strategy that opens with `opening`, but only if it is part of the dictionary
    #[must_use]
    pub fn new(dictionary: &Dictionary, opening: Option<Word>) -> Self {
        let opening = opening.filter(|&word| dictionary.contains(word));
        if opening.is_none() {
            tracing::debug!("no opening word in the dictionary, starting with its first entry");
        }
        Self { opening }
    }

    /// The opening word that will be played in the first round, if any
    #[must_use]
    pub const fn opening(&self) -> Option<Word> {
        self.opening
    }

    /// Pick the guess for the 1-based `round`
    ///
    /// In the first round the candidates are the whole dictionary,
    /// so without an opening word this falls back to the first dictionary entry.
    /// Returns `None` only if `candidates` is empty.
    #[must_use]
    pub fn next_guess(&self, candidates: &CandidateSet, round: u32) -> Option<Word> {
        match self.opening {
            Some(opening) if round <= 1 => Some(opening),
            _ => candidates.first(),
        }
    }
}
