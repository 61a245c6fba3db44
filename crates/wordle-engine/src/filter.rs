//! Narrowing the words that can still be the target

use crate::{
    dictionary::Dictionary,
    feedback::compute_feedback,
    types::{Feedback, Word},
};

/// Check if `candidate` could be the target, given that `guess` produced `observed`
#[must_use]
pub fn is_consistent(candidate: Word, guess: Word, observed: Feedback) -> bool {
    compute_feedback(guess, candidate) == observed
}

/// The ordered words that are consistent with all feedback seen so far
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateSet(Vec<Word>);

impl CandidateSet {
    /// Start with every word of the dictionary, in dictionary order
    #[must_use]
    pub fn new(dictionary: &Dictionary) -> Self {
        Self(dictionary.words().to_vec())
    }

    /// Keep only the words that would have produced `observed` for `guess` had they been the target
    ///
    /// The relative order is preserved and `self` is left untouched.
    /// An empty result means the target was never part of this set.
    #[must_use]
    pub fn filter(&self, guess: Word, observed: Feedback) -> Self {
        Self(
            self.0
                .iter()
                .copied()
                .filter(|&candidate| is_consistent(candidate, guess, observed))
                .collect(),
        )
    }

    /// The first remaining candidate
    #[must_use]
    pub fn first(&self) -> Option<Word> {
        self.0.first().copied()
    }

    /// Test if the word is still a candidate
    #[must_use]
    pub fn contains(&self, word: Word) -> bool {
        self.0.contains(&word)
    }

    /// Number of remaining candidates
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true iff no candidate remains
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The remaining candidates in order
    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.0
    }
}

impl FromIterator<Word> for CandidateSet {
    fn from_iter<T: IntoIterator<Item = Word>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
