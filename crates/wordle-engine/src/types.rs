//! Value types shared by the feedback engine, the dictionary and both game loops

use crate::WORD_LENGTH;
use std::{fmt, str::FromStr};

/// Number of symbols in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// A possible letter, always normalized to uppercase ASCII, i.e. [A-Z]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Letter(u8);

impl Letter {
    /// Create a new letter
    ///
    /// Returns None if the letter is not in [a-zA-Z]
    #[must_use]
    pub const fn try_new(b: u8) -> Option<Self> {
        match b {
            b'a'..=b'z' => Some(Self(b - b'a')),
            b'A'..=b'Z' => Some(Self(b - b'A')),
            _ => None,
        }
    }

    /// Position of the letter in the alphabet, in `0..26`
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<Letter> for u8 {
    fn from(letter: Letter) -> Self {
        b'A' + letter.0
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        Self::from(u8::from(letter))
    }
}

/// A word of exactly [`WORD_LENGTH`] letters
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word([Letter; WORD_LENGTH]);

impl Word {
    /// Create a word from its letters
    #[must_use]
    pub const fn new(letters: [Letter; WORD_LENGTH]) -> Self {
        Self(letters)
    }

    /// The letters of this word, in order
    #[must_use]
    pub const fn letters(&self) -> &[Letter; WORD_LENGTH] {
        &self.0
    }

    /// The uppercase ASCII bytes of this word
    #[must_use]
    pub fn bytes(self) -> [u8; WORD_LENGTH] {
        self.0.map(u8::from)
    }

    /// Count how often every letter of the alphabet appears in this word
    #[must_use]
    pub fn letter_counts(self) -> [u8; ALPHABET_SIZE] {
        let mut counts = [0; ALPHABET_SIZE];
        for letter in self.0 {
            counts[letter.index()] += 1;
        }
        counts
    }
}

impl FromStr for Word {
    type Err = InvalidWord;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let found = s.chars().count();
        if found != WORD_LENGTH {
            return Err(InvalidWord::Length { found });
        }

        let mut letters = [Letter(0); WORD_LENGTH];
        for (slot, c) in letters.iter_mut().zip(s.chars()) {
            *slot = u8::try_from(c)
                .ok()
                .and_then(Letter::try_new)
                .ok_or(InvalidWord::Letter(c))?;
        }

        Ok(Self(letters))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = self.0.iter().copied().map(char::from).collect::<String>();
        f.pad(&word)
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({self})")
    }
}

/// A string could not be turned into a [`Word`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidWord {
    /// The string does not have exactly [`WORD_LENGTH`] characters
    Length {
        /// The number of characters that were found
        found: usize,
    },
    /// The string contains a character outside of [a-zA-Z]
    Letter(char),
}

impl fmt::Display for InvalidWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length { found } => write!(
                f,
                "Must be exactly {WORD_LENGTH} letters, but got {found}"
            ),
            Self::Letter(c) => write!(f, "'{c}' is not a letter"),
        }
    }
}

impl std::error::Error for InvalidWord {}

/// The verdict for a single letter position
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    /// The letter is not in the target, or all its occurrences are accounted for.
    ///
    /// This corresponds to the gray result in the game
    Absent,
    /// The letter is in the target, but on a different position
    ///
    /// This corresponds to the yellow result in the game
    Present,
    /// The letter is in the target on exactly this position
    ///
    /// This corresponds to the green result in the game
    Correct,
}

impl Mark {
    /// Single character marker used for plain text output
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Absent => 'X',
            Self::Present => 'Y',
            Self::Correct => 'G',
        }
    }
}

/// The per-position verdicts of one guess against a target
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// Create feedback from the individual marks
    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// Feedback for a guess that is equal to the target
    #[must_use]
    pub const fn solved() -> Self {
        Self([Mark::Correct; WORD_LENGTH])
    }

    /// Check if every position is [`Mark::Correct`]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&m| m == Mark::Correct)
    }

    /// The marks, one per letter position
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marks = self.0.iter().map(|m| m.symbol()).collect::<String>();
        f.pad(&marks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_try_new() {
        assert_eq!(Letter::try_new(b'a'), Some(Letter(0)));
        assert_eq!(Letter::try_new(b'z'), Some(Letter(25)));
        assert_eq!(Letter::try_new(b'A'), Some(Letter(0)));
        assert_eq!(Letter::try_new(b'Z'), Some(Letter(25)));
        assert_eq!(Letter::try_new(b' '), None);
        assert_eq!(Letter::try_new(b'0'), None);
        assert_eq!(Letter::try_new(b'.'), None);
    }

    #[test]
    fn test_letter_into() {
        assert_eq!(u8::from(Letter(0)), b'A');
        assert_eq!(u8::from(Letter(25)), b'Z');
        assert_eq!(char::from(Letter::try_new(b'q').unwrap()), 'Q');
    }

    #[test]
    fn test_word_is_uppercased() {
        let word = "cRaNe".parse::<Word>().unwrap();
        assert_eq!(word.to_string(), "CRANE");
        assert_eq!(word.bytes(), *b"CRANE");
        assert_eq!(word, "CRANE".parse().unwrap());
    }

    #[test]
    fn test_word_wrong_length() {
        assert_eq!(
            "cran".parse::<Word>(),
            Err(InvalidWord::Length { found: 4 })
        );
        assert_eq!(
            "cranes".parse::<Word>(),
            Err(InvalidWord::Length { found: 6 })
        );
        assert_eq!("".parse::<Word>(), Err(InvalidWord::Length { found: 0 }));
    }

    #[test]
    fn test_word_invalid_letter() {
        assert_eq!("cr4ne".parse::<Word>(), Err(InvalidWord::Letter('4')));
        assert_eq!("cr ne".parse::<Word>(), Err(InvalidWord::Letter(' ')));
        // counted by characters, not bytes
        assert_eq!("cräne".parse::<Word>(), Err(InvalidWord::Letter('ä')));
    }

    #[test]
    fn test_letter_counts() {
        let counts = "allOY".parse::<Word>().unwrap().letter_counts();
        assert_eq!(counts[0], 1);
        assert_eq!(counts[usize::from(b'L' - b'A')], 2);
        assert_eq!(counts[usize::from(b'O' - b'A')], 1);
        assert_eq!(counts[usize::from(b'Y' - b'A')], 1);
        assert_eq!(counts.iter().map(|&c| usize::from(c)).sum::<usize>(), 5);
    }

    #[test]
    fn test_word_ordering_is_alphabetical() {
        let mut words = ["slate", "crane", "plate", "crate"]
            .map(|w| w.parse::<Word>().unwrap())
            .to_vec();
        words.sort();
        let words = words.iter().map(ToString::to_string).collect::<Vec<_>>();
        assert_eq!(words, ["CRANE", "CRATE", "PLATE", "SLATE"]);
    }

    #[test]
    fn test_feedback_display() {
        let feedback = Feedback::new([
            Mark::Correct,
            Mark::Present,
            Mark::Absent,
            Mark::Absent,
            Mark::Correct,
        ]);
        assert_eq!(feedback.to_string(), "GYXXG");
        assert!(!feedback.is_solved());
        assert!(Feedback::solved().is_solved());
        assert_eq!(Feedback::solved().to_string(), "GGGGG");
    }
}
