//! A game played by a human

use crate::{
    dictionary::Dictionary,
    feedback::compute_feedback,
    types::{Feedback, InvalidWord, Word},
    MAX_ATTEMPTS, WORD_LENGTH,
};
use smallvec::SmallVec;
use std::fmt::{self, Display};

/// Where a human game stands
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the next guess
    Playing,
    /// The target was guessed
    Won {
        /// The number of accepted guesses, including the winning one
        attempts: u32,
    },
    /// All attempts were used without guessing the target
    Lost,
}

/// An accepted guess and its feedback
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Turn {
    /// The normalized guess
    pub guess: Word,
    /// What the game answered
    pub feedback: Feedback,
}

/// Why a guess was not accepted
///
/// A rejected guess never counts against the attempt limit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The guess does not have [`WORD_LENGTH`] characters
    WrongLength {
        /// The number of characters that were entered
        found: usize,
    },
    /// The guess is not a word of the dictionary
    NotInDictionary(String),
    /// The game is already over
    Finished,
}

impl Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { .. } => write!(f, "Must be exactly {WORD_LENGTH} letters."),
            Self::NotInDictionary(word) => {
                write!(f, "'{word}' not found in dictionary. Try again.")
            }
            Self::Finished => f.pad("The game is already over."),
        }
    }
}

impl std::error::Error for Rejection {}

/// Check a raw line of input and turn it into a dictionary word
///
/// Surrounding whitespace is ignored and the input is case-insensitive.
///
/// # Errors
///
/// [`Rejection::WrongLength`] or [`Rejection::NotInDictionary`]
pub fn validate_guess(dictionary: &Dictionary, input: &str) -> Result<Word, Rejection> {
    let input = input.trim();
    let word = input.parse::<Word>().map_err(|e| match e {
        InvalidWord::Length { found } => Rejection::WrongLength { found },
        InvalidWord::Letter(_) => Rejection::NotInDictionary(input.to_uppercase()),
    })?;

    if dictionary.contains(word) {
        Ok(word)
    } else {
        Err(Rejection::NotInDictionary(word.to_string()))
    }
}

/// A game where the guesses come from a player
#[derive(Debug)]
pub struct Game<'a> {
    dictionary: &'a Dictionary,
    target: Word,
    max_attempts: u32,
    attempts: u32,
    state: GameState,
    turns: SmallVec<[Turn; MAX_ATTEMPTS as usize]>,
}

impl<'a> Game<'a> {
    /// Start a new game against `target`
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, target: Word, max_attempts: u32) -> Self {
        let state = if max_attempts == 0 {
            GameState::Lost
        } else {
            GameState::Playing
        };
        Self {
            dictionary,
            target,
            max_attempts,
            attempts: 0,
            state,
            turns: SmallVec::new(),
        }
    }

    /// Submit a raw guess
    ///
    /// # Errors
    ///
    /// Returns a [`Rejection`] if the guess is invalid or the game is over.
    /// The attempt is not consumed in that case.
    pub fn submit(&mut self, input: &str) -> Result<Turn, Rejection> {
        if self.state != GameState::Playing {
            return Err(Rejection::Finished);
        }

        let guess = validate_guess(self.dictionary, input).map_err(|rejection| {
            tracing::debug!(input, %rejection, "guess rejected");
            rejection
        })?;

        self.attempts += 1;
        let feedback = compute_feedback(guess, self.target);
        if feedback.is_solved() {
            self.state = GameState::Won {
                attempts: self.attempts,
            };
        } else if self.attempts >= self.max_attempts {
            self.state = GameState::Lost;
        }

        let turn = Turn { guess, feedback };
        self.turns.push(turn);
        Ok(turn)
    }

    /// The current state
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Check if no more guesses are accepted
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state != GameState::Playing
    }

    /// The hidden word
    #[must_use]
    pub const fn target(&self) -> Word {
        self.target
    }

    /// Number of accepted guesses so far
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// The attempt limit of this game
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// All accepted guesses so far
    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark::{Absent as X, Correct as G, Present as Y};

    fn word(w: &str) -> Word {
        w.parse().unwrap()
    }

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["crane", "slate", "trace", "grate", "plate"]).unwrap()
    }

    #[test]
    fn test_validate_guess() {
        let dictionary = dictionary();
        assert_eq!(validate_guess(&dictionary, " crane\n"), Ok(word("crane")));
        assert_eq!(validate_guess(&dictionary, "TrAcE"), Ok(word("trace")));
        assert_eq!(
            validate_guess(&dictionary, "cran"),
            Err(Rejection::WrongLength { found: 4 })
        );
        assert_eq!(
            validate_guess(&dictionary, "crate"),
            Err(Rejection::NotInDictionary(String::from("CRATE")))
        );
        assert_eq!(
            validate_guess(&dictionary, "cr4ne"),
            Err(Rejection::NotInDictionary(String::from("CR4NE")))
        );
    }

    #[test]
    fn test_rejections_do_not_consume_attempts() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, word("trace"), 2);

        for input in ["", "cr", "cranes", "crate", "12345"] {
            assert!(game.submit(input).is_err(), "{input:?}");
        }
        assert_eq!(game.attempts(), 0);
        assert_eq!(game.state(), GameState::Playing);
        assert!(game.turns().is_empty());

        let turn = game.submit("crane").unwrap();
        assert_eq!(turn.guess, word("crane"));
        assert_eq!(*turn.feedback.marks(), [Y, G, G, X, G]);
        assert_eq!(game.attempts(), 1);

        assert!(game.submit("slat").is_err());
        assert_eq!(game.attempts(), 1);
        assert_eq!(game.state(), GameState::Playing);
    }

    #[test]
    fn test_win() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, word("trace"), 6);

        let _ = game.submit("slate").unwrap();
        let turn = game.submit("trace").unwrap();
        assert!(turn.feedback.is_solved());
        assert_eq!(game.state(), GameState::Won { attempts: 2 });
        assert!(game.is_over());
        assert_eq!(game.submit("crane"), Err(Rejection::Finished));
        assert_eq!(game.turns().len(), 2);
    }

    #[test]
    fn test_win_on_last_attempt() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, word("trace"), 2);

        let _ = game.submit("slate").unwrap();
        let _ = game.submit("trace").unwrap();
        assert_eq!(game.state(), GameState::Won { attempts: 2 });
    }

    #[test]
    fn test_loss() {
        let dictionary = dictionary();
        let mut game = Game::new(&dictionary, word("trace"), 3);

        for guess in ["crane", "slate", "grate"] {
            assert!(!game.is_over());
            let _ = game.submit(guess).unwrap();
        }
        assert_eq!(game.state(), GameState::Lost);
        assert_eq!(game.attempts(), game.max_attempts());
        assert_eq!(game.submit("trace"), Err(Rejection::Finished));
        assert_eq!(game.target(), word("trace"));
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            Rejection::WrongLength { found: 3 }.to_string(),
            "Must be exactly 5 letters."
        );
        assert_eq!(
            Rejection::NotInDictionary(String::from("CRATE")).to_string(),
            "'CRATE' not found in dictionary. Try again."
        );
    }
}
