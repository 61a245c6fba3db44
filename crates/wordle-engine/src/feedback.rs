//! Scoring a guess against a target

use crate::{
    types::{Feedback, Mark, Word},
    WORD_LENGTH,
};

/// Compute the feedback the game gives for `guess` when the hidden word is `target`.
///
/// Exact matches are resolved first and consume their letter from the target.
/// Only the remaining occurrences can turn other positions into [`Mark::Present`],
/// left to right, so a letter is never reported more often than it occurs in the target.
///
/// Neither word has to be part of any dictionary.
#[must_use]
pub fn compute_feedback(guess: Word, target: Word) -> Feedback {
    let guess = guess.letters();
    let mut remaining = target.letter_counts();
    let target = target.letters();

    let mut marks = [Mark::Absent; WORD_LENGTH];

    for (pos, mark) in marks.iter_mut().enumerate() {
        if guess[pos] == target[pos] {
            *mark = Mark::Correct;
            remaining[guess[pos].index()] -= 1;
        }
    }

    for (pos, mark) in marks.iter_mut().enumerate() {
        if *mark == Mark::Correct {
            continue;
        }
        let count = &mut remaining[guess[pos].index()];
        if *count > 0 {
            *mark = Mark::Present;
            *count -= 1;
        }
    }

    Feedback::new(marks)
}
