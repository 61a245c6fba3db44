//! Loading and querying the list of allowed words

use crate::types::Word;
use fst::Set;
use std::{
    collections::HashSet,
    fmt::{self, Display},
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

/// The immutable list of words a game is played with
///
/// Words keep the order of the source they were loaded from,
/// membership checks go through an FST index.
pub struct Dictionary {
    words: Vec<Word>,
    index: Set<Vec<u8>>,
}

impl Dictionary {
    /// Build a dictionary from a word list
    ///
    /// Words are trimmed and uppercased. Entries that are not exactly
    /// [`WORD_LENGTH`](crate::WORD_LENGTH) ASCII letters are skipped,
    /// repeated words only keep their first position.
    ///
    /// # Errors
    ///
    /// [`DictionaryError::Empty`] if no valid word remains
    pub fn from_words<I>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut seen = HashSet::with_capacity(1024);
        let mut list = Vec::with_capacity(1024);

        for line in words {
            let line = line.as_ref().trim();
            match line.parse::<Word>() {
                Ok(word) => {
                    if seen.insert(word) {
                        list.push(word);
                    }
                }
                Err(reason) => tracing::trace!(line, %reason, "skipping dictionary entry"),
            }
        }

        if list.is_empty() {
            return Err(DictionaryError::Empty);
        }

        let mut sorted = list.clone();
        sorted.sort_unstable();
        let index = Set::from_iter(sorted.into_iter().map(Word::bytes))
            .map_err(DictionaryError::Index)?;

        tracing::debug!(words = list.len(), "dictionary ready");
        Ok(Self { words: list, index })
    }

    /// Read a dictionary with one word per line
    ///
    /// Lines that are not valid UTF-8 are skipped like any other invalid entry.
    ///
    /// # Errors
    ///
    /// [`DictionaryError::Io`] if the reader fails, [`DictionaryError::Empty`] if no valid word remains
    pub fn from_reader<R: BufRead>(reader: R, source: &Path) -> Result<Self, DictionaryError> {
        let mut lines = Vec::with_capacity(1024);
        for line in reader.split(b'\n') {
            let line = line.map_err(|source_err| DictionaryError::Io {
                path: source.to_path_buf(),
                source: source_err,
            })?;
            match String::from_utf8(line) {
                Ok(line) => lines.push(line),
                Err(_) => tracing::trace!("skipping dictionary line that is not UTF-8"),
            }
        }
        Self::from_words(lines)
    }

    /// Open and read a dictionary file
    ///
    /// # Errors
    ///
    /// [`DictionaryError::Io`] if the file is missing or unreadable, [`DictionaryError::Empty`] if no valid word remains
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading dictionary");
        let file = File::open(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), path)
    }

    /// Test if the word is part of this dictionary
    #[must_use]
    pub fn contains(&self, word: Word) -> bool {
        self.index.contains(word.bytes())
    }

    /// All words in their original order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// The first word of the dictionary
    #[must_use]
    pub fn first(&self) -> Option<Word> {
        self.words.first().copied()
    }

    /// Number of words in the dictionary, never zero
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false, kept for symmetry with [`Dictionary::len`]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("len", &self.words.len())
            .field("first", &self.first())
            .finish()
    }
}

/// A dictionary could not be built
#[derive(Debug)]
pub enum DictionaryError {
    /// The word list could not be opened or read
    Io {
        /// The file that was read
        path: PathBuf,
        /// The underlying failure
        source: io::Error,
    },
    /// The word list did not contain a single valid word
    Empty,
    /// The membership index could not be built
    Index(fst::Error),
}

impl Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, .. } => write!(f, "Could not read the word list '{}'", path.display()),
            Self::Empty => write!(
                f,
                "The word list does not contain any {}-letter word",
                crate::WORD_LENGTH
            ),
            Self::Index(_) => f.pad("Could not index the word list"),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty => None,
            Self::Index(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn word(w: &str) -> Word {
        w.parse().unwrap()
    }

    fn names(dictionary: &Dictionary) -> Vec<String> {
        dictionary.words().iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_from_words_normalizes_case() {
        let dictionary = Dictionary::from_words(["crane", "Slate", "TRACE"]).unwrap();
        assert_eq!(names(&dictionary), ["CRANE", "SLATE", "TRACE"]);
        assert!(dictionary.contains(word("slate")));
        assert!(dictionary.contains(word("SLATE")));
        assert!(!dictionary.contains(word("plate")));
    }

    #[test]
    fn test_skips_wrong_length_and_non_letters() {
        let dictionary =
            Dictionary::from_words(["ab", "crane", "cranes", "cr4ne", "", "sl te", "plate"])
                .unwrap();
        assert_eq!(names(&dictionary), ["CRANE", "PLATE"]);
    }

    #[test]
    fn test_keeps_first_occurrence_of_duplicates() {
        let dictionary = Dictionary::from_words(["slate", "crane", "SLATE", "crane"]).unwrap();
        assert_eq!(names(&dictionary), ["SLATE", "CRANE"]);
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.first(), Some(word("slate")));
    }

    #[test]
    fn test_keeps_source_order() {
        let dictionary = Dictionary::from_words(["zesty", "apple", "mango"]).unwrap();
        assert_eq!(names(&dictionary), ["ZESTY", "APPLE", "MANGO"]);
        for w in ["zesty", "apple", "mango"] {
            assert!(dictionary.contains(word(w)));
        }
    }

    #[test]
    fn test_empty_list_is_an_error() {
        let result = Dictionary::from_words(Vec::<String>::new());
        assert!(matches!(result, Err(DictionaryError::Empty)));

        let result = Dictionary::from_words(["toolong", "tiny"]);
        assert!(matches!(result, Err(DictionaryError::Empty)));
    }

    #[test]
    fn test_from_reader_trims_line_endings() {
        let input = "crane\r\nslate\n  trace  \n\nab\ngrate";
        let dictionary = Dictionary::from_reader(Cursor::new(input), Path::new("test")).unwrap();
        assert_eq!(names(&dictionary), ["CRANE", "SLATE", "TRACE", "GRATE"]);
    }

    #[test]
    fn test_from_reader_skips_invalid_utf8() {
        let input: &[u8] = b"crane\n\xff\xfe\xfd\xfc\xfb\nslate\n";
        let dictionary = Dictionary::from_reader(input, Path::new("test")).unwrap();
        assert_eq!(names(&dictionary), ["CRANE", "SLATE"]);
    }

    #[test]
    fn test_load_missing_file() {
        let path = Path::new("this/file/does/not/exist.txt");
        let err = Dictionary::load(path).unwrap_err();
        assert!(matches!(&err, DictionaryError::Io { path: p, .. } if p == path));
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("exist.txt"));
    }
}
