//! A string dictionary on top of `BalancedSet`, with line-delimited batch loading.

use crate::balanced_set::{BalancedSet, BalancedSetIter, Engine};
use crate::error::{Error, Result};
use log::{debug, info, warn};
use std::io::BufRead;

/// The outcome of a batch insert or delete.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BatchReport {
    /// Number of words that changed membership.
    pub succeeded: usize,
    /// Words that were already present on insert, or missing on delete, in input order.
    pub failed: Vec<String>,
    /// Number of blank lines skipped.
    pub rejected: usize,
}

impl BatchReport {
    /// Returns the number of lines processed.
    pub fn total(&self) -> usize {
        self.succeeded + self.failed.len() + self.rejected
    }
}

/// A set of words backed by a self-balancing binary search tree.
///
/// Words are trimmed before use. An empty word is an absent key and is rejected with
/// `Error::InvalidKey`. Duplicate inserts and deletes of missing words are not errors; they
/// return `Ok(false)`.
///
/// # Examples
///
/// ```
/// use balanced_sets::{Dictionary, Engine};
///
/// let mut dictionary = Dictionary::new(Engine::HeightBalanced);
/// assert!(dictionary.insert("apple").unwrap());
/// assert!(!dictionary.insert(" apple ").unwrap());
/// assert!(dictionary.search("apple").unwrap());
/// assert!(dictionary.insert("").is_err());
///
/// let report = dictionary.batch_insert("pear\napple\n\nfig\n".as_bytes()).unwrap();
/// assert_eq!(report.succeeded, 2);
/// assert_eq!(report.failed, vec![String::from("apple")]);
/// assert_eq!(report.rejected, 1);
/// assert_eq!(dictionary.size(), 3);
/// ```
pub struct Dictionary {
    words: BalancedSet<String>,
}

fn validate(word: &str) -> Result<&str> {
    let word = word.trim();
    if word.is_empty() {
        return Err(Error::InvalidKey);
    }
    Ok(word)
}

impl Dictionary {
    /// Constructs a new, empty `Dictionary` backed by `engine`.
    pub fn new(engine: Engine) -> Self {
        Dictionary {
            words: BalancedSet::new(engine),
        }
    }

    /// Returns the engine backing the dictionary.
    pub fn engine(&self) -> Engine {
        self.words.engine()
    }

    /// Inserts a word. Returns `Ok(false)` if the word was already present.
    pub fn insert(&mut self, word: &str) -> Result<bool> {
        let word = validate(word)?;
        let inserted = self.words.insert(word.to_string());
        if inserted {
            debug!("inserted `{}`", word);
        } else {
            debug!("`{}` already exists", word);
        }
        Ok(inserted)
    }

    /// Deletes a word. Returns `Ok(false)` if the word was not present.
    pub fn delete(&mut self, word: &str) -> Result<bool> {
        let word = validate(word)?;
        let deleted = self.words.delete(&word.to_string());
        if deleted {
            debug!("deleted `{}`", word);
        } else {
            debug!("`{}` not found", word);
        }
        Ok(deleted)
    }

    /// Checks if a word exists in the dictionary.
    pub fn search(&self, word: &str) -> Result<bool> {
        let word = validate(word)?;
        let found = self.words.search(&word.to_string());
        debug!("search `{}`: {}", word, if found { "found" } else { "not found" });
        Ok(found)
    }

    /// Returns the number of words.
    pub fn size(&self) -> usize {
        self.words.size()
    }

    /// Returns the height of the underlying tree using the engine's convention.
    pub fn height(&self) -> isize {
        self.words.height()
    }

    /// Returns the words in ascending order.
    pub fn words(&self) -> BalancedSetIter<String> {
        self.words.iter()
    }

    /// Inserts one word per line. Every line is applied on its own: duplicates and blank lines
    /// are recorded in the report and do not stop the batch. A read error stops the batch and is
    /// returned; lines before it stay inserted.
    pub fn batch_insert<R>(&mut self, reader: R) -> Result<BatchReport>
    where
        R: BufRead,
    {
        let report = self.apply_lines(reader, |dictionary, word| dictionary.insert(word))?;
        info!(
            "batch insert into {} dictionary: {} inserted, {} already present, {} blank",
            self.engine(),
            report.succeeded,
            report.failed.len(),
            report.rejected,
        );
        info!("dictionary size is now {}", self.size());
        Ok(report)
    }

    /// Deletes one word per line. Every line is applied on its own: missing words and blank lines
    /// are recorded in the report and do not stop the batch. A read error stops the batch and is
    /// returned; lines before it stay deleted.
    pub fn batch_delete<R>(&mut self, reader: R) -> Result<BatchReport>
    where
        R: BufRead,
    {
        let report = self.apply_lines(reader, |dictionary, word| dictionary.delete(word))?;
        info!(
            "batch delete from {} dictionary: {} deleted, {} not found, {} blank",
            self.engine(),
            report.succeeded,
            report.failed.len(),
            report.rejected,
        );
        Ok(report)
    }

    fn apply_lines<R, F>(&mut self, reader: R, mut op: F) -> Result<BatchReport>
    where
        R: BufRead,
        F: FnMut(&mut Dictionary, &str) -> Result<bool>,
    {
        let mut report = BatchReport::default();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            match op(self, &line) {
                Ok(true) => report.succeeded += 1,
                Ok(false) => report.failed.push(line.trim().to_string()),
                Err(Error::InvalidKey) => {
                    warn!("skipping blank line {}", index + 1);
                    report.rejected += 1;
                },
                Err(err) => return Err(err),
            }
        }
        for word in &report.failed {
            debug!("unchanged: `{}`", word);
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::{BatchReport, Dictionary};
    use crate::balanced_set::Engine;
    use crate::error::Error;
    use std::io::{self, Read};

    struct FailingReader {
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::new(io::ErrorKind::Other, "device unplugged"));
            }
            self.served = true;
            let data = b"alpha\nbeta\n";
            buf[..data.len()].copy_from_slice(data);
            Ok(data.len())
        }
    }

    #[test]
    fn test_invalid_key() {
        let mut dictionary = Dictionary::new(Engine::ColorBalanced);
        match dictionary.insert("   ") {
            Err(Error::InvalidKey) => {},
            _ => panic!("Expected an invalid key error."),
        }
        assert!(dictionary.delete("").is_err());
        assert!(dictionary.search("\t").is_err());
        assert_eq!(dictionary.size(), 0);
    }

    #[test]
    fn test_insert_delete_search() {
        let mut dictionary = Dictionary::new(Engine::HeightBalanced);
        assert!(dictionary.insert("kiwi").unwrap());
        assert!(!dictionary.insert("kiwi").unwrap());
        assert!(dictionary.search(" kiwi").unwrap());
        assert!(dictionary.delete("kiwi").unwrap());
        assert!(!dictionary.delete("kiwi").unwrap());
        assert!(!dictionary.search("kiwi").unwrap());
    }

    #[test]
    fn test_batch_insert_continues_past_duplicates() {
        let mut dictionary = Dictionary::new(Engine::ColorBalanced);
        let report = dictionary
            .batch_insert("b\na\nb\n\n  \nc\na\n".as_bytes())
            .unwrap();
        assert_eq!(
            report,
            BatchReport {
                succeeded: 3,
                failed: vec![String::from("b"), String::from("a")],
                rejected: 2,
            },
        );
        assert_eq!(report.total(), 7);
        assert_eq!(
            dictionary.words().collect::<Vec<&String>>(),
            vec!["a", "b", "c"],
        );
    }

    #[test]
    fn test_batch_delete_continues_past_missing() {
        let mut dictionary = Dictionary::new(Engine::HeightBalanced);
        dictionary.batch_insert("a\nb\nc\nd\n".as_bytes()).unwrap();
        let report = dictionary.batch_delete("a\nz\nc\n".as_bytes()).unwrap();
        assert_eq!(report.succeeded, 2);
        assert_eq!(report.failed, vec![String::from("z")]);
        assert_eq!(dictionary.size(), 2);
        assert_eq!(dictionary.height(), 1);
    }

    #[test]
    fn test_batch_read_error_keeps_applied_lines() {
        let mut dictionary = Dictionary::new(Engine::HeightBalanced);
        let reader = io::BufReader::new(FailingReader { served: false });
        match dictionary.batch_insert(reader) {
            Err(Error::IOError(_)) => {},
            _ => panic!("Expected an io error."),
        }
        assert_eq!(dictionary.size(), 2);
        assert!(dictionary.search("beta").unwrap());
    }

    #[test]
    fn test_batch_strips_carriage_returns() {
        let mut dictionary = Dictionary::new(Engine::ColorBalanced);
        let report = dictionary
            .batch_insert(io::Cursor::new("x\r\ny\r\n"))
            .unwrap();
        assert_eq!(report.succeeded, 2);
        assert!(dictionary.search("x").unwrap());
        assert_eq!(
            dictionary.words().collect::<Vec<&String>>(),
            vec!["x", "y"],
        );
    }
}
