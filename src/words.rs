//! Word list loading.
//!
//! A word list is a plain text file with one word per line. Each line is
//! stripped of surrounding whitespace. Blank lines and repeated words are
//! kept unless [`LoadOptions`] asks otherwise: an empty entry can be a
//! deliberate free square, so the loader only reports them.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// Filters applied while building a [`WordPool`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Drop lines that are empty after stripping
    pub skip_blank: bool,
    /// Keep only the first occurrence of each word
    pub dedupe: bool,
}

/// The candidate words every card is sampled from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Read a word list from disk.
    pub fn from_file<P: AsRef<Path>>(path: P, options: LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::WordList {
            path: path.to_path_buf(),
            source,
        })?;
        let pool = Self::parse(&contents, options);
        log::info!("loaded {} words from {}", pool.len(), path.display());
        Ok(pool)
    }

    /// Build a pool from word-list text, one word per line.
    pub fn parse(contents: &str, options: LoadOptions) -> Self {
        let mut seen = HashSet::new();
        let mut blank = 0usize;
        let mut duplicates = 0usize;
        let mut words = Vec::new();

        for line in contents.lines() {
            let word = line.trim();
            if word.is_empty() {
                if options.skip_blank {
                    continue;
                }
                blank += 1;
            }
            if !seen.insert(word) {
                if options.dedupe {
                    continue;
                }
                duplicates += 1;
            }
            words.push(word.to_owned());
        }

        if blank > 0 {
            log::warn!("word list contains {} blank entries; they will appear as empty squares", blank);
        }
        if duplicates > 0 {
            log::warn!("word list contains {} duplicate entries; a card may repeat a word", duplicates);
        }

        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl From<Vec<String>> for WordPool {
    fn from(words: Vec<String>) -> Self {
        Self::new(words)
    }
}

impl<'a> From<&[&'a str]> for WordPool {
    fn from(words: &[&'a str]) -> Self {
        Self::new(words.iter().map(|w| w.to_string()).collect())
    }
}
