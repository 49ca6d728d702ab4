// src/core/frequency.rs
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::core::types::Rank;
use crate::error::{Result, VocabError};

/// Word-to-rank lookup built from a frequency-ordered corpus file (one
/// word per line, most common first). Trailing fields on a line, such as
/// an occurrence count, are ignored.
#[derive(Debug, Clone)]
pub struct FrequencyIndex {
    ranks: HashMap<String, Rank>,
    next_rank: Rank,
}

impl FrequencyIndex {
    pub fn new() -> Self {
        Self {
            ranks: HashMap::new(),
            next_rank: 1,
        }
    }

    /// Loads the corpus from disk. A missing or unreadable file aborts
    /// the run.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(VocabError::CorpusRead)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Builds the index from any line source. Non-UTF-8 input surfaces as
    /// a corpus read failure.
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut index = Self::new();
        for line in reader.lines() {
            let line = line.map_err(VocabError::CorpusRead)?;
            index.push_line(&line);
        }
        Ok(index)
    }

    /// Consumes one corpus line. Blank lines are skipped and do not use up
    /// a rank slot. A word seen on an earlier line keeps that earlier rank;
    /// the duplicate line still advances the counter.
    fn push_line(&mut self, line: &str) {
        let Some(word) = line.split_whitespace().next() else {
            return;
        };
        self.ranks
            .entry(word.to_lowercase())
            .or_insert(self.next_rank);
        self.next_rank += 1;
    }

    /// Looks a word up case-insensitively. `None` means the word never
    /// appears in the corpus.
    pub fn rank_of(&self, word: &str) -> Option<Rank> {
        self.ranks.get(&word.to_lowercase()).copied()
    }

    /// Number of distinct words in the index.
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}
