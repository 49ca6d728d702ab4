// src/core/classify.rs
use crate::core::types::{Rank, Tier};
use crate::error::{Result, VocabError};

/// Rank boundaries separating the four difficulty tiers. A rank at or
/// below `beginner` is a beginner word, and so on; everything past
/// `advanced`, and every word missing from the corpus, is expert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub beginner: Rank,
    pub intermediate: Rank,
    pub advanced: Rank,
}

impl Thresholds {
    /// Builds a threshold triple, rejecting any that is not strictly
    /// increasing.
    pub fn new(beginner: Rank, intermediate: Rank, advanced: Rank) -> Result<Self> {
        if beginner < intermediate && intermediate < advanced {
            Ok(Self {
                beginner,
                intermediate,
                advanced,
            })
        } else {
            Err(VocabError::InvalidThresholds {
                beginner,
                intermediate,
                advanced,
            })
        }
    }

    /// Maps a frequency rank to its tier. Total over every rank and over
    /// the no-rank case; no side effects.
    pub fn classify(&self, rank: Option<Rank>) -> Tier {
        match rank {
            Some(r) if r <= self.beginner => Tier::Beginner,
            Some(r) if r <= self.intermediate => Tier::Intermediate,
            Some(r) if r <= self.advanced => Tier::Advanced,
            _ => Tier::Expert,
        }
    }
}

impl Default for Thresholds {
    /// The boundaries the dictionary ships with: the top 3 000 corpus
    /// words are beginner material, the top 10 000 intermediate, the top
    /// 20 000 advanced.
    fn default() -> Self {
        Self {
            beginner: 3_000,
            intermediate: 10_000,
            advanced: 20_000,
        }
    }
}
