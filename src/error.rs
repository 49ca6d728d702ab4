//! Custom error types for the vocabulary ranking crate.

use crate::core::types::Rank;
use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum VocabError {
    /// The frequency corpus could not be opened, read, or decoded.
    #[error("failed to read frequency list: {0}")]
    CorpusRead(#[source] std::io::Error),

    /// The dictionary file could not be opened or read.
    #[error("failed to read dictionary: {0}")]
    DictionaryRead(#[source] std::io::Error),

    /// The dictionary is not the expected JSON shape. This includes an
    /// entry missing its source-word field; downstream ordering assumes
    /// every entry has one.
    #[error("invalid dictionary document: {0}")]
    DictionaryParse(#[source] serde_json::Error),

    /// The updated dictionary could not be written out. The destination
    /// file is left as it was.
    #[error("failed to write dictionary: {0}")]
    DictionaryWrite(#[source] std::io::Error),

    /// Tier boundaries must satisfy beginner < intermediate < advanced.
    #[error("thresholds must be strictly increasing, got {beginner}/{intermediate}/{advanced}")]
    InvalidThresholds {
        beginner: Rank,
        intermediate: Rank,
        advanced: Rank,
    },
}

/// A convenience `Result` alias using the crate's error type.
pub type Result<T> = std::result::Result<T, VocabError>;
