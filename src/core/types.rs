// src/core/types.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 1-based position of a word in the frequency corpus. Lower is more common.
pub type Rank = u32;

/// Rank given to words that never appear in the frequency corpus, so they
/// sort after every ranked word.
pub const UNRANKED: Rank = 999_999;

/// Coarse difficulty of a word, ordered by increasing rarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Tier {
    /// The lowercase name stored in the document's "difficulty" field.
    pub fn name(self) -> &'static str {
        match self {
            Tier::Beginner => "beginner",
            Tier::Intermediate => "intermediate",
            Tier::Advanced => "advanced",
            Tier::Expert => "expert",
        }
    }
}

/// A single vocabulary entry. `swedish` is the lookup key into the
/// frequency corpus; whatever else the app stores on the entry
/// (translation, category, ...) rides along untouched in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordEntry {
    pub swedish: String,
    /// Set by enrichment. Overwritten, never accumulated, on re-runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Tier>,
    #[serde(rename = "frequencyRank", skip_serializing_if = "Option::is_none")]
    pub frequency_rank: Option<Rank>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The dictionary document: the ordered word list plus whatever sibling
/// metadata the file carries at top level. A file without a "words" key
/// is an empty dictionary, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dictionary {
    #[serde(default)]
    pub words: Vec<WordEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
