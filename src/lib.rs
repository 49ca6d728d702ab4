// src/lib.rs

pub mod core;
pub mod error;
pub mod persistence;

pub use crate::core::classify::Thresholds;
pub use crate::core::engine::{EnrichmentStats, RankingEngine};
pub use crate::core::frequency::FrequencyIndex;
pub use crate::core::types::{Dictionary, Rank, Tier, WordEntry, UNRANKED};
pub use crate::error::{Result, VocabError};
