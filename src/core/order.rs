use crate::core::types::{WordEntry, UNRANKED};

/// Sorts entries so the most common words come first. The sort is stable,
/// so entries sharing a rank keep their original relative order; that
/// covers every sentinel-ranked word, which all tie at the end. An entry
/// with no rank field at all sorts with the sentinel bucket.
pub fn sort_by_rank(entries: &mut [WordEntry]) {
    entries.sort_by_key(|entry| entry.frequency_rank.unwrap_or(UNRANKED));
}
