use crate::core::classify::Thresholds;
use crate::core::frequency::FrequencyIndex;
use crate::core::order::sort_by_rank;
use crate::core::types::{Dictionary, Tier, UNRANKED};

/// Per-run tally of how the dictionary split across the tiers.
/// Returned by value from the enrichment pass; never process-wide state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichmentStats {
    pub beginner: usize,
    pub intermediate: usize,
    pub advanced: usize,
    pub expert: usize,
    /// Entries whose word never appears in the corpus. These are tagged
    /// expert on the entry itself but tallied here, not under `expert`.
    pub not_found: usize,
    pub total: usize,
}

impl EnrichmentStats {
    fn count(&mut self, tier: Tier) {
        match tier {
            Tier::Beginner => self.beginner += 1,
            Tier::Intermediate => self.intermediate += 1,
            Tier::Advanced => self.advanced += 1,
            Tier::Expert => self.expert += 1,
        }
    }

    /// Sum of every bucket. Always equals `total`: each entry lands in
    /// exactly one of the four tiers or in `not_found`.
    pub fn tallied(&self) -> usize {
        self.beginner + self.intermediate + self.advanced + self.expert + self.not_found
    }
}

/// The difficulty-ranking engine: a frequency index plus the tier
/// boundaries, driving one batch pass over a dictionary document.
pub struct RankingEngine {
    index: FrequencyIndex,
    thresholds: Thresholds,
}

impl RankingEngine {
    pub fn new(index: FrequencyIndex, thresholds: Thresholds) -> Self {
        Self { index, thresholds }
    }

    /// Tags every entry with its difficulty and frequency rank, in place.
    /// Words absent from the corpus get the expert tier and the unranked
    /// sentinel. Entries are never added, dropped, or moved here, and
    /// re-running overwrites the previous tags.
    pub fn enrich(&self, dictionary: &mut Dictionary) -> EnrichmentStats {
        let mut stats = EnrichmentStats::default();

        for entry in &mut dictionary.words {
            let rank = self.index.rank_of(&entry.swedish);
            let tier = self.thresholds.classify(rank);

            entry.difficulty = Some(tier);
            entry.frequency_rank = Some(rank.unwrap_or(UNRANKED));

            match rank {
                Some(_) => stats.count(tier),
                None => stats.not_found += 1,
            }
            stats.total += 1;
        }

        stats
    }

    /// Full pass: enrich every entry, then put the most common words first.
    pub fn run(&self, dictionary: &mut Dictionary) -> EnrichmentStats {
        let stats = self.enrich(dictionary);
        sort_by_rank(&mut dictionary.words);
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::WordEntry;
    use serde_json::Map;

    const CORPUS: &str = "och 912449\natt 659914\ndet 587566\n";

    fn entry(word: &str) -> WordEntry {
        WordEntry {
            swedish: word.to_string(),
            difficulty: None,
            frequency_rank: None,
            extra: Map::new(),
        }
    }

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary {
            words: words.iter().map(|w| entry(w)).collect(),
            extra: Map::new(),
        }
    }

    fn engine(thresholds: Thresholds) -> RankingEngine {
        let index = FrequencyIndex::from_reader(CORPUS.as_bytes()).unwrap();
        RankingEngine::new(index, thresholds)
    }

    #[test]
    fn enrich_tags_ranked_and_unranked_entries() {
        let engine = engine(Thresholds::default());
        let mut dict = dictionary(&["det", "xyzzy"]);
        let stats = engine.enrich(&mut dict);

        assert_eq!(dict.words[0].difficulty, Some(Tier::Beginner));
        assert_eq!(dict.words[0].frequency_rank, Some(3));
        assert_eq!(dict.words[1].difficulty, Some(Tier::Expert));
        assert_eq!(dict.words[1].frequency_rank, Some(UNRANKED));

        assert_eq!(stats.beginner, 1);
        assert_eq!(stats.not_found, 1);
        assert_eq!(stats.expert, 0);
        assert_eq!(stats.total, 2);
    }

    #[test]
    fn lookup_normalizes_case_like_the_loader() {
        let engine = engine(Thresholds::default());
        let mut dict = dictionary(&["OCH"]);
        engine.enrich(&mut dict);
        assert_eq!(dict.words[0].frequency_rank, Some(1));
    }

    #[test]
    fn every_entry_lands_in_exactly_one_bucket() {
        // Tight thresholds so the three ranked words spread across tiers.
        let engine = engine(Thresholds::new(1, 2, 3).unwrap());
        let mut dict = dictionary(&["och", "att", "det", "fika", "lagom"]);
        let stats = engine.enrich(&mut dict);

        assert_eq!(stats.beginner, 1);
        assert_eq!(stats.intermediate, 1);
        assert_eq!(stats.advanced, 1);
        assert_eq!(stats.not_found, 2);
        assert_eq!(stats.tallied(), stats.total);
        assert_eq!(stats.total, 5);
    }

    #[test]
    fn enrich_does_not_reorder_entries() {
        let engine = engine(Thresholds::default());
        let mut dict = dictionary(&["det", "och", "att"]);
        engine.enrich(&mut dict);
        let order: Vec<&str> = dict.words.iter().map(|e| e.swedish.as_str()).collect();
        assert_eq!(order, ["det", "och", "att"]);
    }

    #[test]
    fn run_puts_the_most_common_words_first() {
        let engine = engine(Thresholds::default());
        let mut dict = dictionary(&["xyzzy", "det", "och"]);
        engine.run(&mut dict);
        let order: Vec<&str> = dict.words.iter().map(|e| e.swedish.as_str()).collect();
        assert_eq!(order, ["och", "det", "xyzzy"]);
    }

    #[test]
    fn rerunning_on_enriched_output_does_not_drift() {
        let engine = engine(Thresholds::default());
        let mut dict = dictionary(&["xyzzy", "det", "och"]);
        let first = engine.run(&mut dict);
        let tagged: Vec<_> = dict
            .words
            .iter()
            .map(|e| (e.swedish.clone(), e.difficulty, e.frequency_rank))
            .collect();

        let second = engine.run(&mut dict);
        let retagged: Vec<_> = dict
            .words
            .iter()
            .map(|e| (e.swedish.clone(), e.difficulty, e.frequency_rank))
            .collect();

        assert_eq!(first, second);
        assert_eq!(tagged, retagged);
    }
}
