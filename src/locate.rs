use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;

use crate::index::{normalize_word, SubtitleIndex};

/// How many candidate start times a search reports.
pub const MAX_RESULTS: usize = 3;

/// A candidate start time with its accumulated confidence score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredStart {
    pub seconds: u32,
    pub score: f64,
}

/// Collect each query word's candidate timestamp list, in query order.
/// Words absent from the track contribute an empty list, not an error.
pub fn lookup(index: &SubtitleIndex, quote: &str) -> Vec<Vec<u32>> {
    quote
        .split_whitespace()
        .map(|word| index.candidates(&normalize_word(word)).to_vec())
        .collect()
}

/// Rank the most likely start times for a quote.
///
/// Every timestamp in the track starts at score zero, then each occurrence
/// of a query word adds `1 / len(candidate list)` to its block's timestamp.
/// A word spoken once in the whole film is worth a full point; filler words
/// spread their point thin across all their occurrences.
pub fn find_start_times(index: &SubtitleIndex, quote: &str) -> Vec<ScoredStart> {
    let candidates = lookup(index, quote);
    debug!(
        "Quote of {} words matched candidate lists of sizes {:?}",
        candidates.len(),
        candidates.iter().map(Vec::len).collect::<Vec<_>>()
    );
    score_candidates(index.seeds(), &candidates)
}

/// Accumulate candidate-list weights into a table seeded from every known
/// timestamp, and keep the top results.
///
/// The table is seeded before scoring so that a quote with no matches still
/// yields a well-defined (all-zero) ranking. Ties break on the earlier
/// timestamp.
pub fn score_candidates(seeds: &[u32], candidates: &[Vec<u32>]) -> Vec<ScoredStart> {
    let mut table: Vec<ScoredStart> = seeds
        .iter()
        .map(|&seconds| ScoredStart {
            seconds,
            score: 0.0,
        })
        .collect();

    let slots: HashMap<u32, usize> = seeds
        .iter()
        .enumerate()
        .map(|(slot, &seconds)| (seconds, slot))
        .collect();

    for list in candidates {
        if list.is_empty() {
            continue;
        }
        let weight = 1.0 / list.len() as f64;
        for timestamp in list {
            // Candidate lists are built from the same blocks that seeded the
            // table, so every timestamp must already have a slot
            debug_assert!(slots.contains_key(timestamp), "unseeded timestamp {}", timestamp);
            if let Some(&slot) = slots.get(timestamp) {
                table[slot].score += weight;
            }
        }
    }

    table.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.seconds.cmp(&b.seconds))
    });
    table.truncate(MAX_RESULTS);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::SubtitleIndex;

    fn two_block_index() -> SubtitleIndex {
        SubtitleIndex::build(
            "1\n00:00:05,000 --> 00:00:07,000\nHello world\n\n2\n00:00:10,000 --> 00:00:12,000\nHello again\n",
        )
    }

    #[test]
    fn test_lookup_preserves_query_order_and_absent_words() {
        let index = two_block_index();
        let lists = lookup(&index, "world hello nowhere");
        assert_eq!(lists, vec![vec![5], vec![5, 10], vec![]]);
    }

    #[test]
    fn test_lookup_normalizes_query_words() {
        let index = two_block_index();
        let lists = lookup(&index, "Hello, WORLD!");
        assert_eq!(lists, vec![vec![5, 10], vec![5]]);
    }

    #[test]
    fn test_rare_words_outweigh_common_ones() {
        // "world" occurs once, "hello" twice; the block holding both wins
        let results = score_candidates(&[5, 10], &[vec![5, 10], vec![5]]);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].seconds, 5);
        assert!((results[0].score - 1.5).abs() < 1e-9);
        assert_eq!(results[1].seconds, 10);
        assert!((results[1].score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_top_three_from_larger_table() {
        let seeds = [3, 8, 15, 21, 40];
        let candidates = vec![vec![8], vec![8, 15], vec![21]];
        let results = score_candidates(&seeds, &candidates);

        assert_eq!(results.len(), MAX_RESULTS);
        assert_eq!(results[0].seconds, 8);
        assert!((results[0].score - 1.5).abs() < 1e-9);
        assert_eq!(results[1].seconds, 21);
        assert!((results[1].score - 1.0).abs() < 1e-9);
        assert_eq!(results[2].seconds, 15);
        assert!((results[2].score - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_zero_matches_rank_earliest_first() {
        let seeds = [30, 5, 12, 50];
        let results = score_candidates(&seeds, &[vec![], vec![]]);

        assert_eq!(results.len(), MAX_RESULTS);
        assert!(results.iter().all(|r| r.score == 0.0));
        assert_eq!(
            results.iter().map(|r| r.seconds).collect::<Vec<_>>(),
            vec![5, 12, 30]
        );
    }

    #[test]
    fn test_repeated_occurrences_each_contribute() {
        // One word spoken three times in the same block: 3 * (1/3) = 1.0
        let results = score_candidates(&[5, 10], &[vec![5, 5, 5]]);
        assert_eq!(results[0].seconds, 5);
        assert!((results[0].score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_fewer_seeds_than_max_results() {
        let results = score_candidates(&[7], &[vec![7]]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].seconds, 7);
    }

    #[test]
    fn test_find_start_times_end_to_end() {
        let index = two_block_index();
        let results = find_start_times(&index, "Hello world");

        assert_eq!(results[0].seconds, 5);
        assert!((results[0].score - 1.5).abs() < 1e-9);
        assert_eq!(results[1].seconds, 10);
        assert!((results[1].score - 0.5).abs() < 1e-9);
    }
}
