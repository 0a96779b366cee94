//! Approximate one- and two-word covers for rolls the exact search could not
//! solve.
//!
//! Results from here do not necessarily use every letter of the roll and are
//! always reported as approximate.

use crate::candidates::WordId;
use crate::config::FallbackThresholds;
use crate::dictionary::WordIndex;
use crate::letters::LetterMultiset;

/// Share of the roll's letters that `usage` accounts for.
fn coverage(roll: &LetterMultiset, usage: &LetterMultiset) -> f64 {
    if roll.is_empty() {
        return 0.0;
    }
    roll.covered_by(usage) as f64 / roll.len() as f64
}

/// Collects up to `max_results` approximate covers.
///
/// Single words using at least `single_word_coverage` of the roll come
/// first, then pairs of distinct words that share a letter and together
/// cover at least `pair_coverage`. Each unordered pair is reported once.
pub fn approximate_covers(
    candidates: &[WordId],
    index: &WordIndex,
    roll: &LetterMultiset,
    thresholds: &FallbackThresholds,
    max_results: usize,
) -> Vec<Vec<WordId>> {
    let mut results = Vec::new();
    if max_results == 0 {
        return results;
    }

    for &word_id in candidates {
        let entry = index.get(word_id);
        if coverage(roll, &entry.letters) >= thresholds.single_word_coverage {
            results.push(vec![word_id]);
            if results.len() >= max_results {
                return results;
            }
        }
    }

    for (position, &first_id) in candidates.iter().enumerate() {
        let first = index.get(first_id);
        for &second_id in &candidates[position + 1..] {
            let second = index.get(second_id);
            if !first.letter_set.intersects(&second.letter_set) {
                continue;
            }
            let usage = first.letters.union_sum(&second.letters);
            if coverage(roll, &usage) >= thresholds.pair_coverage {
                results.push(vec![first_id, second_id]);
                if results.len() >= max_results {
                    return results;
                }
            }
        }
    }

    results
}
