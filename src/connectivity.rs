//! Interlocking check: the words of a solution must form one connected group.
//!
//! Two words are adjacent when they share at least one letter. A cover is
//! accepted only if a breadth-first walk from its first word reaches every
//! other word.

use std::collections::VecDeque;

use crate::candidates::WordId;
use crate::dictionary::WordIndex;
use crate::solver::Cover;

/// Returns true if the words of `cover` form a single connected component
/// under shared-letter adjacency.
///
/// Covers of zero or one word never interconnect and are rejected.
pub fn is_connected(cover: &[WordId], index: &WordIndex) -> bool {
    if cover.len() <= 1 {
        return false;
    }

    let letter_sets: Vec<_> = cover.iter().map(|&id| index.get(id).letter_set).collect();
    let mut visited = vec![false; cover.len()];
    let mut queue = VecDeque::from([0]);
    visited[0] = true;
    let mut reached = 1;

    while let Some(current) = queue.pop_front() {
        for (next, letters) in letter_sets.iter().enumerate() {
            if !visited[next] && letter_sets[current].intersects(letters) {
                visited[next] = true;
                reached += 1;
                queue.push_back(next);
            }
        }
    }

    reached == cover.len()
}

/// Keeps only connected covers, at most `max_accepted` of them, in the order
/// they were found.
pub fn filter_connected(covers: Vec<Cover>, index: &WordIndex, max_accepted: usize) -> Vec<Cover> {
    let found = covers.len();
    let accepted: Vec<Cover> = covers
        .into_iter()
        .filter(|cover| is_connected(cover, index))
        .take(max_accepted)
        .collect();
    log::debug!("{} of {} covers interconnect", accepted.len(), found);
    accepted
}
