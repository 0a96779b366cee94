//! Bounded backtracking search for letter-exact covers.
//!
//! Key points:
//! - Iterative depth-first search over an explicit stack, no recursion
//! - Each frame decides one candidate: skip it, or use it if its letters fit
//! - Chosen words live in an arena of parent links shared between frames
//! - Words are taken in candidate order, so each cover is found exactly once
//! - Timeout and result cap are checked before every frame

use std::time::Duration;

use crate::candidates::WordId;
use crate::clock::Clock;
use crate::config::Limits;
use crate::dictionary::{WordIndex, MIN_WORD_LEN};
use crate::letters::LetterMultiset;

/// A sequence of words whose letters add up exactly to the roll.
pub type Cover = Vec<WordId>;

/// Why the search stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// Every branch was explored; the covers found are all there are.
    Exhausted,
    /// The timeout expired first.
    TimedOut,
    /// `max_solutions` covers were collected.
    LimitReached,
}

impl SearchStatus {
    /// True if the search ran out of budget before finishing.
    pub fn is_budget_exhausted(&self) -> bool {
        !matches!(self, SearchStatus::Exhausted)
    }
}

/// Result of one search: the covers found and why it stopped.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    pub covers: Vec<Cover>,
    pub status: SearchStatus,
    /// Number of frames popped off the stack.
    pub frames: u64,
    pub elapsed: Duration,
}

/// A chosen word and the link to the word chosen before it.
#[derive(Clone, Copy)]
struct Link {
    word_id: WordId,
    parent: Option<usize>,
}

/// A node of the search tree.
///
/// Only the chosen-word chain is shared between frames, through the link
/// arena; everything else is copied.
#[derive(Clone, Copy)]
struct Frame {
    /// Letters still to be covered.
    remaining: LetterMultiset,
    /// Index of the next candidate to decide on.
    cursor: usize,
    /// Last chosen word, as an index into the link arena.
    chosen: Option<usize>,
    /// Arena length when this frame was pushed.
    arena_mark: usize,
}

/// Walks the link chain back to the root and returns the words in the order
/// they were chosen.
fn collect_cover(links: &[Link], mut chosen: Option<usize>) -> Cover {
    let mut cover = Vec::new();
    while let Some(link_index) = chosen {
        let link = links[link_index];
        cover.push(link.word_id);
        chosen = link.parent;
    }
    cover.reverse();
    cover
}

/// Finds covers of `roll` using each word of `candidates` at most once.
///
/// Returns whatever was collected when the timeout expires or
/// `limits.max_solutions` covers are found; neither is an error. An empty
/// roll has no covers.
pub fn search(
    candidates: &[WordId],
    index: &WordIndex,
    roll: &LetterMultiset,
    limits: &Limits,
    clock: &impl Clock,
) -> SearchOutcome {
    let mut covers = Vec::new();
    let mut frames = 0u64;

    if roll.is_empty() {
        return SearchOutcome {
            covers,
            status: SearchStatus::Exhausted,
            frames,
            elapsed: clock.elapsed(),
        };
    }

    let mut links: Vec<Link> = Vec::new();
    let mut status = SearchStatus::Exhausted;
    let mut search_stack = vec![Frame {
        remaining: *roll,
        cursor: 0,
        chosen: None,
        arena_mark: 0,
    }];

    while let Some(frame) = search_stack.pop() {
        if clock.elapsed() >= limits.timeout {
            status = SearchStatus::TimedOut;
            break;
        }
        if covers.len() >= limits.max_solutions {
            status = SearchStatus::LimitReached;
            break;
        }
        frames += 1;

        // links past the mark belong to subtrees that are fully explored
        links.truncate(frame.arena_mark);

        if frame.remaining.is_empty() {
            let cover = collect_cover(&links, frame.chosen);
            log::trace!("found cover of {} words", cover.len());
            covers.push(cover);
            continue;
        }

        // too few letters left for any word
        if frame.remaining.len() < MIN_WORD_LEN {
            continue;
        }

        let Some(&word_id) = candidates.get(frame.cursor) else {
            continue;
        };

        // skip branch: explored after the use branch
        search_stack.push(Frame {
            cursor: frame.cursor + 1,
            arena_mark: links.len(),
            ..frame
        });

        // use branch: only if the word fits what is left
        if let Some(remaining) = frame.remaining.checked_sub(&index.get(word_id).letters) {
            links.push(Link {
                word_id,
                parent: frame.chosen,
            });
            search_stack.push(Frame {
                remaining,
                cursor: frame.cursor + 1,
                chosen: Some(links.len() - 1),
                arena_mark: links.len(),
            });
        }
    }

    let elapsed = clock.elapsed();
    log::debug!(
        "search over {} candidates: {} covers, {} frames, {:?} ({:?})",
        candidates.len(),
        covers.len(),
        frames,
        status,
        elapsed
    );

    SearchOutcome {
        covers,
        status,
        frames,
        elapsed,
    }
}
