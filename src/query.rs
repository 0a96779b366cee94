//! One query end to end: candidates, exact search, interlocking check and,
//! when nothing interlocks, the approximate fallback.

use std::time::Duration;

use crate::candidates::candidates;
use crate::clock::{Clock, SystemClock};
use crate::config::SolverConfig;
use crate::connectivity::filter_connected;
use crate::dictionary::WordIndex;
use crate::fallback::approximate_covers;
use crate::letters::LetterMultiset;
use crate::solver::{search, SearchStatus};

/// How a solution was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SolutionKind {
    /// Uses every letter exactly once and interlocks.
    Exact,
    /// Found by the relaxed fallback; may leave letters unused.
    Approximate,
}

/// Words that solve (or, if approximate, nearly solve) a roll.
///
/// The words borrow from the [`WordIndex`] the query ran against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution<'a> {
    pub words: Vec<&'a str>,
    pub kind: SolutionKind,
}

impl Solution<'_> {
    pub fn is_exact(&self) -> bool {
        self.kind == SolutionKind::Exact
    }
}

/// Overall answer for a roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// At least one exact, interlocking solution exists.
    Solvable,
    /// Only approximate solutions were found.
    Approximate,
    /// The whole search space was explored and nothing was found.
    Unsolvable,
    /// Nothing was found, but the search ran out of budget first.
    Inconclusive,
}

/// Everything one query produced.
#[derive(Clone, Debug)]
pub struct Report<'a> {
    pub solutions: Vec<Solution<'a>>,
    /// How the exact search ended.
    pub status: SearchStatus,
    pub candidate_count: usize,
    pub elapsed: Duration,
}

impl<'a> Report<'a> {
    pub fn verdict(&self) -> Verdict {
        if self.solutions.iter().any(Solution::is_exact) {
            Verdict::Solvable
        } else if !self.solutions.is_empty() {
            Verdict::Approximate
        } else if self.status.is_budget_exhausted() {
            Verdict::Inconclusive
        } else {
            Verdict::Unsolvable
        }
    }

    pub fn exact(&self) -> impl Iterator<Item = &Solution<'a>> {
        self.solutions.iter().filter(|solution| solution.is_exact())
    }
}

/// Solves rolls against a borrowed, read-only word index.
///
/// A `Solver` holds no per-query state, so one instance can serve any
/// number of queries, including from several threads at once.
#[derive(Clone, Copy, Debug)]
pub struct Solver<'a> {
    index: &'a WordIndex,
    config: SolverConfig,
}

impl<'a> Solver<'a> {
    pub fn new(index: &'a WordIndex, config: SolverConfig) -> Self {
        Self { index, config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Finds solutions for `roll`, timing the search with the wall clock.
    ///
    /// `roll` is lowercased here; other validation is the caller's job.
    pub fn find_all_solutions(&self, roll: &str) -> Report<'a> {
        self.find_all_solutions_with_clock(roll, &SystemClock::start())
    }

    /// Same as [`Solver::find_all_solutions`] with an explicit clock.
    pub fn find_all_solutions_with_clock(&self, roll: &str, clock: &impl Clock) -> Report<'a> {
        let letters = LetterMultiset::from_word(&roll.to_ascii_lowercase());
        let limits = &self.config.limits;

        let candidate_ids = candidates(&letters, self.index);
        log::debug!("roll {}: {} candidate words", letters, candidate_ids.len());

        if candidate_ids.is_empty() || letters.is_empty() {
            return Report {
                solutions: Vec::new(),
                status: SearchStatus::Exhausted,
                candidate_count: 0,
                elapsed: clock.elapsed(),
            };
        }

        let outcome = search(&candidate_ids, self.index, &letters, limits, clock);
        let accepted = filter_connected(outcome.covers, self.index, limits.max_solutions);

        let (covers, kind) = if accepted.is_empty() {
            let approximate = approximate_covers(
                &candidate_ids,
                self.index,
                &letters,
                &self.config.fallback,
                limits.max_solutions,
            );
            log::debug!("fallback found {} approximate covers", approximate.len());
            (approximate, SolutionKind::Approximate)
        } else {
            (accepted, SolutionKind::Exact)
        };

        let solutions = covers
            .into_iter()
            .map(|cover| Solution {
                words: cover.into_iter().map(|id| self.index.word(id)).collect(),
                kind,
            })
            .collect();

        Report {
            solutions,
            status: outcome.status,
            candidate_count: candidate_ids.len(),
            elapsed: clock.elapsed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SteppingClock;
    use crate::config::Limits;
    use crate::dictionary::Dictionary;

    fn index(words: &[&str]) -> WordIndex {
        WordIndex::new(&Dictionary::from_words(words))
    }

    fn solve<'a>(index: &'a WordIndex, roll: &str) -> Report<'a> {
        Solver::new(index, SolverConfig::default())
            .find_all_solutions_with_clock(roll, &SteppingClock::frozen())
    }

    #[test]
    fn test_interlocking_cover_is_exact() {
        // cats + dogs + stat uses all twelve letters; cats shares s with dogs
        let index = index(&["cats", "dogs", "stat", "cat", "dog", "tat"]);
        let report = solve(&index, "CATSDOGSSTAT");
        assert_eq!(report.verdict(), Verdict::Solvable);

        let expected = LetterMultiset::from_word("catsdogsstat");
        for solution in report.exact() {
            let combined = solution
                .words
                .iter()
                .fold(LetterMultiset::EMPTY, |acc, word| {
                    acc.union_sum(&LetterMultiset::from_word(word))
                });
            assert_eq!(combined, expected);
        }
        let mut first = report.solutions[0].words.clone();
        first.sort();
        assert_eq!(first, vec!["cats", "dogs", "stat"]);
    }

    #[test]
    fn test_disconnected_cover_falls_back() {
        // abcdef + ghijkl covers the roll but shares no letter
        let index = index(&["abcdef", "ghijkl"]);
        let report = solve(&index, "abcdefghijkl");
        assert!(report.solutions.is_empty());
        assert_eq!(report.verdict(), Verdict::Unsolvable);
    }

    #[test]
    fn test_fallback_results_are_approximate() {
        let index = index(&["abcdefghi", "xyz"]);
        let report = solve(&index, "abcdefghiqqq");
        assert_eq!(report.verdict(), Verdict::Approximate);
        assert_eq!(report.solutions.len(), 1);
        assert_eq!(report.solutions[0].words, vec!["abcdefghi"]);
        assert_eq!(report.solutions[0].kind, SolutionKind::Approximate);
    }

    #[test]
    fn test_monoculture_roll_has_no_solutions() {
        let index = index(&["cats", "dogs", "banana", "aha"]);
        let report = solve(&index, "aaaaaaaaaaaa");
        assert!(report.solutions.is_empty());
        assert_eq!(report.verdict(), Verdict::Unsolvable);
    }

    #[test]
    fn test_no_formable_words_short_circuits() {
        let index = index(&["xylophone", "quiz", "mmm"]);
        let report = solve(&index, "abcdefghijkl");
        assert!(report.solutions.is_empty());
        assert_eq!(report.candidate_count, 0);
        assert_eq!(report.status, SearchStatus::Exhausted);
    }

    #[test]
    fn test_empty_dictionary_is_unsolvable() {
        let index = WordIndex::default();
        let report = solve(&index, "qlessqlessab");
        assert_eq!(report.verdict(), Verdict::Unsolvable);
    }

    #[test]
    fn test_budget_exhaustion_is_inconclusive() {
        let index = index(&["abc", "cde", "efg", "ghi", "ijk", "klm"]);
        let config = SolverConfig {
            limits: Limits {
                max_solutions: 10,
                timeout: Duration::ZERO,
            },
            ..SolverConfig::default()
        };
        let report = Solver::new(&index, config)
            .find_all_solutions_with_clock("abcdefghijkl", &SteppingClock::frozen());
        assert_eq!(report.status, SearchStatus::TimedOut);
        assert!(report.solutions.is_empty());
        assert_eq!(report.verdict(), Verdict::Inconclusive);
    }

    #[test]
    fn test_repeated_queries_agree() {
        let index = index(&[
            "cats", "dogs", "stat", "scat", "acts", "tats", "gods", "dots", "stag", "tag", "cog",
        ]);
        let solver = Solver::new(&index, SolverConfig::default());
        let first = solver.find_all_solutions_with_clock("catsdogsstat", &SteppingClock::frozen());
        let second = solver.find_all_solutions_with_clock("catsdogsstat", &SteppingClock::frozen());
        assert_eq!(first.solutions, second.solutions);
        assert_eq!(first.verdict(), Verdict::Solvable);
    }

    #[test]
    fn test_solutions_capped_at_max() {
        let index = index(&["abc", "bca", "cab", "cde", "dec", "efg", "fge"]);
        let config = SolverConfig {
            limits: Limits {
                max_solutions: 3,
                timeout: Duration::from_secs(5),
            },
            ..SolverConfig::default()
        };
        let report = Solver::new(&index, config)
            .find_all_solutions_with_clock("abccdeefg", &SteppingClock::frozen());
        assert_eq!(report.solutions.len(), 3);
        assert!(report.solutions.iter().all(Solution::is_exact));
    }

    #[test]
    fn test_concurrent_queries_share_index() {
        let index = index(&["cats", "dogs", "stat", "abc", "cde", "efg"]);
        let solver = Solver::new(&index, SolverConfig::default());
        let verdicts: Vec<Verdict> = std::thread::scope(|scope| {
            let handles: Vec<_> = ["catsdogsstat", "abccdeefgxyz"]
                .into_iter()
                .map(|roll| scope.spawn(move || solver.find_all_solutions(roll).verdict()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(verdicts, vec![Verdict::Solvable, Verdict::Unsolvable]);
    }
}
