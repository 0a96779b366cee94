//! Tunable search budgets and fallback thresholds.

use std::time::Duration;

/// Budget for one query.
///
/// `max_solutions` caps the exact covers the search collects and, separately,
/// the approximate results the fallback collects. `timeout` is re-armed for
/// every query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Limits {
    pub max_solutions: usize,
    pub timeout: Duration,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_solutions: 10,
            timeout: Duration::from_secs(5),
        }
    }
}

/// Coverage ratios the fallback search accepts.
///
/// Both are fractions of the roll's total letter count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FallbackThresholds {
    /// A single word must use at least this share of the roll.
    pub single_word_coverage: f64,
    /// Two letter-sharing words must jointly cover at least this share.
    pub pair_coverage: f64,
}

impl Default for FallbackThresholds {
    fn default() -> Self {
        Self {
            single_word_coverage: 0.75,
            pair_coverage: 0.90,
        }
    }
}

/// Everything a [`Solver`](crate::Solver) needs besides the word index.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SolverConfig {
    pub limits: Limits,
    pub fallback: FallbackThresholds,
}
