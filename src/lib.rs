//! Q-Less Roll Solver Library
//!
//! Decides whether the twelve letters of a Q-Less roll can be used up
//! exactly by a set of interlocking dictionary words, and lists such sets.
//!
//! ```
//! use qless::{Dictionary, Solver, SolverConfig, Verdict, WordIndex};
//!
//! let dictionary = Dictionary::from_words(["cats", "dogs", "stat"]);
//! let index = WordIndex::new(&dictionary);
//! let report = Solver::new(&index, SolverConfig::default()).find_all_solutions("catsdogsstat");
//!
//! assert_eq!(report.verdict(), Verdict::Solvable);
//! ```

pub mod candidates;
pub mod clock;
pub mod config;
pub mod connectivity;
pub mod dictionary;
pub mod display;
pub mod fallback;
pub mod letters;
mod query;
pub mod roll;
pub mod solver;

pub use config::{FallbackThresholds, Limits, SolverConfig};
pub use dictionary::{Dictionary, DictionaryError, WordIndex};
pub use letters::LetterMultiset;
pub use query::{Report, Solution, SolutionKind, Solver, Verdict};
pub use roll::{parse_roll, RollError};
