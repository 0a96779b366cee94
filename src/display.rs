//! Plain-text rendering of query results.

use crate::query::{Report, Solution, SolutionKind, Verdict};

/// One-line summary for a verdict.
pub fn verdict_message(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Solvable => "This set is solvable, good luck!",
        Verdict::Approximate => "No exact solution found. Closest attempts:",
        Verdict::Unsolvable => "This set is not solvable. Roll again!",
        Verdict::Inconclusive => "No solution found before the search gave up. Try a longer timeout.",
    }
}

/// Formats one solution as its words separated by spaces, marking
/// approximate ones.
pub fn format_solution(solution: &Solution) -> String {
    let words = solution.words.join(" ");
    match solution.kind {
        SolutionKind::Exact => words,
        SolutionKind::Approximate => format!("{} (approximate)", words),
    }
}

/// Formats a report: the verdict, then one numbered line per solution.
pub fn format_report(report: &Report) -> String {
    let mut output = String::from(verdict_message(report.verdict()));
    output.push('\n');
    for (i, solution) in report.solutions.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, format_solution(solution)));
    }
    output
}
