//! Q-Less Roll Checker
//!
//! Tells you whether a roll of the twelve Q-Less letter dice can be solved:
//! every letter used exactly once in words of three or more letters that all
//! interlock. Rolls can be checked from the command line or interactively.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use qless::display::format_report;
use qless::{
    parse_roll, Dictionary, FallbackThresholds, Limits, Solver, SolverConfig, Verdict, WordIndex,
};

/// Checks whether Q-Less rolls are solvable.
#[derive(Parser)]
#[command(name = "qless")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    options: SolveOptions,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args)]
struct SolveOptions {
    /// Word list with one word per line.
    #[arg(short, long, default_value = "wordlist.txt", global = true)]
    dictionary: String,

    /// Maximum number of solutions to report per roll.
    #[arg(long, default_value_t = 10, global = true)]
    max_solutions: usize,

    /// Search time limit per roll, in milliseconds.
    #[arg(long, default_value_t = 5000, global = true)]
    timeout_ms: u64,

    /// Share of the roll a single approximate word must use.
    #[arg(long, default_value_t = 0.75, global = true)]
    single_coverage: f64,

    /// Share of the roll an approximate word pair must cover.
    #[arg(long, default_value_t = 0.90, global = true)]
    pair_coverage: f64,
}

impl SolveOptions {
    fn config(&self) -> SolverConfig {
        SolverConfig {
            limits: Limits {
                max_solutions: self.max_solutions,
                timeout: Duration::from_millis(self.timeout_ms),
            },
            fallback: FallbackThresholds {
                single_word_coverage: self.single_coverage,
                pair_coverage: self.pair_coverage,
            },
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Check one or more rolls given as arguments.
    Check {
        /// Rolls of exactly twelve letters.
        #[arg(required = true)]
        rolls: Vec<String>,
    },
    /// Prompt for rolls until told to stop.
    Interactive,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let dictionary = match Dictionary::load(&cli.options.dictionary) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let index = WordIndex::new(&dictionary);
    let solver = Solver::new(&index, cli.options.config());

    match cli.command {
        Some(Command::Check { rolls }) => run_check(&solver, &rolls),
        Some(Command::Interactive) | None => match run_interactive(&solver) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Failed to read input: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}

/// Solves each roll and prints its report. Fails if any roll is malformed.
fn run_check(solver: &Solver, rolls: &[String]) -> ExitCode {
    let mut status = ExitCode::SUCCESS;

    for input in rolls {
        match parse_roll(input) {
            Ok(roll) => {
                let report = solver.find_all_solutions(&roll);
                println!("{}:", roll);
                print!("{}", format_report(&report));
            }
            Err(e) => {
                eprintln!("{}: {}", input, e);
                status = ExitCode::FAILURE;
            }
        }
    }

    status
}

/// Prompts for a roll, reports on it, and asks whether to go again.
fn run_interactive(solver: &Solver) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Got your dice? Let's check if your roll is solvable!");
    println!("Please enter a set of letters:");

    loop {
        let Some(input) = prompt(&mut lines)? else {
            break;
        };

        let roll = match parse_roll(&input) {
            Ok(roll) => roll,
            Err(e) => {
                println!("{}. Please try again.", capitalize(&e.to_string()));
                continue;
            }
        };

        let report = solver.find_all_solutions(&roll);
        log::info!(
            "{}: {:?} from {} candidates in {:?}",
            roll,
            report.verdict(),
            report.candidate_count,
            report.elapsed
        );
        print!("{}", format_report(&report));
        if report.verdict() == Verdict::Inconclusive {
            println!("(try --timeout-ms with a larger value)");
        }

        println!("\nWould you like to check another roll? (yes/no)");
        match prompt(&mut lines)? {
            Some(answer) if answer.trim().eq_ignore_ascii_case("yes") => {
                println!("Please enter a set of letters:");
            }
            _ => break,
        }
    }

    println!("See ya!");
    Ok(())
}

/// Prints the prompt marker and reads one line; `None` at end of input.
fn prompt(lines: &mut impl Iterator<Item = io::Result<String>>) -> io::Result<Option<String>> {
    print!("> ");
    io::stdout().flush()?;
    lines.next().transpose()
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["qless"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.options.config(), SolverConfig::default());
        assert_eq!(cli.options.dictionary, "wordlist.txt");
    }

    #[test]
    fn test_cli_check_with_limits() {
        let cli = Cli::parse_from([
            "qless",
            "check",
            "catsdogsstat",
            "--max-solutions",
            "3",
            "--timeout-ms",
            "250",
        ]);
        let config = cli.options.config();
        assert_eq!(config.limits.max_solutions, 3);
        assert_eq!(config.limits.timeout, Duration::from_millis(250));
        match cli.command {
            Some(Command::Check { rolls }) => assert_eq!(rolls, vec!["catsdogsstat"]),
            _ => panic!("expected check subcommand"),
        }
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("input must"), "Input must");
        assert_eq!(capitalize(""), "");
    }
}
