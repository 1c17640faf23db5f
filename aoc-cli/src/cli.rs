//! CLI argument parsing using clap

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Advent of Code puzzle runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Solve, test and scaffold Advent of Code puzzles", version)]
pub struct Args {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand
#[derive(ClapArgs, Debug, Clone)]
pub struct GlobalArgs {
    /// Cache directory for puzzle inputs
    #[arg(long, global = true, default_value = "~/.cache/aoc_runner")]
    pub cache_dir: PathBuf,

    /// Root of the solution units (`year_YYYY/day_DD.rs` live below it)
    #[arg(long, global = true)]
    pub solutions_dir: Option<PathBuf>,

    /// User ID for cache organization and verification
    #[arg(long, global = true)]
    pub user_id: Option<u64>,

    /// Quiet mode - only output answers
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a solution on the real input, checking the published examples first
    ///
    /// Examples:
    ///   aoc solve 2024/3a
    ///   aoc solve 2024/15b -s
    ///   aoc solve aoc-puzzles/src/solutions/year_2024/day_03.rs a
    Solve {
        /// Puzzle as YYYY/DD[a|b], a unit path, or a bare day with --year
        puzzle: String,

        /// Part (a or b), when the puzzle reference doesn't name one
        part_arg: Option<String>,

        /// Year used to resolve a bare day (defaults to the latest event)
        #[arg(short, long)]
        year: Option<u16>,

        /// Part (a or b)
        #[arg(short, long)]
        part: Option<String>,

        /// Submit the answer after solving
        #[arg(short, long)]
        submit: bool,

        /// Skip running the examples
        #[arg(long)]
        skip_examples: bool,
    },

    /// Run a solution on input given on the command line
    Test {
        /// Day of the puzzle (1-25)
        day: u32,

        /// Input to run the solution on (ignored with --file)
        #[arg(required_unless_present = "file")]
        input: Option<String>,

        /// Year of the puzzle
        #[arg(short, long, default_value_t = 2015)]
        year: u16,

        /// Part of the puzzle (a or b)
        #[arg(short, long, default_value = "a")]
        part: String,

        /// Read the input from a file instead
        #[arg(long, conflicts_with = "input")]
        file: Option<PathBuf>,
    },

    /// Create a solution unit from the template
    ///
    /// Examples:
    ///   aoc new 2024/3
    ///   aoc new 2024/15 -f
    New {
        /// Puzzle as YYYY/DD, or a bare day with --year
        puzzle: String,

        /// Year used to resolve a bare day (defaults to the latest event)
        #[arg(short, long)]
        year: Option<u16>,

        /// Overwrite an existing unit
        #[arg(short, long)]
        force: bool,
    },

    /// List registered solution units
    List {
        /// Only show units of this year
        #[arg(short, long)]
        year: Option<u16>,

        /// Only show units carrying all of these tags (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        tag: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_arguments() {
        let args = Args::try_parse_from(["aoc", "solve", "2024/3", "b", "-s", "--quiet"]).unwrap();
        assert!(args.global.quiet);
        match args.command {
            Command::Solve {
                puzzle,
                part_arg,
                submit,
                skip_examples,
                ..
            } => {
                assert_eq!(puzzle, "2024/3");
                assert_eq!(part_arg.as_deref(), Some("b"));
                assert!(submit);
                assert!(!skip_examples);
            }
            other => panic!("Expected solve, got {:?}", other),
        }
    }

    #[test]
    fn test_test_defaults() {
        let args = Args::try_parse_from(["aoc", "test", "1", "(())"]).unwrap();
        match args.command {
            Command::Test {
                day,
                input,
                year,
                part,
                file,
            } => {
                assert_eq!(day, 1);
                assert_eq!(input.as_deref(), Some("(())"));
                assert_eq!(year, 2015);
                assert_eq!(part, "a");
                assert!(file.is_none());
            }
            other => panic!("Expected test, got {:?}", other),
        }
    }

    #[test]
    fn test_test_requires_input_or_file() {
        assert!(Args::try_parse_from(["aoc", "test", "1"]).is_err());
        assert!(Args::try_parse_from(["aoc", "test", "1", "--file", "input.txt"]).is_ok());
    }

    #[test]
    fn test_list_tags_are_comma_separated() {
        let args = Args::try_parse_from(["aoc", "list", "--tag", "grid,dp"]).unwrap();
        match args.command {
            Command::List { tag, year } => {
                assert_eq!(tag, vec!["grid", "dp"]);
                assert!(year.is_none());
            }
            other => panic!("Expected list, got {:?}", other),
        }
    }
}
