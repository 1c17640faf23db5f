//! AOC CLI - solve, test and scaffold Advent of Code puzzles

mod cache;
mod cli;
mod commands;
mod config;
mod error;
mod harness;
mod logging;
mod report;
mod scaffold;
mod source;

// Import aoc-puzzles to link the solution units
use aoc_puzzles as _;

use aoc_runner::{RegistryBuilder, SolverRegistry};
use clap::Parser;
use cli::{Args, Command};
use config::Config;
use error::CliError;
use report::Reporter;

fn main() {
    logging::init_tracing();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args.global);

    match args.command {
        Command::Solve {
            puzzle,
            part_arg,
            year,
            part,
            submit,
            skip_examples,
        } => {
            let (puzzle, part) = commands::resolve_solve_target(
                &puzzle,
                year,
                part.as_deref(),
                part_arg.as_deref(),
            )?;
            commands::solve(&build_registry()?, &config, puzzle, part, submit, skip_examples)
        }
        Command::Test {
            day,
            input,
            year,
            part,
            file,
        } => {
            let input = match (file, input) {
                (Some(path), _) => std::fs::read_to_string(path)?,
                (None, Some(input)) => input,
                (None, None) => return Err(CliError::Config("No input given".to_string())),
            };
            let reporter = Reporter::stdout(config.quiet);
            commands::test(&build_registry()?, reporter, year, day, &part, &input)
        }
        Command::New {
            puzzle,
            year,
            force,
        } => {
            let mut reporter = Reporter::stdout(config.quiet);
            commands::new(&mut reporter, &config.solutions_dir, &puzzle, year, force)
        }
        Command::List { year, tag } => {
            let mut reporter = Reporter::stdout(config.quiet);
            commands::list(&build_registry()?, &mut reporter, year, &tag);
            Ok(())
        }
    }
}

/// Build registry from every linked unit
fn build_registry() -> Result<SolverRegistry, CliError> {
    Ok(RegistryBuilder::new().register_all_plugins()?.build())
}
