//! Subcommand handlers

use crate::cache::InputCache;
use crate::config::Config;
use crate::error::CliError;
use crate::harness::{Harness, SolveRequest};
use crate::report::Reporter;
use crate::scaffold;
use crate::source::RemotePuzzle;
use aoc_client::AocClient;
use aoc_runner::{Part, PuzzleRef, SolverRegistry, latest_event_year};
use std::io::Write;
use std::path::Path;

/// Resolve the `solve` arguments into a puzzle with a part.
///
/// The part written in the reference wins over `--part`, which wins over
/// the trailing positional part. Every part given must be valid, used or not.
pub fn resolve_solve_target(
    puzzle: &str,
    year: Option<u16>,
    part_flag: Option<&str>,
    part_arg: Option<&str>,
) -> Result<(PuzzleRef, Part), CliError> {
    let default_year = year.unwrap_or_else(latest_event_year);
    let mut puzzle = PuzzleRef::parse_with_year(puzzle, default_year, false)?;
    let part_flag = part_flag.map(str::parse::<Part>).transpose()?;
    let part_arg = part_arg.map(str::parse::<Part>).transpose()?;
    if puzzle.part().is_none()
        && let Some(part) = part_flag.or(part_arg)
    {
        puzzle = puzzle.with_part(part);
    }
    let part = puzzle.require_part()?;
    Ok((puzzle, part))
}

pub fn solve(
    registry: &SolverRegistry,
    config: &Config,
    puzzle: PuzzleRef,
    part: Part,
    submit: bool,
    skip_examples: bool,
) -> Result<(), CliError> {
    let mut harness = Harness::new(registry, Reporter::stdout(config.quiet));
    harness.ensure_runnable(puzzle.year(), puzzle.day(), part)?;

    let client = AocClient::new()?;
    let credentials = config.credentials(&client)?;
    let cache = InputCache::new(config.cache_dir.clone(), credentials.user_id);
    let source = RemotePuzzle::new(client, cache, credentials);

    harness.solve(
        &source,
        SolveRequest {
            year: puzzle.year(),
            day: puzzle.day(),
            part,
            submit,
            skip_examples,
        },
    )
}

/// `test`: run one part on input supplied on the command line, offline
pub fn test<W: Write>(
    registry: &SolverRegistry,
    reporter: Reporter<W>,
    year: u16,
    day: u32,
    part: &str,
    input: &str,
) -> Result<(), CliError> {
    let puzzle = PuzzleRef::new(year, day, Some(part))?;
    let part = puzzle.require_part()?;
    let mut harness = Harness::new(registry, reporter);
    harness.execute("Test Result", puzzle.year(), puzzle.day(), part, input)?;
    Ok(())
}

/// `new`: scaffold a unit for the referenced day
pub fn new<W: Write>(
    reporter: &mut Reporter<W>,
    solutions_dir: &Path,
    puzzle: &str,
    year: Option<u16>,
    force: bool,
) -> Result<(), CliError> {
    let default_year = year.unwrap_or_else(latest_event_year);
    let puzzle = PuzzleRef::parse_with_year(puzzle, default_year, false)?;
    let path = scaffold::create_unit(solutions_dir, puzzle.year(), puzzle.day(), force)?;
    reporter.created(&path, puzzle.year(), puzzle.day());
    Ok(())
}

/// `list`: print registered units, filtered by year and tags
pub fn list<W: Write>(
    registry: &SolverRegistry,
    reporter: &mut Reporter<W>,
    year: Option<u16>,
    tags: &[String],
) {
    let mut found = false;
    for info in registry
        .iter_info()
        .filter(|info| year.is_none_or(|y| info.year == y))
        .filter(|info| tags.iter().all(|tag| info.tags.contains(&tag.as_str())))
    {
        reporter.unit(&info);
        found = true;
    }
    if !found {
        reporter.no_units();
    }
}
