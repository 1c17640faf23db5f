use anyhow::{Context, anyhow};
use aoc_runner::{EntryPoint, Puzzle, SolveError};
use std::ops::RangeInclusive;

#[derive(Puzzle)]
#[puzzle(year = 2025, day = 2, tags = ["strings", "brute-force"])]
pub struct Solver;

fn parse(input: &str) -> anyhow::Result<Vec<RangeInclusive<u64>>> {
    input
        .trim()
        .split(',')
        .map(|range| {
            let (start, end) = range
                .trim()
                .split_once('-')
                .ok_or_else(|| anyhow!("range '{}' has no '-'", range))?;
            let start = start.parse::<u64>().with_context(|| format!("bad start in '{}'", range))?;
            let end = end.parse::<u64>().with_context(|| format!("bad end in '{}'", range))?;
            Ok(start..=end)
        })
        .collect()
}

/// The id is one half repeated twice
fn is_doubled(id: &str) -> bool {
    let (left, right) = id.split_at(id.len() / 2);
    id.len() % 2 == 0 && left == right
}

/// The id is some shorter pattern repeated at least twice
fn is_repeated(id: &str) -> bool {
    let doubled = format!("{id}{id}");
    doubled[1..doubled.len() - 1].contains(id)
}

fn sum_invalid(input: &str, invalid: fn(&str) -> bool) -> Result<u64, SolveError> {
    let ranges = parse(input).map_err(SolveError::failed)?;
    Ok(ranges
        .into_iter()
        .flatten()
        .filter(|id| invalid(&id.to_string()))
        .sum())
}

impl EntryPoint<'a'> for Solver {
    type Answer = u64;

    fn solve(input: &str) -> Result<u64, SolveError> {
        sum_invalid(input, is_doubled)
    }
}

impl EntryPoint<'b'> for Solver {
    type Answer = u64;

    fn solve(input: &str) -> Result<u64, SolveError> {
        sum_invalid(input, is_repeated)
    }
}
