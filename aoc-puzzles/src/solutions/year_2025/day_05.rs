use anyhow::{Context, anyhow};
use aoc_runner::{EntryPoint, Puzzle, SolveError};

#[derive(Puzzle)]
#[puzzle(year = 2025, day = 5, tags = ["intervals"])]
pub struct Solver;

struct Inventory {
    fresh: Vec<(u64, u64)>,
    available: Vec<u64>,
}

fn parse(input: &str) -> anyhow::Result<Inventory> {
    let normalized = input.replace("\r\n", "\n");
    let (ranges, ids) = normalized
        .split_once("\n\n")
        .ok_or_else(|| anyhow!("expected a blank line between ranges and ids"))?;

    let fresh = ranges
        .lines()
        .map(|line| {
            let (start, end) = line
                .split_once('-')
                .ok_or_else(|| anyhow!("range '{}' has no '-'", line))?;
            Ok((
                start.parse::<u64>().with_context(|| format!("range '{}'", line))?,
                end.parse::<u64>().with_context(|| format!("range '{}'", line))?,
            ))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let available = ids
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| line.parse::<u64>().with_context(|| format!("ingredient id '{}'", line)))
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(Inventory { fresh, available })
}

/// Sort and merge overlapping or touching inclusive ranges
fn merge(mut ranges: Vec<(u64, u64)>) -> Vec<(u64, u64)> {
    ranges.sort_unstable();
    let mut merged: Vec<(u64, u64)> = Vec::with_capacity(ranges.len());
    for (start, end) in ranges {
        match merged.last_mut() {
            Some((_, last_end)) if start <= *last_end => *last_end = (*last_end).max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

impl EntryPoint<'a'> for Solver {
    type Answer = usize;

    fn solve(input: &str) -> Result<usize, SolveError> {
        let inventory = parse(input).map_err(SolveError::failed)?;
        Ok(inventory
            .available
            .iter()
            .filter(|&&id| {
                inventory
                    .fresh
                    .iter()
                    .any(|&(start, end)| (start..=end).contains(&id))
            })
            .count())
    }
}

impl EntryPoint<'b'> for Solver {
    type Answer = u64;

    fn solve(input: &str) -> Result<u64, SolveError> {
        let inventory = parse(input).map_err(SolveError::failed)?;
        Ok(merge(inventory.fresh)
            .into_iter()
            .map(|(start, end)| end - start + 1)
            .sum())
    }
}
