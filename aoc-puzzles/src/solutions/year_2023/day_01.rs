use aoc_runner::{EntryPoint, ParseError, Puzzle, SolveError};

#[derive(Puzzle)]
#[puzzle(year = 2023, day = 1, tags = ["strings"])]
pub struct Solver;

const SPELLED: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

fn digit_at(line: &str, idx: usize, spelled: bool) -> Option<u32> {
    let rest = &line[idx..];
    let first = rest.chars().next()?;
    if let Some(digit) = first.to_digit(10) {
        return Some(digit);
    }
    if !spelled {
        return None;
    }
    SPELLED
        .iter()
        .position(|word| rest.starts_with(word))
        .map(|pos| pos as u32 + 1)
}

fn calibration_value(line: &str, spelled: bool) -> Result<u32, ParseError> {
    let mut digits = line
        .char_indices()
        .filter_map(|(idx, _)| digit_at(line, idx, spelled));
    let first = digits
        .next()
        .ok_or_else(|| ParseError::MissingData(format!("no digit in line '{}'", line)))?;
    let last = digits.last().unwrap_or(first);
    Ok(first * 10 + last)
}

fn calibration_sum(input: &str, spelled: bool) -> Result<u32, SolveError> {
    input
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| calibration_value(line, spelled).map_err(SolveError::from))
        .sum()
}

impl EntryPoint<'a'> for Solver {
    type Answer = u32;

    fn solve(input: &str) -> Result<u32, SolveError> {
        calibration_sum(input, false)
    }
}

impl EntryPoint<'b'> for Solver {
    type Answer = u32;

    fn solve(input: &str) -> Result<u32, SolveError> {
        calibration_sum(input, true)
    }
}
