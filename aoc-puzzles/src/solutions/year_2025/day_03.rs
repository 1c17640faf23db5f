use aoc_runner::{EntryPoint, ParseError, Puzzle, SolveError};

#[derive(Puzzle)]
#[puzzle(year = 2025, day = 3, tags = ["greedy"])]
pub struct Solver;

/// Largest number formed by keeping `n` digits of `bank` in order
fn max_joltage(bank: &str, n: usize) -> Result<u64, ParseError> {
    if bank.len() < n || !bank.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidFormat(format!(
            "bank '{}' needs at least {} digits",
            bank, n
        )));
    }

    let mut removable = bank.len() - n;
    let mut stack: Vec<u8> = Vec::with_capacity(bank.len());
    for digit in bank.bytes() {
        while removable > 0 && stack.last().is_some_and(|&top| top < digit) {
            stack.pop();
            removable -= 1;
        }
        stack.push(digit);
    }
    stack.truncate(n);

    Ok(stack
        .into_iter()
        .fold(0, |acc, digit| acc * 10 + u64::from(digit - b'0')))
}

fn total_joltage(input: &str, n: usize) -> Result<u64, SolveError> {
    input
        .lines()
        .filter(|line| !line.is_empty())
        .map(|bank| max_joltage(bank, n).map_err(SolveError::from))
        .sum()
}

impl EntryPoint<'a'> for Solver {
    type Answer = u64;

    fn solve(input: &str) -> Result<u64, SolveError> {
        total_joltage(input, 2)
    }
}

impl EntryPoint<'b'> for Solver {
    type Answer = u64;

    fn solve(input: &str) -> Result<u64, SolveError> {
        total_joltage(input, 12)
    }
}
