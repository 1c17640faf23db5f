use aoc_runner::{EntryPoint, Puzzle, SolveError};
use regex::Regex;
use std::sync::LazyLock;

#[derive(Puzzle)]
#[puzzle(year = 2024, day = 3, tags = ["regex"])]
pub struct Solver;

static INSTRUCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"mul\((\d+),(\d+)\)|do\(\)|don't\(\)").expect("valid regex")
});

enum Instruction {
    Mul(u64, u64),
    Do,
    Dont,
}

fn instructions(input: &str) -> Result<Vec<Instruction>, SolveError> {
    INSTRUCTION
        .captures_iter(input)
        .map(|caps| match &caps[0] {
            "do()" => Ok(Instruction::Do),
            "don't()" => Ok(Instruction::Dont),
            _ => {
                let x = caps[1].parse::<u64>().map_err(SolveError::failed)?;
                let y = caps[2].parse::<u64>().map_err(SolveError::failed)?;
                Ok(Instruction::Mul(x, y))
            }
        })
        .collect()
}

impl EntryPoint<'a'> for Solver {
    type Answer = u64;

    fn solve(input: &str) -> Result<u64, SolveError> {
        Ok(instructions(input)?
            .into_iter()
            .map(|instruction| match instruction {
                Instruction::Mul(x, y) => x * y,
                _ => 0,
            })
            .sum())
    }
}

impl EntryPoint<'b'> for Solver {
    type Answer = u64;

    fn solve(input: &str) -> Result<u64, SolveError> {
        let (total, _) = instructions(input)?.into_iter().fold(
            (0, true),
            |(total, enabled), instruction| match instruction {
                Instruction::Do => (total, true),
                Instruction::Dont => (total, false),
                Instruction::Mul(x, y) if enabled => (total + x * y, enabled),
                Instruction::Mul(..) => (total, enabled),
            },
        );
        Ok(total)
    }
}
