use anyhow::anyhow;
use aoc_runner::{EntryPoint, ParseError, Puzzle, SolveError};

#[derive(Puzzle)]
#[puzzle(year = 2025, day = 1, tags = ["simulation"])]
pub struct Solver;

const DIAL_SIZE: i32 = 100;
const DIAL_START: i32 = 50;

/// Signed rotations, left is negative
fn parse(input: &str) -> Result<Vec<i32>, ParseError> {
    input
        .lines()
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(line_idx, line)| -> Result<i32, anyhow::Error> {
            let sign = match line.as_bytes().first() {
                Some(b'L') => -1,
                Some(b'R') => 1,
                _ => return Err(anyhow!("(line {}) rotation must start with 'L' or 'R'", line_idx + 1)),
            };
            let amount: i32 = line[1..]
                .parse()
                .map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))?;
            if amount < 0 {
                return Err(anyhow!("(line {}) rotation must be non negative", line_idx + 1));
            }
            Ok(sign * amount)
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))
}

/// Times the dial rests on zero, and times it passes or lands on zero
fn count_zeroes(rotations: &[i32]) -> (u32, u32) {
    let (_, rests, passes) = rotations.iter().fold(
        (DIAL_START, 0u32, 0u32),
        |(dial, mut rests, mut passes), rotation| {
            let moved = dial + rotation;
            if moved <= 0 && dial != 0 {
                passes += 1;
            }
            passes += (moved / DIAL_SIZE).unsigned_abs();
            let dial = moved.rem_euclid(DIAL_SIZE);
            if dial == 0 {
                rests += 1;
            }
            (dial, rests, passes)
        },
    );
    (rests, passes)
}

impl EntryPoint<'a'> for Solver {
    type Answer = u32;

    fn solve(input: &str) -> Result<u32, SolveError> {
        Ok(count_zeroes(&parse(input)?).0)
    }
}

impl EntryPoint<'b'> for Solver {
    type Answer = u32;

    fn solve(input: &str) -> Result<u32, SolveError> {
        Ok(count_zeroes(&parse(input)?).1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EXAMPLE: &str = "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n";

    #[test]
    fn test_example() {
        assert_eq!(<Solver as EntryPoint<'a'>>::solve(EXAMPLE).unwrap(), 3);
        assert_eq!(<Solver as EntryPoint<'b'>>::solve(EXAMPLE).unwrap(), 6);
    }

    #[test]
    fn test_full_turns_count_each_pass() {
        assert_eq!(<Solver as EntryPoint<'b'>>::solve("R1000\n").unwrap(), 10);
        assert_eq!(<Solver as EntryPoint<'b'>>::solve("L250\n").unwrap(), 3);
    }

    #[test]
    fn test_invalid_direction() {
        assert!(matches!(
            <Solver as EntryPoint<'a'>>::solve("X10\n"),
            Err(SolveError::Parse(ParseError::InvalidFormat(_)))
        ));
    }

    proptest! {
        #[test]
        fn prop_matches_click_by_click(rotations in prop::collection::vec(-400i32..400, 0..30)) {
            let mut dial = DIAL_START;
            let (mut rests, mut passes) = (0, 0);
            for rotation in &rotations {
                for _ in 0..rotation.unsigned_abs() {
                    dial = (dial + rotation.signum()).rem_euclid(DIAL_SIZE);
                    if dial == 0 {
                        passes += 1;
                    }
                }
                if dial == 0 {
                    rests += 1;
                }
            }
            prop_assert_eq!(count_zeroes(&rotations), (rests, passes));
        }
    }
}
