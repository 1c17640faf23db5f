use aoc_runner::{EntryPoint, ParseError, Puzzle, SolveError};

#[derive(Puzzle)]
#[puzzle(year = 2025, day = 7, tags = ["grid", "dp"])]
pub struct Solver;

const START: u8 = b'S';
const SPLITTER: u8 = b'^';

struct Manifold<'a> {
    rows: Vec<&'a [u8]>,
    start: usize,
    width: usize,
}

impl<'a> Manifold<'a> {
    fn parse(input: &'a str) -> Result<Self, ParseError> {
        let rows: Vec<&[u8]> = input
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::as_bytes)
            .collect();
        let start = rows
            .first()
            .and_then(|row| row.iter().position(|&cell| cell == START))
            .ok_or_else(|| ParseError::MissingData("no 'S' in the first row".to_string()))?;
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        Ok(Self { rows, start, width })
    }

    /// Runs the beam down the manifold, tracking how many timelines reach
    /// each column. Returns the number of splits hit and the timelines per
    /// column at the bottom.
    fn propagate(&self) -> (usize, Vec<u64>) {
        let mut timelines = vec![0u64; self.width];
        timelines[self.start] = 1;
        let mut splits = 0;

        for row in self.rows.iter().skip(1) {
            let mut next = vec![0u64; self.width];
            for (col, &count) in timelines.iter().enumerate().filter(|&(_, &c)| c > 0) {
                if row.get(col) == Some(&SPLITTER) {
                    splits += 1;
                    if let Some(left) = col.checked_sub(1) {
                        next[left] += count;
                    }
                    if let Some(right) = next.get_mut(col + 1) {
                        *right += count;
                    }
                } else {
                    next[col] += count;
                }
            }
            timelines = next;
        }
        (splits, timelines)
    }
}

impl EntryPoint<'a'> for Solver {
    type Answer = usize;

    fn solve(input: &str) -> Result<usize, SolveError> {
        Ok(Manifold::parse(input)?.propagate().0)
    }
}

impl EntryPoint<'b'> for Solver {
    type Answer = u64;

    fn solve(input: &str) -> Result<u64, SolveError> {
        Ok(Manifold::parse(input)?.propagate().1.iter().sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
.......S.......
...............
.......^.......
...............
......^.^......
...............
.....^.^.^.....
...............
....^.^...^....
...............
...^.^...^.^...
...............
..^...^.....^..
...............
.^.^.^.^.^...^.
...............
";

    #[test]
    fn test_example() {
        assert_eq!(<Solver as EntryPoint<'a'>>::solve(EXAMPLE).unwrap(), 21);
        assert_eq!(<Solver as EntryPoint<'b'>>::solve(EXAMPLE).unwrap(), 40);
    }

    #[test]
    fn test_missing_start() {
        assert!(<Solver as EntryPoint<'a'>>::solve("...\n.^.\n").is_err());
    }
}
