use aoc_runner::{EntryPoint, ParseError, Puzzle, SolveError};
use itertools::iproduct;

#[derive(Puzzle)]
#[puzzle(year = 2025, day = 4, tags = ["grid", "simulation"])]
pub struct Solver;

const ROLL: u8 = b'@';
const MAX_NEIGHBOURS: usize = 4;

struct Grid {
    cells: Vec<Vec<u8>>,
}

impl Grid {
    fn parse(input: &str) -> Result<Self, ParseError> {
        let cells: Vec<Vec<u8>> = input
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| line.bytes().collect())
            .collect();
        if cells.is_empty() {
            return Err(ParseError::MissingData("empty grid".to_string()));
        }
        Ok(Self { cells })
    }

    fn is_roll(&self, row: isize, col: isize) -> bool {
        usize::try_from(row)
            .ok()
            .zip(usize::try_from(col).ok())
            .and_then(|(row, col)| self.cells.get(row)?.get(col))
            .is_some_and(|&cell| cell == ROLL)
    }

    /// Rolls with fewer than four rolls among their eight neighbours
    fn accessible(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(row, line)| {
                line.iter()
                    .enumerate()
                    .filter(|&(_, &cell)| cell == ROLL)
                    .map(move |(col, _)| (row, col))
            })
            .filter(|&(row, col)| {
                let neighbours = iproduct!(-1isize..=1, -1isize..=1)
                    .filter(|&delta| delta != (0, 0))
                    .filter(|&(dr, dc)| self.is_roll(row as isize + dr, col as isize + dc))
                    .count();
                neighbours < MAX_NEIGHBOURS
            })
            .collect()
    }
}

impl EntryPoint<'a'> for Solver {
    type Answer = usize;

    fn solve(input: &str) -> Result<usize, SolveError> {
        Ok(Grid::parse(input)?.accessible().len())
    }
}

impl EntryPoint<'b'> for Solver {
    type Answer = usize;

    fn solve(input: &str) -> Result<usize, SolveError> {
        let mut grid = Grid::parse(input)?;
        let mut removed = 0;
        loop {
            let accessible = grid.accessible();
            if accessible.is_empty() {
                return Ok(removed);
            }
            removed += accessible.len();
            for (row, col) in accessible {
                grid.cells[row][col] = b'.';
            }
        }
    }
}
