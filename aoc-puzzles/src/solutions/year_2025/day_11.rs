use aoc_runner::{EntryPoint, ParseError, Puzzle, SolveError};
use std::collections::{HashMap, HashSet};

#[derive(Puzzle)]
#[puzzle(year = 2025, day = 11, tags = ["graph", "dp"])]
pub struct Solver;

struct Devices<'a> {
    outputs: HashMap<&'a str, Vec<&'a str>>,
}

impl<'a> Devices<'a> {
    fn parse(input: &'a str) -> Result<Self, ParseError> {
        let outputs = input
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| {
                let (device, targets) = line.split_once(": ").ok_or_else(|| {
                    ParseError::InvalidFormat(format!("'{}' has no ': ' separator", line))
                })?;
                Ok((device, targets.split_whitespace().collect()))
            })
            .collect::<Result<_, ParseError>>()?;
        Ok(Self { outputs })
    }

    /// Number of distinct paths from `from` to `to`
    fn count_paths(&self, from: &'a str, to: &'a str) -> u64 {
        let mut memo = HashMap::new();
        let mut visiting = HashSet::new();
        self.count_from(from, to, &mut memo, &mut visiting)
    }

    fn count_from(
        &self,
        node: &'a str,
        to: &'a str,
        memo: &mut HashMap<&'a str, u64>,
        visiting: &mut HashSet<&'a str>,
    ) -> u64 {
        if node == to {
            return 1;
        }
        if let Some(&count) = memo.get(node) {
            return count;
        }
        // A cycle contributes no finite path
        if !visiting.insert(node) {
            return 0;
        }

        let count = self
            .outputs
            .get(node)
            .into_iter()
            .flatten()
            .map(|&next| self.count_from(next, to, memo, visiting))
            .sum();

        visiting.remove(node);
        memo.insert(node, count);
        count
    }
}

impl EntryPoint<'a'> for Solver {
    type Answer = u64;

    fn solve(input: &str) -> Result<u64, SolveError> {
        Ok(Devices::parse(input)?.count_paths("you", "out"))
    }
}

impl EntryPoint<'b'> for Solver {
    type Answer = u64;

    /// Paths from `svr` to `out` visiting both `dac` and `fft`, in either order
    fn solve(input: &str) -> Result<u64, SolveError> {
        let devices = Devices::parse(input)?;
        let via = |first, second| {
            devices.count_paths("svr", first)
                * devices.count_paths(first, second)
                * devices.count_paths(second, "out")
        };
        Ok(via("dac", "fft") + via("fft", "dac"))
    }
}
