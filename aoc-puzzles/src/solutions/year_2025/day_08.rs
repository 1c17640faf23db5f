use aoc_runner::{EntryPoint, ParseError, Puzzle, SolveError};
use itertools::Itertools;

#[derive(Puzzle)]
#[puzzle(year = 2025, day = 8, tags = ["graph", "union-find"])]
pub struct Solver;

/// Shortest connections made before circuits are measured in part a
const CONNECTIONS: usize = 1000;

type Position = [i64; 3];

fn parse(input: &str) -> Result<Vec<Position>, ParseError> {
    input
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            let coords: Vec<i64> = line
                .split(',')
                .map(|value| {
                    value.trim().parse::<i64>().map_err(|e| {
                        ParseError::InvalidFormat(format!("'{}' in '{}': {}", value, line, e))
                    })
                })
                .collect::<Result<_, _>>()?;
            <Position>::try_from(coords).map_err(|_| {
                ParseError::InvalidFormat(format!("'{}' is not an x,y,z position", line))
            })
        })
        .collect()
}

fn distance_squared(a: &Position, b: &Position) -> i64 {
    a.iter().zip(b).map(|(p, q)| (p - q).pow(2)).sum()
}

/// Every pair of box indices, closest first; ties keep index order
fn pairs_by_distance(boxes: &[Position]) -> Vec<(usize, usize)> {
    let mut pairs: Vec<(usize, usize)> = (0..boxes.len()).tuple_combinations().collect();
    pairs.sort_by_key(|&(a, b)| distance_squared(&boxes[a], &boxes[b]));
    pairs
}

struct Circuits {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl Circuits {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            count: len,
        }
    }

    fn find(&mut self, mut node: usize) -> usize {
        while self.parent[node] != node {
            self.parent[node] = self.parent[self.parent[node]];
            node = self.parent[node];
        }
        node
    }

    /// Returns false when both already share a circuit
    fn connect(&mut self, a: usize, b: usize) -> bool {
        let (mut a, mut b) = (self.find(a), self.find(b));
        if a == b {
            return false;
        }
        if self.size[a] < self.size[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        self.size[a] += self.size[b];
        self.count -= 1;
        true
    }

    fn sizes(&mut self) -> Vec<usize> {
        let roots: Vec<usize> = (0..self.parent.len())
            .filter(|&node| self.find(node) == node)
            .collect();
        roots.into_iter().map(|root| self.size[root]).collect()
    }
}

/// Product of the three largest circuits after `connections` shortest links
fn largest_circuits(boxes: &[Position], connections: usize) -> usize {
    let mut circuits = Circuits::new(boxes.len());
    for (a, b) in pairs_by_distance(boxes).into_iter().take(connections) {
        circuits.connect(a, b);
    }
    circuits
        .sizes()
        .into_iter()
        .sorted_unstable_by(|a, b| b.cmp(a))
        .take(3)
        .product()
}

impl EntryPoint<'a'> for Solver {
    type Answer = usize;

    fn solve(input: &str) -> Result<usize, SolveError> {
        let boxes = parse(input)?;
        Ok(largest_circuits(&boxes, CONNECTIONS))
    }
}

impl EntryPoint<'b'> for Solver {
    type Answer = i64;

    fn solve(input: &str) -> Result<i64, SolveError> {
        let boxes = parse(input)?;
        let mut circuits = Circuits::new(boxes.len());
        for (a, b) in pairs_by_distance(&boxes) {
            if circuits.connect(a, b) && circuits.count == 1 {
                return Ok(boxes[a][0] * boxes[b][0]);
            }
        }
        Err(ParseError::MissingData("fewer than two junction boxes".to_string()).into())
    }
}
