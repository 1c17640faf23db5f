use anyhow::{Context, anyhow};
use aoc_runner::{EntryPoint, Puzzle, SolveError};
use itertools::Itertools;
use rayon::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Puzzle)]
#[puzzle(year = 2025, day = 9, tags = ["geometry", "parallel"])]
pub struct Solver;

type Point = (i64, i64);

fn parse(input: &str) -> anyhow::Result<Vec<Point>> {
    input
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            let (x, y) = line
                .split_once(',')
                .ok_or_else(|| anyhow!("'{}' is not an x,y pair", line))?;
            Ok((
                x.trim().parse::<i64>().with_context(|| format!("x in '{}'", line))?,
                y.trim().parse::<i64>().with_context(|| format!("y in '{}'", line))?,
            ))
        })
        .collect()
}

/// Tiles covered by the rectangle with opposite corners `p` and `q`
fn area(p: Point, q: Point) -> u64 {
    ((p.0 - q.0).unsigned_abs() + 1) * ((p.1 - q.1).unsigned_abs() + 1)
}

/// Closed rectilinear polygon through the red tiles, in input order
struct Polygon {
    edges: Vec<(Point, Point)>,
}

impl Polygon {
    fn new(vertices: &[Point]) -> Self {
        let edges = vertices
            .iter()
            .copied()
            .circular_tuple_windows()
            .collect();
        Self { edges }
    }

    /// Whether a point, in doubled coordinates, lies inside or on the boundary
    fn contains_doubled(&self, (px, py): Point) -> bool {
        let mut inside = false;
        for &((x1, y1), (x2, y2)) in &self.edges {
            let (x1, y1, x2, y2) = (x1 * 2, y1 * 2, x2 * 2, y2 * 2);
            let on_edge = (x1.min(x2)..=x1.max(x2)).contains(&px)
                && (y1.min(y2)..=y1.max(y2)).contains(&py)
                && (x2 - x1) * (py - y1) == (y2 - y1) * (px - x1);
            if on_edge {
                return true;
            }
            if x1 == x2 && x1 > px && (y1.min(y2)..y1.max(y2)).contains(&py) {
                inside = !inside;
            }
        }
        inside
    }

    /// The rectangle lies inside when no edge cuts through its interior and
    /// its centre is inside
    fn contains_rect(&self, p: Point, q: Point) -> bool {
        let (xmin, xmax) = (p.0.min(q.0), p.0.max(q.0));
        let (ymin, ymax) = (p.1.min(q.1), p.1.max(q.1));

        let cuts_interior = self.edges.iter().any(|&((x1, y1), (x2, y2))| {
            x1.min(x2) < xmax && x1.max(x2) > xmin && y1.min(y2) < ymax && y1.max(y2) > ymin
        });

        !cuts_interior && self.contains_doubled((xmin + xmax, ymin + ymax))
    }
}

impl EntryPoint<'a'> for Solver {
    type Answer = u64;

    fn solve(input: &str) -> Result<u64, SolveError> {
        let tiles = parse(input).map_err(SolveError::failed)?;
        Ok(tiles
            .iter()
            .tuple_combinations()
            .map(|(&p, &q)| area(p, q))
            .max()
            .unwrap_or(0))
    }
}

impl EntryPoint<'b'> for Solver {
    type Answer = u64;

    fn solve(input: &str) -> Result<u64, SolveError> {
        let tiles = parse(input).map_err(SolveError::failed)?;
        let polygon = Polygon::new(&tiles);
        let best = AtomicU64::new(0);

        (0..tiles.len()).into_par_iter().for_each(|i| {
            for j in i + 1..tiles.len() {
                let surface = area(tiles[i], tiles[j]);
                // Pruned candidates never need the containment check
                if surface <= best.load(Ordering::Relaxed) {
                    continue;
                }
                if polygon.contains_rect(tiles[i], tiles[j]) {
                    best.fetch_max(surface, Ordering::Relaxed);
                }
            }
        });

        Ok(best.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "7,1\n11,1\n11,7\n9,7\n9,5\n2,5\n2,3\n7,3\n";

    #[test]
    fn test_example() {
        assert_eq!(<Solver as EntryPoint<'a'>>::solve(EXAMPLE).unwrap(), 50);
        assert_eq!(<Solver as EntryPoint<'b'>>::solve(EXAMPLE).unwrap(), 24);
    }

    #[test]
    fn test_area_is_symmetric_and_inclusive() {
        assert_eq!(area((2, 5), (11, 1)), 50);
        assert_eq!(area((11, 1), (2, 5)), 50);
        assert_eq!(area((3, 3), (3, 3)), 1);
    }

    #[test]
    fn test_point_containment() {
        let polygon = Polygon::new(&[(0, 0), (4, 0), (4, 4), (0, 4)]);
        assert!(polygon.contains_doubled((4, 4)));
        assert!(polygon.contains_doubled((0, 3)));
        assert!(!polygon.contains_doubled((10, 4)));
    }
}
