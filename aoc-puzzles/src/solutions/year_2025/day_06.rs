use aoc_runner::{EntryPoint, ParseError, Puzzle, SolveError};
use itertools::Itertools;

#[derive(Puzzle)]
#[puzzle(year = 2025, day = 6, tags = ["parsing"])]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
enum Op {
    Add,
    Mul,
}

impl Op {
    fn apply(self, operands: impl IntoIterator<Item = u64>) -> u64 {
        match self {
            Op::Add => operands.into_iter().sum(),
            Op::Mul => operands.into_iter().product(),
        }
    }
}

/// Splits the worksheet into operand rows and the operator row
fn split_rows(input: &str) -> Result<(Vec<&str>, &str), ParseError> {
    let mut rows: Vec<&str> = input.lines().filter(|line| !line.trim().is_empty()).collect();
    let operators = rows
        .pop()
        .ok_or_else(|| ParseError::MissingData("empty worksheet".to_string()))?;
    if rows.is_empty() {
        return Err(ParseError::MissingData("no operand rows".to_string()));
    }
    Ok((rows, operators))
}

fn parse_op(symbol: char) -> Option<Op> {
    match symbol {
        '+' => Some(Op::Add),
        '*' => Some(Op::Mul),
        _ => None,
    }
}

fn parse_number(text: &str) -> Result<u64, ParseError> {
    text.trim()
        .parse()
        .map_err(|_| ParseError::InvalidFormat(format!("'{}' is not a number", text)))
}

impl EntryPoint<'a'> for Solver {
    type Answer = u64;

    /// Problems are read row-wise, one per whitespace-separated column
    fn solve(input: &str) -> Result<u64, SolveError> {
        let (rows, operators) = split_rows(input)?;
        let ops = operators
            .split_whitespace()
            .map(|symbol| {
                symbol
                    .chars()
                    .exactly_one()
                    .ok()
                    .and_then(parse_op)
                    .ok_or_else(|| ParseError::InvalidFormat(format!("unknown operator '{}'", symbol)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let numbers = rows
            .iter()
            .map(|row| row.split_whitespace().map(parse_number).collect())
            .collect::<Result<Vec<Vec<u64>>, _>>()?;

        ops.iter()
            .enumerate()
            .map(|(col, op)| {
                let operands = numbers
                    .iter()
                    .map(|row| {
                        row.get(col).copied().ok_or_else(|| {
                            ParseError::MissingData(format!("column {} is incomplete", col + 1))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(op.apply(operands))
            })
            .sum()
    }
}

impl EntryPoint<'b'> for Solver {
    type Answer = u64;

    /// Numbers are read column-wise, top to bottom; each operator owns the
    /// character columns up to the next operator
    fn solve(input: &str) -> Result<u64, SolveError> {
        let (rows, operators) = split_rows(input)?;
        let rows: Vec<&[u8]> = rows.iter().map(|row| row.as_bytes()).collect();
        let width = rows
            .iter()
            .map(|row| row.len())
            .chain([operators.len()])
            .max()
            .unwrap_or(0);

        let starts: Vec<(usize, Op)> = operators
            .char_indices()
            .filter_map(|(idx, symbol)| parse_op(symbol).map(|op| (idx, op)))
            .collect();
        if starts.is_empty() {
            return Err(ParseError::MissingData("no operators".to_string()).into());
        }

        let ends = starts.iter().skip(1).map(|&(idx, _)| idx).chain([width]);
        starts
            .iter()
            .zip(ends)
            .map(|(&(start, op), end)| {
                let operands = (start..end)
                    .map(|col| {
                        rows.iter()
                            .filter_map(|row| row.get(col).copied())
                            .filter(u8::is_ascii_digit)
                            .map(char::from)
                            .collect::<String>()
                    })
                    .filter(|digits| !digits.is_empty())
                    .map(|digits| parse_number(&digits))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(op.apply(operands))
            })
            .sum()
    }
}
