//! Puzzle identifiers and the resolver that builds them from user input

use crate::error::PuzzleRefError;
use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::LazyLock;

/// First Advent of Code event
pub const FIRST_YEAR: u16 = 2015;
/// Days per event (1-25)
pub const DAYS: std::ops::RangeInclusive<u32> = 1..=25;

static REFERENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})/(\d{1,2})([abAB])?$").expect("valid regex"));
static BARE_DAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})([abAB])?$").expect("valid regex"));
static UNIT_PATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"solutions[/\\]year_(\d{4})[/\\]day_(\d{1,2})\.rs").expect("valid regex")
});

/// One of the two parts of a daily puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Part {
    A,
    B,
}

impl Part {
    /// Both parts, in order
    pub const ALL: [Part; 2] = [Part::A, Part::B];

    /// Lowercase letter naming the entry point
    pub fn letter(self) -> char {
        match self {
            Part::A => 'a',
            Part::B => 'b',
        }
    }

    /// Numeric level used by the puzzle service (1 or 2)
    pub fn level(self) -> u8 {
        match self {
            Part::A => 1,
            Part::B => 2,
        }
    }
}

impl FromStr for Part {
    type Err = PuzzleRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a" => Ok(Part::A),
            "b" => Ok(Part::B),
            _ => Err(PuzzleRefError::InvalidPart(s.to_string())),
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A resolved `(year, day, part)` triple
///
/// Can only be obtained through [`PuzzleRef::new`] or one of the parsers,
/// all of which validate the day range and the part letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleRef {
    year: u16,
    day: u8,
    part: Option<Part>,
}

impl PuzzleRef {
    /// Build a reference from separately supplied values (e.g. CLI flags)
    pub fn new(year: u16, day: u32, part: Option<&str>) -> Result<Self, PuzzleRefError> {
        let day = validate_day(day)?;
        let part = part.map(Part::from_str).transpose()?;
        Ok(Self { year, day, part })
    }

    /// Parse `YYYY/D[D][a|b]` or a unit path such as
    /// `aoc-puzzles/src/solutions/year_2024/day_03.rs`.
    ///
    /// Paths never carry a part; when `require_part` is set they are still
    /// accepted and the caller is expected to supply the part separately.
    pub fn parse(reference: &str, require_part: bool) -> Result<Self, PuzzleRefError> {
        if reference.contains(".rs") || reference.contains("solutions") {
            return Self::parse_path(reference);
        }

        let captures = REFERENCE_RE
            .captures(reference)
            .ok_or_else(|| PuzzleRefError::InvalidFormat(reference.to_string()))?;

        // Four digits always fit in u16
        let year: u16 = captures[1]
            .parse()
            .map_err(|_| PuzzleRefError::InvalidFormat(reference.to_string()))?;
        let part = captures.get(3).map(|m| m.as_str());
        let puzzle = Self::new(year, parse_day(&captures[2])?, part)?;

        if require_part && puzzle.part.is_none() {
            return Err(PuzzleRefError::PartRequired);
        }
        Ok(puzzle)
    }

    /// Like [`PuzzleRef::parse`], but also accepts a bare `D[D][a|b]` which
    /// is resolved against `default_year`.
    pub fn parse_with_year(
        reference: &str,
        default_year: u16,
        require_part: bool,
    ) -> Result<Self, PuzzleRefError> {
        let Some(captures) = BARE_DAY_RE.captures(reference) else {
            return Self::parse(reference, require_part);
        };

        let part = captures.get(2).map(|m| m.as_str());
        let puzzle = Self::new(default_year, parse_day(&captures[1])?, part)?;
        if require_part && puzzle.part.is_none() {
            return Err(PuzzleRefError::PartRequired);
        }
        Ok(puzzle)
    }

    fn parse_path(reference: &str) -> Result<Self, PuzzleRefError> {
        let captures = UNIT_PATH_RE
            .captures(reference)
            .ok_or_else(|| PuzzleRefError::InvalidPath(reference.to_string()))?;
        let year: u16 = captures[1]
            .parse()
            .map_err(|_| PuzzleRefError::InvalidPath(reference.to_string()))?;
        Self::new(year, parse_day(&captures[2])?, None)
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn part(&self) -> Option<Part> {
        self.part
    }

    /// Return a copy with the part replaced
    pub fn with_part(self, part: Part) -> Self {
        Self {
            part: Some(part),
            ..self
        }
    }

    /// The part, or [`PuzzleRefError::PartRequired`] when absent
    pub fn require_part(&self) -> Result<Part, PuzzleRefError> {
        self.part.ok_or(PuzzleRefError::PartRequired)
    }
}

impl fmt::Display for PuzzleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.year, self.day)?;
        if let Some(part) = self.part {
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

fn parse_day(digits: &str) -> Result<u32, PuzzleRefError> {
    // At most two digits by construction of the patterns
    digits
        .parse()
        .map_err(|_| PuzzleRefError::InvalidFormat(digits.to_string()))
}

fn validate_day(day: u32) -> Result<u8, PuzzleRefError> {
    if DAYS.contains(&day) {
        Ok(day as u8)
    } else {
        Err(PuzzleRefError::DayOutOfRange(day))
    }
}

/// Location of a unit's source file relative to the solutions root
pub fn solution_path(root: &Path, year: u16, day: u8) -> PathBuf {
    root.join(format!("year_{}", year))
        .join(format!("day_{:02}.rs", day))
}

/// The most recent event year: this year in December, last year otherwise
pub fn latest_event_year() -> u16 {
    latest_event_year_at(Local::now().date_naive())
}

fn latest_event_year_at(date: NaiveDate) -> u16 {
    let year = if date.month() == 12 {
        date.year()
    } else {
        date.year() - 1
    };
    u16::try_from(year).unwrap_or(FIRST_YEAR).max(FIRST_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_with_part() {
        let puzzle = PuzzleRef::parse("2024/3a", true).unwrap();
        assert_eq!(puzzle.year(), 2024);
        assert_eq!(puzzle.day(), 3);
        assert_eq!(puzzle.part(), Some(Part::A));

        let puzzle = PuzzleRef::parse("2024/15b", true).unwrap();
        assert_eq!(puzzle.day(), 15);
        assert_eq!(puzzle.part(), Some(Part::B));
    }

    #[test]
    fn test_parse_uppercase_part_is_normalized() {
        let puzzle = PuzzleRef::parse("2023/7B", true).unwrap();
        assert_eq!(puzzle.part(), Some(Part::B));
        assert_eq!(puzzle.to_string(), "2023/7b");
    }

    #[test]
    fn test_parse_without_part() {
        let puzzle = PuzzleRef::parse("2024/3", false).unwrap();
        assert_eq!(puzzle.part(), None);

        assert_eq!(
            PuzzleRef::parse("2024/3", true),
            Err(PuzzleRefError::PartRequired)
        );
    }

    #[test]
    fn test_parse_invalid_format() {
        for bad in ["", "2024", "24/3a", "2024/3c", "2024/123", "2024-3a", " 2024/3a"] {
            assert!(
                matches!(
                    PuzzleRef::parse(bad, false),
                    Err(PuzzleRefError::InvalidFormat(_))
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_unit_path() {
        let puzzle =
            PuzzleRef::parse("aoc-puzzles/src/solutions/year_2024/day_03.rs", true).unwrap();
        assert_eq!((puzzle.year(), puzzle.day(), puzzle.part()), (2024, 3, None));

        let puzzle = PuzzleRef::parse(r"solutions\year_2025\day_11.rs", false).unwrap();
        assert_eq!((puzzle.year(), puzzle.day()), (2025, 11));

        assert!(matches!(
            PuzzleRef::parse("solutions/2024/03.rs", false),
            Err(PuzzleRefError::InvalidPath(_))
        ));
        assert_eq!(
            PuzzleRef::parse("solutions/year_2024/day_30.rs", false),
            Err(PuzzleRefError::DayOutOfRange(30))
        );
    }

    #[test]
    fn test_parse_bare_day_uses_default_year() {
        let puzzle = PuzzleRef::parse_with_year("7b", 2022, true).unwrap();
        assert_eq!((puzzle.year(), puzzle.day(), puzzle.part()), (2022, 7, Some(Part::B)));

        // A full reference ignores the default
        let puzzle = PuzzleRef::parse_with_year("2019/1a", 2022, true).unwrap();
        assert_eq!(puzzle.year(), 2019);

        assert_eq!(
            PuzzleRef::parse_with_year("26", 2022, false),
            Err(PuzzleRefError::DayOutOfRange(26))
        );
    }

    #[test]
    fn test_new_validates_flags() {
        assert!(PuzzleRef::new(2015, 1, Some("a")).is_ok());
        assert_eq!(
            PuzzleRef::new(2015, 0, Some("a")),
            Err(PuzzleRefError::DayOutOfRange(0))
        );
        assert_eq!(
            PuzzleRef::new(2015, 1, Some("ab")),
            Err(PuzzleRefError::InvalidPart("ab".to_string()))
        );
    }

    #[test]
    fn test_solution_path_layout() {
        let path = solution_path(Path::new("solutions"), 2023, 1);
        assert_eq!(path, Path::new("solutions/year_2023/day_01.rs"));
    }

    #[test]
    fn test_latest_event_year() {
        let dec = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        let nov = NaiveDate::from_ymd_opt(2025, 11, 30).unwrap();
        assert_eq!(latest_event_year_at(dec), 2025);
        assert_eq!(latest_event_year_at(nov), 2024);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_valid_reference_roundtrip(
            year in 1000u16..=9999,
            day in 1u32..=25,
            padded in any::<bool>(),
            part in prop::option::of(prop::sample::select(vec!["a", "b", "A", "B"])),
        ) {
            let day_str = if padded { format!("{:02}", day) } else { day.to_string() };
            let reference = format!("{}/{}{}", year, day_str, part.unwrap_or(""));

            let puzzle = PuzzleRef::parse(&reference, false).unwrap();
            prop_assert_eq!(puzzle.year(), year);
            prop_assert_eq!(u32::from(puzzle.day()), day);
            prop_assert_eq!(
                puzzle.part(),
                part.map(|p| p.parse::<Part>().unwrap())
            );
        }

        #[test]
        fn prop_day_out_of_range_rejected(year in 2015u16..2035, day in 26u32..=99) {
            let reference = format!("{}/{}a", year, day);
            prop_assert_eq!(
                PuzzleRef::parse(&reference, true),
                Err(PuzzleRefError::DayOutOfRange(day))
            );
            prop_assert!(PuzzleRef::new(year, day, Some("a")).is_err());
        }

        #[test]
        fn prop_invalid_part_rejected(part in "[c-zC-Z0-9]{1,3}") {
            prop_assert!(part.parse::<Part>().is_err());
            prop_assert!(PuzzleRef::new(2020, 1, Some(&part)).is_err());
        }
    }
}
