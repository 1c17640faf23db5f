use aoc_runner::{EntryPoint, ParseError, Part, Puzzle, RegistryBuilder, SolveError, SolverError};

#[derive(Puzzle)]
#[puzzle(year = 2015, day = 1, tags = ["floors", "easy"])]
struct Floors;

impl EntryPoint<'a'> for Floors {
    type Answer = i64;

    fn solve(input: &str) -> Result<i64, SolveError> {
        input
            .trim_end()
            .chars()
            .map(|c| match c {
                '(' => Ok(1i64),
                ')' => Ok(-1i64),
                other => Err(ParseError::InvalidFormat(format!("unexpected {:?}", other)).into()),
            })
            .sum()
    }
}

impl EntryPoint<'b'> for Floors {
    type Answer = usize;

    fn solve(input: &str) -> Result<usize, SolveError> {
        let mut floor = 0i64;
        for (idx, c) in input.chars().enumerate() {
            floor += if c == '(' { 1 } else { -1 };
            if floor < 0 {
                return Ok(idx + 1);
            }
        }
        Err(ParseError::MissingData("never entered the basement".into()).into())
    }
}

#[derive(Puzzle)]
#[puzzle(year = 2015, day = 2, parts = [a])]
struct OnlyFirstPart;

impl EntryPoint<'a'> for OnlyFirstPart {
    type Answer = String;

    fn solve(input: &str) -> Result<String, SolveError> {
        Ok(input.to_uppercase())
    }
}

#[test]
fn test_derived_units_are_registered() {
    let registry = RegistryBuilder::new().register_all_plugins().unwrap().build();

    assert!(registry.contains(2015, 1));
    assert!(registry.contains(2015, 2));
    assert_eq!(registry.len(), 2);

    let info = registry.info(2015, 1).unwrap();
    assert!(info.has_a && info.has_b);
    assert_eq!(info.tags, &["floors", "easy"]);
}

#[test]
fn test_derived_entry_points_run() {
    let registry = RegistryBuilder::new().register_all_plugins().unwrap().build();

    assert_eq!(registry.run(2015, 1, Part::A, "(()(()(\n").unwrap(), "3");
    assert_eq!(registry.run(2015, 1, Part::B, "()())").unwrap(), "5");
    assert_eq!(registry.run(2015, 2, Part::A, "abc").unwrap(), "ABC");
}

#[test]
fn test_parts_attribute_limits_entry_points() {
    let registry = RegistryBuilder::new().register_all_plugins().unwrap().build();

    let info = registry.info(2015, 2).unwrap();
    assert!(info.has_a);
    assert!(!info.has_b);
    assert!(info.tags.is_empty());

    assert!(matches!(
        registry.run(2015, 2, Part::B, "abc"),
        Err(SolverError::MissingEntryPoint { part: Part::B, .. })
    ));
}

#[test]
fn test_plugin_filter() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"easy"))
        .unwrap()
        .build();

    assert!(registry.contains(2015, 1));
    assert!(!registry.contains(2015, 2));
}

#[test]
fn test_registering_plugins_twice_is_a_duplicate() {
    let result = RegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .register_all_plugins();
    assert!(result.is_err());
}
