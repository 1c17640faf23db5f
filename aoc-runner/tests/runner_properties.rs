//! Property-based tests for the runner's dispatch contract

use aoc_runner::{
    EntryPoint, EntryPoints, Part, RegistryBuilder, SolveError, SolverError, SolverRegistry,
    entry_fn,
};
use proptest::prelude::*;

/// Counts bytes and lines so any change to the input shows up in the answer
struct Fingerprint;

impl EntryPoint<'a'> for Fingerprint {
    type Answer = String;

    fn solve(input: &str) -> Result<String, SolveError> {
        Ok(format!("{}:{}", input.len(), input.lines().count()))
    }
}

fn registry() -> SolverRegistry {
    RegistryBuilder::new()
        .register(
            2024,
            12,
            EntryPoints {
                a: Some(entry_fn::<Fingerprint, 'a'>),
                b: None,
            },
            &[],
        )
        .unwrap()
        .build()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Running the same unit twice on the same input gives the same answer
    #[test]
    fn prop_runs_are_repeatable(input in "(?s).{0,200}") {
        let registry = registry();
        let first = registry.run_timed(2024, 12, Part::A, &input).unwrap();
        let second = registry.run_timed(2024, 12, Part::A, &input).unwrap();
        prop_assert_eq!(&first.answer, &second.answer);
        prop_assert_eq!(
            first.answer,
            format!("{}:{}", input.len(), input.lines().count())
        );
    }

    /// Unregistered year/day pairs never reach an entry point
    #[test]
    fn prop_unknown_units_are_not_found(year in 2015u16..2035, day in 1u8..=25) {
        prop_assume!((year, day) != (2024, 12));
        let registry = registry();
        for part in Part::ALL {
            let is_not_found = matches!(
                registry.run(year, day, part, "input"),
                Err(SolverError::NotFound { .. })
            );
            prop_assert!(is_not_found);
        }
    }
}

#[test]
fn test_missing_part_b_is_reported_as_missing_entry_point() {
    let err = registry().run(2024, 12, Part::B, "").unwrap_err();
    assert!(matches!(err, SolverError::MissingEntryPoint { part: Part::B, .. }));
}
