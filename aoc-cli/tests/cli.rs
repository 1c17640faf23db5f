use std::process::{Command, Output};
use tempfile::TempDir;

fn aoc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_aoc"))
        .args(args)
        .env_remove("AOC_SESSION")
        .output()
        .expect("failed to run aoc")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_runs_shipped_unit_offline() {
    let output = aoc(&["test", "1", "1abc2\npqr3stu8vwx\na1b2c3d4e5f\ntreb7uchet\n", "--year", "2023", "-q"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "142\n");

    let output = aoc(&[
        "test",
        "1",
        "two1nine\neightwothree\nabcone2threexyz\nxtwone3four\n4nineeightseven2\nzoneight234\n7pqrstsixteen\n",
        "--year",
        "2023",
        "--part",
        "B",
    ]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Test Result - Year 2023, Day 1, Part B: 281"));
}

#[test]
fn test_input_from_file() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("input.txt");
    std::fs::write(&input, "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n").unwrap();

    let output = aoc(&["test", "1", "--year", "2025", "--part", "b", "--file", input.to_str().unwrap(), "--quiet"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "6\n");
}

#[test]
fn test_missing_unit_exits_with_error() {
    let output = aoc(&["test", "5", "x", "--year", "2015"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: Solution not found for year 2015 day 5"));
    assert!(stderr(&output).contains("day_05.rs"));
}

#[test]
fn test_invalid_references_exit_before_any_network() {
    for args in [
        &["solve", "2024/26a"][..],
        &["solve", "2024/3"][..],
        &["solve", "2024/3", "c"][..],
        &["solve", "24/3a"][..],
        &["solve", "solutions/2024/3.rs", "a"][..],
    ] {
        let output = aoc(args);
        assert_eq!(output.status.code(), Some(1), "args {:?}", args);
        assert!(stderr(&output).starts_with("Error: "), "args {:?}", args);
    }
}

#[test]
fn test_solve_unknown_unit_needs_no_session() {
    let output = aoc(&["solve", "2015/25a"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Solution not found for year 2015 day 25"));
}

#[test]
fn test_new_and_force() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().to_str().unwrap();

    let output = aoc(&["new", "2024/7", "--solutions-dir", root]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(temp.path().join("year_2024").join("day_07.rs").exists());
    assert!(stdout(&output).contains("aoc solve 2024/7a"));

    let output = aoc(&["new", "2024/7", "--solutions-dir", root]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("--force"));

    let output = aoc(&["new", "2024/7", "-f", "--solutions-dir", root]);
    assert!(output.status.success(), "{}", stderr(&output));
}

#[test]
fn test_list_shipped_units() {
    let output = aoc(&["list", "--year", "2025", "--tag", "parallel"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "2025/09  a b  [geometry, parallel]\n");
}
