//! `new`: write a solution unit from the template and wire up its modules

use crate::error::CliError;
use aoc_runner::solution_path;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

const UNIT_TEMPLATE: &str = r#"use aoc_runner::{EntryPoint, Puzzle, SolveError};

#[derive(Puzzle)]
#[puzzle(year = {YEAR}, day = {DAY})]
pub struct Solver;

impl EntryPoint<'a'> for Solver {
    type Answer = u64;

    fn solve(_input: &str) -> Result<u64, SolveError> {
        // TODO: Implement solution for part A
        Ok(0)
    }
}

impl EntryPoint<'b'> for Solver {
    type Answer = u64;

    fn solve(_input: &str) -> Result<u64, SolveError> {
        // TODO: Implement solution for part B
        Ok(0)
    }
}
"#;

/// Source of a fresh unit for `year`/`day`
pub fn render_unit(year: u16, day: u8) -> String {
    UNIT_TEMPLATE
        .replace("{YEAR}", &year.to_string())
        .replace("{DAY}", &day.to_string())
}

/// Create `year_YYYY/day_DD.rs` below `solutions_dir` and declare it in the
/// module tree. Returns the unit's path.
pub fn create_unit(
    solutions_dir: &Path,
    year: u16,
    day: u8,
    force: bool,
) -> Result<PathBuf, CliError> {
    let unit = solution_path(solutions_dir, year, day);
    if unit.exists() && !force {
        return Err(CliError::UnitExists(unit));
    }

    let year_module = format!("year_{}", year);
    let year_dir = solutions_dir.join(&year_module);
    fs::create_dir_all(&year_dir)?;

    ensure_declared(&solutions_dir.join("mod.rs"), &format!("pub mod {};", year_module))?;
    fs::write(&unit, render_unit(year, day))?;
    ensure_declared(&year_dir.join("mod.rs"), &format!("mod day_{:02};", day))?;

    debug!(path = %unit.display(), "unit created");
    Ok(unit)
}

/// Append `declaration` to a module file unless a line already holds it
fn ensure_declared(module_file: &Path, declaration: &str) -> io::Result<()> {
    let mut contents = match fs::read_to_string(module_file) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e),
    };
    if contents.lines().any(|line| line.trim() == declaration) {
        return Ok(());
    }

    if !contents.is_empty() && !contents.ends_with('\n') {
        contents.push('\n');
    }
    contents.push_str(declaration);
    contents.push('\n');
    fs::write(module_file, contents)
}
