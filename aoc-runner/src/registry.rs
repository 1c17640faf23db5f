//! Unit registry: maps `(year, day)` to a unit's entry points and runs them

use crate::error::{RegistrationError, SolverError};
use crate::execution::ExecutionResult;
use crate::puzzle::{DAYS, Part, solution_path};
use crate::solver::EntryPoints;
use std::any::Any;
use std::cell::Cell;
use std::collections::BTreeMap;
use std::panic::{self, UnwindSafe};
use std::path::Path;
use std::sync::Once;
use std::time::Instant;
use tracing::debug;

/// Directory the not-found diagnostic points at
const SOLUTIONS_ROOT: &str = "solutions";

thread_local! {
    /// Set while this thread runs an entry point; the panic hook stays silent
    static QUIET_PANICS: Cell<bool> = const { Cell::new(false) };
}

static QUIET_HOOK: Once = Once::new();

/// Metadata about a registered unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitInfo {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Whether the unit defines an `a` entry point
    pub has_a: bool,
    /// Whether the unit defines a `b` entry point
    pub has_b: bool,
    /// Tags attached at registration
    pub tags: &'static [&'static str],
}

impl UnitInfo {
    /// Whether the unit defines the entry point named by `part`
    pub fn has(&self, part: Part) -> bool {
        match part {
            Part::A => self.has_a,
            Part::B => self.has_b,
        }
    }
}

struct UnitEntry {
    entry_points: EntryPoints,
    tags: &'static [&'static str],
}

/// Builder for constructing a [`SolverRegistry`]
///
/// The registry is immutable once built; duplicates are rejected at
/// registration time.
///
/// # Example
///
/// ```
/// use aoc_runner::{EntryPoint, EntryPoints, Part, RegistryBuilder, SolveError, entry_fn};
///
/// struct Day1;
///
/// impl EntryPoint<'a'> for Day1 {
///     type Answer = usize;
///
///     fn solve(input: &str) -> Result<usize, SolveError> {
///         Ok(input.lines().count())
///     }
/// }
///
/// let registry = RegistryBuilder::new()
///     .register(2023, 1, EntryPoints { a: Some(entry_fn::<Day1, 'a'>), b: None }, &[])
///     .unwrap()
///     .build();
///
/// assert_eq!(registry.run(2023, 1, Part::A, "x\ny\n").unwrap(), "2");
/// ```
pub struct RegistryBuilder {
    units: BTreeMap<(u16, u8), UnitEntry>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self {
            units: BTreeMap::new(),
        }
    }

    /// Register a unit's entry points for a specific year and day
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the unit registered, ready for chaining
    /// * `Err(RegistrationError)` - Day out of range or duplicate year-day
    pub fn register(
        mut self,
        year: u16,
        day: u8,
        entry_points: EntryPoints,
        tags: &'static [&'static str],
    ) -> Result<Self, RegistrationError> {
        if !DAYS.contains(&u32::from(day)) {
            return Err(RegistrationError::InvalidYearDay(year, day));
        }
        if self.units.contains_key(&(year, day)) {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        self.units
            .insert((year, day), UnitEntry { entry_points, tags });
        Ok(self)
    }

    /// Register every unit submitted through `#[derive(Puzzle)]`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register the submitted units for which `filter` returns `true`
    ///
    /// ```no_run
    /// # use aoc_runner::RegistryBuilder;
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.year == 2025)
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = self.register(plugin.year, plugin.day, plugin.entry_points, plugin.tags)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry { units: self.units }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up and running units
pub struct SolverRegistry {
    units: BTreeMap<(u16, u8), UnitEntry>,
}

impl SolverRegistry {
    /// Check if a unit is registered for year/day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.units.contains_key(&(year, day))
    }

    /// Get metadata for a specific unit
    pub fn info(&self, year: u16, day: u8) -> Option<UnitInfo> {
        self.units
            .get(&(year, day))
            .map(|entry| unit_info(year, day, entry))
    }

    /// Iterate over metadata for all registered units, ordered by year then day
    pub fn iter_info(&self) -> impl Iterator<Item = UnitInfo> + '_ {
        self.units
            .iter()
            .map(|(&(year, day), entry)| unit_info(year, day, entry))
    }

    /// Number of registered units
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether no unit is registered
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Run one entry point of a unit on `input` and return its answer as a string
    ///
    /// The input is passed through untouched. A panic inside the entry point
    /// is caught and reported as [`SolverError::Panicked`].
    ///
    /// # Errors
    /// * `NotFound` - no unit registered for year/day; nothing is executed
    /// * `MissingEntryPoint` - the unit doesn't define `part`
    /// * `Solve` - the entry point returned an error
    /// * `Panicked` - the entry point panicked
    pub fn run(&self, year: u16, day: u8, part: Part, input: &str) -> Result<String, SolverError> {
        let entry = self
            .units
            .get(&(year, day))
            .ok_or_else(|| SolverError::NotFound {
                year,
                day,
                path: solution_path(Path::new(SOLUTIONS_ROOT), year, day),
            })?;

        let entry_fn = entry
            .entry_points
            .get(part)
            .ok_or(SolverError::MissingEntryPoint { year, day, part })?;

        debug!(year, day, %part, input_len = input.len(), "invoking entry point");

        match catch_quietly(|| entry_fn(input)) {
            Ok(result) => result.map_err(SolverError::from),
            Err(payload) => Err(SolverError::Panicked(panic_message(payload))),
        }
    }

    /// Like [`SolverRegistry::run`], measuring the wall-clock time of the call
    pub fn run_timed(
        &self,
        year: u16,
        day: u8,
        part: Part,
        input: &str,
    ) -> Result<ExecutionResult, SolverError> {
        let start = Instant::now();
        let answer = self.run(year, day, part, input)?;
        let elapsed = start.elapsed();
        debug!(year, day, %part, ?elapsed, "entry point finished");
        Ok(ExecutionResult { answer, elapsed })
    }
}

fn unit_info(year: u16, day: u8, entry: &UnitEntry) -> UnitInfo {
    UnitInfo {
        year,
        day,
        has_a: entry.entry_points.has(Part::A),
        has_b: entry.entry_points.has(Part::B),
        tags: entry.tags,
    }
}

/// `catch_unwind` without the panic hook's message and backtrace on stderr.
///
/// The hook is wrapped once per process and only skips panics raised on a
/// thread that is inside this call.
fn catch_quietly<R>(f: impl FnOnce() -> R + UnwindSafe) -> Result<R, Box<dyn Any + Send>> {
    QUIET_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !QUIET_PANICS.get() {
                previous(info);
            }
        }));
    });

    let was_quiet = QUIET_PANICS.replace(true);
    let result = panic::catch_unwind(f);
    QUIET_PANICS.set(was_quiet);
    result
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Registration record submitted by `#[derive(Puzzle)]`
///
/// Collected at link time through `inventory`; see
/// [`RegistryBuilder::register_all_plugins`].
///
/// ```no_run
/// use aoc_runner::{EntryPoint, EntryPoints, SolveError, SolverPlugin, entry_fn};
///
/// struct Day1;
///
/// impl EntryPoint<'a'> for Day1 {
///     type Answer = u32;
///
///     fn solve(_: &str) -> Result<u32, SolveError> {
///         Ok(0)
///     }
/// }
///
/// inventory::submit! {
///     SolverPlugin {
///         year: 2023,
///         day: 1,
///         entry_points: EntryPoints { a: Some(entry_fn::<Day1, 'a'>), b: None },
///         tags: &["easy"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// The unit's entry points
    pub entry_points: EntryPoints,
    /// Optional tags for filtering (e.g., "grid", "parsing")
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);
