//! Advent of Code puzzle units
//!
//! Each unit lives at `solutions/year_YYYY/day_DD.rs` and registers itself
//! with `#[derive(Puzzle)]`. Linking this crate is enough to make every unit
//! visible to [`aoc_runner::RegistryBuilder::register_all_plugins`].

pub mod solutions;
