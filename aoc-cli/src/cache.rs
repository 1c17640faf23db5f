//! Input cache for storing puzzle inputs locally

use crate::error::CacheError;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// File-based cache for puzzle inputs
///
/// Directory structure: `{base_dir}/{user_id}/{year}_day{day:02}.txt`.
/// Inputs are stored byte for byte as served.
pub struct InputCache {
    /// Pre-computed user directory: `{base_dir}/{user_id}`
    user_dir: PathBuf,
}

impl InputCache {
    /// Create a new input cache for a specific user
    pub fn new(mut base_dir: PathBuf, user_id: u64) -> Self {
        base_dir.push(user_id.to_string());
        Self { user_dir: base_dir }
    }

    /// Get the cache path for a specific year/day
    pub fn cache_path(&self, year: u16, day: u8) -> PathBuf {
        self.user_dir.join(format!("{}_day{:02}.txt", year, day))
    }

    /// Get cached input or None if not cached
    pub fn get(&self, year: u16, day: u8) -> Result<Option<String>, CacheError> {
        let path = self.cache_path(year, day);
        if !path.exists() {
            debug!(path = %path.display(), "cache miss");
            return Ok(None);
        }
        debug!(path = %path.display(), "cache hit");
        Ok(Some(fs::read_to_string(&path)?))
    }

    /// Store input in cache
    pub fn put(&self, year: u16, day: u8, input: &str) -> Result<(), CacheError> {
        fs::create_dir_all(&self.user_dir).map_err(|e| {
            CacheError::DirCreation(format!(
                "Failed to create {}: {}",
                self.user_dir.display(),
                e
            ))
        })?;

        fs::write(self.cache_path(year, day), input)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cache_path_format() {
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path().to_path_buf(), 12345);

        assert_eq!(
            cache.cache_path(2024, 1),
            temp.path().join("12345").join("2024_day01.txt")
        );
        assert_eq!(
            cache.cache_path(2023, 25),
            temp.path().join("12345").join("2023_day25.txt")
        );
    }

    #[test]
    fn test_cache_keeps_input_verbatim() {
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path().to_path_buf(), 12345);
        assert!(cache.get(2024, 1).unwrap().is_none());

        let input = "  leading spaces\r\nno trailing newline";
        cache.put(2024, 1, input).unwrap();
        assert_eq!(cache.get(2024, 1).unwrap().as_deref(), Some(input));
    }

    #[test]
    fn test_cache_is_per_user() {
        let temp = TempDir::new().unwrap();
        InputCache::new(temp.path().to_path_buf(), 1)
            .put(2024, 1, "mine")
            .unwrap();

        let other = InputCache::new(temp.path().to_path_buf(), 2);
        assert!(other.get(2024, 1).unwrap().is_none());
    }

    #[test]
    fn test_put_fails_when_user_dir_is_a_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("7"), "not a directory").unwrap();

        let cache = InputCache::new(temp.path().to_path_buf(), 7);
        assert!(matches!(
            cache.put(2024, 1, "x"),
            Err(CacheError::DirCreation(_))
        ));
    }
}
