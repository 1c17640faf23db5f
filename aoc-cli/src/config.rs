//! Configuration resolution from CLI args

use crate::cli::GlobalArgs;
use crate::error::CliError;
use aoc_client::AocClient;
use std::path::{Path, PathBuf};
use tracing::debug;
use zeroize::Zeroizing;

/// Where `new` writes units when `--solutions-dir` isn't given
const DEFAULT_SOLUTIONS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../aoc-puzzles/src/solutions");

/// Resolved runtime configuration
pub struct Config {
    /// Cache directory path
    pub cache_dir: PathBuf,
    /// Root of the solution units
    pub solutions_dir: PathBuf,
    /// User ID given with `--user-id`
    pub user_id: Option<u64>,
    /// Quiet mode
    pub quiet: bool,
}

/// Session and account resolved for commands that talk to the service
pub struct Credentials {
    /// Session key (zeroized on drop)
    pub session: Zeroizing<String>,
    /// User ID for cache organization
    pub user_id: u64,
}

impl Config {
    /// Build config from CLI args. Nothing here touches the network; see
    /// [`Config::credentials`] for that.
    pub fn from_args(args: GlobalArgs) -> Self {
        Config {
            cache_dir: expand_tilde(&args.cache_dir),
            solutions_dir: args
                .solutions_dir
                .map(|dir| expand_tilde(&dir))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SOLUTIONS_DIR)),
            user_id: args.user_id,
            quiet: args.quiet,
        }
    }

    /// Resolve the session from `AOC_SESSION` (prompting when unset) and
    /// verify it against the service, checking `--user-id` if one was given
    pub fn credentials(&self, client: &AocClient) -> Result<Credentials, CliError> {
        let session = match std::env::var("AOC_SESSION") {
            Ok(session) if !session.is_empty() => Zeroizing::new(session),
            _ => prompt_session("Session token required to fetch puzzle data from adventofcode.com")?,
        };
        let user_id = verify_session(client, &session, self.user_id)?;
        debug!(user_id, "session verified");
        Ok(Credentials { session, user_id })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

/// Prompt user for session token
fn prompt_session(reason: &str) -> Result<Zeroizing<String>, CliError> {
    eprintln!("{}", reason);
    let s = rpassword::prompt_password("Enter AOC session key: ")
        .map_err(|e| CliError::Config(format!("Failed to read session: {}", e)))?;
    if s.is_empty() {
        return Err(CliError::Config("Session token is required.".to_string()));
    }
    Ok(Zeroizing::new(s))
}

/// Verify session and optionally check user ID match
fn verify_session(
    client: &AocClient,
    session: &str,
    expected_user_id: Option<u64>,
) -> Result<u64, CliError> {
    let info = client.verify_session(session)?;
    let actual_uid = info
        .user_id
        .ok_or_else(|| CliError::Config("Invalid session: could not fetch user ID".to_string()))?;

    if let Some(expected) = expected_user_id
        && actual_uid != expected
    {
        return Err(CliError::UserIdMismatch {
            expected,
            actual: actual_uid,
        });
    }
    Ok(actual_uid)
}
