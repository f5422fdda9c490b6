//! Banned value management
//!
//! Loads and queries the exact-match denylist used by [`PasswordPolicy`](crate::PasswordPolicy).

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BannedListError {
    #[error("Banned values file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read banned values file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Banned values file is empty")]
    EmptyFile,
}

/// Exact-match, case-sensitive set of banned values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BannedValues {
    values: HashSet<String>,
}

impl BannedValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        self.values.insert(value.into())
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for BannedValues {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Returns the banned values file path.
///
/// Priority:
/// 1. Environment variable `VALIDATION_BANNED_VALUES_PATH`
/// 2. Default path `./assets/banned-values.txt`
pub fn banned_values_path() -> PathBuf {
    std::env::var("VALIDATION_BANNED_VALUES_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/banned-values.txt"))
}

/// Loads the banned values from the file named by [`banned_values_path`].
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File contains no values
pub fn load_banned_values() -> Result<BannedValues, BannedListError> {
    load_banned_values_from_path(banned_values_path())
}

/// Loads banned values from a specific file, one value per line.
///
/// Lines are trimmed and blank lines skipped. Case is preserved: matching is
/// exact.
///
/// # Example
///
/// ```rust,no_run
/// use validation_worker::{load_banned_values_from_path, PasswordPolicy};
///
/// let banned = load_banned_values_from_path("/etc/myapp/banned.txt")?;
/// let policy = PasswordPolicy::new().banned_values(banned);
/// # Ok::<(), validation_worker::BannedListError>(())
/// ```
pub fn load_banned_values_from_path<P: AsRef<Path>>(path: P) -> Result<BannedValues, BannedListError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Banned values load FAILED: FileNotFound {:?}", path);
        return Err(BannedListError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    let banned: BannedValues = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    if banned.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Banned values load FAILED: Empty file {:?}", path);
        return Err(BannedListError::EmptyFile);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Banned values loaded: {} entries from {:?}", banned.len(), path);

    Ok(banned)
}
