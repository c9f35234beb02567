use crate::error::{RefieldError, Result};
use std::path::{Path, PathBuf};

/// File name searched for when no explicit rules path is given.
pub const RULES_FILE_NAME: &str = ".refield.toml";

/// Discover the rules file for a rewrite started in `start_dir`.
///
/// The lookup order is:
/// 1. `.refield.toml` in `start_dir`, then in each ancestor directory
/// 2. `~/.refield.toml`
///
/// The first file found wins; there is no merging across files.
/// Returns `Ok(None)` when no rules file exists anywhere on that path.
pub fn find_rules_file(start_dir: &Path) -> Result<Option<PathBuf>> {
	if let Some(found) = find_in_ancestors(start_dir) {
		return Ok(Some(found));
	}

	let user_path = user_rules_path()?;
	if user_path.exists() {
		return Ok(Some(user_path));
	}

	Ok(None)
}

/// Walk up from `start_dir` looking for a rules file.
pub fn find_in_ancestors(start_dir: &Path) -> Option<PathBuf> {
	let mut current_dir = start_dir.to_path_buf();

	loop {
		let candidate = current_dir.join(RULES_FILE_NAME);
		if candidate.exists() {
			return Some(candidate);
		}

		if let Some(parent) = current_dir.parent() {
			current_dir = parent.to_path_buf();
		} else {
			return None;
		}
	}
}

/// Path to the user-level rules file (`~/.refield.toml`).
pub fn user_rules_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(RefieldError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(RULES_FILE_NAME))
}
