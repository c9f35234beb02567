use crate::error::{RefieldError, Result};
use crate::rules::types::RuleSet;
use std::path::Path;

/// Parse a rules file from the given path.
pub fn parse_rules_file(path: &Path) -> Result<RuleSet> {
	let content = std::fs::read_to_string(path).map_err(|source| RefieldError::RulesReadError {
		path: path.to_path_buf(),
		source,
	})?;

	parse_rules_str(&content, path)
}

/// Parse a rule set from a string (useful for testing).
pub fn parse_rules_str(content: &str, path: &Path) -> Result<RuleSet> {
	let rules: RuleSet =
		toml::from_str(content).map_err(|source| RefieldError::RulesParseError {
			path: path.to_path_buf(),
			source,
		})?;

	// Validate the parsed rule set
	rules.validate()?;

	Ok(rules)
}
