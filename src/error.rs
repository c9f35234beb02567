use std::path::PathBuf;

/// Library-level structured errors for refield.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum RefieldError {
	#[error("Rules file not found: {path}")]
	RulesNotFound { path: PathBuf },

	#[error("Failed to read rules file: {path}")]
	RulesReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse rules file: {path}")]
	RulesParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Rule {index} has an empty match pattern")]
	EmptyPattern { index: usize },

	#[error("Match pattern must start and end with an identifier character: {pattern}")]
	UnboundedPattern { pattern: String },

	#[error("Invalid match pattern in rule: {pattern}")]
	InvalidPattern {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Failed to read source file: {path}")]
	SourceReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write source file: {path}")]
	SourceWriteError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

/// Result type alias using RefieldError.
pub type Result<T> = std::result::Result<T, RefieldError>;
