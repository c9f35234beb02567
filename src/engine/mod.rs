//! The rewrite mechanism: read a file, apply an ordered rule set across the
//! whole buffer, write the result back in place.
//!
//! The engine is purely lexical. It never parses the file it rewrites, and
//! it never checks that the output is well-formed. The transform runs
//! entirely in memory before the write, so a failed read or an unwritable
//! target leaves the original file untouched.

use crate::error::{RefieldError, Result};
use crate::rules::CompiledRule;
use regex::NoExpand;
use std::path::Path;

/// Outcome of a completed rewrite.
#[derive(Debug)]
pub struct RewriteReport {
	/// Replacement count per rule, in rule order.
	pub per_rule: Vec<usize>,

	/// Total replacements across all rules.
	pub total: usize,
}

impl RewriteReport {
	fn from_counts(per_rule: Vec<usize>) -> Self {
		let total = per_rule.iter().sum();
		RewriteReport { per_rule, total }
	}
}

/// Apply all rules to `input`, in order, returning the rewritten buffer and
/// the replacement count per rule.
///
/// Each rule rewrites every non-overlapping, leftmost-first occurrence in
/// the entire current buffer before the next rule begins: a rule never
/// re-matches its own replacement text, but later rules see it. Replacement
/// text is inserted literally (`NoExpand`), so `$` is never a capture
/// reference. A rule that matches nothing is a no-op.
pub fn apply_rules(input: &str, rules: &[CompiledRule]) -> (String, Vec<usize>) {
	let mut buffer = input.to_string();
	let mut counts = Vec::with_capacity(rules.len());

	for rule in rules {
		let hits = rule.regex.find_iter(&buffer).count();
		if hits > 0 {
			buffer = rule
				.regex
				.replace_all(&buffer, NoExpand(&rule.rule.replace))
				.into_owned();
		}
		counts.push(hits);
	}

	(buffer, counts)
}

/// Rewrite the file at `path` in place.
///
/// Reads the whole file, applies the rules with [`apply_rules`], and writes
/// the result back, overwriting the original content. No backup is kept.
pub fn rewrite_file(path: &Path, rules: &[CompiledRule]) -> Result<RewriteReport> {
	let content = std::fs::read_to_string(path).map_err(|source| RefieldError::SourceReadError {
		path: path.to_path_buf(),
		source,
	})?;

	let (rewritten, per_rule) = apply_rules(&content, rules);

	std::fs::write(path, &rewritten).map_err(|source| RefieldError::SourceWriteError {
		path: path.to_path_buf(),
		source,
	})?;

	Ok(RewriteReport::from_counts(per_rule))
}
