use crate::error::{RefieldError, Result};
use crate::rules::types::{Rule, RuleSet};
use regex::Regex;

/// A rule compiled for matching.
///
/// The match pattern is a literal token, so it is escaped and wrapped in
/// word-boundary anchors: `self.anchor_row` matches standing alone or next
/// to punctuation, but never inside `xself.anchor_rowx`.
#[derive(Debug, Clone)]
pub struct CompiledRule {
	/// The original rule.
	pub rule: Rule,

	/// Boundary-anchored regex for the match pattern.
	pub regex: Regex,
}

impl CompiledRule {
	/// Compile a single rule.
	pub fn compile(rule: &Rule) -> Result<Self> {
		let anchored = format!(r"\b{}\b", regex::escape(&rule.pattern));
		let regex = Regex::new(&anchored).map_err(|source| RefieldError::InvalidPattern {
			pattern: rule.pattern.clone(),
			source,
		})?;

		Ok(CompiledRule {
			rule: rule.clone(),
			regex,
		})
	}
}

/// Compile all rules in a rule set, preserving order.
pub fn compile_rules(rules: &RuleSet) -> Result<Vec<CompiledRule>> {
	rules.validate()?;
	rules.rules.iter().map(CompiledRule::compile).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn compiled(pattern: &str, replace: &str) -> CompiledRule {
		CompiledRule::compile(&Rule {
			pattern: pattern.to_string(),
			replace: replace.to_string(),
		})
		.unwrap()
	}

	#[test]
	fn test_matches_standalone_token() {
		let rule = compiled("self.anchor_row", "self.selection.anchor_row");
		assert!(rule.regex.is_match("self.anchor_row"));
	}

	#[test]
	fn test_no_match_inside_longer_identifier() {
		let rule = compiled("self.anchor_row", "self.selection.anchor_row");
		assert!(!rule.regex.is_match("xself.anchor_rowx"));
		assert!(!rule.regex.is_match("self.anchor_rowx"));
		assert!(!rule.regex.is_match("xself.anchor_row"));
	}

	#[test]
	fn test_matches_adjacent_to_punctuation() {
		let rule = compiled("self.anchor_row", "self.selection.anchor_row");
		assert!(rule.regex.is_match("(self.anchor_row)"));
		assert!(rule.regex.is_match("self.anchor_row, other"));
		assert!(rule.regex.is_match("self.anchor_row;"));
		assert!(rule.regex.is_match("self.anchor_row = 5"));
	}

	#[test]
	fn test_matches_followed_by_field_access() {
		// `.` is not a word character, so `self.anchor_row.max(x)` matches.
		let rule = compiled("self.anchor_row", "self.selection.anchor_row");
		assert!(rule.regex.is_match("self.anchor_row.max(x)"));
	}

	#[test]
	fn test_dots_in_pattern_are_literal() {
		let rule = compiled("self.anchor_row", "self.selection.anchor_row");
		assert!(!rule.regex.is_match("selfxanchor_row"));
	}

	#[test]
	fn test_compile_rules_preserves_order() {
		let set = RuleSet {
			rules: vec![
				Rule {
					pattern: "self.undo_stack".to_string(),
					replace: "self.undo_redo.undo_stack".to_string(),
				},
				Rule {
					pattern: "self.redo_stack".to_string(),
					replace: "self.undo_redo.redo_stack".to_string(),
				},
			],
		};
		let compiled = compile_rules(&set).unwrap();
		assert_eq!(compiled.len(), 2);
		assert_eq!(compiled[0].rule.pattern, "self.undo_stack");
		assert_eq!(compiled[1].rule.pattern, "self.redo_stack");
	}

	#[test]
	fn test_compile_rules_rejects_invalid_rule() {
		let set = RuleSet {
			rules: vec![Rule {
				pattern: String::new(),
				replace: "x".to_string(),
			}],
		};
		assert!(compile_rules(&set).is_err());
	}
}
