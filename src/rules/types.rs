use crate::error::{RefieldError, Result};
use serde::Deserialize;

/// A rule set from a `.refield.toml` file.
///
/// Rules apply in listed order; each rule rewrites the whole buffer before
/// the next rule begins, so a replacement introduced by an earlier rule is
/// visible to every later rule.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleSet {
	/// Ordered rewrite rules.
	#[serde(default)]
	pub rules: Vec<Rule>,
}

/// A single rewrite rule: a flat field-access token and its replacement.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Rule {
	/// Literal token to match, e.g. `self.anchor_row`. Matched only at
	/// token boundaries, never inside a longer identifier.
	#[serde(rename = "match")]
	pub pattern: String,

	/// Literal replacement text, e.g. `self.selection.anchor_row`.
	/// May be empty to delete the token.
	#[serde(default)]
	pub replace: String,
}

fn is_word_char(c: char) -> bool {
	c.is_ascii_alphanumeric() || c == '_'
}

impl Rule {
	/// Validate that the match pattern is non-empty and begins and ends with
	/// an identifier character, so token-boundary anchors are well defined.
	pub fn validate(&self, index: usize) -> Result<()> {
		let first = self.pattern.chars().next();
		let last = self.pattern.chars().next_back();
		let (Some(first), Some(last)) = (first, last) else {
			return Err(RefieldError::EmptyPattern { index });
		};

		if !is_word_char(first) || !is_word_char(last) {
			return Err(RefieldError::UnboundedPattern {
				pattern: self.pattern.clone(),
			});
		}

		Ok(())
	}
}

impl RuleSet {
	/// Validate all rules in this set.
	pub fn validate(&self) -> Result<()> {
		for (index, rule) in self.rules.iter().enumerate() {
			rule.validate(index)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn rule(pattern: &str, replace: &str) -> Rule {
		Rule {
			pattern: pattern.to_string(),
			replace: replace.to_string(),
		}
	}

	#[test]
	fn test_validate_accepts_field_path() {
		let r = rule("self.anchor_row", "self.selection.anchor_row");
		assert!(r.validate(0).is_ok());
	}

	#[test]
	fn test_validate_accepts_single_identifier() {
		let r = rule("anchor_row", "row");
		assert!(r.validate(0).is_ok());
	}

	#[test]
	fn test_validate_accepts_empty_replacement() {
		let r = rule("self.anchor_row", "");
		assert!(r.validate(0).is_ok());
	}

	#[test]
	fn test_validate_rejects_empty_pattern() {
		let r = rule("", "something");
		match r.validate(3).unwrap_err() {
			RefieldError::EmptyPattern { index } => assert_eq!(index, 3),
			other => panic!("Expected EmptyPattern, got {other:?}"),
		}
	}

	#[test]
	fn test_validate_rejects_leading_punctuation() {
		let r = rule(".anchor_row", "x");
		assert!(matches!(
			r.validate(0),
			Err(RefieldError::UnboundedPattern { .. })
		));
	}

	#[test]
	fn test_validate_rejects_trailing_punctuation() {
		let r = rule("self.anchor_row(", "x");
		assert!(matches!(
			r.validate(0),
			Err(RefieldError::UnboundedPattern { .. })
		));
	}

	#[test]
	fn test_rule_set_validate_reports_first_bad_rule() {
		let set = RuleSet {
			rules: vec![rule("self.ok", "self.a.ok"), rule("", "x")],
		};
		match set.validate().unwrap_err() {
			RefieldError::EmptyPattern { index } => assert_eq!(index, 1),
			other => panic!("Expected EmptyPattern, got {other:?}"),
		}
	}
}
