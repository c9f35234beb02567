/// Generate the template `.refield.toml` written by `--init`.
///
/// The stock table renames flat editor-state fields into the nested
/// sub-structs they were moved into (editing, selection, search, undo/redo,
/// and resize state). It doubles as a worked example of the rule format.
pub fn generate_init_template() -> String {
	let template = r#"# refield rules: rewrite flat field accesses into nested field paths.
#
# Rules apply in listed order. Each `match` is a literal token, matched only
# at identifier boundaries (never inside a longer name). Order rules so that
# no later `match` occurs in an earlier `replace`, unless you want cascades.

# Editing fields
[[rules]]
match = "self.editing_row"
replace = "self.editing.editing_row"

[[rules]]
match = "self.editing_col"
replace = "self.editing.editing_col"

[[rules]]
match = "self.is_editing"
replace = "self.editing.is_editing"

[[rules]]
match = "self.original_value"
replace = "self.editing.original_value"

[[rules]]
match = "self.editing_cell"
replace = "self.editing.editing_cell"

# Selection fields
[[rules]]
match = "self.selected_cells"
replace = "self.selection.selected_cells"

[[rules]]
match = "self.anchor_row"
replace = "self.selection.anchor_row"

[[rules]]
match = "self.anchor_col"
replace = "self.selection.anchor_col"

[[rules]]
match = "self.selection_anchor"
replace = "self.selection.selection_anchor"

# Search fields
[[rules]]
match = "self.search_query"
replace = "self.search.search_query"

[[rules]]
match = "self.search_results"
replace = "self.search.search_results"

[[rules]]
match = "self.current_search_index"
replace = "self.search.current_search_index"

[[rules]]
match = "self.search_case_sensitive"
replace = "self.search.search_case_sensitive"

[[rules]]
match = "self.search_whole_word"
replace = "self.search.search_whole_word"

# Undo/Redo fields
[[rules]]
match = "self.undo_stack"
replace = "self.undo_redo.undo_stack"

[[rules]]
match = "self.redo_stack"
replace = "self.undo_redo.redo_stack"

# Resize fields
[[rules]]
match = "self.resize_col"
replace = "self.resize.resize_col"

[[rules]]
match = "self.resize_start_x"
replace = "self.resize.resize_start_x"

[[rules]]
match = "self.resize_start_width"
replace = "self.resize.resize_start_width"

[[rules]]
match = "self.is_resizing"
replace = "self.resize.is_resizing"

[[rules]]
match = "self.resizing_column"
replace = "self.resize.resizing_column"

[[rules]]
match = "self.resizing_row"
replace = "self.resize.resizing_row"

[[rules]]
match = "self.resize_start_pos"
replace = "self.resize.resize_start_pos"

[[rules]]
match = "self.resize_start_size"
replace = "self.resize.resize_start_size"
"#;

	template.to_string()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rules::compiler::compile_rules;
	use crate::rules::parser::parse_rules_str;
	use std::path::Path;

	#[test]
	fn test_template_parses_and_compiles() {
		let template = generate_init_template();
		let rules = parse_rules_str(&template, Path::new(".refield.toml")).unwrap();
		assert_eq!(rules.rules.len(), 24);
		assert!(compile_rules(&rules).is_ok());
	}

	#[test]
	fn test_template_rules_never_cascade() {
		// No rule's replacement may contain a later rule's match token,
		// otherwise re-running the table would not be a no-op.
		let template = generate_init_template();
		let rules = parse_rules_str(&template, Path::new(".refield.toml")).unwrap();
		let compiled = compile_rules(&rules).unwrap();

		for (i, earlier) in compiled.iter().enumerate() {
			for later in &compiled[i..] {
				assert!(
					!later.regex.is_match(&earlier.rule.replace),
					"rule `{}` matches inside replacement `{}`",
					later.rule.pattern,
					earlier.rule.replace
				);
			}
		}
	}
}
