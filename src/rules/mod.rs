//! Rule policy for refield.
//!
//! This module handles:
//! - Rule and rule-set types with validation
//! - TOML rules file parsing
//! - `.refield.toml` discovery (ancestors, then home directory)
//! - Compilation of literal tokens into boundary-anchored regexes

pub mod compiler;
pub mod locate;
pub mod parser;
pub mod template;
pub mod types;

pub use compiler::{CompiledRule, compile_rules};
pub use locate::{RULES_FILE_NAME, find_rules_file, user_rules_path};
pub use parser::{parse_rules_file, parse_rules_str};
pub use template::generate_init_template;
pub use types::{Rule, RuleSet};
