//! Refield - CLI tool for rewriting flat field accesses into nested field
//! paths after struct refactors.
//!
//! This library provides the core functionality for refield, including:
//! - Rules file parsing and discovery
//! - Compilation of literal tokens into boundary-anchored patterns
//! - The in-place rewrite engine (read, transform, write back)
//!
//! # Example
//!
//! ```no_run
//! use refield::engine::rewrite_file;
//! use refield::rules::{compile_rules, parse_rules_file};
//! use std::path::Path;
//!
//! let rules = parse_rules_file(Path::new(".refield.toml")).unwrap();
//! let compiled = compile_rules(&rules).unwrap();
//!
//! let report = rewrite_file(Path::new("src/lib.rs"), &compiled).unwrap();
//! println!("{} replacements", report.total);
//! ```

pub mod engine;
pub mod error;
pub mod rules;

pub use error::{RefieldError, Result};
