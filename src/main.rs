use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use refield::engine::rewrite_file;
use refield::error::RefieldError;
use refield::rules::{
	RULES_FILE_NAME, compile_rules, find_rules_file, generate_init_template, parse_rules_file,
	user_rules_path,
};

#[derive(Parser)]
#[command(name = "refield")]
#[command(
	author,
	version,
	about = "CLI tool for rewriting flat field accesses into nested field paths after struct refactors"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Rules file to use instead of discovering .refield.toml
	#[arg(long, value_name = "PATH")]
	rules: Option<PathBuf>,

	/// Create a template .refield.toml in the current directory
	#[arg(long)]
	init: bool,

	/// Overwrite existing .refield.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,

	/// File to rewrite in place
	#[arg(value_name = "FILE")]
	file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
	/// Rule set management commands
	Rules {
		#[command(subcommand)]
		action: RulesAction,
	},
}

#[derive(Subcommand)]
enum RulesAction {
	/// Display the discovered rule set with its source path
	Show,
	/// Check the rules file for errors without rewriting anything
	Validate,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	// Handle --init
	if cli.init {
		return handle_init(cli.force);
	}

	// Handle subcommands
	if let Some(command) = cli.command {
		return match command {
			Commands::Rules { action } => match action {
				RulesAction::Show => handle_rules_show(cli.rules.as_deref()),
				RulesAction::Validate => handle_rules_validate(cli.rules.as_deref()),
			},
		};
	}

	// Handle a rewrite
	if let Some(file) = cli.file {
		return handle_rewrite(&file, cli.rules.as_deref());
	}

	// No target specified - this shouldn't happen due to arg_required_else_help
	Ok(ExitCode::SUCCESS)
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let rules_path = PathBuf::from(RULES_FILE_NAME);

	if rules_path.exists() && !force {
		anyhow::bail!("{RULES_FILE_NAME} already exists. Use --force to overwrite.");
	}

	let template = generate_init_template();
	std::fs::write(&rules_path, template)
		.with_context(|| format!("Failed to write {}", rules_path.display()))?;

	println!("Created {RULES_FILE_NAME}");
	Ok(ExitCode::SUCCESS)
}

fn handle_rules_show(rules_flag: Option<&Path>) -> Result<ExitCode> {
	let Some(rules_path) = resolve_rules_path(rules_flag)? else {
		println!("No rules file found.");
		return Ok(ExitCode::SUCCESS);
	};

	let rules = parse_rules_file(&rules_path).context("Failed to load rules")?;

	println!("# Source: {}", rules_path.display());
	println!("# rules: {}", rules.rules.len());
	println!();

	for (i, rule) in rules.rules.iter().enumerate() {
		println!("  Rule {}:", i + 1);
		println!("    match: {}", rule.pattern);
		println!("    replace: {}", rule.replace);
		println!();
	}

	if let Ok(user_path) = user_rules_path() {
		println!("User rules path: {}", user_path.display());
		if user_path.exists() {
			println!("  (exists)");
		} else {
			println!("  (not found)");
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_rules_validate(rules_flag: Option<&Path>) -> Result<ExitCode> {
	let Some(rules_path) = resolve_rules_path(rules_flag)? else {
		println!("No rules file found.");
		return Ok(ExitCode::SUCCESS);
	};

	match parse_rules_file(&rules_path).and_then(|rules| compile_rules(&rules).map(|_| rules)) {
		Ok(rules) => {
			println!(
				"Rules file is valid: {} ({} rules)",
				rules_path.display(),
				rules.rules.len()
			);
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Rules error: {e}");
			Ok(ExitCode::FAILURE)
		}
	}
}

fn handle_rewrite(file: &Path, rules_flag: Option<&Path>) -> Result<ExitCode> {
	let rules_path = resolve_rules_path(rules_flag)?.ok_or_else(|| {
		anyhow::anyhow!("No rules file found. Run `refield --init` to create {RULES_FILE_NAME}.")
	})?;

	let rules = parse_rules_file(&rules_path)
		.with_context(|| format!("Failed to load rules from {}", rules_path.display()))?;

	let compiled = compile_rules(&rules).context("Failed to compile rules")?;

	let report = rewrite_file(file, &compiled)
		.with_context(|| format!("Failed to rewrite {}", file.display()))?;

	println!(
		"Fixed field access paths in {} ({} replacements)",
		file.display(),
		report.total
	);
	Ok(ExitCode::SUCCESS)
}

/// Resolve the rules file path: an explicit --rules flag must exist;
/// otherwise discover `.refield.toml` from the current directory upward,
/// then in the home directory.
fn resolve_rules_path(rules_flag: Option<&Path>) -> Result<Option<PathBuf>> {
	if let Some(path) = rules_flag {
		if !path.exists() {
			return Err(RefieldError::RulesNotFound {
				path: path.to_path_buf(),
			}
			.into());
		}
		return Ok(Some(path.to_path_buf()));
	}

	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	Ok(find_rules_file(&cwd)?)
}
