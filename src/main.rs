use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use mend_cli::MendError;
use mend_cli::patch::{
	LoadedPatch, PATCH_FILE_NAME, init_template, parse_patch_file, resolve_patch_path,
};
use mend_cli::report::{TargetReport, render_diff};
use mend_cli::rules::{apply_all, compile_rules};
use mend_cli::target::codec::{normalize_newlines, resolve_encoding, resolve_write_encoding};
use mend_cli::target::{load_target, save_target, write_backup};

#[derive(Parser)]
#[command(name = "mend")]
#[command(
	author,
	version,
	about = "CLI tool for patching text files with ordered regex rewrite rules"
)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Patch file to apply (default: nearest .mend.toml, searching upward)
	#[arg(short, long, value_name = "FILE")]
	patch: Option<PathBuf>,

	/// Report match counts and the diff without writing anything
	#[arg(long)]
	dry_run: bool,

	/// Keep a .orig copy of each target before overwriting it
	#[arg(long)]
	backup: bool,

	/// Create a template .mend.toml in the current directory
	#[arg(long)]
	init: bool,

	/// Overwrite existing .mend.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,

	/// Files to patch (default: the `targets` list from the patch file)
	#[arg(value_name = "TARGET")]
	targets: Vec<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
	/// Patch rule inspection commands
	Rules {
		#[command(subcommand)]
		action: RulesAction,
	},
}

#[derive(Subcommand)]
enum RulesAction {
	/// Display the resolved patch file: settings and each rule in order
	Show,
	/// Check the patch file for errors without touching any target
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
				RulesAction::Show => handle_rules_show(cli.patch.as_deref()),
				RulesAction::Validate => handle_rules_validate(cli.patch.as_deref()),
			},
		};
	}

	handle_patch(&cli)
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let patch_path = PathBuf::from(PATCH_FILE_NAME);

	if patch_path.exists() && !force {
		anyhow::bail!(".mend.toml already exists. Use --force to overwrite.");
	}

	std::fs::write(&patch_path, init_template())
		.with_context(|| format!("Failed to write {}", patch_path.display()))?;

	println!("Created .mend.toml");
	Ok(ExitCode::SUCCESS)
}

fn handle_rules_show(explicit: Option<&Path>) -> Result<ExitCode> {
	let loaded = load_patch(explicit)?;

	println!("# Source: {}", loaded.path.display());
	println!("# encoding: {}", loaded.patch.encoding);
	println!("# write-encoding: {}", loaded.patch.save_encoding());
	println!("# newline: {}", loaded.patch.newline.label());
	if !loaded.patch.targets.is_empty() {
		println!("# targets:");
		for target in &loaded.patch.targets {
			println!("#   {}", target.display());
		}
	}
	println!("# rules: {}", loaded.patch.rules.len());
	println!();

	for (i, rule) in loaded.patch.rules.iter().enumerate() {
		if let Some(ref description) = rule.description {
			println!("  Rule {}: {}", i + 1, description);
		} else {
			println!("  Rule {}:", i + 1);
		}
		println!("    pattern: {}", rule.pattern);
		// {:?} keeps embedded newlines visible
		println!("    replacement: {:?}", rule.replacement);
		println!();
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_rules_validate(explicit: Option<&Path>) -> Result<ExitCode> {
	match check_patch(explicit) {
		Ok(loaded) => {
			println!(
				"{} is valid ({} rules)",
				loaded.path.display(),
				loaded.patch.rules.len()
			);
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Patch error: {}", e);
			Ok(ExitCode::FAILURE)
		}
	}
}

/// Load the patch and run every check short of touching a target:
/// compile the regexes and resolve both encodings.
fn check_patch(explicit: Option<&Path>) -> Result<LoadedPatch> {
	let loaded = load_patch(explicit)?;

	compile_rules(&loaded.patch).context("Failed to compile rules")?;
	resolve_encoding(&loaded.patch.encoding)?;
	resolve_write_encoding(loaded.patch.save_encoding())?;

	Ok(loaded)
}

fn load_patch(explicit: Option<&Path>) -> Result<LoadedPatch> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let patch_path = resolve_patch_path(explicit, &cwd)?;
	let loaded = parse_patch_file(&patch_path)?;
	Ok(loaded)
}

fn handle_patch(cli: &Cli) -> Result<ExitCode> {
	let loaded = load_patch(cli.patch.as_deref())?;

	let rules = compile_rules(&loaded.patch).context("Failed to compile rules")?;
	let read_encoding = resolve_encoding(&loaded.patch.encoding)?;
	let write_encoding = resolve_write_encoding(loaded.patch.save_encoding())?;

	let targets: Vec<PathBuf> = if cli.targets.is_empty() {
		loaded.patch.targets.clone()
	} else {
		cli.targets.clone()
	};

	if targets.is_empty() {
		return Err(MendError::NoTargets.into());
	}

	if cli.dry_run {
		println!("Dry run: no files will be written.");
	}

	for target in &targets {
		let original = load_target(target, read_encoding)?;
		let (patched, outcomes) = apply_all(&original, &rules);
		let normalized = normalize_newlines(&patched, loaded.patch.newline);

		let report = TargetReport {
			path: target.clone(),
			outcomes,
			changed: normalized != original,
		};

		if cli.dry_run {
			print!("{}", report.render());
			if report.changed {
				print!("{}", render_diff(&original, &normalized));
			} else {
				println!("  (no changes)");
			}
			continue;
		}

		if cli.backup {
			let backup = write_backup(target)?;
			println!("Backed up {} to {}", target.display(), backup.display());
		}

		save_target(target, &patched, write_encoding, loaded.patch.newline)?;
		print!("{}", report.render());
	}

	Ok(ExitCode::SUCCESS)
}
