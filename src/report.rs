//! Per-target reporting for mend.
//!
//! This module handles:
//! - Per-rule match-count summaries
//! - Zero-match callouts
//! - Unified diffs for dry runs

use crate::rules::RuleOutcome;
use similar::TextDiff;
use std::fmt::Write;
use std::path::PathBuf;

/// Outcome of patching one target file.
#[derive(Debug)]
pub struct TargetReport {
	/// The target path.
	pub path: PathBuf,

	/// Per-rule outcomes, in rule order.
	pub outcomes: Vec<RuleOutcome>,

	/// Whether the written content differs from what was read.
	pub changed: bool,
}

impl TargetReport {
	/// Total substitutions across all rules.
	pub fn total_matches(&self) -> usize {
		self.outcomes.iter().map(|o| o.matches).sum()
	}

	/// Labels of rules that matched nothing.
	pub fn zero_match_labels(&self) -> Vec<&str> {
		self.outcomes
			.iter()
			.filter(|o| o.matches == 0)
			.map(|o| o.label.as_str())
			.collect()
	}

	/// Render the per-target summary lines.
	pub fn render(&self) -> String {
		let total = self.total_matches();
		let mut out = String::new();

		let _ = writeln!(
			out,
			"{}: {} substitution{}",
			self.path.display(),
			total,
			if total == 1 { "" } else { "s" }
		);

		for outcome in &self.outcomes {
			let _ = writeln!(
				out,
				"  {}: {} match{}",
				outcome.label,
				outcome.matches,
				if outcome.matches == 1 { "" } else { "es" }
			);
		}

		// A rule that matched nothing usually means the target no longer has
		// the malformed shape its pattern expects.
		for label in self.zero_match_labels() {
			let _ = writeln!(
				out,
				"  note: rule `{}` matched nothing (target may already be patched)",
				label
			);
		}

		out
	}
}

/// Render a unified diff between the original and patched content.
pub fn render_diff(old: &str, new: &str) -> String {
	TextDiff::from_lines(old, new)
		.unified_diff()
		.context_radius(3)
		.header("before", "after")
		.to_string()
}
