use crate::error::{MendError, Result};
use crate::patch::Patch;
use regex::Regex;

/// A rule compiled and ready to apply.
#[derive(Debug)]
pub struct CompiledRule {
	/// Compiled search pattern.
	pub regex: Regex,

	/// Replacement text. `$1`/`$name` refer to capture groups.
	pub replacement: String,

	/// Display label used in reports.
	pub label: String,
}

/// The result of applying one rule: its label and how many times it matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
	/// The rule's display label.
	pub label: String,

	/// Number of substitutions made. Zero is a normal outcome.
	pub matches: usize,
}

impl CompiledRule {
	/// Apply this rule to the whole content.
	///
	/// Standard leftmost-first, non-overlapping substitution over the full
	/// text. Returns the transformed text and the number of replacements.
	pub fn apply(&self, text: &str) -> (String, usize) {
		let matches = self.regex.find_iter(text).count();
		if matches == 0 {
			return (text.to_string(), 0);
		}

		let rewritten = self.regex.replace_all(text, self.replacement.as_str());
		(rewritten.into_owned(), matches)
	}
}

/// Compile a regex pattern string.
fn compile_regex(pattern: &str) -> Result<Regex> {
	Regex::new(pattern).map_err(|source| MendError::InvalidRegex {
		pattern: pattern.to_string(),
		source,
	})
}

/// Compile all rules in a patch, preserving their order.
pub fn compile_rules(patch: &Patch) -> Result<Vec<CompiledRule>> {
	patch
		.rules
		.iter()
		.enumerate()
		.map(|(i, rule)| {
			Ok(CompiledRule {
				regex: compile_regex(&rule.pattern)?,
				replacement: rule.replacement.clone(),
				label: rule.label(i),
			})
		})
		.collect()
}

/// Apply each rule in sequence to the cumulative result of the previous one.
///
/// Returns the final text and one outcome per rule, in rule order.
pub fn apply_all(text: &str, rules: &[CompiledRule]) -> (String, Vec<RuleOutcome>) {
	let mut current = text.to_string();
	let mut outcomes = Vec::with_capacity(rules.len());

	for rule in rules {
		let (next, matches) = rule.apply(&current);
		outcomes.push(RuleOutcome {
			label: rule.label.clone(),
			matches,
		});
		current = next;
	}

	(current, outcomes)
}
