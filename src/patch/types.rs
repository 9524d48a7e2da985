use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Top-level patch definition from a `.mend.toml` file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Patch {
	/// Encoding label used to decode targets (a WHATWG label such as
	/// "utf-8" or "windows-1252").
	#[serde(default = "default_encoding")]
	pub encoding: String,

	/// Encoding label used to encode on save. Defaults to `encoding`.
	#[serde(default)]
	pub write_encoding: Option<String>,

	/// Line-terminator style forced onto the output, regardless of the
	/// host platform's convention.
	#[serde(default)]
	pub newline: NewlineStyle,

	/// Default target files, used when none are given on the command line.
	#[serde(default)]
	pub targets: Vec<PathBuf>,

	/// Rewrite rules, applied in order.
	/// Order matters: later patterns may rely on earlier rewrites having
	/// already normalized the text.
	#[serde(default)]
	pub rules: Vec<RewriteRule>,
}

fn default_encoding() -> String {
	"utf-8".to_string()
}

impl Default for Patch {
	fn default() -> Self {
		Patch {
			encoding: default_encoding(),
			write_encoding: None,
			newline: NewlineStyle::default(),
			targets: Vec::new(),
			rules: Vec::new(),
		}
	}
}

/// A single regex rewrite applied to the whole file content.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RewriteRule {
	/// Regex pattern to search for.
	pub pattern: String,

	/// Replacement text. `$1`/`$name` refer to capture groups.
	pub replacement: String,

	/// Label used when reporting match counts.
	pub description: Option<String>,
}

/// Line-terminator convention written on save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewlineStyle {
	/// Unix `\n`.
	#[default]
	Lf,
	/// Windows `\r\n`.
	Crlf,
}

impl NewlineStyle {
	/// The literal terminator this style writes.
	pub fn as_str(&self) -> &'static str {
		match self {
			NewlineStyle::Lf => "\n",
			NewlineStyle::Crlf => "\r\n",
		}
	}

	/// The label this style takes in a patch file.
	pub fn label(&self) -> &'static str {
		match self {
			NewlineStyle::Lf => "lf",
			NewlineStyle::Crlf => "crlf",
		}
	}
}

/// A parsed patch with its source path for reporting.
#[derive(Debug, Clone)]
pub struct LoadedPatch {
	/// The parsed patch.
	pub patch: Patch,

	/// The path this patch was loaded from.
	pub path: PathBuf,
}

impl RewriteRule {
	/// Display label for reports: the description, or the 1-based position.
	pub fn label(&self, index: usize) -> String {
		match &self.description {
			Some(description) => description.clone(),
			None => format!("rule {}", index + 1),
		}
	}
}

impl Patch {
	/// Validate a parsed patch. A patch with no rules is rejected outright
	/// rather than silently doing nothing to every target.
	pub fn validate(&self, path: &Path) -> Result<(), crate::error::MendError> {
		if self.rules.is_empty() {
			return Err(crate::error::MendError::EmptyPatch {
				path: path.to_path_buf(),
			});
		}
		Ok(())
	}

	/// The encoding label used on save.
	pub fn save_encoding(&self) -> &str {
		self.write_encoding.as_deref().unwrap_or(&self.encoding)
	}
}
