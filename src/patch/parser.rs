use crate::error::{MendError, Result};
use crate::patch::types::{LoadedPatch, Patch};
use std::path::Path;

/// Parse a patch file from the given path.
pub fn parse_patch_file(path: &Path) -> Result<LoadedPatch> {
	let content = std::fs::read_to_string(path).map_err(|source| MendError::PatchRead {
		path: path.to_path_buf(),
		source,
	})?;

	let patch = parse_patch_str(&content, path)?;

	Ok(LoadedPatch {
		patch,
		path: path.to_path_buf(),
	})
}

/// Parse a patch from a string (useful for testing).
pub fn parse_patch_str(content: &str, path: &Path) -> Result<Patch> {
	let patch: Patch = toml::from_str(content).map_err(|source| MendError::PatchParse {
		path: path.to_path_buf(),
		source,
	})?;

	// Validate the parsed patch
	patch.validate(path)?;

	Ok(patch)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::patch::types::NewlineStyle;
	use std::path::PathBuf;

	#[test]
	fn test_parse_empty_patch_is_rejected() {
		let content = "";
		let path = PathBuf::from("test.toml");
		let result = parse_patch_str(content, &path);

		assert!(result.is_err());
		match result.unwrap_err() {
			MendError::EmptyPatch { path } => {
				assert_eq!(path, PathBuf::from("test.toml"));
			}
			_ => panic!("Expected EmptyPatch error"),
		}
	}

	#[test]
	fn test_parse_basic_patch() {
		let content = r#"
encoding = "windows-1252"
write-encoding = "utf-8"
newline = "crlf"
targets = ["src/generated/output.tsx"]

[[rules]]
pattern = '</div\s*>'
replacement = "</div>"
"#;
		let path = PathBuf::from("test.toml");
		let patch = parse_patch_str(content, &path).unwrap();

		assert_eq!(patch.encoding, "windows-1252");
		assert_eq!(patch.save_encoding(), "utf-8");
		assert_eq!(patch.newline, NewlineStyle::Crlf);
		assert_eq!(patch.targets, vec![PathBuf::from("src/generated/output.tsx")]);
		assert_eq!(patch.rules.len(), 1);
	}

	#[test]
	fn test_parse_defaults() {
		let content = r#"
[[rules]]
pattern = "a"
replacement = "b"
"#;
		let path = PathBuf::from("test.toml");
		let patch = parse_patch_str(content, &path).unwrap();

		assert_eq!(patch.encoding, "utf-8");
		assert_eq!(patch.save_encoding(), "utf-8");
		assert_eq!(patch.newline, NewlineStyle::Lf);
		assert!(patch.targets.is_empty());
	}

	#[test]
	fn test_parse_rules_array_of_tables() {
		let content = r#"
[[rules]]
description = "collapse dialog preamble"
pattern = '</div>\r?\n\r?\n\s*\)'
replacement = "</div>"

[[rules]]
pattern = '</div\s*>'
replacement = "</div>"
"#;
		let path = PathBuf::from("test.toml");
		let patch = parse_patch_str(content, &path).unwrap();

		assert_eq!(patch.rules.len(), 2);

		let rule1 = &patch.rules[0];
		assert_eq!(
			rule1.description,
			Some("collapse dialog preamble".to_string())
		);
		assert_eq!(rule1.label(0), "collapse dialog preamble");

		let rule2 = &patch.rules[1];
		assert!(rule2.description.is_none());
		assert_eq!(rule2.label(1), "rule 2");
	}

	#[test]
	fn test_parse_rules_inline_tables() {
		let content = r#"
rules = [
    { pattern = "foo", replacement = "bar" },
    { pattern = "baz", replacement = "qux", description = "last one" },
]
"#;
		let path = PathBuf::from("test.toml");
		let patch = parse_patch_str(content, &path).unwrap();

		assert_eq!(patch.rules.len(), 2);
	}

	#[test]
	fn test_parse_unknown_newline_label() {
		let content = r#"
newline = "cr"

[[rules]]
pattern = "a"
replacement = "b"
"#;
		let path = PathBuf::from("test.toml");
		let result = parse_patch_str(content, &path);

		assert!(result.is_err());
		match result.unwrap_err() {
			MendError::PatchParse { path, .. } => {
				assert_eq!(path, PathBuf::from("test.toml"));
			}
			_ => panic!("Expected PatchParse error"),
		}
	}

	#[test]
	fn test_parse_rule_missing_replacement() {
		let content = r#"
[[rules]]
pattern = "a"
"#;
		let path = PathBuf::from("test.toml");
		let result = parse_patch_str(content, &path);

		assert!(result.is_err());
	}
}
