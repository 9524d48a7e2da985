//! Target file I/O for mend.
//!
//! This module handles:
//! - Reading and decoding target files into memory
//! - Newline normalization and encoding on save
//! - Backup copies before the in-place overwrite

pub mod codec;

use crate::error::{MendError, Result};
use crate::patch::NewlineStyle;
use encoding_rs::Encoding;
use std::path::{Path, PathBuf};

/// Read and decode a target file into memory.
pub fn load_target(path: &Path, encoding: &'static Encoding) -> Result<String> {
	let bytes = std::fs::read(path).map_err(|source| MendError::TargetRead {
		path: path.to_path_buf(),
		source,
	})?;

	codec::decode(&bytes, encoding, path)
}

/// Normalize newlines, encode, and overwrite the target in place.
///
/// The whole content is written in one `fs::write`; there is no streaming
/// and no partial-write recovery. Concurrent invocations against the same
/// path can race on this write.
pub fn save_target(
	path: &Path,
	text: &str,
	encoding: &'static Encoding,
	newline: NewlineStyle,
) -> Result<()> {
	let normalized = codec::normalize_newlines(text, newline);
	let bytes = codec::encode(&normalized, encoding, path)?;

	std::fs::write(path, bytes).map_err(|source| MendError::TargetWrite {
		path: path.to_path_buf(),
		source,
	})
}

/// The sibling path a backup copy is written to.
pub fn backup_path(path: &Path) -> PathBuf {
	let mut name = path
		.file_name()
		.map(|n| n.to_os_string())
		.unwrap_or_default();
	name.push(".orig");
	path.with_file_name(name)
}

/// Copy the original file bytes aside before the overwrite.
///
/// A plain byte copy, so the backup survives encoding and newline changes.
pub fn write_backup(path: &Path) -> Result<PathBuf> {
	let backup = backup_path(path);
	std::fs::copy(path, &backup).map_err(|source| MendError::BackupWrite {
		path: backup.clone(),
		source,
	})?;
	Ok(backup)
}
