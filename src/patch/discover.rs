use crate::error::{MendError, Result};
use std::path::{Path, PathBuf};

/// File name looked for during the directory walk.
pub const PATCH_FILE_NAME: &str = ".mend.toml";

/// Find the nearest `.mend.toml`, walking up from `start_dir`.
///
/// There is no merging across directories: a patch file is a self-contained
/// unit, so the nearest one wins outright.
pub fn discover_patch(start_dir: &Path) -> Option<PathBuf> {
	let mut current_dir = start_dir.to_path_buf();

	loop {
		let candidate = current_dir.join(PATCH_FILE_NAME);
		if candidate.exists() {
			return Some(candidate);
		}

		// Move to parent directory
		if let Some(parent) = current_dir.parent() {
			current_dir = parent.to_path_buf();
		} else {
			return None;
		}
	}
}

/// Resolve the patch file to use: an explicit `--patch` path, or discovery.
pub fn resolve_patch_path(explicit: Option<&Path>, cwd: &Path) -> Result<PathBuf> {
	if let Some(path) = explicit {
		if path.exists() {
			return Ok(path.to_path_buf());
		}
		return Err(MendError::PatchNotFound {
			path: path.to_path_buf(),
		});
	}

	discover_patch(cwd).ok_or_else(|| MendError::NoPatchFile {
		start_dir: cwd.to_path_buf(),
	})
}
