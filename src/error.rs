use std::path::PathBuf;

/// Library-level structured errors for mend.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum MendError {
	#[error("Patch file not found: {path}")]
	PatchNotFound { path: PathBuf },

	#[error("No .mend.toml found in {start_dir} or any parent directory")]
	NoPatchFile { start_dir: PathBuf },

	#[error("Failed to read patch file: {path}")]
	PatchRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse patch file: {path}")]
	PatchParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Patch file defines no rules: {path}")]
	EmptyPatch { path: PathBuf },

	#[error("Invalid regex pattern in rule: {pattern}")]
	InvalidRegex {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Unknown encoding label: {label}")]
	UnknownEncoding { label: String },

	#[error("Encoding cannot be used for output: {label}")]
	UnsupportedWriteEncoding { label: String },

	#[error("No targets given on the command line or in the patch file")]
	NoTargets,

	#[error("Failed to read target file: {path}")]
	TargetRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Target is not valid {encoding}: {path}")]
	TargetDecode { path: PathBuf, encoding: String },

	#[error("Target contains characters unmappable in {encoding}: {path}")]
	TargetEncode { path: PathBuf, encoding: String },

	#[error("Failed to write target file: {path}")]
	TargetWrite {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write backup copy: {path}")]
	BackupWrite {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Result type alias using MendError.
pub type Result<T> = std::result::Result<T, MendError>;
