//! Patch file loading and parsing for mend.
//!
//! This module handles:
//! - TOML patch file parsing and validation
//! - Nearest-file discovery up the directory tree
//! - The `--init` template

pub mod discover;
pub mod parser;
pub mod template;
pub mod types;

pub use discover::{PATCH_FILE_NAME, discover_patch, resolve_patch_path};
pub use parser::{parse_patch_file, parse_patch_str};
pub use template::init_template;
pub use types::{LoadedPatch, NewlineStyle, Patch, RewriteRule};
