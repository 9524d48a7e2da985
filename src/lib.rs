//! Mend - CLI tool for patching text files with ordered regex rewrite rules.
//!
//! This library provides the core functionality for mend, including:
//! - Patch file parsing and nearest-file discovery
//! - Rule compilation and in-order application with per-rule match counts
//! - Target file I/O with explicit encoding and newline control
//! - Report rendering, including dry-run diffs
//!
//! # Example
//!
//! ```no_run
//! use mend_cli::patch::parse_patch_file;
//! use mend_cli::rules::{apply_all, compile_rules};
//! use std::path::Path;
//!
//! let loaded = parse_patch_file(Path::new(".mend.toml")).unwrap();
//! let rules = compile_rules(&loaded.patch).unwrap();
//!
//! let (patched, outcomes) = apply_all("</div >\n", &rules);
//! for outcome in &outcomes {
//!     println!("{}: {} matches", outcome.label, outcome.matches);
//! }
//! # let _ = patched;
//! ```

pub mod error;
pub mod patch;
pub mod report;
pub mod rules;
pub mod target;

pub use error::{MendError, Result};
