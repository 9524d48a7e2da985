//! Rule compilation and application for mend.
//!
//! This module handles:
//! - Compiling patch rules into executable regexes
//! - Applying the rule list in order with per-rule match counts

pub mod rewriter;

pub use rewriter::{CompiledRule, RuleOutcome, apply_all, compile_rules};
