//! Convention rules.
//!
//! - [`message`] classifies a commit message into blocking errors and
//!   advisory warnings.
//! - [`title`] accepts or rejects a pull-request title.
//!
//! Use [`all_rules`] to list every rule both checkers can report.

pub mod message;
pub mod title;

use crate::finding::Severity;
use regex::Regex;
use std::sync::LazyLock;

/// `subsystem: ` at the start of a line: a letter, then letters, digits,
/// `_`, `/`, `-`, `.` or spaces, then colon-space.
pub static RE_SUBSYSTEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9_/\-. ]*: ").unwrap());

/// Subjects that are exempt from the subsystem-prefix convention.
/// Matched case-sensitively, as git generates them.
pub const EXEMPT_PREFIXES: &[&str] = &["Revert \"", "Merge "];

/// Returns `true` for git-generated revert and merge subjects.
pub fn is_exempt(subject: &str) -> bool {
    EXEMPT_PREFIXES.iter().any(|p| subject.starts_with(p))
}

/// Metadata for a single rule.
///
/// Used by the `list-rules` and `explain` CLI commands and by the SARIF
/// output's rule descriptors.
pub struct RuleInfo {
    /// Unique rule identifier (e.g., `"commit/wip"`).
    pub id: &'static str,
    pub severity: Severity,
    /// Checker that reports this rule (`"commit"` or `"title"`).
    pub checker: &'static str,
    /// Short description of what the rule checks.
    pub message: &'static str,
    /// Guidance on how to fix a violation.
    pub remediation: &'static str,
}

/// Aggregates [`RuleInfo`] from both checkers.
pub fn all_rules() -> Vec<RuleInfo> {
    let mut rules = Vec::new();
    rules.extend(message::rules());
    rules.extend(title::rules());
    rules
}

/// Looks up a rule by id.
pub fn find_rule(id: &str) -> Option<RuleInfo> {
    all_rules().into_iter().find(|r| r.id == id)
}
