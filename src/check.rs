//! Batch orchestration.
//!
//! [`run_check`] classifies every commit of a batch with
//! [`check_commit`](crate::rules::message::check_commit), attaches a
//! remediation hint to commits with blocking errors, and assembles a
//! [`BatchReport`]. Commits are processed one at a time in input order.

use crate::config::RuleSet;
use crate::finding::{BatchReport, CommitRecord, CommitReport};
use crate::rules::message::{check_commit, suggest_fix};

/// Classifies a batch of commits.
///
/// # Examples
///
/// ```
/// use subsystem_lint::{check, config::Config, finding::CommitRecord};
///
/// let config = Config::default();
/// let commits = vec![CommitRecord::new("0123456789abcdef", "fixup! ekf2: fix")];
/// let report = check::run_check(&commits, &config.rules);
///
/// assert!(!report.passed());
/// ```
pub fn run_check(commits: &[CommitRecord], rules: &RuleSet) -> BatchReport {
    let reports = commits
        .iter()
        .map(|commit| check_record(commit, rules))
        .collect();

    BatchReport::from_commits(reports)
}

/// Classifies a single commit record.
pub fn check_record(commit: &CommitRecord, rules: &RuleSet) -> CommitReport {
    let classification = check_commit(&commit.message, rules);
    let suggestion = if classification.has_errors() {
        suggest_fix(&commit.message, rules)
    } else {
        None
    };

    CommitReport {
        sha: commit.sha.clone(),
        subject: commit.subject().to_string(),
        classification,
        suggestion,
    }
}
