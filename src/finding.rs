use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single lint finding against a commit subject or PR title.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Finding {
    pub rule_id: &'static str,
    pub message: String,
    pub severity: Severity,
}

impl Finding {
    pub fn error(rule_id: &'static str, message: impl Into<String>) -> Self {
        Finding {
            rule_id,
            message: message.into(),
            severity: Severity::Error,
        }
    }

    pub fn warning(rule_id: &'static str, message: impl Into<String>) -> Self {
        Finding {
            rule_id,
            message: message.into(),
            severity: Severity::Warning,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// One commit as supplied by the caller (e.g. the GitHub `/pulls/{n}/commits`
/// endpoint). Only `sha` and `commit.message` are read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub sha: String,
    pub message: String,
}

impl CommitRecord {
    pub fn new(sha: impl Into<String>, message: impl Into<String>) -> Self {
        CommitRecord {
            sha: sha.into(),
            message: message.into(),
        }
    }

    /// First line of the message, trimmed.
    pub fn subject(&self) -> &str {
        subject_line(&self.message)
    }
}

/// Returns the text before the first newline, with surrounding whitespace removed.
pub fn subject_line(message: &str) -> &str {
    message.split('\n').next().unwrap_or_default().trim()
}

/// Cuts a sha to its first 10 characters.
pub fn truncate_sha(sha: &str) -> &str {
    // Slice at a char boundary; the sha field is caller-supplied text.
    let cut = sha.char_indices().nth(10).map(|(i, _)| i).unwrap_or(sha.len());
    &sha[..cut]
}

/// Errors and warnings for one commit message, in rule evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Classification {
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
}

impl Classification {
    pub fn push(&mut self, finding: Finding) {
        match finding.severity {
            Severity::Error => self.errors.push(finding),
            Severity::Warning => self.warnings.push(finding),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Error messages joined with `"; "`.
    pub fn joined_errors(&self) -> String {
        join_messages(&self.errors)
    }

    /// Warning messages joined with `"; "`.
    pub fn joined_warnings(&self) -> String {
        join_messages(&self.warnings)
    }
}

fn join_messages(findings: &[Finding]) -> String {
    findings
        .iter()
        .map(|f| f.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Classification of one [`CommitRecord`].
#[derive(Debug, Clone, serde::Serialize)]
pub struct CommitReport {
    pub sha: String,
    pub subject: String,
    #[serde(flatten)]
    pub classification: Classification,
    /// Remediation hint; only set for commits with blocking errors.
    pub suggestion: Option<&'static str>,
}

impl CommitReport {
    pub fn short_sha(&self) -> &str {
        truncate_sha(&self.sha)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Passed,
    Warning,
    Failed,
}

/// Results for a whole batch of commits, in input order.
#[derive(Debug, serde::Serialize)]
pub struct BatchReport {
    pub checked_at: String,
    pub status: CheckStatus,
    pub commits: Vec<CommitReport>,
    pub has_blocking: bool,
    pub has_warnings: bool,
}

impl BatchReport {
    pub fn from_commits(commits: Vec<CommitReport>) -> Self {
        let (has_blocking, has_warnings) =
            commits.iter().fold((false, false), |(e, w), c| {
                (
                    e || c.classification.has_errors(),
                    w || c.classification.has_warnings(),
                )
            });

        let status = if has_blocking {
            CheckStatus::Failed
        } else if has_warnings {
            CheckStatus::Warning
        } else {
            CheckStatus::Passed
        };

        BatchReport {
            checked_at: chrono::Utc::now().to_rfc3339(),
            status,
            commits,
            has_blocking,
            has_warnings,
        }
    }

    pub fn passed(&self) -> bool {
        !self.has_blocking
    }

    /// Count errors and warnings across all commits.
    ///
    /// Returns `(errors, warnings)`.
    pub fn count_by_severity(&self) -> (usize, usize) {
        self.commits.iter().fold((0, 0), |(e, w), c| {
            (
                e + c.classification.errors.len(),
                w + c.classification.warnings.len(),
            )
        })
    }
}
