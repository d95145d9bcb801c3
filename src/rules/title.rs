use crate::finding::Severity;
use crate::rules::{is_exempt, RuleInfo};
use regex::Regex;
use std::sync::LazyLock;

pub const EMPTY: &str = "title/empty";
pub const FORMAT: &str = "title/format";

// Subsystem prefix, colon, space, then at least 5 chars of description.
static RE_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9_/\-. ]*: .{5,}").unwrap());

const GOOD_EXAMPLES: &[&str] = &[
    "ekf2: fix height fusion timeout",
    "mavlink: add BATTERY_STATUS_V2 support",
    "boards/px4_fmu-v6x: enable UAVCAN",
    "CI: migrate to reusable workflows",
];

const BAD_EXAMPLES: &[&str] = &["fix stuff", "Update file", "changes"];

/// Outcome of [`check_title`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleVerdict {
    /// Title follows `subsystem: description`.
    Accepted,
    /// Git-generated `Revert "…"` or `Merge …` title.
    Exempt,
    /// Title is empty after trimming.
    Empty,
    /// Title does not match the convention; holds the trimmed title.
    Malformed(String),
}

impl TitleVerdict {
    pub fn passed(&self) -> bool {
        matches!(self, TitleVerdict::Accepted | TitleVerdict::Exempt)
    }

    /// Human-readable explanation for a rejected title, `None` when it passed.
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            TitleVerdict::Accepted | TitleVerdict::Exempt => None,
            TitleVerdict::Empty => Some("PR title is empty.".to_string()),
            TitleVerdict::Malformed(title) => {
                let mut out = String::from("PR title does not match the expected format.\n\n");
                out.push_str(&format!("  Title: {title}\n\n"));
                out.push_str("Expected pattern:  subsystem: short description (5+ chars)\n\n");
                out.push_str("Good examples:\n");
                for example in GOOD_EXAMPLES {
                    out.push_str(&format!("  {example}\n"));
                }
                out.push_str("\nBad examples:\n");
                for example in BAD_EXAMPLES {
                    out.push_str(&format!("  {example}\n"));
                }
                Some(out)
            }
        }
    }
}

/// Checks a pull-request title against the `subsystem: description` convention.
///
/// # Examples
///
/// ```
/// use subsystem_lint::rules::title::check_title;
///
/// assert!(check_title("ekf2: fix height fusion timeout").passed());
/// assert!(!check_title("fix stuff").passed());
/// ```
pub fn check_title(title: &str) -> TitleVerdict {
    let title = title.trim();

    if title.is_empty() {
        TitleVerdict::Empty
    } else if is_exempt(title) {
        TitleVerdict::Exempt
    } else if RE_TITLE.is_match(title) {
        TitleVerdict::Accepted
    } else {
        TitleVerdict::Malformed(title.to_string())
    }
}

pub fn rules() -> Vec<RuleInfo> {
    vec![
        RuleInfo {
            id: EMPTY,
            severity: Severity::Error,
            checker: "title",
            message: "PR title is empty",
            remediation: "Give the PR a \"subsystem: description\" title",
        },
        RuleInfo {
            id: FORMAT,
            severity: Severity::Error,
            checker: "title",
            message: "PR title does not match \"subsystem: description\" (5+ chars of description)",
            remediation: "Rename the PR, e.g. \"ekf2: fix height fusion timeout\"",
        },
    ]
}
