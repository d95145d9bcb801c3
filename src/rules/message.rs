use crate::config::RuleSet;
use crate::finding::{subject_line, Classification, Finding, Severity};
use crate::rules::{is_exempt, RuleInfo, RE_SUBSYSTEM};

pub const UNSQUASHED: &str = "commit/unsquashed";
pub const WIP: &str = "commit/wip";
pub const TOO_SHORT: &str = "commit/too-short";
pub const THROWAWAY: &str = "commit/throwaway";
pub const DEBUG_LEFTOVER: &str = "commit/debug-leftover";
pub const REVIEW_RESPONSE: &str = "commit/review-response";
pub const FORMATTER_ONLY: &str = "commit/formatter-only";
pub const MISSING_SUBSYSTEM: &str = "commit/missing-subsystem";

const SUGGEST_SQUASH: &str = "Squash this into the commit it fixes";
const SUGGEST_WIP: &str = "Squash into parent or reword with a descriptive message";
const SUGGEST_REWORD: &str = "Reword with a descriptive message (e.g. \"subsystem: what changed\")";

fn fixup_prefix<'a>(lower: &str, rules: &'a RuleSet) -> Option<&'a str> {
    rules
        .fixup_prefixes
        .iter()
        .find(|p| lower.starts_with(p.as_str()))
        .map(String::as_str)
}

fn is_wip(lower: &str) -> bool {
    lower == "wip" || lower.starts_with("wip ") || lower.starts_with("wip:")
}

fn is_throwaway(subject: &str, rules: &RuleSet) -> bool {
    let lower = subject.to_lowercase();
    !lower.is_empty() && rules.throwaway_words.iter().any(|w| *w == lower)
}

fn subject_len(subject: &str) -> usize {
    subject.chars().count()
}

/// Classifies one commit message.
///
/// Only the subject line is inspected. Every rule is evaluated in a fixed
/// order and all matching rules contribute a finding, so a subject such as
/// `"wip"` yields both the WIP and the throwaway-word error.
///
/// # Examples
///
/// ```
/// use subsystem_lint::config::RuleSet;
/// use subsystem_lint::rules::message::check_commit;
///
/// let result = check_commit("ekf2: fix height fusion timeout", &RuleSet::default());
/// assert!(result.is_clean());
/// ```
pub fn check_commit(message: &str, rules: &RuleSet) -> Classification {
    let mut result = Classification::default();
    let subject = subject_line(message);
    let lower = subject.to_lowercase();

    // Blocking

    for prefix in &rules.fixup_prefixes {
        if lower.starts_with(prefix.as_str()) {
            result.push(Finding::error(
                UNSQUASHED,
                format!("Unsquashed commit: starts with \"{prefix}\""),
            ));
        }
    }

    if is_wip(&lower) {
        result.push(Finding::error(WIP, "WIP commit should not be merged"));
    }

    let len = subject_len(subject);
    if len < rules.min_length {
        result.push(Finding::error(
            TOO_SHORT,
            format!(
                "Message too short ({len} chars, minimum {})",
                rules.min_length
            ),
        ));
    }

    if is_throwaway(subject, rules) {
        result.push(Finding::error(
            THROWAWAY,
            format!("Single-word throwaway message: \"{subject}\""),
        ));
    }

    for kw in &rules.debug_keywords {
        if lower.contains(kw.as_str()) {
            result.push(Finding::error(
                DEBUG_LEFTOVER,
                format!("Debug session leftover: contains \"{kw}\""),
            ));
        }
    }

    // Advisory

    if rules.review_patterns.iter().any(|p| lower.contains(p.as_str())) {
        result.push(Finding::warning(
            REVIEW_RESPONSE,
            "Review-response commit: consider squashing before merge",
        ));
    }

    if rules
        .formatter_patterns
        .iter()
        .any(|p| lower.contains(p.as_str()))
    {
        result.push(Finding::warning(
            FORMATTER_ONLY,
            "Formatter-only commit: consider squashing into parent commit",
        ));
    }

    if !RE_SUBSYSTEM.is_match(subject) && !is_exempt(subject) {
        result.push(Finding::warning(
            MISSING_SUBSYSTEM,
            "Missing subsystem prefix (e.g. \"ekf2: fix something\")",
        ));
    }

    result
}

/// Suggests how to fix a commit message that has a blocking error.
///
/// Conditions are tested in the same priority order as [`check_commit`];
/// the first applicable suggestion wins. Returns `None` when none of the
/// fixup, WIP, length or throwaway conditions hold (e.g. a debug leftover).
pub fn suggest_fix(message: &str, rules: &RuleSet) -> Option<&'static str> {
    let subject = subject_line(message);
    let lower = subject.to_lowercase();

    if fixup_prefix(&lower, rules).is_some() {
        Some(SUGGEST_SQUASH)
    } else if is_wip(&lower) {
        Some(SUGGEST_WIP)
    } else if subject_len(subject) < rules.min_length || is_throwaway(subject, rules) {
        Some(SUGGEST_REWORD)
    } else {
        None
    }
}

pub fn rules() -> Vec<RuleInfo> {
    vec![
        RuleInfo {
            id: UNSQUASHED,
            severity: Severity::Error,
            checker: "commit",
            message: "Subject starts with fixup!, squash! or amend!",
            remediation: SUGGEST_SQUASH,
        },
        RuleInfo {
            id: WIP,
            severity: Severity::Error,
            checker: "commit",
            message: "Work-in-progress commit (subject is \"wip\" or starts with \"wip \" / \"wip:\")",
            remediation: SUGGEST_WIP,
        },
        RuleInfo {
            id: TOO_SHORT,
            severity: Severity::Error,
            checker: "commit",
            message: "Subject is shorter than the configured minimum length",
            remediation: SUGGEST_REWORD,
        },
        RuleInfo {
            id: THROWAWAY,
            severity: Severity::Error,
            checker: "commit",
            message: "Subject is a single throwaway word such as \"fix\" or \"tmp\"",
            remediation: SUGGEST_REWORD,
        },
        RuleInfo {
            id: DEBUG_LEFTOVER,
            severity: Severity::Error,
            checker: "commit",
            message: "Subject mentions a debug session tool (e.g. tmate)",
            remediation: "Drop the debug commit before merging",
        },
        RuleInfo {
            id: REVIEW_RESPONSE,
            severity: Severity::Warning,
            checker: "commit",
            message: "Review-response commit (\"address review\", \"code review\")",
            remediation: "Squash into the commit the review was about",
        },
        RuleInfo {
            id: FORMATTER_ONLY,
            severity: Severity::Warning,
            checker: "commit",
            message: "Formatter-only commit (\"make format\", \"run formatter\")",
            remediation: "Squash into the parent commit",
        },
        RuleInfo {
            id: MISSING_SUBSYSTEM,
            severity: Severity::Warning,
            checker: "commit",
            message: "Subject does not start with a \"subsystem: \" prefix",
            remediation: "Prefix the subject with the affected area, e.g. \"ekf2: fix something\"",
        },
    ]
}
