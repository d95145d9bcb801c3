//! Markdown formatter for pull-request comments.
//!
//! Two comment bodies exist: a *blocking* one listing every commit with at
//! least one error, and an *advisory* one listing every commit with at least
//! one warning. [`format`] picks the right one for a batch.

use crate::config::ProjectConfig;
use crate::finding::BatchReport;

const FOOTER: &str = "*This comment will be automatically removed once the issues are resolved.*";

/// Renders the comment body a batch calls for.
///
/// Returns the blocking body when any commit has an error, the advisory body
/// when only warnings exist, and `None` for a clean batch.
pub fn format(report: &BatchReport, project: &ProjectConfig) -> Option<String> {
    if report.has_blocking {
        Some(format_blocking(report, project))
    } else if report.has_warnings {
        Some(format_advisory(report, project))
    } else {
        None
    }
}

/// Escapes `|` so a subject cannot break out of its table cell.
pub fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Blocking comment: one table row per commit with at least one error.
pub fn format_blocking(report: &BatchReport, project: &ProjectConfig) -> String {
    let mut lines: Vec<String> = vec![
        "## Commit Messages".into(),
        String::new(),
        "Some commits in this PR have messages that **must be fixed before merging**.".into(),
        String::new(),
        "Every commit that lands on `main` becomes permanent project history. \
         Each commit message should use the `subsystem: description` format and \
         clearly describe what changed."
            .into(),
        String::new(),
        "| Commit | Message | Issue | Suggested fix |".into(),
        "|--------|---------|-------|---------------|".into(),
    ];

    for commit in report.commits.iter().filter(|c| c.classification.has_errors()) {
        lines.push(format!(
            "| `{}` | {} | {} | {} |",
            commit.short_sha(),
            escape_cell(&commit.subject),
            commit.classification.joined_errors(),
            commit.suggestion.unwrap_or_default(),
        ));
    }

    lines.extend(
        [
            "",
            "**How to fix:**",
            "",
            "If you have a single meaningful commit buried under fixup/review commits, \
             squash them all into one:",
            "```bash",
            "git rebase -i HEAD~N   # replace N with the number of commits in this PR",
            "# mark all commits except the first as 'squash' or 'fixup'",
            "# reword the remaining commit to follow the format",
            "git push --force-with-lease",
            "```",
            "",
            "If each commit is a separate logical change, reword the bad ones:",
            "```bash",
            "git rebase -i HEAD~N   # replace N with the number of commits",
            "# mark the bad commits as 'reword'",
            "# write a proper message: subsystem: what this commit does",
            "git push --force-with-lease",
            "```",
            "",
        ]
        .map(String::from),
    );

    lines.push("<details>".into());
    lines.extend(convention_section(project));
    lines.extend(
        [
            "",
            "Good commit messages:",
            "```",
            "ekf2: fix height fusion timeout",
            "mavlink: add BATTERY_STATUS_V2 support",
            "boards/px4_fmu-v6x: enable UAVCAN",
            "```",
            "",
            "Commits to avoid (squash these before merging):",
            "```",
            "fix                          # too vague",
            "apply suggestions from code review  # squash into parent",
            "do make format               # squash into parent",
            "WIP: trying something        # not ready for main",
            "```",
            "",
            "</details>",
            "",
            "---",
            FOOTER,
        ]
        .map(String::from),
    );

    lines.join("\n")
}

/// Advisory comment: one table row per commit with at least one warning.
pub fn format_advisory(report: &BatchReport, project: &ProjectConfig) -> String {
    let mut lines: Vec<String> = vec![
        "## Commit Messages (advisory)".into(),
        String::new(),
        "This is **not blocking**, but we noticed some commit messages that could be improved."
            .into(),
        String::new(),
        "| Commit | Message | Suggestion |".into(),
        "|--------|---------|------------|".into(),
    ];

    for commit in report
        .commits
        .iter()
        .filter(|c| c.classification.has_warnings())
    {
        lines.push(format!(
            "| `{}` | {} | {} |",
            commit.short_sha(),
            escape_cell(&commit.subject),
            commit.classification.joined_warnings(),
        ));
    }

    lines.extend(
        [
            "",
            "**Why this matters:** every commit on `main` is permanent project history. \
             Clean, prefixed messages (`subsystem: description`) make `git log`, \
             `git blame`, and release notes much more useful.",
            "",
            "Consider squashing review-response commits (\"address review\", \"apply suggestions\") \
             and formatting commits (\"make format\") into their parent commit before merge.",
            "",
            "<details>",
        ]
        .map(String::from),
    );
    lines.extend(convention_section(project));
    lines.extend(["", "</details>", "", "---", FOOTER].map(String::from));

    lines.join("\n")
}

/// Collapsible "<project> commit message convention" explanation, without
/// the enclosing `<details>` tags.
fn convention_section(project: &ProjectConfig) -> Vec<String> {
    let name = &project.name;
    let mut area = format!(
        "The **subsystem** is the module, driver, board, or area of {name} that the change affects."
    );
    if !project.subsystems.is_empty() {
        let list = project
            .subsystems
            .iter()
            .map(|s| format!("`{s}`"))
            .collect::<Vec<_>>()
            .join(", ");
        area.push_str(&format!(" Common subsystems include: {list}."));
    }

    vec![
        format!("<summary>{name} commit message convention</summary>"),
        String::new(),
        format!(
            "{name} uses the `subsystem: description` format for all commit messages. \
             This keeps `git log` and `git blame` readable and makes it easy to \
             generate changelogs."
        ),
        String::new(),
        area,
        String::new(),
        "The **description** should be a short, imperative summary of the change (e.g. \
         \"fix timeout\", \"add support for X\", \"remove deprecated API\")."
            .into(),
    ]
}
