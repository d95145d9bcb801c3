//! Commit batch ingestion.
//!
//! Parses the JSON array returned by the GitHub `/pulls/{n}/commits`
//! endpoint into [`CommitRecord`]s. Only `sha` and `commit.message` are read;
//! every other field is ignored.

use crate::finding::CommitRecord;

#[derive(serde::Deserialize)]
struct RawCommit {
    #[serde(default = "unknown_sha")]
    sha: String,
    #[serde(default)]
    commit: RawCommitBody,
}

#[derive(Default, serde::Deserialize)]
struct RawCommitBody {
    #[serde(default)]
    message: String,
}

fn unknown_sha() -> String {
    "?".to_string()
}

/// Parses a JSON array of commit objects.
///
/// Missing `sha` defaults to `"?"`, missing `commit.message` to an empty
/// string.
///
/// # Errors
///
/// Returns `Err(String)` when the input is not valid JSON, is not an array,
/// or contains an element that is not a commit object. Nothing is
/// partially processed.
///
/// # Examples
///
/// ```
/// use subsystem_lint::input::parse_commits;
///
/// let commits = parse_commits(r#"[{"sha": "abc", "commit": {"message": "ekf2: fix"}}]"#).unwrap();
/// assert_eq!(commits[0].message, "ekf2: fix");
/// assert!(parse_commits("{}").is_err());
/// ```
pub fn parse_commits(json: &str) -> Result<Vec<CommitRecord>, String> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| format!("Failed to parse JSON input: {e}"))?;

    let serde_json::Value::Array(items) = value else {
        return Err("Expected a JSON array of commit objects.".to_string());
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value::<RawCommit>(item)
                .map(|raw| CommitRecord::new(raw.sha, raw.commit.message))
                .map_err(|e| format!("Invalid commit object at index {i}: {e}"))
        })
        .collect()
}
