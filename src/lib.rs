//! # subsystem-lint
//!
//! Commit message and pull-request title checks for the
//! `subsystem: description` convention.
//!
//! Every commit subject in a pull request is classified into **blocking
//! errors** (unsquashed fixups, WIP commits, throwaway one-word messages, …)
//! and **advisory warnings** (review-response commits, formatter-only
//! commits, a missing subsystem prefix). Results are rendered as plain CI
//! log output, a markdown PR comment, JSON, or [SARIF].
//!
//! ## Quick start
//!
//! ```rust
//! use subsystem_lint::{check, config::Config, input, output};
//!
//! let json = r#"[{"sha": "0123456789abcdef", "commit": {"message": "fixup! ekf2: fix"}}]"#;
//! let commits = input::parse_commits(json).unwrap();
//!
//! let config = Config::default();
//! let report = check::run_check(&commits, &config.rules);
//!
//! if !report.passed() {
//!     let body = output::format_report(&report, output::OutputFormat::Markdown, &config);
//!     print!("{body}");
//! }
//! ```
//!
//! ## Architecture
//!
//! 1. **[`config`]** — rule tables and rendering profile from TOML.
//! 2. **[`input`]** — parse the GitHub commit array.
//! 3. **[`rules`]** — the commit-message classifier and the PR-title checker.
//! 4. **[`check`]** — classify a batch of commits.
//! 5. **[`finding`]** — core data types ([`finding::Finding`], [`finding::BatchReport`]).
//! 6. **[`output`]** — plain, markdown, JSON and SARIF renderers.
//!
//! [SARIF]: https://sarifweb.azurewebsites.net/

pub mod check;
pub mod config;
pub mod finding;
pub mod input;
pub mod output;
pub mod rules;
