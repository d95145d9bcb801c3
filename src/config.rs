//! Configuration loading and management.
//!
//! Provides the TOML-based configuration file: the rule tables used by the
//! commit-message classifier, the project name shown in PR comments, and the
//! rendering profile for plain output.
//!
//! # Configuration file
//!
//! The default configuration file is `subsystem-lint.toml` in the current
//! working directory. Use [`Config::load`] to read it:
//!
//! ```rust,no_run
//! use subsystem_lint::config::Config;
//!
//! let config = Config::load(None).expect("failed to load config");
//! assert_eq!(config.rules.min_length, 5);
//! ```

use std::path::Path;

/// Name of the config file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "subsystem-lint.toml";

/// Main configuration.
///
/// All fields carry defaults matching the PX4 convention, so the config file
/// can be omitted entirely.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    pub project: ProjectConfig,
    /// Rule tables for the commit-message classifier.
    pub rules: RuleSet,
    pub output: OutputConfig,
}

/// Project identity used in rendered PR comments.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Shown in the "<name> commit message convention" section.
    pub name: String,
    /// Example subsystems listed in the convention section.
    pub subsystems: Vec<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        ProjectConfig {
            name: "PX4".to_string(),
            subsystems: strings(&[
                "ekf2",
                "mavlink",
                "navigator",
                "sensors",
                "drivers",
                "boards/px4_fmu-v6x",
                "CI",
                "docs",
                "simulation",
                "multicopter",
                "fixedwing",
                "vtol",
            ]),
        }
    }
}

/// Fixed rule tables consulted by [`check_commit`](crate::rules::message::check_commit).
///
/// Entries are normalized to lowercase at load time via [`RuleSet::normalize`]
/// so the classifier can compare against a lowercased subject directly.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct RuleSet {
    /// Minimum subject length in characters.
    pub min_length: usize,
    /// Prefixes left behind by `git commit --fixup` and friends.
    pub fixup_prefixes: Vec<String>,
    /// Single words that are not a meaningful subject on their own.
    pub throwaway_words: Vec<String>,
    /// Substrings that indicate a leftover debug session.
    pub debug_keywords: Vec<String>,
    /// Phrases that mark a review-response commit.
    pub review_patterns: Vec<String>,
    /// Phrases that mark a formatter-only commit.
    pub formatter_patterns: Vec<String>,
}

impl RuleSet {
    /// Lowercases every table entry in place.
    pub fn normalize(&mut self) {
        for list in [
            &mut self.fixup_prefixes,
            &mut self.throwaway_words,
            &mut self.debug_keywords,
            &mut self.review_patterns,
            &mut self.formatter_patterns,
        ] {
            for s in list.iter_mut() {
                *s = s.to_lowercase();
            }
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for RuleSet {
    fn default() -> Self {
        // Already lowercase; normalize() is a no-op for the default.
        RuleSet {
            min_length: 5,
            fixup_prefixes: strings(&["fixup!", "squash!", "amend!"]),
            throwaway_words: strings(&[
                "fix", "fixed", "fixes", "update", "updated", "updates", "test", "tests",
                "testing", "tmp", "temp", "oops", "wip", "debug", "cleanup",
            ]),
            debug_keywords: strings(&["tmate"]),
            review_patterns: strings(&[
                "address review",
                "apply suggestions from code review",
                "code review",
            ]),
            formatter_patterns: strings(&[
                "do make format",
                "make format",
                "run formatter",
                "apply format",
            ]),
        }
    }
}

/// Where plain-text diagnostics are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputStream {
    #[default]
    Stdout,
    Stderr,
}

/// Rendering profile for the `commits` command.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Stream for plain-format output. Markdown, JSON and SARIF always go to stdout.
    pub stream: OutputStream,
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. If `path` is `None`, try `subsystem-lint.toml` in the current directory.
    /// 3. If that file does not exist either, return [`Config::default()`].
    ///
    /// # Errors
    ///
    /// Returns `Err(String)` when the explicit path does not exist, the file
    /// cannot be read, or the TOML content fails to parse.
    pub fn load(path: Option<&Path>) -> Result<Config, String> {
        let config_path = if let Some(p) = path {
            if p.exists() {
                Some(p.to_path_buf())
            } else {
                return Err(format!("Config file not found: {}", p.display()));
            }
        } else {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            default_path.exists().then(|| default_path.to_path_buf())
        };

        match config_path {
            Some(path) => {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
                Config::from_toml(&content)
                    .map_err(|e| format!("Failed to parse config {}: {}", path.display(), e))
            }
            None => Ok(Config::default()),
        }
    }

    /// Parses a config document and normalizes its rule tables.
    pub fn from_toml(content: &str) -> Result<Config, toml::de::Error> {
        let mut config: Config = toml::from_str(content)?;
        config.rules.normalize();
        Ok(config)
    }
}
