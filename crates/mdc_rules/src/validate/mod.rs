//! Structural checks for published rule files.
//!
//! Every discovered file is checked independently. Checks run in [`Check::ORDER`] and the first
//! failure decides the reported message for that file.

pub mod discovery;
pub mod report;

pub use discovery::discover_rule_files;

use crate::convert::text::line_count;
use crate::frontmatter::{missing_keys, parse_frontmatter};
use crate::runtime::error::RulesResult;
use crate::runtime::fs::{read_text, rel_posix};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

const HEADER_OPEN: &str = "---\n";
const REQUIRED_FIELDS: &[&str] = &["description", "globs", "alwaysApply"];
const MANDATORY_SECTIONS: &[&str] = &[
    "# Architectural Compliance & Quality Gates",
    "# MDC Compliance Checklist",
];

static HARDCODED_SECRET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:API_KEY|PASSWORD) = "[a-zA-Z0-9]+""#).expect("valid secret regex")
});

/// `[validator]` config section.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Directories scanned for rule files, relative to the root.
    pub roots: Vec<String>,
    /// Largest accepted line count.
    pub max_lines: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            roots: ["languages", "devops", "templates", "personas"]
                .into_iter()
                .map(String::from)
                .collect(),
            max_lines: 500,
        }
    }
}

/// Individual rule-file checks.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    Frontmatter,
    Metadata,
    Size,
    Sections,
    Secrets,
}

impl Check {
    /// Evaluation order.
    pub const ORDER: [Check; 5] = [
        Check::Frontmatter,
        Check::Metadata,
        Check::Size,
        Check::Sections,
        Check::Secrets,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Check::Frontmatter => "frontmatter",
            Check::Metadata => "metadata",
            Check::Size => "size",
            Check::Sections => "sections",
            Check::Secrets => "secrets",
        }
    }
}

/// Verdict for one file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidationResult {
    pub passed: bool,
    /// Empty when the file passed.
    pub message: String,
    /// The check that failed, if any.
    pub check: Option<Check>,
}

impl ValidationResult {
    pub fn pass() -> Self {
        Self {
            passed: true,
            message: String::new(),
            check: None,
        }
    }

    pub fn fail(check: Check, message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
            check: Some(check),
        }
    }
}

/// Options that change how checks are evaluated.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CheckOptions {
    /// Require metadata fields to be keys of the parsed header instead of appearing anywhere.
    pub strict_metadata: bool,
}

/// Run every check against `content`; `display` is the path shown in messages.
pub fn validate_content(
    content: &str,
    display: &str,
    max_lines: usize,
    options: CheckOptions,
) -> ValidationResult {
    for check in Check::ORDER {
        let failure = match check {
            Check::Frontmatter => (!content.starts_with(HEADER_OPEN))
                .then(|| format!("Missing front-matter in {display}")),
            Check::Metadata => (!has_required_metadata(content, options))
                .then(|| {
                    format!(
                        "Missing required metadata (description, globs, alwaysApply) in {display}"
                    )
                }),
            Check::Size => (line_count(content) > max_lines)
                .then(|| format!("File {display} exceeds {max_lines} lines.")),
            Check::Sections => (!MANDATORY_SECTIONS.iter().any(|s| content.contains(s)))
                .then(|| format!("Missing mandatory sections in {display}")),
            Check::Secrets => HARDCODED_SECRET
                .is_match(content)
                .then(|| format!("Potential hardcoded sensitive value in {display}")),
        };
        if let Some(message) = failure {
            return ValidationResult::fail(check, message);
        }
    }
    ValidationResult::pass()
}

fn has_required_metadata(content: &str, options: CheckOptions) -> bool {
    if options.strict_metadata {
        return match parse_frontmatter(content) {
            Ok(header) => missing_keys(&header, REQUIRED_FIELDS).is_empty(),
            Err(err) => {
                tracing::debug!(%err, "frontmatter did not parse");
                false
            }
        };
    }
    REQUIRED_FIELDS
        .iter()
        .all(|field| content.contains(&format!("{field}:")))
}

/// One validated file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FileOutcome {
    pub path: PathBuf,
    /// Root-relative `/`-separated path used in output.
    pub display: String,
    pub result: ValidationResult,
}

/// All outcomes of a validation run, in discovery order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValidationSummary {
    pub files: Vec<FileOutcome>,
}

impl ValidationSummary {
    pub fn all_passed(&self) -> bool {
        self.files.iter().all(|f| f.result.passed)
    }

    pub fn failed_count(&self) -> usize {
        self.files.iter().filter(|f| !f.result.passed).count()
    }
}

/// Discovers and checks rule files under a root directory.
#[derive(Clone, Debug)]
pub struct Validator<'a> {
    root: &'a Path,
    config: &'a ValidatorConfig,
    options: CheckOptions,
}

impl<'a> Validator<'a> {
    pub fn new(root: &'a Path, config: &'a ValidatorConfig, options: CheckOptions) -> Self {
        Self {
            root,
            config,
            options,
        }
    }

    pub fn discover(&self) -> RulesResult<Vec<PathBuf>> {
        discover_rule_files(self.root, &self.config.roots)
    }

    pub fn validate_file(&self, path: &Path) -> RulesResult<FileOutcome> {
        let content = read_text(path)?;
        let shown = rel_posix(self.root, path);
        let result = validate_content(&content, &shown, self.config.max_lines, self.options);
        tracing::debug!(path = %shown, passed = result.passed, "rule checked");
        Ok(FileOutcome {
            path: path.to_path_buf(),
            display: shown,
            result,
        })
    }

    pub fn run(&self) -> RulesResult<ValidationSummary> {
        let mut summary = ValidationSummary::default();
        for path in self.discover()? {
            summary.files.push(self.validate_file(&path)?);
        }
        tracing::info!(
            files = summary.files.len(),
            failed = summary.failed_count(),
            "validation finished"
        );
        Ok(summary)
    }
}
