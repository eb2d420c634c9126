//! JSON report for validation runs.

use super::{Check, ValidationSummary};
use crate::runtime::error::{RulesError, RulesResult};
use crate::runtime::fs::write_text;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct ValidationReport<'a> {
    pub generated_at: String,
    pub file_count: usize,
    pub passed: usize,
    pub failed: usize,
    pub failures_by_check: BTreeMap<&'static str, usize>,
    pub files: Vec<FileEntry<'a>>,
}

#[derive(Debug, Serialize)]
pub struct FileEntry<'a> {
    pub path: &'a str,
    pub passed: bool,
    pub check: Option<Check>,
    pub message: &'a str,
}

impl<'a> ValidationReport<'a> {
    pub fn from_summary(summary: &'a ValidationSummary) -> Self {
        let mut failures_by_check: BTreeMap<&'static str, usize> =
            Check::ORDER.iter().map(|check| (check.as_str(), 0)).collect();
        for check in summary.files.iter().filter_map(|f| f.result.check) {
            *failures_by_check.entry(check.as_str()).or_default() += 1;
        }

        let failed = summary.failed_count();
        Self {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            file_count: summary.files.len(),
            passed: summary.files.len() - failed,
            failed,
            failures_by_check,
            files: summary
                .files
                .iter()
                .map(|f| FileEntry {
                    path: &f.display,
                    passed: f.result.passed,
                    check: f.result.check,
                    message: &f.result.message,
                })
                .collect(),
        }
    }

    /// Write the report as pretty JSON, creating parent directories.
    pub fn write(&self, output: &Path) -> RulesResult<()> {
        let body = serde_json::to_string_pretty(self)
            .map_err(|err| RulesError::io(format!("failed to serialize report: {err}")))?;
        write_text(output, &format!("{body}\n"))
    }
}
