//! Guide-to-rule conversion.
//!
//! Each [`RuleSpec`] names one markdown guide. Conversion reads the guide, rewrites its body
//! ([`text::normalize_text`] then [`text::truncate`]), prepends a fresh [`MetadataHeader`] and
//! writes `{output_dir}/{identifier}-{name}.mdc`, overwriting any earlier output. Guides that do
//! not exist are skipped with a warning; the rest of the table is still converted.

pub mod header;
pub mod table;
pub mod text;

pub use header::MetadataHeader;

use crate::runtime::error::RulesResult;
use crate::runtime::fs::{read_optional, write_text};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File extension of converted rules.
pub const RULE_EXTENSION: &str = "mdc";

/// One guide and the metadata its rule is published with.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RuleSpec {
    pub identifier: String,
    pub name: String,
    pub source: PathBuf,
    pub title: String,
    pub description: String,
    pub globs: Vec<String>,
    pub activation: String,
}

impl RuleSpec {
    /// `{identifier}-{name}`, shared by the output file name and cross-reference targets.
    pub fn file_stem(&self) -> String {
        format!("{}-{}", self.identifier, self.name)
    }

    /// Output file name including extension.
    pub fn file_name(&self) -> String {
        format!("{}.{RULE_EXTENSION}", self.file_stem())
    }
}

/// A literal phrase annotated with a pointer to another rule.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CrossReference {
    pub phrase: String,
    pub target: String,
}

impl CrossReference {
    /// Replacement text: the phrase followed by ` (@ref:target)`.
    pub fn annotated(&self) -> String {
        format!("{} (@ref:{})", self.phrase, self.target)
    }
}

/// `[converter]` config section.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ConverterConfig {
    /// Destination directory, relative to the root unless absolute.
    pub output_dir: PathBuf,
    /// Body line limit before truncation.
    pub max_lines: usize,
    pub rules: Vec<RuleSpec>,
    pub cross_references: Vec<CrossReference>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(".cursor/rules"),
            max_lines: 450,
            rules: table::default_rules(),
            cross_references: table::default_cross_references(),
        }
    }
}

/// Outcome of a conversion run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// Written rule files, in table order.
    pub created: Vec<PathBuf>,
    /// Guide paths that did not exist.
    pub skipped: Vec<PathBuf>,
}

/// Converts the configured guide table under a root directory.
#[derive(Clone, Debug)]
pub struct Converter<'a> {
    root: &'a Path,
    config: &'a ConverterConfig,
    output_dir: PathBuf,
    today: NaiveDate,
}

impl<'a> Converter<'a> {
    pub fn new(root: &'a Path, config: &'a ConverterConfig, today: NaiveDate) -> Self {
        Self {
            root,
            config,
            output_dir: root.join(&config.output_dir),
            today,
        }
    }

    /// Override the configured output directory (relative to the root unless absolute).
    pub fn with_output_dir(mut self, output_dir: &Path) -> Self {
        self.output_dir = self.root.join(output_dir);
        self
    }

    /// Where `spec` is written.
    pub fn output_path(&self, spec: &RuleSpec) -> PathBuf {
        self.output_dir.join(spec.file_name())
    }

    /// Read the guide for `spec`; `None` when the file does not exist.
    pub fn load_document(&self, spec: &RuleSpec) -> RulesResult<Option<String>> {
        read_optional(&self.root.join(&spec.source))
    }

    /// Full rule text for a guide body: header, blank line, rewritten body.
    pub fn render_rule(&self, spec: &RuleSpec, document: &str) -> String {
        let body = text::normalize_text(document, &self.config.cross_references);
        let body = text::truncate(&body, self.config.max_lines);
        let mut out = MetadataHeader::build(spec, self.today).render();
        out.push_str(&body);
        out
    }

    /// Write rendered rule text, creating the output directory when needed.
    pub fn write_output(&self, spec: &RuleSpec, contents: &str) -> RulesResult<PathBuf> {
        let path = self.output_path(spec);
        write_text(&path, contents)?;
        Ok(path)
    }

    /// Convert one entry; `Ok(None)` when its guide is missing.
    pub fn convert_rule(&self, spec: &RuleSpec) -> RulesResult<Option<PathBuf>> {
        let Some(document) = self.load_document(spec)? else {
            tracing::warn!(
                rule = %spec.file_stem(),
                source = %spec.source.display(),
                "guide file not found, skipping"
            );
            return Ok(None);
        };
        let rendered = self.render_rule(spec, &document);
        let path = self.write_output(spec, &rendered)?;
        tracing::debug!(rule = %spec.file_stem(), path = %path.display(), "rule written");
        Ok(Some(path))
    }

    /// Convert every configured entry in order.
    pub fn convert_all(&self) -> RulesResult<ConversionReport> {
        let mut report = ConversionReport::default();
        for spec in &self.config.rules {
            match self.convert_rule(spec)? {
                Some(path) => report.created.push(path),
                None => report.skipped.push(spec.source.clone()),
            }
        }
        tracing::info!(
            created = report.created.len(),
            skipped = report.skipped.len(),
            "conversion finished"
        );
        Ok(report)
    }
}
