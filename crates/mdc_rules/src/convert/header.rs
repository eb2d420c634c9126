//! Metadata header written at the top of every converted rule.

use super::RuleSpec;
use crate::frontmatter::FRONTMATTER_DELIM;
use chrono::NaiveDate;
use std::fmt::Write as _;

/// Format version stamped on every converted rule.
pub const RULE_FORMAT_VERSION: &str = "2.0";

/// Header fields in output order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MetadataHeader {
    pub title: String,
    pub description: String,
    pub globs: Vec<String>,
    pub activation: String,
    pub version: &'static str,
    pub created: NaiveDate,
    pub updated: NaiveDate,
}

impl MetadataHeader {
    /// Build the header for `spec`. Both date stamps are `today`; nothing is carried over from an
    /// earlier output.
    pub fn build(spec: &RuleSpec, today: NaiveDate) -> Self {
        Self {
            title: spec.title.clone(),
            description: spec.description.clone(),
            globs: spec.globs.clone(),
            activation: spec.activation.clone(),
            version: RULE_FORMAT_VERSION,
            created: today,
            updated: today,
        }
    }

    /// Render the delimited header block, including the blank line that separates it from the
    /// body.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{FRONTMATTER_DELIM}");
        let _ = writeln!(out, "title: \"{}\"", self.title);
        let _ = writeln!(out, "description: \"{}\"", self.description);
        let _ = writeln!(out, "globs: {}", flow_list(&self.globs));
        let _ = writeln!(out, "activation: \"{}\"", self.activation);
        let _ = writeln!(out, "version: \"{}\"", self.version);
        let _ = writeln!(out, "created: \"{}\"", self.created.format("%Y-%m-%d"));
        let _ = writeln!(out, "updated: \"{}\"", self.updated.format("%Y-%m-%d"));
        let _ = writeln!(out, "{FRONTMATTER_DELIM}");
        out.push('\n');
        out
    }
}

/// `['a', 'b']`-style inline list.
fn flow_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| quote_item(item)).collect();
    format!("[{}]", quoted.join(", "))
}

fn quote_item(item: &str) -> String {
    let escaped = item.replace('\\', "\\\\");
    if escaped.contains('\'') && !escaped.contains('"') {
        format!("\"{escaped}\"")
    } else {
        format!("'{}'", escaped.replace('\'', "\\'"))
    }
}
