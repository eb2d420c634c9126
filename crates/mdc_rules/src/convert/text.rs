//! Literal text rewrites applied to guide bodies.
//!
//! These are line- and substring-level substitutions, not a markdown parse: headings and phrases
//! inside fenced code blocks are rewritten like any other text.

use super::CrossReference;
use regex::Regex;
use std::sync::LazyLock;

/// Lines kept back from the limit to make room for the truncation notice.
const TRUNCATION_RESERVE: usize = 5;

/// Appended after the kept lines of a truncated document.
pub const TRUNCATION_NOTICE: &str = "\n\n---\n**Note**: Content truncated for brevity. See full documentation for complete details.\n---";

static BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid blank-run regex"));

static TOP_HEADINGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(#{1,2}) (.+)$").expect("valid heading regex"));

/// Apply every body rewrite in order: blank-line collapse, heading demotion, cross-references.
pub fn normalize_text(text: &str, cross_references: &[CrossReference]) -> String {
    let text = collapse_blank_lines(text);
    let text = demote_headings(&text);
    annotate_cross_references(&text, cross_references)
}

/// Collapse any run of three or more newlines into a single blank line.
pub fn collapse_blank_lines(text: &str) -> String {
    BLANK_RUN.replace_all(text, "\n\n").into_owned()
}

/// Push level-1 and level-2 headings down one level in a single pass.
///
/// `# T` becomes `## T` and `## T` becomes `### T`; deeper headings are left alone.
pub fn demote_headings(text: &str) -> String {
    TOP_HEADINGS.replace_all(text, "#${1} ${2}").into_owned()
}

/// Append `(@ref:target)` after every case-sensitive occurrence of each phrase.
pub fn annotate_cross_references(text: &str, cross_references: &[CrossReference]) -> String {
    cross_references
        .iter()
        .fold(text.to_string(), |acc, xref| {
            acc.replace(&xref.phrase, &xref.annotated())
        })
}

/// Number of lines as counted by splitting on `\n` (a trailing newline adds an empty line).
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// Cut documents longer than `max_lines` down to `max_lines - 5` lines plus a notice.
pub fn truncate(text: &str, max_lines: usize) -> String {
    if line_count(text) <= max_lines {
        return text.to_string();
    }
    let keep = max_lines.saturating_sub(TRUNCATION_RESERVE);
    let mut out = text.split('\n').take(keep).collect::<Vec<_>>().join("\n");
    out.push_str(TRUNCATION_NOTICE);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::table::default_cross_references;

    fn numbered_lines(count: usize) -> String {
        (1..=count)
            .map(|n| format!("line {n}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn blank_runs_collapse_to_one_blank_line() {
        assert_eq!(collapse_blank_lines("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("a\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("a\n\n\nb\n\n\n\n\nc"), "a\n\nb\n\nc");
    }

    #[test]
    fn whitespace_only_lines_are_not_blank_runs() {
        assert_eq!(collapse_blank_lines("a\n \n\nb"), "a\n \n\nb");
    }

    #[test]
    fn headings_demote_exactly_one_level() {
        assert_eq!(demote_headings("# Title"), "## Title");
        assert_eq!(demote_headings("## Title"), "### Title");
        assert_eq!(demote_headings("### Title"), "### Title");
        assert_eq!(demote_headings("#### Title"), "#### Title");
    }

    #[test]
    fn demotion_is_line_anchored_and_needs_text() {
        let input = "# One\nbody # not a heading\n## Two\n#\n# \n#NoSpace";
        assert_eq!(
            demote_headings(input),
            "## One\nbody # not a heading\n### Two\n#\n# \n#NoSpace"
        );
    }

    #[test]
    fn headings_inside_code_fences_are_still_demoted() {
        let input = "```sh\n# comment\n```";
        assert_eq!(demote_headings(input), "```sh\n## comment\n```");
    }

    #[test]
    fn cross_references_annotate_every_occurrence() {
        let text = "Follow database best practices. Again: database best practices.";
        let out = annotate_cross_references(text, &default_cross_references());
        assert_eq!(
            out,
            "Follow database best practices (@ref:70-database-standards). \
             Again: database best practices (@ref:70-database-standards)."
        );
    }

    #[test]
    fn cross_references_are_case_sensitive() {
        let text = "traefik configuration and Database Best Practices";
        assert_eq!(
            annotate_cross_references(text, &default_cross_references()),
            text
        );
        assert_eq!(
            annotate_cross_references("Traefik configuration", &default_cross_references()),
            "Traefik configuration (@ref:71-traefik-proxy)"
        );
    }

    #[test]
    fn normalize_runs_all_rewrites() {
        let input = "# Guide\n\n\n\nSee rule authoring.";
        assert_eq!(
            normalize_text(input, &default_cross_references()),
            "## Guide\n\nSee rule authoring (@ref:73-rule-authoring)."
        );
    }

    #[test]
    fn document_at_the_limit_is_unchanged() {
        let text = numbered_lines(450);
        assert_eq!(truncate(&text, 450), text);
    }

    #[test]
    fn document_over_the_limit_keeps_445_lines_and_notice() {
        let text = numbered_lines(451);
        let out = truncate(&text, 450);
        assert_eq!(line_count(&out), 449);

        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines[444], "line 445");
        assert_eq!(
            &lines[445..],
            &[
                "",
                "---",
                "**Note**: Content truncated for brevity. See full documentation for complete details.",
                "---",
            ]
        );
    }

    #[test]
    fn trailing_newline_counts_as_a_line() {
        assert_eq!(line_count("a\nb\n"), 3);
        assert_eq!(line_count(""), 1);
    }
}
