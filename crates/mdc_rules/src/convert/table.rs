//! Built-in guide-to-rule table.

use super::{CrossReference, RuleSpec};

const GUIDE_DIR: &str = "/home/ubuntu/new-mdc-rules";

fn rule(
    identifier: &str,
    name: &str,
    guide: &str,
    title: &str,
    description: &str,
    globs: &[&str],
    activation: &str,
) -> RuleSpec {
    RuleSpec {
        identifier: identifier.to_string(),
        name: name.to_string(),
        source: format!("{GUIDE_DIR}/{guide}").into(),
        title: title.to_string(),
        description: description.to_string(),
        globs: globs.iter().map(|g| g.to_string()).collect(),
        activation: activation.to_string(),
    }
}

/// The five guides converted by default, in output order.
pub fn default_rules() -> Vec<RuleSpec> {
    vec![
        rule(
            "70",
            "database-standards",
            "database-best-practices.md",
            "Database Standards and Best Practices",
            "Comprehensive database standards for PostgreSQL, MySQL, SQLite, MongoDB, and Supabase with performance optimization",
            &[
                "**/*.sql",
                "**/*.py",
                "**/*.js",
                "**/*.ts",
                "**/migrations/**",
                "**/models/**",
                "**/database/**",
                "**/db/**",
            ],
            "onLanguage:sql,python,javascript,typescript",
        ),
        rule(
            "71",
            "traefik-proxy",
            "traefik-configuration.md",
            "Traefik Proxy Configuration",
            "Traefik reverse proxy setup with Docker, SSL termination, and load balancing best practices",
            &[
                "**/traefik/**",
                "**/docker-compose*.yml",
                "**/Dockerfile*",
                "**/*.toml",
                "**/proxy/**",
            ],
            "onLanguage:yaml,toml,dockerfile",
        ),
        rule(
            "72",
            "memory-optimization",
            "memory-optimization.md",
            "Memory Optimization and Performance",
            "Memory management, caching strategies, and performance optimization techniques across languages",
            &[
                "**/*.py",
                "**/*.js",
                "**/*.ts",
                "**/*.go",
                "**/*.rs",
                "**/*.java",
                "**/cache/**",
                "**/performance/**",
            ],
            "onLanguage:python,javascript,typescript,go,rust,java",
        ),
        rule(
            "73",
            "rule-authoring",
            "rule-authoring-meta.md",
            "MDC Rule Authoring Guidelines",
            "Meta-practices and standards for creating effective Cursor MDC rules and documentation",
            &["**/*.mdc", "**/rules/**", "**/docs/**", "**/*.md"],
            "onLanguage:markdown",
        ),
        rule(
            "74",
            "fullstack-patterns",
            "fullstack-development.md",
            "Full-Stack Development Patterns",
            "Modern full-stack architectures, SOLID principles, and CI/CD pipeline best practices",
            &[
                "**/*.py",
                "**/*.js",
                "**/*.ts",
                "**/*.jsx",
                "**/*.tsx",
                "**/src/**",
                "**/api/**",
                "**/frontend/**",
                "**/backend/**",
            ],
            "onLanguage:python,javascript,typescript,jsx,tsx",
        ),
    ]
}

/// Phrase annotations applied to every converted body, in replacement order.
pub fn default_cross_references() -> Vec<CrossReference> {
    [
        ("database best practices", "70-database-standards"),
        ("Traefik configuration", "71-traefik-proxy"),
        ("memory optimization", "72-memory-optimization"),
        ("rule authoring", "73-rule-authoring"),
        ("fullstack patterns", "74-fullstack-patterns"),
    ]
    .into_iter()
    .map(|(phrase, target)| CrossReference {
        phrase: phrase.to_string(),
        target: target.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_cross_reference_targets_a_default_rule() {
        let stems: HashSet<String> = default_rules().iter().map(RuleSpec::file_stem).collect();
        for xref in default_cross_references() {
            assert!(stems.contains(&xref.target), "dangling {}", xref.target);
        }
    }

    #[test]
    fn output_stems_are_unique() {
        let rules = default_rules();
        let stems: HashSet<String> = rules.iter().map(RuleSpec::file_stem).collect();
        assert_eq!(stems.len(), rules.len());
    }
}
