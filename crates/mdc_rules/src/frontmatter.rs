//! Rule header splitting and structured parsing.

use serde_yaml::{Mapping, Value};

/// Line that opens and closes a rule header.
pub const FRONTMATTER_DELIM: &str = "---";

/// Raw header text between the opening and closing delimiter lines.
///
/// Returns an error describing the first delimiter problem found.
pub fn split_frontmatter(text: &str) -> Result<String, String> {
    let lines: Vec<&str> = text.split('\n').collect();
    if lines.first().map(|l| l.trim_end()) != Some(FRONTMATTER_DELIM) {
        return Err("missing frontmatter start delimiter".to_string());
    }

    let end_idx = lines
        .iter()
        .enumerate()
        .skip(1)
        .find_map(|(i, line)| (line.trim_end() == FRONTMATTER_DELIM).then_some(i))
        .ok_or_else(|| "missing frontmatter end delimiter".to_string())?;

    Ok(lines[1..end_idx].join("\n"))
}

/// Parse the header of `text` as a YAML mapping.
pub fn parse_frontmatter(text: &str) -> Result<Mapping, String> {
    let raw = split_frontmatter(text)?;
    if raw.trim().is_empty() {
        return Ok(Mapping::new());
    }
    match serde_yaml::from_str::<Value>(&raw) {
        Ok(Value::Mapping(map)) => Ok(map),
        Ok(Value::Null) => Ok(Mapping::new()),
        Ok(_) => Err("frontmatter is not a key/value mapping".to_string()),
        Err(err) => Err(format!("invalid frontmatter: {err}")),
    }
}

/// Keys from `required` that are not top-level keys of the parsed header.
pub fn missing_keys<'a>(header: &Mapping, required: &[&'a str]) -> Vec<&'a str> {
    required
        .iter()
        .copied()
        .filter(|key| !header.contains_key(Value::String((*key).to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_returns_header_only() {
        let raw = split_frontmatter("---\ndescription: x\nglobs: []\n---\n\n# Body\n")
            .expect("split");
        assert_eq!(raw, "description: x\nglobs: []");
    }

    #[test]
    fn split_reports_delimiter_problems() {
        assert_eq!(
            split_frontmatter("# no header"),
            Err("missing frontmatter start delimiter".to_string())
        );
        assert_eq!(
            split_frontmatter("---\ndescription: x\n"),
            Err("missing frontmatter end delimiter".to_string())
        );
    }

    #[test]
    fn parsed_keys_ignore_body_mentions() {
        let text = "---\ndescription: x\nglobs: ['*.rs']\n---\nalwaysApply: true\n";
        let header = parse_frontmatter(text).expect("parse");
        assert_eq!(
            missing_keys(&header, &["description", "globs", "alwaysApply"]),
            vec!["alwaysApply"]
        );
    }

    #[test]
    fn scalar_headers_are_rejected() {
        let err = parse_frontmatter("---\njust text\n---\n").expect_err("scalar header");
        assert!(err.contains("mapping"));
    }

    #[test]
    fn empty_header_is_an_empty_mapping() {
        let header = parse_frontmatter("---\n---\nbody").expect("parse");
        assert!(header.is_empty());
    }
}
