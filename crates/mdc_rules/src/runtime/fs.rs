//! Shared filesystem helpers.

use crate::runtime::error::{RulesError, RulesResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path};

/// Read a UTF-8 text file, returning `None` when it does not exist.
///
/// Line endings are normalized like [`read_text`].
pub fn read_optional(path: &Path) -> RulesResult<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(normalize_newlines(text))),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(io_error(err, "read", path)),
    }
}

/// Read a UTF-8 text file with `\r\n` and lone `\r` line endings turned into `\n`.
pub fn read_text(path: &Path) -> RulesResult<String> {
    fs::read_to_string(path)
        .map(normalize_newlines)
        .map_err(|err| io_error(err, "read", path))
}

/// Write `contents` to `path`, creating parent directories first.
pub fn write_text(path: &Path, contents: &str) -> RulesResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| io_error(err, "create_dir", parent))?;
    }
    fs::write(path, contents).map_err(|err| io_error(err, "write", path))
}

fn io_error(err: std::io::Error, operation: &str, path: &Path) -> RulesError {
    RulesError::from(err).with_operation(operation).with_path(path)
}

fn normalize_newlines(text: String) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text
    }
}

/// Render `path` relative to `root` with `/` separators, falling back to the full path.
pub fn rel_posix(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let parts: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::CurDir => Some(".".to_string()),
            Component::ParentDir => Some("..".to_string()),
            Component::RootDir | Component::Prefix(_) => None,
        })
        .collect();
    if rel.has_root() {
        format!("/{}", parts.join("/"))
    } else {
        parts.join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_optional_maps_missing_file_to_none() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("absent.md");
        assert_eq!(read_optional(&missing).expect("read"), None);

        let present = dir.path().join("present.md");
        fs::write(&present, "# Guide\n").expect("write");
        assert_eq!(
            read_optional(&present).expect("read").as_deref(),
            Some("# Guide\n")
        );
    }

    #[test]
    fn reads_normalize_line_endings() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("guide.md");
        fs::write(&path, "# T\r\n\r\nold mac\rline\n").expect("write");
        assert_eq!(read_text(&path).expect("read"), "# T\n\nold mac\nline\n");
        assert_eq!(
            read_optional(&path).expect("read").as_deref(),
            Some("# T\n\nold mac\nline\n")
        );
    }

    #[test]
    fn read_errors_carry_operation_and_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = read_text(&dir.path().join("absent.mdc")).expect_err("missing file");
        assert_eq!(err.category, crate::runtime::error::RulesErrorCategory::Io);
        assert_eq!(err.operation.as_deref(), Some("read"));
        assert!(err.target.as_deref().is_some_and(|t| t.ends_with("absent.mdc")));
    }

    #[test]
    fn write_text_creates_missing_parents_and_overwrites() {
        let dir = tempfile::tempdir().expect("temp dir");
        let target = dir.path().join(".cursor/rules/70-database-standards.mdc");
        write_text(&target, "first").expect("write");
        write_text(&target, "second").expect("overwrite");
        assert_eq!(fs::read_to_string(&target).expect("read back"), "second");
    }

    #[test]
    fn rel_posix_strips_root_prefix() {
        let root = Path::new("/work/rules");
        assert_eq!(
            rel_posix(root, Path::new("/work/rules/languages/rust/style.mdc")),
            "languages/rust/style.mdc"
        );
        assert_eq!(
            rel_posix(root, Path::new("/elsewhere/guide.md")),
            "/elsewhere/guide.md"
        );
    }
}
