//! Recursive discovery of rule files under the scan directories.

use crate::runtime::error::{RulesError, RulesResult};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Suffix a file name must end with to be validated.
pub const RULE_SUFFIX: &str = ".mdc";

/// Collect rule files under each of `dirs` (resolved against `root`), directory by directory.
///
/// Directories that do not exist contribute nothing. Within a directory, its own files come first
/// in file-name order, then each subdirectory in file-name order; symlinked directories are listed
/// but not descended into.
pub fn discover_rule_files(root: &Path, dirs: &[String]) -> RulesResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for dir in dirs {
        let base = root.join(dir);
        if !base.is_dir() {
            tracing::debug!(dir = %base.display(), "scan directory missing, skipping");
            continue;
        }
        let walker = WalkDir::new(&base).sort_by(|a, b| {
            a.file_type()
                .is_dir()
                .cmp(&b.file_type().is_dir())
                .then_with(|| a.file_name().cmp(b.file_name()))
        });
        for entry in walker {
            let entry = entry.map_err(|err| {
                RulesError::io(format!("failed to walk {}: {err}", base.display()))
                    .with_operation("discover")
            })?;
            let path = entry.path();
            if path.is_dir() {
                continue;
            }
            if entry.file_name().to_string_lossy().ends_with(RULE_SUFFIX) {
                files.push(path.to_path_buf());
            }
        }
    }
    Ok(files)
}
