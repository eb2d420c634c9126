//! Shared command context passed into command families.

use crate::runtime::config::RulesConfig;
use crate::runtime::error::{RulesError, RulesResult};
use std::env;
use std::path::{Path, PathBuf};

/// Shared execution context for `mdc-rules` commands.
#[derive(Clone, Debug)]
pub struct CommandContext {
    root: PathBuf,
    config: RulesConfig,
}

impl CommandContext {
    /// Create a context rooted at `root` (or the current directory) with the resolved config.
    pub fn new(root: Option<PathBuf>, config_path: Option<&Path>) -> RulesResult<Self> {
        let root = match root {
            Some(root) => root,
            None => env::current_dir().map_err(|err| {
                RulesError::io(format!("failed to resolve current directory: {err}"))
            })?,
        };
        if !root.is_dir() {
            return Err(RulesError::usage("root is not a directory")
                .with_path(&root)
                .with_hint("pass an existing directory to `--root`"));
        }
        let config = RulesConfig::resolve(&root, config_path)?;
        Ok(Self::with_config(root, config))
    }

    /// Create a context from an already-built config.
    pub fn with_config(root: PathBuf, config: RulesConfig) -> Self {
        Self { root, config }
    }

    /// Root that relative outputs and scan directories resolve against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolved configuration.
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::error::RulesErrorCategory;

    #[test]
    fn missing_root_is_a_usage_error() {
        let dir = tempfile::tempdir().expect("temp root");
        let err = CommandContext::new(Some(dir.path().join("absent")), None)
            .expect_err("missing root");
        assert_eq!(err.category, RulesErrorCategory::Usage);
        assert!(err.to_string().contains("absent"));
    }

    #[test]
    fn explicit_root_loads_defaults() {
        let dir = tempfile::tempdir().expect("temp root");
        let ctx = CommandContext::new(Some(dir.path().to_path_buf()), None).expect("context");
        assert_eq!(ctx.root(), dir.path());
        assert_eq!(ctx.config(), &RulesConfig::default());
    }
}
