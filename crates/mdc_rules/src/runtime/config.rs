//! Typed configuration loading.

use crate::convert::ConverterConfig;
use crate::runtime::error::{RulesError, RulesResult};
use crate::validate::ValidatorConfig;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Complete tool configuration.
///
/// Every section and key is optional; anything omitted falls back to the built-in rule table and
/// validator roots.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    /// Settings for `mdc-rules convert`.
    pub converter: ConverterConfig,
    /// Settings for `mdc-rules validate`.
    pub validator: ValidatorConfig,
}

impl RulesConfig {
    /// Load the config at `path` (relative paths resolve against `root`), or the built-in
    /// defaults when no path is given.
    pub fn resolve(root: &Path, path: Option<&Path>) -> RulesResult<Self> {
        match path {
            Some(path) => ConfigLoader::new(root, path).load(),
            None => Ok(Self::default()),
        }
    }
}

/// Generic TOML-backed config loader.
///
/// `ConfigLoader<T>` handles only filesystem access and TOML deserialization; callers validate
/// semantics after the typed value is loaded.
#[derive(Clone, Debug)]
pub struct ConfigLoader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T> ConfigLoader<T>
where
    T: DeserializeOwned,
{
    /// Create a loader for `path`, joined onto `root` when relative.
    pub fn new(root: &Path, path: &Path) -> Self {
        Self {
            path: root.join(path),
            _marker: PhantomData,
        }
    }

    /// Load and deserialize the configuration file.
    ///
    /// Missing files, unreadable files, and TOML parse failures are all surfaced as
    /// [`RulesErrorCategory::Config`](crate::runtime::error::RulesErrorCategory::Config).
    pub fn load(&self) -> RulesResult<T> {
        let body = fs::read_to_string(&self.path).map_err(|err| {
            RulesError::config(format!("failed to read {}: {err}", self.path.display()))
        })?;
        toml::from_str(&body).map_err(|err| {
            RulesError::config(format!("failed to parse {}: {err}", self.path.display()))
        })
    }
}
