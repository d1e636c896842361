//! Configuration loading and merge settings.
//!
//! Sources are layered lowest to highest: built-in defaults, an optional
//! `treemerge.toml` in the working directory (or an explicit `--config`
//! file), then `TREEMERGE_*` environment variables with `__` as the
//! nested-key separator.

use crate::error::MergeError;
use crate::logging::LoggingConfig;
use clap::ValueEnum;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What to do when a directory child of a lib directory maps to a
/// destination directory that already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ExistingDirPolicy {
    /// Union-merge into the existing directory: files at matching relative
    /// paths are overwritten, files present only in the destination are
    /// left untouched.
    #[default]
    Merge,
    /// Treat the child as already satisfied and copy nothing from it.
    Skip,
    /// Surface the conflict as an error and abort the run.
    Fail,
}

/// Top-level configuration for a merge run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Root of the package tree to search for lib directories.
    #[serde(default = "default_source_root")]
    pub source_root: PathBuf,

    /// Directory the discovered contents are merged into. Must already
    /// exist; it is never created by the program.
    #[serde(default = "default_target_root")]
    pub target_root: PathBuf,

    /// Base name of the directories to discover.
    #[serde(default = "default_dir_name")]
    pub dir_name: String,

    /// Policy for directory children whose destination already exists.
    #[serde(default)]
    pub on_existing_dir: ExistingDirPolicy,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_source_root() -> PathBuf {
    PathBuf::from("/opt/apollo/neo/packages")
}

fn default_target_root() -> PathBuf {
    PathBuf::from("/usr/local/lib")
}

fn default_dir_name() -> String {
    "lib".to_string()
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            target_root: default_target_root(),
            dir_name: default_dir_name(),
            on_existing_dir: ExistingDirPolicy::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from standard sources and the environment.
    pub fn load() -> Result<MergeConfig, MergeError> {
        let builder =
            Config::builder().add_source(File::with_name("treemerge").required(false));
        let config = Self::with_environment(builder).build()?;
        Ok(config.try_deserialize()?)
    }

    /// Load configuration from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<MergeConfig, MergeError> {
        let builder = Config::builder().add_source(File::from(path));
        let config = Self::with_environment(builder).build()?;
        Ok(config.try_deserialize()?)
    }

    fn with_environment(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> config::ConfigBuilder<config::builder::DefaultState> {
        builder.add_source(
            Environment::with_prefix("TREEMERGE")
                .separator("__")
                .try_parsing(true),
        )
    }
}
