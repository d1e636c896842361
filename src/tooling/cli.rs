//! CLI Tooling
//!
//! Command-line interface for the merge and scan operations. Flags override
//! the loaded configuration; anything left unset falls back to the config
//! file, environment, and built-in defaults.

use crate::config::{ConfigLoader, ExistingDirPolicy, MergeConfig};
use crate::discover::NamedDirWalk;
use crate::error::MergeError;
use crate::merger::{format_report_text, TreeMerger};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;

/// Treemerge CLI - merge lib/ directory trees into one target directory
#[derive(Parser)]
#[command(name = "treemerge")]
#[command(about = "Merge lib/ directory trees into a single target directory")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr)
    #[arg(long)]
    pub log_output: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Discover lib directories and merge their contents into the target
    Merge {
        /// Root of the package tree to search
        #[arg(long)]
        source_root: Option<PathBuf>,

        /// Directory to merge into (must already exist)
        #[arg(long)]
        target_root: Option<PathBuf>,

        /// Base name of the directories to discover
        #[arg(long)]
        dir_name: Option<String>,

        /// Policy when a directory child already exists in the target
        #[arg(long, value_enum)]
        on_existing_dir: Option<ExistingDirPolicy>,

        /// Output format for the run summary (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List the lib directories a merge would process, without copying
    Scan {
        /// Root of the package tree to search
        #[arg(long)]
        source_root: Option<PathBuf>,

        /// Base name of the directories to discover
        #[arg(long)]
        dir_name: Option<String>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// Execution context holding the effective configuration.
pub struct CliContext {
    config: MergeConfig,
}

impl CliContext {
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, MergeError> {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from_file(&path)?,
            None => ConfigLoader::load()?,
        };
        Ok(CliContext { config })
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Execute a command, returning its printable output.
    pub fn execute(&self, command: &Commands) -> Result<String, MergeError> {
        match command {
            Commands::Merge {
                source_root,
                target_root,
                dir_name,
                on_existing_dir,
                format,
            } => {
                let mut config = self.config.clone();
                if let Some(path) = source_root {
                    config.source_root = path.clone();
                }
                if let Some(path) = target_root {
                    config.target_root = path.clone();
                }
                if let Some(name) = dir_name {
                    config.dir_name = name.clone();
                }
                if let Some(policy) = on_existing_dir {
                    config.on_existing_dir = *policy;
                }

                let report = TreeMerger::new(config).run()?;
                if format == "json" {
                    Ok(json!({
                        "lib_dirs_found": report.lib_dirs_found,
                        "files_copied": report.files_copied,
                        "dirs_merged": report.dirs_merged,
                        "dirs_skipped": report.dirs_skipped,
                    })
                    .to_string())
                } else {
                    Ok(format_report_text(&report))
                }
            }
            Commands::Scan {
                source_root,
                dir_name,
                format,
            } => {
                let root = source_root.as_ref().unwrap_or(&self.config.source_root);
                let name = dir_name.as_deref().unwrap_or(&self.config.dir_name);

                let dirs: Vec<PathBuf> =
                    NamedDirWalk::new(root, name).collect::<Result<_, _>>()?;
                if format == "json" {
                    Ok(json!({
                        "total": dirs.len(),
                        "lib_dirs": dirs,
                    })
                    .to_string())
                } else if dirs.is_empty() {
                    Ok(format!("No directories named '{}' found under {}", name, root.display()))
                } else {
                    Ok(dirs
                        .iter()
                        .map(|d| d.display().to_string())
                        .collect::<Vec<_>>()
                        .join("\n"))
                }
            }
        }
    }
}
