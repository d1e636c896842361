//! TreeMerger: discovery plus merge orchestration.
//!
//! Runs the whole one-shot pipeline: validate the target root, walk the
//! source root for lib directories, and merge each one's immediate children
//! into the target. Copies happen strictly sequentially in discovery order,
//! so colliding relative paths resolve last-writer-wins with the later
//! lib directory in lexicographic walk order winning.

use crate::config::{ExistingDirPolicy, MergeConfig};
use crate::copy;
use crate::discover::NamedDirWalk;
use crate::error::MergeError;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Summary of a completed merge run.
#[derive(Debug, Default, Serialize)]
pub struct MergeReport {
    /// Discovered lib directories, in the order they were processed.
    pub lib_dirs_found: Vec<PathBuf>,
    /// Files copied into the target, including files inside merged subtrees.
    pub files_copied: u64,
    /// Directory children merged (or freshly copied) into the target.
    pub dirs_merged: u64,
    /// Directory children skipped under the `skip` policy.
    pub dirs_skipped: u64,
}

/// Render a report as the human-readable run summary.
pub fn format_report_text(report: &MergeReport) -> String {
    format!(
        "Lib directories found: {}\nFiles copied: {}\nDirectories merged: {}\nDirectories skipped: {}",
        report.lib_dirs_found.len(),
        report.files_copied,
        report.dirs_merged,
        report.dirs_skipped,
    )
}

/// One-shot merger of lib directory contents into a target directory.
pub struct TreeMerger {
    config: MergeConfig,
}

impl TreeMerger {
    pub fn new(config: MergeConfig) -> Self {
        TreeMerger { config }
    }

    /// Discover every lib directory under the source root and merge each
    /// one's immediate children into the target root.
    ///
    /// The target root must already exist. A missing source root is not an
    /// error; it simply yields an empty report. Any I/O failure other than
    /// the policy-handled existing-directory case aborts the run, leaving a
    /// partial merge in place.
    pub fn run(&self) -> Result<MergeReport, MergeError> {
        let target_root = &self.config.target_root;
        if !target_root.is_dir() {
            return Err(MergeError::TargetRootMissing(target_root.clone()));
        }

        let mut report = MergeReport::default();

        let source_root = &self.config.source_root;
        if !source_root.is_dir() {
            warn!(
                source_root = %source_root.display(),
                "Source root does not exist, nothing to merge"
            );
            return Ok(report);
        }

        for lib_dir in NamedDirWalk::new(source_root, &self.config.dir_name) {
            let lib_dir = lib_dir?;
            println!("Found lib directory at: {}", lib_dir.display());
            info!(path = %lib_dir.display(), "Merging lib directory");
            self.merge_children(&lib_dir, &mut report)?;
            report.lib_dirs_found.push(lib_dir);
        }

        info!(
            lib_dirs = report.lib_dirs_found.len(),
            files_copied = report.files_copied,
            dirs_merged = report.dirs_merged,
            dirs_skipped = report.dirs_skipped,
            "Merge complete"
        );
        Ok(report)
    }

    /// Merge the immediate children of one lib directory into the target.
    fn merge_children(&self, lib_dir: &Path, report: &mut MergeReport) -> Result<(), MergeError> {
        for entry in copy::sorted_children(lib_dir)? {
            let source = entry.path();
            let dest = self.config.target_root.join(entry.file_name());

            if source.is_dir() {
                if dest.is_dir() {
                    match self.config.on_existing_dir {
                        ExistingDirPolicy::Skip => {
                            debug!(dest = %dest.display(), "Destination exists, skipping");
                            report.dirs_skipped += 1;
                            continue;
                        }
                        ExistingDirPolicy::Fail => {
                            return Err(MergeError::DestinationExists(dest));
                        }
                        ExistingDirPolicy::Merge => {}
                    }
                } else if dest.exists() {
                    // A non-directory occupies the destination. Treated as
                    // already satisfied under merge and skip; only the fail
                    // policy surfaces it.
                    if self.config.on_existing_dir == ExistingDirPolicy::Fail {
                        return Err(MergeError::DestinationExists(dest));
                    }
                    debug!(
                        dest = %dest.display(),
                        "Destination exists as a non-directory, skipping"
                    );
                    report.dirs_skipped += 1;
                    continue;
                }
                report.files_copied += copy::merge_dir(&source, &dest)?;
                report.dirs_merged += 1;
            } else {
                copy::copy_file(&source, &dest)?;
                report.files_copied += 1;
            }
        }
        Ok(())
    }
}
