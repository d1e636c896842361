//! Metadata-preserving copy primitives.
//!
//! A file copy here is not a bare byte-stream copy: permission bits travel
//! with `fs::copy` and the source's modification time is reapplied to the
//! destination afterwards. Directory copies union-merge into an existing
//! destination rather than replacing it.

use crate::error::MergeError;
use std::fs;
use std::path::Path;

/// Copy a single file to `dest`, overwriting any existing file there and
/// preserving the source's permission bits and modification time.
pub fn copy_file(src: &Path, dest: &Path) -> Result<(), MergeError> {
    fs::copy(src, dest).map_err(|e| MergeError::io(dest, e))?;

    let mtime = fs::metadata(src)
        .and_then(|m| m.modified())
        .map_err(|e| MergeError::io(src, e))?;
    fs::File::options()
        .write(true)
        .open(dest)
        .and_then(|f| f.set_modified(mtime))
        .map_err(|e| MergeError::io(dest, e))?;

    Ok(())
}

/// Recursively union-merge the subtree at `src` into `dest`.
///
/// Files at matching relative paths are overwritten; files present only in
/// the destination are left untouched. Children are processed in
/// lexicographic order. Returns the number of files copied.
pub fn merge_dir(src: &Path, dest: &Path) -> Result<u64, MergeError> {
    if !dest.is_dir() {
        fs::create_dir(dest).map_err(|e| MergeError::io(dest, e))?;
    }

    let mut files_copied = 0;
    for entry in sorted_children(src)? {
        let child_src = entry.path();
        let child_dest = dest.join(entry.file_name());
        // Metadata-following check so a symlink to a directory is merged
        // through rather than handed to the file copy
        if child_src.is_dir() {
            files_copied += merge_dir(&child_src, &child_dest)?;
        } else {
            copy_file(&child_src, &child_dest)?;
            files_copied += 1;
        }
    }

    Ok(files_copied)
}

/// List a directory's immediate children, sorted by file name.
pub fn sorted_children(dir: &Path) -> Result<Vec<fs::DirEntry>, MergeError> {
    let mut children = fs::read_dir(dir)
        .map_err(|e| MergeError::io(dir, e))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| MergeError::io(dir, e))?;
    children.sort_by_key(|entry| entry.file_name());
    Ok(children)
}
