//! Lib directory discovery.
//!
//! Walks the source root depth-first, top-down, with siblings ordered
//! lexicographically by file name, yielding every directory whose base name
//! equals the configured name. The fixed order makes last-writer-wins
//! collisions between discovered directories deterministic.

use crate::error::MergeError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Iterator over directories named `name` beneath a root.
///
/// Matched directories are not pruned: the walk descends into them, so a
/// nested match at any depth is yielded as well. The root itself is never a
/// match, and a missing root yields nothing.
pub struct NamedDirWalk {
    inner: Option<walkdir::IntoIter>,
    name: OsString,
}

impl NamedDirWalk {
    pub fn new(root: &Path, name: &str) -> Self {
        let inner = root.is_dir().then(|| {
            WalkDir::new(root)
                .follow_links(false)
                .sort_by_file_name()
                .into_iter()
        });
        NamedDirWalk {
            inner,
            name: OsString::from(name),
        }
    }
}

impl Iterator for NamedDirWalk {
    type Item = Result<PathBuf, MergeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let inner = self.inner.as_mut()?;
        loop {
            match inner.next()? {
                Err(e) => return Some(Err(e.into())),
                Ok(entry) => {
                    if entry.depth() > 0
                        && entry.file_type().is_dir()
                        && entry.file_name() == self.name.as_os_str()
                    {
                        return Some(Ok(entry.into_path()));
                    }
                }
            }
        }
    }
}
