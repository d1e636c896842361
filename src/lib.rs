//! Treemerge: Lib Directory Tree Merging
//!
//! Walks a package tree, finds every directory named `lib` (configurable),
//! and merges each one's immediate children into a single target directory.
//! Intended as a one-shot step inside a packaging or container build.

pub mod config;
pub mod copy;
pub mod discover;
pub mod error;
pub mod logging;
pub mod merger;
pub mod tooling;
