//! Tooling & Integration Layer
//!
//! Command-line entry points for merge and scan operations. Keeps the
//! library usable from build scripts and container images alike while the
//! merge itself stays idempotent across re-runs.

pub mod cli;

pub use cli::{Cli, CliContext, Commands};
