//! eryx digs the definitions a Python file actually calls out of its
//! dependencies' source trees.
//!
//! The pipeline has two stages: [`extractor`] parses the analyzed file and
//! reports which imported names are called; [`locator`] resolves each name
//! to a source snippet inside an already-materialized package tree,
//! following entry-point re-exports. [`analyzer`] sequences the two around
//! an injected [`fetch::PackageFetcher`].

pub mod analyzer;
pub mod config;
pub mod dirs;
pub mod error;
pub mod extractor;
pub mod fetch;
pub mod locator;
pub mod stdlib;
pub mod types;
pub mod visitors;

pub use analyzer::{DependencyAnalyzer, analyze};
pub use error::ExtractError;
pub use types::{AnalysisResult, Reference, Snippet};
