//! AST visitor implementations for eryx
//!
//! This module contains the visitor passes used for reference extraction
//! from analyzed files and definition lookup inside package trees.

mod alias_collector;
mod call_collector;
mod definition_finder;
mod import_collector;

pub use alias_collector::AliasCollector;
pub use call_collector::{CallCollector, ImportBindingCollector};
pub use definition_finder::DefinitionFinder;
pub use import_collector::ImportCollector;
