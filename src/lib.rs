//! # REPOVIZ
//!
//! Static import analysis for TypeScript and JavaScript projects.
//!
//! Given a batch of source files, repoviz extracts each file's top-level
//! exports and imports, resolves relative imports into a file-level
//! dependency graph, renders that graph as a Mermaid diagram, and compares
//! two such snapshots to report architectural drift.
//!
//! ## Pipeline
//!
//! - **parsers**: tree-sitter front-ends producing `ParsedFile`s
//! - **core**: import resolution, graph assembly, drift detection
//! - **formatters**: Mermaid text, JSON snapshots, drift reports

pub mod config;
pub mod core;
pub mod formatters;
pub mod parsers;

pub use crate::core::{analyze_project, detect_drift, AnalysisResult, DriftResult, ParseError};
pub use crate::parsers::{FileInput, Language};
