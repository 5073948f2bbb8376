use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::graph::{DependencyNode, GraphBuilder};
use super::{ImportResolver, ParseError};
use crate::formatters::MermaidRenderer;
use crate::parsers::{FileInput, ParsedFile, ParserFactory};

/// Parsed files and their dependency graph, before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectGraph {
    pub files: Vec<ParsedFile>,
    pub graph: Vec<DependencyNode>,
}

/// The unit persisted as a snapshot and compared by drift detection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisResult {
    pub files: Vec<ParsedFile>,
    pub graph: Vec<DependencyNode>,
    #[serde(rename = "mermaid")]
    pub diagram: String,
}

pub struct ProjectAnalyzer {
    parser_factory: ParserFactory,
    renderer: MermaidRenderer,
}

impl ProjectAnalyzer {
    pub fn new() -> Self {
        Self::with_parser_factory(ParserFactory::new())
    }

    /// Uses `parser_factory` as the syntax front-end instead of the built-in grammars.
    pub fn with_parser_factory(parser_factory: ParserFactory) -> Self {
        Self {
            parser_factory,
            renderer: MermaidRenderer::new(),
        }
    }

    /// Parses every file and builds the dependency graph.
    ///
    /// Files are parsed in parallel; results are joined back in input order.
    /// If any file fails, the first failing file in input order is reported
    /// and nothing else is returned.
    pub fn build(&self, files: &[FileInput]) -> Result<ProjectGraph, ParseError> {
        debug!(files = files.len(), "parsing batch");

        let results: Vec<Result<ParsedFile, ParseError>> = files
            .par_iter()
            .map(|file| self.parser_factory.parse(file))
            .collect();
        let parsed = results.into_iter().collect::<Result<Vec<_>, _>>()?;

        let resolver = ImportResolver::new(files.iter().map(|file| file.path.as_str()));
        let mut graph_builder = GraphBuilder::with_capacity(resolver, parsed.len());
        for file in &parsed {
            let node = graph_builder.add_file(file);
            trace!(
                path = %node.path,
                dependencies = node.dependencies.len(),
                imports = file.imports.len(),
                "resolved imports"
            );
        }

        debug!(
            nodes = parsed.len(),
            edges = graph_builder.edge_count(),
            dropped = graph_builder.unresolved_count(),
            "dependency graph built"
        );

        Ok(ProjectGraph {
            files: parsed,
            graph: graph_builder.build(),
        })
    }

    /// Full pipeline: parse, resolve, render.
    pub fn analyze_project(&self, files: &[FileInput]) -> Result<AnalysisResult, ParseError> {
        let ProjectGraph { files, graph } = self.build(files)?;
        let diagram = self.renderer.render(&graph);
        Ok(AnalysisResult {
            files,
            graph,
            diagram,
        })
    }
}

impl Default for ProjectAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Analyzes a batch with the built-in TypeScript and JavaScript front-ends.
pub fn analyze_project(files: &[FileInput]) -> Result<AnalysisResult, ParseError> {
    ProjectAnalyzer::new().analyze_project(files)
}
