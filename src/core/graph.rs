use petgraph::algo::tarjan_scc;
use petgraph::{graph::NodeIndex, Directed, Graph};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::ImportResolver;
use crate::parsers::ParsedFile;

/// One analyzed file and the batch files it imports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DependencyNode {
    pub id: String,
    pub path: String,
    pub dependencies: Vec<String>,
}

impl DependencyNode {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            id: path.clone(),
            path,
            dependencies: Vec::new(),
        }
    }

    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }
}

/// Assembles one `DependencyNode` per parsed file, in the order files are added.
pub struct GraphBuilder {
    resolver: ImportResolver,
    nodes: Vec<DependencyNode>,
    unresolved: usize,
}

impl GraphBuilder {
    pub fn new(resolver: ImportResolver) -> Self {
        Self {
            resolver,
            nodes: Vec::new(),
            unresolved: 0,
        }
    }

    pub fn with_capacity(resolver: ImportResolver, capacity: usize) -> Self {
        Self {
            resolver,
            nodes: Vec::with_capacity(capacity),
            unresolved: 0,
        }
    }

    /// Resolves every import of `file`; targets keep first-seen order, duplicates dropped.
    pub fn add_file(&mut self, file: &ParsedFile) -> &DependencyNode {
        let mut seen = HashSet::new();
        let mut dependencies = Vec::new();

        for import in &file.imports {
            match self.resolver.resolve(&import.source, &file.path) {
                Some(target) => {
                    if seen.insert(target.clone()) {
                        dependencies.push(target);
                    }
                }
                None => self.unresolved += 1,
            }
        }

        self.nodes
            .push(DependencyNode::new(file.path.clone()).with_dependencies(dependencies));
        &self.nodes[self.nodes.len() - 1]
    }

    /// Imports that were external or matched no batch file.
    pub fn unresolved_count(&self) -> usize {
        self.unresolved
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.dependencies.len()).sum()
    }

    pub fn build(self) -> Vec<DependencyNode> {
        self.nodes
    }
}

pub type FileGraph = Graph<String, (), Directed>;

/// Directed petgraph view of a node list. Edges to unknown paths are skipped;
/// repeated paths collapse onto the first node.
pub fn to_petgraph(nodes: &[DependencyNode]) -> FileGraph {
    let mut graph = FileGraph::with_capacity(nodes.len(), 0);
    let mut index: HashMap<&str, NodeIndex> = HashMap::with_capacity(nodes.len());

    for node in nodes {
        index
            .entry(node.path.as_str())
            .or_insert_with(|| graph.add_node(node.path.clone()));
    }

    for node in nodes {
        let source = index[node.path.as_str()];
        for dependency in &node.dependencies {
            if let Some(&target) = index.get(dependency.as_str()) {
                graph.update_edge(source, target, ());
            }
        }
    }

    graph
}

/// Import cycles: strongly connected components with more than one file,
/// plus files importing themselves. Paths within a cycle and the cycles
/// themselves are sorted.
pub fn find_cycles(nodes: &[DependencyNode]) -> Vec<Vec<String>> {
    let graph = to_petgraph(nodes);

    let mut cycles: Vec<Vec<String>> = tarjan_scc(&graph)
        .into_iter()
        .filter(|component| {
            component.len() > 1
                || component
                    .first()
                    .map(|&idx| graph.find_edge(idx, idx).is_some())
                    .unwrap_or(false)
        })
        .map(|component| {
            let mut paths: Vec<String> = component
                .into_iter()
                .map(|idx| graph[idx].clone())
                .collect();
            paths.sort();
            paths
        })
        .collect();

    cycles.sort();
    cycles
}
