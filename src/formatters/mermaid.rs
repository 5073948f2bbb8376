//! Mermaid flowchart rendering of a dependency graph.
//!
//! The output grammar is consumed by convention downstream and must stay
//! byte-stable:
//!
//! ```text
//! graph LR
//!   N0["a.ts"]
//!   N1["b.ts"]
//!   N0 --> N1
//! ```

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::core::DependencyNode;

const HEADER: &str = "graph LR";
const EMPTY_PLACEHOLDER: &str = "  empty[\"No files analyzed\"]";

#[derive(Debug, Clone, Copy, Default)]
pub struct MermaidRenderer;

impl MermaidRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, graph: &[DependencyNode]) -> String {
        let mut lines = Vec::with_capacity(graph.len() * 2 + 2);
        lines.push(HEADER.to_string());

        // a repeated path maps to its last node id
        let mut node_ids: HashMap<&str, String> = HashMap::with_capacity(graph.len());
        for (index, node) in graph.iter().enumerate() {
            let node_id = format!("N{index}");
            lines.push(format!("  {}[\"{}\"]", node_id, node_label(&node.path)));
            node_ids.insert(node.path.as_str(), node_id);
        }

        for node in graph {
            let Some(source_id) = node_ids.get(node.path.as_str()) else {
                continue;
            };
            for dependency in &node.dependencies {
                if let Some(target_id) = node_ids.get(dependency.as_str()) {
                    lines.push(format!("  {source_id} --> {target_id}"));
                }
            }
        }

        if graph.is_empty() {
            lines.push(EMPTY_PLACEHOLDER.to_string());
        }

        lines.join("\n")
    }

    pub fn format_to_file(&self, graph: &[DependencyNode], output_path: &Path) -> Result<()> {
        fs::write(output_path, self.render(graph))
            .with_context(|| format!("failed to write diagram to {}", output_path.display()))
    }
}

/// Final path segment, or the whole path when that segment is empty.
pub fn node_label(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => path,
    }
}
