use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::graph::DependencyNode;
use super::AnalysisResult;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Added,
    Removed,
    Modified,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DependencySnapshot {
    pub dependencies: Vec<String>,
}

impl DependencySnapshot {
    fn of(node: &DependencyNode) -> Self {
        Self {
            dependencies: node.dependencies.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileChange {
    pub path: String,
    #[serde(rename = "changeType")]
    pub change_type: ChangeType,
    /// Present for removed and modified files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<DependencySnapshot>,
    /// Present for added and modified files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<DependencySnapshot>,
}

/// Per-file structural changes between two snapshots. The three path lists
/// partition `changes` by change type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DriftResult {
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub modified: Vec<String>,
    pub changes: Vec<FileChange>,
}

impl DriftResult {
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    fn push_added(&mut self, node: &DependencyNode) {
        self.added.push(node.path.clone());
        self.changes.push(FileChange {
            path: node.path.clone(),
            change_type: ChangeType::Added,
            before: None,
            after: Some(DependencySnapshot::of(node)),
        });
    }

    fn push_removed(&mut self, node: &DependencyNode) {
        self.removed.push(node.path.clone());
        self.changes.push(FileChange {
            path: node.path.clone(),
            change_type: ChangeType::Removed,
            before: Some(DependencySnapshot::of(node)),
            after: None,
        });
    }

    fn push_modified(&mut self, previous: &DependencyNode, current: &DependencyNode) {
        self.modified.push(current.path.clone());
        self.changes.push(FileChange {
            path: current.path.clone(),
            change_type: ChangeType::Modified,
            before: Some(DependencySnapshot::of(previous)),
            after: Some(DependencySnapshot::of(current)),
        });
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DriftDetector;

impl DriftDetector {
    pub fn new() -> Self {
        Self
    }

    /// Classifies every file as added, removed or modified between `previous`
    /// and `current`. Unchanged files produce no entry. Changes are emitted
    /// as all additions, then all removals, then all modifications.
    pub fn detect(&self, current: &AnalysisResult, previous: &AnalysisResult) -> DriftResult {
        let current_paths: HashSet<&str> =
            current.graph.iter().map(|node| node.path.as_str()).collect();

        // first occurrence wins when a snapshot repeats a path
        let mut previous_by_path: HashMap<&str, &DependencyNode> =
            HashMap::with_capacity(previous.graph.len());
        for node in &previous.graph {
            previous_by_path.entry(node.path.as_str()).or_insert(node);
        }

        let mut drift = DriftResult::default();

        for node in &current.graph {
            if !previous_by_path.contains_key(node.path.as_str()) {
                drift.push_added(node);
            }
        }

        for node in &previous.graph {
            if !current_paths.contains(node.path.as_str()) {
                drift.push_removed(node);
            }
        }

        for node in &current.graph {
            if let Some(previous_node) = previous_by_path.get(node.path.as_str()) {
                if dependencies_changed(&node.dependencies, &previous_node.dependencies) {
                    drift.push_modified(previous_node, node);
                }
            }
        }

        drift
    }
}

/// Order-insensitive comparison of two dependency lists.
pub fn dependencies_changed(current: &[String], previous: &[String]) -> bool {
    if current.len() != previous.len() {
        return true;
    }

    let current_set: HashSet<&String> = current.iter().collect();
    let previous_set: HashSet<&String> = previous.iter().collect();

    current.iter().any(|dep| !previous_set.contains(dep))
        || previous.iter().any(|dep| !current_set.contains(dep))
}

pub fn detect_drift(current: &AnalysisResult, previous: &AnalysisResult) -> DriftResult {
    DriftDetector::new().detect(current, previous)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deps(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn reordered_dependencies_are_unchanged() {
        assert!(!dependencies_changed(&deps(&["x", "y"]), &deps(&["y", "x"])));
    }

    #[test]
    fn size_mismatch_is_a_change() {
        assert!(dependencies_changed(&deps(&["x"]), &deps(&["x", "x"])));
        assert!(dependencies_changed(&deps(&["x", "y"]), &deps(&["x"])));
    }

    #[test]
    fn swapped_element_is_a_change() {
        assert!(dependencies_changed(&deps(&["x", "y"]), &deps(&["x", "z"])));
    }
}
