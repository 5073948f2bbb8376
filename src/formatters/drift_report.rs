use std::collections::HashSet;
use std::fmt::Write;

use crate::core::{ChangeType, DriftResult, FileChange};

pub const NO_DRIFT: &str = "No drift detected. Architecture unchanged.";

/// Markdown summary of a drift result, one section per change type.
pub fn render_report(drift: &DriftResult) -> String {
    if drift.is_empty() {
        return NO_DRIFT.to_string();
    }

    let mut out = String::from("# Drift Detection\n");

    if !drift.added.is_empty() {
        let _ = writeln!(out, "\n## Added Files ({})\n", drift.added.len());
        for path in &drift.added {
            let _ = writeln!(out, "- {path}");
        }
    }

    if !drift.removed.is_empty() {
        let _ = writeln!(out, "\n## Removed Files ({})\n", drift.removed.len());
        for path in &drift.removed {
            let _ = writeln!(out, "- {path}");
        }
    }

    if !drift.modified.is_empty() {
        let _ = writeln!(out, "\n## Modified Files ({})\n", drift.modified.len());
        for change in drift
            .changes
            .iter()
            .filter(|change| change.change_type == ChangeType::Modified)
        {
            let _ = writeln!(out, "- {}", change.path);
            let (gained, lost) = dependency_delta(change);
            for dependency in gained {
                let _ = writeln!(out, "  + {dependency}");
            }
            for dependency in lost {
                let _ = writeln!(out, "  - {dependency}");
            }
        }
    }

    out
}

/// Dependencies present only after, and only before, the change.
fn dependency_delta(change: &FileChange) -> (Vec<&str>, Vec<&str>) {
    let before: &[String] = change
        .before
        .as_ref()
        .map(|side| side.dependencies.as_slice())
        .unwrap_or_default();
    let after: &[String] = change
        .after
        .as_ref()
        .map(|side| side.dependencies.as_slice())
        .unwrap_or_default();

    let before_set: HashSet<&str> = before.iter().map(String::as_str).collect();
    let after_set: HashSet<&str> = after.iter().map(String::as_str).collect();

    let gained = after
        .iter()
        .map(String::as_str)
        .filter(|dep| !before_set.contains(dep))
        .collect();
    let lost = before
        .iter()
        .map(String::as_str)
        .filter(|dep| !after_set.contains(dep))
        .collect();
    (gained, lost)
}
