use anyhow::{bail, Result};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::default_exclude_patterns;
use crate::parsers::{FileInput, Language};

const SOURCE_EXTENSIONS: [&str; 4] = ["ts", "tsx", "js", "jsx"];

/// Turns a project directory into an analysis batch.
pub struct FileScanner {
    exclude_patterns: Vec<String>,
}

impl FileScanner {
    pub fn new() -> Self {
        Self::with_exclude_patterns(default_exclude_patterns())
    }

    /// Paths whose lowercased relative form contains any pattern are skipped.
    pub fn with_exclude_patterns(patterns: Vec<String>) -> Self {
        Self {
            exclude_patterns: patterns
                .into_iter()
                .map(|pattern| pattern.to_lowercase())
                .filter(|pattern| !pattern.is_empty())
                .collect(),
        }
    }

    pub fn scan_directory(&self, root_path: &Path) -> Result<Vec<FileInput>> {
        if !root_path.is_dir() {
            bail!("{} is not a directory", root_path.display());
        }

        // Collect all entries first for parallel reading
        let mut excluded = 0usize;
        let mut entries: Vec<(PathBuf, String)> = Vec::new();
        for entry in WalkDir::new(root_path).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(relative) = relative_path(root_path, entry.path()) else {
                continue;
            };
            if self.is_excluded(&relative) {
                excluded += 1;
                continue;
            }
            if has_source_extension(entry.path()) {
                entries.push((entry.into_path(), relative));
            }
        }

        let mut files: Vec<FileInput> = entries
            .par_iter()
            .filter_map(|(path, relative)| match fs::read(path) {
                Ok(bytes) => match String::from_utf8(bytes) {
                    Ok(content) => Some(Ok(FileInput::new(
                        relative.clone(),
                        content,
                        Language::from_file_name(relative),
                    ))),
                    Err(_) => {
                        warn!(path = %relative, "skipping non UTF-8 file");
                        None
                    }
                },
                Err(err) => Some(Err(anyhow::Error::new(err)
                    .context(format!("failed to read {}", path.display())))),
            })
            .collect::<Result<Vec<_>>>()?;

        files.sort_by(|a, b| a.path.cmp(&b.path));
        debug!(included = files.len(), excluded, "directory scanned");

        if files.is_empty() {
            bail!("no source files found in {}", root_path.display());
        }
        Ok(files)
    }

    fn is_excluded(&self, relative: &str) -> bool {
        let normalized = relative.to_lowercase();
        self.exclude_patterns
            .iter()
            .any(|pattern| normalized.contains(pattern.as_str()))
    }
}

impl Default for FileScanner {
    fn default() -> Self {
        Self::new()
    }
}

fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SOURCE_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// `/`-separated path of `path` below `root`.
fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let segments: Vec<&str> = relative
        .components()
        .map(|component| component.as_os_str().to_str())
        .collect::<Option<_>>()?;
    Some(segments.join("/"))
}
