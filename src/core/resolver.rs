use std::collections::HashSet;

/// Extensions that mark a specifier as already naming a concrete file.
pub const SOURCE_EXTENSIONS: [&str; 4] = [".ts", ".tsx", ".js", ".jsx"];

/// Suffixes tried, in this order, for extensionless specifiers.
/// Precedence is fixed: existing snapshots depend on it.
pub const RESOLUTION_SUFFIXES: [&str; 8] = [
    ".ts",
    ".tsx",
    ".js",
    ".jsx",
    "/index.ts",
    "/index.tsx",
    "/index.js",
    "/index.jsx",
];

/// Maps relative import specifiers to files of the analyzed batch.
#[derive(Debug, Clone, Default)]
pub struct ImportResolver {
    known_paths: HashSet<String>,
}

impl ImportResolver {
    pub fn new<I, S>(known_paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known_paths: known_paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.known_paths.contains(path)
    }

    /// Resolves `specifier` as written in the file at `from_path`.
    ///
    /// Non-relative specifiers (packages, aliases, absolute paths) and
    /// relative ones matching no known file yield `None`.
    pub fn resolve(&self, specifier: &str, from_path: &str) -> Option<String> {
        resolve_import(specifier, from_path, &self.known_paths)
    }
}

pub fn resolve_import(
    specifier: &str,
    from_path: &str,
    known_paths: &HashSet<String>,
) -> Option<String> {
    if !specifier.starts_with('.') {
        return None;
    }

    let candidate = normalize_path(&format!("{}/{}", parent_dir(from_path), specifier));

    if SOURCE_EXTENSIONS.iter().any(|ext| candidate.ends_with(ext)) {
        return known_paths.contains(&candidate).then_some(candidate);
    }

    RESOLUTION_SUFFIXES
        .iter()
        .map(|suffix| format!("{candidate}{suffix}"))
        .find(|path| known_paths.contains(path))
}

/// Everything before the last `/`, or empty for a top-level file.
pub fn parent_dir(path: &str) -> &str {
    path.rfind('/').map(|idx| &path[..idx]).unwrap_or("")
}

/// Collapses `.`, `..` and empty segments. `..` past the first segment is dropped.
pub fn normalize_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            ".." => {
                segments.pop();
            }
            "." | "" => {}
            other => segments.push(other),
        }
    }
    segments.join("/")
}
