use std::collections::HashSet;

use super::ValidationError;
use crate::parsers::FileInput;

/// Rejects batches the analyzer cannot meaningfully process: no files,
/// empty paths, or a path given twice.
pub fn validate_files(files: &[FileInput]) -> Result<(), ValidationError> {
    if files.is_empty() {
        return Err(ValidationError::EmptyBatch);
    }

    let mut seen = HashSet::with_capacity(files.len());
    for (index, file) in files.iter().enumerate() {
        if file.path.is_empty() {
            return Err(ValidationError::EmptyPath { index });
        }
        if !seen.insert(file.path.as_str()) {
            return Err(ValidationError::DuplicatePath {
                path: file.path.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch_is_rejected() {
        assert_eq!(validate_files(&[]), Err(ValidationError::EmptyBatch));
    }

    #[test]
    fn empty_path_reports_its_index() {
        let files = vec![FileInput::typescript("a.ts", ""), FileInput::typescript("", "")];
        assert_eq!(
            validate_files(&files),
            Err(ValidationError::EmptyPath { index: 1 })
        );
    }

    #[test]
    fn duplicate_path_is_rejected() {
        let files = vec![
            FileInput::typescript("a.ts", ""),
            FileInput::javascript("a.ts", ""),
        ];
        assert_eq!(
            validate_files(&files),
            Err(ValidationError::DuplicatePath {
                path: "a.ts".to_string()
            })
        );
    }

    #[test]
    fn distinct_paths_pass() {
        let files = vec![
            FileInput::typescript("a.ts", ""),
            FileInput::typescript("b.ts", ""),
        ];
        assert!(validate_files(&files).is_ok());
    }
}
