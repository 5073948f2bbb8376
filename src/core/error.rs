use thiserror::Error;

use crate::parsers::Language;

/// Why a file could not be turned into a syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCause {
    #[error("syntax error at line {line}, column {column}")]
    Syntax { line: usize, column: usize },

    #[error("missing `{expected}` at line {line}, column {column}")]
    Missing {
        expected: String,
        line: usize,
        column: usize,
    },

    #[error("grammar initialization failed: {0}")]
    Grammar(String),

    #[error("parser produced no syntax tree")]
    NoTree,

    #[error("no parser registered for {0}")]
    UnsupportedLanguage(Language),
}

/// A file in the batch is not valid syntax for its declared language.
/// Aborts the whole analysis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to parse file {path}: {cause}")]
pub struct ParseError {
    pub path: String,
    #[source]
    pub cause: ParseCause,
}

impl ParseError {
    pub fn new(path: impl Into<String>, cause: ParseCause) -> Self {
        Self {
            path: path.into(),
            cause,
        }
    }

    pub fn unsupported_language(path: &str, language: Language) -> Self {
        Self::new(path, ParseCause::UnsupportedLanguage(language))
    }
}

/// Rejections of a batch before it reaches the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("at least one file is required")]
    EmptyBatch,

    #[error("file #{index} has an empty path")]
    EmptyPath { index: usize },

    #[error("duplicate file path in batch: {path}")]
    DuplicatePath { path: String },
}
