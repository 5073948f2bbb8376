pub mod common;
pub mod javascript;
pub mod module_syntax;
pub mod typescript;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::ParseError;

/// Source language declared by the caller for a file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    TypeScript,
    JavaScript,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::TypeScript => "typescript",
            Language::JavaScript => "javascript",
        }
    }

    /// Language implied by a file name: `.ts`/`.tsx` are TypeScript, everything else JavaScript.
    pub fn from_file_name(name: &str) -> Self {
        if name.ends_with(".ts") || name.ends_with(".tsx") {
            Language::TypeScript
        } else {
            Language::JavaScript
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One file of an analysis batch, content already read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileInput {
    pub path: String,
    pub content: String,
    pub language: Language,
}

impl FileInput {
    pub fn new(path: impl Into<String>, content: impl Into<String>, language: Language) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            language,
        }
    }

    pub fn typescript(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, Language::TypeScript)
    }

    pub fn javascript(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, Language::JavaScript)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExportKind {
    Function,
    Class,
    Variable,
    Interface,
    Type,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ExportKind,
}

impl ExportInfo {
    pub fn new(name: impl Into<String>, kind: ExportKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImportInfo {
    /// Module specifier exactly as written, without quotes.
    pub source: String,
    /// Bound names: named imports, then the default import, then `* as <name>`.
    pub specifiers: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedFile {
    pub path: String,
    pub exports: Vec<ExportInfo>,
    pub imports: Vec<ImportInfo>,
}

/// Syntax front-end for one language. Implementations must be pure: the same
/// input always yields the same `ParsedFile` or the same error.
pub trait LanguageParser: Send + Sync {
    fn parse_source(&self, file: &FileInput) -> Result<ParsedFile, ParseError>;
    fn language_name(&self) -> &str;
}

/// Maps each declared language to the front-end that parses it.
pub struct ParserFactory {
    parsers: HashMap<Language, Box<dyn LanguageParser>>,
}

impl ParserFactory {
    pub fn new() -> Self {
        Self::empty()
            .with_parser(Language::TypeScript, Box::new(typescript::TypeScriptParser::new()))
            .with_parser(Language::JavaScript, Box::new(javascript::JavaScriptParser::new()))
    }

    /// A factory with no front-ends registered.
    pub fn empty() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }

    /// Registers `parser` for `language`, replacing any previous registration.
    pub fn with_parser(mut self, language: Language, parser: Box<dyn LanguageParser>) -> Self {
        self.parsers.insert(language, parser);
        self
    }

    pub fn get_parser(&self, language: Language) -> Option<&dyn LanguageParser> {
        self.parsers.get(&language).map(|parser| parser.as_ref())
    }

    /// Parses one file with the front-end registered for its language.
    pub fn parse(&self, file: &FileInput) -> Result<ParsedFile, ParseError> {
        match self.get_parser(file.language) {
            Some(parser) => parser.parse_source(file),
            None => Err(ParseError::unsupported_language(&file.path, file.language)),
        }
    }
}

impl Default for ParserFactory {
    fn default() -> Self {
        Self::new()
    }
}
