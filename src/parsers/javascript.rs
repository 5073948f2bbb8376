use tree_sitter::Language as TSLanguage;

use super::common::TreeSitterParser;
use super::module_syntax::extract_module_items;
use super::{FileInput, LanguageParser, ParsedFile};
use crate::core::ParseError;

/// JavaScript front-end; the grammar accepts JSX as well.
pub struct JavaScriptParser {
    language: TSLanguage,
}

impl JavaScriptParser {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_javascript::language(),
        }
    }
}

impl Default for JavaScriptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageParser for JavaScriptParser {
    fn parse_source(&self, file: &FileInput) -> Result<ParsedFile, ParseError> {
        let mut parser = TreeSitterParser::new(self.language)
            .map_err(|cause| ParseError::new(&file.path, cause))?;
        let tree = parser.parse_checked(&file.path, &file.content)?;

        let items = extract_module_items(&tree.root_node(), file.content.as_bytes());

        Ok(ParsedFile {
            path: file.path.clone(),
            exports: items.exports,
            imports: items.imports,
        })
    }

    fn language_name(&self) -> &str {
        "javascript"
    }
}
