use tree_sitter::Language as TSLanguage;

use super::common::TreeSitterParser;
use super::module_syntax::extract_module_items;
use super::{FileInput, LanguageParser, ParsedFile};
use crate::core::ParseError;

/// TypeScript front-end. Paths ending in `.tsx` use the TSX grammar.
pub struct TypeScriptParser {
    typescript: TSLanguage,
    tsx: TSLanguage,
}

impl TypeScriptParser {
    pub fn new() -> Self {
        Self {
            typescript: tree_sitter_typescript::language_typescript(),
            tsx: tree_sitter_typescript::language_tsx(),
        }
    }

    fn grammar_for(&self, path: &str) -> TSLanguage {
        if path.ends_with(".tsx") {
            self.tsx
        } else {
            self.typescript
        }
    }
}

impl Default for TypeScriptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageParser for TypeScriptParser {
    fn parse_source(&self, file: &FileInput) -> Result<ParsedFile, ParseError> {
        let mut parser = TreeSitterParser::new(self.grammar_for(&file.path))
            .map_err(|cause| ParseError::new(&file.path, cause))?;
        let tree = parser.parse_checked(&file.path, &file.content)?;

        let source = file.content.as_bytes();
        let root = tree.root_node();
        let items = extract_module_items(&root, source);

        Ok(ParsedFile {
            path: file.path.clone(),
            exports: items.exports,
            imports: items.imports,
        })
    }

    fn language_name(&self) -> &str {
        "typescript"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tsx_paths_use_the_tsx_grammar() {
        let parser = TypeScriptParser::new();
        let file = FileInput::typescript(
            "src/App.tsx",
            "export function App() { return <div className=\"app\">hi</div>; }",
        );
        let parsed = parser.parse_source(&file).unwrap();
        assert_eq!(parsed.exports.len(), 1);
        assert_eq!(parsed.exports[0].name, "App");
    }
}
