use tree_sitter::{Language, Node as TSNode, Parser, Tree};

use crate::core::{ParseCause, ParseError};

/// Thin wrapper over a tree-sitter parser bound to one grammar.
pub struct TreeSitterParser {
    parser: Parser,
}

impl TreeSitterParser {
    pub fn new(language: Language) -> Result<Self, ParseCause> {
        let mut parser = Parser::new();
        parser
            .set_language(language)
            .map_err(|err| ParseCause::Grammar(err.to_string()))?;
        Ok(Self { parser })
    }

    /// Parses `source` and rejects trees that contain error or missing nodes.
    pub fn parse_checked(&mut self, path: &str, source: &str) -> Result<Tree, ParseError> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| ParseError::new(path, ParseCause::NoTree))?;

        if let Some(cause) = first_syntax_problem(&tree.root_node()) {
            return Err(ParseError::new(path, cause));
        }
        Ok(tree)
    }
}

/// Pre-order search for the first ERROR or MISSING node.
pub fn first_syntax_problem(root: &TSNode) -> Option<ParseCause> {
    if !root.has_error() {
        return None;
    }

    let mut stack = vec![*root];
    while let Some(node) = stack.pop() {
        let position = node.start_position();
        let (line, column) = (position.row + 1, position.column + 1);

        if node.is_missing() {
            return Some(ParseCause::Missing {
                expected: node.kind().to_string(),
                line,
                column,
            });
        }
        if node.is_error() {
            return Some(ParseCause::Syntax { line, column });
        }

        let mut cursor = node.walk();
        let children: Vec<TSNode> = node
            .children(&mut cursor)
            .filter(|child| child.has_error() || child.is_missing())
            .collect();
        stack.extend(children.into_iter().rev());
    }

    // has_error was set but no offending node was reachable
    let position = root.start_position();
    Some(ParseCause::Syntax {
        line: position.row + 1,
        column: position.column + 1,
    })
}

pub fn extract_text<'a>(node: &TSNode, source: &'a [u8]) -> &'a str {
    std::str::from_utf8(&source[node.byte_range()]).unwrap_or("")
}

/// Value of a string literal node with its quotes removed.
pub fn string_literal_value(node: &TSNode, source: &[u8]) -> String {
    let text = extract_text(node, source);
    let unquoted = ['"', '\'']
        .into_iter()
        .find_map(|quote| text.strip_prefix(quote)?.strip_suffix(quote))
        .unwrap_or(text);
    unquoted.to_string()
}

pub fn find_child_by_kind<'a>(node: &TSNode<'a>, kind: &str) -> Option<TSNode<'a>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|child| child.kind() == kind);
    found
}

pub fn has_child_kind(node: &TSNode, kind: &str) -> bool {
    find_child_by_kind(node, kind).is_some()
}
