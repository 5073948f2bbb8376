//! Top-level ES module declarations shared by the TypeScript and JavaScript
//! front-ends. Both grammars use the same node shapes for `import_statement`
//! and `export_statement`; JavaScript simply never produces the
//! interface or type-alias kinds.

use std::collections::HashMap;
use tree_sitter::Node as TSNode;

use super::common::{extract_text, find_child_by_kind, has_child_kind, string_literal_value};
use super::{ExportInfo, ExportKind, ImportInfo};

#[derive(Debug, Default)]
pub struct ModuleItems {
    pub exports: Vec<ExportInfo>,
    pub imports: Vec<ImportInfo>,
}

/// Walks the program's direct children and collects exported declarations
/// and import declarations in source order.
pub fn extract_module_items(root: &TSNode, source: &[u8]) -> ModuleItems {
    let locals = collect_local_declarations(root, source);
    let mut items = ModuleItems::default();

    let mut cursor = root.walk();
    for child in root.children(&mut cursor) {
        match child.kind() {
            "import_statement" => {
                if let Some(import) = process_import(&child, source) {
                    items.imports.push(import);
                }
            }
            "export_statement" => {
                process_export(&child, source, &locals, &mut items.exports);
            }
            _ => {}
        }
    }

    items
}

fn declaration_kind(kind: &str) -> Option<ExportKind> {
    match kind {
        "function_declaration" | "generator_function_declaration" | "function_signature" => {
            Some(ExportKind::Function)
        }
        "class_declaration" | "abstract_class_declaration" => Some(ExportKind::Class),
        "lexical_declaration" | "variable_declaration" => Some(ExportKind::Variable),
        "interface_declaration" => Some(ExportKind::Interface),
        "type_alias_declaration" => Some(ExportKind::Type),
        _ => None,
    }
}

/// `declare function f(): void` wraps the real declaration.
fn unwrap_ambient<'a>(node: TSNode<'a>) -> TSNode<'a> {
    if node.kind() != "ambient_declaration" {
        return node;
    }
    let mut cursor = node.walk();
    let inner = node
        .named_children(&mut cursor)
        .find(|child| declaration_kind(child.kind()).is_some());
    inner.unwrap_or(node)
}

/// Names bound by a declaration, one entry per binding.
fn declared_names(node: TSNode, source: &[u8]) -> Vec<(String, ExportKind)> {
    let node = unwrap_ambient(node);
    let Some(kind) = declaration_kind(node.kind()) else {
        return Vec::new();
    };

    if kind == ExportKind::Variable {
        let mut names = Vec::new();
        let mut cursor = node.walk();
        for declarator in node.named_children(&mut cursor) {
            if declarator.kind() != "variable_declarator" {
                continue;
            }
            // destructuring patterns bind elements, not declarations
            if let Some(name) = declarator.child_by_field_name("name") {
                if name.kind() == "identifier" {
                    names.push((extract_text(&name, source).to_string(), kind));
                }
            }
        }
        return names;
    }

    match node.child_by_field_name("name") {
        Some(name) => vec![(extract_text(&name, source).to_string(), kind)],
        None => Vec::new(),
    }
}

/// Every top-level declaration of the file, exported or not, by name.
fn collect_local_declarations(root: &TSNode, source: &[u8]) -> HashMap<String, Vec<ExportKind>> {
    let mut locals: HashMap<String, Vec<ExportKind>> = HashMap::new();
    let mut cursor = root.walk();

    for child in root.children(&mut cursor) {
        let declaration = if child.kind() == "export_statement" {
            if has_child_kind(&child, "default") {
                continue;
            }
            match child.child_by_field_name("declaration") {
                Some(declaration) => declaration,
                None => continue,
            }
        } else {
            child
        };

        for (name, kind) in declared_names(declaration, source) {
            locals.entry(name).or_default().push(kind);
        }
    }

    locals
}

fn process_export(
    export_node: &TSNode,
    source: &[u8],
    locals: &HashMap<String, Vec<ExportKind>>,
    exports: &mut Vec<ExportInfo>,
) {
    // re-exports (`export { a } from './a'`, `export * from`) are not declarations of this file
    if export_node.child_by_field_name("source").is_some() {
        return;
    }

    let is_default = has_child_kind(export_node, "default");

    if let Some(declaration) = export_node.child_by_field_name("declaration") {
        if is_default {
            if let Some(kind) = declaration_kind(unwrap_ambient(declaration).kind()) {
                exports.push(ExportInfo::new("default", kind));
            }
        } else {
            for (name, kind) in declared_names(declaration, source) {
                exports.push(ExportInfo::new(name, kind));
            }
        }
        return;
    }

    if let Some(value) = export_node.child_by_field_name("value") {
        match value.kind() {
            "function" | "function_expression" | "generator_function" => {
                exports.push(ExportInfo::new("default", ExportKind::Function));
            }
            "class" => exports.push(ExportInfo::new("default", ExportKind::Class)),
            "identifier" => {
                push_local(extract_text(&value, source), "default", locals, exports);
            }
            _ => {}
        }
        return;
    }

    if let Some(clause) = find_child_by_kind(export_node, "export_clause") {
        let mut cursor = clause.walk();
        for specifier in clause.named_children(&mut cursor) {
            if specifier.kind() != "export_specifier" {
                continue;
            }
            let Some(name) = specifier.child_by_field_name("name") else {
                continue;
            };
            let local = extract_text(&name, source);
            let exported = specifier
                .child_by_field_name("alias")
                .map(|alias| extract_text(&alias, source))
                .unwrap_or(local);
            push_local(local, exported, locals, exports);
        }
    }
}

fn push_local(
    local: &str,
    exported: &str,
    locals: &HashMap<String, Vec<ExportKind>>,
    exports: &mut Vec<ExportInfo>,
) {
    if let Some(kinds) = locals.get(local) {
        for &kind in kinds {
            exports.push(ExportInfo::new(exported, kind));
        }
    }
}

fn process_import(import_node: &TSNode, source: &[u8]) -> Option<ImportInfo> {
    // `import x = require('y')` carries its source on the require clause, not here
    let source_node = import_node.child_by_field_name("source")?;
    let module = string_literal_value(&source_node, source);

    let mut named = Vec::new();
    let mut default = None;
    let mut namespace = None;

    if let Some(clause) = find_child_by_kind(import_node, "import_clause") {
        let mut cursor = clause.walk();
        for part in clause.named_children(&mut cursor) {
            match part.kind() {
                "identifier" => default = Some(extract_text(&part, source).to_string()),
                "namespace_import" => {
                    if let Some(name) = find_child_by_kind(&part, "identifier") {
                        namespace = Some(format!("* as {}", extract_text(&name, source)));
                    }
                }
                "named_imports" => {
                    let mut spec_cursor = part.walk();
                    for specifier in part.named_children(&mut spec_cursor) {
                        if specifier.kind() != "import_specifier" {
                            continue;
                        }
                        let bound = specifier
                            .child_by_field_name("alias")
                            .or_else(|| specifier.child_by_field_name("name"));
                        if let Some(bound) = bound {
                            named.push(extract_text(&bound, source).to_string());
                        }
                    }
                }
                _ => {}
            }
        }
    }

    let specifiers = named.into_iter().chain(default).chain(namespace).collect();
    Some(ImportInfo {
        source: module,
        specifiers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_kinds_cover_the_five_export_shapes() {
        assert_eq!(
            declaration_kind("function_declaration"),
            Some(ExportKind::Function)
        );
        assert_eq!(declaration_kind("class_declaration"), Some(ExportKind::Class));
        assert_eq!(
            declaration_kind("lexical_declaration"),
            Some(ExportKind::Variable)
        );
        assert_eq!(
            declaration_kind("interface_declaration"),
            Some(ExportKind::Interface)
        );
        assert_eq!(
            declaration_kind("type_alias_declaration"),
            Some(ExportKind::Type)
        );
        assert_eq!(declaration_kind("enum_declaration"), None);
    }
}
