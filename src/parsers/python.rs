//! Python parser using tree-sitter
//!
//! Parses source text into a syntax tree and runs the single counting
//! traversal over it. The traversal visits every node once, depth-first;
//! counts do not depend on visit order.

use crate::analyzer::AnalyzerError;
use crate::parsers::{NodeKind, StructureCounts};
use std::path::Path;
use tree_sitter::{Node, Parser};

/// Map a tree-sitter-python grammar kind onto the closed [`NodeKind`] set.
///
/// `elif` branches and conditional expressions (ternaries) count as `If`;
/// `except*` group handlers count as `Except`. Lambdas are not function
/// definitions and comprehension `for` clauses are not loops.
fn node_kind(grammar_kind: &str) -> NodeKind {
    match grammar_kind {
        "class_definition" => NodeKind::ClassDef,
        "function_definition" => NodeKind::FunctionDef,
        "if_statement" | "elif_clause" | "conditional_expression" => NodeKind::If,
        "for_statement" => NodeKind::For,
        "while_statement" => NodeKind::While,
        "except_clause" | "except_group_clause" => NodeKind::Except,
        "import_statement" | "import_from_statement" | "future_import_statement" => {
            NodeKind::Import
        }
        "boolean_operator" => NodeKind::BoolOp,
        _ => NodeKind::Other,
    }
}

/// Parse Python source and tally structure counts in one traversal.
///
/// Fails with [`AnalyzerError::Parse`] when the grammar cannot produce a
/// clean tree (tree-sitter flags syntax errors as ERROR/MISSING nodes
/// rather than failing outright).
pub fn count_structures(source: &str, path: &Path) -> Result<StructureCounts, AnalyzerError> {
    let mut parser = Parser::new();
    let language = tree_sitter_python::LANGUAGE;
    parser.set_language(&language.into())?;

    let tree = parser.parse(source, None).ok_or_else(|| AnalyzerError::Parse {
        path: path.to_path_buf(),
    })?;

    let root = tree.root_node();
    if root.has_error() {
        return Err(AnalyzerError::Parse {
            path: path.to_path_buf(),
        });
    }

    let mut counts = StructureCounts::default();
    walk(root, &mut counts);
    Ok(counts)
}

/// Depth-first traversal recording every node.
fn walk(node: Node, counts: &mut StructureCounts) {
    counts.record(node_kind(node.kind()));

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        walk(child, counts);
    }
}
