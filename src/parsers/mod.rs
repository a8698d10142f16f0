//! Source code parsing using tree-sitter
//!
//! The grammar's stringly-typed node kinds are folded into a closed
//! [`NodeKind`] enumeration so the counting pass is a single exhaustive
//! match rather than scattered string comparisons.

pub mod python;

/// The node categories the analyzer cares about. Everything the grammar
/// produces that is not a definition, import, or decision point maps to
/// `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    ClassDef,
    FunctionDef,
    If,
    For,
    While,
    Except,
    Import,
    BoolOp,
    Other,
}

/// Tallies produced by one depth-first traversal of a parsed tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StructureCounts {
    pub classes: usize,
    pub functions: usize,
    pub imports: usize,
    /// If + For + While + Except + BoolOp nodes
    pub decision_points: usize,
}

impl StructureCounts {
    /// Fold one node into the tally. Exhaustive over [`NodeKind`] so a new
    /// category cannot be added without deciding how it counts.
    pub fn record(&mut self, kind: NodeKind) {
        match kind {
            NodeKind::ClassDef => self.classes += 1,
            NodeKind::FunctionDef => self.functions += 1,
            NodeKind::Import => self.imports += 1,
            NodeKind::If | NodeKind::For | NodeKind::While | NodeKind::Except | NodeKind::BoolOp => {
                self.decision_points += 1
            }
            NodeKind::Other => {}
        }
    }
}
