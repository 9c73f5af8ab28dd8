//! Syntax tree export
//!
//! Flattens an AST into a [`GraphDescription`]: a list of labeled nodes and
//! a list of parent→child edges. Identifiers are assigned by a pre-order
//! walk of the tree, so the output depends only on the tree's shape, never
//! on allocation addresses or hashing order. Two structurally equal trees
//! always export to identical descriptions.
//!
//! [`GraphDescription::to_dot`] renders the description in Graphviz DOT
//! syntax. Writing the text to disk (or piping it to `dot`) is the
//! caller's business.

use crate::parser::AstNode;
use std::fmt::Write;

/// One vertex of the exported tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    /// Pre-order index of the node; the root is always 0
    pub id: usize,
    /// Display label: the connective symbol, variable letter, or constant
    pub label: String,
}

/// A directed parent→child edge between two exported nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphEdge {
    pub parent: usize,
    pub child: usize,
}

/// A syntax tree flattened into nodes and edges.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GraphDescription {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphDescription {
    /// Render the description as a Graphviz DOT digraph.
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph syntax_tree {\n");
        out.push_str("    node [shape=circle];\n");

        // Labels contain only formula alphabet characters, nothing that
        // needs escaping inside a DOT double-quoted string
        for node in &self.nodes {
            let _ = writeln!(out, "    n{} [label=\"{}\"];", node.id, node.label);
        }
        for edge in &self.edges {
            let _ = writeln!(out, "    n{} -> n{};", edge.parent, edge.child);
        }

        out.push_str("}\n");
        out
    }
}

/// Export a syntax tree as a flat graph description.
pub fn export(ast: &AstNode) -> GraphDescription {
    let mut graph = GraphDescription::default();
    visit(ast, None, &mut graph);
    graph
}

/// Pre-order walk: number the node, connect it to its parent, then descend
/// into the children left to right.
fn visit(node: &AstNode, parent: Option<usize>, graph: &mut GraphDescription) {
    let id = graph.nodes.len();
    graph.nodes.push(GraphNode {
        id,
        label: node.label(),
    });

    if let Some(parent) = parent {
        graph.edges.push(GraphEdge { parent, child: id });
    }

    match node {
        AstNode::Variable(_) | AstNode::Constant(_) => {}
        AstNode::UnaryOp { operand, .. } => {
            visit(operand, Some(id), graph);
        }
        AstNode::BinaryOp { left, right, .. } => {
            visit(left, Some(id), graph);
            visit(right, Some(id), graph);
        }
    }
}
