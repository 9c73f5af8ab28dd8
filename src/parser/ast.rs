// AST (Abstract Syntax Tree) definitions for parsed propositional formulas

use std::fmt;

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not, // ~x
}

impl UnaryOp {
    /// The operator's literal symbol as it appears in a formula.
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOp::Not => "~",
        }
    }
}

/// Binary connectives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    And,     // x^y
    Or,      // x o y
    Implies, // x=>y
    Bicond,  // x<=>y
}

impl BinaryOp {
    /// The connective's literal symbol as it appears in a formula.
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::And => "^",
            BinaryOp::Or => "o",
            BinaryOp::Implies => "=>",
            BinaryOp::Bicond => "<=>",
        }
    }
}

/// AST nodes representing formulas.
///
/// Arity is fixed by the variant shape: leaves have no children, `UnaryOp`
/// has exactly one, `BinaryOp` exactly two (ordered). There is no way to
/// build a node that violates this. Nodes own their children, so every AST
/// is a finite tree with a single root and no sharing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstNode {
    /// A propositional variable (`p`..`z`).
    Variable(char),
    /// A truth constant; `true` is the literal `1`, `false` the literal `0`.
    Constant(bool),
    UnaryOp {
        op: UnaryOp,
        operand: Box<AstNode>,
    },
    BinaryOp {
        op: BinaryOp,
        left: Box<AstNode>,
        right: Box<AstNode>,
    },
}

impl AstNode {
    /// The node's display label: the operator symbol for operator nodes,
    /// the literal letter or bit for leaves.
    pub fn label(&self) -> String {
        match self {
            AstNode::Variable(letter) => letter.to_string(),
            AstNode::Constant(true) => "1".to_string(),
            AstNode::Constant(false) => "0".to_string(),
            AstNode::UnaryOp { op, .. } => op.symbol().to_string(),
            AstNode::BinaryOp { op, .. } => op.symbol().to_string(),
        }
    }
}

/// Canonical fully-parenthesized form: every binary application is wrapped
/// in parentheses, so re-parsing the output reconstructs exactly this tree.
impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstNode::Variable(letter) => write!(f, "{}", letter),
            AstNode::Constant(bit) => write!(f, "{}", if *bit { '1' } else { '0' }),
            AstNode::UnaryOp { op, operand } => write!(f, "{}{}", op.symbol(), operand),
            AstNode::BinaryOp { op, left, right } => {
                write!(f, "({}{}{})", left, op.symbol(), right)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_display() {
        assert_eq!(AstNode::Variable('p').to_string(), "p");
        assert_eq!(AstNode::Constant(false).to_string(), "0");
        assert_eq!(AstNode::Constant(true).to_string(), "1");
    }

    #[test]
    fn test_canonical_parenthesization() {
        // ~p ^ q, already grouped the way the parser groups it
        let node = AstNode::BinaryOp {
            op: BinaryOp::And,
            left: Box::new(AstNode::UnaryOp {
                op: UnaryOp::Not,
                operand: Box::new(AstNode::Variable('p')),
            }),
            right: Box::new(AstNode::Variable('q')),
        };
        assert_eq!(node.to_string(), "(~p^q)");
    }

    #[test]
    fn test_nested_display_uses_connective_symbols() {
        let node = AstNode::BinaryOp {
            op: BinaryOp::Bicond,
            left: Box::new(AstNode::BinaryOp {
                op: BinaryOp::Implies,
                left: Box::new(AstNode::Variable('p')),
                right: Box::new(AstNode::Variable('q')),
            }),
            right: Box::new(AstNode::Constant(true)),
        };
        assert_eq!(node.to_string(), "((p=>q)<=>1)");
    }

    #[test]
    fn test_labels() {
        assert_eq!(AstNode::Variable('z').label(), "z");
        assert_eq!(AstNode::Constant(false).label(), "0");
        let not = AstNode::UnaryOp {
            op: UnaryOp::Not,
            operand: Box::new(AstNode::Variable('p')),
        };
        assert_eq!(not.label(), "~");
        let or = AstNode::BinaryOp {
            op: BinaryOp::Or,
            left: Box::new(AstNode::Variable('p')),
            right: Box::new(AstNode::Variable('q')),
        };
        assert_eq!(or.label(), "o");
    }
}
