//! Grammar engine (parser) for propositional-logic formulas
//!
//! Hand-written recursive descent with one parse method per precedence tier:
//!
//! ```text
//! formula := bicond
//! bicond  := implies ( "<=>" implies )*
//! implies := or ( "=>" or )*
//! or      := and ( "o" and )*
//! and     := unary ( "^" unary )*
//! unary   := "~" unary | primary
//! primary := VAR | CONST | "(" bicond ")"
//! ```
//!
//! All four binary connectives are left-associative; `~` is a prefix
//! operator that binds tightest. A single token of lookahead decides every
//! step, so parsing never backtracks and runs in time linear in the token
//! count. Failure produces exactly one [`SyntaxError`] and no partial tree.

use crate::parser::ast::{AstNode, BinaryOp, UnaryOp};
use crate::parser::lexer::Token;
use std::fmt;

/// Parser error type
///
/// Either a token sat where the grammar did not allow one, or the token
/// stream ran out while an operand or closing parenthesis was still owed.
/// `expected` describes what the grammar wanted at that point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    UnexpectedToken {
        token: Token,
        expected: &'static str,
    },
    UnexpectedEnd {
        expected: &'static str,
        position: usize,
    },
}

impl SyntaxError {
    /// The 0-based offset the diagnostic points at: the offending token's
    /// start, or one past the end of the input.
    pub fn position(&self) -> usize {
        match self {
            SyntaxError::UnexpectedToken { token, .. } => token.position(),
            SyntaxError::UnexpectedEnd { position, .. } => *position,
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::UnexpectedToken { token, expected } => write!(
                f,
                "Syntax error at offset {}: expected {}, found {}",
                token.position(),
                expected,
                token
            ),
            SyntaxError::UnexpectedEnd { expected, position } => write!(
                f,
                "Syntax error at offset {}: expected {}, but the formula ended",
                position, expected
            ),
        }
    }
}

impl std::error::Error for SyntaxError {}

/// Recursive descent parser over a lexed token stream.
///
/// The parser owns its cursor, so every parse call is independent: two
/// parsers running on different threads never share state.
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse the whole token stream as one formula.
    ///
    /// The stream must contain exactly one formula: anything left over after
    /// the formula is a syntax error, as is an empty stream.
    pub fn parse(&mut self) -> Result<AstNode, SyntaxError> {
        let formula = self.parse_bicond()?;

        // A complete formula must consume every token
        if let Some(token) = self.peek() {
            return Err(SyntaxError::UnexpectedToken {
                token: token.clone(),
                expected: "end of formula",
            });
        }

        Ok(formula)
    }

    // ===== Precedence tiers, loosest binding first =====

    /// Parse biconditionals (<=>), the loosest-binding connective
    fn parse_bicond(&mut self) -> Result<AstNode, SyntaxError> {
        let mut left = self.parse_implies()?;

        while matches!(self.peek(), Some(Token::Bicond(_))) {
            self.advance();
            let right = self.parse_implies()?;
            left = AstNode::BinaryOp {
                op: BinaryOp::Bicond,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parse implications (=>)
    fn parse_implies(&mut self) -> Result<AstNode, SyntaxError> {
        let mut left = self.parse_or()?;

        while matches!(self.peek(), Some(Token::Implies(_))) {
            self.advance();
            let right = self.parse_or()?;
            left = AstNode::BinaryOp {
                op: BinaryOp::Implies,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parse disjunctions (o)
    fn parse_or(&mut self) -> Result<AstNode, SyntaxError> {
        let mut left = self.parse_and()?;

        while matches!(self.peek(), Some(Token::Or(_))) {
            self.advance();
            let right = self.parse_and()?;
            left = AstNode::BinaryOp {
                op: BinaryOp::Or,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parse conjunctions (^), the tightest-binding connective
    fn parse_and(&mut self) -> Result<AstNode, SyntaxError> {
        let mut left = self.parse_unary()?;

        while matches!(self.peek(), Some(Token::And(_))) {
            self.advance();
            let right = self.parse_unary()?;
            left = AstNode::BinaryOp {
                op: BinaryOp::And,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parse negation (~), which binds tighter than every connective
    fn parse_unary(&mut self) -> Result<AstNode, SyntaxError> {
        if matches!(self.peek(), Some(Token::Not(_))) {
            self.advance();
            let operand = self.parse_unary()?;
            return Ok(AstNode::UnaryOp {
                op: UnaryOp::Not,
                operand: Box::new(operand),
            });
        }

        self.parse_primary()
    }

    /// Parse an operand: a variable, a constant, or a parenthesized formula
    fn parse_primary(&mut self) -> Result<AstNode, SyntaxError> {
        match self.peek().cloned() {
            Some(Token::Var(letter, _)) => {
                self.advance();
                Ok(AstNode::Variable(letter))
            }
            Some(Token::Const(bit, _)) => {
                self.advance();
                Ok(AstNode::Constant(bit == '1'))
            }
            Some(Token::LParen(_)) => {
                self.advance();
                let formula = self.parse_bicond()?;
                self.expect_rparen()?;
                Ok(formula)
            }
            Some(token) => Err(SyntaxError::UnexpectedToken {
                token,
                expected: "an operand",
            }),
            None => Err(SyntaxError::UnexpectedEnd {
                expected: "an operand",
                position: self.end_position(),
            }),
        }
    }

    // ===== Helper methods =====

    fn expect_rparen(&mut self) -> Result<(), SyntaxError> {
        match self.peek().cloned() {
            Some(Token::RParen(_)) => {
                self.advance();
                Ok(())
            }
            Some(token) => Err(SyntaxError::UnexpectedToken {
                token,
                expected: "')'",
            }),
            None => Err(SyntaxError::UnexpectedEnd {
                expected: "')'",
                position: self.end_position(),
            }),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    /// Offset one past the final token, where an end-of-input diagnostic
    /// points. 0 for an empty stream.
    fn end_position(&self) -> usize {
        self.tokens.last().map(|t| t.end_position()).unwrap_or(0)
    }
}

/// Convenience function to parse a token stream directly.
pub fn parse(tokens: Vec<Token>) -> Result<AstNode, SyntaxError> {
    Parser::new(tokens).parse()
}
