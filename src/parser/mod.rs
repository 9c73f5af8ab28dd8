//! Propositional-logic formula parser
//!
//! This module transforms formula text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (formula text → tokens)
//! - [`parser`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//!
//! # Supported Language
//!
//! Formulas over the alphabet of the propositional calculus:
//! - Variables: single letters `p` through `z` (except `o`)
//! - Constants: `0` (false) and `1` (true)
//! - Connectives, tightest binding first: `~`, `^`, `o`, `=>`, `<=>`
//! - Grouping with `(` and `)`
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with one method per precedence
//! tier. No external parser generator dependencies.

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::{AstNode, BinaryOp, UnaryOp};
pub use lexer::{Lexer, LexicalError, Token};
pub use parser::{Parser, SyntaxError};

/// Everything the pipeline learns about one formula.
///
/// Tokenization always runs to the end of the input, so `tokens` and
/// `lexical_errors` are populated even when parsing fails. `result` holds
/// either the syntax tree or the first grammar diagnostic, never both.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub source: String,
    pub tokens: Vec<Token>,
    pub lexical_errors: Vec<LexicalError>,
    pub result: Result<AstNode, SyntaxError>,
}

impl Analysis {
    /// Run the full pipeline (lexer, then parser) on one formula.
    pub fn new(source: &str) -> Self {
        let (tokens, lexical_errors) = Lexer::new(source).tokenize();
        let result = Parser::new(tokens.clone()).parse();

        Self {
            source: source.to_string(),
            tokens,
            lexical_errors,
            result,
        }
    }

    /// A formula is valid when it parsed, even if the lexer had to skip
    /// illegal characters to get there.
    pub fn is_valid(&self) -> bool {
        self.result.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_of_valid_formula() {
        let analysis = Analysis::new("(p^q)");
        assert!(analysis.is_valid());
        assert!(analysis.lexical_errors.is_empty());
        assert_eq!(analysis.tokens.len(), 5);
        assert_eq!(analysis.result.expect("parse").to_string(), "(p^q)");
    }

    #[test]
    fn test_analysis_keeps_tokens_on_parse_failure() {
        let analysis = Analysis::new("(p^q");
        assert!(!analysis.is_valid());
        assert_eq!(analysis.tokens.len(), 4);
        assert!(analysis.lexical_errors.is_empty());
    }

    #[test]
    fn test_analysis_recovers_from_illegal_characters() {
        // The '#' is skipped, leaving "pq", which then fails to parse
        let analysis = Analysis::new("p#q");
        assert_eq!(analysis.lexical_errors.len(), 1);
        assert_eq!(analysis.tokens.len(), 2);
        assert!(!analysis.is_valid());
    }

    #[test]
    fn test_analysis_valid_despite_lexical_errors() {
        // Dropping the '*' leaves a parseable formula
        let analysis = Analysis::new("(*(p^(qor))os)");
        assert_eq!(analysis.lexical_errors.len(), 1);
        assert!(analysis.is_valid());
    }
}
