//! Lexer (tokenizer) for propositional-logic formulas
//!
//! Converts a raw formula string into a flat [`Token`] stream plus a list of
//! [`LexicalError`]s. Lexical errors are recoverable: the offending character
//! is recorded and skipped, and scanning continues, so a single bad character
//! never hides the rest of the formula.

use std::fmt;

/// All token variants produced by the lexer.
///
/// Every variant carries its 0-based start offset in the input so that
/// parse errors can report an accurate position without a separate
/// token→offset table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A propositional variable, one letter in `p..=z`.
    Var(char, usize),
    /// A truth constant, `0` or `1`.
    Const(char, usize),

    // Connectives
    Not(usize),     // ~
    And(usize),     // ^
    Or(usize),      // o
    Implies(usize), // =>
    Bicond(usize),  // <=>

    // Grouping
    LParen(usize), // (
    RParen(usize), // )
}

impl Token {
    /// Returns the 0-based offset where this token starts.
    pub fn position(&self) -> usize {
        match self {
            Token::Var(_, pos)
            | Token::Const(_, pos)
            | Token::Not(pos)
            | Token::And(pos)
            | Token::Or(pos)
            | Token::Implies(pos)
            | Token::Bicond(pos)
            | Token::LParen(pos)
            | Token::RParen(pos) => *pos,
        }
    }

    /// Returns the offset one past the last character of this token.
    pub fn end_position(&self) -> usize {
        self.position() + self.lexeme().len()
    }

    /// The exact text this token matched.
    pub fn lexeme(&self) -> String {
        match self {
            Token::Var(letter, _) => letter.to_string(),
            Token::Const(bit, _) => bit.to_string(),
            Token::Not(_) => "~".to_string(),
            Token::And(_) => "^".to_string(),
            Token::Or(_) => "o".to_string(),
            Token::Implies(_) => "=>".to_string(),
            Token::Bicond(_) => "<=>".to_string(),
            Token::LParen(_) => "(".to_string(),
            Token::RParen(_) => ")".to_string(),
        }
    }

    /// The token's kind as an uppercase name, for token-stream listings.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Var(_, _) => "VAR",
            Token::Const(_, _) => "CONST",
            Token::Not(_) => "NOT",
            Token::And(_) => "AND",
            Token::Or(_) => "OR",
            Token::Implies(_) => "IMPLIES",
            Token::Bicond(_) => "BICOND",
            Token::LParen(_) => "LPAREN",
            Token::RParen(_) => "RPAREN",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Var(letter, _) => write!(f, "variable '{}'", letter),
            Token::Const(bit, _) => write!(f, "constant '{}'", bit),
            Token::Not(_) => write!(f, "'~'"),
            Token::And(_) => write!(f, "'^'"),
            Token::Or(_) => write!(f, "'o'"),
            Token::Implies(_) => write!(f, "'=>'"),
            Token::Bicond(_) => write!(f, "'<=>'"),
            Token::LParen(_) => write!(f, "'('"),
            Token::RParen(_) => write!(f, "')'"),
        }
    }
}

/// A single character the lexer could not match against any token rule.
///
/// Non-fatal: the lexer records it and keeps scanning at the next character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexicalError {
    pub character: char,
    pub position: usize,
}

impl fmt::Display for LexicalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "illegal character '{}' at offset {}",
            self.character, self.position
        )
    }
}

impl std::error::Error for LexicalError {}

/// Lexer for propositional-logic formulas
///
/// The legal alphabet is `p`–`z` (variables), `0`/`1` (constants), the
/// connectives `~ ^ o => <=>`, parentheses, and space/tab (skipped).
/// `o` is the OR connective, which is why the variable range starts at `p`.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    /// Create a new lexer for the given formula string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Tokenize the entire input.
    ///
    /// Returns the tokens in input order together with every lexical error
    /// encountered, also in input order. The two lists are independent: a
    /// formula can produce both a full token stream and a non-empty error
    /// list.
    pub fn tokenize(&mut self) -> (Vec<Token>, Vec<LexicalError>) {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();

        while let Some(ch) = self.peek() {
            let pos = self.position;

            match ch {
                // Whitespace produces no token
                ' ' | '\t' => {
                    self.advance();
                }

                // Multi-character connectives; longest match wins, so a
                // lone '<' or '=' that does not complete one is illegal.
                '<' => {
                    if self.peek_ahead(1) == Some('=') && self.peek_ahead(2) == Some('>') {
                        self.advance();
                        self.advance();
                        self.advance();
                        tokens.push(Token::Bicond(pos));
                    } else {
                        errors.push(self.illegal(ch));
                    }
                }
                '=' => {
                    if self.peek_ahead(1) == Some('>') {
                        self.advance();
                        self.advance();
                        tokens.push(Token::Implies(pos));
                    } else {
                        errors.push(self.illegal(ch));
                    }
                }

                // Variables are p..z; 'o' sits just below the range and is
                // the OR connective instead.
                'p'..='z' => {
                    self.advance();
                    tokens.push(Token::Var(ch, pos));
                }
                '0' | '1' => {
                    self.advance();
                    tokens.push(Token::Const(ch, pos));
                }

                '~' => {
                    self.advance();
                    tokens.push(Token::Not(pos));
                }
                '^' => {
                    self.advance();
                    tokens.push(Token::And(pos));
                }
                'o' => {
                    self.advance();
                    tokens.push(Token::Or(pos));
                }
                '(' => {
                    self.advance();
                    tokens.push(Token::LParen(pos));
                }
                ')' => {
                    self.advance();
                    tokens.push(Token::RParen(pos));
                }

                // Anything else: record one error for this character and
                // keep scanning at the next one.
                _ => {
                    errors.push(self.illegal(ch));
                }
            }
        }

        (tokens, errors)
    }

    /// Record the current character as illegal and skip past it.
    fn illegal(&mut self, character: char) -> LexicalError {
        let position = self.position;
        self.advance();
        LexicalError {
            character,
            position,
        }
    }

    /// Peek at the current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Advance to the next character
    fn advance(&mut self) {
        if self.position < self.input.len() {
            self.position += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_tokens() {
        let mut lexer = Lexer::new("(p^q)");
        let (tokens, errors) = lexer.tokenize();

        assert!(errors.is_empty());
        assert_eq!(
            tokens,
            vec![
                Token::LParen(0),
                Token::Var('p', 1),
                Token::And(2),
                Token::Var('q', 3),
                Token::RParen(4),
            ]
        );
    }

    #[test]
    fn test_multi_char_connectives() {
        let mut lexer = Lexer::new("p=>q<=>r");
        let (tokens, errors) = lexer.tokenize();

        assert!(errors.is_empty());
        assert_eq!(
            tokens,
            vec![
                Token::Var('p', 0),
                Token::Implies(1),
                Token::Var('q', 3),
                Token::Bicond(4),
                Token::Var('r', 7),
            ]
        );
    }

    #[test]
    fn test_or_is_a_connective_not_a_variable() {
        let mut lexer = Lexer::new("qor");
        let (tokens, errors) = lexer.tokenize();

        assert!(errors.is_empty());
        assert!(matches!(tokens[0], Token::Var('q', 0)));
        assert!(matches!(tokens[1], Token::Or(1)));
        assert!(matches!(tokens[2], Token::Var('r', 2)));
    }

    #[test]
    fn test_whitespace_is_skipped() {
        let mut lexer = Lexer::new(" p \t o\tq ");
        let (tokens, errors) = lexer.tokenize();

        assert!(errors.is_empty());
        assert_eq!(
            tokens,
            vec![Token::Var('p', 1), Token::Or(5), Token::Var('q', 7)]
        );
    }

    #[test]
    fn test_illegal_character_recovery() {
        let mut lexer = Lexer::new("p#q");
        let (tokens, errors) = lexer.tokenize();

        // Tokenization continues past the bad character
        assert_eq!(tokens, vec![Token::Var('p', 0), Token::Var('q', 2)]);
        assert_eq!(
            errors,
            vec![LexicalError {
                character: '#',
                position: 1
            }]
        );
    }

    #[test]
    fn test_incomplete_bicond_is_two_errors() {
        let mut lexer = Lexer::new("p<=q");
        let (tokens, errors) = lexer.tokenize();

        // '<' does not start '<=>' here, and '=' is not followed by '>'
        assert_eq!(tokens, vec![Token::Var('p', 0), Token::Var('q', 3)]);
        assert_eq!(
            errors,
            vec![
                LexicalError {
                    character: '<',
                    position: 1
                },
                LexicalError {
                    character: '=',
                    position: 2
                },
            ]
        );
    }

    #[test]
    fn test_constants_and_prefix() {
        let mut lexer = Lexer::new("~0^1");
        let (tokens, errors) = lexer.tokenize();

        assert!(errors.is_empty());
        assert_eq!(
            tokens,
            vec![
                Token::Not(0),
                Token::Const('0', 1),
                Token::And(2),
                Token::Const('1', 3),
            ]
        );
    }

    #[test]
    fn test_letters_below_p_are_illegal() {
        let mut lexer = Lexer::new("a^b");
        let (tokens, errors) = lexer.tokenize();

        assert_eq!(tokens, vec![Token::And(1)]);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].character, 'a');
        assert_eq!(errors[1].character, 'b');
    }

    #[test]
    fn test_empty_input() {
        let mut lexer = Lexer::new("");
        let (tokens, errors) = lexer.tokenize();

        assert!(tokens.is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_lexeme_and_kind_name() {
        let mut lexer = Lexer::new("(p<=>1)");
        let (tokens, _) = lexer.tokenize();

        let listing: Vec<(&str, String)> = tokens
            .iter()
            .map(|t| (t.kind_name(), t.lexeme()))
            .collect();
        assert_eq!(
            listing,
            vec![
                ("LPAREN", "(".to_string()),
                ("VAR", "p".to_string()),
                ("BICOND", "<=>".to_string()),
                ("CONST", "1".to_string()),
                ("RPAREN", ")".to_string()),
            ]
        );
        assert_eq!(tokens[2].end_position(), 5);
    }
}
