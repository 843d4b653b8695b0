use std::fmt;

use logos::Logos;

use crate::error::FormulaError;

/// Represents a lexical token of a formula.
///
/// Every token is a pair of a kind (the variant) and the literal text it was
/// scanned from, available through [`Token::text`]. Operators and constants
/// always have the same spelling; identifiers carry their own text.
///
/// The lexer always prefers the longest spelling that matches at the current
/// position, so a literal is never shadowed by a shorter one sharing its
/// prefix.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// `\neg`
    #[token(r"\neg")]
    Not,
    /// `\wedge`
    #[token(r"\wedge")]
    And,
    /// `\vee`
    #[token(r"\vee")]
    Or,
    /// `\rightarrow`
    #[token(r"\rightarrow")]
    Implies,
    /// `\leftrightarrow`
    #[token(r"\leftrightarrow")]
    Iff,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// Proposition identifiers such as `0`, `1a` or `2xy`.
    ///
    /// An identifier starts with a digit, so it can never collide with
    /// `true` or `false`.
    #[regex(r"[0-9][0-9a-z]*", |lex| lex.slice().to_string())]
    Id(String),
    /// Whitespace between tokens.
    #[regex(r"\s+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns the literal text this token was scanned from.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Not => r"\neg",
            Self::And => r"\wedge",
            Self::Or => r"\vee",
            Self::Implies => r"\rightarrow",
            Self::Iff => r"\leftrightarrow",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::True => "true",
            Self::False => "false",
            Self::Id(name) => name,
            Self::Ignored => " ",
        }
    }

    /// Whether the token is a complete formula on its own.
    #[must_use]
    pub const fn is_atom(&self) -> bool {
        matches!(self, Self::True | Self::False | Self::Id(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Converts a formula into its token sequence.
///
/// Whitespace is skipped. An empty or blank formula yields an empty sequence,
/// which the parser later rejects.
///
/// # Errors
/// Returns [`FormulaError::Lexical`] with the unrecognized slice as soon as a
/// position matches neither a literal nor an identifier. No partial sequence
/// is returned.
///
/// # Examples
/// ```
/// use wffcheck::formula::lexer::{Token, tokenize};
///
/// let tokens = tokenize(r"(\neg 1a)").unwrap();
/// assert_eq!(tokens,
///            vec![Token::LParen, Token::Not, Token::Id("1a".to_string()), Token::RParen]);
///
/// assert!(tokenize("(\\neg p)").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, FormulaError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push(tok);
        } else {
            return Err(FormulaError::Lexical { text: lexer.slice().to_string() });
        }
    }

    Ok(tokens)
}
