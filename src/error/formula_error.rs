use thiserror::Error;

use crate::formula::lexer::Token;

/// Represents every reason a single formula can be rejected.
///
/// Lexical and grammatical failures stay separate so callers can tell them
/// apart, even though both produce the same verdict.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    /// The tokenizer found text that is neither a literal nor an identifier.
    #[error("Lexical error: unrecognized text '{text}'.")]
    Lexical {
        /// The unrecognized slice of the formula.
        text: String,
    },
    /// The token sequence is not derivable from `Formula`.
    #[error("Syntax error: {0}")]
    Grammar(#[from] GrammarError),
}

impl FormulaError {
    /// Whether the failure was detected by the tokenizer.
    #[must_use]
    pub const fn is_lexical(&self) -> bool {
        matches!(self, Self::Lexical { .. })
    }
}

/// Represents the grammatical failures reported by the recognizer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// Found a token that no production accepts at this point.
    #[error("expected {expected}, found '{found}'.")]
    UnexpectedToken {
        /// The token encountered.
        found:    Token,
        /// What the grammar required instead.
        expected: &'static str,
    },
    /// The token sequence ended while a production was still open.
    #[error("expected {expected}, found end of input.")]
    UnexpectedEndOfInput {
        /// What the grammar required instead.
        expected: &'static str,
    },
    /// A complete formula was recognized but tokens remain.
    #[error("extra tokens after formula, starting at '{token}'.")]
    TrailingTokens {
        /// The first unconsumed token.
        token: Token,
    },
}
