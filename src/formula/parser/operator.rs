use std::iter::Peekable;

use crate::formula::lexer::Token;

/// Parses the `UnaryOp` production.
///
/// Grammar: `UnaryOp ::= NOT`
///
/// # Returns
/// `true` if a `\neg` token was consumed, `false` otherwise. Nothing is
/// consumed when the production does not match.
pub(crate) fn parse_unary_operator<'a, I>(tokens: &mut Peekable<I>) -> bool
    where I: Iterator<Item = &'a Token>
{
    tokens.next_if(|tok| matches!(tok, Token::Not)).is_some()
}

/// Parses the `BinaryOp` production.
///
/// Grammar: `BinaryOp ::= AND | OR | IMPLIES | IFF`
///
/// # Returns
/// `true` if exactly one binary connective was consumed, `false` otherwise.
/// Nothing is consumed when the production does not match.
pub(crate) fn parse_binary_operator<'a, I>(tokens: &mut Peekable<I>) -> bool
    where I: Iterator<Item = &'a Token>
{
    tokens.next_if(|tok| is_binary_operator(tok)).is_some()
}

/// Whether `token` is one of the binary connectives.
#[must_use]
pub const fn is_binary_operator(token: &Token) -> bool {
    matches!(token, Token::And | Token::Or | Token::Implies | Token::Iff)
}
