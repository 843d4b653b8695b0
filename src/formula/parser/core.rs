use std::iter::Peekable;

use crate::{
    error::GrammarError,
    formula::{
        lexer::Token,
        parser::{
            operator::{parse_binary_operator, parse_unary_operator},
            utils::{expect, unexpected},
        },
    },
};

pub type ParseResult<T> = Result<T, GrammarError>;

/// Decides whether a token sequence is exactly one formula.
///
/// This is the entry point of the recognizer. It parses one `Formula` and
/// then requires that every token has been consumed; a valid formula
/// followed by anything else is rejected.
///
/// # Parameters
/// - `tokens`: The complete token sequence of one formula.
///
/// # Errors
/// Returns the first `GrammarError` met, or
/// [`GrammarError::TrailingTokens`] if tokens remain after the formula.
///
/// # Examples
/// ```
/// use wffcheck::formula::{lexer::tokenize, parser::core::recognize};
///
/// assert!(recognize(&tokenize(r"(\vee 0 (\neg 1))").unwrap()).is_ok());
/// assert!(recognize(&tokenize("0 0").unwrap()).is_err());
/// ```
pub fn recognize(tokens: &[Token]) -> ParseResult<()> {
    let mut iter = tokens.iter().peekable();

    parse_formula(&mut iter)?;

    match iter.next() {
        Some(token) => Err(GrammarError::TrailingTokens { token: token.clone() }),
        None => Ok(()),
    }
}

/// Parses a single formula.
///
/// One token of lookahead selects the production. A constant or identifier
/// is a complete formula by itself; an opening parenthesis starts a compound
/// formula.
///
/// Grammar:
/// ```text
///     Formula := TRUE | FALSE | ID
///              | "(" UnaryOp Formula ")"
///              | "(" BinaryOp Formula Formula ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a formula.
///
/// # Errors
/// Returns a `GrammarError` if the lookahead starts no production or any
/// nested production fails.
pub fn parse_formula<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a Token>
{
    if tokens.next_if(|tok| tok.is_atom()).is_some() {
        return Ok(());
    }

    if tokens.next_if(|tok| matches!(tok, Token::LParen)).is_some() {
        return parse_compound(tokens);
    }

    Err(unexpected(tokens.peek().copied(), "a formula"))
}

/// Parses the remainder of a compound formula after its `(`.
///
/// The connective decides the arity: a unary connective takes one operand, a
/// binary connective takes exactly two. The closing `)` is required in both
/// cases.
///
/// # Errors
/// Returns a `GrammarError` if no connective follows the parenthesis, an
/// operand fails to parse, or the closing parenthesis is missing.
fn parse_compound<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a Token>
{
    if parse_unary_operator(tokens) {
        parse_formula(tokens)?;
    } else if parse_binary_operator(tokens) {
        parse_formula(tokens)?;
        parse_formula(tokens)?;
    } else {
        return Err(unexpected(tokens.peek().copied(), "a connective"));
    }

    expect(tokens, &Token::RParen, "')'")
}
