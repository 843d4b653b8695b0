use std::iter::Peekable;

use crate::{error::GrammarError, formula::lexer::Token};

/// Builds the error reported when the lookahead does not fit a production.
///
/// # Parameters
/// - `found`: The lookahead token, or `None` at the end of the sequence.
/// - `expected`: Human readable description of what the grammar required.
pub(in crate::formula::parser) fn unexpected(found: Option<&Token>,
                                             expected: &'static str)
                                             -> GrammarError {
    match found {
        Some(token) => GrammarError::UnexpectedToken { found: token.clone(),
                                                       expected },
        None => GrammarError::UnexpectedEndOfInput { expected },
    }
}

/// Consumes exactly one required token.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the required token.
/// - `expected`: The token that must come next.
/// - `description`: How `expected` is named in the error.
///
/// # Errors
/// Returns a `GrammarError` if the next token differs from `expected` or the
/// sequence has ended. Nothing is consumed in that case.
pub(in crate::formula::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                expected: &Token,
                                                description: &'static str)
                                                -> Result<(), GrammarError>
    where I: Iterator<Item = &'a Token>
{
    if tokens.next_if(|tok| *tok == expected).is_some() {
        Ok(())
    } else {
        Err(unexpected(tokens.peek().copied(), description))
    }
}
