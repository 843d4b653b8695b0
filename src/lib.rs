//! # wffcheck
//!
//! wffcheck decides whether propositional-logic formulas are well formed.
//! Formulas are written in fully parenthesized prefix notation with
//! LaTeX-style connectives, for example `(\wedge 0 (\neg 1a))`.
//!
//! Each formula is tokenized and then recognized by a predictive
//! recursive-descent parser with a single token of lookahead. The outcome is
//! a [`Verdict`]: well formed or malformed.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::path::Path;

use crate::{
    error::{FormulaError, InputError},
    formula::{lexer::tokenize, parser::core::recognize},
};
pub use crate::formula::verdict::Verdict;

/// Reads batch files and validates their formulas.
///
/// A batch file declares on its first line how many formulas follow, then
/// holds one formula per line. This module checks that layout and runs the
/// validator over every formula in order.
///
/// # Responsibilities
/// - Reads batch files from disk.
/// - Validates the count header against the formula lines.
/// - Produces one verdict per formula, in input order.
pub mod batch;
/// Provides the error types for formulas and batch input.
///
/// Formula errors describe why a single formula is malformed and never abort
/// a batch. Input errors describe why a batch file cannot be processed at
/// all.
///
/// # Responsibilities
/// - Keeps lexical and grammatical failures as distinct signals.
/// - Carries human readable messages for file-level failures.
pub mod error;
/// Tokenizes and recognizes single formulas.
///
/// This module ties together the lexer, the recognizer and the verdict type.
/// Tokenization always runs first; the recognizer only sees token sequences
/// that were scanned completely.
pub mod formula;

/// Checks a single formula and reports why it is malformed.
///
/// The formula is tokenized first. A lexical failure is returned immediately
/// without running the recognizer. Otherwise the token sequence must be
/// exactly one formula.
///
/// # Errors
/// Returns [`FormulaError::Lexical`] for unrecognized text and
/// [`FormulaError::Grammar`] when the tokens do not form one formula.
///
/// # Examples
/// ```
/// use wffcheck::check;
///
/// assert!(check(r"(\rightarrow true (\neg 2xy))").is_ok());
///
/// let err = check("(\\neg p)").unwrap_err();
/// assert!(err.is_lexical());
///
/// let err = check(r"(\neg 0").unwrap_err();
/// assert!(!err.is_lexical());
/// ```
pub fn check(source: &str) -> Result<(), FormulaError> {
    let tokens = tokenize(source)?;
    recognize(&tokens)?;

    Ok(())
}

/// Returns the verdict for a single formula.
///
/// # Examples
/// ```
/// use wffcheck::{Verdict, validate};
///
/// assert_eq!(validate("0"), Verdict::Valid);
/// assert_eq!(validate("0 1"), Verdict::Invalid);
/// ```
#[must_use]
pub fn validate(source: &str) -> Verdict {
    Verdict::from(&check(source))
}

/// Reads a batch file and returns the verdict of each of its formulas.
///
/// # Errors
/// Returns an [`InputError`] if the file cannot be read or its layout is
/// wrong. No formula is validated in that case.
pub fn validate_file(path: impl AsRef<Path>) -> Result<Vec<Verdict>, InputError> {
    let formulas = batch::load_batch(path)?;

    Ok(batch::evaluate_batch(&formulas))
}
