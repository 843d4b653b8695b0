use std::{fs, path::Path};

use crate::{error::InputError, formula::verdict::Verdict, validate};

/// Splits the contents of a batch file into its formulas.
///
/// The first line must hold the number of formulas that follow, as a decimal
/// integer. Surrounding whitespace and a sign are accepted on that line. Each
/// remaining line is one formula, taken verbatim.
///
/// # Parameters
/// - `contents`: The whole text of a batch file.
///
/// # Returns
/// The formula lines, in input order.
///
/// # Errors
/// - [`InputError::EmptyFile`] if there is no line at all.
/// - [`InputError::InvalidHeader`] if the first line is not an integer.
/// - [`InputError::CountMismatch`] if the number of formula lines differs from
///   the declared count.
///
/// # Examples
/// ```
/// use wffcheck::batch::parse_batch;
///
/// assert_eq!(parse_batch("2\ntrue\n0\n").unwrap(), vec!["true", "0"]);
/// assert!(parse_batch("2\ntrue\n").is_err());
/// ```
pub fn parse_batch(contents: &str) -> Result<Vec<&str>, InputError> {
    let mut lines = contents.lines();

    let header = lines.next().ok_or(InputError::EmptyFile)?;
    let declared =
        header.trim()
              .parse::<i64>()
              .map_err(|_| InputError::InvalidHeader { header: header.to_string() })?;

    let formulas: Vec<&str> = lines.collect();
    if usize::try_from(declared).ok() != Some(formulas.len()) {
        return Err(InputError::CountMismatch { declared,
                                               found: formulas.len() });
    }

    Ok(formulas)
}

/// Reads a batch file and returns its formulas.
///
/// # Errors
/// Returns [`InputError::Io`] if the file cannot be read as UTF-8 text, or any
/// error of [`parse_batch`].
pub fn load_batch(path: impl AsRef<Path>) -> Result<Vec<String>, InputError> {
    let contents = fs::read_to_string(path)?;

    Ok(parse_batch(&contents)?.into_iter()
                              .map(str::to_string)
                              .collect())
}

/// Validates every formula of a batch, in order.
///
/// Formulas are independent of each other; a malformed formula never affects
/// the verdict of another one.
pub fn evaluate_batch<S: AsRef<str>>(formulas: &[S]) -> Vec<Verdict> {
    formulas.iter().map(|formula| validate(formula.as_ref())).collect()
}
