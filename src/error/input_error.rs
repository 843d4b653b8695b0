use std::io;

use thiserror::Error;

/// Represents the errors that abort a batch as a whole.
///
/// When any of these occurs no formula of the batch is validated.
#[derive(Debug, Error)]
pub enum InputError {
    /// The batch file could not be opened or read.
    #[error("{0}")]
    Io(#[from] io::Error),
    /// The batch file has no lines at all.
    #[error("O arquivo está vazio.")]
    EmptyFile,
    /// The first line is not a decimal integer.
    #[error("A primeira linha do arquivo deve conter um número inteiro.")]
    InvalidHeader {
        /// The offending first line.
        header: String,
    },
    /// The header disagrees with the number of formula lines.
    #[error("Número de expressões ({found}) não corresponde ao indicado ({declared}).")]
    CountMismatch {
        /// The count declared on the first line.
        declared: i64,
        /// The number of formula lines actually present.
        found:    usize,
    },
}
