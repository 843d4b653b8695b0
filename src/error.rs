/// Formula errors.
///
/// Defines the failures that make a single formula malformed: lexical
/// failures detected by the tokenizer and grammatical failures detected by
/// the recognizer. Both are normal outcomes of validation, not faults.
pub mod formula_error;
/// Input errors.
///
/// Contains the errors that abort a whole batch before any formula is
/// checked, such as a missing file, an empty file, a malformed header or a
/// header that disagrees with the number of formulas.
pub mod input_error;

pub use formula_error::{FormulaError, GrammarError};
pub use input_error::InputError;
