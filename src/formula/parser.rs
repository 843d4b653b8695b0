/// Entry points of the recognizer.
///
/// Contains the `Formula` production and the top-level check that a formula
/// consumed the whole token sequence.
pub mod core;

/// Operator productions.
///
/// Recognizes the unary (`\neg`) and binary (`\wedge`, `\vee`,
/// `\rightarrow`, `\leftrightarrow`) connectives that follow an opening
/// parenthesis.
pub mod operator;

/// Helpers shared by the productions.
pub mod utils;
