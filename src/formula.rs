/// The lexer module tokenizes formula text.
///
/// The lexer reads the raw text of one formula and produces the sequence of
/// tokens the recognizer consumes: connectives, parentheses, constants and
/// proposition identifiers. It is the first stage of validation, and a
/// lexical failure stops validation before the recognizer runs.
///
/// # Responsibilities
/// - Converts formula text into an immutable token sequence.
/// - Selects the longest matching spelling at every position.
/// - Reports text that matches no token.
pub mod lexer;
/// The parser module recognizes the formula grammar.
///
/// The parser is a predictive recursive-descent recognizer with a single
/// token of lookahead. It never backtracks and builds no tree; it only
/// decides whether the token sequence is exactly one formula.
///
/// # Responsibilities
/// - Implements the `Formula`, `UnaryOp` and `BinaryOp` productions.
/// - Requires full consumption of the token sequence.
/// - Reports the grammatical failure that stopped recognition.
pub mod parser;
/// The verdict reported for each formula.
pub mod verdict;
