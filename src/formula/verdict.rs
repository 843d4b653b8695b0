use std::fmt;

use crate::error::FormulaError;

/// The outcome of validating one formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The formula is well formed.
    Valid,
    /// The formula is lexically or grammatically malformed.
    Invalid,
}

impl Verdict {
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl From<bool> for Verdict {
    fn from(valid: bool) -> Self {
        if valid { Self::Valid } else { Self::Invalid }
    }
}

impl From<&Result<(), FormulaError>> for Verdict {
    fn from(result: &Result<(), FormulaError>) -> Self {
        Self::from(result.is_ok())
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => f.write_str("valida"),
            Self::Invalid => f.write_str("inválida"),
        }
    }
}
