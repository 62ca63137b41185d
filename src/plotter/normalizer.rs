//! Rewrites user text into an expression that always depends on the domain variable.
use crate::symbolic::utils::brackets_balanced;
use std::fmt;

/// Expression text guaranteed to mention the domain variable (unless the raw text was
/// malformed, in which case it is passed through for the evaluator to reject).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedExpression(String);

impl NormalizedExpression {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct ExpressionNormalizer {
    variable: String,
}

impl Default for ExpressionNormalizer {
    fn default() -> Self {
        Self::new("x")
    }
}

impl ExpressionNormalizer {
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
        }
    }

    /// Text mentioning the variable is kept as is. A constant `c` becomes `(0*x + 1)*(c)`:
    /// equal to `c` for every finite `x`, including 0, and never divides by `x`.
    pub fn normalize(&self, raw: &str) -> NormalizedExpression {
        if raw.contains(self.variable.as_str()) || !brackets_balanced(raw) {
            return NormalizedExpression(raw.to_string());
        }
        NormalizedExpression(format!("(0*{v} + 1)*({raw})", v = self.variable))
    }
}
