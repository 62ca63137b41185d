//! Element-wise evaluation of a normalized expression over the sampled domain.
use crate::errors::EvaluationFailure;
use crate::plotter::normalizer::NormalizedExpression;
use crate::symbolic::symbolic_engine::Expr;
use log::debug;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// What to do with samples where the expression is NaN or infinite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonFinitePolicy {
    /// any non-finite sample fails the expression
    #[default]
    Strict,
    /// only an expression that is non-finite everywhere fails; gaps are kept
    Lenient,
}

#[derive(Debug, Clone)]
pub struct ExpressionEvaluator {
    variable: String,
    policy: NonFinitePolicy,
}

impl Default for ExpressionEvaluator {
    fn default() -> Self {
        Self::new("x", NonFinitePolicy::default())
    }
}

impl ExpressionEvaluator {
    pub fn new(variable: impl Into<String>, policy: NonFinitePolicy) -> Self {
        Self {
            variable: variable.into(),
            policy,
        }
    }

    pub fn policy(&self) -> NonFinitePolicy {
        self.policy
    }

    /// `y[i] = f(x[i])`; the output always has the length of `x`.
    pub fn evaluate(
        &self,
        normalized: &NormalizedExpression,
        x: &Array1<f64>,
    ) -> Result<Array1<f64>, EvaluationFailure> {
        let expr = Expr::parse_expression(normalized.as_str())?;
        let f = expr.lambdify1D(&self.variable)?;
        let y = x.mapv(|xi| f(xi));

        let total = y.len();
        let count = y.iter().filter(|v| !v.is_finite()).count();
        let rejected = match self.policy {
            NonFinitePolicy::Strict => count > 0,
            NonFinitePolicy::Lenient => total > 0 && count == total,
        };
        if rejected {
            return Err(EvaluationFailure::NonFinite { count, total });
        }
        debug!("evaluated `{}` at {} points", expr, total);
        Ok(y)
    }
}
