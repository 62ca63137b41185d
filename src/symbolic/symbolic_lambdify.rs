use crate::errors::EvaluationFailure;
use crate::symbolic::symbolic_engine::Expr;
use std::f64::consts::PI;

/// Compiled function of the single domain variable.
pub type Lambdified1D = Box<dyn Fn(f64) -> f64 + Send + Sync>;

impl Expr {
    /// LAMBDIFICATION - Converting Symbolic Expressions to Executable Functions

    /// Converts the expression into a closure of the variable `var`.
    ///
    /// Every variable in the tree must be `var`; the first other name found is reported
    /// as an unknown symbol, so the closure itself never has to look anything up.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let f = Expr::parse_expression("x^2")?.lambdify1D("x")?;
    /// assert_eq!(f(3.0), 9.0);
    /// ```
    pub fn lambdify1D(&self, var: &str) -> Result<Lambdified1D, EvaluationFailure> {
        if let Some(unknown) = self
            .all_arguments_are_variables()
            .into_iter()
            .find(|name| name != var)
        {
            return Err(EvaluationFailure::UnknownSymbol { symbol: unknown });
        }
        Ok(self.compile1D())
    }

    fn compile1D(&self) -> Lambdified1D {
        match self {
            Expr::Var(_) => Box::new(|x| x),
            Expr::Const(val) => {
                let val = *val;
                Box::new(move |_| val)
            }
            Expr::Add(lhs, rhs) => {
                let lf = lhs.compile1D();
                let rf = rhs.compile1D();
                Box::new(move |x| lf(x) + rf(x))
            }
            Expr::Sub(lhs, rhs) => {
                let lf = lhs.compile1D();
                let rf = rhs.compile1D();
                Box::new(move |x| lf(x) - rf(x))
            }
            Expr::Mul(lhs, rhs) => {
                let lf = lhs.compile1D();
                let rf = rhs.compile1D();
                Box::new(move |x| lf(x) * rf(x))
            }
            Expr::Div(lhs, rhs) => {
                let lf = lhs.compile1D();
                let rf = rhs.compile1D();
                Box::new(move |x| lf(x) / rf(x))
            }
            Expr::Pow(b, e) => {
                let bf = b.compile1D();
                let ef = e.compile1D();
                Box::new(move |x| bf(x).powf(ef(x)))
            }
            Expr::Exp(e) => {
                let f = e.compile1D();
                Box::new(move |x| f(x).exp())
            }
            Expr::Ln(e) => {
                let f = e.compile1D();
                Box::new(move |x| f(x).ln())
            }
            Expr::lg(e) => {
                let f = e.compile1D();
                Box::new(move |x| f(x).log10())
            }
            Expr::sqrt(e) => {
                let f = e.compile1D();
                Box::new(move |x| f(x).sqrt())
            }
            Expr::abs(e) => {
                let f = e.compile1D();
                Box::new(move |x| f(x).abs())
            }
            Expr::sin(e) => {
                let f = e.compile1D();
                Box::new(move |x| f(x).sin())
            }
            Expr::cos(e) => {
                let f = e.compile1D();
                Box::new(move |x| f(x).cos())
            }
            Expr::tg(e) => {
                let f = e.compile1D();
                Box::new(move |x| f(x).tan())
            }
            Expr::ctg(e) => {
                let f = e.compile1D();
                Box::new(move |x| 1.0 / f(x).tan())
            }
            Expr::arcsin(e) => {
                let f = e.compile1D();
                Box::new(move |x| f(x).asin())
            }
            Expr::arccos(e) => {
                let f = e.compile1D();
                Box::new(move |x| f(x).acos())
            }
            Expr::arctg(e) => {
                let f = e.compile1D();
                Box::new(move |x| f(x).atan())
            }
            Expr::arcctg(e) => {
                let f = e.compile1D();
                Box::new(move |x| PI / 2.0 - f(x).atan())
            }
            Expr::sinh(e) => {
                let f = e.compile1D();
                Box::new(move |x| f(x).sinh())
            }
            Expr::cosh(e) => {
                let f = e.compile1D();
                Box::new(move |x| f(x).cosh())
            }
            Expr::tanh(e) => {
                let f = e.compile1D();
                Box::new(move |x| f(x).tanh())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn lambdify(input: &str) -> Lambdified1D {
        Expr::parse_expression(input)
            .unwrap()
            .lambdify1D("x")
            .unwrap()
    }

    #[test]
    fn test_lambdify_polynomial() {
        let f = lambdify("x^2 - 2*x + 1");
        assert_relative_eq!(f(3.0), 4.0);
        assert_relative_eq!(f(1.0), 0.0);
    }

    #[test]
    fn test_lambdify_transcendental() {
        let f = lambdify("exp(x) + log(x) + sin(x)");
        assert_relative_eq!(f(1.0), 1f64.exp() + 1f64.sin(), epsilon = 1e-12);
        let g = lambdify("lg(x) + sqrt(x) + abs(-x)");
        assert_relative_eq!(g(100.0), 2.0 + 10.0 + 100.0, epsilon = 1e-12);
    }

    #[test]
    fn test_lambdify_inverse_trig() {
        let f = lambdify("arcctg(x) + arctg(x)");
        assert_relative_eq!(f(0.7), PI / 2.0, epsilon = 1e-12);
        let g = lambdify("ctg(x) * tg(x)");
        assert_relative_eq!(g(0.3), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_lambdify_constant_ignores_argument() {
        let f = lambdify("2 + 3");
        assert_relative_eq!(f(-7.0), 5.0);
        assert_relative_eq!(f(0.0), 5.0);
    }

    #[test]
    fn test_unknown_symbol_is_reported() {
        let expr = Expr::parse_expression("x + y").unwrap();
        match expr.lambdify1D("x") {
            Err(EvaluationFailure::UnknownSymbol { symbol }) => assert_eq!(symbol, "y"),
            Err(other) => panic!("unexpected error {other}"),
            Ok(_) => panic!("y must not be accepted"),
        }
    }
}
