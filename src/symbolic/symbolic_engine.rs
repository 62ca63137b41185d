//! # Symbolic Engine Module
//!
//! Core expression tree of the plotter. A line typed by the user is parsed into an
//! [`Expr`], checked against the single domain variable and turned into a closure
//! (see `symbolic_lambdify`) that is mapped over the sampled domain.
//!
//! ## Main Structures and Methods
//!
//! ### `Expr` Enum
//! - **Variables**: `Var(String)` - the domain variable (any other name is rejected on evaluation)
//! - **Constants**: `Const(f64)` - numerical constants, `pi` and `e` are parsed into constants
//! - **Operations**: `Add`, `Sub`, `Mul`, `Div`, `Pow` - basic arithmetic
//! - **Functions**: `Exp`, `Ln`, `lg`, `sqrt`, `abs`, `sin`, `cos`, `tg`, ... - one-argument functions
//!
//! ### Key Methods
//! - `parse_expression(input)` - text into expression tree
//! - `all_arguments_are_variables()` - names of all variables in the tree
//!
//! Trigonometric functions keep the mathematical notation (tg, ctg, arctg, arcctg).

#![allow(non_camel_case_types)]

use crate::symbolic::parse_expr::{ParseError, parse_expression_func};
use std::fmt;

/// Expression tree. `Box<Expr>` for recursive structures.
///
/// # Examples
/// ```rust, ignore
/// let x = Expr::Var("x".to_string());
/// let expr = Expr::Add(Box::new(x), Box::new(Expr::Const(2.0)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Symbolic variable with a name
    Var(String),
    /// Numerical constant value
    Const(f64),
    /// left + right
    Add(Box<Expr>, Box<Expr>),
    /// left - right
    Sub(Box<Expr>, Box<Expr>),
    /// left * right
    Mul(Box<Expr>, Box<Expr>),
    /// left / right
    Div(Box<Expr>, Box<Expr>),
    /// base ^ exponent
    Pow(Box<Expr>, Box<Expr>),
    /// e^x
    Exp(Box<Expr>),
    /// natural logarithm
    Ln(Box<Expr>),
    /// decimal logarithm
    lg(Box<Expr>),
    sqrt(Box<Expr>),
    abs(Box<Expr>),
    sin(Box<Expr>),
    cos(Box<Expr>),
    /// tangent, mathematical notation 'tg'
    tg(Box<Expr>),
    /// cotangent, mathematical notation 'ctg'
    ctg(Box<Expr>),
    arcsin(Box<Expr>),
    arccos(Box<Expr>),
    /// arctangent, mathematical notation 'arctg'
    arctg(Box<Expr>),
    /// arccotangent, mathematical notation 'arcctg'
    arcctg(Box<Expr>),
    sinh(Box<Expr>),
    cosh(Box<Expr>),
    tanh(Box<Expr>),
}

/// Pretty printing with explicit parentheses for every binary operation.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Const(val) => write!(f, "{}", val),
            Expr::Add(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Expr::Sub(lhs, rhs) => write!(f, "({} - {})", lhs, rhs),
            Expr::Mul(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
            Expr::Div(lhs, rhs) => write!(f, "({} / {})", lhs, rhs),
            Expr::Pow(base, exp) => write!(f, "({} ^ {})", base, exp),
            Expr::Exp(expr) => write!(f, "exp({})", expr),
            Expr::Ln(expr) => write!(f, "ln({})", expr),
            Expr::lg(expr) => write!(f, "lg({})", expr),
            Expr::sqrt(expr) => write!(f, "sqrt({})", expr),
            Expr::abs(expr) => write!(f, "abs({})", expr),
            Expr::sin(expr) => write!(f, "sin({})", expr),
            Expr::cos(expr) => write!(f, "cos({})", expr),
            Expr::tg(expr) => write!(f, "tg({})", expr),
            Expr::ctg(expr) => write!(f, "ctg({})", expr),
            Expr::arcsin(expr) => write!(f, "arcsin({})", expr),
            Expr::arccos(expr) => write!(f, "arccos({})", expr),
            Expr::arctg(expr) => write!(f, "arctg({})", expr),
            Expr::arcctg(expr) => write!(f, "arcctg({})", expr),
            Expr::sinh(expr) => write!(f, "sinh({})", expr),
            Expr::cosh(expr) => write!(f, "cosh({})", expr),
            Expr::tanh(expr) => write!(f, "tanh({})", expr),
        }
    }
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::Add(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::Sub(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Mul(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::Div(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expr::Mul(Box::new(Expr::Const(-1.0)), Box::new(self))
    }
}

impl Expr {
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    pub fn pow(self, rhs: Expr) -> Expr {
        Expr::Pow(self.boxed(), rhs.boxed())
    }

    /// Parses a string into an expression tree.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let f = Expr::parse_expression("sin(x) + x^2")?;
    /// ```
    pub fn parse_expression(input: &str) -> Result<Expr, ParseError> {
        parse_expression_func(input)
    }

    /// Wraps a one-argument function by its name as written by the user.
    /// Returns `None` for names that are not functions.
    pub fn function_by_name(name: &str, argument: Expr) -> Option<Expr> {
        let arg = argument.boxed();
        let expr = match name {
            "exp" => Expr::Exp(arg),
            "log" | "ln" => Expr::Ln(arg),
            "log10" | "lg" => Expr::lg(arg),
            "sqrt" => Expr::sqrt(arg),
            "abs" => Expr::abs(arg),
            "sin" => Expr::sin(arg),
            "cos" => Expr::cos(arg),
            "tan" | "tg" => Expr::tg(arg),
            "cot" | "ctg" => Expr::ctg(arg),
            "arcsin" | "asin" => Expr::arcsin(arg),
            "arccos" | "acos" => Expr::arccos(arg),
            "arctan" | "atan" | "arctg" => Expr::arctg(arg),
            "arccot" | "acot" | "arcctg" => Expr::arcctg(arg),
            "sinh" => Expr::sinh(arg),
            "cosh" => Expr::cosh(arg),
            "tanh" => Expr::tanh(arg),
            _ => return None,
        };
        Some(expr)
    }

    /// The single argument of a function node, `None` for leaves and binary operations.
    pub fn function_argument(&self) -> Option<&Expr> {
        match self {
            Expr::Exp(e)
            | Expr::Ln(e)
            | Expr::lg(e)
            | Expr::sqrt(e)
            | Expr::abs(e)
            | Expr::sin(e)
            | Expr::cos(e)
            | Expr::tg(e)
            | Expr::ctg(e)
            | Expr::arcsin(e)
            | Expr::arccos(e)
            | Expr::arctg(e)
            | Expr::arcctg(e)
            | Expr::sinh(e)
            | Expr::cosh(e)
            | Expr::tanh(e) => Some(e),
            _ => None,
        }
    }

    fn operands(&self) -> Option<(&Expr, &Expr)> {
        match self {
            Expr::Add(lhs, rhs)
            | Expr::Sub(lhs, rhs)
            | Expr::Mul(lhs, rhs)
            | Expr::Div(lhs, rhs)
            | Expr::Pow(lhs, rhs) => Some((lhs, rhs)),
            _ => None,
        }
    }

    /// Names of all variables in the expression, in order of first appearance, without repeats.
    pub fn all_arguments_are_variables(&self) -> Vec<String> {
        let mut vars = Vec::new();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables(&self, vars: &mut Vec<String>) {
        match self {
            Expr::Var(name) => {
                if !vars.contains(name) {
                    vars.push(name.clone());
                }
            }
            Expr::Const(_) => {}
            other => {
                if let Some((lhs, rhs)) = other.operands() {
                    lhs.collect_variables(vars);
                    rhs.collect_variables(vars);
                } else if let Some(arg) = other.function_argument() {
                    arg.collect_variables(vars);
                }
            }
        }
    }
}
