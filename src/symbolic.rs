#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// a module turns a String expression into a symbolic expression
///
///# Example
/// ```
/// use RustedFuncPlot::symbolic::symbolic_engine::Expr;
/// let parsed_expression = Expr::parse_expression("x^2.3 * log(x + 1)").unwrap();
/// println!(" parsed_expression {}", parsed_expression);
/// let f = parsed_expression.lambdify1D("x").unwrap();
/// println!("f(2) = {}", f(2.0));
///  ```
/// ________________________________________________________________________________________________________________________________
pub mod parse_expr;
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// 1) the expression tree produced by the parser
/// 2) variables of the tree and substitution of values
/// 3) human readable printing
///# Example#
/// ```
/// use RustedFuncPlot::symbolic::symbolic_engine::Expr;
/// let expr = Expr::parse_expression("exp(x) + sin(x)").unwrap();
/// assert_eq!(expr.all_arguments_are_variables(), vec!["x".to_string()]);
/// println!("{}", expr);
/// ```
pub mod symbolic_engine;
/// turns an expression tree into a Rust closure of the domain variable
pub mod symbolic_lambdify;
///______________________________________________________________________________________________________________________________________________
/// bracket and blank-line helpers
/// _____________________________________________________________________________________________________________________________________________
pub mod utils;
