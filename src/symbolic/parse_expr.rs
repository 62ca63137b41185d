use crate::symbolic::symbolic_engine::Expr;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric1, char, digit0, digit1, multispace0, one_of},
    combinator::{all_consuming, map, map_res, opt, recognize},
    error::{Error as NomError, ErrorKind},
    multi::many0,
    sequence::{delimited, pair, preceded},
};
use std::f64::consts::{E, PI};
/// a module turns a String expression into a symbolic expression
///# Example
/// ```
/// use RustedFuncPlot::symbolic::symbolic_engine::Expr;
/// let parsed_expression = Expr::parse_expression("x^2.3 * log(x + 1)").unwrap();
/// println!(" parsed_expression {}", parsed_expression);
/// ```
//                precedence, lowest first
//   expression :=  term (('+' | '-') term)*
//   term       :=  unary (('*' | '/') unary)*
//   unary      :=  ('-' | '+') unary | power
//   power      :=  atom (('^' | '**') unary)?
//   atom       :=  number | name '(' expression ')' | name | '(' expression ')'

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty expression")]
    Empty,
    #[error("unknown function `{name}`")]
    UnknownFunction { name: String },
    #[error("syntax error at position {position} near `{near}`")]
    Syntax { position: usize, near: String },
    #[error("expression nested too deeply at position {position}")]
    TooDeep { position: usize },
}

/// Brackets, function calls, signs and exponents open at once.
pub const MAX_NESTING: usize = 64;
/// Height of the resulting tree; long `+`/`*` chains count here.
pub const MAX_HEIGHT: usize = 1024;

/// Expression with the height of its tree.
type Node = (Expr, usize);
type Res<'a, O> = IResult<&'a str, O>;

fn too_deep(input: &str) -> nom::Err<NomError<&str>> {
    nom::Err::Failure(NomError::new(input, ErrorKind::TooLarge))
}

fn grow(input: &str, expr: Expr, height: usize) -> Result<Node, nom::Err<NomError<&str>>> {
    if height > MAX_HEIGHT {
        return Err(too_deep(input));
    }
    Ok((expr, height))
}

fn ws<'a, O, F>(inner: F) -> impl Parser<&'a str, Output = O, Error = NomError<&'a str>>
where
    F: Parser<&'a str, Output = O, Error = NomError<&'a str>>,
{
    delimited(multispace0, inner, multispace0)
}

/// `12`, `1.5`, `.5`, `2e-3`; the sign is handled by `unary`
fn number(input: &str) -> Res<'_, Expr> {
    let mantissa = alt((
        recognize(pair(digit1, opt(pair(char('.'), digit0)))),
        recognize(pair(char('.'), digit1)),
    ));
    let exponent = opt(pair(one_of("eE"), pair(opt(one_of("+-")), digit1)));
    map_res(recognize(pair(mantissa, exponent)), |s: &str| {
        s.parse::<f64>().map(Expr::Const)
    })
    .parse(input)
}

/// Parses a name (word characters without spaces)
fn identifier(input: &str) -> Res<'_, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ))
    .parse(input)
}

fn symbol(name: &str) -> Expr {
    match name {
        "pi" => Expr::Const(PI),
        "e" => Expr::Const(E),
        _ => Expr::Var(name.to_string()),
    }
}

fn call_or_symbol<'a>(input: &'a str, depth: usize) -> Res<'a, Node> {
    let (rest, name) = identifier(input)?;
    let (after_space, _) = multispace0::<&str, NomError<&str>>(rest)?;
    if !after_space.starts_with('(') {
        return Ok((rest, (symbol(name), 1)));
    }
    let argument = |i: &'a str| expression(i, depth + 1);
    let (rest, (argument, height)) = delimited(char('('), argument, char(')')).parse(after_space)?;
    match Expr::function_by_name(name, argument) {
        Some(expr) => Ok((rest, grow(input, expr, height + 1)?)),
        // Failure stops `alt` from trying other branches
        None => Err(nom::Err::Failure(NomError::new(input, ErrorKind::Verify))),
    }
}

fn parenthesized<'a>(input: &'a str, depth: usize) -> Res<'a, Node> {
    delimited(char('('), |i: &'a str| expression(i, depth + 1), char(')')).parse(input)
}

fn atom<'a>(input: &'a str, depth: usize) -> Res<'a, Node> {
    ws(alt((
        map(number, |e| (e, 1usize)),
        |i: &'a str| call_or_symbol(i, depth),
        |i: &'a str| parenthesized(i, depth),
    )))
    .parse(input)
}

fn power<'a>(input: &'a str, depth: usize) -> Res<'a, Node> {
    let (rest, (base, base_height)) = atom(input, depth)?;
    let (rest, exponent) = opt(preceded(
        ws(alt((tag("**"), tag("^")))),
        |i: &'a str| unary(i, depth + 1),
    ))
    .parse(rest)?;
    match exponent {
        Some((exponent, height)) => {
            let node = grow(input, base.pow(exponent), base_height.max(height) + 1)?;
            Ok((rest, node))
        }
        None => Ok((rest, (base, base_height))),
    }
}

fn unary<'a>(input: &'a str, depth: usize) -> Res<'a, Node> {
    if depth > MAX_NESTING {
        return Err(too_deep(input));
    }
    let (rest, sign) = opt(ws(one_of("+-"))).parse(input)?;
    match sign {
        Some('-') => {
            let (rest, (operand, height)) = unary(rest, depth + 1)?;
            Ok((rest, grow(input, -operand, height + 1)?))
        }
        Some(_) => unary(rest, depth + 1),
        None => power(input, depth),
    }
}

/// Left-associative chain `operand (op operand)*`; stops at the first
/// operator that is not followed by an operand.
fn chain<'a, P>(
    input: &'a str,
    operators: &'static str,
    mut operand: P,
    combine: fn(char, Expr, Expr) -> Expr,
) -> Res<'a, Node>
where
    P: FnMut(&'a str) -> Res<'a, Node>,
{
    let (mut rest, (mut acc, mut height)) = operand(input)?;
    loop {
        match pair(ws(one_of(operators)), &mut operand).parse(rest) {
            Ok((after, (op, (rhs, rhs_height)))) => {
                let next = height.max(rhs_height) + 1;
                (acc, height) = grow(rest, combine(op, acc, rhs), next)?;
                rest = after;
            }
            Err(nom::Err::Error(_)) => return Ok((rest, (acc, height))),
            Err(e) => return Err(e),
        }
    }
}

fn term<'a>(input: &'a str, depth: usize) -> Res<'a, Node> {
    chain(input, "*/", |i| unary(i, depth), |op, acc, rhs| match op {
        '*' => acc * rhs,
        _ => acc / rhs,
    })
}

fn expression<'a>(input: &'a str, depth: usize) -> Res<'a, Node> {
    chain(input, "+-", |i| term(i, depth), |op, acc, rhs| match op {
        '+' => acc + rhs,
        _ => acc - rhs,
    })
}

fn root(input: &str) -> Res<'_, Node> {
    expression(input, 0)
}

fn excerpt(rest: &str) -> String {
    let near: String = rest.chars().take(12).collect();
    if near.is_empty() {
        "end of input".to_string()
    } else {
        near
    }
}

/// Parses the whole input into an expression tree; trailing garbage is an error.
pub fn parse_expression_func(input: &str) -> Result<Expr, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::Empty);
    }
    match all_consuming(ws(root)).parse(input) {
        Ok((_, (expr, _))) => Ok(expr),
        Err(nom::Err::Failure(err)) if err.code == ErrorKind::TooLarge => {
            Err(ParseError::TooDeep {
                position: input.len() - err.input.len(),
            })
        }
        Err(nom::Err::Failure(err)) if err.code == ErrorKind::Verify => {
            let name = identifier(err.input)
                .map(|(_, name)| name.to_string())
                .unwrap_or_else(|_| excerpt(err.input));
            Err(ParseError::UnknownFunction { name })
        }
        Err(nom::Err::Error(err)) | Err(nom::Err::Failure(err)) => Err(ParseError::Syntax {
            position: input.len() - err.input.len(),
            near: excerpt(err.input),
        }),
        Err(nom::Err::Incomplete(_)) => Err(ParseError::Syntax {
            position: input.len(),
            near: excerpt(""),
        }),
    }
}
