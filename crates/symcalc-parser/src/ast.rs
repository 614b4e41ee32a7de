//! AST construction (§4.2): converts the parse tree produced by
//! [`crate::grammar`] into the engine's own data types — `Variable`,
//! `Term`, `Polynomial` — plus the four directive shapes the driver
//! dispatches on.
//!
//! This stage deliberately does not call `Polynomial::simplify`; it
//! only builds raw terms in source order. Canonicalization is the
//! algebra core's job (§2 item 4), not the AST builder's.

use crate::error::ParseError;
use crate::grammar::{Rule, SymcalcParser};
use pest::iterators::Pair;
use pest::Parser;
use symcalc_core::{Polynomial, Q, Term, Variable};

/// One parsed line: the verbatim source text the driver echoes, and
/// the directive it denotes.
#[derive(Debug, Clone)]
pub struct ParsedLine {
    pub source: String,
    pub directive: Directive,
}

/// One of the four top-level directive shapes of §4.2.
#[derive(Debug, Clone)]
pub enum Directive {
    Assign { name: String, rhs: AssignRhs },
    Operation(Operation),
    Polynomial(Polynomial),
    Solve { polynomial: Polynomial, var_name: Option<String> },
    /// A `3/0`-shaped fraction literal appeared somewhere in the line.
    /// Per §7 this is a *non-fatal* division-by-zero, not a grammar
    /// rejection: the driver prints the usual sentinel for this line
    /// and continues, rather than aborting the whole run.
    DivisionByZeroLiteral,
}

/// Build-time failure, more granular than the public [`ParseError`]:
/// separates a genuine grammar/AST malformation (fatal, surfaces as
/// `ParseError`) from the one condition §7 calls local to its
/// directive — a `3/0` fraction literal.
enum BuildError {
    Parse(ParseError),
    DivisionByZeroLiteral,
}

impl From<ParseError> for BuildError {
    fn from(e: ParseError) -> Self {
        BuildError::Parse(e)
    }
}

#[derive(Debug, Clone)]
pub enum AssignRhs {
    Operation(Operation),
    Polynomial(Polynomial),
}

/// A left-to-right chain of polynomial operands: `first op1 second
/// op2 third ...`. [`crate::ast::Op`] carries the operator; folding is
/// the driver's job (it decides, per §4.6, whether a `/` triggers
/// Euclidean division or ratio cross-multiplication).
#[derive(Debug, Clone)]
pub struct Operation {
    pub first: Polynomial,
    pub rest: Vec<(Op, Polynomial)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

/// Parse a whole directive file into its sequence of lines.
pub fn parse_file(input: &str) -> Result<Vec<ParsedLine>, ParseError> {
    let mut parsed = SymcalcParser::parse(Rule::file, input)?;
    let file_pair = parsed.next().expect("Rule::file always produces exactly one pair");

    let mut lines = Vec::new();
    for pair in file_pair.into_inner() {
        match pair.as_rule() {
            Rule::EOI => {}
            _ => {
                let source = pair.as_str().to_string();
                let directive = match build_directive(pair) {
                    Ok(d) => d,
                    Err(BuildError::DivisionByZeroLiteral) => Directive::DivisionByZeroLiteral,
                    Err(BuildError::Parse(e)) => return Err(e),
                };
                lines.push(ParsedLine { source, directive });
            }
        }
    }
    Ok(lines)
}

fn build_directive(pair: Pair<Rule>) -> Result<Directive, BuildError> {
    match pair.as_rule() {
        Rule::assign => build_assign(pair),
        Rule::operation => Ok(Directive::Operation(build_operation(pair)?)),
        Rule::polynomial => Ok(Directive::Polynomial(build_polynomial(pair)?)),
        Rule::solve => build_solve(pair),
        other => unreachable!("file only contains directive rules, got {other:?}"),
    }
}

fn build_assign(pair: Pair<Rule>) -> Result<Directive, BuildError> {
    let mut inner = pair.into_inner();
    let var_pair = inner.next().expect("assign always has a var on the left");
    // The grammar's `var` production technically allows an exponent
    // suffix on the left side of `=`; an assignment target is just a
    // name, so any such suffix is parsed and discarded.
    let name = parse_var_text(var_pair.as_str())?.name;

    let rhs_pair = inner.next().expect("assign always has an operation or polynomial on the right");
    let rhs = match rhs_pair.as_rule() {
        Rule::operation => AssignRhs::Operation(build_operation(rhs_pair)?),
        Rule::polynomial => AssignRhs::Polynomial(build_polynomial(rhs_pair)?),
        other => unreachable!("assign rhs is operation or polynomial, got {other:?}"),
    };
    Ok(Directive::Assign { name, rhs })
}

fn build_operation(pair: Pair<Rule>) -> Result<Operation, BuildError> {
    let mut inner = pair.into_inner();
    let first = build_polynomial(inner.next().expect("operation always has a first operand"))?;

    let mut rest = Vec::new();
    loop {
        let Some(op_pair) = inner.next() else { break };
        let op = match op_pair.as_rule() {
            Rule::add => Op::Add,
            Rule::sub => Op::Sub,
            Rule::mul => Op::Mul,
            Rule::div => Op::Div,
            other => unreachable!("operation operator, got {other:?}"),
        };
        let operand_pair =
            inner.next().ok_or_else(|| BuildError::Parse(ParseError::ast("operation is missing an operand")))?;
        rest.push((op, build_polynomial(operand_pair)?));
    }
    Ok(Operation { first, rest })
}

fn build_solve(pair: Pair<Rule>) -> Result<Directive, BuildError> {
    let mut inner = pair.into_inner();
    let poly_pair = inner.next().expect("solve always has a polynomial");
    let polynomial = build_polynomial(poly_pair)?;
    let var_name = inner.next().map(|p| p.as_str().to_string());
    Ok(Directive::Solve { polynomial, var_name })
}

fn build_polynomial(pair: Pair<Rule>) -> Result<Polynomial, BuildError> {
    let mut terms = Vec::new();
    for p in pair.into_inner() {
        if p.as_rule() == Rule::term {
            terms.push(build_term(p)?);
        }
    }
    Ok(Polynomial::from_terms(terms))
}

fn build_term(pair: Pair<Rule>) -> Result<Term, BuildError> {
    let mut coefficient = Q::one();
    let mut negative = false;
    let mut variables = Vec::new();

    for p in pair.into_inner() {
        match p.as_rule() {
            Rule::sign => negative = p.as_str() == "-",
            Rule::number => coefficient = coefficient * number_from_str(p.as_str())?,
            Rule::fraction => coefficient = coefficient * build_fraction(p)?,
            Rule::var => variables.push(parse_var_text(p.as_str())?),
            other => unreachable!("term constituent, got {other:?}"),
        }
    }

    if negative {
        coefficient = -coefficient;
    }
    Ok(Term::new(coefficient, variables))
}

fn build_fraction(pair: Pair<Rule>) -> Result<Q, BuildError> {
    let mut inner = pair.into_inner();
    let num = number_from_str(inner.next().expect("fraction has a numerator").as_str())?;
    let den = number_from_str(inner.next().expect("fraction has a denominator").as_str())?;
    if den.is_zero() {
        // A `3/0` literal is §7's non-fatal division-by-zero, not a
        // grammar rejection — it must not abort the rest of the file.
        return Err(BuildError::DivisionByZeroLiteral);
    }
    Ok(num / den)
}

/// `var` is an atomic (`@`) rule, so pest gives it no inner pairs —
/// only its matched text. Parse that text by hand: `name`, or `name^(
/// [sign] number [/ number] )`.
fn parse_var_text(text: &str) -> Result<Variable, ParseError> {
    let mut chars = text.chars();
    let name = chars
        .next()
        .ok_or_else(|| ParseError::ast("empty variable name"))?
        .to_string();
    let rest = chars.as_str();
    if rest.is_empty() {
        return Ok(Variable::new(name, Q::one()));
    }

    let body = rest
        .strip_prefix('^')
        .and_then(|s| s.strip_prefix('('))
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| ParseError::ast(format!("malformed exponent on variable '{text}'")))?;

    let (negative, body) = match body.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, body.strip_prefix('+').unwrap_or(body)),
    };

    let mut degree = if let Some(slash) = body.find('/') {
        let numerator = number_from_str(&body[..slash])?;
        let denominator = number_from_str(&body[slash + 1..])?;
        if denominator.is_zero() {
            return Err(ParseError::ast(format!("zero-denominator exponent on variable '{text}'")));
        }
        numerator / denominator
    } else {
        number_from_str(body)?
    };
    if negative {
        degree = -degree;
    }
    Ok(Variable::new(name, degree))
}

/// Parse a `number` token's text (`ASCII_DIGIT+ ("." ASCII_DIGIT+)?`)
/// into an exact `Q`. Overflow is the documented limitation of §3,
/// not something this guards against.
fn number_from_str(text: &str) -> Result<Q, ParseError> {
    match text.find('.') {
        Some(dot) => {
            let whole = &text[..dot];
            let frac = &text[dot + 1..];
            let scale = 10i64.pow(frac.len() as u32);
            let whole_val: i64 =
                whole.parse().map_err(|_| ParseError::ast(format!("invalid number literal '{text}'")))?;
            let frac_val: i64 =
                frac.parse().map_err(|_| ParseError::ast(format!("invalid number literal '{text}'")))?;
            Ok(Q::new(whole_val * scale + frac_val, scale))
        }
        None => {
            let value: i64 = text.parse().map_err(|_| ParseError::ast(format!("invalid number literal '{text}'")))?;
            Ok(Q::from_int(value))
        }
    }
}
