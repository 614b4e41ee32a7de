//! Directive driver (§2 item 6, §4.1, §6, §7).
//!
//! Reads the whole input file eagerly, parses it once (§5: "parse of
//! the whole file is eager and the file is released before evaluation
//! begins"), then walks the resulting directives strictly in source
//! order, maintaining a single growing [`Binding`] store and printing
//! one echoed source line plus a tab-indented result per directive.

pub mod config;
pub mod error;

use std::fs;
use std::io::Write;
use std::path::Path;

pub use config::DriverConfig;
pub use error::DriverError;
use symcalc_core::roots::{roots, RootsOutcome};
use symcalc_core::substitute::substitute_polynomial;
use symcalc_core::{Binding, MathError, MathResult, Polynomial, PolyRatio, Value};
use symcalc_parser::{parse_file, AssignRhs, Directive, Op, Operation, ParsedLine};

/// Run the driver end to end against an already-open output sink,
/// with the default [`DriverConfig`].
pub fn run(path: &Path, out: &mut impl Write) -> Result<(), DriverError> {
    run_with_config(path, out, &DriverConfig::default())
}

/// Run the driver end to end against an already-open output sink.
///
/// A fatal condition (unreadable file, parse failure, an unsolvable
/// `solve` per §7) aborts the whole run — but everything written to
/// `out` before that point stays, matching the single-threaded,
/// no-rollback execution model of §5.
pub fn run_with_config(path: &Path, out: &mut impl Write, config: &DriverConfig) -> Result<(), DriverError> {
    let content =
        fs::read_to_string(path).map_err(|source| DriverError::Io { path: path.to_path_buf(), source })?;
    tracing::debug!(path = %path.display(), "read input file");
    let lines = parse_file(&content)?;
    tracing::debug!(directive_count = lines.len(), "parsed directive file");

    let mut binding = Binding::new();
    for line in &lines {
        if line.source.trim().is_empty() {
            continue;
        }
        let _ = writeln!(out, "{}", line.source);
        execute(line, &mut binding, config, out)?;
    }
    Ok(())
}

fn execute(
    line: &ParsedLine,
    binding: &mut Binding,
    config: &DriverConfig,
    out: &mut impl Write,
) -> Result<(), DriverError> {
    match &line.directive {
        Directive::Assign { name, rhs } => {
            let result = match rhs {
                AssignRhs::Operation(op) => eval_operation(op, binding),
                AssignRhs::Polynomial(p) => substitute_polynomial(p, binding).map(Value::Poly),
            };
            match result {
                Ok(value) => {
                    // The `Binding` store only holds scalar `Q` values
                    // (§3); an assignment whose right side does not
                    // reduce to a constant still prints its simplified
                    // form but leaves the store untouched.
                    if let Value::Poly(p) = &value {
                        if let Some(q) = p.as_constant() {
                            binding.bind(name.clone(), q);
                        }
                    }
                    let _ = writeln!(out, "\t{value}");
                }
                Err(e) => print_local_error(out, &e),
            }
        }
        Directive::Operation(op) => match eval_operation(op, binding) {
            Ok(value) => {
                let _ = writeln!(out, "\t{value}");
            }
            Err(e) => print_local_error(out, &e),
        },
        Directive::Polynomial(p) => match substitute_polynomial(p, binding) {
            Ok(p) => {
                let _ = writeln!(out, "\t{p}");
            }
            Err(e) => print_local_error(out, &e),
        },
        Directive::Solve { polynomial, var_name } => {
            execute_solve(polynomial, var_name.as_deref(), binding, config, out)?
        }
        // A `3/0`-shaped fraction literal (§7): local to this
        // directive, not a reason to abort the rest of the file.
        Directive::DivisionByZeroLiteral => print_local_error(out, &MathError::DivisionByZero),
    }
    Ok(())
}

/// Fold an `Operation` chain left to right (§4.2), substituting
/// bindings into each operand before combining it into the running
/// [`Value`]. A `/` is Euclidean division while the running value is
/// still a bare polynomial, and ratio cross-multiplication once it
/// isn't (§4.6, §9) — [`Value::div`] carries that distinction.
fn eval_operation(op: &Operation, binding: &Binding) -> MathResult<Value> {
    let first = substitute_polynomial(&op.first, binding)?;
    let mut value = Value::Poly(first);
    for (operator, operand) in &op.rest {
        let operand = substitute_polynomial(operand, binding)?;
        value = match operator {
            Op::Add => value.add(&operand)?,
            Op::Sub => value.sub(&operand)?,
            Op::Mul => value.mul(&operand)?,
            Op::Div => value.div(&operand)?,
        };
    }
    value.simplify()
}

fn execute_solve(
    polynomial: &Polynomial,
    var_name: Option<&str>,
    binding: &Binding,
    config: &DriverConfig,
    out: &mut impl Write,
) -> Result<(), DriverError> {
    let substituted = match substitute_polynomial(polynomial, binding) {
        Ok(p) => p,
        Err(e) => {
            print_local_error(out, &e);
            return Ok(());
        }
    };

    let resolved_name = match var_name {
        Some(name) => name.to_string(),
        None => match substituted.variable_names().into_iter().next() {
            Some(name) => name,
            None => return Err(DriverError::Fatal(MathError::NoVariableToSolveFor)),
        },
    };

    match roots(&substituted, Some(&resolved_name)) {
        Ok(RootsOutcome::Roots(found)) => {
            let is_complex = found.iter().flatten().any(contains_imaginary_unit);
            if is_complex && !config.quiet {
                let _ = writeln!(out, "\t(i is the imaginary unit)");
            }
            for summands in &found {
                let rendered = summands.iter().map(PolyRatio::to_string).collect::<Vec<_>>().join(" + ");
                let _ = writeln!(out, "\t{resolved_name} = {rendered}");
            }
        }
        Ok(RootsOutcome::NoRoots) => {
            let _ = writeln!(out, "\tno solution");
        }
        Ok(RootsOutcome::AllValuesAreRoots) => {
            let _ = writeln!(out, "\tevery value is a solution");
        }
        Err(e @ (MathError::NoVariableToSolveFor | MathError::UnsupportedDegree { .. })) => {
            return Err(DriverError::Fatal(e));
        }
        Err(e) => print_local_error(out, &e),
    }
    Ok(())
}

fn contains_imaginary_unit(ratio: &PolyRatio) -> bool {
    [&ratio.numerator, &ratio.denominator]
        .into_iter()
        .any(|p| p.terms.iter().any(|t| t.variables.iter().any(|v| v.is_imaginary_unit())))
}

fn print_local_error(out: &mut impl Write, e: &MathError) {
    tracing::warn!(error = %e, "directive failed locally, continuing");
    let _ = writeln!(out, "\t{e}");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(input: &str) -> String {
        let dir = tempfile_dir();
        let path = dir.join("input.txt");
        fs::write(&path, input).unwrap();
        let mut out = Vec::new();
        run(&path, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn tempfile_dir() -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("symcalc-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn simplifies_a_bare_polynomial() {
        assert_eq!(run_to_string("8x^(2)\n"), "8x^(2)\n\t8x^(2)\n");
    }

    #[test]
    fn binds_an_assignment_and_substitutes_it_into_a_later_operation() {
        let out = run_to_string("a = 8\n(a) * (6x - y)\n");
        assert_eq!(out, "a = 8\n\t8\n(a) * (6x - y)\n\t48x-8y\n");
    }

    #[test]
    fn identical_monomial_ratio_cancels_to_one() {
        assert_eq!(run_to_string("(ax) / (ax)\n"), "(ax) / (ax)\n\t1\n");
    }

    #[test]
    fn division_by_zero_prints_the_sentinel_and_keeps_going() {
        let out = run_to_string("(3) / (0)\n8x^(2)\n");
        assert_eq!(out, "(3) / (0)\n\tERROR: Division by zero!\n8x^(2)\n\t8x^(2)\n");
    }

    #[test]
    fn a_zero_denominator_fraction_literal_is_local_and_the_run_continues() {
        let out = run_to_string("(3/0)x\n8x^(2)\n");
        assert_eq!(out, "(3/0)x\n\tERROR: Division by zero!\n8x^(2)\n\t8x^(2)\n");
    }

    #[test]
    fn cancels_common_monomial_content_in_a_ratio() {
        let out = run_to_string("(3 - 6y) / (6x + 12z)\n");
        assert_eq!(out, "(3 - 6y) / (6x + 12z)\n\t(-2y+1) / (2x+4z)\n");
    }

    #[test]
    fn solves_a_rational_quadratic() {
        let out = run_to_string("[x^(2) + x - 2]\n");
        assert_eq!(out, "[x^(2) + x - 2]\n\tx = 1\n\tx = -2\n");
    }

    #[test]
    fn solves_a_complex_quadratic_with_the_imaginary_unit_comment() {
        let out = run_to_string("[x^(2) + x + 3]\n");
        assert_eq!(
            out,
            "[x^(2) + x + 3]\n\t(i is the imaginary unit)\n\
             \tx = (-1) / (2) + ((11\u{2148}^(2))^(1/2)) / (2)\n\
             \tx = (-1) / (2) + ((11\u{2148}^(2))^(1/2)) / (-2)\n"
        );
    }

    #[test]
    fn solves_for_an_explicit_variable_among_several() {
        let out = run_to_string("[y^(2) - 11x + 2 + x, x]\n");
        assert_eq!(out, "[y^(2) - 11x + 2 + x, x]\n\tx = (-y^(2)-2) / (-10)\n");
    }

    #[test]
    fn unsupported_degree_aborts_the_whole_run() {
        let dir = tempfile_dir();
        let path = dir.join("cubic.txt");
        fs::write(&path, "8x^(2)\n[x^(3) - 1]\n").unwrap();
        let mut out = Vec::new();
        let result = run(&path, &mut out);
        assert!(matches!(result, Err(DriverError::Fatal(MathError::UnsupportedDegree { degree: 3 }))));
        // the first directive's output still made it onto the stream.
        assert_eq!(String::from_utf8(out).unwrap(), "8x^(2)\n\t8x^(2)\n");
    }

    #[test]
    fn solve_with_no_variable_and_no_target_is_fatal() {
        let dir = tempfile_dir();
        let path = dir.join("noVar.txt");
        fs::write(&path, "[5]\n").unwrap();
        let mut out = Vec::new();
        let result = run(&path, &mut out);
        assert!(matches!(result, Err(DriverError::Fatal(MathError::NoVariableToSolveFor))));
    }

    #[test]
    fn unreadable_file_is_an_io_error() {
        let mut out = Vec::new();
        let result = run(Path::new("/nonexistent/path/does-not-exist.txt"), &mut out);
        assert!(matches!(result, Err(DriverError::Io { .. })));
    }

    #[test]
    fn quiet_config_suppresses_the_imaginary_unit_comment() {
        let dir = tempfile_dir();
        let path = dir.join("quiet.txt");
        fs::write(&path, "[x^(2) + x + 3]\n").unwrap();
        let mut out = Vec::new();
        run_with_config(&path, &mut out, &DriverConfig { quiet: true }).unwrap();
        let rendered = String::from_utf8(out).unwrap();
        assert!(!rendered.contains("imaginary unit"));
        assert!(rendered.contains("x = (-1) / (2)"));
    }
}
