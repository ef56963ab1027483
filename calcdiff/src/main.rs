mod error;
mod prompt;

use calcdiff_compute::{numerical::{ctxt::Ctxt, eval::Eval}, symbolic::Differentiate};
use calcdiff_parser::parser::ast::ExpressionTree;
use clap::Parser;
use error::Error;
use prompt::Prompt;
use std::{io::{self, Write}, process::ExitCode};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Prints the expression tree of an expression and of its derivative with respect to `x`, then
/// evaluates the derivative, asking for the value of each variable it needs.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// The expression, written without whitespace, such as `x^2+sin(x)*log(x,2)`.
    expression: String,
}

/// Parses and differentiates the input, writing both trees and the value of the derivative to
/// `out`. The trees are written before evaluation starts, so they are visible while `ctxt` asks
/// for variables.
fn run(input: &str, ctxt: &mut Ctxt, out: &mut impl Write) -> Result<(), Error> {
    let tree = ExpressionTree::parse(input).map_err(Error::Parse)?;
    writeln!(out, "TREE:\n{}", tree.dump())?;

    let derivative = tree.differentiate().map_err(Error::Compute)?;
    writeln!(out, "DERIVATIVE:\n{}", derivative.dump())?;
    out.flush()?;

    let value = derivative.eval(ctxt).map_err(Error::Compute)?;
    writeln!(out, "result = {:.5}", value)?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut ctxt = match Prompt::new() {
        Ok(prompt) => Ctxt::new().with_resolver(prompt),
        Err(err) => {
            warn!(%err, "cannot read from the terminal, variables will be undefined");
            Ctxt::new()
        },
    };

    match run(&args.expression, &mut ctxt, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.report_to_stderr(&args.expression);
            ExitCode::FAILURE
        },
    }
}

#[cfg(test)]
mod tests {
    use calcdiff_compute::numerical::error::kind::{UndefinedVariable, WrongArgumentCount};
    use calcdiff_parser::parser::error::kind::EmptyExpression;
    use super::*;

    /// Runs the input with `x` bound to the given value, returning the output and the result.
    fn run_with_x(input: &str, x: f64) -> (String, Result<(), Error>) {
        let mut ctxt = Ctxt::new();
        ctxt.add_var("x", x);
        let mut out = Vec::new();
        let result = run(input, &mut ctxt, &mut out);
        (String::from_utf8(out).unwrap(), result)
    }

    #[test]
    fn square() {
        let (out, result) = run_with_x("x*x", 5.0);
        assert!(result.is_ok());
        assert_eq!(
            out,
            "TREE:\n*\n  x\n  x\nDERIVATIVE:\n+\n  *\n    1\n    x\n  *\n    x\n    1\nresult = 10.00000\n",
        );
    }

    #[test]
    fn result_has_five_decimals() {
        let (out, result) = run_with_x("sin(x)", 0.0);
        assert!(result.is_ok());
        assert!(out.ends_with("\nresult = 1.00000\n"), "{}", out);

        let (out, _) = run_with_x("x^3", 0.5);
        assert!(out.ends_with("\nresult = 0.75000\n"), "{}", out);
    }

    #[test]
    fn parse_error_prints_nothing() {
        let (out, result) = run_with_x("x*", 1.0);
        assert_eq!(out, "");
        assert!(matches!(result, Err(Error::Parse(err)) if err.is::<EmptyExpression>()));
    }

    #[test]
    fn derivative_error_keeps_tree() {
        let (out, result) = run_with_x("sin()*2", 1.0);
        assert_eq!(out, "TREE:\n*\n  sin()\n  2\n");
        assert!(matches!(result, Err(Error::Compute(err)) if err.is::<WrongArgumentCount>()));
    }

    #[test]
    fn undefined_variable_after_trees() {
        let (out, result) = run_with_x("x*y", 2.0);
        assert!(out.contains("DERIVATIVE:\n"));
        assert!(!out.contains("result"));
        assert!(matches!(result, Err(Error::Compute(err)) if err.is::<UndefinedVariable>()));
    }
}
