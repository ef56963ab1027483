mod error;
mod function;

pub use error::UnsupportedDerivative;

use calcdiff_parser::parser::{ast::Node, token::op::BinOpKind};
use crate::numerical::error::Error;

/// Computes the derivative of the given expression with respect to the variable `with`. Every
/// other variable is treated as a constant.
///
/// The result is a new tree; parts of `f` that it needs are copied. No simplification is done,
/// so the derivative of `x*x` is `1*x+x*1`.
///
/// Returns [`Err`] if `f` calls a function that has no derivative rule, or calls a function
/// with the wrong number of arguments.
pub fn derivative(f: &Node, with: &str) -> Result<Node, Error> {
    Ok(match f {
        Node::Const(_) => Node::Const(0.0),
        Node::Var(name) => Node::Const(if name == with { 1.0 } else { 0.0 }),
        Node::Func { name, args } => function::function_derivative(name, args, with)?,
        Node::Op { op, left: a, right: b } => {
            let da = derivative(a, with)?;
            let db = derivative(b, with)?;
            let (a, b) = (a.as_ref(), b.as_ref());
            match op {
                // (a + b)' = a' + b'
                BinOpKind::Add => da + db,

                // (a - b)' = a' - b'
                BinOpKind::Sub => da - db,

                // (a * b)' = a' * b + a * b'
                BinOpKind::Mul => da * b.clone() + a.clone() * db,

                // (a / b)' = (a' * b - a * b') / (b * b)
                BinOpKind::Div => (da * b.clone() - a.clone() * db) / (b.clone() * b.clone()),

                // (a ^ b)' = b * a^(b - 1) * a', when b does not depend on the variable
                BinOpKind::Exp if db == Node::Const(0.0) => {
                    b.clone() * a.clone().pow(b.clone() - Node::Const(1.0)) * da
                },

                // (a ^ b)' = a^b * (b' * ln(a) + b * a' / a)
                BinOpKind::Exp => a.clone().pow(b.clone())
                    * (db * a.clone().ln() + b.clone() * da / a.clone()),
            }
        },
    })
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use calcdiff_parser::parser::ast::ExpressionTree;
    use crate::numerical::{ctxt::Ctxt, error::kind::WrongArgumentCount, eval::Eval};
    use crate::symbolic::Differentiate;
    use pretty_assertions::assert_eq;
    use super::*;

    /// Evaluates the expression, substituting `x`.
    fn eval_x(e: &Node, x: f64) -> f64 {
        let mut ctxt = Ctxt::new();
        ctxt.add_var("x", x);
        ctxt.add_var("y", 2.0);
        e.eval(&mut ctxt).unwrap()
    }

    /// Approximates the derivative of the expression with a central difference.
    fn finite_difference(e: &Node, x: f64) -> f64 {
        const DX: f64 = 1e-5;
        (eval_x(e, x + DX) - eval_x(e, x - DX)) / (2.0 * DX)
    }

    fn test_for_function(function: &str, points: impl IntoIterator<Item = f64>) {
        const TOL: f64 = 1e-4;

        let expr = ExpressionTree::parse(function).unwrap().into_root();
        let symbolic = derivative(&expr, "x").unwrap();

        for point in points {
            let symbolically_computed = eval_x(&symbolic, point);
            let numerically_computed = finite_difference(&expr, point);
            let tol = TOL * numerically_computed.abs().max(1.0);

            assert!(
                (symbolically_computed - numerically_computed).abs() < tol,
                "for \"{}\" at x={}, symbolically computed derivative was {} but numerically computed derivative was {}",
                function,
                point,
                symbolically_computed,
                numerically_computed,
            );
        }
    }

    #[test]
    fn constant() {
        for c in [0.0, 2.5, -7.0, 1e9] {
            let d = derivative(&Node::Const(c), "x").unwrap();
            assert_eq!(d.eval_default().unwrap(), 0.0);
        }
    }

    #[test]
    fn variables() {
        assert_eq!(derivative(&Node::var("x"), "x").unwrap(), Node::Const(1.0));
        assert_eq!(derivative(&Node::var("y"), "x").unwrap(), Node::Const(0.0));
        assert_eq!(derivative(&Node::var("t"), "t").unwrap(), Node::Const(1.0));
    }

    #[test]
    fn product_is_not_simplified() {
        let tree = ExpressionTree::parse("x*x").unwrap();
        let d = tree.differentiate().unwrap();
        assert_eq!(d.dump(), "+\n  *\n    1\n    x\n  *\n    x\n    1");
    }

    #[test]
    fn square_through_resolver() {
        let tree = ExpressionTree::parse("x*x").unwrap();
        let d = tree.differentiate().unwrap();
        let mut ctxt = Ctxt::new().with_resolver(|name: &str| (name == "x").then_some(5.0));
        assert_eq!(d.eval(&mut ctxt).unwrap(), 10.0);
    }

    #[test]
    fn other_variables_are_constant() {
        let d = ExpressionTree::parse("y*x+y^2").unwrap().differentiate().unwrap();
        let mut ctxt = Ctxt::new();
        ctxt.add_var("x", 4.0);
        ctxt.add_var("y", 3.0);
        assert_float_absolute_eq!(d.eval(&mut ctxt).unwrap(), 3.0, 1e-12);
    }

    #[test]
    fn source_tree_is_unchanged() {
        let tree = ExpressionTree::parse("sin(x)*log(x,2)").unwrap();
        let copy = tree.clone();
        let d = tree.differentiate().unwrap();

        assert_eq!(tree, copy);
        assert_ne!(d, tree);
        assert_float_absolute_eq!(eval_x(tree.root(), 4.0), 4.0_f64.sin() * 2.0, 1e-12);
    }

    #[test]
    fn power_rule() {
        test_for_function("x^2+x+1", [0.5, 1.0, 2.0, 5.0, 8.0]);
        test_for_function("x^0.5", [0.25, 1.0, 9.0]);
    }

    #[test]
    fn power_rule_nonpositive_base() {
        test_for_function("x^2", [-2.0, -1.0, 0.0]);
        test_for_function("x^3", [-3.0, -0.5]);
        test_for_function("(x-4)^2*y^2", [1.0, 4.0]);
    }

    #[test]
    fn power_rule_shape() {
        let d = derivative(&ExpressionTree::parse("x^3").unwrap().into_root(), "x").unwrap();
        assert_eq!(d.to_string(), "3*x^(3-1)*1");
    }

    #[test]
    fn sum_and_difference() {
        test_for_function("x-3*x+5", [0.0, 1.0, -2.0]);
    }

    #[test]
    fn quotient_rule() {
        test_for_function("x/(x+1)", [0.0, 1.0, 3.0]);
        test_for_function("1/x", [0.5, 2.0]);
    }

    #[test]
    fn exponent_rule() {
        test_for_function("2^x", [-1.0, 0.0, 3.0]);
        test_for_function("x^x", [0.5, 1.0, 2.0, 3.0]);
        test_for_function("e^(x*x)", [0.0, 0.5, 1.0]);
    }

    #[test]
    fn trigonometric() {
        test_for_function("sin(x)*x", [0.0, 1.0, 2.0, -3.0]);
        test_for_function("cos(x^2)", [0.5, 1.0, 2.0]);
        test_for_function("tan(x)", [0.0, 0.5, 1.0]);
        test_for_function("sin(2*x+1)", [0.0, 1.0]);
    }

    #[test]
    fn exponential() {
        test_for_function("exp(2*x)", [0.0, 1.0, 2.0]);
        test_for_function("exp(sin(x))", [0.0, 1.0, 2.0]);
    }

    #[test]
    fn logarithm() {
        test_for_function("log(x,2)", [0.5, 1.0, 4.0]);
        test_for_function("log(2,x)", [0.5, 2.0, 3.0, 5.0]);
        test_for_function("log(x*x+1,x+1)", [0.5, 2.0, 3.0]);
        test_for_function("log(x,e)", [1.0, 2.0]);
    }

    #[test]
    fn unsupported_function() {
        let node = Node::call("sqrt", vec![Node::var("x")]);
        let err = derivative(&node, "x").unwrap_err();
        assert_eq!(
            err.kind_as::<UnsupportedDerivative>(),
            Some(&UnsupportedDerivative { name: "sqrt".to_string() }),
        );
    }

    #[test]
    fn unsupported_function_nested() {
        let node = Node::var("x") * Node::call("abs", vec![Node::var("x")]);
        assert!(derivative(&node, "x").unwrap_err().is::<UnsupportedDerivative>());
    }

    #[test]
    fn wrong_argument_count() {
        let err = ExpressionTree::parse("sin()").unwrap().differentiate().unwrap_err();
        assert!(err.is::<WrongArgumentCount>());

        let node = Node::call("log", vec![Node::var("x")]);
        assert_eq!(
            derivative(&node, "x").unwrap_err().kind_as::<WrongArgumentCount>(),
            Some(&WrongArgumentCount { name: "log".to_string(), expected: 2, given: 1 }),
        );
    }
}
