use calcdiff_parser::parser::{
    ast::{func::Builtin, ExpressionTree, Node},
    token::op::BinOpKind,
};
use crate::funcs;
use super::{
    ctxt::Ctxt,
    error::{kind::{UndefinedFunction, UndefinedVariable}, Error},
};
use tracing::debug;

/// Any type that can be evaluated to produce a value.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given context.
    fn eval(&self, ctxt: &mut Ctxt) -> Result<f64, Error>;

    /// Evaluate the expression to produce a value, using the default context. Only expressions
    /// whose variables are all named constants can be evaluated this way.
    fn eval_default(&self) -> Result<f64, Error> {
        self.eval(&mut Default::default())
    }
}

/// Applies a binary operator to its evaluated operands.
fn apply_op(op: BinOpKind, left: f64, right: f64) -> f64 {
    match op {
        BinOpKind::Add => left + right,
        BinOpKind::Sub => left - right,
        BinOpKind::Mul => left * right,
        BinOpKind::Div => left / right,
        BinOpKind::Exp => left.powf(right),
    }
}

impl Eval for Node {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<f64, Error> {
        match self {
            Node::Const(value) => Ok(*value),
            Node::Var(name) => ctxt.resolve(name)
                .ok_or_else(|| UndefinedVariable { name: name.clone() }.into()),
            Node::Op { op, left, right } => {
                let left = left.eval(ctxt)?;
                let right = right.eval(ctxt)?;
                Ok(apply_op(*op, left, right))
            },
            Node::Func { name, args } => {
                let builtin = Builtin::from_name(name).ok_or_else(|| UndefinedFunction {
                    name: name.clone(),
                    suggestions: funcs::similar(name),
                })?;
                funcs::check_arity(builtin, args.len())?;

                let args = args.iter()
                    .map(|arg| arg.eval(ctxt))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(funcs::apply(builtin, &args))
            },
        }
    }
}

impl Eval for ExpressionTree {
    fn eval(&self, ctxt: &mut Ctxt) -> Result<f64, Error> {
        let value = self.root().eval(ctxt)?;
        debug!(value, "evaluated expression");
        Ok(value)
    }
}

/// Eval tests depend on the parser, so ensure that parser tests pass before running these.
#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use calcdiff_parser::consts;
    use crate::numerical::error::kind::WrongArgumentCount;
    use std::{cell::RefCell, rc::Rc};
    use super::*;

    fn eval_str(source: &str) -> f64 {
        ExpressionTree::parse(source).unwrap().eval_default().unwrap()
    }

    #[test]
    fn binary_expr() {
        assert_eq!(eval_str("2+3*4"), 14.0);
    }

    #[test]
    fn parenthesized() {
        assert_eq!(eval_str("(2+3)*4"), 20.0);
        assert_eq!(eval_str("((1+9)/5)*3"), 6.0);
    }

    #[test]
    fn left_to_right() {
        assert_eq!(eval_str("10-4-3"), 3.0);
        assert_eq!(eval_str("64/4/2"), 8.0);
        assert_eq!(eval_str("2^3^2"), 512.0);
    }

    #[test]
    fn functions() {
        assert_float_absolute_eq!(eval_str("sin(0)"), 0.0, 1e-12);
        assert_float_absolute_eq!(eval_str("cos(pi)"), -1.0, 1e-12);
        assert_float_absolute_eq!(eval_str("tan(pi/4)"), 1.0, 1e-12);
        assert_float_absolute_eq!(eval_str("exp(2)"), consts::E * consts::E, 1e-12);
        assert_float_absolute_eq!(eval_str("log(8,2)"), 3.0, 1e-12);
        assert_float_absolute_eq!(eval_str("log(e^3,e)"), 3.0, 1e-12);
    }

    #[test]
    fn degree_to_radian() {
        assert_float_absolute_eq!(eval_str("90*2*pi/360"), consts::PI / 2.0, 1e-12);
    }

    #[test]
    fn division_by_zero() {
        assert!(eval_str("1/0").is_infinite());
        assert!(eval_str("0/0").is_nan());
    }

    #[test]
    fn bound_variables() {
        let tree = ExpressionTree::parse("x^2+y").unwrap();
        let mut ctxt = Ctxt::new();
        ctxt.add_var("x", 3.0);
        ctxt.add_var("y", 0.5);
        assert_eq!(tree.eval(&mut ctxt).unwrap(), 9.5);
    }

    #[test]
    fn constant_variable_nodes() {
        let node = Node::var("pi") * Node::var("e");
        assert_float_absolute_eq!(node.eval_default().unwrap(), consts::PI * consts::E, 1e-12);
    }

    #[test]
    fn resolver_asked_per_occurrence() {
        let asked = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&asked);
        let mut ctxt = Ctxt::new().with_resolver(move |name: &str| {
            log.borrow_mut().push(name.to_string());
            Some(5.0)
        });

        let tree = ExpressionTree::parse("x*x+pi*y").unwrap();
        let value = tree.eval(&mut ctxt).unwrap();
        assert_float_absolute_eq!(value, 25.0 + consts::PI * 5.0, 1e-12);
        assert_eq!(*asked.borrow(), vec!["x", "x", "y"]);
    }

    #[test]
    fn undefined_variable() {
        let err = ExpressionTree::parse("x+1").unwrap().eval_default().unwrap_err();
        assert_eq!(
            err.kind_as::<UndefinedVariable>(),
            Some(&UndefinedVariable { name: "x".to_string() }),
        );
    }

    #[test]
    fn undefined_function() {
        let err = Node::call("sine", vec![Node::Const(1.0)]).eval_default().unwrap_err();
        assert_eq!(
            err.kind_as::<UndefinedFunction>(),
            Some(&UndefinedFunction { name: "sine".to_string(), suggestions: vec!["sin".to_string()] }),
        );
    }

    #[test]
    fn wrong_argument_count() {
        let err = ExpressionTree::parse("sin()").unwrap().eval_default().unwrap_err();
        assert_eq!(
            err.kind_as::<WrongArgumentCount>(),
            Some(&WrongArgumentCount { name: "sin".to_string(), expected: 1, given: 0 }),
        );

        let err = ExpressionTree::parse("log(8)").unwrap().eval_default().unwrap_err();
        assert!(err.is::<WrongArgumentCount>());

        let err = ExpressionTree::parse("sin(1,2)").unwrap().eval_default().unwrap_err();
        assert!(err.is::<WrongArgumentCount>());
    }

    #[test]
    fn arity_checked_before_arguments() {
        let err = Node::call("exp", vec![]).eval(&mut Ctxt::new()).unwrap_err();
        assert!(err.is::<WrongArgumentCount>());
    }
}
