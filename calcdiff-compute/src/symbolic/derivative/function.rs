//! Derivatives of the builtin functions, with the chain rule applied to their arguments.

use calcdiff_parser::parser::ast::{func::Builtin, Node};
use crate::{funcs, numerical::error::Error};
use super::{derivative, error::UnsupportedDerivative};

/// Computes the derivative of a call to the named function with the given arguments.
pub(super) fn function_derivative(name: &str, args: &[Node], with: &str) -> Result<Node, Error> {
    let builtin = Builtin::from_name(name)
        .ok_or_else(|| UnsupportedDerivative { name: name.to_string() })?;
    funcs::check_arity(builtin, args.len())?;

    let u = &args[0];
    let du = derivative(u, with)?;
    let call = |builtin: Builtin| Node::call(builtin.name(), vec![u.clone()]);

    Ok(match builtin {
        // sin(u)' = cos(u) * u'
        Builtin::Sin => call(Builtin::Cos) * du,

        // cos(u)' = 0 - sin(u) * u'
        Builtin::Cos => Node::Const(0.0) - call(Builtin::Sin) * du,

        // tan(u)' = u' / cos(u)^2
        Builtin::Tan => du / call(Builtin::Cos).pow(Node::Const(2.0)),

        // exp(u)' = exp(u) * u'
        Builtin::Exp => call(Builtin::Exp) * du,

        // log(u, b) = ln(u) / ln(b), by the quotient rule:
        // log(u, b)' = (ln(b) * u' / u - ln(u) * b' / b) / ln(b)^2
        Builtin::Log => {
            let b = &args[1];
            let db = derivative(b, with)?;
            (b.clone().ln() * du / u.clone() - u.clone().ln() * db / b.clone())
                / b.clone().ln().pow(Node::Const(2.0))
        },
    })
}
