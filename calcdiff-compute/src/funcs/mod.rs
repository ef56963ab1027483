//! Numerical implementations of the builtin functions.

mod power;
mod trigonometry;

pub use power::{exp, log};
pub use trigonometry::{cos, sin, tan};

use calcdiff_parser::parser::ast::func::Builtin;
use crate::numerical::error::{kind::WrongArgumentCount, Error};
use levenshtein::levenshtein;

/// Applies the builtin function to its evaluated arguments.
///
/// The number of arguments must match [`Builtin::arity`].
pub fn apply(builtin: Builtin, args: &[f64]) -> f64 {
    debug_assert_eq!(args.len(), builtin.arity());
    match builtin {
        Builtin::Sin => sin(args[0]),
        Builtin::Cos => cos(args[0]),
        Builtin::Tan => tan(args[0]),
        Builtin::Exp => exp(args[0]),
        Builtin::Log => log(args[0], args[1]),
    }
}

/// Checks that the builtin function can be called with `given` arguments.
pub fn check_arity(builtin: Builtin, given: usize) -> Result<(), Error> {
    if builtin.arity() == given {
        Ok(())
    } else {
        Err(WrongArgumentCount {
            name: builtin.name().to_string(),
            expected: builtin.arity(),
            given,
        }.into())
    }
}

/// Returns the names of all builtin functions with a name similar to the given name.
pub fn similar(name: &str) -> Vec<String> {
    Builtin::ALL
        .into_iter()
        .map(Builtin::name)
        .filter(|builtin| levenshtein(builtin, name) < 2)
        .map(str::to_string)
        .collect()
}
