/// Supplies values for variables that are not bound in a [`Ctxt`](super::ctxt::Ctxt).
///
/// A resolver is asked once for every occurrence of an unbound variable that is evaluated;
/// answers are not cached, so `x*x` asks for `x` twice. Returning [`None`] declines, and the
/// evaluation fails with [`UndefinedVariable`](super::error::kind::UndefinedVariable).
///
/// Any `FnMut(&str) -> Option<f64>` closure is a resolver:
///
/// ```
/// use calcdiff_compute::numerical::{ctxt::Ctxt, eval::Eval};
/// use calcdiff_parser::parser::ast::ExpressionTree;
///
/// let tree = ExpressionTree::parse("x+y").unwrap();
/// let mut ctxt = Ctxt::new().with_resolver(|name: &str| (name == "x").then_some(2.0));
/// assert!(tree.eval(&mut ctxt).is_err());
///
/// ctxt.add_var("y", 3.0);
/// assert_eq!(tree.eval(&mut ctxt).unwrap(), 5.0);
/// ```
pub trait Resolver {
    /// Returns the value of the variable with the given name, or [`None`] if it has none.
    fn resolve(&mut self, name: &str) -> Option<f64>;
}

impl<F> Resolver for F
where
    F: FnMut(&str) -> Option<f64>,
{
    fn resolve(&mut self, name: &str) -> Option<f64> {
        self(name)
    }
}
