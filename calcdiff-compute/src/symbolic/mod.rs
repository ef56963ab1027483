//! Symbolic manipulation of expression trees.

pub mod derivative;

pub use derivative::derivative;

use calcdiff_parser::parser::ast::ExpressionTree;
use crate::numerical::error::Error;
use tracing::debug;

/// The variable that [`Differentiate::differentiate`] differentiates with respect to.
pub const VARIABLE: &str = "x";

/// Any type that can be differentiated with respect to [`VARIABLE`].
pub trait Differentiate {
    /// Returns a new tree holding the derivative. `self` is left untouched and remains usable.
    fn differentiate(&self) -> Result<ExpressionTree, Error>;
}

impl Differentiate for ExpressionTree {
    fn differentiate(&self) -> Result<ExpressionTree, Error> {
        let root = derivative(self.root(), VARIABLE)?;
        debug!(from = self.root().size(), to = root.size(), "built derivative");
        Ok(ExpressionTree::new(root))
    }
}
