//! Evaluation and symbolic differentiation of expression trees produced by
//! [`calcdiff_parser`].
//!
//! - [`numerical`] evaluates a tree to an [`f64`], resolving free variables through a
//!   [`Ctxt`](numerical::ctxt::Ctxt).
//! - [`symbolic`] builds the derivative of a tree as a new tree.
//!
//! ```
//! use calcdiff_compute::{numerical::{ctxt::Ctxt, eval::Eval}, symbolic::Differentiate};
//! use calcdiff_parser::parser::ast::ExpressionTree;
//!
//! let tree = ExpressionTree::parse("x*x").unwrap();
//! let derivative = tree.differentiate().unwrap();
//!
//! let mut ctxt = Ctxt::new();
//! ctxt.add_var("x", 5.0);
//! assert_eq!(derivative.eval(&mut ctxt).unwrap(), 10.0);
//! ```

pub mod funcs;
pub mod numerical;
pub mod symbolic;
