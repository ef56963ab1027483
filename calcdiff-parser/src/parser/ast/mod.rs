//! The expression tree produced by the parser.

pub mod func;
pub mod node;
pub mod tree;

pub use func::Builtin;
pub use node::Node;
pub use tree::ExpressionTree;
