use crate::consts;
use crate::parser::token::op::BinOpKind;
use std::ops::{Add, Div, Mul, Sub};

/// A node of an expression tree.
///
/// Nodes own their children, so [`Clone`] produces a deep copy that shares nothing with the
/// original. The [`PartialEq`] implementation compares structure: two trees are equal if they
/// have the same shape, operators, names and constant values.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A numeric constant, such as `2.5`, or a named constant such as `pi` after parsing.
    Const(f64),

    /// A free variable, such as `x`, resolved when the tree is evaluated.
    Var(String),

    /// A binary operation, such as `a * b`.
    Op {
        /// The operator.
        op: BinOpKind,

        /// The left-hand operand.
        left: Box<Node>,

        /// The right-hand operand.
        right: Box<Node>,
    },

    /// A function call, such as `log(x, 2)`.
    ///
    /// The parser only produces calls to [`Builtin`](super::func::Builtin) functions with the
    /// arguments it was given; the name and argument count are checked when the call is
    /// evaluated or differentiated.
    Func {
        /// The name of the function.
        name: String,

        /// The arguments, in order.
        args: Vec<Node>,
    },
}

impl Node {
    /// Creates a variable node.
    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    /// Creates a binary operation node.
    pub fn binary(op: BinOpKind, left: Node, right: Node) -> Self {
        Self::Op {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Creates a function call node.
    pub fn call(name: impl Into<String>, args: Vec<Node>) -> Self {
        Self::Func { name: name.into(), args }
    }

    /// Creates the node `self ^ exponent`.
    pub fn pow(self, exponent: Node) -> Self {
        Self::binary(BinOpKind::Exp, self, exponent)
    }

    /// Creates the natural logarithm of this node, written as `log(self, e)`.
    pub fn ln(self) -> Self {
        Self::call("log", vec![self, Self::Const(consts::E)])
    }

    /// Returns the number of nodes in this tree, including itself.
    pub fn size(&self) -> usize {
        match self {
            Self::Const(_) | Self::Var(_) => 1,
            Self::Op { left, right, .. } => 1 + left.size() + right.size(),
            Self::Func { args, .. } => 1 + args.iter().map(Node::size).sum::<usize>(),
        }
    }
}

/// Implements a binary operator trait for [`Node`], building an [`Node::Op`].
macro_rules! impl_binary_op {
    ($($trait:ident $method:ident $kind:ident),* $(,)?) => {
        $(
            impl $trait for Node {
                type Output = Node;

                fn $method(self, rhs: Node) -> Node {
                    Node::binary(BinOpKind::$kind, self, rhs)
                }
            }
        )*
    };
}

impl_binary_op! {
    Add add Add,
    Sub sub Sub,
    Mul mul Mul,
    Div div Div,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn operators_build_nodes() {
        let node = Node::var("x") * Node::Const(2.0) + Node::var("y");
        assert_eq!(node, Node::binary(
            BinOpKind::Add,
            Node::binary(BinOpKind::Mul, Node::var("x"), Node::Const(2.0)),
            Node::var("y"),
        ));
    }

    #[test]
    fn clone_is_deep() {
        let original = Node::call("sin", vec![Node::var("x") / Node::Const(3.0)]);
        let mut copy = original.clone();
        if let Node::Func { args, .. } = &mut copy {
            args[0] = Node::Const(0.0);
        }

        assert_eq!(original, Node::call("sin", vec![Node::var("x") / Node::Const(3.0)]));
        assert_ne!(original, copy);
    }

    #[test]
    fn size() {
        let node = Node::var("x").pow(Node::Const(2.0)).ln();
        assert_eq!(node.size(), 5);
    }
}
