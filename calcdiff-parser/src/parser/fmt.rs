//! Textual renderings of expression trees: an indented dump for diagnostics, and an infix form
//! (the [`Display`] implementation) that parses back into the same tree.

use super::{ast::{ExpressionTree, Node}, token::op::BinOpKind, Associativity};
use std::fmt::{self, Display, Formatter, Write};

/// The text used to indent each level of a dump.
const INDENT: &str = "  ";

impl Node {
    /// Returns an indented rendering of the tree: the operator, function name, constant or
    /// variable of each node on its own line, with its children one level deeper beneath it.
    ///
    /// ```
    /// use calcdiff_parser::parser::Parser;
    ///
    /// let tree = Parser::new("2+sin(x)").try_parse_full().unwrap();
    /// assert_eq!(tree.dump(), "+\n  2\n  sin()\n    x");
    /// ```
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, 0);
        out
    }

    fn dump_into(&self, out: &mut String, depth: usize) {
        if depth > 0 {
            out.push('\n');
        }
        for _ in 0..depth {
            out.push_str(INDENT);
        }

        match self {
            Self::Const(value) => {
                // writing to a `String` cannot fail
                let _ = write!(out, "{}", value);
            },
            Self::Var(name) => out.push_str(name),
            Self::Op { op, left, right } => {
                out.push_str(op.symbol());
                left.dump_into(out, depth + 1);
                right.dump_into(out, depth + 1);
            },
            Self::Func { name, args } => {
                out.push_str(name);
                out.push_str("()");
                for arg in args {
                    arg.dump_into(out, depth + 1);
                }
            },
        }
    }
}

/// Returns true if `child` must be parenthesized when written as an operand of `parent`.
fn needs_paren(child: &Node, parent: BinOpKind, is_right: bool) -> bool {
    let Node::Op { op, .. } = child else {
        return false;
    };

    if op.priority() != parent.priority() {
        return op.priority() < parent.priority();
    }

    match parent.associativity() {
        Associativity::Left => is_right,
        Associativity::Right => !is_right,
    }
}

/// Writes `child` as an operand of `parent`, adding parentheses only where they are needed.
fn fmt_operand(f: &mut Formatter, child: &Node, parent: BinOpKind, is_right: bool) -> fmt::Result {
    if needs_paren(child, parent, is_right) {
        write!(f, "({})", child)
    } else {
        write!(f, "{}", child)
    }
}

/// Writes the node in infix form with as few parentheses as possible. The output parses back into
/// an equal tree as long as it needs no more than
/// [`MAX_DEPTH`](super::priority::MAX_DEPTH) levels of parentheses; deeply right-nested trees,
/// such as the derivative of `a-(b-(c-...))`, can exceed that and fail to parse with
/// [`NestingTooDeep`](super::error::kind::NestingTooDeep).
impl Display for Node {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            // the language has no negative literals
            Self::Const(value) if *value < 0.0 => write!(f, "(0-{})", -value),
            Self::Const(value) if *value == 0.0 => write!(f, "0"),
            Self::Const(value) => write!(f, "{}", value),
            Self::Var(name) => write!(f, "{}", name),
            Self::Op { op, left, right } => {
                fmt_operand(f, left, *op, false)?;
                write!(f, "{}", op)?;
                fmt_operand(f, right, *op, true)
            },
            Self::Func { name, args } => {
                write!(f, "{}(", name)?;
                if let Some((last, args)) = args.split_last() {
                    for arg in args {
                        write!(f, "{},", arg)?;
                    }
                    write!(f, "{}", last)?;
                }
                write!(f, ")")
            },
        }
    }
}

impl Display for ExpressionTree {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        self.root().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::parser::Parser;
    use super::*;

    fn parse(source: &str) -> ExpressionTree {
        Parser::new(source).try_parse_full().unwrap()
    }

    #[test]
    fn dump_nested() {
        let tree = parse("2+3*4");
        assert_eq!(tree.dump(), "+\n  2\n  *\n    3\n    4");
    }

    #[test]
    fn dump_call() {
        let tree = parse("log(x,2)^2");
        assert_eq!(tree.dump(), "^\n  log()\n    x\n    2\n  2");
    }

    #[test]
    fn dump_leaf() {
        assert_eq!(parse("2.5").dump(), "2.5");
        assert_eq!(parse("y").dump(), "y");
    }

    #[test]
    fn display_minimal_parens() {
        assert_eq!(parse("(2+3)*4").to_string(), "(2+3)*4");
        assert_eq!(parse("2+(3*4)").to_string(), "2+3*4");
        assert_eq!(parse("a-(b-c)").to_string(), "a-(b-c)");
        assert_eq!(parse("(a-b)-c").to_string(), "a-b-c");
        assert_eq!(parse("(a^b)^c").to_string(), "(a^b)^c");
        assert_eq!(parse("a^(b^c)").to_string(), "a^b^c");
        assert_eq!(parse("log((x+1),2)").to_string(), "log(x+1,2)");
    }

    #[test]
    fn display_negative_constant() {
        let node = Node::Const(-2.5) * Node::var("x");
        assert_eq!(node.to_string(), "(0-2.5)*x");
    }

    #[test]
    fn display_nesting_bound() {
        let mut node = Node::var("x");
        for _ in 0..21 {
            node = Node::var("a") - node;
        }
        let rendered = node.to_string();
        let err = Parser::new(&rendered).try_parse_full().unwrap_err();
        assert!(err.is::<crate::parser::error::kind::NestingTooDeep>());
    }

    #[test]
    fn round_trip() {
        for source in [
            "2+3*4",
            "(2+3)*4",
            "x^y^z",
            "(x^y)^z",
            "a-(b-c)/d",
            "sin(x)*cos(x^2)-tan(x/2)",
            "log(exp(x),e)+pi",
            "log(sin(x)+1,2)^(x-1)",
        ] {
            let tree = parse(source);
            let rendered = tree.to_string();
            assert_eq!(parse(&rendered), tree, "source: {}, rendered: {}", source, rendered);
        }
    }
}
