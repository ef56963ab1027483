//! Parser for arithmetic and trigonometric expressions such as `x^2 + sin(x) / log(x, 2)`.
//!
//! Parsing runs in four stages, each consuming the output of the previous one:
//!
//! 1. [`tokenizer`]: the source is split into numbers, operators, names, parentheses and commas.
//! 2. [`parser::priority`]: every token is given a priority made of the binding strength of the
//!    operator it represents plus an offset for each enclosing pair of parentheses.
//! 3. [`parser::filter`]: calls to known functions are tagged with the number of tokens their
//!    arguments span, then parentheses are dropped, since nesting is now fully captured by the
//!    priorities.
//! 4. [`parser::split`]: the stream is recursively split at its weakest-binding operator,
//!    producing an [`ExpressionTree`](parser::ast::ExpressionTree).
//!
//! ```
//! use calcdiff_parser::parser::{ast::Node, token::op::BinOpKind, Parser};
//!
//! let tree = Parser::new("2+3*4").try_parse_full().unwrap();
//! assert!(matches!(tree.root(), Node::Op { op: BinOpKind::Add, .. }));
//! ```

pub mod consts;
pub mod parser;
pub mod tokenizer;
