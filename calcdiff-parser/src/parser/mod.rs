pub mod ast;
pub mod error;
pub mod filter;
pub mod fmt;
pub mod priority;
pub mod split;
pub mod token;

use ast::ExpressionTree;
use error::Error;
use super::tokenizer::tokenize_complete;
use std::ops::Range;
use tracing::{debug, trace};

/// A high-level parser for the expression language. This is the type to use to parse an
/// arbitrary expression into an [`ExpressionTree`].
///
/// The input is assumed to be a single expression with no whitespace. Malformed input is
/// reported as an [`Error`] pointing at the offending region of the source.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The source code being parsed.
    source: &'source str,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self { source }
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.source.len()..self.source.len()
    }

    /// Parses the whole source into an expression tree.
    pub fn try_parse_full(&self) -> Result<ExpressionTree, Error> {
        let tokens = tokenize_complete(self.source)?;
        let priorities = priority::assign_priorities(&tokens)?;
        debug!(
            tokens = ?tokens.iter().map(|token| token.lexeme).collect::<Vec<_>>(),
            ?priorities,
            "assigned priorities"
        );

        let ranked = filter::filter_parens(&tokens, &priorities);
        trace!(
            calls = ?ranked.iter()
                .filter_map(|item| item.arity.map(|arity| (item.token.lexeme, arity)))
                .collect::<Vec<_>>(),
            "filtered parentheses"
        );
        let root = split::parse_span(&ranked, self.eof_span())?;
        debug!(nodes = root.size(), "parsed expression");

        Ok(ExpressionTree::new(root))
    }
}

/// The associativity of a binary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// The binary operation is left-associative.
    ///
    /// This means `a op b op c` is evaluated as `(a op b) op c`.
    Left,

    /// The binary operation is right-associative.
    ///
    /// This means `a op b op c` is evaluated as `a op (b op c)`.
    Right,
}
