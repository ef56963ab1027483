//! Assigns every token a priority combining operator binding strength with parenthesis depth.
//!
//! The priority of a token is its base priority (see [`BinOpKind::priority`], or
//! [`OPERAND_PRIORITY`] for anything that is not an operator) plus [`PAREN_OFFSET`] for each
//! enclosing pair of parentheses. The offset is adjusted *before* a parenthesis token receives its
//! own priority, so an opening parenthesis already counts its own depth.
//!
//! Nesting is bounded by [`MAX_DEPTH`]: up to that depth every operator has a lower priority than
//! every operand, and an operator one level deeper than another always has a higher priority,
//! since [`PAREN_OFFSET`] exceeds the spread of operator base priorities.

use crate::parser::error::{kind::{NestingTooDeep, UnclosedParenthesis}, Error};
use crate::parser::token::op::BinOpKind;
use crate::tokenizer::{Token, TokenKind};
use std::ops::Range;

/// The priority of any token that is not an operator.
pub const OPERAND_PRIORITY: i32 = 1000;

/// The priority added for each enclosing pair of parentheses.
pub const PAREN_OFFSET: i32 = 50;

/// The deepest supported parenthesis nesting.
pub const MAX_DEPTH: usize = ((OPERAND_PRIORITY - 1) / PAREN_OFFSET) as usize;

/// Returns the priority of the token ignoring any parentheses around it.
pub fn base_priority(token: &Token) -> i32 {
    match token.kind {
        TokenKind::Op => BinOpKind::from_lexeme(token.lexeme)
            .map_or(OPERAND_PRIORITY, BinOpKind::priority),
        _ => OPERAND_PRIORITY,
    }
}

/// Returns the priority of each token, in the same order.
///
/// Fails if the parentheses are unbalanced or nested deeper than [`MAX_DEPTH`].
pub fn assign_priorities(tokens: &[Token]) -> Result<Vec<i32>, Error> {
    let mut offset = 0;
    let mut open: Vec<Range<usize>> = Vec::new();
    let mut priorities = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token.kind {
            TokenKind::OpenParen => {
                open.push(token.span.clone());
                if open.len() > MAX_DEPTH {
                    return Err(Error::new(vec![token.span.clone()], NestingTooDeep { max: MAX_DEPTH }));
                }
                offset += PAREN_OFFSET;
            },
            TokenKind::CloseParen => {
                if open.pop().is_none() {
                    return Err(Error::new(vec![token.span.clone()], UnclosedParenthesis { opening: false }));
                }
                offset -= PAREN_OFFSET;
            },
            _ => (),
        }

        priorities.push(offset + base_priority(token));
    }

    if let Some(span) = open.pop() {
        return Err(Error::new(vec![span], UnclosedParenthesis { opening: true }));
    }

    Ok(priorities)
}
