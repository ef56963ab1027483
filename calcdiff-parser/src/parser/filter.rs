//! Tags function calls with the number of tokens their arguments span, then removes parentheses.
//!
//! After this pass, the parser no longer sees any parentheses: grouping is carried by the
//! priorities alone, and the extent of each call by its tag.

use crate::parser::ast::func::Builtin;
use crate::tokenizer::{Token, TokenKind};

/// A token that survived filtering, together with its priority.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<'source> {
    /// The token.
    pub token: Token<'source>,

    /// The priority of the token, including the offset of its enclosing parentheses.
    pub priority: i32,

    /// If the token is the name of a function call, the number of tokens that make up its
    /// arguments (commas and nested calls included, parentheses excluded). These are exactly
    /// the tokens that follow it in the filtered stream.
    pub arity: Option<usize>,
}

impl Ranked<'_> {
    /// Returns the number of tokens this token covers in the filtered stream, including itself.
    pub fn extent(&self) -> usize {
        1 + self.arity.unwrap_or(0)
    }
}

/// Returns the number of argument tokens of the call starting at `tokens[index]`, or [`None`] if
/// the token there does not start a call to a known function.
///
/// The parentheses of `tokens` must be balanced.
fn call_arity(tokens: &[Token], index: usize) -> Option<usize> {
    let token = &tokens[index];
    if token.kind != TokenKind::Name || Builtin::from_name(token.lexeme).is_none() {
        return None;
    }
    if tokens.get(index + 1)?.kind != TokenKind::OpenParen {
        return None;
    }

    let mut balance = 1;
    let mut count = 0;
    for token in &tokens[index + 2..] {
        match token.kind {
            TokenKind::OpenParen => balance += 1,
            TokenKind::CloseParen => {
                balance -= 1;
                if balance == 0 {
                    break;
                }
            },
            _ => count += 1,
        }
    }

    Some(count)
}

/// Pairs each token with its priority, tags function calls with their arity, and drops
/// parentheses.
///
/// `tokens` and `priorities` must have the same length, and the parentheses of `tokens` must be
/// balanced, as guaranteed by [`assign_priorities`](super::priority::assign_priorities).
pub fn filter_parens<'source>(tokens: &[Token<'source>], priorities: &[i32]) -> Vec<Ranked<'source>> {
    debug_assert_eq!(tokens.len(), priorities.len());

    tokens.iter()
        .zip(priorities)
        .enumerate()
        .filter(|(_, (token, _))| !token.is_paren())
        .map(|(index, (token, &priority))| Ranked {
            token: token.clone(),
            priority,
            arity: call_arity(tokens, index),
        })
        .collect()
}
