//! Builds an expression tree from a filtered token stream by recursively splitting it at its
//! weakest-binding operator.

use crate::consts;
use crate::parser::{
    ast::Node,
    error::{
        kind::{EmptyExpression, ExpectedOperator, InvalidNumber, InvalidOperator, MisplacedComma},
        Error,
    },
    filter::Ranked,
    priority::PAREN_OFFSET,
    token::op::BinOpKind,
    Associativity,
};
use crate::tokenizer::TokenKind;
use std::ops::Range;

/// Returns true if `candidate` should replace `current` as the split point, where `candidate`
/// comes after `current` in the stream.
///
/// The lowest priority wins. Between operators of equal priority, the rightmost is chosen for
/// left-associative operators so that `a-b-c` splits into `(a-b)-c`, and the leftmost for the
/// right-associative `^`. Ties between operands keep the leftmost.
fn replaces(candidate: &Ranked, current: &Ranked) -> bool {
    if candidate.priority != current.priority {
        return candidate.priority < current.priority;
    }

    candidate.token.kind == TokenKind::Op
        && BinOpKind::from_lexeme(candidate.token.lexeme)
            .is_some_and(|op| op.associativity() == Associativity::Left)
}

/// Returns the index of the token to split the stream at. Tokens inside the arguments of a call
/// are skipped, so only the call itself can be chosen.
///
/// The stream must not be empty.
fn split_position(items: &[Ranked]) -> usize {
    let mut best = 0;
    let mut index = items[0].extent();
    while index < items.len() {
        if replaces(&items[index], &items[best]) {
            best = index;
        }
        index += items[index].extent();
    }
    best
}

/// Checks the tokens that are not inside the arguments of a call for commas and for runs of
/// operator characters that do not form an operator.
fn check_top_level(items: &[Ranked]) -> Result<(), Error> {
    let mut index = 0;
    while index < items.len() {
        let token = &items[index].token;
        match token.kind {
            TokenKind::Comma => return Err(Error::new(vec![token.span.clone()], MisplacedComma)),
            TokenKind::Op if BinOpKind::from_lexeme(token.lexeme).is_none() => {
                return Err(Error::new(vec![token.span.clone()], InvalidOperator {
                    lexeme: token.lexeme.to_string(),
                }));
            },
            _ => (),
        }
        index += items[index].extent();
    }
    Ok(())
}

/// Parses a single token that is not a function call.
fn parse_operand(item: &Ranked) -> Result<Node, Error> {
    let token = &item.token;
    match token.kind {
        TokenKind::Number => token.lexeme
            .parse::<f64>()
            .map(Node::Const)
            .map_err(|_| Error::new(vec![token.span.clone()], InvalidNumber {
                lexeme: token.lexeme.to_string(),
            })),
        TokenKind::Name => Ok(consts::lookup(token.lexeme)
            .map_or_else(|| Node::var(token.lexeme), Node::Const)),
        TokenKind::Comma => Err(Error::new(vec![token.span.clone()], MisplacedComma)),
        TokenKind::Op if BinOpKind::from_lexeme(token.lexeme).is_none() => {
            Err(Error::new(vec![token.span.clone()], InvalidOperator {
                lexeme: token.lexeme.to_string(),
            }))
        },
        TokenKind::Op | TokenKind::OpenParen | TokenKind::CloseParen => {
            Err(Error::new(vec![token.span.clone()], EmptyExpression))
        },
    }
}

/// Parses a call to `func`, whose argument tokens are exactly `rest`. The arguments are separated
/// by the commas of `rest` that sit directly inside the call's parentheses; a comma inside further
/// grouping parentheses is misplaced, and commas of nested calls are left to those calls.
fn parse_call(func: &Ranked, rest: &[Ranked]) -> Result<Node, Error> {
    let mut args = Vec::new();
    if rest.is_empty() {
        return Ok(Node::call(func.token.lexeme, args));
    }

    let separator_priority = func.priority + PAREN_OFFSET;
    let mut start = 0;
    let mut separator = func.token.span.clone();
    let mut index = 0;
    while index < rest.len() {
        let item = &rest[index];
        if item.token.kind == TokenKind::Comma {
            if item.priority != separator_priority {
                return Err(Error::new(vec![item.token.span.clone()], MisplacedComma));
            }
            args.push(parse_span(&rest[start..index], separator)?);
            separator = item.token.span.clone();
            start = index + 1;
        }
        index += item.extent();
    }
    args.push(parse_span(&rest[start..], separator)?);

    Ok(Node::call(func.token.lexeme, args))
}

/// Parses the given stream of filtered tokens into a tree.
///
/// `at` is the span reported if the stream is empty; it should point at whatever expected the
/// missing expression (an operator, a comma, or the end of the input).
pub fn parse_span(items: &[Ranked], at: Range<usize>) -> Result<Node, Error> {
    let Some(first) = items.first() else {
        return Err(Error::new(vec![at], EmptyExpression));
    };

    if first.arity.is_some_and(|arity| items.len() == arity + 1) {
        return parse_call(first, &items[1..]);
    }

    if items.len() == 1 {
        return parse_operand(first);
    }

    check_top_level(items)?;

    let position = split_position(items);
    let pivot = &items[position].token;
    let Some(op) = BinOpKind::from_lexeme(pivot.lexeme).filter(|_| pivot.kind == TokenKind::Op) else {
        return Err(Error::new(vec![pivot.span.clone()], ExpectedOperator {
            found: pivot.lexeme.to_string(),
        }));
    };

    let left = parse_span(&items[..position], pivot.span.clone())?;
    let right = parse_span(&items[position + 1..], pivot.span.clone())?;
    Ok(Node::binary(op, left, right))
}
