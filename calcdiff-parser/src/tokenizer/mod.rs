pub mod token;

use crate::parser::error::{kind::InvalidCharacter, Error};
use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};
use tracing::trace;

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer, in source
/// order.
///
/// Fails on the first character that is not part of the expression alphabet (digits, `.`,
/// ASCII letters, `+-*/^`, parentheses and commas). Whitespace is not part of the alphabet.
pub fn tokenize_complete(input: &str) -> Result<Box<[Token]>, Error> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(kind) = lexer.next() {
        let span = lexer.span();
        match kind {
            Ok(kind) => tokens.push(Token {
                span,
                kind,
                lexeme: lexer.slice(),
            }),
            Err(()) => {
                // report the whole character, even if it spans multiple bytes
                let character = input[span.start..].chars().next().unwrap_or('\0');
                let span = span.start..span.start + character.len_utf8();
                return Err(Error::new(vec![span], InvalidCharacter { character }));
            },
        }
    }

    trace!(count = tokens.len(), "tokenized expression");
    Ok(tokens.into_boxed_slice())
}
