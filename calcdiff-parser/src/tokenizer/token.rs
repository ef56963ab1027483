use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
///
/// Consecutive characters of the same class are merged into one token, so `12.5` is a single
/// [`TokenKind::Number`], `sin` a single [`TokenKind::Name`], and `*-` a single
/// [`TokenKind::Op`] (which the parser later rejects). Parentheses and commas are always a token
/// of their own.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    #[regex(r"[0-9.]+")]
    Number,

    #[regex(r"[+\-*/^]+")]
    Op,

    #[regex(r"[a-zA-Z]+")]
    Name,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token(",")]
    Comma,
}

impl TokenKind {
    /// Returns true if the token is a parenthesis.
    pub fn is_paren(self) -> bool {
        matches!(self, TokenKind::OpenParen | TokenKind::CloseParen)
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns true if the token is a parenthesis.
    pub fn is_paren(&self) -> bool {
        self.kind.is_paren()
    }
}
