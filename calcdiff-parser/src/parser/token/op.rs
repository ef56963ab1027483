//! The binary operators of the expression language.

use crate::parser::Associativity;
use std::fmt;

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Exp,
}

impl BinOpKind {
    /// Returns the operator represented by the given lexeme, if any. Runs of several operator
    /// characters, such as `*-`, are not operators.
    pub fn from_lexeme(lexeme: &str) -> Option<Self> {
        match lexeme {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "^" => Some(Self::Exp),
            _ => None,
        }
    }

    /// Returns the symbol of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Exp => "^",
        }
    }

    /// Returns the base priority of the operator. A lower priority binds more weakly.
    pub fn priority(self) -> i32 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 10,
            Self::Exp => 20,
        }
    }

    /// Returns the associativity of the operator.
    pub fn associativity(self) -> Associativity {
        match self {
            Self::Exp => Associativity::Right,
            Self::Add | Self::Sub | Self::Mul | Self::Div => Associativity::Left,
        }
    }
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
