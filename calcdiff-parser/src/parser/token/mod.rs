//! Operator tokens recognized by the parser.

pub mod op;
