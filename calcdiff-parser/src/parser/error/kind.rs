use ariadne::Fmt;
use calcdiff_attrs::ErrorKind;
use calcdiff_error::{ErrorKind, EXPR};

/// A character outside the expression alphabet was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected character `{}`", character.escape_default()),
    labels = ["this character"],
    help = format!(
        "expressions may only contain numbers, names, the operators {}, parentheses and commas (without whitespace)",
        "+ - * / ^".fg(EXPR),
    ),
)]
pub struct InvalidCharacter {
    /// The character that was found.
    pub character: char,
}

/// An operator, comma, or the whole input had nothing to operate on.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
    help = format!("negative values must be written as a subtraction, such as {}", "0-x".fg(EXPR)),
)]
pub struct EmptyExpression;

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// Parentheses were nested deeper than operator priorities can represent.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "parentheses are nested too deeply",
    labels = ["this parenthesis"],
    help = format!("at most {} levels of parentheses are supported", max),
)]
pub struct NestingTooDeep {
    /// The maximum supported nesting depth.
    pub max: usize,
}

/// A run of digits and dots could not be read as a number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not a valid number", lexeme),
    labels = ["this number"],
    help = "numbers may contain at most one decimal point",
)]
pub struct InvalidNumber {
    /// The raw text of the number.
    pub lexeme: String,
}

/// A run of operator characters does not name a single operator.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not an operator", lexeme),
    labels = ["this operator"],
    help = format!(
        "operators cannot be written back to back; write {} instead of {}",
        "2*(0-3)".fg(EXPR),
        "2*-3".fg(EXPR),
    ),
)]
pub struct InvalidOperator {
    /// The raw text of the operator run.
    pub lexeme: String,
}

/// Two operands were found next to each other with no operator between them.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("expected an operator before or after `{}`", found),
    labels = ["this value"],
    help = format!(
        "values must be joined by one of {}, and functions called with parentheses, such as {}",
        "+ - * / ^".fg(EXPR),
        "sin(x)".fg(EXPR),
    ),
)]
pub struct ExpectedOperator {
    /// The operand that was found where an operator was expected.
    pub found: String,
}

/// A comma was found outside the argument list of a function call.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected comma",
    labels = ["this comma"],
    help = format!("commas may only separate function arguments, such as in {}", "log(8,2)".fg(EXPR)),
)]
pub struct MisplacedComma;
