use ariadne::Fmt;
use calcdiff_attrs::ErrorKind;
use calcdiff_error::{ErrorKind, EXPR};

/// There is no rule to differentiate the given function.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot differentiate the `{}` function", name),
    labels = ["this function call"],
    help = format!("only {} can be differentiated", "sin cos tan exp log".fg(EXPR)),
)]
pub struct UnsupportedDerivative {
    /// The name of the function.
    pub name: String,
}
