use calcdiff_compute::numerical::{eval::Eval, resolver::Resolver};
use calcdiff_parser::parser::ast::ExpressionTree;
use rustyline::{error::ReadlineError, DefaultEditor};
use tracing::warn;

/// Asks on the terminal for the value of every variable the evaluator cannot find.
pub struct Prompt {
    editor: DefaultEditor,
}

impl Prompt {
    pub fn new() -> rustyline::Result<Self> {
        Ok(Self { editor: DefaultEditor::new()? })
    }
}

/// Parses the value typed for a variable: a number, or an expression made of numbers and named
/// constants, like `pi/2`.
fn parse_value(line: &str) -> Option<f64> {
    let line = line.trim();
    line.parse::<f64>()
        .ok()
        .or_else(|| line.parse::<ExpressionTree>().ok()?.eval_default().ok())
}

impl Resolver for Prompt {
    fn resolve(&mut self, name: &str) -> Option<f64> {
        loop {
            match self.editor.readline(&format!("Who is {}: ", name)) {
                Ok(line) => match parse_value(&line) {
                    Some(value) => return Some(value),
                    None => eprintln!("`{}` is not a number, try again", line.trim()),
                },
                Err(ReadlineError::Eof | ReadlineError::Interrupted) => return None,
                Err(err) => {
                    warn!(%err, "could not read the value of `{}`", name);
                    return None;
                },
            }
        }
    }
}
