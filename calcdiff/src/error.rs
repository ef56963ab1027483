use ariadne::Source;
use calcdiff_error::Error as ExprError;
use std::io;

/// Utility enum to package errors that can occur while parsing / computing.
#[derive(Debug)]
pub enum Error {
    /// An error that occurred while parsing.
    Parse(ExprError),

    /// An error that occurred while differentiating or evaluating.
    Compute(ExprError),

    /// The output could not be written.
    Output(io::Error),
}

impl Error {
    /// Report the error to stderr.
    ///
    /// The `ariadne` crate's [`Report`](ariadne::Report) type does not have a `Display`
    /// implementation, so we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, input: &str) {
        match self {
            Self::Parse(err) | Self::Compute(err) => {
                let report = err.build_report("input");
                if let Err(io_err) = report.eprint(("input", Source::from(input))) {
                    eprintln!("failed to print error report: {}", io_err);
                }
            },
            Self::Output(err) => eprintln!("failed to write output: {}", err),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Output(err)
    }
}
