pub mod kind;

pub use calcdiff_error::{Error, ErrorKind};
