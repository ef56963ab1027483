use std::fmt;

/// A function known to the parser. A name followed by `(` is parsed as a call only if it names
/// one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Sin,
    Cos,
    Tan,
    Exp,

    /// Logarithm of the first argument in the base given by the second, as in `log(8, 2) = 3`.
    Log,
}

impl Builtin {
    /// Every known function.
    pub const ALL: [Builtin; 5] = [Self::Sin, Self::Cos, Self::Tan, Self::Exp, Self::Log];

    /// Returns the function with the given name, if any.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|builtin| builtin.name() == name)
    }

    /// Returns the name of the function.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Exp => "exp",
            Self::Log => "log",
        }
    }

    /// Returns the number of arguments the function takes.
    pub fn arity(self) -> usize {
        match self {
            Self::Sin | Self::Cos | Self::Tan | Self::Exp => 1,
            Self::Log => 2,
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
