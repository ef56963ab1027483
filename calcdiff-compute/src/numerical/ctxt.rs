use calcdiff_parser::consts;
use std::{collections::HashMap, fmt};
use super::resolver::Resolver;
use tracing::trace;

/// A context to use when evaluating an expression, providing the values of its variables.
///
/// A variable is looked up in this order: the named constants (`pi`, `e`), the variables added
/// with [`Ctxt::add_var`], then the [`Resolver`], if there is one.
#[derive(Default)]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, f64>,

    /// Asked for the value of variables that are not in `vars`.
    resolver: Option<Box<dyn Resolver>>,
}

impl fmt::Debug for Ctxt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ctxt")
            .field("vars", &self.vars)
            .field("resolver", &self.resolver.is_some())
            .finish()
    }
}

impl Ctxt {
    /// Creates a new context with no variables and no resolver.
    pub fn new() -> Ctxt {
        Ctxt::default()
    }

    /// Sets the resolver of the context, replacing any previous one.
    pub fn with_resolver(mut self, resolver: impl Resolver + 'static) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }

    /// Add a variable to the context.
    pub fn add_var(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_string(), value);
    }

    /// Get the value of a variable added to the context.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    /// Returns the value of the variable with the given name, asking the resolver if needed.
    pub fn resolve(&mut self, name: &str) -> Option<f64> {
        if let Some(value) = consts::lookup(name).or_else(|| self.get_var(name)) {
            return Some(value);
        }

        let value = self.resolver.as_mut()?.resolve(name);
        trace!(name, ?value, "resolved variable");
        value
    }
}
