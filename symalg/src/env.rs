//! Variable bindings used to resolve free variables during evaluation.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A mapping from variable names to numeric values.
///
/// Evaluation only ever reads from an environment. A variable without a binding is not an error;
/// the evaluator leaves it symbolic, which is how partial evaluation works.
///
/// ```
/// use symalg::env::Environment;
///
/// let mut env = Environment::new();
/// env.add_var("x", 3.0);
/// assert_eq!(env.get_var("x"), Some(3.0));
/// assert_eq!(env.get_var("y"), None);
///
/// let env = Environment::from([("x", 1.0), ("y", 2.0)]);
/// assert_eq!(env.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Environment {
    /// The variables in the environment.
    vars: HashMap<String, f64>,
}

impl Environment {
    /// Creates a new empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable to the environment, replacing any previous binding with the same name.
    pub fn add_var(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_string(), value);
    }

    /// Returns the environment with the given variable added.
    pub fn with_var(mut self, name: &str, value: f64) -> Self {
        self.add_var(name, value);
        self
    }

    /// Get the value of a variable in the environment.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    /// Returns the variables in the environment.
    pub fn get_vars(&self) -> &HashMap<String, f64> {
        &self.vars
    }

    /// Returns the number of bound variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns true if no variables are bound.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Environment {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

impl<S: Into<String>, const N: usize> From<[(S, f64); N]> for Environment {
    fn from(vars: [(S, f64); N]) -> Self {
        vars.into_iter().collect()
    }
}
