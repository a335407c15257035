use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// A mapping from variable names to values.
///
/// One environment holds the globals for the whole run. Every function call
/// gets a fresh one containing only its parameters, which is dropped when
/// the call returns. Environments never look into each other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment holding exactly the given bindings.
    ///
    /// When a name appears more than once, the last binding wins.
    ///
    /// # Example
    /// ```
    /// use arrowlang::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let env = Environment::with_bindings(vec![("a".to_string(), Value::from(1)),
    ///                                           ("b".to_string(), Value::from("two"))]);
    ///
    /// assert_eq!(env.get("a"), Some(&Value::from(1)));
    /// assert_eq!(env.get("c"), None);
    /// assert_eq!(env.len(), 2);
    /// ```
    #[must_use]
    pub fn with_bindings(bindings: impl IntoIterator<Item = (String, Value)>) -> Self {
        Self { variables: bindings.into_iter().collect() }
    }

    /// Looks up a variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Binds or rebinds a variable.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether no variable is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
