/// Default limit for nested user function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 256;

/// Name of the variable that receives the text read by `input(...)`.
pub const INPUT_VARIABLE: &str = "input_value";

/// Settings that influence how a program is executed.
///
/// The interpreter has no other configuration surface; the binary fills this
/// from its command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Maximum number of user function calls that may be active at once.
    /// Exceeding it aborts the run instead of exhausting the host stack.
    pub max_call_depth: usize,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self { max_call_depth: DEFAULT_MAX_CALL_DEPTH }
    }
}

impl InterpreterConfig {
    /// Returns a copy with a different call depth limit.
    ///
    /// # Example
    /// ```
    /// use arrowlang::config::InterpreterConfig;
    ///
    /// let config = InterpreterConfig::default().with_max_call_depth(8);
    /// assert_eq!(config.max_call_depth, 8);
    /// ```
    #[must_use]
    pub const fn with_max_call_depth(mut self, max_call_depth: usize) -> Self {
        self.max_call_depth = max_call_depth;
        self
    }
}
