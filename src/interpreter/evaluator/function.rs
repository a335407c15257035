use std::collections::HashMap;

use tracing::trace;

use crate::{
    ast::{Expression, FunctionDef, Instruction},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{core::EvalResult, expression::evaluate},
    },
};

/// One activation: an environment and the position inside the instructions
/// it is executing.
#[derive(Debug)]
pub struct Frame<'p> {
    /// Variables visible to the instructions of this frame.
    pub environment: Environment,
    /// Name of the called function, `None` for the top level.
    pub function:    Option<&'p str>,
    body:            &'p [Instruction],
    next:            usize,
}

impl<'p> Frame<'p> {
    /// Creates a frame positioned at the first instruction of `body`.
    #[must_use]
    pub const fn new(environment: Environment,
                     body: &'p [Instruction],
                     function: Option<&'p str>)
                     -> Self {
        Self { environment,
               function,
               body,
               next: 0 }
    }

    /// Returns the next instruction and advances past it, or `None` once the
    /// frame has run to completion.
    pub fn next_instruction(&mut self) -> Option<&'p Instruction> {
        let instruction = self.body.get(self.next)?;
        self.next += 1;
        Some(instruction)
    }
}

/// The frames of a run.
///
/// The top-level frame owns the global environment and is always present.
/// Every active user function call adds one frame on top of it, up to
/// `max_depth` of them.
#[derive(Debug)]
pub struct CallStack<'p> {
    globals:   Frame<'p>,
    calls:     Vec<Frame<'p>>,
    max_depth: usize,
}

impl<'p> CallStack<'p> {
    /// Creates a stack executing `instructions` against `globals`.
    #[must_use]
    pub const fn new(globals: Environment, instructions: &'p [Instruction], max_depth: usize) -> Self {
        Self { globals: Frame::new(globals, instructions, None),
               calls: Vec::new(),
               max_depth }
    }

    /// Number of active function calls.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.calls.len()
    }

    /// The innermost frame.
    pub fn current(&mut self) -> &mut Frame<'p> {
        self.calls.last_mut().unwrap_or(&mut self.globals)
    }

    /// Enters a function call.
    ///
    /// # Errors
    /// `CallDepthExceeded` if `max_depth` calls are already active.
    pub fn push(&mut self, frame: Frame<'p>, line: usize) -> EvalResult<()> {
        if self.calls.len() >= self.max_depth {
            return Err(RuntimeError::CallDepthExceeded { max: self.max_depth,
                                                         line });
        }
        self.calls.push(frame);
        Ok(())
    }

    /// Leaves the innermost function call. Returns `None` if only the
    /// top-level frame is left.
    pub fn pop(&mut self) -> Option<Frame<'p>> {
        self.calls.pop()
    }

    /// Consumes the stack and hands back the global environment.
    #[must_use]
    pub fn into_globals(self) -> Environment {
        self.globals.environment
    }
}

/// Prepares a user function call and pushes its frame.
///
/// The steps happen in this order:
///
/// 1. the function is looked up,
/// 2. the number of arguments is checked against the parameters,
/// 3. every argument is evaluated in the caller's environment,
/// 4. a fresh environment holding only the parameters is created,
/// 5. a frame for the body is pushed.
///
/// Nothing flows back from the call: the frame's environment is dropped when
/// its body has run.
///
/// # Errors
/// - `FunctionNotFound` if no function has this name.
/// - `ArityMismatch` if the argument count differs from the parameter count.
/// - Any error from evaluating an argument.
/// - `CallDepthExceeded` if the call would nest too deeply.
pub fn enter_function<'p>(stack: &mut CallStack<'p>,
                          functions: &'p HashMap<String, FunctionDef>,
                          name: &str,
                          arguments: &[Expression],
                          line: usize)
                          -> EvalResult<()> {
    let func = functions.get(name)
                        .ok_or_else(|| RuntimeError::FunctionNotFound { name: name.to_string(),
                                                                        line })?;

    if arguments.len() != func.params.len() {
        return Err(RuntimeError::ArityMismatch { name: name.to_string(),
                                                 expected: func.params.len(),
                                                 found: arguments.len(),
                                                 line });
    }

    let caller = &stack.current().environment;
    let values = arguments.iter()
                          .map(|argument| evaluate(argument, caller))
                          .collect::<EvalResult<Vec<_>>>()?;

    let environment = Environment::with_bindings(func.params.iter().cloned().zip(values));

    trace!(function = %func.name, depth = stack.depth() + 1, line, "entering function");
    stack.push(Frame::new(environment, &func.body, Some(&func.name)), line)
}
