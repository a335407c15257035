use std::{
    collections::HashMap,
    io::{BufRead, Write},
};

use tracing::{debug, trace};

use crate::{
    ast::{FunctionDef, Instruction, Program},
    config::{INPUT_VARIABLE, InterpreterConfig},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            expression::evaluate,
            function::{CallStack, enter_function},
        },
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime execution context.
///
/// This struct holds the global environment together with the channels
/// the program talks to: `print` writes lines to `output`, `input` writes
/// its prompt to `output` and reads a line from `input`.
///
/// ## Usage
///
/// A `Context` is created once per run. The global environment stays
/// available after [`Context::execute`] returns, including after an error.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// use arrowlang::{
///     config::InterpreterConfig,
///     interpreter::{
///         evaluator::core::Context, lexer::tokenize, parser::core::parse_program,
///         value::core::Value,
///     },
/// };
///
/// let tokens = tokenize("input(\"Name?\") greeting -> \"Hello, \" + input_value print(greeting)").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// let mut input = Cursor::new("Ada\n");
/// let mut output = Vec::new();
/// let mut context = Context::new(&mut input, &mut output, InterpreterConfig::default());
/// context.execute(&program).unwrap();
///
/// assert_eq!(context.globals.get("input_value"), Some(&Value::from("Ada")));
/// drop(context);
/// assert_eq!(String::from_utf8(output).unwrap(), "Name? Hello, Ada\n");
/// ```
pub struct Context<'io> {
    /// Variables bound at the top level.
    pub globals: Environment,
    config:      InterpreterConfig,
    input:       &'io mut dyn BufRead,
    output:      &'io mut dyn Write,
}

impl<'io> Context<'io> {
    /// Creates a new context with an empty global environment.
    #[must_use]
    pub fn new(input: &'io mut dyn BufRead,
               output: &'io mut dyn Write,
               config: InterpreterConfig)
               -> Self {
        Self { globals: Environment::new(),
               config,
               input,
               output }
    }

    /// Executes a program.
    ///
    /// Instructions run strictly in order. Function calls push a frame onto
    /// an explicit call stack instead of recursing, so the nesting depth is
    /// bounded by [`InterpreterConfig::max_call_depth`].
    ///
    /// # Errors
    /// The first `RuntimeError` aborts the run. Output written before it
    /// stays written.
    pub fn execute(&mut self, program: &Program) -> EvalResult<()> {
        let globals = std::mem::take(&mut self.globals);
        let mut stack = CallStack::new(globals, &program.instructions, self.config.max_call_depth);

        let result = self.run(&mut stack, &program.functions);
        if let Err(e) = &result {
            debug!(error = %e, depth = stack.depth(), "execution aborted");
        }

        self.globals = stack.into_globals();
        result
    }

    /// Runs frames until the top-level frame is exhausted.
    fn run<'p>(&mut self,
               stack: &mut CallStack<'p>,
               functions: &'p HashMap<String, FunctionDef>)
               -> EvalResult<()> {
        loop {
            let Some(instruction) = stack.current().next_instruction() else {
                match stack.pop() {
                    Some(frame) => {
                        trace!(function = frame.function.unwrap_or_default(), "leaving function");
                        continue;
                    },
                    None => return Ok(()),
                }
            };

            self.eval_instruction(instruction, stack, functions)?;
        }
    }

    /// Executes a single instruction in the innermost frame.
    ///
    /// A call only pushes the callee's frame; its body runs on the following
    /// iterations of [`Context::run`].
    fn eval_instruction<'p>(&mut self,
                            instruction: &'p Instruction,
                            stack: &mut CallStack<'p>,
                            functions: &'p HashMap<String, FunctionDef>)
                            -> EvalResult<()> {
        match instruction {
            Instruction::Assign { name, value, .. } => {
                let frame = stack.current();
                let value = evaluate(value, &frame.environment)?;
                frame.environment.set(name.clone(), value);
            },
            Instruction::Output { value, line } => {
                let value = evaluate(value, &stack.current().environment)?;
                self.write_line(&value, *line)?;
            },
            Instruction::Input { prompt, line } => {
                let text = self.read_line(prompt, *line)?;
                stack.current().environment.set(INPUT_VARIABLE, Value::Text(text));
            },
            Instruction::Call { name,
                                arguments,
                                line, } => enter_function(stack, functions, name, arguments, *line)?,
        }
        Ok(())
    }

    /// Writes the textual representation of a value as one line.
    fn write_line(&mut self, value: &Value, line: usize) -> EvalResult<()> {
        writeln!(self.output, "{value}").and_then(|()| self.output.flush())
                                        .map_err(|e| RuntimeError::Io { details: e.to_string(),
                                                                        line })
    }

    /// Writes `prompt` followed by a space, then blocks until one line is
    /// available on the input channel. The line break is not part of the
    /// result.
    ///
    /// # Errors
    /// - `InputClosed` if the input channel is exhausted.
    /// - `Io` if a channel reports a failure.
    fn read_line(&mut self, prompt: &str, line: usize) -> EvalResult<String> {
        let io_error = |e: std::io::Error| RuntimeError::Io { details: e.to_string(),
                                                              line };

        write!(self.output, "{prompt} ").map_err(io_error)?;
        self.output.flush().map_err(io_error)?;

        let mut text = String::new();
        if self.input.read_line(&mut text).map_err(io_error)? == 0 {
            return Err(RuntimeError::InputClosed { line });
        }

        if text.ends_with('\n') {
            text.pop();
            if text.ends_with('\r') {
                text.pop();
            }
        }
        Ok(text)
    }
}
