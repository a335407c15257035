//! # arrowlang
//!
//! arrowlang is an interpreter for a small, line-oriented scripting language.
//! A program assigns values with `->`, prints with `print(...)`, reads lines
//! with `input("prompt")` and declares functions with
//! `function name(params) { ... }`.
//!
//! ```text
//! function greet(who) {
//!     print("Hello, " + who + "!")
//! }
//! input("Your name?")
//! greet(input_value)
//! total -> 2 + 3 * 4
//! print(total)
//! ```
//!
//! Source text runs through three phases: the lexer, the parser and the
//! evaluator. Any error in any phase aborts the whole run.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{BufRead, Write};

use tracing::debug;

use crate::{
    ast::Program,
    config::InterpreterConfig,
    error::Error,
    interpreter::{evaluator::core::Context, lexer::tokenize, parser::core::parse_program},
};

/// Defines the structure of parsed code.
///
/// This module declares the instructions, expressions and function
/// definitions produced by the parser and executed by the evaluator.
pub mod ast;
/// Settings for a run.
///
/// Holds the call depth limit and the name of the variable bound by
/// `input(...)`.
pub mod config;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised during a run. Every
/// error carries the source line it refers to and a human readable
/// description.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Classifies errors into kinds.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations.
pub mod interpreter;
/// General utilities for numeric formatting.
pub mod util;

/// Lexes and parses source text without running it.
///
/// # Errors
/// Returns a lexing or syntax error.
///
/// # Example
/// ```
/// use arrowlang::{error::ErrorKind, parse_source};
///
/// assert!(parse_source("x -> 1 print(x)").is_ok());
/// assert_eq!(parse_source("print(1").unwrap_err().kind(), ErrorKind::Syntax);
/// assert_eq!(parse_source("x -> 1 ; y -> 2").unwrap_err().kind(), ErrorKind::Lex);
/// ```
pub fn parse_source(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source)?;
    Ok(parse_program(&tokens)?)
}

/// Runs a program against the given channels.
///
/// The whole source is lexed and parsed before the first instruction runs,
/// so a lexing or syntax error anywhere produces no output at all.
///
/// # Errors
/// Returns the first error of any phase.
///
/// # Examples
/// ```
/// use std::io::empty;
///
/// use arrowlang::{config::InterpreterConfig, error::ErrorKind, run};
///
/// let mut output = Vec::new();
/// run("x -> 2 + 3 * 4 print(x)", &mut empty(), &mut output, InterpreterConfig::default()).unwrap();
/// assert_eq!(output, b"14\n");
///
/// let mut output = Vec::new();
/// let err = run("print(5 / 0)", &mut empty(), &mut output, InterpreterConfig::default());
/// assert_eq!(err.unwrap_err().kind(), ErrorKind::Arithmetic);
/// assert!(output.is_empty());
/// ```
pub fn run(source: &str,
           input: &mut dyn BufRead,
           output: &mut dyn Write,
           config: InterpreterConfig)
           -> Result<(), Error> {
    let program = parse_source(source)?;
    debug!(max_call_depth = config.max_call_depth, "starting execution");

    let mut context = Context::new(input, output, config);
    context.execute(&program)?;
    Ok(())
}

/// Runs a program against standard input and standard output with the
/// default configuration.
///
/// # Errors
/// Returns an error if lexing, parsing, or execution fails.
///
/// # Example
/// ```
/// use arrowlang::get_result;
///
/// // Prints `4` to standard output.
/// assert!(get_result("print(2 + 2)").is_ok());
///
/// // `y` is never assigned.
/// assert!(get_result("x -> y + 1").is_err());
/// ```
pub fn get_result(source: &str) -> Result<(), Error> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(source, &mut stdin.lock(), &mut stdout.lock(), InterpreterConfig::default())
}
