use thiserror::Error;

use frontend::ast::ASTNode;
use frontend::lexer::{scan, LexerError, Token};
use frontend::parser::{parse, ParserError};
use tools::errors::ReportCodeErr;
use tools::position::Position;

use crate::context::Context;
use crate::interpreter::{Interpreter, InterpreterError};
use crate::values::Number;

pub const ROOT_CONTEXT_NAME: &str = "<program>";

/// First error met by any stage of the pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArithError {
    #[error(transparent)]
    Lexer(#[from] LexerError),

    #[error(transparent)]
    Parser(#[from] ParserError),

    #[error(transparent)]
    Runtime(#[from] InterpreterError),
}

impl ReportCodeErr for ArithError {
    fn error_name(&self) -> &'static str {
        match self {
            ArithError::Lexer(e) => e.error_name(),
            ArithError::Parser(e) => e.error_name(),
            ArithError::Runtime(e) => e.error_name(),
        }
    }

    fn span(&self) -> (&Position, &Position) {
        match self {
            ArithError::Lexer(e) => e.span(),
            ArithError::Parser(e) => e.span(),
            ArithError::Runtime(e) => e.span(),
        }
    }

    fn describe(&self) -> String {
        match self {
            ArithError::Lexer(e) => e.describe(),
            ArithError::Parser(e) => e.describe(),
            ArithError::Runtime(e) => e.describe(),
        }
    }
}

/// Intermediate result handed to the observer of `run_with`.
pub enum Stage<'a> {
    Scanned(&'a [Token]),
    Parsed(&'a ASTNode),
}

/// Scans, parses and evaluates `text`. `file_name` only shows up in
/// diagnostics. A failing stage stops the pipeline.
pub fn run(file_name: &str, text: &str) -> Result<Number, ArithError> {
    run_with(file_name, text, |_| {})
}

/// Same as `run`, `inspect` sees the output of each stage before the next
/// one starts.
pub fn run_with<F>(file_name: &str, text: &str, mut inspect: F) -> Result<Number, ArithError>
where
    F: FnMut(Stage<'_>),
{
    let tokens = scan(file_name, text)?;
    inspect(Stage::Scanned(&tokens));

    let ast = parse(tokens)?;
    inspect(Stage::Parsed(&ast));

    let context = Context::new_root(ROOT_CONTEXT_NAME);
    let interp = Interpreter {};

    Ok(interp.evaluate(&ast, &context)?)
}
