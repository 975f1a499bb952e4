use thiserror::Error;

use tools::errors::{string_with_arrows, ReportCodeErr};
use tools::position::Position;

use crate::context::Context;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpreterError {
    #[error("Division by zero")]
    DivisionByZero {
        start: Position,
        end: Position,
        // Frame the division happened in
        context: Context,
    },
}

impl InterpreterError {
    pub fn context(&self) -> &Context {
        match self {
            InterpreterError::DivisionByZero { context, .. } => context,
        }
    }

    pub fn generate_traceback(&self) -> String {
        let (start, _) = self.span();

        format!(
            "Traceback (most recent call last):\n{}\n",
            self.context().trace_lines(start).join("\n")
        )
    }
}

impl ReportCodeErr for InterpreterError {
    fn error_name(&self) -> &'static str {
        "RuntimeError"
    }

    fn span(&self) -> (&Position, &Position) {
        match self {
            InterpreterError::DivisionByZero { start, end, .. } => (start, end),
        }
    }

    fn describe(&self) -> String {
        let (start, end) = self.span();

        format!(
            "{}{}: {}\n\n{}",
            self.generate_traceback(),
            self.error_name(),
            self,
            string_with_arrows(start, end)
        )
    }
}
