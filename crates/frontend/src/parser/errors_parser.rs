use thiserror::*;

use super::Token;
use tools::errors::ReportCodeErr;
use tools::position::Position;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParserError {
    #[error("Expected int or float")]
    ExpectedNumber { start: Position, end: Position },

    #[error("Expected ')'")]
    MissingCloseParen { start: Position, end: Position },

    // Complete expression followed by something else
    #[error("Expected '+', '-', '*' or '/'")]
    TrailingTokens { start: Position, end: Position },

    #[error("Expression nested too deeply")]
    TooDeep { start: Position, end: Position },
}

impl ParserError {
    pub fn expected_number(found: &Token) -> Self {
        Self::ExpectedNumber {
            start: found.start.clone(),
            end: found.end.clone(),
        }
    }

    pub fn missing_close_paren(found: &Token) -> Self {
        Self::MissingCloseParen {
            start: found.start.clone(),
            end: found.end.clone(),
        }
    }

    pub fn trailing_tokens(found: &Token) -> Self {
        Self::TrailingTokens {
            start: found.start.clone(),
            end: found.end.clone(),
        }
    }

    pub fn too_deep(found: &Token) -> Self {
        Self::TooDeep {
            start: found.start.clone(),
            end: found.end.clone(),
        }
    }
}

impl ReportCodeErr for ParserError {
    fn error_name(&self) -> &'static str {
        "InvalidSyntax"
    }

    fn span(&self) -> (&Position, &Position) {
        match self {
            ParserError::ExpectedNumber { start, end }
            | ParserError::MissingCloseParen { start, end }
            | ParserError::TrailingTokens { start, end }
            | ParserError::TooDeep { start, end } => (start, end),
        }
    }
}
