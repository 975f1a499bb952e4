pub mod context;
pub mod interpreter;
mod pipeline;
pub mod values;

extern crate tools;
extern crate frontend;

pub use frontend::{
    ast::{ASTNode, ExpressionKind},
    lexer::{Token, TokenKind},
};
pub use pipeline::{run, run_with, ArithError, Stage, ROOT_CONTEXT_NAME};
