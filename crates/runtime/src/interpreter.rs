mod expr;
mod interp_errors;

pub use interp_errors::InterpreterError;

use crate::context::Context;
use crate::frontend::ast::{ASTNode, ExpressionKind};
use crate::values::Number;

/// Outcome of evaluating a node. `?` stops the evaluation on the first error.
pub type RunTimeResult = Result<Number, InterpreterError>;

/// Tree walking evaluator, nodes are evaluated depth first, left to right.
pub struct Interpreter {}

impl Interpreter {
    pub fn evaluate(&self, node: &ASTNode, context: &Context) -> RunTimeResult {
        match &node.node {
            ExpressionKind::NumberLiteral { token } => self.visit_number(token, node, context),
            ExpressionKind::BinaryOp { left, operator, right } => {
                self.visit_binary_op(left, operator, right, node, context)
            }
            ExpressionKind::UnaryOp { operator, operand } => {
                self.visit_unary_op(operator, operand, node, context)
            }
        }
    }
}
