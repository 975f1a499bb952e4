use frontend::lexer::{Token, TokenKind};

use super::{Interpreter, RunTimeResult};
use crate::context::Context;
use crate::frontend::ast::ASTNode;
use crate::values::{Number, NumericValue};

impl Interpreter {
    pub(super) fn visit_number(
        &self,
        token: &Token,
        node: &ASTNode,
        context: &Context,
    ) -> RunTimeResult {
        let Some(literal) = token.value else {
            unreachable!("number node built from a {} token", token.kind)
        };

        Ok(Number::new(
            NumericValue::from(literal),
            node.start.clone(),
            node.end.clone(),
            context.clone(),
        ))
    }

    pub(super) fn visit_binary_op(
        &self,
        left: &ASTNode,
        operator: &Token,
        right: &ASTNode,
        node: &ASTNode,
        context: &Context,
    ) -> RunTimeResult {
        let lhs = self.evaluate(left, context)?;
        let rhs = self.evaluate(right, context)?;

        let result = lhs.calculate(&rhs, &operator.kind)?;

        Ok(result.set_pos(node.start.clone(), node.end.clone()))
    }

    pub(super) fn visit_unary_op(
        &self,
        operator: &Token,
        operand: &ASTNode,
        node: &ASTNode,
        context: &Context,
    ) -> RunTimeResult {
        let mut number = self.evaluate(operand, context)?;

        // Negation is a multiplication by -1
        if operator.kind == TokenKind::Minus {
            let minus_one = Number::new(
                NumericValue::Int(-1),
                operator.start.clone(),
                operator.end.clone(),
                context.clone(),
            );
            number = number.calculate(&minus_one, &TokenKind::Mul)?;
        }

        Ok(number.set_pos(node.start.clone(), node.end.clone()))
    }
}
