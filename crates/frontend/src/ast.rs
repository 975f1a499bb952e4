use std::fmt::Display;

use tools::position::Position;

use crate::lexer::Token;

/// Expression node along with the span of the source it was built from.
#[derive(Debug, PartialEq, Clone)]
pub struct ASTNode {
    pub node: ExpressionKind,
    pub start: Position,
    pub end: Position,
}

#[derive(Debug, PartialEq, Clone)]
pub enum ExpressionKind {
    NumberLiteral {
        token: Token,
    },
    BinaryOp {
        left: Box<ASTNode>,
        operator: Token,
        right: Box<ASTNode>,
    },
    UnaryOp {
        operator: Token,
        operand: Box<ASTNode>,
    },
}

impl ASTNode {
    pub fn new_number(token: Token) -> Self {
        let (start, end) = (token.start.clone(), token.end.clone());

        Self {
            node: ExpressionKind::NumberLiteral { token },
            start,
            end,
        }
    }

    // Spans from the start of left to the end of right
    pub fn new_binary_op(left: ASTNode, operator: Token, right: ASTNode) -> Self {
        let (start, end) = (left.start.clone(), right.end.clone());

        Self {
            node: ExpressionKind::BinaryOp {
                left: Box::new(left),
                operator,
                right: Box::new(right),
            },
            start,
            end,
        }
    }

    // Spans from the operator to the end of the operand
    pub fn new_unary_op(operator: Token, operand: ASTNode) -> Self {
        let (start, end) = (operator.start.clone(), operand.end.clone());

        Self {
            node: ExpressionKind::UnaryOp {
                operator,
                operand: Box::new(operand),
            },
            start,
            end,
        }
    }
}

impl Display for ASTNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.node {
            ExpressionKind::NumberLiteral { token } => write!(f, "{}", token),
            ExpressionKind::BinaryOp { left, operator, right } => {
                write!(f, "({}, {}, {})", left, operator, right)
            }
            ExpressionKind::UnaryOp { operator, operand } => {
                write!(f, "({}, {})", operator, operand)
            }
        }
    }
}
