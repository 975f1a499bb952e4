mod errors_parser;

pub use crate::ast::{ASTNode, ExpressionKind};
pub use crate::lexer::{Token, TokenKind};

pub use self::errors_parser::ParserError;

/// Outcome of any parsing rule. `?` hands the first error up untouched and
/// drops whatever part of the tree was already built.
pub type ParseResult<T = ASTNode> = Result<T, ParserError>;

// Rule used on each side of a binary operator
type SubRule = fn(&mut Parser) -> ParseResult;

/// Deepest tree the parser builds. Parsing, evaluating and dropping the tree
/// all recurse once per level.
pub const MAX_DEPTH: usize = 512;

/// Recursive descent parser with one token of lookahead.
///
/// Grammar:
/// ```text
/// expr    := term (('+' | '-') term)*
/// term    := factor (('*' | '/') factor)*
/// factor  := ('+' | '-') factor
///          | INT | FLOAT
///          | '(' expr ')'
/// ```
pub struct Parser {
    // Always ends with an EOF token
    tokens: Vec<Token>,
    tok_idx: usize,
    // Levels of the tree above the rule being parsed
    depth: usize,
}

impl Parser {
    /// `tokens` must be a lexer output, ending with its EOF token.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            tok_idx: 0,
            depth: 0,
        }
    }

    pub fn build_ast(&mut self) -> ParseResult {
        let expr = self.parse_additive_expr()?;

        // Everything must have been consumed
        if self.at().kind != TokenKind::EOF {
            return Err(ParserError::trailing_tokens(self.at()));
        }

        Ok(expr)
    }

    fn parse_additive_expr(&mut self) -> ParseResult {
        let operators = [TokenKind::Plus, TokenKind::Minus];
        self.parse_binary_op(Self::parse_multiplicative_expr, &operators)
    }

    fn parse_multiplicative_expr(&mut self) -> ParseResult {
        let operators = [TokenKind::Mul, TokenKind::Div];
        self.parse_binary_op(Self::parse_factor, &operators)
    }

    // Left associative: 1 - 2 - 3 is (1 - 2) - 3
    fn parse_binary_op(&mut self, sub_rule: SubRule, operators: &[TokenKind]) -> ParseResult {
        let depth = self.depth;
        let mut left = sub_rule(self)?;

        while operators.contains(&self.at().kind) {
            // Each new operation pushes the left operand one level down
            self.go_deeper()?;

            let operator = self.eat();
            let right = sub_rule(self)?;

            left = ASTNode::new_binary_op(left, operator, right);
        }

        self.depth = depth;
        Ok(left)
    }

    fn parse_factor(&mut self) -> ParseResult {
        self.go_deeper()?;
        let factor = self.parse_nested_factor()?;
        self.depth -= 1;

        Ok(factor)
    }

    fn parse_nested_factor(&mut self) -> ParseResult {
        match self.at().kind {
            // Unary sign only applies to the next factor, --5 is -(-(5))
            TokenKind::Plus | TokenKind::Minus => {
                let operator = self.eat();
                let operand = self.parse_factor()?;

                Ok(ASTNode::new_unary_op(operator, operand))
            }
            TokenKind::Int | TokenKind::Float => Ok(ASTNode::new_number(self.eat())),
            TokenKind::LParen => {
                self.eat();
                let expr = self.parse_additive_expr()?;

                if self.at().kind != TokenKind::RParen {
                    return Err(ParserError::missing_close_paren(self.at()));
                }
                self.eat();

                Ok(expr)
            }
            _ => Err(ParserError::expected_number(self.at())),
        }
    }

    fn go_deeper(&mut self) -> ParseResult<()> {
        if self.depth >= MAX_DEPTH {
            return Err(ParserError::too_deep(self.at()));
        }
        self.depth += 1;

        Ok(())
    }

    fn at(&self) -> &Token {
        &self.tokens[self.tok_idx]
    }

    // Never moves past the EOF token
    fn eat(&mut self) -> Token {
        let tk = self.at().clone();

        if tk.kind != TokenKind::EOF {
            self.tok_idx += 1;
        }

        tk
    }
}

pub fn parse(tokens: Vec<Token>) -> ParseResult {
    Parser::new(tokens).build_ast()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::scan;
    use tools::errors::ReportCodeErr;

    fn parse_code(code: &str) -> ParseResult {
        parse(scan("<test>", code).unwrap())
    }

    fn ast_of(code: &str) -> String {
        parse_code(code).unwrap().to_string()
    }

    #[test]
    fn parse_number() {
        assert_eq!(ast_of("42"), "INT:42");
        assert_eq!(ast_of("4.5"), "FLOAT:4.5");
    }

    #[test]
    fn parse_nested_binop() {
        assert_eq!(ast_of("1 - 2 + 3"), "((INT:1, MINUS, INT:2), PLUS, INT:3)");
        assert_eq!(ast_of("8 / 4 / 2"), "((INT:8, DIV, INT:4), DIV, INT:2)");
    }

    #[test]
    fn parse_multiplication_precedence() {
        assert_eq!(ast_of("1 * 2 + 3"), "((INT:1, MUL, INT:2), PLUS, INT:3)");
        assert_eq!(ast_of("1 + 2 * 3"), "(INT:1, PLUS, (INT:2, MUL, INT:3))");
    }

    #[test]
    fn parse_parenthesis() {
        assert_eq!(ast_of("(1 + 2) * 3"), "((INT:1, PLUS, INT:2), MUL, INT:3)");
        assert_eq!(ast_of("((7))"), "INT:7");
    }

    #[test]
    fn parse_unary_chain() {
        assert_eq!(ast_of("--5"), "(MINUS, (MINUS, INT:5))");
        assert_eq!(ast_of("-5 * -2"), "((MINUS, INT:5), MUL, (MINUS, INT:2))");
        assert_eq!(ast_of("+-1"), "(PLUS, (MINUS, INT:1))");
    }

    #[test]
    fn node_spans() {
        let ast = parse_code("12 + -3").unwrap();
        assert_eq!((ast.start.index, ast.end.index), (0, 7));

        match &ast.node {
            ExpressionKind::BinaryOp { left, right, .. } => {
                assert_eq!((left.start.index, left.end.index), (0, 2));
                assert_eq!((right.start.index, right.end.index), (5, 7));
            }
            _ => panic!("Expected a binary operation"),
        }

        // Parenthesis are not part of the inner expression
        let ast = parse_code("-(1 + 2)").unwrap();
        assert_eq!((ast.start.index, ast.end.index), (0, 7));
    }

    #[test]
    fn missing_close_paren() {
        let err = parse_code("(1 + 2").unwrap_err();

        assert!(matches!(err, ParserError::MissingCloseParen { .. }));
        assert_eq!(err.span().0.index, 6);
        assert_eq!(
            err.describe(),
            "InvalidSyntax: Expected ')' \nFile <test>, line 1\n\n(1 + 2\n      ^"
        );
    }

    #[test]
    fn expected_number() {
        let err = parse_code("1 + )").unwrap_err();
        assert!(matches!(err, ParserError::ExpectedNumber { .. }));
        assert_eq!(err.span().0.index, 4);

        let err = parse_code("").unwrap_err();
        assert!(matches!(err, ParserError::ExpectedNumber { .. }));

        let err = parse_code("2 *").unwrap_err();
        assert_eq!(err.to_string(), "Expected int or float");
    }

    #[test]
    fn trailing_tokens() {
        let err = parse_code("1 2").unwrap_err();
        assert!(matches!(err, ParserError::TrailingTokens { .. }));
        assert_eq!(err.span().0.index, 2);
        assert_eq!(err.to_string(), "Expected '+', '-', '*' or '/'");

        let err = parse_code("1.2.3").unwrap_err();
        assert!(matches!(err, ParserError::TrailingTokens { .. }));
        assert_eq!(err.span().0.index, 3);

        let err = parse_code("(1))").unwrap_err();
        assert_eq!(err.span().0.index, 3);
    }

    #[test]
    fn deep_nesting_is_a_syntax_error() {
        let nested = |levels: usize| format!("{}1{}", "(".repeat(levels), ")".repeat(levels));

        assert_eq!(ast_of(&nested(100)), "INT:1");

        let err = parse_code(&nested(20_000)).unwrap_err();
        assert!(matches!(err, ParserError::TooDeep { .. }));
        assert_eq!(err.error_name(), "InvalidSyntax");
        assert_eq!(err.to_string(), "Expression nested too deeply");

        let err = parse_code(&format!("{}1", "-".repeat(20_000))).unwrap_err();
        assert!(matches!(err, ParserError::TooDeep { .. }));

        let long_sum = vec!["1"; 20_000].join(" + ");
        let err = parse_code(&long_sum).unwrap_err();
        assert!(matches!(err, ParserError::TooDeep { .. }));

        let short_sum = vec!["1"; 100].join(" + ");
        assert!(parse_code(&short_sum).is_ok());
    }
}
