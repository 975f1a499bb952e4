use std::fmt::Display;
use thiserror::Error;

use tools::errors::ReportCodeErr;
use tools::position::Position;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LexerError {
    // Escaped so a new line stays on the header line
    #[error("'{}'", .character.escape_debug())]
    IllegalCharacter {
        character: char,
        start: Position,
        end: Position,
    },
}

impl ReportCodeErr for LexerError {
    fn error_name(&self) -> &'static str {
        "IllegalCharacter"
    }

    fn span(&self) -> (&Position, &Position) {
        match self {
            LexerError::IllegalCharacter { start, end, .. } => (start, end),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    // Literal types
    Int,
    Float,

    // Operator
    Plus,
    Minus,
    Mul,
    Div,

    // Grouping
    LParen, // (
    RParen, // )

    // File
    EOF,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mul => "MUL",
            TokenKind::Div => "DIV",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::EOF => "EOF",
        };

        write!(f, "{name}")
    }
}

/// Value carried by a numeric token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Int(nb) => write!(f, "{}", nb),
            // Debug keeps the fractional part: 5.0 and not 5
            Literal::Float(nb) => write!(f, "{:?}", nb),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<Literal>,
    pub start: Position,
    pub end: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(val) => write!(f, "{}:{}", self.kind, val),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl Token {
    pub fn new(kind: TokenKind, start: Position, end: Position) -> Self {
        Self {
            kind,
            value: None,
            start,
            end,
        }
    }

    pub fn new_number(kind: TokenKind, value: Literal, start: Position, end: Position) -> Self {
        Self {
            kind,
            value: Some(value),
            start,
            end,
        }
    }

    // Zero width token marking the end of the input
    pub fn new_eof(pos: Position) -> Self {
        Self::new(TokenKind::EOF, pos.clone(), pos)
    }
}

// Single character tokens
const SYMBOLS: [(char, TokenKind); 6] = [
    ('+', TokenKind::Plus),
    ('-', TokenKind::Minus),
    ('*', TokenKind::Mul),
    ('/', TokenKind::Div),
    ('(', TokenKind::LParen),
    (')', TokenKind::RParen),
];

fn symbol_kind(c: char) -> Option<TokenKind> {
    SYMBOLS
        .iter()
        .find(|(symbol, _)| *symbol == c)
        .map(|(_, kind)| *kind)
}

// Skip listed char
fn is_skippable(c: char) -> bool {
    matches!(c, ' ' | '\t')
}

fn starts_number(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

pub struct Lexer {
    chars: Vec<char>,
    pos: Position,
    cur_char: Option<char>,
}

impl Lexer {
    pub fn new(file_name: &str, source_code: &str) -> Self {
        let chars = source_code.chars().collect::<Vec<char>>();
        let cur_char = chars.first().copied();

        Self {
            chars,
            pos: Position::new(file_name, source_code),
            cur_char,
        }
    }

    fn advance(&mut self) {
        self.pos.advance(self.cur_char);
        self.cur_char = self.chars.get(self.pos.index).copied();
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexerError> {
        let mut tokens: Vec<Token> = vec![];

        while let Some(c) = self.cur_char {
            if is_skippable(c) {
                self.advance();
            } else if starts_number(c) {
                tokens.push(self.make_number());
            } else if let Some(kind) = symbol_kind(c) {
                let start = self.pos.clone();
                self.advance();
                tokens.push(Token::new(kind, start, self.pos.clone()));
            } else {
                let start = self.pos.clone();
                self.advance();

                return Err(LexerError::IllegalCharacter {
                    character: c,
                    start,
                    end: self.pos.clone(),
                });
            }
        }

        // We append manualy end of file
        tokens.push(Token::new_eof(self.pos.clone()));

        Ok(tokens)
    }

    // Longest run of digits holding at most one dot. A second dot ends the
    // number and is left for the next token.
    fn make_number(&mut self) -> Token {
        let start = self.pos.clone();
        let mut val = String::new();
        let mut decimal = false;

        while let Some(c) = self.cur_char {
            if c == '.' {
                if decimal {
                    break;
                }
                decimal = true;
            } else if !c.is_ascii_digit() {
                break;
            }

            val.push(c);
            self.advance();
        }

        let kind = if decimal {
            TokenKind::Float
        } else {
            TokenKind::Int
        };

        Token::new_number(kind, number_literal(&val, decimal), start, self.pos.clone())
    }
}

fn number_literal(val: &str, decimal: bool) -> Literal {
    if decimal {
        // Only a lone '.' fails to parse, it stands for zero
        return Literal::Float(val.parse::<f64>().unwrap_or(0.));
    }

    match val.parse::<i64>() {
        Ok(nb) => Literal::Int(nb),
        // Too many digits for an i64, the digits themselves are always valid
        Err(_) => Literal::Float(val.parse::<f64>().unwrap_or(f64::INFINITY)),
    }
}

pub fn scan(file_name: &str, source_code: &str) -> Result<Vec<Token>, LexerError> {
    Lexer::new(file_name, source_code).tokenize()
}
