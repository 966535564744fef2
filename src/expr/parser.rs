//! Lexer and recursive-descent parser for the expression language.
//!
//! Grammar, loosest to tightest binding:
//!
//! ```text
//! expr    := term { ("+" | "-") term }
//! term    := unary { ("*" | "/") unary }
//! unary   := "-" unary | power
//! power   := primary [ ("^" | "**") unary ]      right-associative
//! primary := NUMBER | IDENT | IDENT "(" args ")" | "(" expr ")"
//! args    := [ expr { "," expr } ]
//! ```
//!
//! `**` is a pure alias for `^`. Exponentiation binds tighter than unary
//! minus, so `-x^2` negates the square.
//!
//! Input length and nesting depth are both capped, so pathological text
//! pasted into the expression box comes back as a normal parse error
//! instead of exhausting the stack.

use super::ast::{lookup_constant, lookup_function, Expr};
use super::ParseError;

/// Upper bound on tokens per expression. Also bounds the height of the
/// produced tree, which keeps evaluation and drop recursion shallow even
/// for long flat operator chains.
const MAX_TOKENS: usize = 2048;

/// Upper bound on grammar nesting (parens, unary minus, exponent chains).
const MAX_NESTING: usize = 256;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    StarStar,
    Slash,
    Caret,
    LParen,
    RParen,
    Comma,
}

fn describe(tok: &Token) -> String {
    match tok {
        Token::Number(v) => v.to_string(),
        Token::Ident(name) => name.clone(),
        Token::Plus => "+".into(),
        Token::Minus => "-".into(),
        Token::Star => "*".into(),
        Token::StarStar => "**".into(),
        Token::Slash => "/".into(),
        Token::Caret => "^".into(),
        Token::LParen => "(".into(),
        Token::RParen => ")".into(),
        Token::Comma => ",".into(),
    }
}

fn lex(src: &str) -> Result<Vec<Token>, ParseError> {
    let chars: Vec<char> = src.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match c {
            c if c.is_whitespace() => i += 1,
            '+' => {
                tokens.push(Token::Plus);
                i += 1;
            }
            '-' => {
                tokens.push(Token::Minus);
                i += 1;
            }
            '*' => {
                if chars.get(i + 1) == Some(&'*') {
                    tokens.push(Token::StarStar);
                    i += 2;
                } else {
                    tokens.push(Token::Star);
                    i += 1;
                }
            }
            '/' => {
                tokens.push(Token::Slash);
                i += 1;
            }
            '^' => {
                tokens.push(Token::Caret);
                i += 1;
            }
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            ',' => {
                tokens.push(Token::Comma);
                i += 1;
            }
            '0'..='9' | '.' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                // An exponent suffix only belongs to the number when digits
                // actually follow it. "2e" must lex as `2` then ident `e`.
                if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
                    let mut j = i + 1;
                    if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
                        j += 1;
                    }
                    if j < chars.len() && chars[j].is_ascii_digit() {
                        i = j;
                        while i < chars.len() && chars[i].is_ascii_digit() {
                            i += 1;
                        }
                    }
                }
                let text: String = chars[start..i].iter().collect();
                let value = text
                    .parse::<f64>()
                    .map_err(|_| ParseError::BadNumber(text))?;
                tokens.push(Token::Number(value));
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                tokens.push(Token::Ident(chars[start..i].iter().collect()));
            }
            other => return Err(ParseError::UnexpectedChar(other)),
        }
    }
    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let tok = self.tokens.get(self.pos).cloned();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn expr(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.pos += 1;
                    let rhs = self.term()?;
                    lhs = Expr::Add(Box::new(lhs), Box::new(rhs));
                }
                Some(Token::Minus) => {
                    self.pos += 1;
                    let rhs = self.term()?;
                    lhs = Expr::Sub(Box::new(lhs), Box::new(rhs));
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.pos += 1;
                    let rhs = self.unary()?;
                    lhs = Expr::Mul(Box::new(lhs), Box::new(rhs));
                }
                Some(Token::Slash) => {
                    self.pos += 1;
                    let rhs = self.unary()?;
                    lhs = Expr::Div(Box::new(lhs), Box::new(rhs));
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        // Every recursive cycle in the grammar passes through here, so this
        // one guard bounds the parser's stack use.
        if self.depth >= MAX_NESTING {
            return Err(ParseError::TooDeep);
        }
        self.depth += 1;
        let expr = if matches!(self.peek(), Some(Token::Minus)) {
            self.pos += 1;
            self.unary().map(|inner| Expr::Neg(Box::new(inner)))
        } else {
            self.power()
        };
        self.depth -= 1;
        expr
    }

    fn power(&mut self) -> Result<Expr, ParseError> {
        let base = self.primary()?;
        if matches!(self.peek(), Some(Token::Caret | Token::StarStar)) {
            self.pos += 1;
            // Recursing through `unary` keeps `^` right-associative and lets
            // the exponent carry its own sign, as in `2^-3`.
            let exponent = self.unary()?;
            Ok(Expr::Pow(Box::new(base), Box::new(exponent)))
        } else {
            Ok(base)
        }
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        match self.advance() {
            Some(Token::Number(v)) => Ok(Expr::Const(v)),
            Some(Token::Ident(name)) => {
                if matches!(self.peek(), Some(Token::LParen)) {
                    self.pos += 1;
                    let args = self.args()?;
                    let f = lookup_function(&name)
                        .ok_or_else(|| ParseError::UnknownName(name.clone()))?;
                    if args.len() != f.arity() {
                        return Err(ParseError::WrongArity {
                            name,
                            expected: f.arity(),
                            got: args.len(),
                        });
                    }
                    Ok(Expr::Call(f, args))
                } else if name == "x" {
                    Ok(Expr::Var)
                } else if let Some(v) = lookup_constant(&name) {
                    Ok(Expr::Const(v))
                } else {
                    Err(ParseError::UnknownName(name))
                }
            }
            Some(Token::LParen) => {
                let inner = self.expr()?;
                match self.advance() {
                    Some(Token::RParen) => Ok(inner),
                    Some(tok) => Err(ParseError::UnexpectedToken(describe(&tok))),
                    None => Err(ParseError::UnexpectedEnd),
                }
            }
            Some(tok) => Err(ParseError::UnexpectedToken(describe(&tok))),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    /// Parse a call argument list, consuming through the closing paren.
    fn args(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();
        if matches!(self.peek(), Some(Token::RParen)) {
            self.pos += 1;
            return Ok(args);
        }
        loop {
            args.push(self.expr()?);
            match self.advance() {
                Some(Token::Comma) => continue,
                Some(Token::RParen) => return Ok(args),
                Some(tok) => return Err(ParseError::UnexpectedToken(describe(&tok))),
                None => return Err(ParseError::UnexpectedEnd),
            }
        }
    }
}

pub(super) fn parse(src: &str) -> Result<Expr, ParseError> {
    let tokens = lex(src)?;
    if tokens.len() > MAX_TOKENS {
        return Err(ParseError::TooLong);
    }
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let expr = parser.expr()?;
    if let Some(tok) = parser.peek() {
        return Err(ParseError::UnexpectedToken(describe(tok)));
    }
    Ok(expr)
}
