use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use super::ast::{Expr, Func};
use super::ExprError;

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Num(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::Num(n) => format!("{}", n),
            Token::Ident(s) => s.clone(),
            Token::Plus => "+".to_string(),
            Token::Minus => "-".to_string(),
            Token::Star => "*".to_string(),
            Token::Slash => "/".to_string(),
            Token::Caret => "^".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
        }
    }

    /// Can this token start a value? Drives implicit multiplication.
    fn starts_value(&self) -> bool {
        matches!(self, Token::Num(_) | Token::Ident(_) | Token::LParen)
    }
}

fn tokenize(src: &str) -> Result<Vec<Token>, ExprError> {
    let mut tokens = Vec::new();
    let mut chars = src.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            }
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            }
            '*' => {
                chars.next();
                // `**` is the Python-style power operator
                if matches!(chars.peek(), Some((_, '*'))) {
                    chars.next();
                    tokens.push(Token::Caret);
                } else {
                    tokens.push(Token::Star);
                }
            }
            '/' => {
                chars.next();
                tokens.push(Token::Slash);
            }
            '^' => {
                chars.next();
                tokens.push(Token::Caret);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            c if c.is_ascii_digit() || c == '.' => {
                let mut end = start;
                while let Some(&(i, d)) = chars.peek() {
                    if d.is_ascii_digit() || d == '.' {
                        end = i + d.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                // Scientific exponent only when followed by a digit (an
                // optional sign in between), so `2e` stays `2 * e`.
                if let Some(&(i, e)) = chars.peek() {
                    if e == 'e' || e == 'E' {
                        let rest = &src[i + 1..];
                        let digits = rest.strip_prefix(['+', '-']).unwrap_or(rest);
                        if digits.starts_with(|d: char| d.is_ascii_digit()) {
                            chars.next(); // e
                            if rest.starts_with(['+', '-']) {
                                chars.next();
                            }
                            while let Some(&(j, d)) = chars.peek() {
                                if d.is_ascii_digit() {
                                    end = j + d.len_utf8();
                                    chars.next();
                                } else {
                                    break;
                                }
                            }
                        }
                    }
                }
                let text = &src[start..end];
                let value = text
                    .parse::<f64>()
                    .map_err(|_| ExprError::InvalidNumber(text.to_string()))?;
                tokens.push(Token::Num(value));
            }
            c if c.is_alphabetic() || c == '_' => {
                let mut end = start;
                while let Some(&(i, d)) = chars.peek() {
                    if d.is_alphanumeric() || d == '_' {
                        end = i + d.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Ident(src[start..end].to_string()));
            }
            other => return Err(ExprError::UnexpectedChar(other)),
        }
    }
    Ok(tokens)
}

struct Parser<'a> {
    tokens: Vec<Token>,
    pos: usize,
    var: &'a str,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let t = self.tokens.get(self.pos).cloned();
        if t.is_some() {
            self.pos += 1;
        }
        t
    }

    fn expect_rparen(&mut self) -> Result<(), ExprError> {
        match self.next() {
            Some(Token::RParen) => Ok(()),
            Some(t) => Err(ExprError::UnexpectedToken(t.describe())),
            None => Err(ExprError::UnmatchedParen),
        }
    }

    /// expr := term (('+' | '-') term)*
    fn expr(&mut self) -> Result<Expr, ExprError> {
        let mut lhs = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.pos += 1;
                    let rhs = self.term()?;
                    lhs = Expr::Add(lhs.into(), rhs.into());
                }
                Some(Token::Minus) => {
                    self.pos += 1;
                    let rhs = self.term()?;
                    lhs = Expr::Sub(lhs.into(), rhs.into());
                }
                _ => return Ok(lhs),
            }
        }
    }

    /// term := unary (('*' | '/') unary | <implicit multiplication>)*
    fn term(&mut self) -> Result<Expr, ExprError> {
        let mut lhs = self.unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.pos += 1;
                    let rhs = self.unary()?;
                    lhs = Expr::Mul(lhs.into(), rhs.into());
                }
                Some(Token::Slash) => {
                    self.pos += 1;
                    let rhs = self.unary()?;
                    lhs = Expr::Div(lhs.into(), rhs.into());
                }
                // Juxtaposition: `2x`, `3(x+1)`, `x sin(x)`
                Some(t) if t.starts_value() => {
                    let rhs = self.unary()?;
                    lhs = Expr::Mul(lhs.into(), rhs.into());
                }
                _ => return Ok(lhs),
            }
        }
    }

    /// unary := ('-' | '+') unary | power
    fn unary(&mut self) -> Result<Expr, ExprError> {
        match self.peek() {
            Some(Token::Minus) => {
                self.pos += 1;
                Ok(Expr::Neg(self.unary()?.into()))
            }
            Some(Token::Plus) => {
                self.pos += 1;
                self.unary()
            }
            _ => self.power(),
        }
    }

    /// power := atom ('^' unary)?   (right-associative, `2^-3` allowed)
    fn power(&mut self) -> Result<Expr, ExprError> {
        let base = self.atom()?;
        if matches!(self.peek(), Some(Token::Caret)) {
            self.pos += 1;
            let exponent = self.unary()?;
            return Ok(Expr::Pow(base.into(), exponent.into()));
        }
        Ok(base)
    }

    /// atom := number | '(' expr ')' | variable | constant | func '(' expr ')'
    fn atom(&mut self) -> Result<Expr, ExprError> {
        match self.next() {
            Some(Token::Num(n)) => Ok(Expr::Num(n)),
            Some(Token::LParen) => {
                let inner = self.expr()?;
                self.expect_rparen()?;
                Ok(inner)
            }
            Some(Token::Ident(name)) => {
                if name == self.var {
                    return Ok(Expr::Var);
                }
                if let Some(func) = Func::from_name(&name) {
                    return match self.next() {
                        Some(Token::LParen) => {
                            let arg = self.expr()?;
                            self.expect_rparen()?;
                            Ok(Expr::Call(func, arg.into()))
                        }
                        Some(t) => Err(ExprError::UnexpectedToken(t.describe())),
                        None => Err(ExprError::UnexpectedEnd),
                    };
                }
                match name.as_str() {
                    "e" => Ok(Expr::Num(core::f64::consts::E)),
                    "pi" => Ok(Expr::Num(core::f64::consts::PI)),
                    _ => Err(ExprError::UnknownSymbol(name)),
                }
            }
            Some(t) => Err(ExprError::UnexpectedToken(t.describe())),
            None => Err(ExprError::UnexpectedEnd),
        }
    }
}

impl Expr {
    /// Parse `src` as an expression in the free variable `var`.
    ///
    /// # Errors
    ///
    /// Any [`ExprError`] variant, depending on what is malformed.
    ///
    /// # Example
    ///
    /// ```
    /// use uniroot::expr::Expr;
    ///
    /// // Implicit multiplication and `^` both work
    /// let f = Expr::parse("3x^2 - e^x", "x").unwrap();
    /// assert!((f.eval(0.0) + 1.0).abs() < 1e-15);
    /// ```
    pub fn parse(src: &str, var: &str) -> Result<Expr, ExprError> {
        let tokens = tokenize(src)?;
        let mut parser = Parser {
            tokens,
            pos: 0,
            var,
        };
        let expr = parser.expr()?;
        if parser.peek().is_some() {
            return Err(ExprError::TrailingInput);
        }
        Ok(expr)
    }
}
