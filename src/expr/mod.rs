//! Expression engine: parse a textual expression in one free variable,
//! evaluate it numerically, and differentiate it symbolically.
//!
//! This is the collaborator the root-finding core expects but never
//! depends on — it turns user input into the `f`, `f'`, and `f''`
//! evaluators the solvers and the interval validator consume. Requires
//! the `alloc` feature (the AST is heap-allocated).
//!
//! The grammar follows common calculator conventions:
//!
//! - `+ - * /` with the usual precedence, `^` (or `**`) for powers,
//!   right-associative, unary minus below the power level (`-x^2` is
//!   `-(x^2)`)
//! - implicit multiplication: `2x`, `3(x + 1)`, `x sin(x)`
//! - bound constants `e` (Euler's number) and `pi`
//! - functions `sin cos tan asin acos atan sinh cosh tanh exp ln log
//!   log10 sqrt abs` (`log` is the natural logarithm, like `ln`)
//!
//! # Example
//!
//! ```
//! use uniroot::expr::Expr;
//! use uniroot::root::{newton, RootSettings};
//!
//! let f = Expr::parse("x^2 - 2", "x").unwrap();
//! let df = f.diff();
//! let r = newton(
//!     |x| f.eval(x),
//!     |x| df.eval(x),
//!     1.0,
//!     &RootSettings::default(),
//! )
//! .unwrap();
//! assert!((r.x - core::f64::consts::SQRT_2).abs() < 1e-9);
//! ```

mod ast;
mod diff;
mod parse;

#[cfg(test)]
mod tests;

pub use ast::{Expr, Func};

use alloc::string::String;

/// Errors from tokenizing or parsing an expression.
///
/// Separate from the root-finding taxonomy on purpose: a parse failure is
/// the user's input being malformed, not a numerical condition. Both kinds
/// implement `Display` (and `Error` under `std`) so an orchestration layer
/// can catch them side by side.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprError {
    /// A character the tokenizer does not recognize.
    UnexpectedChar(char),
    /// A numeric literal that does not parse as `f64`.
    InvalidNumber(String),
    /// An identifier that is neither the free variable, a bound
    /// constant, nor a known function.
    UnknownSymbol(String),
    /// A token that cannot appear at this position.
    UnexpectedToken(String),
    /// Input ended where an operand or `)` was still expected.
    UnexpectedEnd,
    /// A `(` without its matching `)`.
    UnmatchedParen,
    /// Leftover tokens after a complete expression.
    TrailingInput,
}

impl core::fmt::Display for ExprError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ExprError::UnexpectedChar(c) => write!(f, "unexpected character '{}'", c),
            ExprError::InvalidNumber(s) => write!(f, "invalid numeric literal '{}'", s),
            ExprError::UnknownSymbol(s) => write!(f, "unknown symbol '{}'", s),
            ExprError::UnexpectedToken(s) => write!(f, "unexpected token '{}'", s),
            ExprError::UnexpectedEnd => write!(f, "unexpected end of expression"),
            ExprError::UnmatchedParen => write!(f, "unmatched parenthesis"),
            ExprError::TrailingInput => write!(f, "trailing input after expression"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ExprError {}
