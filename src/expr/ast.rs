use alloc::boxed::Box;
use core::fmt;

// With std the inherent f64 methods apply; without it they come from
// `num_traits::Float` backed by the `libm` feature.
#[cfg(not(feature = "std"))]
use num_traits::Float;

/// A parsed expression in one free variable.
///
/// Built by [`Expr::parse`](Expr::parse), evaluated with
/// [`eval`](Expr::eval), differentiated with [`diff`](Expr::diff).
/// `Display` renders infix notation with parentheses only where
/// precedence requires them.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal (bound constants fold to this at parse time).
    Num(f64),
    /// The free variable. The name used at parse time is not kept;
    /// `Display` always renders it as `x`.
    Var,
    /// Sum of two subexpressions.
    Add(Box<Expr>, Box<Expr>),
    /// Difference of two subexpressions.
    Sub(Box<Expr>, Box<Expr>),
    /// Product of two subexpressions.
    Mul(Box<Expr>, Box<Expr>),
    /// Quotient of two subexpressions.
    Div(Box<Expr>, Box<Expr>),
    /// Left operand raised to the right operand.
    Pow(Box<Expr>, Box<Expr>),
    /// Negation.
    Neg(Box<Expr>),
    /// Application of an elementary function.
    Call(Func, Box<Expr>),
}

/// The elementary functions the engine knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Ln,
    Log10,
    Sqrt,
    Abs,
}

impl Func {
    /// Resolve a function name. `log` is the natural logarithm.
    pub(crate) fn from_name(name: &str) -> Option<Func> {
        Some(match name {
            "sin" => Func::Sin,
            "cos" => Func::Cos,
            "tan" => Func::Tan,
            "asin" => Func::Asin,
            "acos" => Func::Acos,
            "atan" => Func::Atan,
            "sinh" => Func::Sinh,
            "cosh" => Func::Cosh,
            "tanh" => Func::Tanh,
            "exp" => Func::Exp,
            "ln" | "log" => Func::Ln,
            "log10" => Func::Log10,
            "sqrt" => Func::Sqrt,
            "abs" => Func::Abs,
            _ => return None,
        })
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Asin => "asin",
            Func::Acos => "acos",
            Func::Atan => "atan",
            Func::Sinh => "sinh",
            Func::Cosh => "cosh",
            Func::Tanh => "tanh",
            Func::Exp => "exp",
            Func::Ln => "ln",
            Func::Log10 => "log10",
            Func::Sqrt => "sqrt",
            Func::Abs => "abs",
        }
    }

    pub(crate) fn apply(self, x: f64) -> f64 {
        match self {
            Func::Sin => x.sin(),
            Func::Cos => x.cos(),
            Func::Tan => x.tan(),
            Func::Asin => x.asin(),
            Func::Acos => x.acos(),
            Func::Atan => x.atan(),
            Func::Sinh => x.sinh(),
            Func::Cosh => x.cosh(),
            Func::Tanh => x.tanh(),
            Func::Exp => x.exp(),
            Func::Ln => x.ln(),
            Func::Log10 => x.log10(),
            Func::Sqrt => x.sqrt(),
            Func::Abs => x.abs(),
        }
    }
}

impl Expr {
    /// Evaluate at `x`.
    ///
    /// Pure and total: domain violations follow IEEE 754 (`ln(-1)` is
    /// NaN, `1/0` is infinite) rather than erroring.
    pub fn eval(&self, x: f64) -> f64 {
        match self {
            Expr::Num(n) => *n,
            Expr::Var => x,
            Expr::Add(a, b) => a.eval(x) + b.eval(x),
            Expr::Sub(a, b) => a.eval(x) - b.eval(x),
            Expr::Mul(a, b) => a.eval(x) * b.eval(x),
            Expr::Div(a, b) => a.eval(x) / b.eval(x),
            Expr::Pow(a, b) => a.eval(x).powf(b.eval(x)),
            Expr::Neg(a) => -a.eval(x),
            Expr::Call(func, a) => func.apply(a.eval(x)),
        }
    }

    /// Consume the expression and return it as a plain evaluator closure,
    /// the shape the root-finding functions take.
    ///
    /// # Example
    ///
    /// ```
    /// use uniroot::expr::Expr;
    ///
    /// let f = Expr::parse("x^2 - 2", "x").unwrap().lambdify();
    /// assert_eq!(f(2.0), 2.0);
    /// ```
    pub fn lambdify(self) -> impl Fn(f64) -> f64 {
        move |x| self.eval(x)
    }
}

// Binding strengths for parenthesization, loosest to tightest.
const PREC_ADD: u8 = 1;
const PREC_MUL: u8 = 2;
const PREC_NEG: u8 = 3;
const PREC_POW: u8 = 4;
const PREC_ATOM: u8 = 5;

impl Expr {
    fn precedence(&self) -> u8 {
        match self {
            Expr::Add(..) | Expr::Sub(..) => PREC_ADD,
            Expr::Mul(..) | Expr::Div(..) => PREC_MUL,
            Expr::Neg(..) => PREC_NEG,
            Expr::Pow(..) => PREC_POW,
            Expr::Num(..) | Expr::Var | Expr::Call(..) => PREC_ATOM,
        }
    }

    fn fmt_child(&self, f: &mut fmt::Formatter<'_>, min_prec: u8) -> fmt::Result {
        if self.precedence() < min_prec {
            write!(f, "(")?;
            fmt::Display::fmt(self, f)?;
            write!(f, ")")
        } else {
            fmt::Display::fmt(self, f)
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Num(n) => write!(f, "{}", n),
            Expr::Var => write!(f, "x"),
            Expr::Add(a, b) => {
                a.fmt_child(f, PREC_ADD)?;
                write!(f, " + ")?;
                b.fmt_child(f, PREC_ADD)
            }
            Expr::Sub(a, b) => {
                a.fmt_child(f, PREC_ADD)?;
                write!(f, " - ")?;
                // Right side needs parens so "a - (b + c)" round-trips
                b.fmt_child(f, PREC_MUL)
            }
            Expr::Mul(a, b) => {
                a.fmt_child(f, PREC_MUL)?;
                write!(f, "*")?;
                b.fmt_child(f, PREC_MUL)
            }
            Expr::Div(a, b) => {
                a.fmt_child(f, PREC_MUL)?;
                write!(f, "/")?;
                // Same for "a / (b*c)"
                b.fmt_child(f, PREC_NEG)
            }
            Expr::Pow(a, b) => {
                a.fmt_child(f, PREC_ATOM)?;
                write!(f, "^")?;
                b.fmt_child(f, PREC_POW)
            }
            Expr::Neg(a) => {
                write!(f, "-")?;
                a.fmt_child(f, PREC_NEG)
            }
            Expr::Call(func, a) => write!(f, "{}({})", func.name(), a),
        }
    }
}
