use alloc::boxed::Box;

use super::ast::{Expr, Func};

// Simplifying constructors. Only constant folding and identity removal —
// enough to keep second derivatives readable without a rewrite system.

fn add(a: Expr, b: Expr) -> Expr {
    match (a, b) {
        (Expr::Num(x), Expr::Num(y)) => Expr::Num(x + y),
        (Expr::Num(z), b) if z == 0.0 => b,
        (a, Expr::Num(z)) if z == 0.0 => a,
        (a, b) => Expr::Add(Box::new(a), Box::new(b)),
    }
}

fn sub(a: Expr, b: Expr) -> Expr {
    match (a, b) {
        (Expr::Num(x), Expr::Num(y)) => Expr::Num(x - y),
        (a, Expr::Num(z)) if z == 0.0 => a,
        (Expr::Num(z), b) if z == 0.0 => neg(b),
        (a, b) => Expr::Sub(Box::new(a), Box::new(b)),
    }
}

fn mul(a: Expr, b: Expr) -> Expr {
    match (a, b) {
        (Expr::Num(x), Expr::Num(y)) => Expr::Num(x * y),
        (Expr::Num(z), _) | (_, Expr::Num(z)) if z == 0.0 => Expr::Num(0.0),
        (Expr::Num(o), b) if o == 1.0 => b,
        (a, Expr::Num(o)) if o == 1.0 => a,
        (a, b) => Expr::Mul(Box::new(a), Box::new(b)),
    }
}

fn div(a: Expr, b: Expr) -> Expr {
    match (a, b) {
        (Expr::Num(z), _) if z == 0.0 => Expr::Num(0.0),
        (a, Expr::Num(o)) if o == 1.0 => a,
        (a, b) => Expr::Div(Box::new(a), Box::new(b)),
    }
}

fn pow(a: Expr, b: Expr) -> Expr {
    match (a, b) {
        (_, Expr::Num(z)) if z == 0.0 => Expr::Num(1.0),
        (a, Expr::Num(o)) if o == 1.0 => a,
        (a, b) => Expr::Pow(Box::new(a), Box::new(b)),
    }
}

fn neg(a: Expr) -> Expr {
    match a {
        Expr::Num(x) => Expr::Num(-x),
        Expr::Neg(inner) => *inner,
        a => Expr::Neg(Box::new(a)),
    }
}

fn call(func: Func, a: Expr) -> Expr {
    Expr::Call(func, Box::new(a))
}

impl Expr {
    /// Symbolic derivative with respect to the free variable.
    ///
    /// Standard rules: linearity, product, quotient, chain, and the power
    /// rule (`n·u^(n−1)·u'` for a constant exponent, the general
    /// `u^v·(v'·ln u + v·u'/u)` form otherwise). Apply twice for the
    /// second derivative used by Fourier's starting-point rule and the
    /// strict interval validator.
    ///
    /// The result is constant-folded but not otherwise simplified; it
    /// evaluates correctly everywhere the textbook derivative is defined.
    ///
    /// # Example
    ///
    /// ```
    /// use uniroot::expr::Expr;
    ///
    /// let df = Expr::parse("x^3 - 2x", "x").unwrap().diff();
    /// // d/dx (x³ − 2x) = 3x² − 2
    /// assert_eq!(df.eval(2.0), 10.0);
    /// ```
    pub fn diff(&self) -> Expr {
        match self {
            Expr::Num(_) => Expr::Num(0.0),
            Expr::Var => Expr::Num(1.0),
            Expr::Add(a, b) => add(a.diff(), b.diff()),
            Expr::Sub(a, b) => sub(a.diff(), b.diff()),
            Expr::Mul(a, b) => add(
                mul(a.diff(), (**b).clone()),
                mul((**a).clone(), b.diff()),
            ),
            Expr::Div(a, b) => div(
                sub(
                    mul(a.diff(), (**b).clone()),
                    mul((**a).clone(), b.diff()),
                ),
                pow((**b).clone(), Expr::Num(2.0)),
            ),
            Expr::Pow(base, exponent) => match **exponent {
                // n·u^(n−1)·u'
                Expr::Num(n) => mul(
                    mul(Expr::Num(n), pow((**base).clone(), Expr::Num(n - 1.0))),
                    base.diff(),
                ),
                // u^v·(v'·ln u + v·u'/u)
                _ => mul(
                    self.clone(),
                    add(
                        mul(exponent.diff(), call(Func::Ln, (**base).clone())),
                        div(
                            mul((**exponent).clone(), base.diff()),
                            (**base).clone(),
                        ),
                    ),
                ),
            },
            Expr::Neg(a) => neg(a.diff()),
            Expr::Call(func, a) => {
                let inner = (**a).clone();
                let outer = match func {
                    Func::Sin => call(Func::Cos, inner),
                    Func::Cos => neg(call(Func::Sin, inner)),
                    // sec² = 1/cos²
                    Func::Tan => div(
                        Expr::Num(1.0),
                        pow(call(Func::Cos, inner), Expr::Num(2.0)),
                    ),
                    Func::Asin => div(
                        Expr::Num(1.0),
                        call(
                            Func::Sqrt,
                            sub(Expr::Num(1.0), pow(inner, Expr::Num(2.0))),
                        ),
                    ),
                    Func::Acos => neg(div(
                        Expr::Num(1.0),
                        call(
                            Func::Sqrt,
                            sub(Expr::Num(1.0), pow(inner, Expr::Num(2.0))),
                        ),
                    )),
                    Func::Atan => div(
                        Expr::Num(1.0),
                        add(Expr::Num(1.0), pow(inner, Expr::Num(2.0))),
                    ),
                    Func::Sinh => call(Func::Cosh, inner),
                    Func::Cosh => call(Func::Sinh, inner),
                    Func::Tanh => div(
                        Expr::Num(1.0),
                        pow(call(Func::Cosh, inner), Expr::Num(2.0)),
                    ),
                    Func::Exp => call(Func::Exp, inner),
                    Func::Ln => div(Expr::Num(1.0), inner),
                    Func::Log10 => div(
                        Expr::Num(1.0),
                        mul(inner, Expr::Num(core::f64::consts::LN_10)),
                    ),
                    Func::Sqrt => div(
                        Expr::Num(1.0),
                        mul(Expr::Num(2.0), call(Func::Sqrt, inner)),
                    ),
                    // d|u| = u/|u|, undefined at u = 0 like the textbook says
                    Func::Abs => div(inner.clone(), call(Func::Abs, inner)),
                };
                mul(outer, a.diff())
            }
        }
    }
}
