use super::*;
use crate::root::{bisect, newton, newton_start, validate_single_root, RootSettings};
use approx::assert_relative_eq;

fn eval(src: &str, x: f64) -> f64 {
    Expr::parse(src, "x").unwrap().eval(x)
}

fn deriv(src: &str) -> Expr {
    Expr::parse(src, "x").unwrap().diff()
}

// ═══════════════════════════════════════════════════════════════════
// Parsing and evaluation
// ═══════════════════════════════════════════════════════════════════

#[test]
fn literals_and_variable() {
    assert_eq!(eval("42", 0.0), 42.0);
    assert_eq!(eval("2.5", 0.0), 2.5);
    assert_eq!(eval("x", 3.0), 3.0);
    // Any identifier can be the free variable
    let f = Expr::parse("t^2", "t").unwrap();
    assert_eq!(f.eval(3.0), 9.0);
}

#[test]
fn operator_precedence() {
    assert_eq!(eval("1 + 2*3", 0.0), 7.0);
    assert_eq!(eval("2*3^2", 0.0), 18.0);
    assert_eq!(eval("10 - 4 - 3", 0.0), 3.0); // left-associative
    assert_eq!(eval("8/4/2", 0.0), 1.0);
    assert_eq!(eval("2^3^2", 0.0), 512.0); // right-associative
    assert_eq!(eval("-x^2", 2.0), -4.0); // -(x²), not (−x)²
    assert_eq!(eval("2^-2", 0.0), 0.25);
}

#[test]
fn power_spellings() {
    assert_eq!(eval("x^2", 3.0), 9.0);
    assert_eq!(eval("x**2", 3.0), 9.0);
}

#[test]
fn implicit_multiplication() {
    assert_eq!(eval("2x", 3.0), 6.0);
    assert_eq!(eval("3(x + 1)", 1.0), 6.0);
    assert_eq!(eval("3x^2", 2.0), 12.0); // 3·(x²)
    assert_relative_eq!(
        eval("x sin(x)", core::f64::consts::FRAC_PI_2),
        core::f64::consts::FRAC_PI_2,
        epsilon = 1e-15
    );
}

#[test]
fn bound_constants() {
    assert_eq!(eval("e", 0.0), core::f64::consts::E);
    assert_eq!(eval("2pi", 0.0), 2.0 * core::f64::consts::PI);
    assert_relative_eq!(eval("e^x", 1.0), core::f64::consts::E, epsilon = 1e-15);
}

#[test]
fn scientific_notation_vs_euler() {
    assert_eq!(eval("2e3", 0.0), 2000.0);
    assert_eq!(eval("1.5e-2", 0.0), 0.015);
    // No exponent digits: `e` is the constant, multiplied in
    assert_eq!(eval("2e", 0.0), 2.0 * core::f64::consts::E);
}

#[test]
fn elementary_functions() {
    assert_relative_eq!(eval("sin(pi)", 0.0), 0.0, epsilon = 1e-15);
    assert_eq!(eval("cos(0)", 0.0), 1.0);
    assert_eq!(eval("sqrt(x)", 16.0), 4.0);
    assert_eq!(eval("abs(x)", -3.0), 3.0);
    assert_relative_eq!(eval("exp(1)", 0.0), core::f64::consts::E, epsilon = 1e-15);
    // `log` and `ln` are both the natural logarithm; `log10` is base 10
    assert_relative_eq!(eval("log(e)", 0.0), 1.0, epsilon = 1e-15);
    assert_relative_eq!(eval("ln(e)", 0.0), 1.0, epsilon = 1e-15);
    assert_relative_eq!(eval("log10(100)", 0.0), 2.0, epsilon = 1e-15);
}

#[test]
fn lambdify_is_a_plain_closure() {
    let f = Expr::parse("x^2 - 2", "x").unwrap().lambdify();
    assert_eq!(f(2.0), 2.0);
    assert_eq!(f(0.0), -2.0);
}

// ═══════════════════════════════════════════════════════════════════
// Parse errors
// ═══════════════════════════════════════════════════════════════════

#[test]
fn rejects_unexpected_character() {
    assert_eq!(
        Expr::parse("x $ 2", "x").unwrap_err(),
        ExprError::UnexpectedChar('$')
    );
}

#[test]
fn rejects_malformed_number() {
    assert!(matches!(
        Expr::parse("1.2.3", "x").unwrap_err(),
        ExprError::InvalidNumber(_)
    ));
}

#[test]
fn rejects_unknown_symbol() {
    assert!(matches!(
        Expr::parse("x + y", "x").unwrap_err(),
        ExprError::UnknownSymbol(s) if s == "y"
    ));
}

#[test]
fn rejects_function_without_argument_list() {
    assert!(matches!(
        Expr::parse("sin x", "x").unwrap_err(),
        ExprError::UnexpectedToken(_)
    ));
}

#[test]
fn rejects_truncated_input() {
    assert_eq!(Expr::parse("x +", "x").unwrap_err(), ExprError::UnexpectedEnd);
    assert_eq!(Expr::parse("", "x").unwrap_err(), ExprError::UnexpectedEnd);
}

#[test]
fn rejects_unbalanced_parens() {
    assert_eq!(
        Expr::parse("(x + 1", "x").unwrap_err(),
        ExprError::UnmatchedParen
    );
    assert_eq!(
        Expr::parse("x + 1)", "x").unwrap_err(),
        ExprError::TrailingInput
    );
}

#[test]
fn error_display() {
    assert_eq!(
        ExprError::UnexpectedChar('$').to_string(),
        "unexpected character '$'"
    );
    assert_eq!(
        ExprError::UnexpectedEnd.to_string(),
        "unexpected end of expression"
    );
}

// ═══════════════════════════════════════════════════════════════════
// Symbolic differentiation
// ═══════════════════════════════════════════════════════════════════

#[test]
fn derivative_of_polynomial() {
    // d/dx (x³ − 2x) = 3x² − 2
    let df = deriv("x^3 - 2x");
    assert_eq!(df.eval(0.0), -2.0);
    assert_eq!(df.eval(2.0), 10.0);
    assert_eq!(df.eval(-1.0), 1.0);
}

#[test]
fn derivative_folds_constants() {
    // d/dx (x² − 2) folds down to exactly 2·x
    let df = deriv("x^2 - 2");
    assert_eq!(df, Expr::Mul(Box::new(Expr::Num(2.0)), Box::new(Expr::Var)));
}

#[test]
fn product_rule() {
    // d/dx (x·sin x) = sin x + x·cos x
    let df = deriv("x sin(x)");
    let expected = |x: f64| x.sin() + x * x.cos();
    for x in [0.0, 0.5, 1.0, 2.0] {
        assert_relative_eq!(df.eval(x), expected(x), epsilon = 1e-14);
    }
}

#[test]
fn quotient_rule() {
    // d/dx (1/x) = −1/x²
    let df = deriv("1/x");
    assert_eq!(df.eval(2.0), -0.25);
}

#[test]
fn chain_rule() {
    // d/dx sin(x²) = 2x·cos(x²)
    let df = deriv("sin(x^2)");
    let x = 1.3;
    assert_relative_eq!(df.eval(x), 2.0 * x * (x * x).cos(), epsilon = 1e-14);
}

#[test]
fn exponentials() {
    // d/dx exp(x) = exp(x); e^x goes through the general power rule
    let df = deriv("exp(x)");
    assert_relative_eq!(df.eval(2.0), 2.0_f64.exp(), epsilon = 1e-14);
    let df = deriv("e^x");
    assert_relative_eq!(df.eval(2.0), 2.0_f64.exp(), epsilon = 1e-13);
}

#[test]
fn logarithm_and_sqrt() {
    let df = deriv("ln(x)");
    assert_eq!(df.eval(4.0), 0.25);
    let df = deriv("sqrt(x)");
    assert_eq!(df.eval(4.0), 0.25);
}

#[test]
fn general_power_rule() {
    // d/dx x^x = x^x·(ln x + 1)
    let df = deriv("x^x");
    let x = 2.0_f64;
    assert_relative_eq!(
        df.eval(x),
        x.powf(x) * (x.ln() + 1.0),
        epsilon = 1e-13
    );
}

#[test]
fn second_derivative() {
    // d²/dx² x⁴ = 12x²
    let d2f = deriv("x^4").diff();
    assert_eq!(d2f.eval(2.0), 48.0);
    assert_eq!(d2f.eval(-1.0), 12.0);
}

#[test]
fn display_round_trips() {
    for src in ["x^2 - 2", "x sin(x)", "(x + 1)/(x - 1)", "-x^2 + 3x"] {
        let parsed = Expr::parse(src, "x").unwrap();
        let reparsed = Expr::parse(&parsed.to_string(), "x").unwrap();
        for x in [0.25, 2.0, 5.5] {
            assert_relative_eq!(parsed.eval(x), reparsed.eval(x), epsilon = 1e-14);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// End to end with the root-finding core
// ═══════════════════════════════════════════════════════════════════

#[test]
fn parse_diff_newton_pipeline() {
    let f = Expr::parse("x^2 - 2", "x").unwrap();
    let df = f.diff();
    let d2f = df.diff();

    validate_single_root(|x| f.eval(x), |x| df.eval(x), 1.0, 2.0).unwrap();
    let x0 = newton_start(|x| f.eval(x), |x| d2f.eval(x), 1.0, 2.0);
    assert_eq!(x0, 2.0); // f(2)·f''(2) > 0

    let settings = RootSettings { tol: 1e-9, max_iter: 50 };
    let r = newton(|x| f.eval(x), |x| df.eval(x), x0, &settings).unwrap();
    assert_relative_eq!(r.x, core::f64::consts::SQRT_2, epsilon = 1e-9);
}

#[test]
fn parsed_transcendental_bisected() {
    // Root of e^x − 3x on [0, 1] (e^x = 3x near x ≈ 0.619)
    let f = Expr::parse("e^x - 3x", "x").unwrap();
    let settings = RootSettings { tol: 1e-9, max_iter: 100 };
    let r = bisect(|x| f.eval(x), 0.0, 1.0, &settings).unwrap();
    assert!(f.eval(r.x).abs() < 1e-8, "residual {}", f.eval(r.x));
}
