//! Interactive front end for the root-finding core: pick a method, type a
//! function, give the interval and budget, get the root or a specific
//! error. Also usable non-interactively by passing the expression and
//! interval as arguments.

use std::io::{self, Write};

use clap::Parser as ClapParser;
use eyre::{bail, eyre, Result, WrapErr};
use log::debug;

use uniroot::expr::Expr;
use uniroot::root::{
    bisect, newton, newton_start, secant, validate_single_root, Method, RootError,
    RootSettings,
};

#[derive(ClapParser, Debug)]
#[command(name = "uniroot", version, about = "Find a root of f(x) on an interval")]
struct Args {
    /// Expression to solve, e.g. "x^2 - 2". Omit to run interactively.
    expression: Option<String>,

    /// Root-finding method.
    #[arg(short, long, default_value = "bisection", value_parser = parse_method)]
    method: Method,

    /// Lower interval endpoint.
    #[arg(short = 'a', long)]
    lower: Option<f64>,

    /// Upper interval endpoint.
    #[arg(short = 'b', long)]
    upper: Option<f64>,

    /// Absolute tolerance on the step/half-width and on |f(x)|.
    #[arg(short, long, default_value_t = 1e-9)]
    tol: f64,

    /// Iteration budget.
    #[arg(long, default_value_t = 100)]
    max_iter: usize,

    /// Name of the free variable in the expression.
    #[arg(long, default_value = "x")]
    var: String,
}

fn parse_method(s: &str) -> Result<Method, String> {
    match s {
        "bisection" | "bisect" => Ok(Method::Bisection),
        "newton" | "newton-raphson" => Ok(Method::NewtonRaphson),
        "secant" => Ok(Method::Secant),
        _ => Err(format!(
            "unknown method '{}' (expected bisection, newton, or secant)",
            s
        )),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match &args.expression {
        Some(src) => {
            let a = args
                .lower
                .ok_or_else(|| eyre!("--lower is required when an expression is given"))?;
            let b = args
                .upper
                .ok_or_else(|| eyre!("--upper is required when an expression is given"))?;
            let settings = RootSettings {
                tol: args.tol,
                max_iter: args.max_iter,
            };
            solve(args.method, src, &args.var, a, b, &settings)
        }
        None => interactive(&args.var),
    }
}

/// One full run: parse, differentiate, validate, solve, print.
///
/// Every failure kind keeps its own message (a bad bracket, a bad
/// tolerance, and a pathological function are different problems), so
/// errors bubble up unwrapped.
fn solve(
    method: Method,
    src: &str,
    var: &str,
    a: f64,
    b: f64,
    settings: &RootSettings<f64>,
) -> Result<()> {
    if a >= b {
        return Err(RootError::InvalidInterval.into());
    }

    let f = Expr::parse(src, var).wrap_err("could not parse the expression")?;
    let df = f.diff();
    debug!("d/d{} [{}] = {}", var, f, df);

    // An endpoint already within tolerance is the answer; no iteration.
    for endpoint in [a, b] {
        let fe = f.eval(endpoint);
        if fe.abs() <= settings.tol {
            report(endpoint, fe, 0, 0);
            return Ok(());
        }
    }

    let result = match method {
        // No validator call: bisection re-checks the sign change itself
        // and tolerates extra roots in range.
        Method::Bisection => bisect(|x| f.eval(x), a, b, settings)?,
        Method::NewtonRaphson => {
            validate_single_root(|x| f.eval(x), |x| df.eval(x), a, b)?;
            let d2f = df.diff();
            debug!("d²/d{}² [{}] = {}", var, f, d2f);
            let x0 = newton_start(|x| f.eval(x), |x| d2f.eval(x), a, b);
            debug!("starting endpoint {} (Fourier's condition)", x0);
            newton(|x| f.eval(x), |x| df.eval(x), x0, settings)?
        }
        Method::Secant => {
            validate_single_root(|x| f.eval(x), |x| df.eval(x), a, b)?;
            secant(|x| f.eval(x), a, b, settings)?
        }
    };
    report(result.x, result.fx, result.iterations, result.evals);
    Ok(())
}

fn report(x: f64, fx: f64, iterations: usize, evals: usize) {
    println!("root: {}", x);
    println!("f(root) = {:e}", fx);
    debug!("{} iterations, {} function evaluations", iterations, evals);
}

/// The session loop: solve, print the result or the specific error, ask
/// whether to go again.
fn interactive(var: &str) -> Result<()> {
    loop {
        if let Err(err) = session(var) {
            println!("error: {:#}", err);
        }
        println!();
        if !prompt_yes("Solve another? [y/n] ")? {
            return Ok(());
        }
    }
}

fn session(var: &str) -> Result<()> {
    println!("Methods:");
    println!("  1) bisection");
    println!("  2) newton-raphson");
    println!("  3) secant");
    let method = match prompt("Method: ")?.as_str() {
        "1" | "bisection" | "bisect" => Method::Bisection,
        "2" | "newton" | "newton-raphson" => Method::NewtonRaphson,
        "3" | "secant" => Method::Secant,
        other => bail!("unknown method '{}'", other),
    };

    let src = prompt(&format!("f({}) = ", var))?;
    println!("Interval [a, b] expected to contain exactly one root:");
    let a: f64 = prompt("a = ")?
        .parse()
        .wrap_err("a must be a number")?;
    let b: f64 = prompt("b = ")?
        .parse()
        .wrap_err("b must be a number")?;
    let max_iter: usize = prompt("Maximum iterations: ")?
        .parse()
        .wrap_err("the iteration budget must be a positive integer")?;
    let tol: f64 = prompt("Absolute tolerance: ")?
        .parse()
        .wrap_err("the tolerance must be a number")?;

    solve(method, &src, var, a, b, &RootSettings { tol, max_iter })
}

fn prompt(msg: &str) -> Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        bail!("end of input");
    }
    Ok(line.trim().to_string())
}

fn prompt_yes(msg: &str) -> Result<bool> {
    Ok(prompt(msg)?.eq_ignore_ascii_case("y"))
}
