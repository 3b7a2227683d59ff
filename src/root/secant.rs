use crate::traits::FloatScalar;

use super::{near_zero, RootError, RootResult, RootSettings};

/// Secant iteration from a two-point starting window.
///
/// Replaces Newton's derivative with the finite-difference slope through
/// the last two iterates:
/// `r = x1 − f(x1)·(x1 − x0)/(f(x1) − f(x0))`, then shifts the window.
/// Terminates when the window width `|x1 − x0|` drops below `tol` or the
/// new residual is within `tol` of zero. A starting point `x0` already
/// within tolerance is returned without iterating.
///
/// No derivative is needed, but the method still assumes a single simple
/// root in range — run
/// [`validate_single_root`](super::validate_single_root) on the enclosing
/// interval first, exactly as for Newton-Raphson.
///
/// # Errors
///
/// Returns [`RootError::StalledDenominator`] if the two window points
/// have exactly equal function values (the secant slope is undefined),
/// and [`RootError::IterationsExceeded`] if the budget runs out.
///
/// # Example
///
/// ```
/// use uniroot::root::{secant, RootSettings};
///
/// let settings = RootSettings { tol: 1e-6, max_iter: 50 };
/// let r = secant(|x| x * x - 2.0, 1.0, 2.0, &settings).unwrap();
/// assert!((r.x - core::f64::consts::SQRT_2).abs() < 1e-6);
/// ```
pub fn secant<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    x0: T,
    x1: T,
    settings: &RootSettings<T>,
) -> Result<RootResult<T>, RootError> {
    let mut x_prev = x0;
    let mut x_curr = x1;
    let mut f_prev = f(x_prev);
    let mut f_curr = f(x_curr);
    let mut evals = 2usize;

    if near_zero(f_prev, settings.tol) {
        return Ok(RootResult {
            x: x_prev,
            fx: f_prev,
            iterations: 0,
            evals,
        });
    }

    for iter in 0..settings.max_iter {
        if f_curr == f_prev {
            return Err(RootError::StalledDenominator);
        }

        let x_next = x_curr - f_curr * (x_curr - x_prev) / (f_curr - f_prev);
        let f_next = f(x_next);
        evals += 1;

        if (x_curr - x_prev).abs() < settings.tol || near_zero(f_next, settings.tol) {
            return Ok(RootResult {
                x: x_next,
                fx: f_next,
                iterations: iter + 1,
                evals,
            });
        }

        x_prev = x_curr;
        f_prev = f_curr;
        x_curr = x_next;
        f_curr = f_next;
    }

    Err(RootError::IterationsExceeded)
}
