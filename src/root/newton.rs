use crate::traits::FloatScalar;

use super::{near_zero, RootError, RootResult, RootSettings};

/// Newton-Raphson iteration with a caller-supplied derivative.
///
/// Updates `x ← x − f(x)/f'(x)` from the starting point `x0` and
/// terminates when the step size drops below `tol` or the residual
/// `|f(x)|` is within `tol` of zero. A starting point already within
/// tolerance is returned without iterating.
///
/// Convergence is quadratic near a simple root; near a multiple root it
/// degrades to linear and the iteration budget is what bounds the loop.
/// Callers picking `x0` from a bracket's endpoints should use
/// [`newton_start`](super::newton_start) (Fourier's condition) and run
/// [`validate_single_root`](super::validate_single_root) first — this
/// loop assumes a single simple root and does neither itself.
///
/// # Errors
///
/// Returns [`RootError::DerivativeVanished`] if `f'` is exactly zero at
/// an iterate (the tangent step is undefined; there is no recovery), and
/// [`RootError::IterationsExceeded`] if the budget runs out.
///
/// # Example
///
/// ```
/// use uniroot::root::{newton, RootSettings};
///
/// let r = newton(
///     |x| x * x - 2.0,
///     |x| 2.0 * x,
///     1.0,
///     &RootSettings { tol: 1e-9, max_iter: 50 },
/// )
/// .unwrap();
/// assert!((r.x - core::f64::consts::SQRT_2).abs() < 1e-9);
/// assert!(r.iterations < 10);
/// ```
pub fn newton<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    mut df: impl FnMut(T) -> T,
    x0: T,
    settings: &RootSettings<T>,
) -> Result<RootResult<T>, RootError> {
    let mut x = x0;
    let mut fx = f(x);
    let mut evals = 1usize;

    if near_zero(fx, settings.tol) {
        return Ok(RootResult {
            x,
            fx,
            iterations: 0,
            evals,
        });
    }

    for iter in 0..settings.max_iter {
        let dfx = df(x);
        evals += 1;
        if dfx == T::zero() {
            return Err(RootError::DerivativeVanished);
        }

        let x_next = x - fx / dfx;
        let f_next = f(x_next);
        evals += 1;

        if (x_next - x).abs() < settings.tol || near_zero(f_next, settings.tol) {
            return Ok(RootResult {
                x: x_next,
                fx: f_next,
                iterations: iter + 1,
                evals,
            });
        }

        x = x_next;
        fx = f_next;
    }

    Err(RootError::IterationsExceeded)
}
