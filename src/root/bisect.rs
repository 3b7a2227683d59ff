use crate::traits::FloatScalar;

use super::{half, near_zero, same_sign, RootError, RootResult, RootSettings};

/// Bisection method for bracketed root finding.
///
/// Repeatedly halves `[a, b]` and keeps the half where the sign change
/// survives, so convergence is guaranteed whenever the initial bracket has
/// one. Because it always walks toward *a* root, it tolerates brackets
/// containing several roots and needs no uniqueness check — the sign
/// precondition is re-validated here even when the caller already ran the
/// validator, since it is bisection's only termination guarantee.
///
/// Terminates when the bracket half-width drops below `tol` or the
/// midpoint residual `|f(r)|` is within `tol` of zero. An endpoint whose
/// value is already within `tol` of zero is returned without iterating,
/// as is the midpoint of an interval already narrower than `2·tol`.
///
/// # Errors
///
/// Returns [`RootError::InvalidInterval`] if `a >= b`,
/// [`RootError::NoRootInInterval`] if `f(a)` and `f(b)` have the same
/// strict sign, and [`RootError::IterationsExceeded`] if the budget runs
/// out first.
///
/// # Example
///
/// ```
/// use uniroot::root::{bisect, RootSettings};
///
/// let settings = RootSettings { tol: 1e-6, max_iter: 100 };
/// let r = bisect(|x| x * x - 2.0, 0.0, 2.0, &settings).unwrap();
/// assert!((r.x - core::f64::consts::SQRT_2).abs() < 1e-6);
/// ```
pub fn bisect<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    a: T,
    b: T,
    settings: &RootSettings<T>,
) -> Result<RootResult<T>, RootError> {
    if a >= b {
        return Err(RootError::InvalidInterval);
    }

    let mut lo = a;
    let mut hi = b;
    let mut f_lo = f(lo);
    let f_hi = f(hi);
    let mut evals = 2usize;

    if near_zero(f_lo, settings.tol) {
        return Ok(RootResult {
            x: lo,
            fx: f_lo,
            iterations: 0,
            evals,
        });
    }
    if near_zero(f_hi, settings.tol) {
        return Ok(RootResult {
            x: hi,
            fx: f_hi,
            iterations: 0,
            evals,
        });
    }
    if same_sign(f_lo, f_hi) {
        return Err(RootError::NoRootInInterval);
    }

    // Already narrower than the tolerance: the midpoint is the answer.
    if half(hi - lo) < settings.tol {
        let mid = lo + half(hi - lo);
        let f_mid = f(mid);
        return Ok(RootResult {
            x: mid,
            fx: f_mid,
            iterations: 0,
            evals: evals + 1,
        });
    }

    for iter in 0..settings.max_iter {
        let mid = lo + half(hi - lo);
        let f_mid = f(mid);
        evals += 1;

        if half(hi - lo) < settings.tol || near_zero(f_mid, settings.tol) {
            return Ok(RootResult {
                x: mid,
                fx: f_mid,
                iterations: iter + 1,
                evals,
            });
        }

        // Keep the half where the sign change survives, so
        // f(lo) · f(hi) <= 0 on every iteration.
        if same_sign(f_lo, f_mid) {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }

    Err(RootError::IterationsExceeded)
}
