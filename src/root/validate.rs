use crate::traits::FloatScalar;

use super::{near_zero, same_sign, RootError};

/// Number of subdivisions of `[a, b]` used by the uniqueness checks;
/// the derivative is sampled at the `DIVISIONS - 1` interior points.
/// Even, so symmetric intervals get their midpoint sampled exactly.
const DIVISIONS: usize = 400;

/// A sampled derivative within this distance of zero counts as a
/// stationary point.
const STATIONARY_EPS: f64 = 1e-12;

/// Check that `[a, b]` is a plausible root bracket.
///
/// Rejects `a >= b`, then applies the intermediate-value-theorem sign
/// test: a continuous `f` with `f(a) · f(b) < 0` has a root in `(a, b)`.
/// The test is sufficient, not necessary — an interval with an even
/// number of sign changes is rejected even though it contains roots.
///
/// # Errors
///
/// Returns [`RootError::InvalidInterval`] if `a >= b`.
/// Returns [`RootError::NoRootInInterval`] if `f(a)` and `f(b)` have the
/// same strict sign.
///
/// # Example
///
/// ```
/// use uniroot::root::{validate_bracket, RootError};
///
/// assert!(validate_bracket(|x: f64| x * x - 2.0, 0.0, 2.0).is_ok());
/// // f(0) = −4 and f(1) = −3: same sign, no guaranteed root
/// assert_eq!(
///     validate_bracket(|x: f64| x * x - 4.0, 0.0, 1.0),
///     Err(RootError::NoRootInInterval),
/// );
/// ```
pub fn validate_bracket<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    a: T,
    b: T,
) -> Result<(), RootError> {
    if a >= b {
        return Err(RootError::InvalidInterval);
    }
    if same_sign(f(a), f(b)) {
        return Err(RootError::NoRootInInterval);
    }
    Ok(())
}

/// Check that `[a, b]` plausibly contains exactly one root.
///
/// Runs the existence test of [`validate_bracket`], then a sampling-based
/// monotonicity test on the derivative: `df` is evaluated at 399 evenly
/// spaced interior points, and the interval is rejected if any sample is
/// within `1e-12` of zero (a stationary point may hide extra roots) or if
/// both strictly positive and strictly negative samples occur (`f` is not
/// monotone).
///
/// This is a heuristic, not a proof — behavior between sample points is
/// unobserved, so both false positives and false negatives are possible.
/// Required before [`newton`](super::newton) and [`secant`](super::secant),
/// which assume a single simple root; [`bisect`](super::bisect) does not
/// need it.
///
/// # Errors
///
/// Returns [`RootError::InvalidInterval`], [`RootError::NoRootInInterval`],
/// or [`RootError::MultipleRootsSuspected`].
pub fn validate_single_root<T: FloatScalar>(
    f: impl FnMut(T) -> T,
    mut df: impl FnMut(T) -> T,
    a: T,
    b: T,
) -> Result<(), RootError> {
    validate_bracket(f, a, b)?;
    sign_pattern_scan(&mut df, a, b)
}

/// Stricter uniqueness check using both derivatives.
///
/// Like [`validate_single_root`], but the sign-pattern scan runs on the
/// *second* derivative (so inflection points are flagged, not just
/// extrema), and the first derivative must additionally stay bounded away
/// from zero at every sample.
///
/// # Errors
///
/// Returns [`RootError::InvalidInterval`], [`RootError::NoRootInInterval`],
/// or [`RootError::MultipleRootsSuspected`].
pub fn validate_single_root_strict<T: FloatScalar>(
    f: impl FnMut(T) -> T,
    mut df: impl FnMut(T) -> T,
    mut d2f: impl FnMut(T) -> T,
    a: T,
    b: T,
) -> Result<(), RootError> {
    validate_bracket(f, a, b)?;

    let eps = T::from(STATIONARY_EPS).unwrap();
    let step = (b - a) / T::from(DIVISIONS).unwrap();
    let mut seen_pos = false;
    let mut seen_neg = false;
    for i in 1..DIVISIONS {
        let x = a + step * T::from(i).unwrap();
        if near_zero(df(x), eps) {
            return Err(RootError::MultipleRootsSuspected);
        }
        let c = d2f(x);
        if near_zero(c, eps) {
            return Err(RootError::MultipleRootsSuspected);
        }
        if c > T::zero() {
            seen_pos = true;
        } else {
            seen_neg = true;
        }
        if seen_pos && seen_neg {
            return Err(RootError::MultipleRootsSuspected);
        }
    }
    Ok(())
}

/// Pick the Newton-Raphson starting endpoint by Fourier's condition.
///
/// Returns `a` when `f(a) · f''(a) > 0`, otherwise `b`. On an interval
/// where `f` is convex/concave-consistent, starting from the endpoint
/// whose function value shares the sign of the second derivative gives
/// monotone, non-oscillating convergence. The choice is made once, here,
/// outside the Newton loop.
pub fn newton_start<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    mut d2f: impl FnMut(T) -> T,
    a: T,
    b: T,
) -> T {
    if same_sign(f(a), d2f(a)) {
        a
    } else {
        b
    }
}

/// Reject if `g` has a near-zero sample or takes both strict signs on the
/// interior of `[a, b]`.
fn sign_pattern_scan<T: FloatScalar>(
    g: &mut impl FnMut(T) -> T,
    a: T,
    b: T,
) -> Result<(), RootError> {
    let eps = T::from(STATIONARY_EPS).unwrap();
    let step = (b - a) / T::from(DIVISIONS).unwrap();
    let mut seen_pos = false;
    let mut seen_neg = false;
    for i in 1..DIVISIONS {
        let x = a + step * T::from(i).unwrap();
        let g_x = g(x);
        if near_zero(g_x, eps) {
            return Err(RootError::MultipleRootsSuspected);
        }
        if g_x > T::zero() {
            seen_pos = true;
        } else {
            seen_neg = true;
        }
        if seen_pos && seen_neg {
            return Err(RootError::MultipleRootsSuspected);
        }
    }
    Ok(())
}
