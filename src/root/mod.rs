//! Scalar root finding: interval validation plus three classical iterative
//! methods.
//!
//! # Algorithms
//!
//! | Function   | Needs          | Converges                  | Guarded against |
//! |------------|----------------|----------------------------|-----------------|
//! | [`bisect`] | sign change    | always (bracket halves)    | missing bracket |
//! | [`newton`] | `f'`           | quadratic near simple root | zero derivative |
//! | [`secant`] | two start points | superlinear (~1.618)     | flat secant     |
//!
//! Callers validate the interval first — [`validate_bracket`] for the
//! existence check (sign change at the endpoints), [`validate_single_root`]
//! when the method also assumes a unique root (Newton, secant). Bisection
//! only needs the sign change and re-checks it internally: it shrinks
//! monotonically toward *a* root even if the bracket holds several.
//!
//! Every call is pure and stateless; the same inputs give the same output,
//! and nothing is retried internally. A failure is returned as a
//! [`RootError`] and method selection after a failure is the caller's
//! decision.
//!
//! # Example
//!
//! ```
//! use uniroot::root::{bisect, RootSettings};
//!
//! // Find √2 as the root of x² − 2
//! let r = bisect(|x| x * x - 2.0, 0.0, 2.0, &RootSettings::default()).unwrap();
//! assert!((r.x - core::f64::consts::SQRT_2).abs() < 1e-9);
//! ```

mod bisect;
mod newton;
mod secant;
mod validate;


pub use bisect::bisect;
pub use newton::newton;
pub use secant::secant;
pub use validate::{
    newton_start, validate_bracket, validate_single_root, validate_single_root_strict,
};

use crate::traits::FloatScalar;

/// Errors from interval validation and the root-finding algorithms.
///
/// Every variant is terminal for the current call: the algorithms perform
/// no internal retry, no fallback to another method, and no clamping of
/// inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootError {
    /// The interval endpoints do not satisfy `a < b`.
    InvalidInterval,
    /// `f(a)` and `f(b)` have the same strict sign, so the intermediate
    /// value theorem cannot guarantee a root in the interval.
    NoRootInInterval,
    /// Derivative sampling observed a stationary point or a sign change,
    /// so a unique root cannot be assumed.
    MultipleRootsSuspected,
    /// The iteration budget was exhausted before convergence.
    IterationsExceeded,
    /// Newton step undefined: the derivative is exactly zero at the
    /// current iterate.
    DerivativeVanished,
    /// Secant step undefined: the two window points have exactly equal
    /// function values.
    StalledDenominator,
}

impl core::fmt::Display for RootError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RootError::InvalidInterval => write!(f, "interval endpoints must satisfy a < b"),
            RootError::NoRootInInterval => {
                write!(f, "no sign change on the interval, cannot guarantee a root")
            }
            RootError::MultipleRootsSuspected => {
                write!(f, "derivative sampling suggests more than one root in the interval")
            }
            RootError::IterationsExceeded => {
                write!(f, "iteration budget exhausted before convergence")
            }
            RootError::DerivativeVanished => {
                write!(f, "derivative is zero at the current iterate")
            }
            RootError::StalledDenominator => {
                write!(f, "secant denominator is zero, the two points have equal values")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RootError {}

/// Result of a scalar root-finding algorithm.
#[derive(Debug, Clone, Copy)]
pub struct RootResult<T> {
    /// Approximate root.
    pub x: T,
    /// Function value at the root: `f(x)`.
    pub fx: T,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Number of function (and derivative) evaluations.
    pub evals: usize,
}

/// Settings for the root-finding algorithms.
///
/// `tol` is a single absolute tolerance, applied both to the step size or
/// bracket half-width and to the residual `|f(x)|` — whichever predicate
/// is met first terminates the iteration. It must be non-negative and
/// `max_iter` must be at least 1; out-of-range values cannot cause
/// unsoundness, only an [`RootError::IterationsExceeded`] outcome.
#[derive(Debug, Clone, Copy)]
pub struct RootSettings<T> {
    /// Absolute convergence tolerance.
    pub tol: T,
    /// Maximum number of iterations.
    pub max_iter: usize,
}

impl Default for RootSettings<f64> {
    fn default() -> Self {
        Self {
            tol: 1e-9,
            max_iter: 100,
        }
    }
}

impl Default for RootSettings<f32> {
    fn default() -> Self {
        Self {
            tol: 1e-4,
            max_iter: 100,
        }
    }
}

/// Which root-finding algorithm to run.
///
/// Selecting the method is the orchestration layer's job; the variants do
/// not change each other's behavior in any way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Bracketing by repeated halving.
    Bisection,
    /// Tangent-line iteration with a caller-supplied derivative.
    NewtonRaphson,
    /// Two-point secant iteration, derivative-free.
    Secant,
}

impl core::fmt::Display for Method {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Method::Bisection => write!(f, "bisection"),
            Method::NewtonRaphson => write!(f, "newton-raphson"),
            Method::Secant => write!(f, "secant"),
        }
    }
}

/// `|x| <= tol`, the absolute is-close-to-zero test shared by all
/// termination predicates.
pub(crate) fn near_zero<T: FloatScalar>(x: T, tol: T) -> bool {
    x.abs() <= tol
}

/// Strict same-sign test: true iff the product is strictly positive.
/// False when either value is zero.
pub(crate) fn same_sign<T: FloatScalar>(a: T, b: T) -> bool {
    a * b > T::zero()
}

/// `x / 2` without a `T::from(2)` round trip.
pub(crate) fn half<T: FloatScalar>(x: T) -> T {
    x / (T::one() + T::one())
}
