use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can appear in numeric computations.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point scalars.
///
/// Required by the root-finding algorithms and the interval validator,
/// which need `abs`, ordered comparison, and conversion from small
/// constants. Implemented for `f32` and `f64`; on no_std targets the
/// math comes from `libm` via the `libm` feature.
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}
