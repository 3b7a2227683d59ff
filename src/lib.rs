//! # uniroot
//!
//! Scalar root finding for continuous real functions on a bounded
//! interval: the three classical iterative methods, the interval checks
//! that gate them, and a small expression engine so user-typed functions
//! can be solved directly. Pure Rust, no-std compatible.
//!
//! ## Quick start
//!
//! ```
//! use uniroot::root::{bisect, RootSettings};
//!
//! // Find √2 as the root of x² − 2 on [0, 2]
//! let r = bisect(|x| x * x - 2.0, 0.0, 2.0, &RootSettings::default()).unwrap();
//! assert!((r.x - core::f64::consts::SQRT_2).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`root`] — the core. [`bisect`](root::bisect),
//!   [`newton`](root::newton), and [`secant`](root::secant) over any
//!   `T: FloatScalar`, plus the interval validator
//!   ([`validate_bracket`](root::validate_bracket),
//!   [`validate_single_root`](root::validate_single_root) and its strict
//!   second-derivative variant) and the Fourier starting-point rule
//!   ([`newton_start`](root::newton_start)). Every algorithm is a pure,
//!   bounded computation returning a [`RootResult`](root::RootResult) or
//!   a typed [`RootError`](root::RootError); iteration budgets, not
//!   wall-clock timeouts, bound the work, so results are reproducible on
//!   any host.
//!
//! - [`expr`] — expression engine (feature `expr`). Parses a textual
//!   expression in one free variable into an [`Expr`](expr::Expr) AST
//!   with exponent notation, implicit multiplication, and bound
//!   constants `e`/`pi`; evaluates it numerically and differentiates it
//!   symbolically. This is the collaborator that supplies `f`, `f'`, and
//!   `f''` to the core — the solvers themselves only ever see numeric
//!   closures.
//!
//! - [`traits`] — the [`Scalar`]/[`FloatScalar`] element traits the core
//!   is generic over (`f32` and `f64`).
//!
//! The `uniroot` binary (feature `cli`) wires both together into the
//! interactive pick-method → enter-expression → solve loop.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Implies `alloc`. Hardware float math via std |
//! | `alloc` | via std  | Heap allocation, required by `expr` |
//! | `libm`  | no       | Pure-Rust float math for no_std targets |
//! | `expr`  | no       | Expression parsing and symbolic differentiation |
//! | `cli`   | no       | The interactive `uniroot` binary |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "expr")]
pub mod expr;
pub mod root;
pub mod traits;

pub use root::{Method, RootError, RootResult, RootSettings};
pub use traits::{FloatScalar, Scalar};

#[cfg(feature = "expr")]
pub use expr::{Expr, ExprError};
