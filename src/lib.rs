//! # chebapprox
//! ## Swap an expensive function for a handful of coefficients
//!
//! Any smooth function on an interval can be written as a sum of Chebyshev polynomials, and
//! a few terms of that sum are usually all you need. This crate samples your function at the
//! Chebyshev nodes, computes the coefficients, and gives you back something cheap to evaluate
//! anywhere you like.
//!
//! It is designed for developers who need a compact, well-behaved stand-in for a function
//! (an analytic expression, a tabulated shape, an interpolated signal) without needing to
//! know what aliasing or the equioscillation theorem is.
//!
//! I provide a set of tools designed to help you:
//! - Approximate a function over `[a, b]` with a chosen number of coefficients
//! - Evaluate the expansion, or evaluate it with someone else's coefficients
//! - Hand the expansion to a least-squares fitter as a parametric model
//! - Write easy to understand tests confirming the approximation is good enough
//!
//! The simplest use-case is to replace a function with its approximation:
//! ```rust
//! # use chebapprox::{ChebyshevApproximation, assert_approximates};
//! let f = |x: f64| (-x * x).exp() * (3.0 * x).cos();
//! let approx = ChebyshevApproximation::new(f, -2.0, 2.0, 40).expect("Failed to approximate");
//!
//! // Max error over a grid spanning the interval
//! assert_approximates!(approx, f, 1e-8);
//! println!("{approx}");
//! ```
//!
//! # Core Concepts
//! - A [`ChebyshevApproximation`] is a truncated Chebyshev series `y(x) = Σ cⱼ·Tⱼ(xₛ)`.
//!     - It is built once from a source function, which is not kept around.
//!     - It can be evaluated for any `x`, but is only a good approximation inside `[a, b]`.
//! - The **degree** `n` is the number of coefficients, and of nodes the source is sampled at.
//!     - Smooth functions converge very quickly: every extra term buys accuracy.
//!     - An expansion of `n` terms reproduces any polynomial of degree below `n` exactly.
//! - An [`Interval`] maps the working domain `[a, b]` onto `[-1, 1]` where the polynomials live.
//! - [`Normalization::Normalized`] factors `c0` out of the series, to keep the scale of the function
//!   separate from its shape when refining the coefficients with a fitter. See [`ParametricModel`].
//!
//! # Implementation Details
//!
//! This crate makes use of the `nalgebra` library for the linear algebra, and is generic
//! over the float type (`f64` by default, `f32` also works).
//!
//! Construction logs the coefficients and a per-node check through the `log` facade at `debug` level.
//! Install any logger to see them.
//!
//! # Testing utilities
//!
//! This crate includes a set of assertion macros for validating approximations. See [`test`].
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::needless_range_loop)] // The worst clippy lint
#![allow(clippy::cast_precision_loss)] // I don't care about this one
#![allow(clippy::similar_names)] //       Clippy does not get to decide what names are similar
#![cfg_attr(docsrs, feature(doc_cfg))]


pub mod chebyshev;
pub mod display;
pub mod domain;
pub mod error;
pub mod value;

mod approximation;
mod model;

pub use approximation::{ApproximationOptions, ChebyshevApproximation, Normalization};
pub use chebyshev::ChebyshevBasis;
pub use domain::Interval;
pub use model::ParametricModel;

pub use nalgebra;
