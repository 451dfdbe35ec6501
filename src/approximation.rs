//! Chebyshev approximation of a scalar function over an interval.
use std::ops::RangeInclusive;

use nalgebra::{DMatrix, DVector};

use crate::{
    chebyshev::ChebyshevBasis,
    domain::Interval,
    error::{Error, Result},
    model::ParametricModel,
    value::{SteppedValues, Value},
};

/// How coefficients are stored and evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Normalization {
    /// Plain Chebyshev coefficients, evaluated as `Σ cⱼ·Tⱼ(t)`.
    #[default]
    Raw,

    /// Shape coefficients are divided by `c0`, and evaluated as `c0·(1 + Σ_{j≥1} cⱼ·Tⱼ(t))`.
    ///
    /// This separates the overall scale of the function (`c0`) from its shape, which
    /// tends to decorrelate the parameters when the expansion is refined by a fitter.
    Normalized,
}

/// Options for building a [`ChebyshevApproximation`].
///
/// ```rust
/// # use chebapprox::{ApproximationOptions, Normalization};
/// let options = ApproximationOptions::default().with_normalization(Normalization::Normalized);
/// assert_eq!(options.normalization, Normalization::Normalized);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApproximationOptions {
    /// Coefficient convention, see [`Normalization`]
    pub normalization: Normalization,
}
impl ApproximationOptions {
    /// Sets the coefficient convention
    #[must_use]
    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }
}

/// A truncated Chebyshev expansion of a function over `[a, b]`.
///
/// The source function is sampled once, at the `n` Chebyshev nodes of the interval, and
/// is not retained afterwards. The resulting approximation is immutable and can be
/// evaluated at any `x`, including outside `[a, b]` (where it extrapolates).
///
/// # Type Parameters
/// - `T`: Numeric type for nodes and coefficients, default is `f64`.
///
/// # Example
/// ```rust
/// # use chebapprox::ChebyshevApproximation;
/// let approx = ChebyshevApproximation::new(f64::cos, -5.0, 5.0, 16).unwrap();
/// assert!((approx.evaluate(0.0) - 1.0).abs() < 1e-4);
/// assert_eq!(approx.coefficients().len(), 16);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ChebyshevApproximation<T: Value = f64> {
    basis: ChebyshevBasis<T>,
    nodes: Vec<(T, T)>,
    samples: Vec<T>,
    coefficients: Vec<T>,
    normalization: Normalization,
}
impl<T: Value> ChebyshevApproximation<T> {
    /// Approximates `f` over `[a, b]` with `n` Chebyshev coefficients.
    ///
    /// <div class="warning">
    ///
    /// **Technical Details**
    ///
    /// For nodes `tₖ = cos((k - ½)/n · π)` and their images `xₖ` on `[a, b]`:
    /// ```math
    /// cⱼ = (2/n) Σₖ f(xₖ)·Tⱼ(tₖ)
    /// ```
    /// `c0` is then halved, so that the expansion is evaluated as a plain `Σ cⱼ·Tⱼ(t)`.
    /// </div>
    ///
    /// # Errors
    /// - [`Error::InvalidDegree`] if `n` is 0.
    /// - [`Error::InvalidInterval`] if `a >= b` or either bound is not finite.
    /// - [`Error::Evaluation`] if `f` is not finite at a node.
    ///
    /// The degree and interval are checked before `f` is ever called.
    pub fn new<F: Fn(T) -> T>(f: F, a: T, b: T, n: usize) -> Result<Self> {
        Self::with_options(f, a, b, n, ApproximationOptions::default())
    }

    /// Approximates `f` over `[a, b]` with `n` Chebyshev coefficients, using the given options.
    ///
    /// # Errors
    /// See [`Self::new`]. Additionally returns [`Error::ZeroNormalization`] if normalization
    /// was requested and `c0` is zero.
    ///
    /// # Example
    /// ```rust
    /// # use chebapprox::{ChebyshevApproximation, ApproximationOptions, Normalization};
    /// let options = ApproximationOptions::default().with_normalization(Normalization::Normalized);
    /// let approx = ChebyshevApproximation::with_options(|x: f64| 2.0 + x, -1.0, 1.0, 2, options).unwrap();
    ///
    /// let c = approx.coefficients();
    /// assert!((c[0] - 2.0).abs() < 1e-12);
    /// assert!((c[1] - 0.5).abs() < 1e-12);
    /// ```
    pub fn with_options<F: Fn(T) -> T>(
        f: F,
        a: T,
        b: T,
        n: usize,
        options: ApproximationOptions,
    ) -> Result<Self> {
        Self::try_with_options(|x| Some(f(x)), a, b, n, options)
    }

    /// Approximates a source that may be undefined at some points.
    ///
    /// `f` returns `None` where it has no value, for example outside the range of a
    /// tabulated signal.
    ///
    /// # Errors
    /// See [`Self::new`]. A `None` sample is reported as [`Error::Evaluation`].
    pub fn try_new<F: Fn(T) -> Option<T>>(f: F, a: T, b: T, n: usize) -> Result<Self> {
        Self::try_with_options(f, a, b, n, ApproximationOptions::default())
    }

    /// Fallible-source version of [`Self::with_options`].
    ///
    /// # Errors
    /// See [`Self::with_options`] and [`Self::try_new`].
    pub fn try_with_options<F: Fn(T) -> Option<T>>(
        f: F,
        a: T,
        b: T,
        n: usize,
        options: ApproximationOptions,
    ) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidDegree(n));
        }

        let basis = ChebyshevBasis::new(Interval::new(a, b)?);
        let nodes = basis.nodes(n);

        let mut samples = Vec::with_capacity(n);
        for &(_, x) in &nodes {
            match f(x) {
                Some(y) if Value::is_finite(y) => samples.push(y),
                Some(y) => {
                    return Err(Error::Evaluation {
                        x: x.to_string(),
                        value: y.to_string(),
                    })
                }
                None => {
                    return Err(Error::Evaluation {
                        x: x.to_string(),
                        value: "undefined".to_string(),
                    })
                }
            }
        }

        // design[k][j] = Tⱼ(tₖ)
        let mut design = DMatrix::<T>::zeros(n, n);
        for (k, &(t, _)) in nodes.iter().enumerate() {
            basis.fill_matrix_row(0, t, design.row_mut(k));
        }

        let scale = T::two() / T::try_cast(n)?;
        let raw = design.tr_mul(&DVector::from_column_slice(&samples)) * scale;

        let mut coefficients: Vec<T> = raw.iter().copied().collect();
        coefficients[0] /= T::two();

        if options.normalization == Normalization::Normalized {
            let c0 = coefficients[0];
            if c0 == T::zero() {
                return Err(Error::ZeroNormalization);
            }

            for c in coefficients.iter_mut().skip(1) {
                *c /= c0;
            }
        }

        let approximation = Self {
            basis,
            nodes,
            samples,
            coefficients,
            normalization: options.normalization,
        };

        log::debug!(
            "Chebyshev approximation of degree {n} on [{a}, {b}] ({:?}): {:?}",
            approximation.normalization,
            approximation.coefficients
        );
        if log::log_enabled!(log::Level::Debug) {
            for (x, y) in approximation.samples() {
                log::debug!(
                    "  node x = {x}, f(x) = {y}, approximation = {}",
                    approximation.evaluate(x)
                );
            }
            log::debug!("  max node residual = {:e}", approximation.node_residual());
        }

        Ok(approximation)
    }

    /// Returns a copy of the coefficients `c0 .. c[n-1]`.
    ///
    /// `c0` is already halved. In [`Normalization::Normalized`] mode the remaining
    /// coefficients are relative to `c0`.
    pub fn coefficients(&self) -> Vec<T> {
        self.coefficients.clone()
    }

    /// Evaluates the expansion at `x`.
    ///
    /// `x` is not restricted to the interval; outside it the expansion extrapolates, and
    /// quickly stops being a good approximation of the source. Non-finite `x` yields a
    /// non-finite result.
    ///
    /// <div class="warning">
    ///
    /// **Technical Details**
    ///
    /// With `t = (x - (a+b)/2) / ((b-a)/2)`:
    /// ```math
    /// y(x) = Σ cⱼ·Tⱼ(t)                  (raw)
    /// y(x) = c0·(1 + Σ_{j≥1} cⱼ·Tⱼ(t))   (normalized)
    /// ```
    /// </div>
    pub fn evaluate(&self, x: T) -> T {
        self.series(self.basis.normalize_x(x), &self.coefficients)
    }

    /// Evaluates the expansion at `x` with externally supplied coefficients.
    ///
    /// Uses the same interval and [`Normalization`] as this approximation. This is the
    /// model function a fitter refines the coefficients through.
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameterCount`] if `params.len()` is not the degree.
    ///
    /// # Example
    /// ```rust
    /// # use chebapprox::ChebyshevApproximation;
    /// let approx = ChebyshevApproximation::new(|x: f64| x, 0.0, 10.0, 2).unwrap();
    /// assert_eq!(approx.evaluate_with(10.0, &[1.0, 2.0]), Ok(3.0));
    /// assert!(approx.evaluate_with(10.0, &[1.0]).is_err());
    /// ```
    pub fn evaluate_with(&self, x: T, params: &[T]) -> Result<T> {
        self.check_parameter_count(params)?;
        Ok(self.series(self.basis.normalize_x(x), params))
    }

    /// Evaluates the expansion at multiple x-values.
    ///
    /// # Returns
    /// A `Vec` of `(x, y)` pairs corresponding to each input value.
    pub fn solve(&self, x: impl IntoIterator<Item = T>) -> Vec<(T, T)> {
        x.into_iter().map(|x| (x, self.evaluate(x))).collect()
    }

    /// Evaluates the expansion over an inclusive range of x-values with a fixed step.
    ///
    /// A non-positive step yields no points.
    ///
    /// ```rust
    /// # use chebapprox::ChebyshevApproximation;
    /// let approx = ChebyshevApproximation::new(f64::sin, 0.0, 3.0, 12).unwrap();
    /// let points = approx.solve_range(0.0..=3.0, 0.5);
    /// assert_eq!(points.len(), 7);
    /// ```
    pub fn solve_range(&self, range: RangeInclusive<T>, step: T) -> Vec<(T, T)> {
        self.solve(SteppedValues::new(range, step))
    }

    /// Returns a new approximation on the same interval, nodes and normalization, carrying
    /// the given coefficients.
    ///
    /// Useful to keep working with the result of a downstream refinement. `self` is not modified.
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameterCount`] if `params.len()` is not the degree.
    pub fn with_coefficients(&self, params: &[T]) -> Result<Self> {
        self.check_parameter_count(params)?;
        Ok(Self {
            coefficients: params.to_vec(),
            ..self.clone()
        })
    }

    /// The working interval `[a, b]`
    pub fn interval(&self) -> &Interval<T> {
        self.basis.interval()
    }

    /// The basis the expansion is written in
    pub fn basis(&self) -> &ChebyshevBasis<T> {
        &self.basis
    }

    /// Number of coefficients (and of nodes)
    pub fn degree(&self) -> usize {
        self.coefficients.len()
    }

    /// The coefficient convention in use
    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    /// Returns a copy of the Chebyshev nodes as `(tₖ, xₖ)` pairs.
    ///
    /// `tₖ` is on `[-1, 1]`, `xₖ` is its image on the working interval.
    pub fn nodes(&self) -> Vec<(T, T)> {
        self.nodes.clone()
    }

    /// Returns the source samples as `(xₖ, f(xₖ))` pairs.
    pub fn samples(&self) -> Vec<(T, T)> {
        self.nodes
            .iter()
            .zip(&self.samples)
            .map(|(&(_, x), &y)| (x, y))
            .collect()
    }

    /// Largest absolute difference between the expansion and the source over the nodes.
    ///
    /// For an approximation built from a source this is at rounding level, since the
    /// expansion interpolates the source at every node. After [`Self::with_coefficients`]
    /// it measures how far the refined coefficients moved away from the samples.
    pub fn node_residual(&self) -> T {
        self.samples()
            .into_iter()
            .map(|(x, y)| Value::abs_sub(self.evaluate(x), y))
            .fold(T::zero(), |max, r| if r > max { r } else { max })
    }

    /// Returns a view of this approximation shaped for a least-squares fitter.
    ///
    /// See [`ParametricModel`].
    pub fn as_model(&self) -> ParametricModel<'_, T> {
        ParametricModel::new(self)
    }

    fn check_parameter_count(&self, params: &[T]) -> Result<()> {
        if params.len() == self.degree() {
            Ok(())
        } else {
            Err(Error::InvalidParameterCount {
                expected: self.degree(),
                got: params.len(),
            })
        }
    }

    fn series(&self, t: T, coefficients: &[T]) -> T {
        match self.normalization {
            Normalization::Raw => self.basis.series(t, coefficients),
            Normalization::Normalized => {
                let Some(&c0) = coefficients.first() else {
                    return T::zero();
                };

                let shape = coefficients
                    .iter()
                    .zip(self.basis.terms(t))
                    .skip(1)
                    .fold(T::one(), |y, (&c, tj)| y + c * tj);
                c0 * shape
            }
        }
    }
}
