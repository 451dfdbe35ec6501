//! A fittable view of an approximation.
//!
//! Least-squares fitters want a model function `y = m(x; p)`, a parameter count,
//! starting values and parameter names. [`ParametricModel`] provides all four for a
//! [`ChebyshevApproximation`], with the coefficients as the parameters.
//!
//! ```rust
//! # use chebapprox::ChebyshevApproximation;
//! let approx = ChebyshevApproximation::new(|x: f64| x * x, -1.0, 1.0, 3).unwrap();
//! let model = approx.as_model();
//!
//! assert_eq!(model.n_params(), 3);
//! assert_eq!(model.parameter_names(), ["c0", "c1", "c2"]);
//!
//! let y = model.eval(0.5, &model.initial_parameters()).unwrap();
//! assert!((y - 0.25).abs() < 1e-12);
//! ```
use crate::{approximation::ChebyshevApproximation, error::Result, value::Value};

/// A borrowed view of a [`ChebyshevApproximation`] as a parametric model.
///
/// The parameters are the `n` coefficients, in the approximation's [`crate::Normalization`].
#[derive(Debug, Clone, Copy)]
pub struct ParametricModel<'a, T: Value = f64> {
    approximation: &'a ChebyshevApproximation<T>,
}
impl<'a, T: Value> ParametricModel<'a, T> {
    pub(crate) fn new(approximation: &'a ChebyshevApproximation<T>) -> Self {
        Self { approximation }
    }

    /// The approximation this model evaluates through
    pub fn approximation(&self) -> &'a ChebyshevApproximation<T> {
        self.approximation
    }

    /// Number of free parameters, the degree of the approximation
    pub fn n_params(&self) -> usize {
        self.approximation.degree()
    }

    /// Starting values for a fit: the approximation's own coefficients
    pub fn initial_parameters(&self) -> Vec<T> {
        self.approximation.coefficients()
    }

    /// Parameter labels `c0`, `c1`, ... in coefficient order
    pub fn parameter_names(&self) -> Vec<String> {
        (0..self.n_params()).map(|j| format!("c{j}")).collect()
    }

    /// Evaluates the model at `x` for the given parameters.
    ///
    /// # Errors
    /// Returns [`crate::error::Error::InvalidParameterCount`] if `params` does not hold
    /// exactly [`Self::n_params`] values.
    pub fn eval(&self, x: T, params: &[T]) -> Result<T> {
        self.approximation.evaluate_with(x, params)
    }

    /// Residuals `yᵢ - m(xᵢ; params)` over a set of observations.
    ///
    /// This is the vector a least-squares fitter minimizes the norm of.
    ///
    /// # Errors
    /// Returns [`crate::error::Error::InvalidParameterCount`] if `params` does not hold
    /// exactly [`Self::n_params`] values.
    pub fn residuals(&self, data: &[(T, T)], params: &[T]) -> Result<Vec<T>> {
        data.iter()
            .map(|&(x, y)| self.eval(x, params).map(|m| y - m))
            .collect()
    }
}
