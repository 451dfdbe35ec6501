//! Numeric types and iteration utilities for Chebyshev approximations.
//!
//! This module defines the [`Value`] trait, which abstracts the numeric
//! types that can be used for nodes, coefficients and evaluation, ensuring
//! compatibility with nalgebra, floating-point operations, and formatting.
//!
//! # Traits
//!
//! - [`Value`]: Extends `RealField` and `FloatCore` to provide:
//!   - A canonical `two()` constant.
//!   - `try_cast` for safe type conversion with error handling.
//!   - Unambiguous `abs` and `is_finite`.
//!
//! # Iterators
//!
//! - [`SteppedValues`]: A floating-point range iterator with a specified step,
//!   useful for generating evaluation grids.
//!
//! # Example
//!
//! ```rust
//! use chebapprox::value::{Value, SteppedValues};
//!
//! // Create a range of f64 values from 0.0 to 1.0 in steps of 0.1
//! let range = SteppedValues::new(0.0..=1.0, 0.1);
//! for x in range {
//!     println!("{x}");
//! }
//!
//! let two = f64::two();
//! assert!(Value::is_finite(two));
//! ```
use std::ops::RangeInclusive;

use crate::error::Error;

/// Numeric type for approximations
pub trait Value:
    nalgebra::Scalar
    + nalgebra::ComplexField<RealField = Self>
    + nalgebra::RealField
    + num_traits::float::FloatCore
    + std::fmt::LowerExp
{
    /// Returns the value 2.0
    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Tries to cast a value to the target type
    ///
    /// # Errors
    /// Returns an error if the cast fails
    fn try_cast<U: num_traits::NumCast>(n: U) -> Result<Self, Error> {
        num_traits::cast(n).ok_or(Error::CastFailed)
    }

    /// Get the absolute value for a numeric type
    #[must_use]
    fn abs(self) -> Self {
        nalgebra::ComplexField::abs(self)
    }

    /// Returns the absolute difference between two values.
    #[must_use]
    fn abs_sub(self, other: Self) -> Self {
        nalgebra::ComplexField::abs(self - other)
    }

    /// Returns true if the value is neither infinite nor NaN
    fn is_finite(self) -> bool {
        num_traits::float::FloatCore::is_finite(self)
    }

    /// Converts a `usize` to the target numeric type.
    ///
    /// Results in `infinity` if the value is out of range.
    #[must_use]
    fn from_positive_int(n: usize) -> Self {
        Self::try_cast(n).unwrap_or(Self::infinity())
    }
}

impl<T> Value for T where
    T: nalgebra::Scalar
        + nalgebra::ComplexField<RealField = Self>
        + nalgebra::RealField
        + num_traits::float::FloatCore
        + std::fmt::LowerExp
{
}

/// Iterator over a range of floating-point values with a specified step.
///
/// This iterator yields values starting from `start` up to and including `end`,
/// incrementing by `step` on each iteration.
pub struct SteppedValues<T: Value> {
    range: RangeInclusive<T>,
    step: T,
    index: T,
}
impl<T: Value> SteppedValues<T> {
    /// Creates a new iterator over stepped values in a range
    ///
    /// Will yield values starting from `range.start` up to and including `range.end`
    pub fn new(range: RangeInclusive<T>, step: T) -> Self {
        Self {
            range,
            step,
            index: T::zero(),
        }
    }
}
impl<T: Value> Iterator for SteppedValues<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        // A non-positive step would never reach the end
        if self.step <= T::zero() {
            return None;
        }

        let value = *self.range.start() + self.index * self.step;
        if value <= *self.range.end() {
            self.index += T::one();
            Some(value)
        } else {
            None
        }
    }
}

/// Extension trait for accessing the `x` and `y` coordinates of sampled points.
///
/// ```
/// # use chebapprox::value::CoordExt;
/// let data = vec![(1.5, -2.0), (2.0, 3.0), (0.0, 1.0)];
/// assert_eq!(data.y(), vec![-2.0, 3.0, 1.0]);
/// ```
pub trait CoordExt<T: Value> {
    /// Returns an iterator over the x-coordinates.
    fn x_iter(&self) -> impl Iterator<Item = T>;

    /// Returns an iterator over the y-coordinates.
    fn y_iter(&self) -> impl Iterator<Item = T>;

    /// Returns the x-coordinates.
    fn x(&self) -> Vec<T> {
        self.x_iter().collect()
    }

    /// Returns the y-coordinates.
    fn y(&self) -> Vec<T> {
        self.y_iter().collect()
    }
}
impl<T: Value> CoordExt<T> for Vec<(T, T)> {
    fn x_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(x, _)| *x)
    }

    fn y_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(_, y)| *y)
    }
}
impl<T: Value> CoordExt<T> for &[(T, T)] {
    fn x_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(x, _)| *x)
    }

    fn y_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(_, y)| *y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_range() {
        let range = SteppedValues::new(0.0..=1.0, 0.1);
        let values: Vec<_> = range.collect();
        assert_eq!(values.len(), 11);
    }

    #[test]
    fn test_value_range_bad_step() {
        assert_eq!(SteppedValues::new(0.0..=1.0, 0.0).count(), 0);
        assert_eq!(SteppedValues::new(0.0..=1.0, -1.0).count(), 0);
    }

    #[test]
    fn test_try_cast() {
        assert_eq!(f64::try_cast(3usize), Ok(3.0));
        assert_eq!(f64::from_positive_int(7), 7.0);
    }

    #[test]
    fn test_finite() {
        assert!(Value::is_finite(1.0f64));
        assert!(!Value::is_finite(f64::NAN));
        assert!(!Value::is_finite(f32::INFINITY));
    }

    #[test]
    fn test_coords() {
        let data = vec![(0.0, 1.0), (1.0, 2.0)];
        assert_eq!(data.x(), vec![0.0, 1.0]);
        assert_eq!(data.y(), vec![1.0, 2.0]);
    }
}
