//! The working interval of an approximation, and its map onto `[-1, 1]`.
use crate::{
    error::{Error, Result},
    value::Value,
};

/// A validated, finite interval `[a, b]` with `a < b`.
///
/// Chebyshev polynomials live on the canonical interval `[-1, 1]`; an `Interval`
/// maps points between that and the working domain with the affine transform
/// `x = (b - a)/2 · t + (a + b)/2`.
///
/// Unlike a clamping normalizer, points outside `[a, b]` are mapped linearly beyond
/// `[-1, 1]`, so evaluating an expansion there extrapolates instead of saturating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<T: Value = f64> {
    a: T,
    b: T,
}
impl<T: Value> Interval<T> {
    /// Creates a new interval.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInterval`] if `a >= b`, or if either bound is not finite.
    ///
    /// # Example
    /// ```rust
    /// # use chebapprox::domain::Interval;
    /// let interval = Interval::new(0.0, 10.0).unwrap();
    /// assert_eq!(interval.to_canonical(10.0), 1.0);
    /// assert!(Interval::new(1.0, 1.0).is_err());
    /// ```
    pub fn new(a: T, b: T) -> Result<Self> {
        // `!(a < b)` also rejects NaN bounds
        if !Value::is_finite(a) || !Value::is_finite(b) || !(a < b) {
            return Err(Error::InvalidInterval(a.to_string(), b.to_string()));
        }

        Ok(Self { a, b })
    }

    /// Lower bound `a`
    pub fn a(&self) -> T {
        self.a
    }

    /// Upper bound `b`
    pub fn b(&self) -> T {
        self.b
    }

    /// Midpoint `(a + b) / 2`
    pub fn center(&self) -> T {
        // Halve first, so that wide finite bounds cannot overflow
        self.a / T::two() + self.b / T::two()
    }

    /// Half width `(b - a) / 2`
    pub fn half_width(&self) -> T {
        self.b / T::two() - self.a / T::two()
    }

    /// Returns true if `x` lies within `[a, b]`
    pub fn contains(&self, x: T) -> bool {
        x >= self.a && x <= self.b
    }

    /// Maps a canonical coordinate `t` in `[-1, 1]` onto the working interval.
    pub fn from_canonical(&self, t: T) -> T {
        self.half_width() * t + self.center()
    }

    /// Maps `x` from the working interval onto the canonical coordinate `t`.
    pub fn to_canonical(&self, x: T) -> T {
        (x - self.center()) / self.half_width()
    }
}

impl<T: Value> std::fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "T[ {}..{} -> -1..1 ]", self.a, self.b)
    }
}
