//! Chebyshev polynomials of the first kind on a working interval.
//!
//! [`ChebyshevBasis`] bundles the three pieces of numerical machinery every
//! approximation needs:
//! - The three-term recurrence `T₀ = 1, T₁ = t, Tₘ₊₁ = 2t·Tₘ - Tₘ₋₁`.
//! - The Chebyshev nodes, the `n` zeros of `Tₙ` on `[-1, 1]`, and their images on `[a, b]`.
//! - The affine map between the working interval and `[-1, 1]`, see [`Interval`].
use nalgebra::MatrixViewMut;

use crate::{domain::Interval, value::Value};

/// Chebyshev basis of the first kind over an [`Interval`].
///
/// Inputs are normalized so that the working domain [`a`, `b`] is mapped onto [-1, 1].
/// This allows Chebyshev polynomials to be used naturally with arbitrary input ranges
/// while retaining their stability properties.
///
/// # Why Chebyshev?
/// - Interpolating on Chebyshev nodes minimizes **Runge's phenomenon**.
/// - Truncated Chebyshev series are near-optimal uniform approximations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChebyshevBasis<T: Value = f64> {
    interval: Interval<T>,
}
impl<T: Value> ChebyshevBasis<T> {
    /// Creates a new Chebyshev basis over the given interval.
    pub fn new(interval: Interval<T>) -> Self {
        Self { interval }
    }

    /// The working interval of this basis
    pub fn interval(&self) -> &Interval<T> {
        &self.interval
    }

    /// Maps `x` from the working interval onto `[-1, 1]`.
    #[inline]
    pub fn normalize_x(&self, x: T) -> T {
        self.interval.to_canonical(x)
    }

    /// Maps a canonical coordinate `t` back onto the working interval.
    #[inline]
    pub fn denormalize_x(&self, t: T) -> T {
        self.interval.from_canonical(t)
    }

    /// Evaluates the jth Chebyshev polynomial `Tⱼ(t)`.
    ///
    /// `t` is a canonical coordinate; see [`Self::normalize_x`].
    #[inline]
    pub fn solve_function(&self, j: usize, t: T) -> T {
        match j {
            0 => T::one(), // T0(t) = 1
            1 => t,        // T1(t) = t
            _ => {
                // Tn(t) = 2t*T_{n-1}(t) - T_{n-2}(t)
                let mut t0 = T::one();
                let mut t1 = t;
                let mut tn = T::zero();

                for _ in 2..=j {
                    tn = T::two() * t * t1 - t0;
                    t0 = t1;
                    t1 = tn;
                }

                tn
            }
        }
    }

    /// Populates a matrix row with `Tⱼ(t)` for every column `j >= start_index`.
    ///
    /// Columns before `start_index` are left untouched.
    /// `t` is a canonical coordinate; see [`Self::normalize_x`].
    #[inline]
    pub fn fill_matrix_row<R: nalgebra::Dim, C: nalgebra::Dim, RS: nalgebra::Dim, CS: nalgebra::Dim>(
        &self,
        start_index: usize,
        t: T,
        mut row: MatrixViewMut<'_, T, R, C, RS, CS>,
    ) {
        for j in start_index..row.ncols() {
            row[j] = match j {
                0 => T::one(),
                1 => t,
                _ => {
                    // Earlier columns may belong to someone else
                    let tm1 = if j > start_index {
                        row[j - 1]
                    } else {
                        self.solve_function(j - 1, t)
                    };
                    let tm2 = if j > start_index + 1 {
                        row[j - 2]
                    } else {
                        self.solve_function(j - 2, t)
                    };
                    T::two() * t * tm1 - tm2
                }
            }
        }
    }

    /// Returns an unbounded iterator over `T₀(t), T₁(t), T₂(t), …`.
    ///
    /// `t` is a canonical coordinate; see [`Self::normalize_x`].
    pub fn terms(&self, t: T) -> ChebyshevTerms<T> {
        ChebyshevTerms::new(t)
    }

    /// Evaluates `Σ cⱼ·Tⱼ(t)` in a single pass of the recurrence.
    ///
    /// `t` is a canonical coordinate; see [`Self::normalize_x`].
    pub fn series(&self, t: T, coefficients: &[T]) -> T {
        coefficients
            .iter()
            .zip(self.terms(t))
            .fold(T::zero(), |y, (&c, tj)| y + c * tj)
    }

    /// Returns the `n` Chebyshev nodes as `(t_k, x_k)` pairs.
    ///
    /// `t_k = cos((k - ½)/n · π)` for `k = 1..=n` are the zeros of `Tₙ` on `[-1, 1]`,
    /// in descending order. `x_k` is the image of `t_k` on the working interval.
    ///
    /// The nodes cluster towards the ends of the interval, which keeps the interpolation
    /// error uniform across the whole domain.
    pub fn nodes(&self, n: usize) -> Vec<(T, T)> {
        let mut nodes = Vec::with_capacity(n);
        let two_n = T::two() * T::from_positive_int(n);
        for k in 1..=n {
            let tk1 = T::two() * T::from_positive_int(k) - T::one();
            let t = nalgebra::ComplexField::cos(T::pi() * tk1 / two_n);
            nodes.push((t, self.denormalize_x(t)));
        }

        nodes
    }
}

/// Iterator over successive Chebyshev polynomials evaluated at one point.
///
/// Created by [`ChebyshevBasis::terms`]. Never ends; zip it with a coefficient slice.
#[derive(Debug, Clone)]
pub struct ChebyshevTerms<T: Value> {
    t: T,
    prev: T,
    current: T,
    index: usize,
}
impl<T: Value> ChebyshevTerms<T> {
    fn new(t: T) -> Self {
        Self {
            t,
            prev: T::one(),
            current: t,
            index: 0,
        }
    }
}
impl<T: Value> Iterator for ChebyshevTerms<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = match self.index {
            0 => T::one(),
            1 => self.t,
            _ => {
                let next = T::two() * self.t * self.current - self.prev;
                self.prev = self.current;
                self.current = next;
                next
            }
        };

        self.index += 1;
        Some(value)
    }
}
