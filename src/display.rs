//! Human-readable rendering of Chebyshev expansions
//!
//! An approximation is written as its scaling formula followed by the series:
//! ```text
//! xₛ = T[ -5..5 -> -1..1 ], y(x) = 0.40·T₀ - 0.33·T₂(xₛ) + T₃(xₛ)
//! ```
//! Normalized expansions factor `c0` out of the series:
//! ```text
//! xₛ = T[ -1..1 -> -1..1 ], y(x) = 4.00·(1 + 0.25·T₁(xₛ))
//! ```
//!
//! # Helpers
//! - [`format_coefficient`]: Formats a numeric coefficient, skipping zeros.
//! - [`format_term`]: Formats a single `c·Tⱼ(xₛ)` term.
use crate::{approximation::ChebyshevApproximation, value::Value, Normalization};

pub mod unicode;

/// Default precision for formatting coefficients
pub const DEFAULT_PRECISION: usize = 2;

/// Default range in which scientific notation is not used
#[must_use]
pub fn default_fixed_range<T: Value>() -> Option<std::ops::Range<T>> {
    const RANGE: std::ops::Range<f64> = 1e-3..1e3;
    let s = T::try_cast(RANGE.start).ok()?;
    let e = T::try_cast(RANGE.end).ok()?;
    Some(s..e)
}

/// Represents the sign of a series term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Positive sign (`+` when displayed).
    Positive,

    /// Negative sign (`-` when displayed).
    Negative,
}
impl Sign {
    /// Determines the sign from a numeric coefficient.
    ///
    /// # Example
    /// ```
    /// # use chebapprox::display::Sign;
    /// assert_eq!(Sign::from_coef(3.0), Sign::Positive);
    /// assert_eq!(Sign::from_coef(-2.0), Sign::Negative);
    /// ```
    pub fn from_coef<T: Value>(coef: T) -> Self {
        if coef.is_sign_negative() {
            Self::Negative
        } else {
            Self::Positive
        }
    }

    /// Returns the character representation of the sign.
    #[must_use]
    pub fn char(&self) -> char {
        match self {
            Sign::Positive => '+',
            Sign::Negative => '-',
        }
    }
}

/// A single term of a series, split into its sign and unsigned body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// The sign of the term
    pub sign: Sign,

    /// The body of the term (e.g., `"0.33·T₂(xₛ)"`)
    pub body: String,
}
impl Term {
    /// Creates a new term with the given sign and body.
    #[must_use]
    pub fn new(sign: Sign, body: String) -> Self {
        Self { sign, body }
    }
}

/// Formats the magnitude of a coefficient for display in a series term.
///
/// - Returns `None` if the coefficient is zero or effectively zero (≤ epsilon).
/// - Returns an empty string for a unit coefficient on a non-constant term.
/// - Formats as a decimal if the absolute value is between `1e-3` and `1e3`, and does not
///   round to zero at the given precision.
/// - Formats in scientific notation otherwise.
///
/// # Example
/// ```
/// # use chebapprox::display::format_coefficient;
/// assert_eq!(format_coefficient(0.0, 1, 2), None);
/// assert_eq!(format_coefficient(-2.5, 1, 2), Some("2.50".to_string()));
/// assert_eq!(format_coefficient(1.0, 2, 2), Some(String::new()));
/// assert_eq!(format_coefficient(1e5, 1, 2), Some("1.00e5".to_string()));
/// assert_eq!(format_coefficient(0.0012, 1, 2), Some("1.20e-3".to_string()));
/// ```
pub fn format_coefficient<T: Value>(coef: T, degree: usize, precision: usize) -> Option<String> {
    let abs = Value::abs(coef);

    if abs <= T::epsilon() {
        return None;
    }

    if Value::abs_sub(abs, T::one()) <= T::epsilon() && degree != 0 {
        return Some(String::new());
    }

    // Small values that would print as 0.00 fall back to scientific notation
    let fixed = unicode::float(abs, default_fixed_range(), precision);
    if fixed.chars().all(|c| c == '0' || c == '.') {
        return Some(unicode::float(abs, None, precision));
    }

    Some(fixed)
}

/// Magnitude below which coefficients are treated as rounding noise.
///
/// Scales with the largest magnitude among `coefficients` and `reference`, and with
/// the number of terms.
fn noise_floor<T: Value>(coefficients: &[T], reference: T) -> T {
    let largest = coefficients
        .iter()
        .map(|&c| Value::abs(c))
        .fold(Value::abs(reference), |max, c| if c > max { c } else { max });
    largest * T::epsilon() * T::from_positive_int(coefficients.len())
}

/// Formats the term `c·Tⱼ(xₛ)`, or `c·T₀` for the constant term.
///
/// Returns `None` for a zero coefficient.
///
/// ```
/// # use chebapprox::display::{format_term, Sign};
/// let term = format_term(3, -0.25).unwrap();
/// assert_eq!(term.sign, Sign::Negative);
/// assert_eq!(term.body, "0.25·T₃(xₛ)");
/// ```
pub fn format_term<T: Value>(degree: usize, coef: T) -> Option<Term> {
    let sign = Sign::from_coef(coef);
    let coef = format_coefficient(coef, degree, DEFAULT_PRECISION)?;

    let rank = unicode::subscript(&degree.to_string());
    let func = if degree > 0 {
        format!("T{rank}({})", scaled_variable())
    } else {
        format!("T{rank}")
    };

    let glue = if coef.is_empty() { "" } else { "·" };
    Some(Term::new(sign, format!("{coef}{glue}{func}")))
}

fn scaled_variable() -> String {
    format!("x{}", unicode::subscript("s"))
}

/// Writes the terms joined by their signs, with no leading `+`.
fn write_terms<B: std::fmt::Write>(buffer: &mut B, terms: Vec<Term>) -> std::fmt::Result {
    for (i, term) in terms.into_iter().enumerate() {
        let sign = term.sign.char();
        match (i, term.sign) {
            (0, Sign::Positive) => write!(buffer, "{}", term.body)?,
            (0, Sign::Negative) => write!(buffer, "{sign}{}", term.body)?,
            _ => write!(buffer, " {sign} {}", term.body)?,
        }
    }

    Ok(())
}

/// Writes the full expansion, scaling formula first, into the provided buffer.
///
/// # Errors
/// Returns an error if writing to `buffer` fails.
pub fn format_approximation<T: Value, B: std::fmt::Write>(
    buffer: &mut B,
    approximation: &ChebyshevApproximation<T>,
) -> std::fmt::Result {
    write!(buffer, "{} = {}, y(x) = ", scaled_variable(), approximation.interval())?;

    let coefficients = approximation.coefficients();
    match approximation.normalization() {
        Normalization::Raw => {
            let floor = noise_floor(&coefficients, T::zero());
            let terms: Vec<_> = coefficients
                .iter()
                .enumerate()
                .filter(|&(_, &c)| Value::abs(c) > floor)
                .filter_map(|(j, &c)| format_term(j, c))
                .collect();

            if terms.is_empty() {
                write!(buffer, "0")
            } else {
                write_terms(buffer, terms)
            }
        }

        Normalization::Normalized => {
            let Some(&c0) = coefficients.first() else {
                return write!(buffer, "0");
            };
            let Some(scale) = format_coefficient(c0, 0, DEFAULT_PRECISION) else {
                return write!(buffer, "0");
            };
            if c0.is_sign_negative() {
                write!(buffer, "-")?;
            }
            write!(buffer, "{scale}")?;

            // Shape coefficients are relative to the leading 1
            let floor = noise_floor(&coefficients[1..], T::one());
            let terms: Vec<_> = coefficients
                .iter()
                .enumerate()
                .skip(1)
                .filter(|&(_, &c)| Value::abs(c) > floor)
                .filter_map(|(j, &c)| format_term(j, c))
                .collect();
            if terms.is_empty() {
                return Ok(());
            }

            write!(buffer, "·(1")?;
            for term in terms {
                write!(buffer, " {} {}", term.sign.char(), term.body)?;
            }
            write!(buffer, ")")
        }
    }
}

impl<T: Value> std::fmt::Display for ChebyshevApproximation<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_approximation(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ApproximationOptions;

    fn approximation(coefficients: &[f64]) -> ChebyshevApproximation {
        ChebyshevApproximation::new(f64::cos, -5.0, 5.0, coefficients.len())
            .unwrap()
            .with_coefficients(coefficients)
            .unwrap()
    }

    #[test]
    fn test_format_coefficient() {
        assert_eq!(format_coefficient(2.5, 1, 2), Some("2.50".to_string()));
        assert_eq!(format_coefficient(-2.5, 1, 2), Some("2.50".to_string()));
        assert_eq!(format_coefficient(1e-20, 1, 2), None);
        assert_eq!(format_coefficient(-1.0, 3, 2), Some(String::new()));
        assert_eq!(format_coefficient(1.0, 0, 2), Some("1.00".to_string()));
        assert_eq!(format_coefficient(1e-5, 2, 2), Some("1.00e-5".to_string()));
        assert_eq!(format_coefficient(-0.004, 2, 2), Some("4.00e-3".to_string()));
        assert_eq!(format_coefficient(0.01, 2, 2), Some("0.01".to_string()));
        assert_eq!(format_coefficient(0.004, 2, 3), Some("0.004".to_string()));
    }

    #[test]
    fn test_format_term() {
        assert_eq!(format_term(0, 0.4).unwrap().body, "0.40·T₀");
        assert_eq!(format_term(12, 1.0).unwrap().body, "T₁₂(xₛ)");
        assert_eq!(format_term(2, 0.0), None);
    }

    #[test]
    fn test_display_series() {
        let approx = approximation(&[0.4, 0.0, -0.33, 1.0]);
        assert_eq!(
            approx.to_string(),
            "xₛ = T[ -5..5 -> -1..1 ], y(x) = 0.40·T₀ - 0.33·T₂(xₛ) + T₃(xₛ)"
        );

        let approx = approximation(&[0.0, -2.0, 1e4]);
        assert_eq!(
            approx.to_string(),
            "xₛ = T[ -5..5 -> -1..1 ], y(x) = -2.00·T₁(xₛ) + 1.00e4·T₂(xₛ)"
        );

        // Rounding noise is dropped, small but real terms are kept
        let approx = approximation(&[0.4, 3.9e-17, -0.33, 1.0, -2e-3]);
        assert_eq!(
            approx.to_string(),
            "xₛ = T[ -5..5 -> -1..1 ], y(x) = 0.40·T₀ - 0.33·T₂(xₛ) + T₃(xₛ) - 2.00e-3·T₄(xₛ)"
        );

        let approx = approximation(&[0.0, 0.0]);
        assert_eq!(approx.to_string(), "xₛ = T[ -5..5 -> -1..1 ], y(x) = 0");
    }

    #[test]
    fn test_display_normalized() {
        let options = ApproximationOptions::default().with_normalization(Normalization::Normalized);
        let approx =
            ChebyshevApproximation::with_options(|x| 4.0 + x, -1.0, 1.0, 2, options).unwrap();
        let approx = approx.with_coefficients(&[4.0, 0.25]).unwrap();
        assert_eq!(
            approx.to_string(),
            "xₛ = T[ -1..1 -> -1..1 ], y(x) = 4.00·(1 + 0.25·T₁(xₛ))"
        );

        let noisy = approx.with_coefficients(&[4.0, 1e-17]).unwrap();
        assert_eq!(noisy.to_string(), "xₛ = T[ -1..1 -> -1..1 ], y(x) = 4.00");

        let flat = approx.with_coefficients(&[-3.0, 0.0]).unwrap();
        assert_eq!(flat.to_string(), "xₛ = T[ -1..1 -> -1..1 ], y(x) = -3.00");
    }
}
