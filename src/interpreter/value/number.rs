use std::{cmp::Ordering, fmt};

use crate::util::num::i64_to_f64;

/// A numeric value: a 64-bit integer or a 64-bit float.
///
/// Integer arithmetic stays integral as long as the result fits; an overflow
/// falls back to float arithmetic instead of wrapping or failing.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i64),
    Float(f64),
}

use Number::{Float, Int};

impl Number {
    /// The value as a float, rounding large integers.
    #[must_use]
    pub const fn as_f64(self) -> f64 {
        match self {
            Int(i) => i64_to_f64(i),
            Float(f) => f,
        }
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Int(i) => i == 0,
            Float(f) => f == 0.0,
        }
    }

    /// Adds two numbers.
    ///
    /// # Example
    /// ```
    /// use basil::interpreter::value::number::Number;
    ///
    /// assert_eq!(Number::Int(2).add(Number::Int(3)), Number::Int(5));
    /// assert_eq!(Number::Int(2).add(Number::Float(0.5)), Number::Float(2.5));
    /// assert_eq!(Number::Int(i64::MAX).add(Number::Int(1)),
    ///            Number::Float(9_223_372_036_854_775_808.0));
    /// ```
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        match (self, other) {
            (Int(a), Int(b)) => a.checked_add(b).map_or_else(|| Float(i64_to_f64(a) + i64_to_f64(b)), Int),
            _ => Float(self.as_f64() + other.as_f64()),
        }
    }

    #[must_use]
    pub fn sub(self, other: Self) -> Self {
        match (self, other) {
            (Int(a), Int(b)) => a.checked_sub(b).map_or_else(|| Float(i64_to_f64(a) - i64_to_f64(b)), Int),
            _ => Float(self.as_f64() - other.as_f64()),
        }
    }

    #[must_use]
    pub fn mul(self, other: Self) -> Self {
        match (self, other) {
            (Int(a), Int(b)) => a.checked_mul(b).map_or_else(|| Float(i64_to_f64(a) * i64_to_f64(b)), Int),
            _ => Float(self.as_f64() * other.as_f64()),
        }
    }

    /// True division. The result is always a float.
    ///
    /// # Returns
    /// - `Some(Number::Float)`: The quotient.
    /// - `None`: If `other` is zero.
    ///
    /// # Example
    /// ```
    /// use basil::interpreter::value::number::Number;
    ///
    /// assert_eq!(Number::Int(7).div(Number::Int(2)), Some(Number::Float(3.5)));
    /// assert_eq!(Number::Int(1).div(Number::Float(0.0)), None);
    /// ```
    #[must_use]
    pub fn div(self, other: Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        Some(Float(self.as_f64() / other.as_f64()))
    }

    /// Floored modulo: the result takes the sign of the divisor.
    ///
    /// # Returns
    /// - `Some(Number)`: The remainder.
    /// - `None`: If `other` is zero.
    ///
    /// # Example
    /// ```
    /// use basil::interpreter::value::number::Number;
    ///
    /// assert_eq!(Number::Int(7).rem(Number::Int(3)), Some(Number::Int(1)));
    /// assert_eq!(Number::Int(-7).rem(Number::Int(3)), Some(Number::Int(2)));
    /// assert_eq!(Number::Int(7).rem(Number::Int(-3)), Some(Number::Int(-2)));
    /// assert_eq!(Number::Float(5.5).rem(Number::Int(2)), Some(Number::Float(1.5)));
    /// assert_eq!(Number::Int(1).rem(Number::Int(0)), None);
    /// ```
    #[must_use]
    pub fn rem(self, other: Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        match (self, other) {
            (Int(a), Int(b)) => {
                let r = a.checked_rem(b).unwrap_or(0);
                Some(Int(if r != 0 && (r < 0) != (b < 0) { r + b } else { r }))
            },
            _ => {
                let (a, b) = (self.as_f64(), other.as_f64());
                let r = a % b;
                Some(Float(if r != 0.0 && (r < 0.0) != (b < 0.0) { r + b } else { r }))
            },
        }
    }

    /// Raises `self` to the power `other`.
    ///
    /// An integer raised to a non-negative integer stays an integer while it
    /// fits. Every other combination is computed in floats.
    ///
    /// # Returns
    /// - `Some(Number)`: The power.
    /// - `None`: If zero is raised to a negative power.
    ///
    /// # Example
    /// ```
    /// use basil::interpreter::value::number::Number;
    ///
    /// assert_eq!(Number::Int(2).pow(Number::Int(10)), Some(Number::Int(1024)));
    /// assert_eq!(Number::Int(2).pow(Number::Int(-1)), Some(Number::Float(0.5)));
    /// assert_eq!(Number::Int(0).pow(Number::Int(-1)), None);
    /// ```
    #[must_use]
    pub fn pow(self, other: Self) -> Option<Self> {
        if self.is_zero() && other.as_f64() < 0.0 {
            return None;
        }
        let float = || Float(self.as_f64().powf(other.as_f64()));
        match (self, other) {
            (Int(a), Int(b)) if b >= 0 => Some(u32::try_from(b).ok()
                                                               .and_then(|e| a.checked_pow(e))
                                                               .map_or_else(float, Int)),
            _ => Some(float()),
        }
    }

    #[must_use]
    pub fn negate(self) -> Self {
        match self {
            Int(i) => i.checked_neg().map_or_else(|| Float(-i64_to_f64(i)), Int),
            Float(f) => Float(-f),
        }
    }

    /// Compares two numbers by value, across integers and floats.
    ///
    /// # Returns
    /// `None` only when a float is NaN.
    #[must_use]
    pub fn compare(self, other: Self) -> Option<Ordering> {
        match (self, other) {
            (Int(a), Int(b)) => Some(a.cmp(&b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.compare(*other) == Some(Ordering::Equal)
    }
}

/// Integers print plainly. Floats always show a fractional part or an
/// exponent, so `2.0` stays distinguishable from `2`.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Int(i) => write!(f, "{i}"),
            Float(x) => write!(f, "{x:?}"),
        }
    }
}
