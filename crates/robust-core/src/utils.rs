//! Utility functions for ordering and copying sample slices

use num_traits::Float;
use std::cmp::Ordering;

/// Total order over floats that places NaN after every number
///
/// Two NaNs compare equal. All other values follow `partial_cmp`, so
/// `-0.0` and `0.0` are equal, as in ordinary numeric comparison.
///
/// # Examples
///
/// ```rust
/// use robust_core::utils::nan_last_cmp;
/// use std::cmp::Ordering;
///
/// assert_eq!(nan_last_cmp(&1.0, &2.0), Ordering::Less);
/// assert_eq!(nan_last_cmp(&f64::NAN, &f64::INFINITY), Ordering::Greater);
/// ```
#[inline]
pub fn nan_last_cmp<T: Float>(a: &T, b: &T) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    }
}

/// Sort data and return a new vector
///
/// Handles NaN values by placing them at the end.
///
/// # Examples
///
/// ```rust
/// use robust_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted<T: Float>(data: &[T]) -> Vec<T> {
    let mut sorted = data.to_vec();
    sorted.sort_by(nan_last_cmp);
    sorted
}

/// Arithmetic mean of two values that stays finite for finite inputs
///
/// Equals `(a + b) / 2` whenever that sum is finite. When the sum
/// overflows, each operand is halved first.
///
/// # Examples
///
/// ```rust
/// use robust_core::utils::midpoint;
///
/// assert_eq!(midpoint(1.0, 2.0), 1.5);
/// assert_eq!(midpoint(f64::MAX, f64::MAX), f64::MAX);
/// ```
#[inline]
pub fn midpoint<T: Float>(a: T, b: T) -> T {
    let two = T::one() + T::one();
    let sum = a + b;
    if sum.is_finite() || !(a.is_finite() && b.is_finite()) {
        sum / two
    } else {
        a / two + b / two
    }
}

/// Number of unordered pairs `i <= j` (or `i < j` without self-pairs) drawn
/// from `n` items, or `None` on overflow
pub fn triangular_len(n: usize, include_self: bool) -> Option<usize> {
    let m = if include_self { n.checked_add(1)? } else { n.saturating_sub(1) };
    // One of n, m is even, so halve that one before multiplying.
    if n % 2 == 0 {
        (n / 2).checked_mul(m)
    } else {
        n.checked_mul(m / 2)
    }
}
