//! Exact order-statistic selection
//!
//! Selection is done with `select_nth_unstable_by`, an introselect that
//! partitions around a pivot in expected linear time and falls back to
//! median-of-medians, so a full sort is never needed. Ordering follows
//! [`nan_last_cmp`]: the result always equals what reading the same
//! position from an ascending sort would give.

use num_traits::Float;
use robust_core::utils::{midpoint, nan_last_cmp};
use robust_core::{Error, Result};
use tracing::trace;

/// Return the `k`-th smallest value (0-based) of `buffer`
///
/// The buffer is permuted: afterwards `buffer[k]` holds the result, every
/// element before it compares less or equal, every element after it
/// compares greater or equal.
///
/// # Errors
///
/// `EmptyInput` for an empty buffer, `InvalidParameter` if `k` is out of
/// range.
pub fn select_nth<T: Float>(buffer: &mut [T], k: usize) -> Result<T> {
    if buffer.is_empty() {
        return Err(Error::empty_input("order statistic"));
    }
    if k >= buffer.len() {
        return Err(Error::InvalidParameter(format!(
            "order statistic index {k} out of range for {} values",
            buffer.len()
        )));
    }
    let (_, nth, _) = buffer.select_nth_unstable_by(k, nan_last_cmp);
    Ok(*nth)
}

/// Median of `buffer` by selection
///
/// Odd lengths return the middle order statistic. Even lengths return the
/// mean of the two middle order statistics; the lower one is the maximum of
/// the partition left of the upper one, so no second selection pass runs.
///
/// The buffer is permuted and must be scratch space.
///
/// # Examples
///
/// ```rust
/// use robust_location::select_median;
///
/// let mut odd = vec![5.0, 1.0, 3.0];
/// assert_eq!(select_median(&mut odd).unwrap(), 3.0);
///
/// let mut even = vec![4.0, 1.0, 3.0, 2.0];
/// assert_eq!(select_median(&mut even).unwrap(), 2.5);
/// ```
pub fn select_median<T: Float>(buffer: &mut [T]) -> Result<T> {
    let n = buffer.len();
    if n == 0 {
        return Err(Error::empty_input("median"));
    }
    let mid = n / 2;
    trace!(n, mid, "selecting median");

    let (lower, upper, _) = buffer.select_nth_unstable_by(mid, nan_last_cmp);
    let upper = *upper;
    if n % 2 == 1 {
        return Ok(upper);
    }

    // mid >= 1 here, so the left partition is non-empty
    let below = lower.iter().copied().fold(lower[0], |acc, x| {
        if nan_last_cmp(&x, &acc).is_gt() {
            x
        } else {
            acc
        }
    });
    Ok(midpoint(below, upper))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_select_median_odd() {
        let mut data = vec![9.0, 2.0, 7.0, 4.0, 5.0];
        assert_eq!(select_median(&mut data).unwrap(), 5.0);
    }

    #[test]
    fn test_select_median_even() {
        let mut data = vec![9.0, 2.0, 7.0, 4.0];
        assert_eq!(select_median(&mut data).unwrap(), 5.5);
    }

    #[test]
    fn test_select_median_even_large_values_stay_finite() {
        let mut data = vec![f64::MAX, f64::MAX];
        assert_eq!(select_median(&mut data).unwrap(), f64::MAX);

        let mut data = vec![f64::MAX, 1.0, 0.9 * f64::MAX, -1.0];
        let m = select_median(&mut data).unwrap();
        assert!(m.is_finite());
        assert_relative_eq!(m, 0.45 * f64::MAX, max_relative = 1e-12);
    }

    #[test]
    fn test_select_median_single_and_pair() {
        assert_eq!(select_median(&mut [42.0]).unwrap(), 42.0);
        assert_eq!(select_median(&mut [1.0, 2.0]).unwrap(), 1.5);
    }

    #[test]
    fn test_select_median_empty() {
        let mut data: Vec<f64> = vec![];
        assert!(select_median(&mut data).unwrap_err().is_empty_input());
    }

    #[test]
    fn test_select_median_ties() {
        let mut data = vec![3.0, 1.0, 3.0, 3.0, 1.0, 3.0];
        assert_eq!(select_median(&mut data).unwrap(), 3.0);

        let mut data = vec![2.0; 8];
        assert_eq!(select_median(&mut data).unwrap(), 2.0);
    }

    #[test]
    fn test_select_median_permutes_but_keeps_values() {
        let mut data = vec![6.0, 5.0, 4.0, 3.0, 2.0, 1.0, 0.0];
        let _ = select_median(&mut data).unwrap();
        let mut check = data.clone();
        check.sort_by(nan_last_cmp);
        assert_eq!(check, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(data[3], 3.0);
    }

    #[test]
    fn test_select_median_f32() {
        let mut data = vec![0.5f32, 0.25, 1.0, 0.75];
        assert_relative_eq!(select_median(&mut data).unwrap(), 0.625f32);
    }

    #[test]
    fn test_select_median_with_nan_placed_last() {
        // Sorted: [1, 2, 3, NaN]
        let mut data = vec![f64::NAN, 3.0, 1.0, 2.0];
        assert_eq!(select_median(&mut data).unwrap(), 2.5);
    }

    #[test]
    fn test_select_nth_every_rank() {
        let data = vec![8.0, -1.0, 3.5, 0.0, 12.0, 3.5];
        let mut expected = data.clone();
        expected.sort_by(nan_last_cmp);
        for (k, &want) in expected.iter().enumerate() {
            let mut scratch = data.clone();
            assert_eq!(select_nth(&mut scratch, k).unwrap(), want);
        }
    }

    #[test]
    fn test_select_nth_out_of_range() {
        let mut data = vec![1.0, 2.0];
        assert!(matches!(
            select_nth(&mut data, 2),
            Err(Error::InvalidParameter(_))
        ));
        let mut empty: Vec<f64> = vec![];
        assert!(select_nth(&mut empty, 0).unwrap_err().is_empty_input());
    }
}
