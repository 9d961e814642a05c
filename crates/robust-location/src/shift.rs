//! Cross-difference expansion for the two-sample Hodges-Lehmann estimator

use num_traits::Float;
use robust_core::{Error, ExpansionConfig, Result};
use tracing::debug;

/// Number of cross-differences between samples of lengths `a_len` and
/// `b_len`, or `None` on overflow
pub fn shift_len(a_len: usize, b_len: usize) -> Option<usize> {
    a_len.checked_mul(b_len)
}

/// Buffer slot of the difference `b[j] - a[i]` (row-major by `a`)
#[inline]
pub fn shift_index(i: usize, j: usize, b_len: usize) -> usize {
    debug_assert!(j < b_len);
    i * b_len + j
}

/// Expand two samples into every difference `b[j] - a[i]`
///
/// Both lengths are checked against `config.max_sample_len` independently
/// before the output is allocated. Either sample being empty yields an
/// empty buffer.
///
/// # Examples
///
/// ```rust
/// use robust_location::expand_shift;
/// use robust_core::ExpansionConfig;
///
/// let diffs = expand_shift(&[0.0, 1.0], &[5.0, 7.0], &ExpansionConfig::default()).unwrap();
/// assert_eq!(diffs, vec![5.0, 7.0, 4.0, 6.0]);
/// ```
pub fn expand_shift<T>(a: &[T], b: &[T], config: &ExpansionConfig) -> Result<Vec<T>>
where
    T: Float + Send + Sync,
{
    config.check_len(a.len())?;
    config.check_len(b.len())?;
    let len = shift_len(a.len(), b.len())
        .ok_or_else(|| Error::too_large(a.len().max(b.len()), config.max_sample_len))?;
    let parallel = config.strategy.use_parallel(len);
    debug!(a_len = a.len(), b_len = b.len(), len, parallel, "expanding cross-differences");

    if len == 0 {
        return Ok(Vec::new());
    }

    #[cfg(feature = "parallel")]
    let out = if parallel {
        expand_shift_parallel(a, b, len)
    } else {
        expand_shift_sequential(a, b, len)
    };
    #[cfg(not(feature = "parallel"))]
    let out = expand_shift_sequential(a, b, len);

    Ok(out)
}

fn expand_shift_sequential<T: Float>(a: &[T], b: &[T], len: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(len);
    for &ai in a {
        out.extend(b.iter().map(|&bj| bj - ai));
    }
    out
}

#[cfg(feature = "parallel")]
fn expand_shift_parallel<T>(a: &[T], b: &[T], len: usize) -> Vec<T>
where
    T: Float + Send + Sync,
{
    use rayon::prelude::*;

    let mut out = vec![T::zero(); len];
    out.par_chunks_mut(b.len())
        .zip(a.par_iter())
        .for_each(|(row, &ai)| {
            for (slot, &bj) in row.iter_mut().zip(b) {
                *slot = bj - ai;
            }
        });
    out
}
