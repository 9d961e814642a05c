//! Walsh average expansion for the one-sample Hodges-Lehmann estimator
//!
//! The pairs `(i, j)` are laid out column by column over `j`: column `j`
//! starts at the number of pairs with a smaller second index and holds
//! `i = 0..=j` (or `i = 0..j` without self-pairs). This packs the upper
//! triangle into a flat buffer with no gaps.

use num_traits::Float;
use robust_core::utils::{midpoint, triangular_len};
use robust_core::{Error, ExpansionConfig, Result, WalshPairs};
use tracing::debug;

/// Number of Walsh averages produced from a sample of length `n`
///
/// `None` if the count does not fit in `usize`.
pub fn walsh_len(n: usize, pairs: WalshPairs) -> Option<usize> {
    triangular_len(n, pairs.includes_self())
}

/// Buffer slot of the pair `(i, j)`, `i <= j` (strictly `i < j` for
/// [`WalshPairs::ExcludeSelf`])
#[inline]
pub fn walsh_index(i: usize, j: usize, pairs: WalshPairs) -> usize {
    debug_assert!(if pairs.includes_self() { i <= j } else { i < j });
    column_offset(j, pairs) + i
}

#[inline]
fn column_offset(j: usize, pairs: WalshPairs) -> usize {
    if pairs.includes_self() {
        j * (j + 1) / 2
    } else {
        j * j.saturating_sub(1) / 2
    }
}

#[inline]
fn column_height(j: usize, pairs: WalshPairs) -> usize {
    if pairs.includes_self() {
        j + 1
    } else {
        j
    }
}

/// Expand `sample` into all of its Walsh averages `(x[i] + x[j]) / 2`
///
/// The sample length is checked against `config.max_sample_len` before any
/// allocation, and the output is allocated once at its final length. An
/// empty sample (or a single value without self-pairs) yields an empty
/// buffer; the caller decides whether that is an error.
///
/// # Examples
///
/// ```rust
/// use robust_location::expand_walsh;
/// use robust_core::ExpansionConfig;
///
/// let averages = expand_walsh(&[1.0, 3.0], &ExpansionConfig::default()).unwrap();
/// assert_eq!(averages, vec![1.0, 2.0, 3.0]);
/// ```
pub fn expand_walsh<T>(sample: &[T], config: &ExpansionConfig) -> Result<Vec<T>>
where
    T: Float + Send + Sync,
{
    let n = sample.len();
    config.check_len(n)?;
    let pairs = config.walsh_pairs;
    let len = walsh_len(n, pairs).ok_or_else(|| Error::too_large(n, config.max_sample_len))?;
    let parallel = config.strategy.use_parallel(len);
    debug!(n, len, ?pairs, parallel, "expanding Walsh averages");

    #[cfg(feature = "parallel")]
    let out = if parallel {
        expand_walsh_parallel(sample, pairs, len)
    } else {
        expand_walsh_sequential(sample, pairs, len)
    };
    #[cfg(not(feature = "parallel"))]
    let out = expand_walsh_sequential(sample, pairs, len);

    debug_assert_eq!(out.len(), len);
    Ok(out)
}

fn expand_walsh_sequential<T: Float>(sample: &[T], pairs: WalshPairs, len: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(len);
    for (j, &xj) in sample.iter().enumerate() {
        out.extend(
            sample[..column_height(j, pairs)]
                .iter()
                .map(|&xi| midpoint(xi, xj)),
        );
    }
    out
}

#[cfg(feature = "parallel")]
fn expand_walsh_parallel<T>(sample: &[T], pairs: WalshPairs, len: usize) -> Vec<T>
where
    T: Float + Send + Sync,
{
    use rayon::prelude::*;

    let mut out = vec![T::zero(); len];
    let mut columns = Vec::with_capacity(sample.len());
    let mut rest = out.as_mut_slice();
    for j in 0..sample.len() {
        let (column, tail) = std::mem::take(&mut rest).split_at_mut(column_height(j, pairs));
        columns.push(column);
        rest = tail;
    }

    columns.into_par_iter().enumerate().for_each(|(j, column)| {
        let xj = sample[j];
        for (slot, &xi) in column.iter_mut().zip(sample) {
            *slot = midpoint(xi, xj);
        }
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use robust_core::ExecutionStrategy;

    fn exclude_self() -> ExpansionConfig {
        ExpansionConfig::new().with_walsh_pairs(WalshPairs::ExcludeSelf)
    }

    #[test]
    fn test_walsh_len() {
        assert_eq!(walsh_len(0, WalshPairs::IncludeSelf), Some(0));
        assert_eq!(walsh_len(3, WalshPairs::IncludeSelf), Some(6));
        assert_eq!(walsh_len(3, WalshPairs::ExcludeSelf), Some(3));
        assert_eq!(walsh_len(1, WalshPairs::ExcludeSelf), Some(0));
    }

    #[test]
    fn test_walsh_index_layout() {
        let p = WalshPairs::IncludeSelf;
        assert_eq!(walsh_index(0, 0, p), 0);
        assert_eq!(walsh_index(0, 1, p), 1);
        assert_eq!(walsh_index(1, 1, p), 2);
        assert_eq!(walsh_index(0, 2, p), 3);
        assert_eq!(walsh_index(2, 2, p), 5);

        let p = WalshPairs::ExcludeSelf;
        assert_eq!(walsh_index(0, 1, p), 0);
        assert_eq!(walsh_index(0, 2, p), 1);
        assert_eq!(walsh_index(1, 2, p), 2);
        assert_eq!(walsh_index(0, 3, p), 3);
    }

    #[test]
    fn test_expand_walsh_includes_self_pairs() {
        let out = expand_walsh(&[1.0, 3.0, 5.0], &ExpansionConfig::default()).unwrap();
        // columns: j=0 -> (0,0); j=1 -> (0,1),(1,1); j=2 -> (0,2),(1,2),(2,2)
        assert_eq!(out, vec![1.0, 2.0, 3.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_expand_walsh_excludes_self_pairs() {
        let out = expand_walsh(&[1.0, 3.0, 5.0], &exclude_self()).unwrap();
        assert_eq!(out, vec![2.0, 3.0, 4.0]);

        let single = expand_walsh(&[7.0], &exclude_self()).unwrap();
        assert!(single.is_empty());
    }

    #[test]
    fn test_expand_walsh_empty() {
        let out = expand_walsh::<f64>(&[], &ExpansionConfig::default()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_expand_walsh_size_guard() {
        let config = ExpansionConfig::new().with_max_sample_len(3);
        assert!(expand_walsh(&[0.0; 3], &config).is_ok());
        assert_eq!(
            expand_walsh(&[0.0; 4], &config).unwrap_err(),
            Error::InputTooLarge { len: 4, max: 3 }
        );
    }

    #[test]
    fn test_expand_walsh_large_values_stay_finite() {
        let out = expand_walsh(&[f64::MAX, 0.9 * f64::MAX], &ExpansionConfig::default()).unwrap();
        assert!(out.iter().all(|x| x.is_finite()), "{out:?}");
        assert_eq!(out[0], f64::MAX);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_strategy_is_live() {
        assert!(ExecutionStrategy::Parallel.use_parallel(1));
        let sample: Vec<f64> = (0..64).map(|i| (i * 7 % 31) as f64).collect();
        let expected = expand_walsh_sequential(&sample, WalshPairs::IncludeSelf, 2080);
        assert_eq!(
            expand_walsh_parallel(&sample, WalshPairs::IncludeSelf, 2080),
            expected
        );
        assert_eq!(
            expand_walsh_parallel(&sample, WalshPairs::ExcludeSelf, 2016),
            expand_walsh_sequential(&sample, WalshPairs::ExcludeSelf, 2016)
        );
    }

    #[test]
    fn test_expand_walsh_strategy_independent() {
        let sample: Vec<f64> = (0..300).map(|i| ((i * 37) % 101) as f64 * 0.5).collect();
        let sequential = expand_walsh(&sample, &ExpansionConfig::default()).unwrap();
        for strategy in [ExecutionStrategy::Parallel, ExecutionStrategy::Auto] {
            let config = ExpansionConfig::new().with_strategy(strategy);
            assert_eq!(expand_walsh(&sample, &config).unwrap(), sequential);
        }
    }
}
