mod glam_ext;
mod vector;

pub use vector::VecN;

use crate::error::{Result, VectorError};

/// Fails with `DimensionMismatch` unless `left == right`.
#[inline]
pub(crate) fn check_dims(op: &'static str, left: usize, right: usize) -> Result<()> {
    if left == right {
        Ok(())
    } else {
        log::debug!("{}: vector lengths are different [{}, {}]", op, left, right);
        Err(VectorError::DimensionMismatch { left, right })
    }
}

/// Applies `op` to each corresponding pair of elements of `a` and `b`.
///
/// The lengths are checked before the output is allocated.
pub(crate) fn pairwise<F>(op_name: &'static str, a: &[f64], b: &[f64], op: F) -> Result<Vec<f64>>
where
    F: Fn(f64, f64) -> f64,
{
    check_dims(op_name, a.len(), b.len())?;
    Ok(combine(a, b, op))
}

/// `pairwise` without the length check, for callers that already know the
/// lengths match.
#[inline]
pub(crate) fn combine<F>(a: &[f64], b: &[f64], op: F) -> Vec<f64>
where
    F: Fn(f64, f64) -> f64,
{
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).map(|(&lhs, &rhs)| op(lhs, rhs)).collect()
}

/// Sums all elements of `v`.
#[inline]
pub(crate) fn total(v: &[f64]) -> f64 {
    v.iter().fold(0.0, |acc, &x| acc + x)
}

pub(crate) fn dot<const N: usize>(a: &[f64; N], b: &[f64; N]) -> f64 {
    a.iter()
        .zip(b.iter())
        .fold(0.0, |dot, (&lhs, &rhs)| dot + lhs * rhs)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_pairwise() {
        let r = pairwise("max", &[1., 5., 3.], &[4., 2., 6.], f64::max).unwrap();
        assert_eq!(r, vec![4., 5., 6.]);

        let r = pairwise("add", &[], &[], |a, b| a + b).unwrap();
        assert!(r.is_empty());
    }

    #[test]
    fn test_pairwise_mismatch() {
        let err = pairwise("add", &[1.], &[1., 2.], |a, b| a + b).unwrap_err();
        assert_eq!(err, VectorError::DimensionMismatch { left: 1, right: 2 });

        let err = pairwise("add", &[1., 2., 3.], &[], |a, b| a + b).unwrap_err();
        assert_eq!(err, VectorError::DimensionMismatch { left: 3, right: 0 });
    }

    #[test]
    fn test_total_and_dot() {
        assert_eq!(total(&[]), 0.0);
        assert_eq!(total(&[1., 2., 3.5]), 6.5);
        assert_eq!(dot(&[1., 2., 3.], &[4., 5., 6.]), 32.);
    }
}
