use crate::error::{Result, VectorError};
use crate::math::check_dims;
use crate::vector::Vector;

/// Collects `vs` and checks that it is non-empty and that every vector has
/// the length of the first one.
fn checked<'a, I>(op: &'static str, vs: I) -> Result<Vec<&'a Vector>>
where
    I: IntoIterator<Item = &'a Vector>,
{
    let vs: Vec<&Vector> = vs.into_iter().collect();
    let first = match vs.first() {
        Some(first) => first.len(),
        None => {
            log::debug!("{}: no vectors given", op);
            return Err(VectorError::EmptyInput);
        }
    };
    for v in &vs[1..] {
        check_dims(op, first, v.len())?;
    }
    Ok(vs)
}

/// Elementwise sum of a non-empty collection of equal length vectors.
pub fn sum<'a, I>(vs: I) -> Result<Vector>
where
    I: IntoIterator<Item = &'a Vector>,
{
    sum_checked(&checked("sum", vs)?)
}

/// Folds `add` over vectors that `checked` has already accepted.
fn sum_checked(vs: &[&Vector]) -> Result<Vector> {
    let mut acc = Vector::zero(vs[0].len());
    for v in vs {
        acc = acc.add(v)?;
    }
    Ok(acc)
}

/// Elementwise mean of a non-empty collection of equal length vectors.
pub fn mean<'a, I>(vs: I) -> Result<Vector>
where
    I: IntoIterator<Item = &'a Vector>,
{
    let vs = checked("mean", vs)?;
    Ok(sum_checked(&vs)?.scalar_mul(1.0 / vs.len() as f64))
}

#[cfg(test)]
mod test {
    use super::*;

    fn vs(rows: &[&[f64]]) -> Vec<Vector> {
        rows.iter().map(|&row| Vector::from(row)).collect()
    }

    #[test]
    fn test_sum() {
        let cases = [
            (vs(&[&[1., 2.], &[3., 4.], &[5., 6.]]), Vector::from([9., 12.])),
            (vs(&[&[1., 2.]]), Vector::from([1., 2.])),
        ];
        for (input, want) in &cases {
            assert_eq!(sum(input), Ok(want.clone()), "sum({:?})", input);
        }
    }

    #[test]
    fn test_mean() {
        let cases = [
            (vs(&[&[1., 2.], &[3., 4.], &[5., 6.]]), Vector::from([3., 4.])),
            (vs(&[&[1., 2.]]), Vector::from([1., 2.])),
        ];
        for (input, want) in &cases {
            assert_eq!(mean(input), Ok(want.clone()), "mean({:?})", input);
        }
    }

    #[test]
    fn test_mean_of_copies() {
        let v = Vector::from([0.1, -7.25, 3.0, 1e3]);
        for k in 1..20 {
            let copies = vec![v.clone(); k];
            let m = mean(&copies).unwrap();
            assert!(m.abs_diff_eq(&v, 1e-9), "mean of {} copies: {:?}", k, m);
        }
    }

    #[test]
    fn test_empty_input() {
        let empty: Vec<Vector> = Vec::new();
        assert_eq!(sum(&empty), Err(VectorError::EmptyInput));
        assert_eq!(mean(&empty), Err(VectorError::EmptyInput));
    }

    #[test]
    fn test_dimension_mismatch() {
        let input = vs(&[&[1., 2.], &[3., 4.], &[5.]]);
        let err = VectorError::DimensionMismatch { left: 2, right: 1 };
        assert_eq!(sum(&input), Err(err));
        assert_eq!(mean(&input), Err(err));
    }

    #[test]
    fn test_empty_vectors() {
        let input = vs(&[&[], &[]]);
        assert_eq!(sum(&input), Ok(Vector::zero(0)));
        assert_eq!(mean(&input), Ok(Vector::zero(0)));
    }
}
