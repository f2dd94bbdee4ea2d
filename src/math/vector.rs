use super::dot;
use crate::error::{Result, VectorError};
use crate::vector::Vector;
use core::convert::TryFrom;
use core::ops::{Add, AddAssign, Deref, DerefMut, Mul, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

/// A vector whose dimension is fixed at compile time.
///
/// Because both operands of a binary operation always share `N`, none of the
/// operations here can fail with a dimension mismatch.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vector", try_from = "Vector")]
pub struct VecN<const N: usize>(pub(crate) [f64; N]);

impl<const N: usize> VecN<N> {
    #[inline]
    pub const fn zero() -> Self {
        Self([0.; N])
    }

    #[inline]
    pub const fn new(elements: [f64; N]) -> Self {
        Self(elements)
    }

    #[inline]
    pub fn dot(&self, rhs: &Self) -> f64 {
        dot(&self.0, &rhs.0)
    }

    #[inline]
    pub fn sum_of_squares(&self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.sum_of_squares().sqrt()
    }

    #[inline]
    pub fn squared_distance(&self, rhs: &Self) -> f64 {
        (*self - *rhs).sum_of_squares()
    }

    #[inline]
    pub fn distance(&self, rhs: &Self) -> f64 {
        self.squared_distance(rhs).sqrt()
    }

    /// Elementwise sum of `vs`. Fails with `EmptyInput` when `vs` is empty.
    pub fn sum<'a, I>(vs: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let mut iter = vs.into_iter();
        let first = *iter.next().ok_or(VectorError::EmptyInput)?;
        Ok(iter.fold(first, |acc, v| acc + *v))
    }

    /// Elementwise mean of `vs`. Fails with `EmptyInput` when `vs` is empty.
    pub fn mean<'a, I>(vs: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        let mut count = 0_usize;
        let total = Self::sum(vs.into_iter().inspect(|_| count += 1))?;
        Ok(total * (1.0 / count as f64))
    }

    pub fn abs_diff_eq(&self, rhs: &Self, max_abs_diff: f64) -> bool {
        self.0
            .iter()
            .zip(rhs.0.iter())
            .all(|(&lhs, &rhs)| (lhs - rhs).abs() <= max_abs_diff)
    }
}

impl<const N: usize> Default for VecN<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> Deref for VecN<N> {
    type Target = [f64; N];
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for VecN<N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[f64; N]> for VecN<N> {
    #[inline]
    fn from(elements: [f64; N]) -> Self {
        Self(elements)
    }
}

impl<const N: usize> From<VecN<N>> for Vector {
    #[inline]
    fn from(v: VecN<N>) -> Self {
        Vector::from(v.0)
    }
}

impl<const N: usize> TryFrom<&Vector> for VecN<N> {
    type Error = VectorError;

    fn try_from(v: &Vector) -> Result<Self> {
        <[f64; N]>::try_from(v.as_slice())
            .map(Self)
            .map_err(|_| VectorError::DimensionMismatch {
                left: N,
                right: v.len(),
            })
    }
}

impl<const N: usize> TryFrom<Vector> for VecN<N> {
    type Error = VectorError;

    #[inline]
    fn try_from(v: Vector) -> Result<Self> {
        Self::try_from(&v)
    }
}

impl<const N: usize> Add<VecN<N>> for VecN<N> {
    type Output = VecN<N>;
    #[inline]
    fn add(self, rhs: VecN<N>) -> Self::Output {
        let mut tmp = self;
        tmp += rhs;
        tmp
    }
}

impl<const N: usize> Sub<VecN<N>> for VecN<N> {
    type Output = VecN<N>;
    #[inline]
    fn sub(self, rhs: VecN<N>) -> Self::Output {
        let mut tmp = self;
        tmp -= rhs;
        tmp
    }
}

impl<const N: usize> Mul<f64> for VecN<N> {
    type Output = VecN<N>;
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        let mut tmp = self;
        for n in 0..N {
            tmp[n] *= rhs;
        }
        tmp
    }
}

impl<const N: usize> Mul<VecN<N>> for f64 {
    type Output = VecN<N>;
    #[inline]
    fn mul(self, rhs: VecN<N>) -> Self::Output {
        rhs * self
    }
}

impl<const N: usize> Neg for VecN<N> {
    type Output = VecN<N>;
    #[inline]
    fn neg(self) -> Self::Output {
        self * -1.0
    }
}

impl<const N: usize> AddAssign<VecN<N>> for VecN<N> {
    #[inline]
    fn add_assign(&mut self, rhs: VecN<N>) {
        for n in 0..N {
            self[n] += rhs[n];
        }
    }
}

impl<const N: usize> SubAssign<VecN<N>> for VecN<N> {
    #[inline]
    fn sub_assign(&mut self, rhs: VecN<N>) {
        for n in 0..N {
            self[n] -= rhs[n];
        }
    }
}

#[test]
fn test_vecn_ops() {
    let a = VecN::new([1., 2., 3.]);
    let b = VecN::new([4., 5., 6.]);
    assert_eq!(a + b, VecN::new([5., 7., 9.]));
    assert_eq!(a - b, VecN::new([-3., -3., -3.]));
    assert_eq!(a * 2.0, VecN::new([2., 4., 6.]));
    assert_eq!(2.0 * a, a * 2.0);
    assert_eq!(-a, VecN::new([-1., -2., -3.]));
    assert_eq!(a.dot(&b), 32.);
    assert_eq!(a.squared_distance(&b), 27.);
    assert_eq!(VecN::new([3., 0.]).distance(&VecN::new([0., 4.])), 5.);
    assert_eq!(VecN::new([3., 4.]).magnitude(), 5.);
    assert_eq!(VecN::<4>::zero().magnitude(), 0.);
}

#[test]
fn test_vecn_sum_mean() {
    let vs = [
        VecN::new([1., 2.]),
        VecN::new([3., 4.]),
        VecN::new([5., 6.]),
    ];
    assert_eq!(VecN::sum(&vs), Ok(VecN::new([9., 12.])));
    assert_eq!(VecN::mean(&vs), Ok(VecN::new([3., 4.])));
    assert_eq!(VecN::<2>::sum(&[]), Err(VectorError::EmptyInput));
    assert_eq!(VecN::<2>::mean(&[]), Err(VectorError::EmptyInput));
}

#[test]
fn test_vecn_conversion() {
    let v = Vector::from(vec![1., 2., 3.]);
    let fixed = VecN::<3>::try_from(&v).unwrap();
    assert_eq!(Vector::from(fixed), v);
    assert_eq!(
        VecN::<2>::try_from(&v),
        Err(VectorError::DimensionMismatch { left: 2, right: 3 })
    );
}

#[test]
fn test_vecn_serde() {
    let v = VecN::new([1.5, -2.0]);
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, "[1.5,-2.0]");
    assert_eq!(serde_json::from_str::<VecN<2>>(&json).unwrap(), v);
    assert!(serde_json::from_str::<VecN<3>>(&json).is_err());
}
