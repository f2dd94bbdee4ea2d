use crate::error::Result;
use crate::math::{combine, pairwise, total};
use core::ops::{Deref, Mul, Neg};
use core::iter::{self, FromIterator};
use serde::{Deserialize, Serialize};

/// A vector of `f64` whose length is only known at runtime.
///
/// Operations that combine two vectors elementwise check that the lengths
/// match and return [`VectorError::DimensionMismatch`] otherwise. Every
/// operation returns a new value; operands are never modified.
///
/// [`VectorError::DimensionMismatch`]: crate::VectorError::DimensionMismatch
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector(Vec<f64>);

impl Vector {
    #[inline]
    pub fn new(elements: Vec<f64>) -> Self {
        Self(elements)
    }

    /// A vector of `len` zeros.
    #[inline]
    pub fn zero(len: usize) -> Self {
        Self(iter::repeat(0.0).take(len).collect())
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    pub fn add(&self, rhs: &Vector) -> Result<Vector> {
        pairwise("add", &self.0, &rhs.0, |a, b| a + b).map(Self)
    }

    pub fn sub(&self, rhs: &Vector) -> Result<Vector> {
        pairwise("sub", &self.0, &rhs.0, |a, b| a - b).map(Self)
    }

    /// Elementwise product, only used to build the dot product.
    pub(crate) fn mul(&self, rhs: &Vector) -> Result<Vector> {
        pairwise("mul", &self.0, &rhs.0, |a, b| a * b).map(Self)
    }

    pub fn scalar_mul(&self, x: f64) -> Vector {
        self.0.iter().map(|&v| v * x).collect()
    }

    pub fn dot(&self, rhs: &Vector) -> Result<f64> {
        self.mul(rhs).map(|product| total(&product))
    }

    /// `self.dot(self)`, which cannot fail.
    pub fn sum_of_squares(&self) -> f64 {
        total(&combine(&self.0, &self.0, |a, b| a * b))
    }

    /// Euclidean norm.
    pub fn magnitude(&self) -> f64 {
        self.sum_of_squares().sqrt()
    }

    pub fn squared_distance(&self, rhs: &Vector) -> Result<f64> {
        self.sub(rhs).map(|diff| diff.sum_of_squares())
    }

    pub fn distance(&self, rhs: &Vector) -> Result<f64> {
        self.squared_distance(rhs).map(f64::sqrt)
    }

    /// Returns true if both vectors have the same length and no pair of
    /// elements differs by more than `max_abs_diff`.
    pub fn abs_diff_eq(&self, rhs: &Vector, max_abs_diff: f64) -> bool {
        self.len() == rhs.len()
            && self
                .0
                .iter()
                .zip(rhs.0.iter())
                .all(|(&lhs, &rhs)| (lhs - rhs).abs() <= max_abs_diff)
    }
}

impl Deref for Vector {
    type Target = [f64];
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<f64>> for Vector {
    #[inline]
    fn from(elements: Vec<f64>) -> Self {
        Self(elements)
    }
}

impl From<&[f64]> for Vector {
    #[inline]
    fn from(elements: &[f64]) -> Self {
        Self(elements.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    #[inline]
    fn from(elements: [f64; N]) -> Self {
        Self(elements.to_vec())
    }
}

impl From<Vector> for Vec<f64> {
    #[inline]
    fn from(v: Vector) -> Self {
        v.0
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        self.scalar_mul(rhs)
    }
}

impl Mul<&Vector> for f64 {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: &Vector) -> Self::Output {
        rhs.scalar_mul(self)
    }
}

impl Neg for &Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Self::Output {
        self.scalar_mul(-1.0)
    }
}

pub fn add(v1: &Vector, v2: &Vector) -> Result<Vector> {
    v1.add(v2)
}

pub fn sub(v1: &Vector, v2: &Vector) -> Result<Vector> {
    v1.sub(v2)
}

pub fn scalar_mul(x: f64, v: &Vector) -> Vector {
    v.scalar_mul(x)
}

pub fn dot(v1: &Vector, v2: &Vector) -> Result<f64> {
    v1.dot(v2)
}

pub fn sum_of_squares(v: &Vector) -> f64 {
    v.sum_of_squares()
}

pub fn magnitude(v: &Vector) -> f64 {
    v.magnitude()
}

pub fn squared_distance(v1: &Vector, v2: &Vector) -> Result<f64> {
    v1.squared_distance(v2)
}

pub fn distance(v1: &Vector, v2: &Vector) -> Result<f64> {
    v1.distance(v2)
}
