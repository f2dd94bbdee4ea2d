use crate::error::VectorError;
use crate::vector::Vector;
use core::convert::TryFrom;
use glam::{DVec2, DVec3, DVec4};

macro_rules! impl_glam_conversions {
    ($glam:ty, $dim:expr) => {
        impl From<$glam> for Vector {
            #[inline]
            fn from(v: $glam) -> Self {
                Vector::from(v.to_array())
            }
        }

        impl TryFrom<&Vector> for $glam {
            type Error = VectorError;

            fn try_from(v: &Vector) -> Result<Self, Self::Error> {
                if v.len() != $dim {
                    return Err(VectorError::DimensionMismatch {
                        left: $dim,
                        right: v.len(),
                    });
                }
                Ok(<$glam>::from_slice(v.as_slice()))
            }
        }
    };
}

impl_glam_conversions!(DVec2, 2);
impl_glam_conversions!(DVec3, 3);
impl_glam_conversions!(DVec4, 4);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_glam_roundtrip() {
        let v = Vector::from(DVec3::new(3.0, 0.0, 4.0));
        assert_eq!(v.as_slice(), &[3.0, 0.0, 4.0]);
        assert_eq!(v.magnitude(), DVec3::new(3.0, 0.0, 4.0).length());
        assert_eq!(DVec3::try_from(&v), Ok(DVec3::new(3.0, 0.0, 4.0)));
    }

    #[test]
    fn test_glam_agrees_with_vector() {
        let a = DVec4::new(1.0, 2.0, 3.0, 4.0);
        let b = DVec4::new(-2.0, 0.5, 7.0, 1.0);
        let (va, vb) = (Vector::from(a), Vector::from(b));
        assert_eq!(va.dot(&vb).unwrap(), a.dot(b));
        assert_eq!(va.distance(&vb).unwrap(), a.distance(b));
        assert_eq!(DVec4::try_from(&va.add(&vb).unwrap()), Ok(a + b));
    }

    #[test]
    fn test_glam_dimension_mismatch() {
        let v = Vector::from(vec![1.0, 2.0, 3.0]);
        assert_eq!(
            DVec2::try_from(&v),
            Err(VectorError::DimensionMismatch { left: 2, right: 3 })
        );
    }
}
