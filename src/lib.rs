//! Elementary operations on numeric vectors.
//!
//! [`Vector`] holds a runtime-length sequence of `f64`; operations that need
//! both operands to correspond elementwise return [`VectorError`] when the
//! lengths differ. [`VecN`] is the fixed-dimension counterpart, for which the
//! compiler enforces the lengths instead.
//!
//! ```
//! use vector_math::{distance, mean, Vector};
//!
//! let a = Vector::from([3.0, 0.0]);
//! let b = Vector::from([0.0, 4.0]);
//! assert_eq!(distance(&a, &b), Ok(5.0));
//! assert_eq!(mean(&[a, b]), Ok(Vector::from([1.5, 2.0])));
//! ```
mod error;
mod math;
mod reduce;
mod vector;

pub use error::{Result, VectorError};
pub use math::VecN;
pub use reduce::{mean, sum};
pub use vector::{
    add, distance, dot, magnitude, scalar_mul, squared_distance, sub, sum_of_squares, Vector,
};
