//! Scalar and vector math foundations.
//!
//! Layered bottom-up: [`scalar`] holds the epsilon-tolerant comparison
//! utilities, [`Vector2`] and [`Vector3`] build the value types on top of
//! them. All comparisons against machine epsilon use [`f64::EPSILON`].

pub mod scalar;
pub mod vector2;
pub mod vector3;

pub use vector2::Vector2;
pub use vector3::Vector3;
