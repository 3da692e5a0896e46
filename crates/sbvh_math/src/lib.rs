//! # sbvh_math - Vector/Matrix Kernel for Ray Queries
//!
//! Dimension-generic fixed-size vectors and square matrices, plus the
//! geometric primitives a split-BVH builder and its traversal share:
//! bounding boxes, rays, hit records and intersection routines.
//!
//! ## Layout
//!
//! - [`Vector<T, L>`] is `[T; L]`; [`Matrix<T, L>`] is `L` columns of that.
//! - The named types (`Vec3f`, `Mat4d`, ...) are aliases with field access
//!   (`v.x`, `m.m03`) over the same storage.
//! - Everything is `Pod`, so slices of rays or boxes cast straight to bytes.
//!
//! ## Numeric policy
//!
//! Edge cases are total rather than fallible: `rcp(0) == 0`, the zero vector
//! normalizes to zero, a singular matrix inverts to zero and an invalid box
//! has zero area. Only malformed foreign input (wrong slice lengths, checked
//! index lookups) produces a [`MathError`].
//!
//! ## Example
//!
//! ```
//! use sbvh_math::prelude::*;
//!
//! let m = Mat4f::translate(Vec3f::new(1.0, 2.0, 3.0));
//! assert_eq!(m * Vec3f::new(0.0, 0.0, 0.0), Vec3f::new(1.0, 2.0, 3.0));
//!
//! let ray = Ray::new(Vec3f::new(0.5, 0.5, -1.0), Vec3f::new(0.0, 0.0, 1.0));
//! let aabb = AABB::new(Vec3f::zero(), Vec3f::splat(1.0));
//! assert!(box_hit(ray_box(&aabb, &ray)));
//! ```

#[macro_use]
mod macros;

pub mod error;
pub mod scalar;
pub mod vector;
pub mod vec_fixed;
pub mod matrix;
pub mod mat_fixed;
pub mod bounds;
pub mod ray;
pub mod config;
pub mod intersect;

pub use error::{MathError, Result};
pub use scalar::{Float, Integer, Scalar};
pub use vector::*;
pub use vec_fixed::*;
pub use matrix::*;
pub use mat_fixed::*;
pub use bounds::*;
pub use ray::*;
pub use config::*;
pub use intersect::*;

pub mod prelude {
    pub use crate::scalar::{clamp, lerp, max, min, rcp, sqr, Float, Integer, Scalar};
    pub use crate::vector::Vector;
    pub use crate::vec_fixed::{Vec2d, Vec2f, Vec2i, Vec3d, Vec3f, Vec3i, Vec4d, Vec4f, Vec4i};
    pub use crate::matrix::Matrix;
    pub use crate::mat_fixed::{Mat2d, Mat2f, Mat3d, Mat3f, Mat4d, Mat4f};
    pub use crate::bounds::AABB;
    pub use crate::ray::{Ray, RayResult, RAY_NO_HIT};
    pub use crate::config::IntersectConfig;
    pub use crate::intersect::{
        box_hit, ray_box, ray_triangle, ray_triangle_with, ray_triangle_woop, triangle_hit,
        woop_planes,
    };
    pub use crate::error::MathError;
}
