//! Rays and ray query results
//!
//! Both types are `repr(C)` and `Pod` so batches can be uploaded as-is.

use bytemuck::{Pod, Zeroable};

use crate::vec_fixed::Vec3f;

/// Sentinel id of a [`RayResult`] that hit nothing
pub const RAY_NO_HIT: i32 = -1;

/// Ray with a parametric validity interval `[tmin, tmax]`
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Ray {
    pub origin: Vec3f,
    pub tmin: f32,
    /// Not required to be normalized
    pub direction: Vec3f,
    pub tmax: f32,
}

impl Ray {
    /// Ray over `[0, inf)`
    #[inline]
    pub fn new(origin: Vec3f, direction: Vec3f) -> Self {
        Self {
            origin,
            tmin: 0.0,
            direction,
            tmax: f32::INFINITY,
        }
    }

    /// Same ray restricted to `[tmin, tmax]`
    #[inline]
    pub fn with_range(mut self, tmin: f32, tmax: f32) -> Self {
        self.tmin = tmin;
        self.tmax = tmax;
        self
    }

    /// Empty the interval so no query can report a hit
    ///
    /// `tmax` lands one below `tmin` where that is representable. A `tmin`
    /// too large for `tmin - 1` to differ falls back to `tmax = -inf`, and a
    /// `tmin` of `-inf` or NaN is replaced by `+inf`.
    pub fn degenerate(&mut self) {
        let below = self.tmin - 1.0;
        self.tmax = if below < self.tmin { below } else { f32::NEG_INFINITY };
        if !(self.tmax < self.tmin) {
            self.tmin = f32::INFINITY;
        }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.tmax < self.tmin
    }

    /// Point at parameter `t`
    #[inline]
    pub fn at(&self, t: f32) -> Vec3f {
        self.origin + self.direction * t
    }
}

/// Closest hit of a ray query: primitive id and distance
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct RayResult {
    pub id: i32,
    pub t: f32,
    #[cfg_attr(feature = "serde", serde(skip))]
    pad_a: i32,
    #[cfg_attr(feature = "serde", serde(skip))]
    pad_b: i32,
}

impl RayResult {
    #[inline]
    pub fn new(id: i32, t: f32) -> Self {
        Self {
            id,
            t,
            pad_a: 0,
            pad_b: 0,
        }
    }

    #[inline]
    pub fn hit(&self) -> bool {
        self.id != RAY_NO_HIT
    }

    /// Forget the hit; `t` is left as is
    #[inline]
    pub fn clear(&mut self) {
        self.id = RAY_NO_HIT;
    }
}

impl Default for RayResult {
    #[inline]
    fn default() -> Self {
        Self::new(RAY_NO_HIT, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate() {
        let mut ray = Ray::new(Vec3f::zero(), Vec3f::new(0.0, 0.0, 1.0)).with_range(0.5, 10.0);
        assert!(!ray.is_degenerate());
        ray.degenerate();
        assert!(ray.is_degenerate());
        assert_eq!(ray.tmax, -0.5);
    }

    #[test]
    fn test_degenerate_extreme_tmin() {
        let base = Ray::new(Vec3f::zero(), Vec3f::new(0.0, 0.0, 1.0));
        for tmin in [1e8, -1e9, 5e7, 3e38, f32::MAX, f32::INFINITY, f32::NEG_INFINITY, f32::NAN] {
            let mut ray = base.with_range(tmin, f32::INFINITY);
            ray.degenerate();
            assert!(ray.is_degenerate(), "tmin {tmin}: [{}, {}]", ray.tmin, ray.tmax);
        }

        let mut big = base.with_range(1e8, f32::INFINITY);
        big.degenerate();
        assert_eq!(big.tmin, 1e8);
        assert_eq!(big.tmax, f32::NEG_INFINITY);
    }

    #[test]
    fn test_at() {
        let ray = Ray::new(Vec3f::new(1.0, 0.0, 0.0), Vec3f::new(0.0, 2.0, 0.0));
        assert_eq!(ray.at(1.5), Vec3f::new(1.0, 3.0, 0.0));
    }

    #[test]
    fn test_ray_result() {
        let mut r = RayResult::default();
        assert!(!r.hit());
        r = RayResult::new(7, 2.5);
        assert!(r.hit());
        r.clear();
        assert!(!r.hit());
        assert_eq!(r.t, 2.5);
    }

    #[test]
    fn test_layout() {
        assert_eq!(core::mem::size_of::<Ray>(), 32);
        assert_eq!(core::mem::size_of::<RayResult>(), 16);
        let rays = [Ray::default(); 2];
        let floats: &[f32] = bytemuck::cast_slice(&rays);
        assert_eq!(floats.len(), 16);
    }
}
