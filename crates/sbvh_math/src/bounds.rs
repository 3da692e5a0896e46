//! Axis-aligned bounding boxes

use core::ops::{Add, AddAssign};

use bytemuck::{Pod, Zeroable};

use crate::vec_fixed::Vec3f;

/// Axis-Aligned Bounding Box
///
/// Valid iff `min <= max` on every axis. The empty box is inverted to
/// infinity so that growing it by anything yields exactly that thing.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct AABB {
    pub min: Vec3f,
    pub max: Vec3f,
}

impl AABB {
    /// Identity of union: contains nothing
    pub const EMPTY: Self = Self {
        min: Vec3f::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
        max: Vec3f::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
    };

    /// Create from min and max points
    #[inline]
    pub const fn new(min: Vec3f, max: Vec3f) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point
    pub fn from_points(points: &[Vec3f]) -> Self {
        let mut aabb = Self::EMPTY;
        for &p in points {
            aabb.grow(p);
        }
        aabb
    }

    /// Expand to contain `p`
    #[inline]
    pub fn grow(&mut self, p: Vec3f) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Expand to contain `other`. Growing by an empty box is a no-op.
    #[inline]
    pub fn grow_aabb(&mut self, other: &AABB) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Shrink to the overlap with `other`; the result is invalid if they
    /// are disjoint.
    #[inline]
    pub fn intersect(&mut self, other: &AABB) {
        self.min = self.min.max(other.min);
        self.max = self.max.min(other.max);
    }

    #[inline]
    pub fn valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }

    /// Volume, or 0 for an invalid box
    pub fn volume(&self) -> f32 {
        if !self.valid() {
            return 0.0;
        }
        let d = self.max - self.min;
        d.x * d.y * d.z
    }

    /// Surface area, or 0 for an invalid box
    pub fn area(&self) -> f32 {
        if !self.valid() {
            return 0.0;
        }
        let d = self.max - self.min;
        (d.x * d.y + d.y * d.z + d.z * d.x) * 2.0
    }

    #[inline]
    pub fn mid_point(&self) -> Vec3f {
        (self.min + self.max) * 0.5
    }
}

impl Default for AABB {
    #[inline]
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Union
impl Add for AABB {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: Self) -> Self {
        self.grow_aabb(&rhs);
        self
    }
}

impl AddAssign for AABB {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.grow_aabb(&rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grown_by_point() {
        let p = Vec3f::new(1.0, -2.0, 3.0);
        let mut b = AABB::default();
        assert!(!b.valid());
        b.grow(p);
        assert!(b.valid());
        assert_eq!(b.min, p);
        assert_eq!(b.max, p);
        assert_eq!(b.volume(), 0.0);
    }

    #[test]
    fn test_two_points() {
        let a = Vec3f::new(0.0, 5.0, -1.0);
        let c = Vec3f::new(2.0, 1.0, 3.0);
        let b = AABB::from_points(&[a, c]);
        assert!(b.valid());
        assert_eq!(b.min, Vec3f::new(0.0, 1.0, -1.0));
        assert_eq!(b.max, Vec3f::new(2.0, 5.0, 3.0));
        assert_eq!(b.volume(), 2.0 * 4.0 * 4.0);
        assert_eq!(b.area(), 2.0 * (8.0 + 16.0 + 8.0));
        assert_eq!(b.mid_point(), Vec3f::new(1.0, 3.0, 1.0));
    }

    #[test]
    fn test_invalid_has_zero_measure() {
        let b = AABB::new(Vec3f::new(1.0, 0.0, 0.0), Vec3f::new(0.0, 1.0, 1.0));
        assert!(!b.valid());
        assert_eq!(b.volume(), 0.0);
        assert_eq!(b.area(), 0.0);
        assert_eq!(AABB::EMPTY.volume(), 0.0);
        assert_eq!(AABB::EMPTY.area(), 0.0);
    }

    #[test]
    fn test_union_identity_and_commutes() {
        let a = AABB::new(Vec3f::zero(), Vec3f::splat(1.0));
        let b = AABB::new(Vec3f::splat(-1.0), Vec3f::new(0.5, 2.0, 0.5));
        assert_eq!(a + AABB::EMPTY, a);
        assert_eq!(AABB::EMPTY + a, a);
        assert_eq!(a + b, b + a);
        assert_eq!((a + b).min, Vec3f::splat(-1.0));
        assert_eq!((a + b).max, Vec3f::new(1.0, 2.0, 1.0));
    }

    #[test]
    fn test_intersect() {
        let mut a = AABB::new(Vec3f::zero(), Vec3f::splat(2.0));
        a.intersect(&AABB::new(Vec3f::splat(1.0), Vec3f::splat(3.0)));
        assert_eq!(a, AABB::new(Vec3f::splat(1.0), Vec3f::splat(2.0)));

        a.intersect(&AABB::new(Vec3f::splat(5.0), Vec3f::splat(6.0)));
        assert!(!a.valid());
        assert_eq!(a.area(), 0.0);
    }
}
